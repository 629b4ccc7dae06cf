//! Integration tests for net-cli-tools
//!
//! These tests run both pipelines end to end on the fixture files.

use net_cli_tools::{
    models::{Action, FilterListModel, ListKind, Network},
    processing::{
        acl_to_prefix_list, aggregate_lines, select_top_n, symmetric_diff, FilterListDiffer,
    },
    ToolError,
};

fn read_fixture(name: &str) -> Vec<String> {
    let path = format!("tests/test_data/{name}");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {path}: {e}"))
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_aggregate_network_file() {
    let lines = read_fixture("networks.txt");
    let agg = aggregate_lines(&lines, 16, 22).expect("Failed to aggregate");

    assert_eq!(
        agg.good(),
        vec![
            "10.1.0.0/24",
            "10.1.1.0/24",
            "10.1.2.0/24",
            "10.1.3.0/24",
            "10.2.0.0/16",
            "192.168.1.0/24",
            "10.1.2.128/25",
        ]
    );
    assert_eq!(agg.bad(), vec!["not-a-network", "300.1.1.1/24"]);

    let slash22 = &agg.coverage[&Network::new("10.1.0.0/22").unwrap()];
    assert_eq!(slash22.matched_count(), 5);
    assert_eq!(slash22.unmatched, vec!["10.2.0.0/16", "192.168.1.0/24"]);

    let slash23 = &agg.coverage[&Network::new("10.1.2.0/23").unwrap()];
    assert_eq!(
        slash23.matched,
        vec!["10.1.2.0/24", "10.1.3.0/24", "10.1.2.128/25"]
    );
    assert!(agg.coverage.keys().all(|n| n.mask >= 16 && n.mask <= 22));
}

#[test]
fn test_top_n_over_network_file() {
    let lines = read_fixture("networks.txt");
    let agg = aggregate_lines(&lines, 16, 22).expect("Failed to aggregate");
    let top = select_top_n(&agg.coverage, 3);

    let names: Vec<String> = top.iter().map(|e| e.network.to_string()).collect();
    assert_eq!(names, vec!["10.1.0.0/16", "10.1.0.0/17", "10.1.0.0/18"]);
    assert!(top.iter().all(|e| e.coverage.matched_count() == 5));

    // Same input, same answer.
    let again = select_top_n(&aggregate_lines(&lines, 16, 22).unwrap().coverage, 3);
    assert_eq!(top, again);
}

#[test]
fn test_aggregate_rejects_bad_window() {
    let lines = read_fixture("networks.txt");
    assert_eq!(
        aggregate_lines(&lines, 24, 8).unwrap_err(),
        ToolError::InvalidBound { lower: 24, upper: 8 }
    );
}

#[test]
fn test_acl_diff_config_vs_show_output() {
    let a = FilterListModel::parse(&read_fixture("acl_a.txt"), ListKind::Acl);
    let b = FilterListModel::parse(&read_fixture("acl_b.txt"), ListKind::Acl);
    assert_eq!(a.name(), Some("MGMT-IN"));
    assert_eq!(b.name(), Some("MGMT-IN"));
    assert_eq!(a.statements().len(), 5);
    assert_eq!(b.statements().len(), 5);

    let diff = symmetric_diff(&a, "acl_a.txt", &b, "acl_b.txt").expect("Failed to diff");
    assert_eq!(diff.len(), 2);
    assert_eq!(
        diff[0].header,
        "permit 10.99.99.99 not in ACL MGMT-IN in file acl_b.txt"
    );
    assert_eq!(diff[0].line, " permit 10.99.99.99");
    assert_eq!(
        diff[1].header,
        "deny 10.99.99.99 not in ACL MGMT-IN in file acl_a.txt"
    );
    assert_eq!(diff[1].line, "    50 deny   10.99.99.99");
}

#[test]
fn test_prefix_list_diff() {
    let a = FilterListModel::parse(&read_fixture("pl_a.txt"), ListKind::PrefixList);
    let b = FilterListModel::parse(&read_fixture("pl_b.txt"), ListKind::PrefixList);

    // The ge/le line has 11 tokens and is skipped.
    assert_eq!(a.statements().len(), 3);
    assert!(a.has_key(Action::Deny, "0.0.0.0/0 le 32"));

    let forward = FilterListDiffer::new(&a)
        .compare(&b, "pl_b.txt")
        .expect("Failed to diff");
    assert!(forward.is_empty());

    let backward = FilterListDiffer::new(&b)
        .compare(&a, "pl_a.txt")
        .expect("Failed to diff");
    assert_eq!(backward.len(), 1);
    assert_eq!(
        backward[0].header,
        "permit 100.64.0.0/10 not in prefix-list CUSTOMER-IN-V2 in file pl_a.txt"
    );
    assert_eq!(
        backward[0].line,
        "ip prefix-list CUSTOMER-IN-V2 seq 30 permit 100.64.0.0/10"
    );
}

#[test]
fn test_acl_and_prefix_list_do_not_compare() {
    let acl = FilterListModel::parse(&read_fixture("acl_a.txt"), ListKind::Acl);
    let pl = FilterListModel::parse(&read_fixture("pl_a.txt"), ListKind::PrefixList);
    assert!(matches!(
        symmetric_diff(&acl, "acl_a.txt", &pl, "pl_a.txt"),
        Err(ToolError::TypeMismatch { .. })
    ));
}

#[test]
fn test_acl_to_prefix_list_file() {
    let acl = FilterListModel::parse(&read_fixture("acl_a.txt"), ListKind::Acl);
    assert_eq!(
        acl_to_prefix_list(&acl, None),
        vec![
            "ip prefix-list MGMT-IN permit 10.10.10.1/32",
            "ip prefix-list MGMT-IN permit 10.10.20.0/24 le 32",
            "ip prefix-list MGMT-IN permit 192.168.50.0/23 le 32",
            "ip prefix-list MGMT-IN deny 172.16.0.0/12 le 32",
            "ip prefix-list MGMT-IN permit 10.99.99.99/32",
        ]
    );
}

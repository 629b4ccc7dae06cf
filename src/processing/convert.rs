//! Standard ACL to prefix-list conversion.

use crate::models::{parse_addr, FilterListModel, ListKind, ANY_KEY};
use std::net::Ipv4Addr;

/// Prefix length guessed for a host entry from its first zero octet.
fn classful_len(addr: Ipv4Addr) -> u8 {
    match addr.octets() {
        [0, _, _, _] => 0,
        [_, 0, _, _] => 8,
        [_, _, 0, _] => 16,
        [_, _, _, 0] => 24,
        _ => 32,
    }
}

/// Render the statements of a standard ACL as `ip prefix-list` lines.
///
/// The list name defaults to the ACL name. Wildcard entries become
/// `<addr>/<len> le 32`; entries whose wildcard has no prefix length are
/// dropped. `any` becomes `0.0.0.0/0 le 32`. Returns an empty list for a
/// prefix-list model.
pub fn acl_to_prefix_list(acl: &FilterListModel, new_name: Option<&str>) -> Vec<String> {
    if acl.kind() != ListKind::Acl {
        log::warn!("acl_to_prefix_list() called with a {}", acl.kind());
        return Vec::new();
    }
    let name = new_name.or(acl.name()).unwrap_or("unnamed");
    log::debug!("acl_to_prefix_list() name={name}");

    let mut lines = Vec::new();
    for statement in acl.statements() {
        if statement.key == ANY_KEY {
            lines.push(format!(
                "ip prefix-list {name} {action} 0.0.0.0/0 le 32",
                action = statement.action
            ));
            continue;
        }
        let rendered = match statement.key.split_once('/') {
            Some((addr, len)) => format!(
                "ip prefix-list {name} {action} {addr}/{len} le 32",
                action = statement.action
            ),
            None => match parse_addr(&statement.key) {
                Some(addr) => format!(
                    "ip prefix-list {name} {action} {addr}/{len}",
                    action = statement.action,
                    len = classful_len(addr)
                ),
                None => continue,
            },
        };
        lines.push(rendered);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classful_len() {
        assert_eq!(classful_len(Ipv4Addr::new(0, 1, 2, 3)), 0);
        assert_eq!(classful_len(Ipv4Addr::new(10, 0, 0, 0)), 8);
        assert_eq!(classful_len(Ipv4Addr::new(172, 16, 0, 0)), 16);
        assert_eq!(classful_len(Ipv4Addr::new(192, 168, 1, 0)), 24);
        assert_eq!(classful_len(Ipv4Addr::new(192, 168, 1, 7)), 32);
    }

    #[test]
    fn test_acl_to_prefix_list() {
        let acl = FilterListModel::parse(
            &[
                "ip access-list standard EDGE",
                " permit 10.0.0.0",
                " permit 192.168.1.7",
                " deny 172.16.0.0 0.0.255.255",
                " deny 172.17.0.0 0.0.255.0",
                " permit any",
            ],
            ListKind::Acl,
        );
        assert_eq!(
            acl_to_prefix_list(&acl, None),
            vec![
                "ip prefix-list EDGE permit 10.0.0.0/8",
                "ip prefix-list EDGE permit 192.168.1.7/32",
                "ip prefix-list EDGE deny 172.16.0.0/16 le 32",
                "ip prefix-list EDGE permit 0.0.0.0/0 le 32",
            ]
        );
        assert_eq!(
            acl_to_prefix_list(&acl, Some("PL-EDGE"))[0],
            "ip prefix-list PL-EDGE permit 10.0.0.0/8"
        );
    }

    #[test]
    fn test_prefix_list_model_is_not_converted() {
        let pl = FilterListModel::parse(
            &["ip prefix-list PL seq 5 permit 10.0.0.0/8"],
            ListKind::PrefixList,
        );
        assert!(acl_to_prefix_list(&pl, None).is_empty());
    }
}

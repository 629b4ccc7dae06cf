//! ACL and prefix-list statement model.
//!
//! A [`FilterListModel`] is parsed once from the raw lines of one file and is
//! read-only afterwards. Each statement keeps the index of the line it came
//! from so the line can be printed unchanged in diff output.

use super::mask_table::prefix_from_inverse_mask;
use super::network::{canonicalize, parse_addr};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

lazy_static! {
    static ref ACL_HEADER_RE: Regex =
        Regex::new(r"^(?:ip access-list standard|Standard IP access list)\s+(\S+)")
            .expect("Invalid Regex?");
}

/// Key of a `permit any` / `deny any` statement.
pub const ANY_KEY: &str = "any";

/// Which grammar a list is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ListKind {
    Acl,
    PrefixList,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ListKind::Acl => write!(f, "ACL"),
            ListKind::PrefixList => write!(f, "prefix-list"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    Permit,
    Deny,
}

impl Action {
    /// Both actions in the order they are compared.
    pub const ALL: [Action; 2] = [Action::Permit, Action::Deny];

    fn from_token(token: &str) -> Option<Action> {
        match token {
            "permit" => Some(Action::Permit),
            "deny" => Some(Action::Deny),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Permit => write!(f, "permit"),
            Action::Deny => write!(f, "deny"),
        }
    }
}

/// One permit/deny statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterStatement {
    /// Index of the source line in [`FilterListModel::raw_lines`].
    pub line_index: usize,
    pub action: Action,
    /// Match expression with sequence numbers and spacing removed.
    pub key: String,
    /// Prefix-list name carried on the statement's own line.
    pub list_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FilterListModel {
    kind: ListKind,
    name: Option<String>,
    raw_lines: Vec<String>,
    statements: Vec<FilterStatement>,
    permit_keys: HashSet<String>,
    deny_keys: HashSet<String>,
}

impl FilterListModel {
    /// Parse the lines of one ACL or prefix-list file.
    ///
    /// Lines that fit neither the header nor a statement shape are logged and
    /// skipped. When several headers appear the last one names the list.
    /// Prefix-list statements also keep the name found on their own line.
    pub fn parse<S: AsRef<str>>(lines: &[S], kind: ListKind) -> FilterListModel {
        log::debug!("FilterListModel::parse() kind={kind} lines={}", lines.len());
        let raw_lines: Vec<String> = lines.iter().map(|l| l.as_ref().to_string()).collect();
        let mut name = None;
        let mut statements = Vec::new();

        for (index, line) in raw_lines.iter().enumerate() {
            let parsed = match kind {
                ListKind::Acl => parse_acl_line(line),
                ListKind::PrefixList => parse_prefix_list_line(line),
            };
            match parsed {
                Parsed::Header(n) => name = Some(n),
                Parsed::Statement {
                    action,
                    key,
                    list_name,
                } => {
                    if let Some(n) = &list_name {
                        name = Some(n.clone());
                    }
                    statements.push(FilterStatement {
                        line_index: index,
                        action,
                        key,
                        list_name,
                    });
                }
                Parsed::Blank => {}
                Parsed::Skip(reason) => {
                    log::warn!("Line {index}, {reason}: {line:?}");
                }
            }
        }

        let keys_for = |action: Action| -> HashSet<String> {
            statements
                .iter()
                .filter(|s| s.action == action)
                .map(|s| s.key.clone())
                .collect()
        };
        let permit_keys = keys_for(Action::Permit);
        let deny_keys = keys_for(Action::Deny);

        log::info!(
            "Parsed {kind} {name}: {permit} permit, {deny} deny statements",
            name = name.as_deref().unwrap_or("unnamed"),
            permit = permit_keys.len(),
            deny = deny_keys.len()
        );

        FilterListModel {
            kind,
            name,
            raw_lines,
            statements,
            permit_keys,
            deny_keys,
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn raw_lines(&self) -> &[String] {
        &self.raw_lines
    }

    pub fn statements(&self) -> &[FilterStatement] {
        &self.statements
    }

    /// Statements with the given action, in file order.
    pub fn statements_with(&self, action: Action) -> impl Iterator<Item = &FilterStatement> {
        self.statements.iter().filter(move |s| s.action == action)
    }

    pub fn keys(&self, action: Action) -> &HashSet<String> {
        match action {
            Action::Permit => &self.permit_keys,
            Action::Deny => &self.deny_keys,
        }
    }

    pub fn has_key(&self, action: Action, key: &str) -> bool {
        self.keys(action).contains(key)
    }

    /// The original text of a statement's line.
    pub fn raw_line(&self, statement: &FilterStatement) -> &str {
        self.raw_lines
            .get(statement.line_index)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

enum Parsed {
    Header(String),
    Statement {
        action: Action,
        key: String,
        list_name: Option<String>,
    },
    Blank,
    Skip(&'static str),
}

fn parse_acl_line(line: &str) -> Parsed {
    let collapsed = line.split_whitespace().join(" ");
    if collapsed.is_empty() {
        return Parsed::Blank;
    }
    if let Some(caps) = ACL_HEADER_RE.captures(&collapsed) {
        return Parsed::Header(caps[1].to_string());
    }

    // Show output: "10 permit 10.1.0.0, wildcard bits 0.0.255.255 (3 matches)"
    let body = collapsed.split(" (").next().unwrap_or_default();
    let mut tokens: Vec<&str> = body
        .split(' ')
        .filter(|t| *t != "wildcard" && *t != "bits")
        .map(|t| t.trim_end_matches(','))
        .collect();
    if tokens.len() > 1 && tokens[0].chars().all(|c| c.is_ascii_digit()) {
        tokens.remove(0);
    }
    let Some(action) = tokens.first().and_then(|t| Action::from_token(t)) else {
        return Parsed::Skip("not a permit/deny statement");
    };

    let key = match tokens[1..] {
        ["any"] => ANY_KEY.to_string(),
        [addr] | ["host", addr] => match parse_addr(addr) {
            Some(addr) => addr.to_string(),
            None => return Parsed::Skip("invalid host address"),
        },
        [addr, inverse] => {
            let Some(addr) = parse_addr(addr) else {
                return Parsed::Skip("invalid network address");
            };
            let Some(len) = prefix_from_inverse_mask(inverse) else {
                return Parsed::Skip("unresolved inverse mask");
            };
            format!("{}/{}", canonicalize(addr, len), len)
        }
        _ => return Parsed::Skip("did not match a statement length"),
    };

    Parsed::Statement {
        action,
        key,
        list_name: None,
    }
}

fn parse_prefix_list_line(line: &str) -> Parsed {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let key = match tokens.len() {
        0 => return Parsed::Blank,
        9 => tokens[6..9].join(" "),
        7 => tokens[6].to_string(),
        _ => return Parsed::Skip("did not match a statement length"),
    };
    match Action::from_token(tokens[5]) {
        Some(action) => Parsed::Statement {
            action,
            key,
            list_name: Some(tokens[2].to_string()),
        },
        None => Parsed::Skip("not a permit/deny statement"),
    }
}

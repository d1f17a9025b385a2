//! Compiled tag-query predicate tree.

use std::collections::BTreeSet;
use std::fmt;

/// A compiled tag query.
///
/// The tree is immutable once built; evaluation is a pure function of the
/// supplied tag set. Tag leaves match case-sensitively against whatever
/// form the caller indexed (the CLI lowercases both sides).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Membership test for a single tag (stored with its leading `@`).
    Tag(String),
    /// All children must match.
    And(Vec<Predicate>),
    /// At least one child must match.
    Or(Vec<Predicate>),
    /// The child must not match.
    Not(Box<Predicate>),
}

impl Predicate {
    /// Evaluates the predicate against a set of tag strings.
    pub fn matches(&self, tags: &BTreeSet<String>) -> bool {
        match self {
            Predicate::Tag(name) => tags.contains(name),
            Predicate::And(children) => children.iter().all(|c| c.matches(tags)),
            Predicate::Or(children) => children.iter().any(|c| c.matches(tags)),
            Predicate::Not(child) => !child.matches(tags),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Tag(name) => write!(f, "{}", name),
            Predicate::And(children) => {
                let parts: Vec<_> = children.iter().map(|c| c.to_string()).collect();
                write!(f, "({})", parts.join(" & "))
            }
            Predicate::Or(children) => {
                let parts: Vec<_> = children.iter().map(|c| c.to_string()).collect();
                write!(f, "({})", parts.join(" | "))
            }
            Predicate::Not(child) => write!(f, "-{}", child),
        }
    }
}

//! Boolean tag-filter expressions: `@a & -@b | (@c & @d)`.
//!
//! A query is compiled once into a [`Predicate`] tree and then evaluated
//! against any number of tag sets. The grammar supports `&` (and), `|` (or),
//! `-` (not, binding a single following tag or group) and parenthesized
//! grouping; `-` binds tightest, then `&`, then `|`.

mod parser;
mod predicate;

pub use parser::{ParseError, compile};
pub use predicate::Predicate;

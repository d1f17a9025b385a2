//! Query compiler: text to [`Predicate`] tree.
//!
//! Parsing happens in stages. The input is tokenized, `-` is bound to the
//! operand that follows it, the token list is split on `|`, each run between
//! `|`s is reduced to an `&` chain, and parenthesized groups are compiled
//! recursively from their raw substring.

use crate::query::Predicate;
use thiserror::Error;

/// Maximum parenthesis nesting before compilation gives up.
const MAX_DEPTH: usize = 32;

/// Error returned when a query does not compile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unmatched parenthesis at '{fragment}'")]
    UnmatchedParen { fragment: String },

    #[error("unexpected input at '{fragment}'")]
    UnexpectedInput { fragment: String },

    #[error("'-' must be followed by a tag or a parenthesized group")]
    DanglingNot,

    #[error("expected '&' or '|' before '{fragment}'")]
    ExpectedOperator { fragment: String },

    #[error("missing operand near '{fragment}'")]
    MissingOperand { fragment: String },

    #[error("empty query")]
    Empty,

    #[error("query nesting exceeds {MAX_DEPTH} levels")]
    TooDeep,
}

/// Compiles a query string into a [`Predicate`].
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found; an empty or
/// all-whitespace query is [`ParseError::Empty`].
pub fn compile(query: &str) -> Result<Predicate, ParseError> {
    parse_at_depth(query, 0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Tag(String),
    Group(String),
    And,
    Or,
    Not,
}

/// A tag or group, possibly under one or more `-`s. Groups stay as raw
/// substrings until the run structure around them is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Operand {
    Tag(String),
    Group(String),
    Not(Box<Operand>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Term {
    Operand(Operand),
    And,
    Or,
}

fn parse_at_depth(query: &str, depth: usize) -> Result<Predicate, ParseError> {
    if depth > MAX_DEPTH {
        return Err(ParseError::TooDeep);
    }

    let tokens = tokenize(query)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    let terms = bind_not(tokens)?;

    let mut alternatives = Vec::new();
    for run in terms.split(|t| *t == Term::Or) {
        alternatives.push(reduce_run(run, depth)?);
    }

    if alternatives.len() == 1 {
        Ok(alternatives.pop().expect("one alternative"))
    } else {
        Ok(Predicate::Or(alternatives))
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let c = rest.chars().next().expect("rest is non-empty");
        match c {
            '&' => {
                tokens.push(Token::And);
                rest = &rest[1..];
            }
            '|' => {
                tokens.push(Token::Or);
                rest = &rest[1..];
            }
            '-' => {
                tokens.push(Token::Not);
                rest = &rest[1..];
            }
            '(' => {
                let close = find_closing_paren(rest).ok_or_else(|| {
                    ParseError::UnmatchedParen { fragment: rest.to_string() }
                })?;
                tokens.push(Token::Group(rest[1..close].to_string()));
                rest = &rest[close + 1..];
            }
            '@' => {
                let end = rest[1..]
                    .find(is_delimiter)
                    .map(|i| i + 1)
                    .unwrap_or(rest.len());
                if end == 1 {
                    return Err(ParseError::UnexpectedInput { fragment: rest.to_string() });
                }
                tokens.push(Token::Tag(rest[..end].to_string()));
                rest = &rest[end..];
            }
            _ => {
                return Err(ParseError::UnexpectedInput { fragment: rest.to_string() });
            }
        }
        rest = rest.trim_start();
    }

    Ok(tokens)
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '&' | '|' | '(' | ')' | '-')
}

/// Index of the `)` matching the `(` that `s` starts with.
fn find_closing_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Attaches each `-` to the single operand that follows it.
fn bind_not(tokens: Vec<Token>) -> Result<Vec<Term>, ParseError> {
    let mut terms = Vec::new();
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        match token {
            Token::Not => {
                let mut negations = 1;
                while iter.peek() == Some(&Token::Not) {
                    iter.next();
                    negations += 1;
                }
                let mut operand = match iter.next() {
                    Some(Token::Tag(s)) => Operand::Tag(s),
                    Some(Token::Group(s)) => Operand::Group(s),
                    _ => return Err(ParseError::DanglingNot),
                };
                for _ in 0..negations {
                    operand = Operand::Not(Box::new(operand));
                }
                terms.push(Term::Operand(operand));
            }
            Token::Tag(s) => terms.push(Term::Operand(Operand::Tag(s))),
            Token::Group(s) => terms.push(Term::Operand(Operand::Group(s))),
            Token::And => terms.push(Term::And),
            Token::Or => terms.push(Term::Or),
        }
    }

    Ok(terms)
}

/// Reduces one `|`-free run of terms to a predicate. The run must alternate
/// operand, `&`, operand, ...
fn reduce_run(run: &[Term], depth: usize) -> Result<Predicate, ParseError> {
    if run.is_empty() {
        return Err(ParseError::MissingOperand { fragment: "|".to_string() });
    }

    let mut operands = Vec::new();
    for (position, term) in run.iter().enumerate() {
        match (position % 2, term) {
            (0, Term::Operand(operand)) => operands.push(resolve(operand, depth)?),
            (0, Term::And) => {
                return Err(ParseError::MissingOperand { fragment: "&".to_string() });
            }
            (1, Term::And) => {}
            (1, Term::Operand(operand)) => {
                return Err(ParseError::ExpectedOperator { fragment: operand_fragment(operand) });
            }
            (_, Term::Or) => unreachable!("runs are split on Or"),
            _ => unreachable!("position is 0 or 1 mod 2"),
        }
    }
    if run.len() % 2 == 0 {
        // alternation means an even-length run ends with '&'
        return Err(ParseError::MissingOperand { fragment: "&".to_string() });
    }

    if operands.len() == 1 {
        Ok(operands.pop().expect("one operand"))
    } else {
        Ok(Predicate::And(operands))
    }
}

fn resolve(operand: &Operand, depth: usize) -> Result<Predicate, ParseError> {
    match operand {
        Operand::Tag(s) => Ok(Predicate::Tag(s.clone())),
        Operand::Group(inner) => parse_at_depth(inner, depth + 1),
        Operand::Not(inner) => Ok(Predicate::Not(Box::new(resolve(inner, depth)?))),
    }
}

fn operand_fragment(operand: &Operand) -> String {
    match operand {
        Operand::Tag(s) => s.clone(),
        Operand::Group(s) => format!("({})", s),
        Operand::Not(inner) => format!("-{}", operand_fragment(inner)),
    }
}

//! Token wildcard matching, compatible with NATS-style subjects.
//!
//! - `*` matches exactly one token
//! - `>` matches one or more trailing tokens and must be the last token
//! - anything else matches only the identical token (case-sensitive)

use crate::error::SubjectError;
use std::fmt;

pub const SINGLE_WILDCARD: &str = "*";
pub const TAIL_WILDCARD: &str = ">";

/// Returns `true` when `topic` is matched by `pattern`.
///
/// A `>` anywhere but the last position never matches.
pub fn matches(pattern: &str, topic: &str) -> bool {
    let mut pattern_tokens = pattern.split('.').peekable();
    let mut topic_tokens = topic.split('.');

    while let Some(p) = pattern_tokens.next() {
        if p == TAIL_WILDCARD {
            return pattern_tokens.peek().is_none() && topic_tokens.next().is_some();
        }
        let Some(t) = topic_tokens.next() else {
            return false;
        };
        if p != SINGLE_WILDCARD && p != t {
            return false;
        }
    }
    topic_tokens.next().is_none()
}

/// Check that `pattern` is well formed: no empty tokens and `>` only last.
pub fn validate_pattern(pattern: &str) -> Result<(), SubjectError> {
    let invalid = |reason: &str| SubjectError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };
    let tokens: Vec<&str> = pattern.split('.').collect();
    if tokens.iter().any(|t| t.is_empty()) {
        return Err(invalid("empty token"));
    }
    if let Some(pos) = tokens.iter().position(|t| *t == TAIL_WILDCARD) {
        if pos + 1 != tokens.len() {
            return Err(invalid("'>' must be the last token"));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Single,
    Tail,
}

/// A validated, pre-tokenised pattern for repeated matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn new(pattern: impl Into<String>) -> Result<Self, SubjectError> {
        let raw = pattern.into();
        validate_pattern(&raw)?;
        let tokens = raw
            .split('.')
            .map(|t| match t {
                SINGLE_WILDCARD => Token::Single,
                TAIL_WILDCARD => Token::Tail,
                lit => Token::Literal(lit.to_string()),
            })
            .collect();
        Ok(Self { raw, tokens })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// `true` when the pattern has no wildcard tokens.
    pub fn is_literal(&self) -> bool {
        self.tokens.iter().all(|t| matches!(t, Token::Literal(_)))
    }

    pub fn matches(&self, topic: &str) -> bool {
        let mut topic_tokens = topic.split('.');
        for token in &self.tokens {
            match token {
                // validated: Tail is always last
                Token::Tail => return topic_tokens.next().is_some(),
                Token::Single => {
                    if topic_tokens.next().is_none() {
                        return false;
                    }
                }
                Token::Literal(lit) => match topic_tokens.next() {
                    Some(t) if t == lit => {}
                    _ => return false,
                },
            }
        }
        topic_tokens.next().is_none()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for Pattern {
    type Err = SubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_wildcard_matches_one_token() {
        assert!(matches("a.*.c", "a.b.c"));
        assert!(!matches("a.*.c", "a.b.x.c"));
        assert!(!matches("a.*.c", "a.c"));
    }

    #[test]
    fn tail_wildcard_needs_at_least_one_token() {
        assert!(matches("a.>", "a.b.c.d"));
        assert!(matches("a.>", "a.b"));
        assert!(!matches("a.>", "a"));
        assert!(matches(">", "a"));
    }

    #[test]
    fn literals_are_case_sensitive_and_exact() {
        assert!(matches("blocks.1.2", "blocks.1.2"));
        assert!(!matches("blocks.1.2", "Blocks.1.2"));
        assert!(!matches("blocks.1", "blocks.1.2"));
        assert!(!matches("blocks.1.2", "blocks.1"));
    }

    #[test]
    fn non_terminal_tail_never_matches() {
        assert!(!matches("a.>.c", "a.b.c"));
        assert!(validate_pattern("a.>.c").is_err());
    }

    #[test]
    fn validate_rejects_empty_tokens() {
        assert!(validate_pattern("a..b").is_err());
        assert!(validate_pattern("").is_err());
        assert!(validate_pattern("a.*.>").is_ok());
    }

    #[test]
    fn compiled_pattern_agrees_with_matches() {
        let cases = [
            ("a.*.c", "a.b.c"),
            ("a.*.c", "a.b.x.c"),
            ("a.>", "a.b.c.d"),
            ("a.>", "a"),
            ("inputs.coin.*.>", "inputs.coin.1.0xab.2"),
            ("inputs.coin.*.>", "inputs.coin.1"),
        ];
        for (p, t) in cases {
            let pattern: Pattern = p.parse().unwrap();
            assert_eq!(pattern.matches(t), matches(p, t), "{p} vs {t}");
        }
        assert!(Pattern::new("blocks.1").unwrap().is_literal());
        assert!(!Pattern::new("blocks.*").unwrap().is_literal());
    }
}

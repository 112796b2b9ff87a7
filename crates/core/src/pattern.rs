//! Compiles lexicon terms into case-insensitive, word-anchored regexes.

use crate::error::{LexiconError, Result};
use regex::{Regex, RegexBuilder};
use std::fmt;

/// Marker that turns a word-list term into a prefix match.
pub const DEFAULT_WILDCARD: char = '*';

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Exact(String),
    Prefix(String),
}

impl Term {
    /// Splits a raw word-list term on its trailing wildcard, if any.
    pub fn parse(raw: &str, wildcard: char) -> Result<Term> {
        if raw.trim().is_empty() {
            return Err(LexiconError::invalid_term(raw, "empty term"));
        }
        match raw.strip_suffix(wildcard) {
            Some(prefix) if prefix.trim().is_empty() => Err(LexiconError::invalid_term(
                raw,
                "wildcard without a literal prefix",
            )),
            Some(prefix) => Ok(Term::Prefix(prefix.to_string())),
            None => Ok(Term::Exact(raw.to_string())),
        }
    }

    pub fn literal(&self) -> &str {
        match self {
            Term::Exact(s) | Term::Prefix(s) => s,
        }
    }

    pub fn is_prefix(&self) -> bool {
        matches!(self, Term::Prefix(_))
    }

    fn regex_source(&self) -> String {
        let literal = self.literal();
        let mut src = String::with_capacity(literal.len() + 8);
        // \b only holds next to a word character, so edges made of
        // punctuation are left unanchored.
        if literal.chars().next().is_some_and(is_word_char) {
            src.push_str(r"\b");
        }
        src.push_str(&regex::escape(literal));
        match self {
            Term::Exact(_) => {
                if literal.chars().last().is_some_and(is_word_char) {
                    src.push_str(r"\b");
                }
            }
            Term::Prefix(_) => src.push_str(r"\S*"),
        }
        src
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Exact(s) => write!(f, "{s}"),
            Term::Prefix(s) => write!(f, "{s}{DEFAULT_WILDCARD}"),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A compiled lexicon term. Immutable once built.
#[derive(Debug, Clone)]
pub struct Pattern {
    term: Term,
    regex: Regex,
}

impl Pattern {
    pub fn new(term: Term) -> Result<Pattern> {
        if term.literal().trim().is_empty() {
            return Err(LexiconError::invalid_term(term.literal(), "empty term"));
        }
        let regex = RegexBuilder::new(&term.regex_source())
            .case_insensitive(true)
            .build()
            .map_err(|e| LexiconError::invalid_term(term.literal(), e.to_string()))?;
        Ok(Pattern { term, regex })
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    /// Regex source as handed to the engine.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Unanchored search; a single hit anywhere in `text` is enough.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Compiles a raw term using the default `*` wildcard convention.
pub fn compile(term: &str) -> Result<Pattern> {
    Pattern::new(Term::parse(term, DEFAULT_WILDCARD)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_term_matches_whole_words_only() {
        let p = compile("product").unwrap();
        assert!(p.is_match("material product innovations"));
        assert!(p.is_match("Product."));
        assert!(!p.is_match("new products"));
        assert!(!p.is_match("byproduct"));
        assert_eq!(p.as_str(), r"\bproduct\b");
    }

    #[test]
    fn prefix_term_requires_word_start() {
        let p = compile("market*").unwrap();
        assert!(p.term().is_prefix());
        assert!(p.is_match("the marketplace"));
        assert!(p.is_match("Marketing spend"));
        assert!(p.is_match("market"));
        assert!(!p.is_match("supermarkets"));
        assert_eq!(p.as_str(), r"\bmarket\S*");
    }

    #[test]
    fn literal_is_escaped() {
        let p = compile("r&d").unwrap();
        assert!(p.is_match("our R&D budget"));

        let dotted = compile("u.s").unwrap();
        assert!(dotted.is_match("in the u.s market"));
        assert!(!dotted.is_match("in the uks market"));

        let plus = compile("c++").unwrap();
        assert!(plus.is_match("written in c++ mostly"));
    }

    #[test]
    fn matching_ignores_case_of_pattern_and_text() {
        let p = compile("ROI").unwrap();
        assert!(p.is_match("roi improved"));
        assert!(p.is_match("ROI improved"));
    }

    #[test]
    fn multi_word_terms_match_as_phrases() {
        let p = compile("research and development").unwrap();
        assert!(p.is_match("Research and Development costs"));
        assert!(!p.is_match("research, and development"));
    }

    #[test]
    fn empty_and_bare_wildcard_terms_are_rejected() {
        assert!(matches!(compile(""), Err(LexiconError::InvalidTerm { .. })));
        assert!(matches!(compile("   "), Err(LexiconError::InvalidTerm { .. })));
        assert!(matches!(compile("*"), Err(LexiconError::InvalidTerm { .. })));
    }

    #[test]
    fn blank_literals_are_rejected_without_parsing() {
        assert!(Pattern::new(Term::Exact(String::new())).is_err());
        assert!(Pattern::new(Term::Exact(" ".to_string())).is_err());
        assert!(Pattern::new(Term::Prefix(String::new())).is_err());
    }

    #[test]
    fn display_restores_wildcard() {
        assert_eq!(Term::parse("grow*", '*').unwrap().to_string(), "grow*");
        assert_eq!(Term::parse("growth", '*').unwrap().to_string(), "growth");
        assert_eq!(
            Term::parse("grow%", '%').unwrap(),
            Term::Prefix("grow".to_string())
        );
    }
}

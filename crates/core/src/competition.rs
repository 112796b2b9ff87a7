//! Competition-intensity detector.
//!
//! Finds the first inflection of "compete" in a text, keeps the (at most)
//! three tokens in front of it and checks that window for a negating or
//! limiting cue ("not a competitive market", "few competitors"). Only the
//! first mention in scan order is ever scored.

use crate::error::{LexiconError, Result};
use regex::Regex;
use serde::Serialize;

pub const COMPETITION_REGEX: &str = r"(?i)\b(compet(?:it(?:ion|or|ive)|e|ing)s?)\b";

/// Up to three tokens ending exactly where the competition word starts.
pub const WINDOW_REGEX: &str = r"((?:\w+\W+){0,3})$";

// \b rather than surrounding \W so a cue opening the window still counts;
// the match is the bare cue word.
pub const EXCLUDE_REGEX: &str = r"(?i)\b(not|less|few|limited)\b";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitionMatch {
    pub preceding_words: String,
    pub competition_word: String,
    pub exclude_matches: Option<String>,
    pub exclude: bool,
}

#[derive(Debug, Clone)]
pub struct CompetitionDetector {
    competition: Regex,
    window: Regex,
    exclusion: Regex,
}

impl CompetitionDetector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            competition: build(COMPETITION_REGEX)?,
            window: build(WINDOW_REGEX)?,
            exclusion: build(EXCLUDE_REGEX)?,
        })
    }

    pub fn detect(&self, text: &str) -> Option<CompetitionMatch> {
        let found = self.competition.find(text)?;
        let competition_word = found.as_str();
        let preceding_words = self
            .window
            .find(&text[..found.start()])
            .map_or("", |m| m.as_str());
        let exclude_matches = self
            .exclusion
            .find(preceding_words)
            .map(|m| m.as_str().to_string());

        Some(CompetitionMatch {
            preceding_words: preceding_words.to_string(),
            competition_word: competition_word.to_string(),
            exclude: exclude_matches.is_some(),
            exclude_matches,
        })
    }

    /// JSON object for a hit, `null` when the text never mentions competition.
    pub fn detect_json(&self, text: &str) -> String {
        match self.detect(text) {
            Some(found) => serde_json::to_string(&found).unwrap_or_else(|_| "null".to_string()),
            None => "null".to_string(),
        }
    }

    /// Named regex sources, for inspection.
    pub fn patterns(&self) -> [(&'static str, &str); 3] {
        [
            ("comp_intensity_regex", self.competition.as_str()),
            ("preceding_window_regex", self.window.as_str()),
            ("exclude_regex", self.exclusion.as_str()),
        ]
    }
}

fn build(src: &str) -> Result<Regex> {
    Regex::new(src).map_err(|e| LexiconError::invalid_term(src, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Option<CompetitionMatch> {
        CompetitionDetector::new().unwrap().detect(text)
    }

    #[test]
    fn negated_mention_is_excluded() {
        let m = detect("Frankly the market is not very competitive right now.").unwrap();
        assert_eq!(m.preceding_words, "is not very ");
        assert_eq!(m.competition_word, "competitive");
        assert_eq!(m.exclude_matches.as_deref(), Some("not"));
        assert!(m.exclude);
    }

    #[test]
    fn plain_mention_is_kept() {
        let m = detect("We think our competitive advantage is strong.").unwrap();
        assert_eq!(m.preceding_words, "We think our ");
        assert_eq!(m.competition_word, "competitive");
        assert_eq!(m.exclude_matches, None);
        assert!(!m.exclude);
    }

    #[test]
    fn window_is_capped_at_three_tokens() {
        let m = detect("there is not much real competition").unwrap();
        assert_eq!(m.preceding_words, "not much real ");
        assert!(m.exclude);

        let m = detect("there is not very much real competition").unwrap();
        assert_eq!(m.preceding_words, "very much real ");
        assert!(!m.exclude);
    }

    #[test]
    fn window_may_be_short_or_empty() {
        let m = detect("Competition remains intense").unwrap();
        assert_eq!(m.preceding_words, "");
        assert_eq!(m.competition_word, "Competition");
        assert!(!m.exclude);

        let m = detect("Less Competition here").unwrap();
        assert_eq!(m.preceding_words, "Less ");
        assert_eq!(m.exclude_matches.as_deref(), Some("Less"));
    }

    #[test]
    fn punctuation_stays_in_the_window() {
        let m = detect("Prices, sadly, are limited, competing on terms").unwrap();
        assert_eq!(m.preceding_words, "sadly, are limited, ");
        assert_eq!(m.competition_word, "competing");
        assert_eq!(m.exclude_matches.as_deref(), Some("limited"));
    }

    #[test]
    fn cues_must_be_whole_words() {
        let m = detect("we cannot compete").unwrap();
        assert_eq!(m.competition_word, "compete");
        assert!(!m.exclude);

        let m = detect("a fewer number of competitors").unwrap();
        assert_eq!(m.competition_word, "competitors");
        assert!(!m.exclude);
    }

    #[test]
    fn only_the_first_mention_is_scored() {
        let m = detect("We compete everywhere. There are few competitors left.").unwrap();
        assert_eq!(m.preceding_words, "We ");
        assert_eq!(m.competition_word, "compete");
        assert!(!m.exclude);
    }

    #[test]
    fn earlier_mention_is_never_part_of_the_window() {
        let m = detect("Fierce competition, competing hard").unwrap();
        assert_eq!(m.competition_word, "competition");
        assert_eq!(m.preceding_words, "Fierce ");

        let m = detect("not competitive, competing on few fronts").unwrap();
        assert_eq!(m.competition_word, "competitive");
        assert_eq!(m.preceding_words, "not ");
        assert!(m.exclude);
    }

    #[test]
    fn inflections() {
        for word in [
            "compete", "competes", "competing", "competition", "competitions",
            "competitor", "competitors", "competitive", "competitives", "COMPETES",
        ] {
            let m = detect(&format!("they {word} hard")).unwrap();
            assert_eq!(m.competition_word, word);
        }
    }

    #[test]
    fn embedded_or_derived_words_do_not_match() {
        assert_eq!(detect("an incompetent manager"), None);
        assert_eq!(detect("priced competitively"), None);
        assert_eq!(detect("competence matters"), None);
        assert_eq!(detect(""), None);
    }

    #[test]
    fn json_shape() {
        let detector = CompetitionDetector::new().unwrap();
        assert_eq!(detector.detect_json("no rivals mentioned"), "null");
        assert_eq!(
            detector.detect_json("not competitive"),
            r#"{"preceding_words":"not ","competition_word":"competitive","exclude_matches":"not","exclude":true}"#
        );
        assert_eq!(
            detector.detect_json("tough competition"),
            r#"{"preceding_words":"tough ","competition_word":"competition","exclude_matches":null,"exclude":false}"#
        );
    }
}

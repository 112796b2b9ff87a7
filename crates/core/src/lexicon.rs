//! Read-only classification context, built once per process.

use crate::competition::{CompetitionDetector, CompetitionMatch};
use crate::config::WordListConfig;
use crate::error::Result;
use crate::matcher::{self, DomainResult};
use crate::taxonomy::{self, TableOptions, Taxonomy};
use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Earnings-call Q&A excerpt used by the demo command.
pub const SAMPLE_TRANSCRIPT: &str = "I think you spent a little bit of time talking about \
AdSense for Content, but also in my mind kind of along the lines of what seemed to be from a \
consumer standpoint, material product innovations. You have had GMail I guess in beta for \
getting close to a year and I think Froogle, too. I was wondering if you can help us \
understand a), I guess those are all in the Google website's portion of the business or maybe \
AdSense for Content is not. Can you kind of just help us understand where those are in the \
income statement, and to what degree those are contributing to the Company's growth today \
versus six months ago, or even what percentage of today's revenue is coming from those new \
products? ";

#[derive(Debug, Clone)]
pub struct Lexicon {
    kls: Taxonomy,
    mpr: Option<Taxonomy>,
    competition: CompetitionDetector,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub kls: DomainResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpr: Option<DomainResult>,
    pub competition: Option<CompetitionMatch>,
}

impl Lexicon {
    /// Fixed taxonomy and competition detector only.
    pub fn new() -> Result<Self> {
        Ok(Self {
            kls: taxonomy::fixed()?,
            mpr: None,
            competition: CompetitionDetector::new()?,
        })
    }

    pub fn with_word_list(path: &Path, opts: &TableOptions) -> Result<Self> {
        let mut lexicon = Self::new()?;
        lexicon.mpr = Some(taxonomy::load_from_path(path, opts)?);
        Ok(lexicon)
    }

    pub fn from_config(cfg: &WordListConfig) -> anyhow::Result<Self> {
        let lexicon = match &cfg.path {
            Some(path) => {
                let opts = cfg.table_options()?;
                Self::with_word_list(Path::new(path), &opts)
                    .with_context(|| format!("Failed to load word list {path}"))?
            }
            None => Self::new()?,
        };
        info!(
            kls_domains = lexicon.kls.len(),
            mpr_domains = lexicon.mpr.as_ref().map_or(0, Taxonomy::len),
            "lexicon ready"
        );
        Ok(lexicon)
    }

    pub fn kls(&self) -> &Taxonomy {
        &self.kls
    }

    pub fn mpr(&self) -> Option<&Taxonomy> {
        self.mpr.as_ref()
    }

    pub fn competition(&self) -> &CompetitionDetector {
        &self.competition
    }

    pub fn kls_domains(&self, text: &str) -> DomainResult {
        matcher::evaluate(text, &self.kls)
    }

    /// None when no word list was loaded.
    pub fn mpr_domains(&self, text: &str) -> Option<DomainResult> {
        self.mpr.as_ref().map(|t| matcher::evaluate(text, t))
    }

    pub fn comp_domains(&self, text: &str) -> Option<CompetitionMatch> {
        self.competition.detect(text)
    }

    pub fn classify(&self, text: &str) -> Classification {
        Classification {
            kls: self.kls_domains(text),
            mpr: self.mpr_domains(text),
            competition: self.comp_domains(text),
        }
    }
}

//! Turns lexicon results into the JSON/CSV the commands print.

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use std::io::Write;
use topic_core::export;
use topic_core::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TaxonomyChoice {
    Kls,
    Mpr,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WordListChoice {
    Kls,
    Mpr,
    Competition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
}

const NO_WORD_LIST: &str = "no word list loaded; set wordlist.path or pass --wordlist";

pub fn classification(lexicon: &Lexicon, text: &str, which: TaxonomyChoice) -> Result<serde_json::Value> {
    let value = match which {
        TaxonomyChoice::Kls => serde_json::to_value(lexicon.kls_domains(text))?,
        TaxonomyChoice::Mpr => {
            let mpr = lexicon.mpr_domains(text).ok_or_else(|| anyhow!(NO_WORD_LIST))?;
            serde_json::to_value(mpr)?
        }
        TaxonomyChoice::All => serde_json::to_value(lexicon.classify(text))?,
    };
    Ok(value)
}

pub fn competition(lexicon: &Lexicon, text: &str) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(lexicon.comp_domains(text))?)
}

pub fn word_lists<W: Write>(
    lexicon: &Lexicon,
    which: WordListChoice,
    format: Format,
    mut out: W,
) -> Result<()> {
    match which {
        WordListChoice::Competition => {
            let rows = export::competition_table(lexicon.competition());
            match format {
                Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?,
                Format::Csv => export::write_patterns_csv(&rows, out)?,
            }
        }
        WordListChoice::Kls | WordListChoice::Mpr => {
            let taxonomy = if which == WordListChoice::Kls {
                lexicon.kls()
            } else {
                lexicon.mpr().ok_or_else(|| anyhow!(NO_WORD_LIST))?
            };
            let rows = export::to_table(taxonomy);
            match format {
                Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?,
                Format::Csv => export::write_taxonomy_csv(&rows, out)?,
            }
        }
    }
    Ok(())
}

/// One result line per classifier, as printed by `demo`.
pub fn demo_lines(lexicon: &Lexicon, text: &str) -> Vec<String> {
    let mut lines = vec![lexicon.kls_domains(text).to_json()];
    if let Some(mpr) = lexicon.mpr_domains(text) {
        lines.push(mpr.to_json());
    }
    lines.push(lexicon.competition().detect_json(text));
    lines
}

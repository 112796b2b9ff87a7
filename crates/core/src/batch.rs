//! Classifies one text column of a CSV and appends the results as columns.

use crate::error::{LexiconError, Result};
use crate::lexicon::Lexicon;
use crate::matcher::DomainResult;
use csv::StringRecord;
use std::io::{Read, Write};
use tracing::{debug, info};

pub const COMPETITION_COLUMNS: [&str; 4] = [
    "comp_preceding_words",
    "comp_competition_word",
    "comp_exclude_matches",
    "comp_exclude",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: u64,
    pub competition_mentions: u64,
    pub excluded_mentions: u64,
}

pub fn run<R: Read, W: Write>(
    lexicon: &Lexicon,
    input: R,
    output: W,
    text_column: &str,
) -> Result<BatchSummary> {
    let mut rdr = csv::Reader::from_reader(input);
    let headers = rdr.headers()?.clone();
    let text_idx = headers
        .iter()
        .position(|h| h == text_column)
        .ok_or_else(|| LexiconError::Batch(format!("missing text column {text_column:?}")))?;

    let mut out_headers = headers.clone();
    push_domain_headers(&mut out_headers, "kls", lexicon.kls().domain_names());
    if let Some(mpr) = lexicon.mpr() {
        push_domain_headers(&mut out_headers, "mpr", mpr.domain_names());
    }
    for column in COMPETITION_COLUMNS {
        out_headers.push_field(column);
    }

    let mut wtr = csv::Writer::from_writer(output);
    wtr.write_record(&out_headers)?;

    let mut summary = BatchSummary::default();
    for (idx, record) in rdr.records().enumerate() {
        let mut row = record?;
        let text = row.get(text_idx).unwrap_or_default().to_string();
        let result = lexicon.classify(&text);

        push_flags(&mut row, &result.kls);
        if let Some(mpr) = &result.mpr {
            push_flags(&mut row, mpr);
        }
        match &result.competition {
            Some(found) => {
                summary.competition_mentions += 1;
                if found.exclude {
                    summary.excluded_mentions += 1;
                }
                row.push_field(&found.preceding_words);
                row.push_field(&found.competition_word);
                row.push_field(found.exclude_matches.as_deref().unwrap_or_default());
                row.push_field(bool_cell(found.exclude));
            }
            None => {
                for _ in COMPETITION_COLUMNS {
                    row.push_field("");
                }
            }
        }
        wtr.write_record(&row)?;
        summary.rows += 1;
        debug!(row = idx + 1, "classified row");
    }
    wtr.flush()?;

    info!(
        rows = summary.rows,
        competition_mentions = summary.competition_mentions,
        excluded = summary.excluded_mentions,
        "batch classified"
    );
    Ok(summary)
}

fn push_domain_headers<'a>(
    headers: &mut StringRecord,
    prefix: &str,
    domains: impl Iterator<Item = &'a str>,
) {
    for domain in domains {
        headers.push_field(&format!("{prefix}_{domain}"));
    }
}

fn push_flags(row: &mut StringRecord, result: &DomainResult) {
    for (_, hit) in result.iter() {
        row.push_field(bool_cell(hit));
    }
}

fn bool_cell(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

//! Tabular views of the word lists, for inspection.

use crate::competition::CompetitionDetector;
use crate::error::Result;
use crate::taxonomy::Taxonomy;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomyRow {
    pub category: String,
    /// Literal terms; prefix terms keep a trailing `*`.
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternRow {
    pub category: String,
    pub pattern: String,
}

pub fn to_table(taxonomy: &Taxonomy) -> Vec<TaxonomyRow> {
    taxonomy
        .domains()
        .map(|(domain, patterns)| TaxonomyRow {
            category: domain.to_string(),
            words: patterns.iter().map(|p| p.term().to_string()).collect(),
        })
        .collect()
}

pub fn competition_table(detector: &CompetitionDetector) -> Vec<PatternRow> {
    detector
        .patterns()
        .into_iter()
        .map(|(category, pattern)| PatternRow {
            category: category.to_string(),
            pattern: pattern.to_string(),
        })
        .collect()
}

/// Writes `category,words` rows; the word list cell is a JSON array.
pub fn write_taxonomy_csv<W: Write>(rows: &[TaxonomyRow], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["category", "words"])?;
    for row in rows {
        let words = serde_json::to_string(&row.words).unwrap_or_default();
        wtr.write_record([row.category.as_str(), words.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_patterns_csv<W: Write>(rows: &[PatternRow], out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{self, load_from_reader, TableOptions};
    use std::path::Path;

    #[test]
    fn fixed_taxonomy_rows_follow_domain_order() {
        let rows = to_table(&taxonomy::fixed().unwrap());
        assert_eq!(rows.len(), 23);
        assert_eq!(rows[0].category, "market");
        assert_eq!(rows[0].words[1], "marketplace");
        let insider = rows
            .iter()
            .find(|r| r.category == "insider_stock_transactions")
            .unwrap();
        assert_eq!(insider.words, ["insider buy", "insider sell"]);
    }

    #[test]
    fn prefix_terms_stay_visible() {
        let tax = load_from_reader(
            "growth\ngrow*\nexpansion\n".as_bytes(),
            Path::new("inline.csv"),
            &TableOptions::default(),
        )
        .unwrap();
        let rows = to_table(&tax);
        assert_eq!(rows[0].words, ["grow*", "expansion"]);

        let mut buf = Vec::new();
        write_taxonomy_csv(&rows, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "category,words\ngrowth,\"[\"\"grow*\"\",\"\"expansion\"\"]\"\n"
        );
    }

    #[test]
    fn competition_patterns_are_listed() {
        let rows = competition_table(&CompetitionDetector::new().unwrap());
        let names: Vec<_> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            names,
            ["comp_intensity_regex", "preceding_window_regex", "exclude_regex"]
        );

        let mut buf = Vec::new();
        write_patterns_csv(&rows, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("category,pattern\n"));
        assert!(text.contains("exclude_regex"));
    }
}

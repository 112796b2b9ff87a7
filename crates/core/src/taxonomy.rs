//! Domain taxonomies: the embedded KLS list and word lists loaded from CSV.

use crate::error::{LexiconError, Result};
use crate::kls::KLS_WORD_LIST;
use crate::pattern::{Pattern, Term, DEFAULT_WILDCARD};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

pub const FIXED_TAXONOMY: &str = "kls";
pub const LOADED_TAXONOMY: &str = "mpr";

/// Ordered domain -> pattern list mapping. Read-only once built.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    name: String,
    domains: IndexMap<String, Vec<Pattern>>,
}

impl Taxonomy {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domains(&self) -> impl Iterator<Item = (&str, &[Pattern])> {
        self.domains.iter().map(|(d, p)| (d.as_str(), p.as_slice()))
    }

    pub fn domain_names(&self) -> impl Iterator<Item = &str> {
        self.domains.keys().map(String::as_str)
    }

    pub fn patterns(&self, domain: &str) -> Option<&[Pattern]> {
        self.domains.get(domain).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn pattern_count(&self) -> usize {
        self.domains.values().map(Vec::len).sum()
    }
}

/// What to do with a cell that cannot become a pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidTermPolicy {
    #[default]
    Fail,
    Skip,
}

#[derive(Debug, Clone)]
pub struct TableOptions {
    pub wildcard: char,
    pub delimiter: u8,
    pub invalid_terms: InvalidTermPolicy,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD,
            delimiter: b',',
            invalid_terms: InvalidTermPolicy::Fail,
        }
    }
}

/// Builds a taxonomy from literal terms, keeping domain and term order.
pub fn from_terms<'a, I, T>(name: &str, entries: I) -> Result<Taxonomy>
where
    I: IntoIterator<Item = (&'a str, T)>,
    T: IntoIterator<Item = &'a str>,
{
    let mut domains = IndexMap::new();
    for (domain, terms) in entries {
        let patterns = terms
            .into_iter()
            .map(|t| Pattern::new(Term::Exact(t.to_string())))
            .collect::<Result<Vec<_>>>()?;
        domains
            .entry(domain.to_string())
            .or_insert_with(Vec::new)
            .extend(patterns);
    }
    let taxonomy = Taxonomy {
        name: name.to_string(),
        domains,
    };
    debug!(
        taxonomy = name,
        domains = taxonomy.len(),
        patterns = taxonomy.pattern_count(),
        "built taxonomy"
    );
    Ok(taxonomy)
}

/// The embedded Kothari, Li and Short taxonomy.
pub fn fixed() -> Result<Taxonomy> {
    from_terms(
        FIXED_TAXONOMY,
        KLS_WORD_LIST
            .iter()
            .map(|(domain, terms)| (*domain, terms.iter().copied())),
    )
}

/// Loads a word list where every column is a domain and every non-empty
/// cell below the header is one term.
pub fn load_from_path(path: &Path, opts: &TableOptions) -> Result<Taxonomy> {
    let file = File::open(path).map_err(|e| LexiconError::source_format(path, e))?;
    load_from_reader(file, path, opts)
}

pub fn load_from_reader<R: Read>(reader: R, origin: &Path, opts: &TableOptions) -> Result<Taxonomy> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| LexiconError::source_format(origin, e))?
        .clone();
    if headers.is_empty() {
        return Err(LexiconError::source_format(origin, "missing header row"));
    }

    let mut domains: IndexMap<String, Vec<Pattern>> = IndexMap::with_capacity(headers.len());
    for (idx, header) in headers.iter().enumerate() {
        if header.is_empty() {
            return Err(LexiconError::source_format(
                origin,
                format!("empty column header at position {}", idx + 1),
            ));
        }
        if domains.insert(header.to_string(), Vec::new()).is_some() {
            return Err(LexiconError::source_format(
                origin,
                format!("duplicate column header {header:?}"),
            ));
        }
    }

    for (row_idx, record) in rdr.records().enumerate() {
        // header is line 1
        let line = row_idx + 2;
        let record = record.map_err(|e| LexiconError::source_format(origin, e))?;
        if record.len() > headers.len() {
            return Err(LexiconError::source_format(
                origin,
                format!(
                    "line {line}: {} fields but only {} columns",
                    record.len(),
                    headers.len()
                ),
            ));
        }
        for (cell, (domain, patterns)) in record.iter().zip(domains.iter_mut()) {
            if cell.is_empty() {
                continue;
            }
            match Term::parse(cell, opts.wildcard).and_then(Pattern::new) {
                Ok(pattern) => patterns.push(pattern),
                Err(err) => match opts.invalid_terms {
                    InvalidTermPolicy::Fail => return Err(err),
                    InvalidTermPolicy::Skip => {
                        warn!(domain = %domain, line, error = %err, "skipping word-list term");
                    }
                },
            }
        }
    }

    let taxonomy = Taxonomy {
        name: LOADED_TAXONOMY.to_string(),
        domains,
    };
    debug!(
        source = %origin.display(),
        domains = taxonomy.len(),
        patterns = taxonomy.pattern_count(),
        "loaded word list"
    );
    Ok(taxonomy)
}

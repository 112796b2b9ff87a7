//! Evaluates a text against every domain of a taxonomy.

use crate::taxonomy::Taxonomy;
use indexmap::IndexMap;
use serde::Serialize;

/// Presence flag for every domain of the taxonomy that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DomainResult(IndexMap<String, bool>);

impl DomainResult {
    pub fn get(&self, domain: &str) -> Option<bool> {
        self.0.get(domain).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(d, hit)| (d.as_str(), *hit))
    }

    /// Domains flagged true, in taxonomy order.
    pub fn matched(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, hit)| *hit).map(|(d, _)| d)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Flags each domain that has at least one pattern occurring in `text`.
pub fn evaluate(text: &str, taxonomy: &Taxonomy) -> DomainResult {
    let lower = text.to_lowercase();
    let flags = taxonomy
        .domains()
        .map(|(domain, patterns)| {
            let hit = patterns.iter().any(|p| p.is_match(&lower));
            (domain.to_string(), hit)
        })
        .collect();
    DomainResult(flags)
}

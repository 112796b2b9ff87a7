//! Core library: lexicon taxonomies, domain matching, competition detection.

pub mod batch;
pub mod competition;
pub mod config;
pub mod error;
pub mod export;
pub mod kls;
pub mod lexicon;
pub mod matcher;
pub mod pattern;
pub mod taxonomy;

pub use error::{LexiconError, Result};
pub use lexicon::Lexicon;

//! Batch parsing of independent documents
//!
//! Each document gets its own parser, so a batch is parsed in parallel on
//! the rayon pool. Results come back in input order.
//!
//! ```
//! use scl::parser::ParseConfig;
//! use scl::project::{SourceText, parse_batch};
//!
//! let sources = vec![
//!     SourceText::new("acc.scl", "type Acc { bal: int; }"),
//!     SourceText::new("broken.scl", "type T {}"),
//! ];
//! let results = parse_batch(&sources, &ParseConfig::default());
//! assert!(results[0].parse.ok());
//! assert!(!results[1].parse.ok());
//! ```

use rayon::prelude::*;
use smol_str::SmolStr;

use crate::parser::{Parse, ParseConfig, parse_with_config};

/// A named document to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub name: SmolStr,
    pub text: String,
}

impl SourceText {
    pub fn new(name: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Outcome of parsing one document of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    pub name: SmolStr,
    pub parse: Parse,
}

impl BatchResult {
    pub fn ok(&self) -> bool {
        self.parse.ok()
    }
}

/// Parse every document in parallel with the same configuration.
pub fn parse_batch(sources: &[SourceText], config: &ParseConfig) -> Vec<BatchResult> {
    tracing::debug!(documents = sources.len(), "parsing batch");

    let results: Vec<BatchResult> = sources
        .par_iter()
        .map(|source| {
            let parse = parse_with_config(&source.text, config);
            if !parse.ok() {
                tracing::debug!(
                    document = %source.name,
                    errors = parse.errors.len(),
                    "document has errors"
                );
            }
            BatchResult {
                name: source.name.clone(),
                parse,
            }
        })
        .collect();

    let failed = results.iter().filter(|result| !result.ok()).count();
    tracing::debug!(documents = results.len(), failed, "batch parsed");
    results
}

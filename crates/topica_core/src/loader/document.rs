//! Document retrieval and validation.
//!
//! # Responsibility
//! - Read the catalog JSON document from disk.
//! - Decode and validate it into an immutable [`Catalog`] snapshot.
//!
//! # Invariants
//! - Returned catalogs satisfy the unique-topic-name invariant.
//! - Load outcomes are logged with duration and counts, success or not.

use super::{LoadError, LoadResult};
use crate::model::catalog::Catalog;
use log::{error, info};
use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

/// Loads the catalog document at `path` and validates it.
///
/// This is the single load-then-ready transition of the system: it runs
/// once at startup and the returned snapshot is immutable afterwards.
///
/// # Errors
/// - [`LoadError::Io`] when the document cannot be read.
/// - [`LoadError::Parse`] when it is not valid catalog JSON.
/// - [`LoadError::DuplicateTopic`] when two topics share a name.
pub fn load_catalog(path: impl AsRef<Path>) -> LoadResult<Catalog> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=catalog_load module=loader status=start");

    match read_document(path) {
        Ok(catalog) => {
            let stats = catalog.stats();
            info!(
                "event=catalog_load module=loader status=ok duration_ms={} topics={} categories={} sub_topics={} tags={}",
                started_at.elapsed().as_millis(),
                stats.topics,
                stats.categories,
                stats.sub_topics,
                stats.tags
            );
            Ok(catalog)
        }
        Err(err) => {
            error!(
                "event=catalog_load module=loader status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn read_document(path: &Path) -> LoadResult<Catalog> {
    let body = std::fs::read_to_string(path)?;
    parse_catalog(&body)
}

/// Decodes catalog JSON held in memory and validates it.
///
/// Used directly by hosts that own document transport themselves.
pub fn parse_catalog(body: &str) -> LoadResult<Catalog> {
    let catalog: Catalog = serde_json::from_str(body)?;
    validate(&catalog)?;
    Ok(catalog)
}

fn validate(catalog: &Catalog) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for topic in &catalog.topics {
        if !seen.insert(topic.name.as_str()) {
            return Err(LoadError::DuplicateTopic(topic.name.clone()));
        }
    }
    Ok(())
}

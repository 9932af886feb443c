//! Mock fuel finder for development without network access.
//!
//! Loads results pages from HTML files and serves them as if they were
//! live responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::Postcode;

use super::error::FinderError;
use super::source::PageSource;

/// Mock fuel finder that serves pages from `{postcode}.html` files.
#[derive(Debug, Clone)]
pub struct MockFinderClient {
    /// Pre-loaded results pages, keyed by postcode.
    pages: Arc<HashMap<Postcode, String>>,
}

impl MockFinderClient {
    /// Create a new mock client by loading HTML files from a directory.
    ///
    /// Expects files named `{postcode}.html` (e.g., `4000.html`).
    /// Other files are skipped.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, FinderError> {
        let data_dir = data_dir.as_ref();
        let mut pages = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| FinderError::Fixture {
            message: format!("Failed to read mock data directory {:?}: {}", data_dir, e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| FinderError::Fixture {
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("html") {
                continue;
            }

            let Some(postcode) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| Postcode::parse(s).ok())
            else {
                continue;
            };

            let html = std::fs::read_to_string(&path).map_err(|e| FinderError::Fixture {
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            pages.insert(postcode, html);
        }

        if pages.is_empty() {
            return Err(FinderError::Fixture {
                message: format!("No mock results pages found in {:?}", data_dir),
            });
        }

        Ok(Self {
            pages: Arc::new(pages),
        })
    }

    /// List postcodes available in the mock data.
    pub fn available_postcodes(&self) -> Vec<Postcode> {
        let mut postcodes: Vec<_> = self.pages.keys().copied().collect();
        postcodes.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        postcodes
    }
}

impl PageSource for MockFinderClient {
    /// Unknown postcodes answer like the live site failing: a 404 status.
    async fn fetch_results(&self, postcode: &Postcode) -> Result<String, FinderError> {
        self.pages
            .get(postcode)
            .cloned()
            .ok_or_else(|| FinderError::Status {
                status: 404,
                message: format!("No mock data for postcode {}", postcode),
            })
    }
}

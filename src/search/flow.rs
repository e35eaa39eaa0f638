//! Intelligent File Search Flow
//!
//! Refines the user's query through an injected model callback, then walks
//! the scope directory on the real filesystem collecting files whose names
//! contain the refined query, case-insensitively. Directories are visited
//! in whatever order the OS yields them.

use std::fs;
use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::search::types::{RefineFn, SearchBackend, SearchError, SearchRequest};

const REFINE_PROMPT: &str = r#"You are a search query refinement tool. The user is trying to find files on their system and has provided the following filename:

  {{filename}}

The user is searching within the following directory:

  {{directory}}

Your job is to generate a refined search query to help them find the files they are looking for. Consider:

*   Expanding abbreviations and correcting misspellings.
*   Adding useful synonyms to the query.
*   Making the query case-insensitive.
*   Focusing on key search terms from the filename, and adding search parameters to improve the results.
*   Removing common terms such as "the", "a", or "of".

Return only the refined search query. Do not include any other text or explanation."#;

/// Render the refinement prompt for a request. Exposed so embedders that
/// wire a real model client can send the exact prompt this flow expects.
pub fn refine_prompt(request: &SearchRequest) -> String {
    REFINE_PROMPT
        .replace("{{filename}}", &request.query)
        .replace("{{directory}}", &request.scope)
}

const STOP_WORDS: &[&str] = &["the", "a", "of"];

/// Model-free refiner applying the prompt's mechanical rules: lowercase
/// the query and drop stop words. Falls back to the lowercased query when
/// every term is a stop word.
pub fn offline_refine_fn() -> RefineFn {
    std::sync::Arc::new(|request: SearchRequest| {
        Box::pin(async move {
            let lowered = request.query.to_lowercase();
            let kept: Vec<&str> = lowered
                .split_whitespace()
                .filter(|word| !STOP_WORDS.contains(word))
                .collect();
            if kept.is_empty() {
                Ok(lowered.trim().to_string())
            } else {
                Ok(kept.join(" "))
            }
        })
    })
}

/// Search backend combining query refinement and a recursive disk scan.
pub struct IntelligentFileSearch {
    refine: RefineFn,
}

impl IntelligentFileSearch {
    pub fn new(refine: RefineFn) -> Self {
        IntelligentFileSearch { refine }
    }

    /// Backend wired to the offline refiner.
    pub fn offline() -> Self {
        Self::new(offline_refine_fn())
    }
}

#[async_trait]
impl SearchBackend for IntelligentFileSearch {
    async fn search(&self, request: SearchRequest) -> Result<Vec<String>, SearchError> {
        let refined = (self.refine)(request.clone())
            .await
            .map_err(SearchError::Refine)?;

        let mut matches = Vec::new();
        scan_files(
            Path::new(&request.scope),
            &refined.to_lowercase(),
            &mut matches,
        )
        .map_err(|e| SearchError::Scan(e.to_string()))?;
        Ok(matches)
    }
}

fn scan_files(dir: &Path, query: &str, matches: &mut Vec<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();
        if file_type.is_dir() {
            scan_files(&path, query, matches)?;
        } else if file_type.is_file() {
            let name = entry.file_name().to_string_lossy().to_lowercase();
            if name.contains(query) {
                matches.push(path.to_string_lossy().into_owned());
            }
        }
    }
    Ok(())
}

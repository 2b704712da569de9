//! Search tool implementation using daedra
//!
//! Queries DuckDuckGo through the daedra crate and renders the hits as a
//! numbered plain-text list the model can read back.

use crate::tools::registry::Tool;
use crate::types::{AppError, Result};
use async_trait::async_trait;

const DEFAULT_NUM_RESULTS: usize = 5;

/// One search hit, reduced to what gets shown to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// Web search tool powered by daedra
pub struct SearchTool {
    num_results: usize,
}

impl SearchTool {
    pub fn new() -> Self {
        Self {
            num_results: DEFAULT_NUM_RESULTS,
        }
    }

    pub fn with_num_results(num_results: usize) -> Self {
        Self {
            num_results: num_results.max(1),
        }
    }
}

impl Default for SearchTool {
    fn default() -> Self {
        Self::new()
    }
}

/// Render search hits as the plain-text tool result.
pub fn format_hits(query: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("No results found for '{}'", query);
    }

    hits.iter()
        .enumerate()
        .map(|(i, hit)| {
            let mut entry = format!("{}. {}\n   {}", i + 1, hit.title, hit.url);
            if !hit.description.is_empty() {
                entry.push_str("\n   ");
                entry.push_str(&hit.description);
            }
            entry
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search the web for information using DuckDuckGo"
    }

    async fn execute(&self, input: &str) -> Result<String> {
        let query = input.trim();
        if query.is_empty() {
            return Err(AppError::Tool("Empty search query".to_string()));
        }

        let search_args = daedra::SearchArgs {
            query: query.to_string(),
            options: Some(daedra::SearchOptions {
                num_results: self.num_results,
                ..Default::default()
            }),
        };

        let response = daedra::tools::search::perform_search(&search_args)
            .await
            .map_err(|e| AppError::Tool(format!("Search failed: {}", e)))?;

        let hits: Vec<SearchHit> = response
            .data
            .iter()
            .take(self.num_results)
            .map(|r| SearchHit {
                title: r.title.to_string(),
                url: r.url.to_string(),
                description: r.description.to_string(),
            })
            .collect();

        tracing::debug!(query = %query, hits = hits.len(), "Web search completed");

        Ok(format_hits(query, &hits))
    }
}

//! Web search client for a SerpAPI-compatible endpoint.
//!
//! Issues a single GET per query and formats the organic results as a
//! readable numbered list. Network failure, non-2xx status, and malformed
//! JSON each map to their own error variant so the tool boundary can report
//! a distinct diagnostic for each.

use crate::config::SearchSettings;
use crate::error::{LeseError, Result};
use serde::Deserialize;
use tracing::debug;

/// Client for the web search endpoint.
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    max_results: usize,
}

/// Top-level search response envelope.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: SearchData,
}

#[derive(Debug, Default, Deserialize)]
struct SearchData {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

/// A single organic search hit.
#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    snippet: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    source: Option<String>,
}

impl SearchClient {
    /// Create a search client from settings and a resolved API key.
    pub fn new(settings: &SearchSettings, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: settings.endpoint.clone(),
            api_key,
            max_results: settings.max_results,
        }
    }

    /// Run a search and return a formatted result list.
    pub async fn search(&self, query: &str) -> Result<String> {
        debug!("web search: {}", query);

        let num = self.max_results.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("api_key", self.api_key.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| LeseError::SearchRequest(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeseError::SearchStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LeseError::SearchRequest(e.to_string()))?;

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| LeseError::SearchDecode(e.to_string()))?;

        Ok(format_results(&parsed.data.organic_results, self.max_results))
    }
}

/// Format organic results as a numbered markdown list.
fn format_results(results: &[OrganicResult], limit: usize) -> String {
    if results.is_empty() {
        return "No relevant results were found.".to_string();
    }

    let formatted = results
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, r)| {
            let title = r.title.as_deref().unwrap_or("Untitled");
            let snippet = r
                .snippet
                .as_deref()
                .or(r.description.as_deref())
                .unwrap_or("No summary available.");
            let url = r.url.as_deref().unwrap_or("");
            let source = r.source.as_deref().unwrap_or("");
            format!("**{}. {}**\n*{}*\nSource: [{}]({})", i + 1, title, snippet, source, url)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("**Search results**\n\n{}", formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<OrganicResult> {
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        parsed.data.organic_results
    }

    #[test]
    fn test_format_results_numbered_list() {
        let results = parse(
            r#"{"data": {"organic_results": [
                {"title": "Rust", "snippet": "A language", "url": "https://rust-lang.org", "source": "rust-lang.org"},
                {"title": "Crates", "description": "Registry", "url": "https://crates.io", "source": "crates.io"}
            ]}}"#,
        );
        let out = format_results(&results, 5);
        assert!(out.contains("**1. Rust**"));
        assert!(out.contains("*A language*"));
        // description is the fallback when snippet is absent
        assert!(out.contains("*Registry*"));
        assert!(out.contains("[crates.io](https://crates.io)"));
    }

    #[test]
    fn test_format_results_empty() {
        assert_eq!(
            format_results(&[], 5),
            "No relevant results were found."
        );
    }

    #[test]
    fn test_format_results_respects_limit() {
        let results = parse(
            r#"{"data": {"organic_results": [
                {"title": "one"}, {"title": "two"}, {"title": "three"}
            ]}}"#,
        );
        let out = format_results(&results, 2);
        assert!(out.contains("**2. two**"));
        assert!(!out.contains("three"));
    }

    #[test]
    fn test_missing_envelope_is_empty_not_error() {
        // A well-formed JSON body without the expected keys parses to zero
        // results rather than a decode failure.
        let results = parse(r#"{"status": "ok"}"#);
        assert!(results.is_empty());
    }
}

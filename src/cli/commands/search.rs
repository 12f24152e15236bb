//! Search command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::error::LeseError;
use crate::search::SearchClient;
use anyhow::Result;

/// Run a web search and print the formatted results.
pub async fn run_search(query: &str, limit: Option<usize>, mut settings: Settings) -> Result<()> {
    if let Some(limit) = limit {
        settings.search.max_results = limit;
    }

    let Some(api_key) = settings.search_api_key() else {
        let err = LeseError::Config(format!(
            "{} is not set. Set it with: export {}='...'",
            settings.search.api_key_env, settings.search.api_key_env
        ));
        Output::error(&format!("{}", err));
        return Err(err.into());
    };

    let client = SearchClient::new(&settings.search, api_key);

    let spinner = Output::spinner("Searching...");
    match client.search(query).await {
        Ok(results) => {
            spinner.finish_and_clear();
            println!("{}", results);
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Search failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}

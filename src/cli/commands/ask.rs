//! Ask command implementation.

use crate::agent::{Agent, ToolContext};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::search::SearchClient;
use anyhow::Result;

/// Run a one-shot agent task.
pub async fn run_ask(
    task: &str,
    file: Option<String>,
    model: Option<String>,
    settings: Settings,
) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Ask, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'lese doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let model = model.unwrap_or_else(|| settings.model.name.clone());

    let search = settings
        .search_api_key()
        .map(|key| SearchClient::new(&settings.search, key));
    if search.is_none() {
        Output::warning(&format!(
            "{} not set; the web_search tool is disabled for this run.",
            settings.search.api_key_env
        ));
    }

    // Steer the agent at a specific file if one was given.
    let context = file.as_ref().map(|path| {
        format!("The file is located here: {}. Read it when relevant.", path)
    });

    let tool_context = ToolContext::new(search);
    let agent = Agent::new(&settings, tool_context, &model)?;

    let spinner = Output::spinner("Agent working...");

    match agent.run(task, context.as_deref()).await {
        Ok(response) => {
            spinner.finish_and_clear();

            println!("\n{}\n", response.content);

            if !response.tool_calls.is_empty() {
                Output::header(&format!("Tool calls ({})", response.tool_calls.len()));
                for call in &response.tool_calls {
                    Output::info(&format!("  {} {}", call.name, truncate(&call.arguments, 60)));
                }
                println!();
            }

            Output::info(&format!(
                "Completed in {} iteration(s)",
                response.iterations
            ));
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Agent failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    // Cut on a char boundary; a byte-offset slice panics on multibyte input.
    let budget = max_len.saturating_sub(3);
    let cut = (0..=budget)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}...", &s[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_input_unchanged() {
        assert_eq!(truncate("short", 60), "short");
    }

    #[test]
    fn test_truncate_ascii() {
        let long = "a".repeat(80);
        let out = truncate(&long, 60);
        assert_eq!(out.len(), 60);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_on_boundary() {
        // A multibyte char straddling the byte budget must not panic.
        let mut long = "a".repeat(56);
        long.push('é');
        long.push_str(&"b".repeat(20));
        let out = truncate(&long, 60);
        assert!(out.ends_with("..."));
        assert!(out.len() <= 60);
    }

    #[test]
    fn test_truncate_all_multibyte() {
        let long = "é".repeat(40);
        let out = truncate(&long, 10);
        assert!(out.ends_with("..."));
        assert!(out.is_char_boundary(out.len() - 3));
    }
}

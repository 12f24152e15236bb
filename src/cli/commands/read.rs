//! Read command implementation.

use crate::cli::preflight::{self, Operation};
use crate::config::Settings;
use crate::extract::extract_to_string;
use anyhow::Result;

/// Extract text from a document and print it.
///
/// Prints the same flattened payload the agent's read_file tool would see,
/// diagnostics included, and always exits cleanly.
pub async fn run_read(path: &str, settings: Settings) -> Result<()> {
    preflight::check(Operation::Read, &settings)?;

    let path = path.to_string();
    let content = tokio::task::spawn_blocking(move || extract_to_string(&path)).await?;
    println!("{}", content);
    Ok(())
}

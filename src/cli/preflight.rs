//! Pre-flight checks before API-backed operations.
//!
//! Validates that required credentials are configured before starting
//! operations that would otherwise fail midway.

use crate::config::Settings;
use crate::error::Result;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Agent and chat runs require the model API key.
    Ask,
    /// Reading a file has no external requirements.
    Read,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Ask => {
            settings.model_api_key()?;
        }
        Operation::Read => {
            // Extraction is local-only.
        }
    }
    Ok(())
}

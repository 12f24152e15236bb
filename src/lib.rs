//! Lese - Document Reading Research Assistant
//!
//! A CLI research assistant that reads your documents and the web.
//!
//! The name "Lese" comes from the Norwegian word for "read."
//!
//! # Overview
//!
//! Lese allows you to:
//! - Extract text from PDF, Excel, Word, and plain text files
//! - Run an AI agent that reads local documents and searches the web
//! - Chat interactively with tool-calling support
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `extract` - Multi-format document extraction
//! - `search` - Web search client
//! - `agent` - LLM agent with tool calling
//! - `openai` - OpenAI-compatible client construction
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use lese::extract::extract_to_string;
//!
//! // Always returns a string; failures become readable diagnostics.
//! let content = extract_to_string("report.pdf");
//! println!("{}", content);
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod openai;
pub mod search;

pub use error::{LeseError, Result};

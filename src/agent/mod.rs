//! Agent system for research tasks with tool calling.
//!
//! Provides an LLM agent over an OpenAI-compatible endpoint that can read
//! local documents and search the web, relaying tool output back to the
//! model until it produces a final answer.

mod runner;
mod tools;

pub use runner::{Agent, AgentResponse, ToolCallRecord};
pub use tools::{parse_tool_call, tool_definitions, ToolCall, ToolContext};

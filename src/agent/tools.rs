//! Tool definitions and implementations for the agent system.

use crate::error::{LeseError, Result};
use crate::extract::extract_to_string;
use crate::search::SearchClient;
use serde::{Deserialize, Serialize};

/// Available tools for the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ToolCall {
    /// Read a document from the local filesystem.
    ReadFile { file_path: String },

    /// Search the web for a query.
    WebSearch { query: String },
}

/// Tool execution context.
pub struct ToolContext {
    search: Option<SearchClient>,
}

impl ToolContext {
    /// Create a new tool context. Search is optional; without a client the
    /// web_search tool reports that it is not configured.
    pub fn new(search: Option<SearchClient>) -> Self {
        Self { search }
    }

    /// Execute a tool call and return the result as a string.
    pub async fn execute(&self, tool: &ToolCall) -> Result<String> {
        match tool {
            ToolCall::ReadFile { file_path } => self.execute_read_file(file_path).await,
            ToolCall::WebSearch { query } => self.execute_web_search(query).await,
        }
    }

    async fn execute_read_file(&self, file_path: &str) -> Result<String> {
        let path = file_path.to_string();
        // Extraction is blocking file and parser I/O; keep it off the runtime.
        tokio::task::spawn_blocking(move || extract_to_string(&path))
            .await
            .map_err(|e| LeseError::Agent(format!("read_file task failed: {}", e)))
    }

    async fn execute_web_search(&self, query: &str) -> Result<String> {
        match &self.search {
            Some(client) => client.search(query).await,
            None => Ok(format!(
                "Web search is not configured (no API key found); cannot search for: {}",
                query
            )),
        }
    }
}

/// Get OpenAI function/tool definitions for the agent.
pub fn tool_definitions() -> Vec<async_openai::types::ChatCompletionTool> {
    use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

    vec![
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "read_file".to_string(),
                description: Some(
                    "Read the textual content of a local file. \
                    Supports PDF, Excel, Word, and plain text files."
                        .to_string(),
                ),
                parameters: Some(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "file_path": {
                            "type": "string",
                            "description": "Path to the file to read"
                        }
                    },
                    "required": ["file_path"]
                })),
                strict: None,
            },
        },
        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: "web_search".to_string(),
                description: Some(
                    "Search the web for current information. \
                    Use this for online queries and recent news."
                        .to_string(),
                ),
                parameters: Some(serde_json::json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "The search query"
                        }
                    },
                    "required": ["query"]
                })),
                strict: None,
            },
        },
    ]
}

/// Parse a tool call from the OpenAI response format.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    let args: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| LeseError::Agent(format!("Invalid tool arguments: {}", e)))?;

    match name {
        "read_file" => {
            let file_path = args["file_path"]
                .as_str()
                .ok_or_else(|| LeseError::Agent("Missing 'file_path' argument".to_string()))?
                .to_string();
            Ok(ToolCall::ReadFile { file_path })
        }
        "web_search" => {
            let query = args["query"]
                .as_str()
                .ok_or_else(|| LeseError::Agent("Missing 'query' argument".to_string()))?
                .to_string();
            Ok(ToolCall::WebSearch { query })
        }
        _ => Err(LeseError::Agent(format!("Unknown tool: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_read_file_tool() {
        let tool = parse_tool_call("read_file", r#"{"file_path": "/tmp/report.pdf"}"#).unwrap();
        match tool {
            ToolCall::ReadFile { file_path } => {
                assert_eq!(file_path, "/tmp/report.pdf");
            }
            _ => panic!("Expected ReadFile tool"),
        }
    }

    #[test]
    fn test_parse_web_search_tool() {
        let tool = parse_tool_call("web_search", r#"{"query": "rust releases"}"#).unwrap();
        match tool {
            ToolCall::WebSearch { query } => {
                assert_eq!(query, "rust releases");
            }
            _ => panic!("Expected WebSearch tool"),
        }
    }

    #[test]
    fn test_parse_unknown_tool() {
        assert!(parse_tool_call("frobnicate", "{}").is_err());
    }

    #[test]
    fn test_parse_bad_arguments_json() {
        assert!(parse_tool_call("read_file", "not json").is_err());
    }

    #[tokio::test]
    async fn test_read_file_tool_never_fails() {
        let context = ToolContext::new(None);

        // A missing file still yields Ok with a diagnostic payload.
        let result = context
            .execute(&ToolCall::ReadFile {
                file_path: "/no/such/file.txt".to_string(),
            })
            .await
            .unwrap();
        assert!(result.to_lowercase().contains("error"));

        // And a real file yields its content.
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"tool payload").unwrap();
        file.flush().unwrap();
        let result = context
            .execute(&ToolCall::ReadFile {
                file_path: file.path().to_str().unwrap().to_string(),
            })
            .await
            .unwrap();
        assert_eq!(result, "tool payload");
    }

    #[tokio::test]
    async fn test_web_search_without_client_reports_unconfigured() {
        let context = ToolContext::new(None);
        let result = context
            .execute(&ToolCall::WebSearch {
                query: "anything".to_string(),
            })
            .await
            .unwrap();
        assert!(result.contains("not configured"));
    }
}

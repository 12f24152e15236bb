//! Interactive chat command with tool calling support.

use crate::agent::{parse_tool_call, tool_definitions, ToolContext};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::error::{LeseError, Result};
use crate::openai::create_client;
use crate::search::SearchClient;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestToolMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use console::style;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// System prompt for the chat session.
const CHAT_SYSTEM_PROMPT: &str = r#"You are a research assistant in an ongoing conversation.

Use 'read_file' to extract content from files the user mentions, and
'web_search' for online queries. Show tool outputs without summarizing
unless asked. Remember context from earlier in the conversation.

When a tool returns a diagnostic (unsupported format, unreadable file),
relay that explanation to the user instead of retrying the same call."#;

/// Run the interactive chat command.
pub async fn run_chat(model: Option<String>, settings: Settings) -> Result<()> {
    if let Err(e) = preflight::check(Operation::Ask, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'lese doctor' for detailed diagnostics.");
        return Err(e);
    }

    let model = model.unwrap_or_else(|| settings.model.name.clone());

    let search = settings
        .search_api_key()
        .map(|key| SearchClient::new(&settings.search, key));

    let tool_context = ToolContext::new(search);
    let mut chat = ChatSession::new(&settings, tool_context, &model)?;

    println!("\n{}", style("Lese Chat").bold().cyan());
    println!(
        "{}\n",
        style("Ask questions or point me at a file. Type 'exit' to quit, 'clear' to reset.").dim()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("You:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        stdin.lock().read_line(&mut input)?;

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Output::info("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("clear") {
            chat.clear_history();
            Output::info("Conversation history cleared.");
            continue;
        }

        match chat.send_message(input).await {
            Ok(response) => {
                println!("\n{} {}\n", style("Lese:").cyan().bold(), response);
            }
            Err(e) => {
                Output::error(&format!("Error: {}", e));
            }
        }
    }

    Ok(())
}

/// Interactive chat session with tool calling support.
struct ChatSession {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    tools: ToolContext,
    messages: Vec<ChatCompletionRequestMessage>,
    max_tool_iterations: usize,
}

impl ChatSession {
    /// Create a new chat session.
    fn new(settings: &Settings, tools: ToolContext, model: &str) -> Result<Self> {
        let system_message = ChatCompletionRequestSystemMessageArgs::default()
            .content(CHAT_SYSTEM_PROMPT)
            .build()
            .map_err(|e| LeseError::Agent(e.to_string()))?;

        Ok(Self {
            client: create_client(settings)?,
            model: model.to_string(),
            tools,
            messages: vec![system_message.into()],
            max_tool_iterations: settings.model.max_iterations,
        })
    }

    /// Clear conversation history (keeps system prompt).
    fn clear_history(&mut self) {
        self.messages.truncate(1);
    }

    /// Send a message and get a response, handling tool calls.
    async fn send_message(&mut self, user_input: &str) -> Result<String> {
        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(user_input)
            .build()
            .map_err(|e| LeseError::Agent(e.to_string()))?;
        self.messages.push(user_message.into());

        let mut iterations = 0;

        loop {
            iterations += 1;
            if iterations > self.max_tool_iterations {
                return Err(LeseError::Agent("Too many tool iterations".to_string()));
            }

            debug!("Chat iteration {}, {} messages", iterations, self.messages.len());

            let request = CreateChatCompletionRequestArgs::default()
                .model(&self.model)
                .messages(self.messages.clone())
                .tools(tool_definitions())
                .build()
                .map_err(|e| LeseError::Agent(e.to_string()))?;

            let response = self
                .client
                .chat()
                .create(request)
                .await
                .map_err(|e| LeseError::Model(format!("Chat API error: {}", e)))?;

            let choice = response
                .choices
                .first()
                .ok_or_else(|| LeseError::Agent("No response from model".to_string()))?;

            if let Some(ref tool_calls) = choice.message.tool_calls {
                if tool_calls.is_empty() {
                    let content = choice.message.content.clone().unwrap_or_default();
                    self.add_assistant_message(&content)?;
                    return Ok(content);
                }

                let assistant_msg = ChatCompletionRequestAssistantMessageArgs::default()
                    .tool_calls(tool_calls.clone())
                    .build()
                    .map_err(|e| LeseError::Agent(e.to_string()))?;
                self.messages.push(assistant_msg.into());

                for tool_call in tool_calls {
                    let name = &tool_call.function.name;
                    let arguments = &tool_call.function.arguments;

                    info!("Chat calling tool: {} with args: {}", name, arguments);
                    print!("{}", style(format!("  [{}] ", name)).dim());
                    io::stdout().flush().ok();

                    let result = match parse_tool_call(name, arguments) {
                        Ok(tool) => match self.tools.execute(&tool).await {
                            Ok(output) => {
                                println!("{}", style("✓").green());
                                output
                            }
                            Err(e) => {
                                println!("{}", style("✗").red());
                                format!("Tool error: {}", e)
                            }
                        },
                        Err(e) => {
                            println!("{}", style("✗").red());
                            format!("Failed to parse tool call: {}", e)
                        }
                    };

                    let tool_msg = ChatCompletionRequestToolMessageArgs::default()
                        .tool_call_id(&tool_call.id)
                        .content(result)
                        .build()
                        .map_err(|e| LeseError::Agent(e.to_string()))?;
                    self.messages.push(tool_msg.into());
                }
            } else {
                let content = choice.message.content.clone().unwrap_or_default();
                self.add_assistant_message(&content)?;
                trim_history(&mut self.messages, 30);
                return Ok(content);
            }
        }
    }

    /// Add an assistant text message to history.
    fn add_assistant_message(&mut self, content: &str) -> Result<()> {
        let msg = ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| LeseError::Agent(e.to_string()))?;
        self.messages.push(msg.into());
        Ok(())
    }
}

/// Trim history to the system prompt plus roughly the last `keep` messages.
///
/// Tool-role messages must stay with the assistant message that requested
/// them; the endpoint rejects a tool response whose assistant turn is gone.
/// The cut point therefore slides forward past any tool messages so a group
/// is always dropped whole.
fn trim_history(messages: &mut Vec<ChatCompletionRequestMessage>, keep: usize) {
    if messages.len() <= keep + 1 {
        return;
    }

    let mut excess = messages.len() - keep - 1;
    while 1 + excess < messages.len()
        && matches!(messages[1 + excess], ChatCompletionRequestMessage::Tool(_))
    {
        excess += 1;
    }
    messages.drain(1..1 + excess);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_openai::types::{
        ChatCompletionMessageToolCall, ChatCompletionToolType, FunctionCall,
    };

    fn system() -> ChatCompletionRequestMessage {
        ChatCompletionRequestSystemMessageArgs::default()
            .content("s")
            .build()
            .unwrap()
            .into()
    }

    fn user(text: &str) -> ChatCompletionRequestMessage {
        ChatCompletionRequestUserMessageArgs::default()
            .content(text)
            .build()
            .unwrap()
            .into()
    }

    fn assistant(text: &str) -> ChatCompletionRequestMessage {
        ChatCompletionRequestAssistantMessageArgs::default()
            .content(text)
            .build()
            .unwrap()
            .into()
    }

    fn assistant_with_tool_call(id: &str) -> ChatCompletionRequestMessage {
        ChatCompletionRequestAssistantMessageArgs::default()
            .tool_calls(vec![ChatCompletionMessageToolCall {
                id: id.to_string(),
                r#type: ChatCompletionToolType::Function,
                function: FunctionCall {
                    name: "read_file".to_string(),
                    arguments: r#"{"file_path": "notes.txt"}"#.to_string(),
                },
            }])
            .build()
            .unwrap()
            .into()
    }

    fn tool_response(id: &str) -> ChatCompletionRequestMessage {
        ChatCompletionRequestToolMessageArgs::default()
            .tool_call_id(id)
            .content("payload")
            .build()
            .unwrap()
            .into()
    }

    #[test]
    fn test_trim_history_below_limit_is_untouched() {
        let mut messages = vec![system(), user("q"), assistant("a")];
        trim_history(&mut messages, 10);
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn test_trim_history_drops_oldest_messages() {
        let mut messages = vec![system()];
        for i in 0..10 {
            messages.push(user(&format!("q{}", i)));
            messages.push(assistant(&format!("a{}", i)));
        }
        trim_history(&mut messages, 6);
        assert_eq!(messages.len(), 7);
        assert!(matches!(messages[0], ChatCompletionRequestMessage::System(_)));
        assert!(matches!(messages[1], ChatCompletionRequestMessage::User(_)));
    }

    #[test]
    fn test_trim_history_keeps_tool_responses_with_their_call() {
        // A cut landing between an assistant tool call and its tool response
        // must slide forward so the whole group is dropped together.
        let mut messages = vec![
            system(),
            user("q1"),
            assistant_with_tool_call("call1"),
            tool_response("call1"),
            assistant("a1"),
            user("q2"),
            assistant_with_tool_call("call2"),
            tool_response("call2"),
            assistant("a2"),
        ];
        trim_history(&mut messages, 2);

        assert!(matches!(messages[0], ChatCompletionRequestMessage::System(_)));
        assert!(!matches!(messages[1], ChatCompletionRequestMessage::Tool(_)));
        assert!(messages.len() <= 3);
    }
}

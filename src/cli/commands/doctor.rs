//! Doctor command - verify credentials and configuration.

use crate::cli::Output;
use crate::config::Settings;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    message: String,
    hint: Option<String>,
}

#[derive(Debug, PartialEq)]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Lese Doctor");
    println!();
    println!("Checking credentials and configuration...\n");

    let mut checks = Vec::new();

    println!("{}", style("Credentials").bold());
    checks.push(check_model_key(settings));
    checks.push(check_search_key(settings));
    for check in &checks {
        check.print();
    }

    println!("\n{}", style("Configuration").bold());
    let config_check = check_config_file();
    config_check.print();
    checks.push(config_check);

    println!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!("{} check(s) failed.", errors));
    } else if warnings > 0 {
        Output::warning(&format!("Ready, with {} warning(s).", warnings));
    } else {
        Output::success("Everything looks good.");
    }

    Ok(())
}

fn check_model_key(settings: &Settings) -> CheckResult {
    let env = &settings.model.api_key_env;
    match settings.model_api_key() {
        Ok(_) => CheckResult::ok(env, "set"),
        Err(_) => CheckResult::error(
            env,
            "not set",
            &format!("The agent cannot run without it: export {}='...'", env),
        ),
    }
}

fn check_search_key(settings: &Settings) -> CheckResult {
    let env = &settings.search.api_key_env;
    match settings.search_api_key() {
        Some(_) => CheckResult::ok(env, "set"),
        None => CheckResult::warning(
            env,
            "not set",
            "Optional; the web_search tool will be disabled without it.",
        ),
    }
}

fn check_config_file() -> CheckResult {
    let path = Settings::default_config_path();
    if path.exists() {
        CheckResult::ok("config file", &format!("{}", path.display()))
    } else {
        CheckResult::warning(
            "config file",
            "not found (using built-in defaults)",
            "Create one with: lese config edit",
        )
    }
}

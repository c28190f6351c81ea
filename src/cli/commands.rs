//! CLI command implementations
//!
//! `serve` boots the HTTP server; `explain` runs one exchange against the
//! provider and prints the result. Both read provider configuration from
//! the environment exactly once.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::config::{ProviderConfig, API_KEY_ENV};
use crate::explain::{DetailLevel, ExplainRequest, ExplainService};
use crate::http_server::{ExplainState, HttpServer, HttpServerConfig};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { host, port } => serve(&host, port),
        Command::Explain { file, detail } => explain(&file, detail),
    }
}

fn runtime() -> CliResult<Runtime> {
    Runtime::new().map_err(|e| CliError::Boot(format!("failed to start runtime: {}", e)))
}

fn build_service() -> ExplainService {
    let provider = ProviderConfig::from_env();
    if !provider.is_configured() {
        Logger::warn("PROVIDER_NOT_CONFIGURED", &[("env", API_KEY_ENV)]);
    }
    ExplainService::from_config(&provider)
}

/// Start the HTTP server
pub fn serve(host: &str, port: u16) -> CliResult<()> {
    let state = Arc::new(ExplainState::new(build_service()));
    let config = HttpServerConfig::with_addr(host, port);
    let server = HttpServer::with_config(config, state);

    runtime()?
        .block_on(server.start())
        .map_err(|e| CliError::Boot(e.to_string()))
}

/// Explain a single file (or stdin) and print the result
pub fn explain(file: &Path, detail: DetailLevel) -> CliResult<()> {
    let code = read_code(file)?;
    let service = build_service();

    let response = runtime()?
        .block_on(service.explain(ExplainRequest::new(code, detail)))
        .map_err(|e| CliError::Explain(e.to_string()))?;

    println!("{}", response.explanation);
    Ok(())
}

fn read_code(file: &Path) -> CliResult<String> {
    if file.as_os_str() == "-" {
        let mut code = String::new();
        std::io::stdin().read_to_string(&mut code)?;
        Ok(code)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_code_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "fn main() {{}}").unwrap();

        let code = read_code(file.path()).unwrap();
        assert_eq!(code, "fn main() {}");
    }

    #[test]
    fn test_read_code_missing_file() {
        let result = read_code(Path::new("/nonexistent/source.rs"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_explain_without_key_reports_configuration() {
        // The service is unconfigured unless the environment provides a key;
        // skip when the surrounding environment has one set.
        if std::env::var(API_KEY_ENV).is_ok() {
            return;
        }

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "fn main() {{}}").unwrap();

        let err = explain(file.path(), DetailLevel::Brief).unwrap_err();
        assert_eq!(err.to_string(), "API key not configured");
    }
}

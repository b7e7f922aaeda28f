//! `bmad-mcp-server`: serves the BMAD agent tools over stdio.

use bmad_core::config::{ServerConfig, DEFAULT_KNOWLEDGE_DIR, DEFAULT_LOG_LEVEL};
use bmad_core::logging;
use bmad_core::server::{serve_stdio, Dispatcher};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

/// Expose BMAD agents, tasks and knowledge to an MCP client over stdio.
#[derive(Debug, Parser)]
#[command(name = "bmad-mcp-server", version, about)]
struct Args {
    /// Agent-definition markdown document
    #[arg(long, env = "BMAD_CONFIG_PATH", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Project root containing the knowledge directory
    #[arg(long, env = "BMAD_PROJECT_ROOT", value_name = "DIR")]
    project_root: Option<PathBuf>,

    /// Knowledge directory, relative to the project root
    #[arg(long, env = "BMAD_KNOWLEDGE_DIR", default_value = DEFAULT_KNOWLEDGE_DIR)]
    knowledge_dir: String,

    /// Log filter for stderr output; RUST_LOG takes precedence
    #[arg(long, env = "BMAD_LOG", default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,
}

impl Args {
    fn into_config(self) -> bmad_core::config::ConfigResult<ServerConfig> {
        Ok(ServerConfig::new(self.config, self.project_root)?
            .with_knowledge_dir(self.knowledge_dir)?
            .with_log_level(self.log_level))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            return Ok(ExitCode::FAILURE);
        }
    };

    logging::init(&config.log_level);

    let dispatcher = Dispatcher::from_config(&config).await;
    serve_stdio(&dispatcher).await?;

    Ok(ExitCode::SUCCESS)
}

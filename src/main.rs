use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use strategy_tools::host::memory::MemoryHost;
use strategy_tools::transform::PositionClipboard;
use strategy_tools::{StatusKind, ToolError, ToolState, ToolsConfig, run_id};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read slide fixture: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ToolError),
    #[error("{0} command(s) failed")]
    Failed(usize),
}

#[derive(Parser, Debug)]
#[command(name = "strategy-tools", about = "Run slide-layout commands against a JSON slide fixture")]
struct Cli {
    /// Slide fixture: `{"shapes": [...], "selection": [...]}`.
    #[arg(long, env = "STRATEGY_TOOLS_SLIDE")]
    slide: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run ribbon command ids in order, sharing one position clipboard.
    Run {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Print the fixture's shapes without changing them.
    Show,
}

#[tokio::main]
async fn main() {
    strategy_tools::init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run_cli(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run_cli(cli: Cli) -> Result<(), CliError> {
    let fixture = std::fs::read_to_string(&cli.slide)?;
    let host = Arc::new(MemoryHost::from_json(&fixture)?);
    let state = ToolState::new(host.clone(), ToolsConfig::from_env()?);

    let mut failed = 0;
    if let Command::Run { ids } = &cli.command {
        let mut clipboard = PositionClipboard::new();
        for id in ids {
            let status = run_id(&state, &mut clipboard, id).await;
            if status.kind == StatusKind::Error {
                failed += 1;
            }
            println!("{}", serde_json::to_string(&status)?);
        }
    }

    println!("{}", serde_json::to_string_pretty(&host.shapes())?);
    if failed > 0 {
        return Err(CliError::Failed(failed));
    }
    Ok(())
}

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

mod commands;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use commands::Output;
use git_persona::config::load_config;
use git_persona::logging::{default_log_dir, init_logging, parse_rotation, LogConfig};
use git_persona::{
    GitCli, IdentityService, JsonProfileStore, Notice, PersonaConfig, Scope, Workspace,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn, Level};

/// git-persona - switch between git identities per repository or globally
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Workspace folder; repeatable, the first one is where git runs.
    /// Defaults to the current directory.
    #[arg(long = "workspace", value_name = "DIR", global = true)]
    workspaces: Vec<PathBuf>,

    /// Print machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable JSON log format
    #[arg(long, env = "GIT_PERSONA_LOG_JSON", default_value = "false", global = true)]
    log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "GIT_PERSONA_LOG_ROTATION", default_value = "daily", global = true)]
    log_rotation: String,

    /// Custom log directory (default: ~/.git-persona/logs)
    #[arg(long, env = "GIT_PERSONA_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the git identity currently in effect
    Current,
    /// List known identities, marking the current one
    List,
    /// Apply a known identity by its number from `list`
    Use {
        /// 1-based position in `list`
        index: usize,
        /// Write the user's global git config instead of the repository's
        #[arg(long)]
        global: bool,
    },
    /// Apply a new identity and remember it
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Write the user's global git config instead of the repository's
        #[arg(long)]
        global: bool,
    },
}

fn scope_for(global: bool) -> Scope {
    if global {
        Scope::Global
    } else {
        Scope::Local
    }
}

fn workspace_from(roots: Vec<PathBuf>) -> Workspace {
    if roots.is_empty() {
        std::env::current_dir().map_or_else(|_| Workspace::none(), Workspace::single)
    } else {
        Workspace::new(roots)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    let args = Args::parse();

    let log_config = LogConfig {
        log_dir: args.log_dir.clone().unwrap_or_else(default_log_dir),
        log_level: if args.verbose { Level::DEBUG } else { Level::INFO },
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
    };
    if let Err(e) = init_logging(log_config) {
        eprintln!("warning: logging is disabled: {e}");
    }

    // Config file is optional; a broken one must not block switching.
    let config = load_config().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e}");
        PersonaConfig::default()
    });

    let store = match config.store.path.clone() {
        Some(path) => JsonProfileStore::new(path),
        None => match JsonProfileStore::open_default() {
            Ok(store) => store,
            Err(e) => {
                eprintln!("{}", Notice::error(format!("Cannot locate the profile list: {e}")));
                return Ok(ExitCode::FAILURE);
            }
        },
    };
    debug!("Using profile list at {}", store.path().display());

    let git = GitCli::new(config.git.program.clone(), config.git.timeout());
    if !git.is_available() {
        warn!("{} was not found on PATH", git.program());
    }

    let service = IdentityService::new(store, git, workspace_from(args.workspaces));
    let output = Output { json: args.json };

    let succeeded = match args.command {
        Command::Current => commands::current(&service, output).await,
        Command::List => commands::list(&service, output).await,
        Command::Use { index, global } => {
            commands::use_known(&service, index, scope_for(global), output).await
        }
        Command::Add {
            name,
            email,
            global,
        } => commands::add(&service, name, email, scope_for(global), output).await,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

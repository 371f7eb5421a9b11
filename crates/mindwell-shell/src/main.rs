//! Mindwell terminal shell.
//!
//! Binds the application view models to an interactive terminal: a
//! rustyline command loop in place of DOM event handlers, colored output in
//! place of rendered fragments.

mod app;
mod commands;
mod helper;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use crate::helper::CliHelper;

#[derive(Parser)]
#[command(name = "mindwell")]
#[command(about = "Mindwell - personal wellbeing client", long_about = None)]
struct Cli {
    /// Path to an alternate config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "mindwell=debug"
    } else {
        "mindwell=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let ctx = app::bootstrap(cli.config).await?;
    let mut session_rx = ctx.auth.subscribe();

    // Session restore is the single source of truth for the launch view:
    // a valid stored session opens the main shell with the profile loaded,
    // anything else shows the auth view.
    match ctx.auth.restore_session().await {
        Ok(Some(session)) => {
            render::main_shell(&session);
            if let Some(view) = ctx.profile.load().await {
                render::profile(&view);
            }
        }
        Ok(None) => render::auth_view(),
        Err(e) => {
            render::error(&e);
            render::auth_view();
        }
    }
    session_rx.mark_unchanged();

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                commands::dispatch(&ctx, trimmed).await;

                // The session watch channel is the auth-state listener:
                // every change re-enters the view transition exactly once.
                if session_rx.has_changed().unwrap_or(false) {
                    let session = session_rx.borrow_and_update().clone();
                    match session {
                        Some(session) => {
                            render::main_shell(&session);
                            if let Some(view) = ctx.profile.load().await {
                                render::profile(&view);
                            }
                        }
                        None => render::auth_view(),
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(e) => {
                eprintln!("{}", format!("Input error: {e}").red());
                break;
            }
        }
    }

    Ok(())
}

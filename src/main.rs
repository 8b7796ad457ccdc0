//! Ravens Rock - headless front end
//!
//! `ravens-rock <document.json>` sends the saved request, prints the
//! status and response text, and autosaves the sent request as a draft.
//! `ravens-rock --new <document.json> [url]` writes a fresh GET document.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};

use ravens_rock::constants::{APP_NAME, APP_VERSION};
use ravens_rock::{ClientConfig, Executor, Session, Storage};

enum Command {
    Send(PathBuf),
    New { path: PathBuf, url: Option<String> },
    Help,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    match args.next().as_deref() {
        None | Some("-h") | Some("--help") => Ok(Command::Help),
        Some("--new") => {
            let path = args.next().ok_or_else(|| anyhow!("--new needs a document path"))?;
            Ok(Command::New {
                path: PathBuf::from(path),
                url: args.next(),
            })
        }
        Some(flag) if flag.starts_with('-') => bail!("Unknown option: {}", flag),
        Some(path) => Ok(Command::Send(PathBuf::from(path))),
    }
}

fn print_help() {
    println!("{} {}", APP_NAME, APP_VERSION);
    println!();
    println!("Usage:");
    println!("  ravens-rock <document.json>           send the saved request (autosaved to ~/.ravens-rock/drafts)");
    println!("  ravens-rock --new <document.json> [url]  create a new GET document");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "ravens-rock.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    match parse_args(std::env::args().skip(1))? {
        Command::Help => print_help(),

        Command::New { path, url } => {
            let mut session = Session::new();
            if let Some(url) = url {
                session.set_url(&url);
            }
            session
                .save(&path)
                .with_context(|| format!("Failed to save {}", path.display()))?;
            println!("Created {}", path.display());
        }

        Command::Send(path) => {
            let mut session = Session::open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let executor = Executor::new(&ClientConfig::from_env());

            let result = session.send(&executor).await?;

            // best-effort: a failed draft write is only logged
            let draft_name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("untitled");
            if let Err(e) = session.autosave(&Storage::new(), draft_name) {
                tracing::warn!(error = %e, "Draft autosave failed");
            }

            println!("{}", result.display_status());
            println!("{}", result.display_text());
        }
    }

    Ok(())
}

mod app;
mod domain;
mod error;
mod parser;
mod storage;
mod ui;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::App;
use storage::Storage;

#[derive(Parser, Debug)]
#[command(author, version, about = "yaru — chat-style todo and deadline tracker", long_about = None)]
struct Args {
    /// Path to the task file (default: OS data dir)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Full-screen chat UI instead of the plain prompt
    #[arg(long, default_value_t = false)]
    tui: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yaru=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let storage = match args.data_file {
        Some(path) => Storage::new(path),
        None => Storage::open_default()?,
    };
    let app = App::new(storage);

    if args.tui {
        ui::run(app)
    } else {
        run_prompt(app)
    }
}

fn run_prompt(mut app: App) -> Result<()> {
    println!("{}", app::WELCOME);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        println!("{}", app.process_command(&line));
        if app.is_exit() {
            break;
        }
    }
    Ok(())
}

mod repl;

use anyhow::Context;
use clap::Parser;
use silly_nav::config::DEFAULT_CONFIG_PATH;
use silly_nav::{Config, Dictionaries, Interpreter, TextBuffer, WordTray};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use repl::{handle_line, LineResult};

/// Drive a text buffer with spoken navigation commands.
///
/// Each line on stdin is one recognized utterance. Lines that are not
/// commands are typed at the cursor. The final document goes to stdout.
#[derive(Parser)]
#[command(name = "silly-nav")]
struct Cli {
    /// Document to open (starts empty when omitted)
    file: Option<PathBuf>,

    /// Config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory of dictionary JSON files, overrides the config
    #[arg(long)]
    dictionaries: Option<PathBuf>,

    /// Log every token and transition
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if cli.dictionaries.is_some() {
        config.dictionaries = cli.dictionaries.clone();
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { config.log_filter.as_str() })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let dictionaries: Dictionaries = config.load_dictionaries()?;
    let buffer = match &cli.file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            TextBuffer::from_text(&text)
        }
        None => TextBuffer::new(),
    };

    let mut session = Interpreter::new(config.grammar(dictionaries), buffer, WordTray::new());
    tracing::info!(file = ?cli.file, "Listening for utterances on stdin");

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if handle_line(&mut session, &line) == LineResult::Quit {
            break;
        }
    }

    let (buffer, _) = session.into_parts();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{buffer}")?;
    stdout.flush()?;
    Ok(())
}

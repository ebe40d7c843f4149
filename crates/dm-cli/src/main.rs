mod output;
mod shell;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dm_store::{KNOWLEDGE_ENV, KnowledgeBase, Settings};

use crate::output::Format;
use crate::shell::Shell;

#[derive(Parser)]
#[command(
    name = "docu-mind",
    about = "Ask a question to the knowledge base",
    long_about = "Ask a question to the knowledge base.\n\n\
        Prints the fact most similar to QUERY under TF-IDF cosine similarity. \
        Without QUERY, prompts repeatedly until an empty line, `exit`, `quit` \
        or end of input."
)]
struct Cli {
    /// The question/query to search for
    query: Option<String>,

    /// Knowledge file, one fact per line
    #[arg(short, long, env = KNOWLEDGE_ENV)]
    file: Option<PathBuf>,

    /// Minimum similarity for a fact to count as a match (0 to 1)
    #[arg(long)]
    min_score: Option<f64>,

    /// Print one JSON object per query instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose debug output
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("aborting: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings =
        Settings::new(cli.file.clone(), cli.min_score).context("invalid configuration")?;
    let format = if cli.json { Format::Json } else { Format::Text };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if format == Format::Text {
        output::banner(&mut out)?;
    }

    let knowledge = KnowledgeBase::load(&settings.knowledge_path)
        .context("failed to load knowledge base")?;
    let source = knowledge
        .path()
        .unwrap_or(settings.knowledge_path.as_path());
    tracing::info!(
        facts = knowledge.len(),
        path = %source.display(),
        "knowledge base loaded"
    );

    if format == Format::Text {
        output::loaded(&mut out, knowledge.len(), source)?;
    }
    out.flush()?;

    let mut shell = Shell::new(&knowledge, settings.min_score, format, out);
    match cli.query.as_deref() {
        Some(query) => shell.answer(query),
        None => shell.run_interactive(io::stdin().lock()),
    }
}

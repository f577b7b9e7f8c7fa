use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use tracing::{debug, info};

use crate::core::layout::Layout;
use crate::core::renderer;
use crate::core::terminal::PromptContext;
use crate::source::read_words;

#[derive(Parser, Debug)]
#[command(name = "wordbox")]
#[command(about = "Read words from stdin and draw them as ASCII boxes")]
#[command(version)]
pub struct Cli {
    /// Layout to print, repeatable; defaults to row, page and table
    #[arg(short, long = "layout", value_enum)]
    pub layouts: Vec<Layout>,

    /// Minimum cell width for the row layout (defaults to the longest word)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Always show the interactive prompt
    #[arg(long, conflicts_with = "no_prompt")]
    pub prompt: bool,

    /// Never show the interactive prompt
    #[arg(long)]
    pub no_prompt: bool,

    /// Default log level for wordbox (RUST_LOG is merged in)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn selected_layouts(&self) -> Vec<Layout> {
        if self.layouts.is_empty() {
            Layout::ALL.to_vec()
        } else {
            self.layouts.clone()
        }
    }

    /// Explicit flags win; otherwise prompt only on an interactive stdin.
    pub fn prompt_enabled(&self, stdin_is_tty: bool) -> bool {
        if self.prompt {
            true
        } else if self.no_prompt {
            false
        } else {
            stdin_is_tty
        }
    }
}

/// Install the stderr subscriber. Stdout is reserved for the boxes.
pub fn init_tracing(level: &str) {
    let default_directive = format!("wordbox={}", level.to_lowercase());
    let env_override = env::var("RUST_LOG").unwrap_or_default();
    let combined_filter = if env_override.trim().is_empty() {
        default_directive
    } else if env_override.contains("wordbox") {
        env_override
    } else {
        format!("{},{}", env_override, default_directive)
    };

    tracing_subscriber::fmt()
        .with_env_filter(combined_filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

/// Collect words from `input`, then write every selected layout to `out`.
pub fn run<R, W, P>(cli: &Cli, input: R, out: &mut W, prompt: &mut PromptContext<P>) -> Result<()>
where
    R: BufRead,
    W: Write,
    P: Write,
{
    let words = read_words(input, prompt).context("failed to read words")?;

    for layout in cli.selected_layouts() {
        debug!(%layout, width = ?cli.width, "rendering");
        let text = renderer::render(&words, layout, cli.width);
        writeln!(out, "{text}").context("failed to write output")?;
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let stdin = io::stdin();
    let enabled = cli.prompt_enabled(stdin.is_tty());
    info!(prompt = enabled, layouts = ?cli.selected_layouts(), "starting");

    let mut prompt = PromptContext::stdout(enabled);
    let mut out = io::stdout().lock();
    run(&cli, stdin.lock(), &mut out, &mut prompt)
}

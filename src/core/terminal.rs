/// Terminal prompt context used while collecting words
use crossterm::{cursor, terminal, QueueableCommand};
use std::io::{self, Stdout, Write};

pub const BANNER: [&str; 2] = [
    "Type in a list of words.",
    "Input stops when you enter an empty line.",
];
pub const PROMPT: &str = "$> ";
pub const END_OF_INPUT: &str = "[END OF INPUT]";

/// Writes the interactive prompt. A disabled prompt swallows everything, so
/// piped input produces only the rendered boxes.
pub struct PromptContext<W: Write> {
    out: W,
    enabled: bool,
}

impl PromptContext<Stdout> {
    pub fn stdout(enabled: bool) -> Self {
        Self::new(io::stdout(), enabled)
    }
}

impl<W: Write> PromptContext<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn banner(&mut self) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        for line in BANNER {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    /// Print `$> ` and wait on the same line.
    pub fn prompt(&mut self) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        write!(self.out, "{PROMPT}")?;
        self.out.flush()
    }

    /// Input closed without a final newline; move to a fresh line first.
    pub fn line_break(&mut self) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Replace the last prompt line with the end-of-input marker.
    pub fn finish(&mut self) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.out.queue(cursor::MoveUp(1))?;
        self.out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        writeln!(self.out, "\r{PROMPT}{END_OF_INPUT}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

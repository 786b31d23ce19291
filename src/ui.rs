// Terminal output: the line-oriented progress report written while the
// upload runs. The writer is generic so tests can capture the text.

use std::fmt::Display;
use std::io::{self, Write};

use crate::api::ResultEntry;
use crate::orchestrator::Summary;

const RULE_WIDTH: usize = 50;

/// Writes human-readable progress lines to any `Write` sink.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self, ch: char) -> io::Result<()> {
        writeln!(self.out, "{}", ch.to_string().repeat(RULE_WIDTH))
    }

    pub fn start(&mut self) -> io::Result<()> {
        writeln!(self.out, "Starting product upload process...")?;
        self.rule('=')
    }

    pub fn loading(&mut self, category: &str) -> io::Result<()> {
        writeln!(self.out, "\nLoading {} data...", category)
    }

    pub fn processing(&mut self, category: &str) -> io::Result<()> {
        writeln!(self.out, "\nProcessing {}...", category)?;
        self.rule('-')
    }

    pub fn entry(&mut self, entry: &ResultEntry) -> io::Result<()> {
        writeln!(self.out, "{}", entry)
    }

    pub fn completed(&mut self, category: &str, items: usize) -> io::Result<()> {
        writeln!(self.out, "\nCompleted {}: {} items processed", category, items)?;
        self.rule('=')
    }

    pub fn source_failed(&mut self, category: &str, err: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "\n❌ Error processing {}: {}", category, err)?;
        self.rule('=')
    }

    pub fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(self.out, "\nFinal Summary")?;
        self.rule('=')?;
        writeln!(self.out, "Total items processed: {}", summary.total)?;
        writeln!(self.out, "Successful uploads: {}", summary.successes)?;
        writeln!(self.out, "Failed uploads: {}", summary.failures)?;
        self.out.flush()
    }
}

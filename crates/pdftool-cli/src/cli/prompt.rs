//! Interactive prompts for the run parameters.

use super::RunParams;
use anyhow::{Context, Result};
use pdftool_core::paths;
use std::io::{BufRead, Write};
use std::path::Path;

/// Answers accepted as "yes" to the delete confirmation.
const AFFIRMATIVE: [&str; 5] = ["Y", "y", "Yes", "yes", "YES"];

pub fn is_affirmative(answer: &str) -> bool {
    AFFIRMATIVE.contains(&answer.trim())
}

/// Asks questions on `output` and reads answers line by line from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and returns the answer without its line ending.
    /// End of input reads as an empty answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "\n{question}\n> ").context("failed to write prompt")?;
        self.output.flush().context("failed to write prompt")?;
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("failed to read answer")?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Asks for URL, directory and delete confirmation, in that order.
    pub fn ask_params(&mut self) -> Result<RunParams> {
        let url = self.ask("What is the URL from which to download the PDF files?")?;
        let dir = self.ask(
            "What is the directory where the new files should be stored? (default: current directory)",
        )?;
        let delete = self.ask(&format!(
            "Delete all existing pdf/txt files in {}? (yes/no)",
            paths::absolute_path(Path::new(&dir))
        ))?;
        Ok(RunParams::new(Some(&url), Path::new(&dir), is_affirmative(&delete)))
    }
}

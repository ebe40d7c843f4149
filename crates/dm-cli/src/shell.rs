use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use dm_store::KnowledgeBase;

use crate::output::{self, Format};

pub const PROMPT: &str = "Enter your query: ";

/// Inputs that end an interactive session, compared case-insensitively.
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Answers queries against a loaded knowledge base.
pub struct Shell<'a, W: Write> {
    knowledge: &'a KnowledgeBase,
    min_score: f64,
    format: Format,
    out: W,
}

impl<'a, W: Write> Shell<'a, W> {
    pub fn new(knowledge: &'a KnowledgeBase, min_score: f64, format: Format, out: W) -> Self {
        Self {
            knowledge,
            min_score,
            format,
            out,
        }
    }

    /// Match one query and print the result. A blank query is reported
    /// without matching.
    pub fn answer(&mut self, query: &str) -> Result<()> {
        if query.trim().is_empty() {
            tracing::debug!("empty query");
            output::empty_query(&mut self.out, self.format, query)?;
            return Ok(());
        }

        let outcome = self
            .knowledge
            .best_match(query)
            .context("failed to vectorize query")?
            .outcome(self.min_score);
        tracing::debug!(?outcome, "query answered");

        output::result(&mut self.out, self.format, query, &outcome)?;
        self.out.flush()?;
        Ok(())
    }

    /// Prompt for queries until end of input, an empty line, or an exit word.
    /// The terminating line is never matched.
    pub fn run_interactive<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        tracing::info!("interactive session started");
        let mut line = Vec::new();
        let mut answered = 0usize;

        loop {
            if self.format == Format::Text {
                write!(self.out, "{PROMPT}")?;
                self.out.flush()?;
            }

            line.clear();
            if input
                .read_until(b'\n', &mut line)
                .context("failed to read query")?
                == 0
            {
                if self.format == Format::Text {
                    writeln!(self.out)?;
                }
                break;
            }

            // Invalid UTF-8 is replaced rather than ending the session
            let decoded = String::from_utf8_lossy(&line);
            let query = decoded.trim();
            if is_exit(query) {
                break;
            }
            self.answer(query)?;
            answered += 1;
        }

        tracing::info!(answered, "interactive session ended");
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

fn is_exit(query: &str) -> bool {
    query.is_empty() || EXIT_WORDS.iter().any(|w| query.eq_ignore_ascii_case(w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn knowledge() -> KnowledgeBase {
        KnowledgeBase::from_lines([
            "Paris is the capital of France.",
            "Rome is the capital of Italy.",
        ])
    }

    fn interactive(input: &str, format: Format) -> String {
        let kb = knowledge();
        let mut shell = Shell::new(&kb, dm_core::DEFAULT_MIN_SCORE, format, Vec::new());
        shell.run_interactive(Cursor::new(input)).unwrap();
        String::from_utf8(shell.into_inner()).unwrap()
    }

    #[test]
    fn test_answer_found() {
        let kb = knowledge();
        let mut shell = Shell::new(&kb, dm_core::DEFAULT_MIN_SCORE, Format::Text, Vec::new());
        shell.answer("capital of France").unwrap();
        let out = String::from_utf8(shell.into_inner()).unwrap();
        assert!(out.contains("Answer: Paris is the capital of France."));
    }

    #[test]
    fn test_answer_no_match() {
        let kb = knowledge();
        let mut shell = Shell::new(&kb, dm_core::DEFAULT_MIN_SCORE, Format::Text, Vec::new());
        shell.answer("bananas").unwrap();
        let out = String::from_utf8(shell.into_inner()).unwrap();
        assert!(out.contains(output::NO_MATCH_MESSAGE));
    }

    #[test]
    fn test_answer_blank_query() {
        let kb = knowledge();
        let mut shell = Shell::new(&kb, dm_core::DEFAULT_MIN_SCORE, Format::Text, Vec::new());
        shell.answer("   ").unwrap();
        let out = String::from_utf8(shell.into_inner()).unwrap();
        assert_eq!(out, format!("{}\n", output::EMPTY_QUERY_MESSAGE));
    }

    #[test]
    fn test_high_threshold_turns_match_into_no_match() {
        let kb = knowledge();
        let mut shell = Shell::new(&kb, 1.0, Format::Text, Vec::new());
        shell.answer("capital of France").unwrap();
        let out = String::from_utf8(shell.into_inner()).unwrap();
        assert!(out.contains(output::NO_MATCH_MESSAGE));
    }

    #[test]
    fn test_interactive_multiple_queries_then_empty_line() {
        let out = interactive("capital of France\nbananas\ncapital of Italy\n\nignored\n", Format::Text);
        assert_eq!(out.matches(PROMPT).count(), 4);
        assert!(out.contains("Answer: Paris is the capital of France."));
        assert!(out.contains(output::NO_MATCH_MESSAGE));
        assert!(out.contains("Answer: Rome is the capital of Italy."));
        assert!(!out.contains("ignored"));
    }

    #[test]
    fn test_interactive_exit_word() {
        let out = interactive("  QUIT \ncapital of France\n", Format::Text);
        assert_eq!(out.matches(PROMPT).count(), 1);
        assert!(!out.contains("Searching for"));
    }

    #[test]
    fn test_interactive_eof() {
        let out = interactive("capital of Italy", Format::Text);
        assert!(out.contains("Answer: Rome is the capital of Italy."));
        assert_eq!(out.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_interactive_json_has_no_prompt() {
        let out = interactive("capital of France\nexit\n", Format::Json);
        assert!(!out.contains(PROMPT));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["index"], 0);
    }

    #[test]
    fn test_interactive_invalid_utf8_line_does_not_end_session() {
        let kb = knowledge();
        let mut shell = Shell::new(&kb, dm_core::DEFAULT_MIN_SCORE, Format::Text, Vec::new());
        let input: &[u8] = b"\xff\xfe\ncapital of France\n";
        shell.run_interactive(input).unwrap();
        let out = String::from_utf8(shell.into_inner()).unwrap();
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert!(out.contains(output::NO_MATCH_MESSAGE));
        assert!(out.contains("Answer: Paris is the capital of France."));
    }

    #[test]
    fn test_is_exit() {
        assert!(is_exit(""));
        assert!(is_exit("exit"));
        assert!(is_exit("Exit"));
        assert!(!is_exit("exit now"));
        assert!(!is_exit("capital"));
    }
}

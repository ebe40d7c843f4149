use std::io::{self, Write};
use std::path::Path;

use dm_core::Outcome;
use serde::Serialize;

const RULE_WIDTH: usize = 50;

pub const NO_MATCH_MESSAGE: &str = "No relevant information found in the knowledge base.";
pub const EMPTY_QUERY_MESSAGE: &str = "Error: Empty query.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// One answered query, as emitted in JSON mode.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub query: &'a str,
    pub matched: bool,
    pub score: f64,
    pub index: Option<usize>,
    pub answer: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl<'a> Report<'a> {
    pub fn from_outcome(query: &'a str, outcome: &'a Outcome) -> Self {
        match outcome {
            Outcome::Found(m) => Self {
                query,
                matched: true,
                score: m.score,
                index: Some(m.index),
                answer: Some(m.fact.as_str()),
                error: None,
            },
            Outcome::NoMatch { best_score } => Self {
                query,
                matched: false,
                score: *best_score,
                index: None,
                answer: None,
                error: None,
            },
        }
    }

    pub fn empty_query(query: &'a str) -> Self {
        Self {
            query,
            matched: false,
            score: 0.0,
            index: None,
            answer: None,
            error: Some("empty query"),
        }
    }
}

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    rule(out)?;
    writeln!(out, "   DOCU-MIND: Simple RAG System")?;
    rule(out)
}

pub fn loaded(out: &mut impl Write, count: usize, path: &Path) -> io::Result<()> {
    writeln!(out, "[INFO] Loaded {count} facts from {}.\n", path.display())
}

/// Write the answer for `query` in the chosen format.
pub fn result(
    out: &mut impl Write,
    format: Format,
    query: &str,
    outcome: &Outcome,
) -> io::Result<()> {
    match format {
        Format::Json => json_line(out, &Report::from_outcome(query, outcome)),
        Format::Text => {
            writeln!(out, "\nSearching for: \"{query}\"...")?;
            writeln!(out, "\n--- Result ---")?;
            match outcome {
                Outcome::Found(m) => {
                    writeln!(out, "Match Score: {:.4}", m.score)?;
                    writeln!(out, "Answer: {}", m.fact)?;
                }
                Outcome::NoMatch { .. } => writeln!(out, "{NO_MATCH_MESSAGE}")?,
            }
            rule(out)
        }
    }
}

pub fn empty_query(out: &mut impl Write, format: Format, query: &str) -> io::Result<()> {
    match format {
        Format::Json => json_line(out, &Report::empty_query(query)),
        Format::Text => writeln!(out, "{EMPTY_QUERY_MESSAGE}"),
    }
}

fn json_line(out: &mut impl Write, report: &Report<'_>) -> io::Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)
}

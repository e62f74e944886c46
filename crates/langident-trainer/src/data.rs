//! Loading of fastText-style labeled corpora.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use langident_core::LABEL_PREFIX;
use tracing::warn;

/// One corpus line: its labels and the remaining text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledExample {
    pub labels: Vec<String>,
    pub text: String,
}

impl LabeledExample {
    pub fn new(labels: Vec<String>, text: impl Into<String>) -> Self {
        Self {
            labels,
            text: text.into(),
        }
    }

    /// Parses a line. Every whitespace-separated token starting with
    /// `__label__` is a label; the rest, joined by single spaces, is the text.
    /// Returns `None` for lines without any label.
    pub fn parse(line: &str) -> Option<Self> {
        let (labels, words): (Vec<&str>, Vec<&str>) = line
            .split_whitespace()
            .partition(|token| token.starts_with(LABEL_PREFIX));

        if labels.is_empty() {
            return None;
        }

        Some(Self::new(
            labels.into_iter().map(str::to_owned).collect(),
            words.join(" "),
        ))
    }
}

/// A parsed corpus.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub examples: Vec<LabeledExample>,
    /// Non-blank lines dropped because they carried no label.
    pub skipped: usize,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Number of examples per label, sorted by label.
    pub fn label_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for example in &self.examples {
            for label in &example.labels {
                *counts.entry(label.as_str()).or_insert(0) += 1;
            }
        }
        counts
    }
}

/// Parses a corpus from any buffered reader.
pub fn parse_corpus<R: BufRead>(reader: R) -> std::io::Result<Corpus> {
    let mut corpus = Corpus::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match LabeledExample::parse(&line) {
            Some(example) => corpus.examples.push(example),
            None => {
                warn!(line = line_no + 1, "skipping corpus line without a label");
                corpus.skipped += 1;
            }
        }
    }

    Ok(corpus)
}

/// Load a corpus file.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> std::io::Result<Corpus> {
    let file = File::open(path)?;
    parse_corpus(BufReader::new(file))
}

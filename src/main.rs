use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gstree::{DocumentId, GeneralizedSuffixTree, TreeConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "gstree",
    about = "Multi-document substring search over a generalized suffix tree"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the ids (and text) of documents containing a pattern.
    Search {
        /// Corpus file: one document per line, optionally `<id>\t<text>`.
        corpus: PathBuf,
        /// Substring to look for.
        pattern: String,
        /// Maximum number of ids to print (negative: all).
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        limit: i64,
    },
    /// Print node, edge and membership counts for a corpus.
    Stats {
        /// Corpus file: one document per line, optionally `<id>\t<text>`.
        corpus: PathBuf,
    },
    /// Print the longest substring shared by every document.
    Lcs {
        /// Corpus file: one document per line, optionally `<id>\t<text>`.
        corpus: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            corpus,
            pattern,
            limit,
        } => run_search(&corpus, &pattern, limit)?,
        Commands::Stats { corpus } => run_stats(&corpus)?,
        Commands::Lcs { corpus } => run_lcs(&corpus)?,
    }

    Ok(())
}

fn run_search(corpus: &Path, pattern: &str, limit: i64) -> Result<()> {
    let tree = load_corpus(corpus)?;

    let hits = tree.search(pattern, limit);
    if hits.is_empty() {
        println!("No documents contain {:?}.", pattern);
        return Ok(());
    }

    for id in hits {
        // Several documents may share an id; print each of them.
        for doc in tree.documents().filter(|doc| doc.id() == id) {
            println!("{}\t{}", id, doc.text());
        }
    }

    Ok(())
}

fn run_stats(corpus: &Path) -> Result<()> {
    let tree = load_corpus(corpus)?;
    let stats = tree.stats();

    println!("documents\t{}", stats.documents);
    println!("symbols\t{}", stats.symbols);
    println!("nodes\t{}", stats.nodes);
    println!("internal\t{}", stats.internal_nodes);
    println!("leaves\t{}", stats.leaves);
    println!("edges\t{}", stats.edges);
    println!("membership\t{}", stats.membership_entries);

    Ok(())
}

fn run_lcs(corpus: &Path) -> Result<()> {
    let tree = load_corpus(corpus)?;
    println!("{:?}", tree.longest_common_substring());
    Ok(())
}

fn load_corpus(path: &Path) -> Result<GeneralizedSuffixTree> {
    let lines = read_corpus_lines(path)?;
    let config = TreeConfig::for_corpus(lines.len(), corpus_chars(&lines));
    let mut tree = GeneralizedSuffixTree::with_config(config);

    for (line_no, (id, text)) in lines.iter().enumerate() {
        tree.put_bytes(text, *id)
            .with_context(|| format!("line {} of {}", line_no + 1, path.display()))?;
    }

    Ok(tree)
}

/// Characters (not bytes) across all lines; invalid UTF-8 counts one
/// replacement character per bad sequence.
fn corpus_chars(lines: &[(DocumentId, Vec<u8>)]) -> usize {
    lines
        .iter()
        .map(|(_, line)| String::from_utf8_lossy(line).chars().count())
        .sum()
}

/// Split a corpus into `(id, text)` pairs without assuming it is UTF-8, so
/// that bad lines are reported by the tree rather than the reader.
fn read_corpus_lines(path: &Path) -> Result<Vec<(DocumentId, Vec<u8>)>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open corpus {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();

    for (line_no, line) in reader.split(b'\n').enumerate() {
        let mut line = line.with_context(|| format!("failed to read {}", path.display()))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        lines.push(parse_line(line_no, line));
    }

    Ok(lines)
}

fn parse_line(line_no: usize, line: Vec<u8>) -> (DocumentId, Vec<u8>) {
    if let Some(tab) = line.iter().position(|&b| b == b'\t') {
        let id = std::str::from_utf8(&line[..tab])
            .ok()
            .and_then(|field| field.trim().parse::<DocumentId>().ok());
        if let Some(id) = id {
            return (id, line[tab + 1..].to_vec());
        }
    }
    (line_no as DocumentId, line)
}

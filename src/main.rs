use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use topwords::{io, RankedWords, Tokenization, TopWords};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "topwords")]
#[command(about = "Prints the k most frequent words of a text", long_about = None)]
struct Args {
    /// Number of words to print; zero or less prints nothing
    #[arg(short = 'k', long = "top", default_value_t = 10, allow_negative_numbers = true)]
    k: isize,

    /// Rank this text instead of reading a file
    #[arg(short = 't', long, conflicts_with = "file")]
    text: Option<String>,

    /// Split on whitespace runs instead of single spaces
    #[arg(short = 'w', long)]
    collapse_whitespace: bool,

    /// Print the count next to each word
    #[arg(short = 'c', long)]
    counts: bool,

    /// Output results as JSON
    #[arg(long, conflicts_with = "counts")]
    json: bool,

    /// Input text file; standard input when missing or `-`
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let input = match args.text {
        Some(text) => text,
        None => io::read_input(args.file.as_deref())?,
    };

    let tokenization = if args.collapse_whitespace {
        Tokenization::Whitespace
    } else {
        Tokenization::SingleSpace
    };

    let ranked = match usize::try_from(args.k) {
        Ok(k) => TopWords::new(k).tokenization(tokenization).rank(&input),
        Err(_) => RankedWords::default(),
    };

    if args.json {
        let json = serde_json::to_string(&ranked).context("couldn't serialize results")?;
        println!("{json}");
    } else {
        for w in ranked {
            if args.counts {
                println!("{}\t{}", w.word, w.count);
            } else {
                println!("{}", w.word);
            }
        }
    }

    Ok(())
}

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use huffman_engine::{bits, Engine, Result};

/// Train a Huffman code on a corpus file, then encode, decode or check text.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Training corpus.
    #[arg(long, default_value = "train.txt")]
    train: PathBuf,

    /// Keep newlines in the corpus instead of replacing them with spaces.
    #[arg(long)]
    keep_newlines: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Print TEXT as a string of 0/1 bits.
    Encode { text: String },

    /// Print the text that a string of 0/1 bits decodes to.
    Decode { bits: String },

    /// Round-trip TEXT and print encoded and decoded sizes.
    Check { text: String },
}

fn run(args: Args) -> Result<()> {
    let mut corpus = fs::read_to_string(&args.train)?;
    if !args.keep_newlines {
        corpus = corpus.replace('\n', " ");
    }
    let engine = Engine::new(&corpus)?;

    match args.mode {
        Mode::Encode { text } => println!("{}", bits::format(&engine.encode(&text)?)),
        Mode::Decode { bits } => println!("{}", engine.decode_str(&bits)?),
        Mode::Check { text } => println!("{}", engine.check(&text)?),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

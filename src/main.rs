use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

mod bits;
mod huffman;
mod util;

use bits::Bits;
use huffman::Tree;

#[derive(Debug)]
enum Error {
    /// just relaying io::Error
    Io(io::Error),

    /// no input file was named and stdin is a terminal
    NoInput,

    /// a text symbol has no leaf in the tree built from that same text;
    /// indicates a defect, not a recoverable condition
    SymbolNotInTree(char),
}

// options
use clap::Parser;

/// represent all acceptable arguments
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// file to read the text from; stdin when omitted
    input: Option<PathBuf>,

    /// where the packed bytes are written
    #[clap(short, long, default_value = "packed.bits")]
    output: PathBuf,

    /// print the shape of the code tree before encoding
    #[clap(long)]
    dump_tree: bool,
}

fn main() -> Result<(), Error> {
    // prepare stdout with buffering
    let stdout = io::stdout();
    let mut stdout = BufWriter::new(stdout.lock());

    // get arguments
    let args = Args::parse();

    // get the whole text up front; nothing is written on failure here
    let text = match &args.input {
        Some(path) => fs::read_to_string(path).map_err(Error::Io)?,
        None => {
            // abort rather than block on an interactive terminal
            if atty::is(atty::Stream::Stdin) {
                writeln!(stdout, "prefixpack needs a file argument or piped stdin.")
                    .map_err(Error::Io)?;
                return Err(Error::NoInput);
            }
            let mut text = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut text)
                .map_err(Error::Io)?;
            text
        }
    };

    // empty text has no tree and encodes to the empty bit sequence
    let encoded = match Tree::from_text(&text) {
        Some(tree) => {
            if args.dump_tree {
                tree.dump(&mut stdout).map_err(Error::Io)?;
            }
            tree.encode(&text).map_err(Error::SymbolNotInTree)?
        }
        None => Bits::new(),
    };

    // the handle closes on every exit path once it drops
    let mut sink = fs::File::create(&args.output).map_err(Error::Io)?;
    sink.write_all(&bits::pack(&encoded)).map_err(Error::Io)?;
    Ok(())
}

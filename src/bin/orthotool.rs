use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use aro_ortho::converter::{Orthography, OrthographyConverter};
use aro_ortho::dict::WordDictionary;
use aro_ortho::segment::LatinSegmenter;
use aro_ortho::stats::CentralVowelModel;

#[derive(Parser)]
#[command(name = "orthotool", about = "Aromanian orthography conversion tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text from one orthography into the other
    Convert {
        /// Source orthography of the input text ("cunia" or "diaro")
        #[arg(long = "from")]
        source: String,
        /// Path to the compiled dictionary file
        #[arg(long)]
        dict: String,
        /// Path to the â-biased frequency table (JSON)
        #[arg(long)]
        circumflex: String,
        /// Path to the ă-biased frequency table (JSON)
        #[arg(long)]
        breve: String,
        /// Text to convert
        text: String,
    },

    /// Compile a TSV word list (cunia<TAB>diaro) into a binary dictionary
    CompileDict {
        /// Path to the input TSV file
        input: String,
        /// Path to the output dictionary file
        output: String,
    },

    /// Print entry counts for a compiled dictionary
    DictStats {
        /// Path to the compiled dictionary file
        dict_file: String,
    },
}

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            source,
            dict,
            circumflex,
            breve,
            text,
        } => {
            let source: Orthography = die!(source.parse(), "Error: {}");
            let dict = die!(
                WordDictionary::open(Path::new(&dict)),
                "Error opening dictionary: {}"
            );
            let vowels = die!(
                CentralVowelModel::open(Path::new(&circumflex), Path::new(&breve)),
                "Error opening frequency tables: {}"
            );
            let converter = OrthographyConverter::new(dict, vowels, Box::new(LatinSegmenter));
            println!("{}", converter.convert(&text, source));
        }

        Command::CompileDict { input, output } => {
            let file = die!(File::open(&input), "Error opening TSV: {}");
            let dict = die!(
                WordDictionary::from_tsv_reader(BufReader::new(file)),
                "Error importing TSV: {}"
            );
            die!(dict.save(Path::new(&output)), "Error writing dictionary: {}");
            println!("Wrote {} entries to {}", dict.len(), output);
        }

        Command::DictStats { dict_file } => {
            let dict = die!(
                WordDictionary::open(Path::new(&dict_file)),
                "Error opening dictionary: {}"
            );
            println!("{}: {} entries", dict_file, dict.len());
        }
    }
}

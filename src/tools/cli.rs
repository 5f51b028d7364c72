use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use std::{fmt::Display, fmt::Formatter};

/// Compress, Decompress, and the BWT transforms alone or chained with compression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Bwt,
    Unbwt,
    BwtZip,
    UnzipUnbwt,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman and Burrows-Wheeler coding of nucleotide sequences",
    long_about = "
    Sequences are made of the symbols A, T, G, C and N. The Burrows-Wheeler transform appends
    the $ sentinel and can be reverted. Huffman coding packs the sequence into 8 bit code units
    and stores the decode table on the second line of the output file."
)]
pub struct DnaOpts {
    /// Sequence file to process
    #[clap()]
    pub file: PathBuf,

    /// Huffman compress the sequence
    #[clap(short = 'z', long = "compress")]
    pub compress: bool,

    /// Decompress a Huffman coded file
    #[clap(short = 'd', long = "decompress")]
    pub decompress: bool,

    /// Apply the Burrows-Wheeler transform (combine with -z to compress the result)
    #[clap(short = 'b', long = "bwt")]
    pub bwt: bool,

    /// Revert the Burrows-Wheeler transform (combine with -d to decompress first)
    #[clap(short = 'u', long = "unbwt")]
    pub unbwt: bool,

    /// Directory receiving the output files
    #[clap(short = 'o', long = "output", default_value = "data")]
    pub output: PathBuf,

    /// Print every intermediate step of the transforms
    #[clap(short = 's', long = "steps")]
    pub steps: bool,

    /// Sets verbosity. -v shows errors, -vvvvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    pub verbose: u64,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl DnaOpts {
    /// Work out what to do. Flags win; without any, plain sequences are compressed and
    /// anything else is decompressed.
    pub fn op_mode(&self, uncompressed: bool) -> Mode {
        let mode = match (self.compress, self.decompress, self.bwt, self.unbwt) {
            (true, false, true, false) => Mode::BwtZip,
            (false, true, false, true) => Mode::UnzipUnbwt,
            (false, false, true, false) => Mode::Bwt,
            (false, false, false, true) => Mode::Unbwt,
            (true, false, false, false) => Mode::Zip,
            (false, true, false, false) => Mode::Unzip,
            (false, false, false, false) => {
                if uncompressed {
                    Mode::Zip
                } else {
                    Mode::Unzip
                }
            }
            _ => {
                warn!("Conflicting mode flags, falling back on the file content");
                if uncompressed {
                    Mode::Zip
                } else {
                    Mode::Unzip
                }
            }
        };
        info!("Operational mode set to {}", mode);
        mode
    }

    /// Log level matching the -q / -v flags.
    pub fn level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Off;
        }
        match self.verbose {
            0 | 1 => log::LevelFilter::Error,
            2 => log::LevelFilter::Warn,
            3 => log::LevelFilter::Info,
            4 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Parse the command line and set the log level from it.
pub fn dnaopts_init() -> DnaOpts {
    let opts = DnaOpts::parse();
    log::set_max_level(opts.level());

    // Below we report initialization status to the user
    info!("---- Dnashrink Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Getting input from the file {}", opts.file.display());
    info!("Writing output to {}", opts.output.display());
    info!("---- Dnashrink Initialization End ----\n");
    opts
}

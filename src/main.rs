//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

// Use jemalloc for better memory management (returns memory to OS)
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use dnashrink::compression::compress::compress;
use dnashrink::compression::decompress::decompress;
use dnashrink::compression::sequence_file::{read_sequence_file, SequenceFile};
use dnashrink::compression::transform::transform;
use dnashrink::error::ShrinkError;
use dnashrink::tools::cli::{dnaopts_init, Mode};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> Result<(), ShrinkError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let opts = dnaopts_init();

    let input = read_sequence_file(&opts.file)?;
    let mode = opts.op_mode(input.is_plain());

    //----- Figure how what we need to do and go do it
    let result = match (&input, mode) {
        (SequenceFile::Plain(seq), Mode::Zip | Mode::BwtZip) => compress(&opts, seq, mode),
        (SequenceFile::Plain(seq), Mode::Bwt | Mode::Unbwt) => transform(&opts, seq, mode),
        (SequenceFile::Compressed { packed, table }, Mode::Unzip | Mode::UnzipUnbwt) => {
            decompress(&opts, packed, table, mode)
        }
        (_, mode) => Err(ShrinkError::ModeMismatch(mode.to_string())),
    };

    match result {
        Ok(path) => {
            info!("Done.\n");
            println!("{}", path.display());
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
    }
}

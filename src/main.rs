use std::io::{self, BufWriter};

use clap::{CommandFactory, Parser};

use gbstrings::cli::Args;
use gbstrings::error::Result;
use gbstrings::{selftest, FirmwareImage, Reporter, Scanner};

fn main() {
    reset_sigpipe();

    if let Err(e) = run() {
        eprintln!("gbstrings: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();
    let config = args.config();

    if args.test {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        return selftest::run(&config, &mut out);
    }

    // No input file is not an error; show how to call the tool
    let Some(path) = args.input.as_deref() else {
        let mut cmd = Args::command();
        cmd.print_help()?;
        return Ok(());
    };

    // Open and map the firmware image
    let image = FirmwareImage::open(path)?;
    let scanner = Scanner::new(image.bytes(), &config);

    let stdout = io::stdout();
    let mut reporter = Reporter::new(BufWriter::new(stdout.lock()), config.base_addr);
    for found in scanner.matches() {
        reporter.emit(&found?)?;
    }
    reporter.flush()?;

    Ok(())
}

/// Restore default SIGPIPE behavior. Rust ignores the signal by default,
/// but a scan piped into `head` should die quietly like any other filter.
fn reset_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

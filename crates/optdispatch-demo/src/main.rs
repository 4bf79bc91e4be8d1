//! `optdemo`: a small program wired up with optdispatch.
//!
//! ```console
//! $ optdemo -t 4 -v in.txt out.txt
//! t = 4
//! -v
//! POS 1 = in.txt
//! POS 2 = out.txt
//!
//! $ optdemo --threads
//! error: Option `--threads` requires an argument, but none is given.
//! ```
//!
//! Set `RUST_LOG=optdispatch=trace` to see every dispatch.

use std::cell::RefCell;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use optdispatch::{ArgKind, Parser};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

/// Registers the demo's options and positionals.
///
/// Handlers write to `out` as they fire, so output from handlers that ran
/// before a failure is kept.
fn configure<'a, W: Write>(parser: Parser<'a>, out: &'a RefCell<W>) -> Parser<'a> {
    let emit = move |line: String| writeln!(out.borrow_mut(), "{line}");

    parser
        .register_option(
            ["-t", "--threads"],
            ArgKind::RequiredArgument,
            move |value| -> anyhow::Result<()> {
                let threads: u64 = value
                    .parse()
                    .with_context(|| format!("invalid thread count `{value}`"))?;
                emit(format!("t = {threads}"))?;
                Ok(())
            },
        )
        .register_option(["-v"], ArgKind::NoArgument, move |_| emit("-v".to_string()))
        .register_positional(move |value| emit(format!("POS 1 = {value}")))
        .register_positional(move |value| emit(format!("POS 2 = {value}")))
        .register_positional(move |value| emit(format!("POS 3 = {value}")))
}

/// Dispatches `argv`, writing handler output to `out`.
fn run<W: Write>(argv: Vec<String>, out: &RefCell<W>) -> anyhow::Result<()> {
    let mut parser = configure(Parser::new(argv), out);
    tracing::debug!(args = ?parser.args(), "parsed command line");

    parser.run()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let out = RefCell::new(std::io::stdout().lock());
    let result = run(std::env::args().collect(), &out);
    // Best effort; a closed stdout has nowhere to report to.
    let _ = out.borrow_mut().flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

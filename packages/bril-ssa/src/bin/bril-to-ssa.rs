/*
 * bril-to-ssa
 *
 * Reads a Bril program (JSON) on stdin, writes its phi/upsilon SSA form to
 * stdout with sorted keys.
 *
 * Usage:
 *   bril2json < prog.bril | bril-to-ssa
 *
 * Environment:
 *   RUST_LOG           log filter (logs go to stderr), default "warn"
 *   BRIL_SSA_CONFIG    optional YAML configuration file
 *   BRIL_SSA_PARALLEL  convert functions in parallel (true/false)
 *   BRIL_SSA_VERIFY    verify SSA post-conditions (true/false)
 *
 * Exit codes: 0 success, 1 malformed input, 2 any other failure.
 */

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use bril_ssa::{to_ssa, Program, SsaConfig, SsaError};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), SsaError> {
    let config = SsaConfig::load()?;
    tracing::debug!("Configuration: {:?}", config);

    let program = Program::from_reader(io::stdin().lock())?;
    let program = to_ssa(program, &config)?;

    let text = program.to_pretty_json()?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);

            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {}", cause);
                source = cause.source();
            }

            if e.is_input_error() {
                ExitCode::from(1)
            } else {
                ExitCode::from(2)
            }
        }
    }
}

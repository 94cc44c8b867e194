use std::io::{BufRead, Write, stdin, stdout};

use crate::{
    common::error::AppError,
    domain::ledger::Ledger,
    io::{prompt, writer},
    worker::processor::Processor,
};

/// Runs one interactive session on stdin/stdout.
pub fn run() -> Result<(), AppError> {
    let mut ledger = Ledger::new();

    let stdin = stdin();
    let stdout = stdout();
    let mut out = stdout.lock();
    run_interactive(&mut ledger, stdin.lock(), &mut out)
}

/// Prompts for commands until Exit or end of input.
pub fn run_interactive<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    mut input: R,
    out: &mut W,
) -> Result<(), AppError> {
    let mut processor = Processor::new();

    while let Some(command) = prompt::read_command(&mut input, out)? {
        let result = processor.process(ledger, command);
        writer::write_outcome(out, &result)?;
        if matches!(result, Ok(ref outcome) if outcome.is_exit()) {
            break;
        }
    }

    out.flush()?;
    processor.log_summary(ledger);
    Ok(())
}

//! Headless mode: wire actions in, states out
//!
//! Each input line is one JSON action (`{"type":"CHOOSE_PILL","pill":"red"}`).
//! After each dispatch the full state is written as one JSON line. Lines
//! that do not decode are reported to the error sink and skipped; a `QUIT`
//! action stops reading.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, warn};

use crate::action::{Action, ActionRecord};
use crate::store::AppStore;

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// What a headless run did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessReport {
    pub dispatched: usize,
    pub skipped: usize,
}

/// Dispatch every action read from `input`, writing the state after each one
pub fn run<R, W, E>(
    input: R,
    mut output: W,
    mut errors: E,
    store: &mut AppStore,
) -> Result<HeadlessReport, HeadlessError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut report = HeadlessReport::default();

    // Raw bytes: a line that is not UTF-8 is a bad action, not a failed read
    for (index, line) in input.split(b'\n').enumerate() {
        let line = line.map_err(HeadlessError::Read)?;
        let line = line.trim_ascii();
        if line.is_empty() {
            continue;
        }

        let record: ActionRecord = match serde_json::from_slice(line) {
            Ok(record) => record,
            Err(e) => {
                warn!(line = index + 1, error = %e, "Skipping undecodable action");
                writeln!(errors, "line {}: {}", index + 1, e).map_err(HeadlessError::Write)?;
                report.skipped += 1;
                continue;
            }
        };

        let action = Action::from(record);
        if matches!(action, Action::Quit) {
            debug!(line = index + 1, "Quit received");
            break;
        }

        store.dispatch(action);
        report.dispatched += 1;

        serde_json::to_writer(&mut output, store.state())?;
        writeln!(output).map_err(HeadlessError::Write)?;
    }

    output.flush().map_err(HeadlessError::Write)?;
    Ok(report)
}

//! Error types for the simulator.

use thiserror::Error;

/// Failures while driving the interactive session.
///
/// Password input is never rejected; only console I/O can fail.
#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

//! Offline brute-force crack-time simulator
//!
//! Estimates how long an exhaustive search over a password's character set
//! would take on fixed attacker hardware profiles.
//!
//! # Features
//!
//! - `async` (default): Enables the interactive loop with Ctrl-C cancellation
//! - `tracing` (default): Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use crack_sim::{CrackEstimate, ATTACKER_PROFILES, format_duration};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("abc123".to_string().into());
//! let estimate = CrackEstimate::new(&password);
//!
//! assert_eq!(estimate.charset_size, 36);
//! assert_eq!(format_duration(estimate.seconds_for(&ATTACKER_PROFILES[0])), "4.0 hours");
//! ```

// Internal modules
mod charset;
mod error;
mod estimate;
mod format;
mod profiles;
mod report;
mod simulator;

// Public API
pub use charset::{character_set_size, CharacterClasses, PRINTABLE_ASCII_SIZE};
pub use error::SimulatorError;
pub use estimate::CrackEstimate;
pub use format::{format_duration, separate_thousands};
pub use profiles::{AttackerProfile, ATTACKER_PROFILES, HIGH_END_GPU, STANDARD_GPU};
pub use report::{write_banner, write_report};
pub use simulator::{decode_line, trim_line_ending, Exit, Simulator, Step, PROMPT, STOPPED_NOTICE};

#[cfg(feature = "async")]
pub use simulator::{install_interrupt_handler, spawn_stdin_reader};

//! Attacker hardware profiles.
//!
//! Guesses per second against a WPA2 hash, based on real-world GPU benchmarks.

/// A named guessing throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackerProfile {
    pub name: &'static str,
    pub guesses_per_second: u64,
}

impl AttackerProfile {
    pub const fn new(name: &'static str, guesses_per_second: u64) -> Self {
        Self {
            name,
            guesses_per_second,
        }
    }

    /// Seconds needed to enumerate `combinations` candidates at this rate.
    pub fn seconds_to_exhaust(&self, combinations: f64) -> f64 {
        combinations / self.guesses_per_second as f64
    }
}

pub const STANDARD_GPU: AttackerProfile = AttackerProfile::new("Standard GPU", 150_000);
pub const HIGH_END_GPU: AttackerProfile = AttackerProfile::new("High-End GPU", 1_100_000);

/// Profiles every password is measured against, in display order.
pub const ATTACKER_PROFILES: [AttackerProfile; 2] = [STANDARD_GPU, HIGH_END_GPU];

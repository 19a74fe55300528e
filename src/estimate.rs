//! Search-space estimate for a single password.

use secrecy::{ExposeSecret, SecretString};

use crate::charset::character_set_size;
use crate::profiles::AttackerProfile;

/// Brute-force search space of one password.
///
/// Holds no part of the password itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackEstimate {
    /// Length in characters, not bytes.
    pub length: usize,
    pub charset_size: u32,
    /// `charset_size ^ length`; `+inf` once it no longer fits in an `f64`.
    pub combinations: f64,
}

impl CrackEstimate {
    pub fn new(password: &SecretString) -> Self {
        let length = password.expose_secret().chars().count();
        let charset_size = character_set_size(password);
        let combinations = f64::from(charset_size).powf(length as f64);

        #[cfg(feature = "tracing")]
        {
            if combinations.is_infinite() {
                tracing::warn!(
                    "Combination count overflowed: {}^{} exceeds f64 range",
                    charset_size,
                    length
                );
            }
        }

        Self {
            length,
            charset_size,
            combinations,
        }
    }

    pub fn is_representable(&self) -> bool {
        self.combinations.is_finite()
    }

    /// Time to try every combination against `profile`, in seconds.
    pub fn seconds_for(&self, profile: &AttackerProfile) -> f64 {
        profile.seconds_to_exhaust(self.combinations)
    }
}

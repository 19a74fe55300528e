//! Console rendering of the banner and per-password report.

use std::io::{self, Write};

use crate::estimate::CrackEstimate;
use crate::format::{format_duration, separate_thousands};
use crate::profiles::AttackerProfile;

const TITLE: &str = "--- WPA2 Password Crack-Time Simulator ---";
const TAGLINE: &str = "This tool demonstrates the risk of offline brute-force attacks.";
const DIVIDER_WIDTH: usize = 44;
const RATE_WIDTH: usize = 15;
const UNREPRESENTABLE: &str = "too large to represent";

fn divider() -> String {
    "-".repeat(DIVIDER_WIDTH)
}

/// Writes the startup banner listing every attacker profile.
pub fn write_banner<W: Write>(out: &mut W, profiles: &[AttackerProfile]) -> io::Result<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", TAGLINE)?;
    writeln!(out, "\nAttacker 'Hardware' Profiles:")?;
    for (i, profile) in profiles.iter().enumerate() {
        writeln!(
            out,
            " [{}] {}: {:>width$} guesses/sec",
            i + 1,
            profile.name,
            separate_thousands(profile.guesses_per_second as f64, 0),
            width = RATE_WIDTH
        )?;
    }
    writeln!(out, "{}", divider())
}

/// Writes the evaluation block for one password.
pub fn write_report<W: Write>(
    out: &mut W,
    estimate: &CrackEstimate,
    profiles: &[AttackerProfile],
) -> io::Result<()> {
    let combinations = if estimate.is_representable() {
        separate_thousands(estimate.combinations, 0)
    } else {
        UNREPRESENTABLE.to_string()
    };

    writeln!(out, "\n  Password Length: {}", estimate.length)?;
    writeln!(out, "  Character Set Size: {}", estimate.charset_size)?;
    writeln!(out, "  Total Combinations: {}", combinations)?;
    writeln!(out, "{}", divider())?;

    for profile in profiles {
        writeln!(
            out,
            "  [{}]: {}",
            profile.name,
            format_duration(estimate.seconds_for(profile))
        )?;
    }
    writeln!(out, "{}", divider())
}

//! Character-set sizing - estimates the alphabet an attacker has to search.

use secrecy::{ExposeSecret, SecretString};

const LOWERCASE_SIZE: u32 = 26;
const UPPERCASE_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SPECIAL_SIZE: u32 = 32;

/// Fallback when no class matched: all printable ASCII.
pub const PRINTABLE_ASCII_SIZE: u32 = 94;

/// Character classes found in a password.
///
/// Every class uses the Unicode predicates of `char`, so `é` is lowercase and
/// `٣` is a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub all_digits: bool,
    pub all_lower: bool,
}

impl CharacterClasses {
    pub fn of(pwd: &str) -> Self {
        let non_empty = !pwd.is_empty();
        Self {
            has_lower: pwd.chars().any(|c| c.is_lowercase()),
            has_upper: pwd.chars().any(|c| c.is_uppercase()),
            has_digit: pwd.chars().any(|c| c.is_numeric()),
            has_special: pwd.chars().any(|c| !c.is_alphanumeric()),
            // `all` is vacuously true on "", which would misroute to an override
            all_digits: non_empty && pwd.chars().all(|c| c.is_numeric()),
            all_lower: non_empty && pwd.chars().all(|c| c.is_lowercase()),
        }
    }

    /// Additive size of every class present, before overrides.
    pub fn summed_size(&self) -> u32 {
        [
            (self.has_lower, LOWERCASE_SIZE),
            (self.has_upper, UPPERCASE_SIZE),
            (self.has_digit, DIGIT_SIZE),
            (self.has_special, SPECIAL_SIZE),
        ]
        .into_iter()
        .filter(|(present, _)| *present)
        .map(|(_, size)| size)
        .sum()
    }
}

/// Returns the effective alphabet size for a password.
///
/// A password made only of digits is searched over digits alone (10), and one
/// made only of lowercase letters over `a-z` (26), whatever the additive sum
/// says. Mixed passwords get the sum of their classes. If nothing matched at
/// all, including the empty password, the result is 94.
pub fn character_set_size(password: &SecretString) -> u32 {
    let classes = CharacterClasses::of(password.expose_secret());

    if classes.all_digits {
        return DIGIT_SIZE;
    }
    if classes.all_lower {
        return LOWERCASE_SIZE;
    }

    match classes.summed_size() {
        0 => PRINTABLE_ASCII_SIZE,
        size => size,
    }
}

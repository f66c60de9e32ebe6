//! Word lists for the games
//!
//! Lists are loaded from newline-delimited files at start-up.

pub mod loader;

#[cfg(test)]
use crate::game::Vocabulary;

/// Small vocabulary used across unit tests
#[cfg(test)]
pub(crate) fn sample_vocabulary() -> Vocabulary {
    Vocabulary::from_strs(
        &[
            "crane", "slate", "irate", "crate", "grate", "trace", "raise", "arise", "spoke",
            "smoke", "stoke", "abbey", "babes", "speed", "erase", "robot", "floor", "soare",
            "plate", "bread",
        ],
        &[
            "irate", "crate", "grate", "trace", "spoke", "smoke", "stoke", "plate",
        ],
    )
    .unwrap()
}

/// Vocabulary whose only secret is not a legal guess, so filtering empties
#[cfg(test)]
pub(crate) fn unreachable_secret_vocabulary() -> Vocabulary {
    Vocabulary::from_strs(&["crane", "spoke", "robot", "plate", "irate"], &["zzzzz"]).unwrap()
}

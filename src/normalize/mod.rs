//! Response extraction and record normalization.
//!
//! Raw rows flow through [`project`] and then one of the per-entity
//! normalizers in [`records`], which flatten nested references, inject call
//! context, filter, and coerce each column with [`coerce`].

pub mod coerce;
pub mod extract;
pub mod fields;
pub mod project;
pub mod records;

pub use extract::{Extract, extract};
pub use project::project;
pub use records::{UnassignedPlayers, boxscore, player_season, schedule, scoreboard, team};

use md5::{Digest, Md5};

/// Content-derived identifier for rows without a natural key.
///
/// Lower-case hex md5 of `first` immediately followed by `second`, so the
/// same pair always maps to the same id.
///
/// # Examples
///
/// ```rust
/// use courtside::normalize::synthetic_id;
///
/// let id = synthetic_id("201939", "0021800001");
/// assert_eq!(id.len(), 32);
/// assert_eq!(id, synthetic_id("201939", "0021800001"));
/// ```
#[must_use]
pub fn synthetic_id(first: &str, second: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(first.as_bytes());
    hasher.update(second.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_id_matches_md5_of_concatenation() {
        assert_eq!(synthetic_id("", ""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(synthetic_id("a", "bc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(synthetic_id("ab", "c"), synthetic_id("a", "bc"));
    }

    #[test]
    fn test_synthetic_id_is_deterministic() {
        let first = synthetic_id("201939", "0021800001");
        for _ in 0..3 {
            assert_eq!(synthetic_id("201939", "0021800001"), first);
        }
        assert_ne!(first, synthetic_id("201939", "0021800002"));
    }
}

// SkillForge Engine: Strict Semver
//
// Versions are exactly `MAJOR.MINOR.PATCH`, each a run of ASCII digits.
// No leading `v`, no pre-release or build suffix.
//
// `compare_semver` rejects malformed input instead of inventing an order
// for it. Segments are compared as digit strings, so `007` equals `7` and
// arbitrarily long segments never overflow.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::atoms::error::SemverError;

/// True iff `v` is three dot-separated non-negative integers and nothing else.
pub fn validate_semver(v: &str) -> bool {
    let mut count = 0;
    for segment in v.split('.') {
        count += 1;
        if count > 3 || !is_digits(segment) {
            return false;
        }
    }
    count == 3
}

/// Order two versions by major, then minor, then patch.
pub fn compare_semver(a: &str, b: &str) -> Result<Ordering, SemverError> {
    let left = segments(a)?;
    let right = segments(b)?;
    Ok(left
        .iter()
        .zip(right.iter())
        .map(|(l, r)| compare_digits(l, r))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal))
}

/// Which segment to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemverBump {
    Major,
    Minor,
    Patch,
}

/// The next version after `v`. Lower segments reset to zero.
pub fn bump_semver(v: &str, bump: SemverBump) -> Result<String, SemverError> {
    let current: Semver = v.parse()?;
    Ok(current.bump(bump)?.to_string())
}

/// A parsed strict version. Numeric segments are limited to `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Semver {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Semver {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch }
    }

    /// Fails with `Overflow` when the bumped segment is already `u64::MAX`.
    pub fn bump(self, bump: SemverBump) -> Result<Self, SemverError> {
        let next = |segment: u64| {
            segment.checked_add(1).ok_or_else(|| SemverError::Overflow {
                version: self.to_string(),
                segment: segment.to_string(),
            })
        };
        Ok(match bump {
            SemverBump::Major => Self::new(next(self.major)?, 0, 0),
            SemverBump::Minor => Self::new(self.major, next(self.minor)?, 0),
            SemverBump::Patch => Self::new(self.major, self.minor, next(self.patch)?),
        })
    }
}

impl FromStr for Semver {
    type Err = SemverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `segments` already checked the digits, so a failed parse is overflow.
        let [major, minor, patch] = segments(s)?;
        let parse = |segment: &str| {
            segment.parse::<u64>().map_err(|_| SemverError::Overflow {
                version: s.to_string(),
                segment: segment.to_string(),
            })
        };
        Ok(Self::new(parse(major)?, parse(minor)?, parse(patch)?))
    }
}

impl fmt::Display for Semver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn segments(v: &str) -> Result<[&str; 3], SemverError> {
    let parts: Vec<&str> = v.split('.').collect();
    let [major, minor, patch] = parts[..] else {
        return Err(SemverError::SegmentCount(v.to_string()));
    };
    if let Some(bad) = [major, minor, patch].into_iter().find(|s| !is_digits(s)) {
        return Err(SemverError::NonNumeric {
            version: v.to_string(),
            segment: bad.to_string(),
        });
    }
    Ok([major, minor, patch])
}

/// Numeric comparison of two ASCII digit strings of any length.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

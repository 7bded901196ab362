//! # Print Rotation
//!
//! EPL2 text and barcode commands carry a rotation field `p3` in quarter
//! turns clockwise:
//!
//! | Value | Rotation | Name |
//! |-------|----------|------|
//! | 0 | 0° | portrait |
//! | 1 | 90° | landscape |
//! | 2 | 180° | |
//! | 3 | 270° | |
//!
//! Callers may describe a rotation as a quarter-turn index, as degrees, or
//! by name. Normalization is permissive: anything it does not recognize
//! becomes portrait instead of failing.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Normalized rotation, always one of the four quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Rotation {
    #[default]
    Portrait = 0,
    Landscape = 1,
    Inverted = 2,
    InvertedLandscape = 3,
}

impl Rotation {
    /// Quarter-turn index emitted on the wire.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    fn from_quarter_turns(turns: i64) -> Self {
        match turns.rem_euclid(4) {
            1 => Self::Landscape,
            2 => Self::Inverted,
            3 => Self::InvertedLandscape,
            _ => Self::Portrait,
        }
    }

    /// Normalize a numeric rotation.
    ///
    /// - `0..=3` are taken as quarter-turn indices
    /// - other multiples of 90 are degrees, reduced modulo 4 turns
    /// - everything else is portrait
    ///
    /// ```
    /// use etiqueta::protocol::rotation::Rotation;
    ///
    /// assert_eq!(Rotation::normalize(1), Rotation::Landscape);
    /// assert_eq!(Rotation::normalize(180), Rotation::Inverted);
    /// assert_eq!(Rotation::normalize(450), Rotation::Landscape);
    /// assert_eq!(Rotation::normalize(999), Rotation::Portrait);
    /// ```
    pub fn normalize(value: i64) -> Self {
        if (0..=3).contains(&value) {
            Self::from_quarter_turns(value)
        } else if value % 90 == 0 {
            Self::from_quarter_turns(value / 90)
        } else {
            Self::Portrait
        }
    }

    /// Normalize a named or textual rotation.
    ///
    /// `"portrait"` and `"landscape"` are recognized by name. Otherwise the
    /// leading integer of the string (if any) goes through [`normalize`].
    ///
    /// [`normalize`]: Rotation::normalize
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("portrait") {
            Self::Portrait
        } else if name.eq_ignore_ascii_case("landscape") {
            Self::Landscape
        } else {
            Self::normalize(leading_int(name))
        }
    }
}

/// Integer prefix of `s`, or 0 when there is none.
fn leading_int(s: &str) -> i64 {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

impl From<i64> for Rotation {
    fn from(value: i64) -> Self {
        Self::normalize(value)
    }
}

impl From<i32> for Rotation {
    fn from(value: i32) -> Self {
        Self::normalize(i64::from(value))
    }
}

impl From<&str> for Rotation {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Accepts `1`, `90`, `"landscape"` or `"90"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RotationValue {
    Number(i64),
    Name(String),
}

impl<'de> Deserialize<'de> for Rotation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RotationValue::deserialize(deserializer)? {
            RotationValue::Number(n) => Self::normalize(n),
            RotationValue::Name(s) => Self::from_name(&s),
        })
    }
}

//! Topping set stored as a bitmask.
//!
//! The universe of toppings is closed, so a set is a single `u8`. Rendering
//! always follows declaration order, never insertion order.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use crate::error::ParseError;

/// A set of zero or more toppings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Topping(u8);

impl Topping {
    pub const LYCHEE_JELLY: Topping = Topping(1 << 0);
    pub const STRAWBERRY_JELLY: Topping = Topping(1 << 1);
    pub const ALOE_JELLY: Topping = Topping(1 << 2);
    pub const COCONUT_JELLY: Topping = Topping(1 << 3);

    /// Display table in declaration order: (flag, declared name, label).
    const TABLE: [(Topping, &'static str, &'static str); 4] = [
        (Topping::LYCHEE_JELLY, "LycheeJelly", "Lychee Jelly"),
        (Topping::STRAWBERRY_JELLY, "StrawberryJelly", "Strawberry Jelly"),
        (Topping::ALOE_JELLY, "AloeJelly", "Aloe Jelly"),
        (Topping::COCONUT_JELLY, "CoconutJelly", "coconut Jelly"),
    ];

    const ALL_BITS: u8 = 0b1111;

    pub const fn empty() -> Self {
        Topping(0)
    }

    pub const fn all() -> Self {
        Topping(Self::ALL_BITS)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build a set from raw bits, rejecting bits outside the universe.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL_BITS == 0 {
            Some(Topping(bits))
        } else {
            None
        }
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every flag of `other` is present.
    pub const fn contains(self, other: Topping) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Topping) -> Self {
        Topping(self.0 | other.0)
    }

    pub fn insert(&mut self, other: Topping) {
        self.0 |= other.0;
    }

    /// Clear the flags of `other`. Absent flags are ignored.
    pub fn remove(&mut self, other: Topping) {
        self.0 &= !other.0;
    }

    /// Single-flag members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Topping> {
        Self::TABLE
            .into_iter()
            .map(|(flag, _, _)| flag)
            .filter(move |flag| self.contains(*flag))
    }

    /// Human-readable labels of the set flags in declaration order.
    pub fn labels(self) -> Vec<&'static str> {
        Self::TABLE
            .iter()
            .filter(|(flag, _, _)| self.contains(*flag))
            .map(|(_, _, label)| *label)
            .collect()
    }

    /// Declared names of the set flags in declaration order.
    pub fn names(self) -> Vec<&'static str> {
        Self::TABLE
            .iter()
            .filter(|(flag, _, _)| self.contains(*flag))
            .map(|(_, name, _)| *name)
            .collect()
    }

    /// Render as `[Label, Label]`.
    pub fn describe(self) -> String {
        format!("[{}]", self.labels().join(", "))
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl BitOr for Topping {
    type Output = Topping;

    fn bitor(self, rhs: Topping) -> Topping {
        self.union(rhs)
    }
}

impl BitOrAssign for Topping {
    fn bitor_assign(&mut self, rhs: Topping) {
        self.insert(rhs);
    }
}

impl FromIterator<Topping> for Topping {
    fn from_iter<I: IntoIterator<Item = Topping>>(iter: I) -> Self {
        iter.into_iter().fold(Topping::empty(), Topping::union)
    }
}

/// Parses one topping: declared name (`AloeJelly`) or kebab-case (`aloe-jelly`),
/// case-insensitive.
impl FromStr for Topping {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();

        Self::TABLE
            .iter()
            .find(|(_, name, _)| name.to_ascii_lowercase() == normalized)
            .map(|(flag, _, _)| *flag)
            .ok_or_else(|| ParseError::UnknownTopping(s.to_string()))
    }
}

impl Serialize for Topping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.names();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

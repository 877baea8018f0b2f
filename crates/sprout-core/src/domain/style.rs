//! Style value objects: ColorName, Intensity, SemanticLevel.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO escape sequences. The templates themselves live in
//! `palette.rs` (per color/intensity pair) and `aliases.rs` (per semantic
//! level). This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! Parsing is exact: `"red"` is a color, `"Red"` and `" red"` are not.

use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

// ── ColorName ─────────────────────────────────────────────────────────────────

/// One of the eight base terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl ColorName {
    /// Every color, in palette row order.
    pub const ALL: [ColorName; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Row index into the palette table.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownColor(s.to_string()))
    }
}

// ── Intensity ─────────────────────────────────────────────────────────────────

/// Brightness variant of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Intensity {
    Dim,
    Normal,
    Intense,
}

impl Intensity {
    /// Every intensity, in palette column order.
    pub const ALL: [Intensity; 3] = [Self::Dim, Self::Normal, Self::Intense];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dim => "dim",
            Self::Normal => "normal",
            Self::Intense => "intense",
        }
    }

    /// Column index into the palette table.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intensity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| DomainError::UnknownIntensity(s.to_string()))
    }
}

// ── SemanticLevel ─────────────────────────────────────────────────────────────

/// A named message category bound to one fixed color/intensity pair.
///
/// The binding lives in [`SemanticLevel::style`]; see `aliases.rs` for the
/// string-keyed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticLevel {
    Info,
    Success,
    Error,
    Response,
    Warn,
    Debug,
}

impl SemanticLevel {
    pub const ALL: [SemanticLevel; 6] = [
        Self::Info,
        Self::Success,
        Self::Error,
        Self::Response,
        Self::Warn,
        Self::Debug,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Response => "response",
            Self::Warn => "warn",
            Self::Debug => "debug",
        }
    }

    /// The color/intensity pair this level renders with.
    pub const fn style(self) -> (ColorName, Intensity) {
        match self {
            Self::Info => (ColorName::White, Intensity::Normal),
            Self::Success => (ColorName::Green, Intensity::Intense),
            Self::Error => (ColorName::Red, Intensity::Intense),
            Self::Response => (ColorName::Blue, Intensity::Normal),
            Self::Warn => (ColorName::Yellow, Intensity::Normal),
            Self::Debug => (ColorName::Black, Intensity::Dim),
        }
    }
}

impl fmt::Display for SemanticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| DomainError::UnknownLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_exact_names_only() {
        assert_eq!("magenta".parse::<ColorName>().unwrap(), ColorName::Magenta);
        assert!("Magenta".parse::<ColorName>().is_err());
        assert!("greenish".parse::<ColorName>().is_err());
        assert!("".parse::<ColorName>().is_err());
    }

    #[test]
    fn intensity_round_trips_through_display() {
        for i in Intensity::ALL {
            assert_eq!(i.to_string().parse::<Intensity>().unwrap(), i);
        }
    }

    #[test]
    fn indices_follow_declaration_order() {
        for (n, c) in ColorName::ALL.iter().enumerate() {
            assert_eq!(c.index(), n);
        }
        for (n, i) in Intensity::ALL.iter().enumerate() {
            assert_eq!(i.index(), n);
        }
    }

    #[test]
    fn level_bindings() {
        use ColorName::*;
        use Intensity::*;

        assert_eq!(SemanticLevel::Info.style(), (White, Normal));
        assert_eq!(SemanticLevel::Success.style(), (Green, Intense));
        assert_eq!(SemanticLevel::Error.style(), (Red, Intense));
        assert_eq!(SemanticLevel::Response.style(), (Blue, Normal));
        assert_eq!(SemanticLevel::Warn.style(), (Yellow, Normal));
        assert_eq!(SemanticLevel::Debug.style(), (Black, Dim));
    }

    #[test]
    fn unknown_level_error_names_input() {
        let err = "verbose".parse::<SemanticLevel>().unwrap_err();
        assert_eq!(err, DomainError::UnknownLevel("verbose".into()));
    }
}

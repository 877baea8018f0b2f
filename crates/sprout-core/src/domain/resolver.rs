//! Style token resolution.
//!
//! A token is either a composite `"color.intensity"` string or one of the
//! semantic level names. Resolution never fails: anything unrecognised
//! degrades to [`Palette::DEFAULT`] (white/normal).
//!
//! Order matters and is fixed:
//!
//! 1. composite split on `.` into exactly two non-empty parts → palette
//! 2. whole token → alias table
//! 3. fallback

use crate::domain::{
    aliases,
    palette::{EscapeTemplate, Palette},
    style::{ColorName, Intensity, SemanticLevel},
};

/// Separator between the color and intensity halves of a composite token.
pub const SEPARATOR: char = '.';

/// Where a resolved template came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Palette(ColorName, Intensity),
    Alias(SemanticLevel),
    Fallback,
}

impl Resolution {
    pub const fn template(self) -> EscapeTemplate {
        match self {
            Self::Palette(color, intensity) => Palette::get(color, intensity),
            Self::Alias(level) => level.template(),
            Self::Fallback => Palette::DEFAULT,
        }
    }

    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// Resolve a token to its template, falling back to white/normal.
pub fn resolve(token: &str) -> EscapeTemplate {
    split_composite(token)
        .and_then(|(color, intensity)| Palette::lookup(color, intensity))
        .or_else(|| aliases::lookup(token))
        .unwrap_or(Palette::DEFAULT)
}

/// Like [`resolve`], but reports which table produced the result.
pub fn resolve_detailed(token: &str) -> Resolution {
    if let Some((color, intensity)) = split_composite(token) {
        if let (Ok(c), Ok(i)) = (color.parse::<ColorName>(), intensity.parse::<Intensity>()) {
            return Resolution::Palette(c, i);
        }
    }

    match aliases::level(token) {
        Some(level) => Resolution::Alias(level),
        None => Resolution::Fallback,
    }
}

fn split_composite(token: &str) -> Option<(&str, &str)> {
    let (color, intensity) = token.split_once(SEPARATOR)?;
    if color.is_empty() || intensity.is_empty() || intensity.contains(SEPARATOR) {
        return None;
    }
    Some((color, intensity))
}

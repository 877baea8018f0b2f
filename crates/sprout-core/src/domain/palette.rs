//! Palette registry: one escape template per (color, intensity) pair.
//!
//! The table is a `const` two-dimensional array indexed by the enums, so
//! every pair is present by construction and lookups never allocate.

use crate::domain::style::{ColorName, Intensity};

/// SGR reset appended after every styled value.
pub const RESET: &str = "\x1b[0m";

/// A terminal formatting instruction.
///
/// Applying it wraps the text in the template's SGR prefix and [`RESET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscapeTemplate {
    prefix: &'static str,
}

impl EscapeTemplate {
    pub(crate) const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// The SGR sequence written before the text.
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Render `text` with this template.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + text.len() + RESET.len());
        out.push_str(self.prefix);
        out.push_str(text);
        out.push_str(RESET);
        out
    }
}

// Rows follow `ColorName::ALL`, columns follow `Intensity::ALL`.
const TABLE: [[EscapeTemplate; 3]; 8] = [
    // black
    [
        EscapeTemplate::new("\x1b[90m"),
        EscapeTemplate::new("\x1b[30m"),
        EscapeTemplate::new("\x1b[30;1m"),
    ],
    // red
    [
        EscapeTemplate::new("\x1b[31m"),
        EscapeTemplate::new("\x1b[31;22m"),
        EscapeTemplate::new("\x1b[31;1m"),
    ],
    // green
    [
        EscapeTemplate::new("\x1b[32m"),
        EscapeTemplate::new("\x1b[32;22m"),
        EscapeTemplate::new("\x1b[32;1m"),
    ],
    // yellow
    [
        EscapeTemplate::new("\x1b[33m"),
        EscapeTemplate::new("\x1b[33;22m"),
        EscapeTemplate::new("\x1b[33;1m"),
    ],
    // blue
    [
        EscapeTemplate::new("\x1b[34m"),
        EscapeTemplate::new("\x1b[34;22m"),
        EscapeTemplate::new("\x1b[34;1m"),
    ],
    // magenta
    [
        EscapeTemplate::new("\x1b[35m"),
        EscapeTemplate::new("\x1b[35;22m"),
        EscapeTemplate::new("\x1b[35;1m"),
    ],
    // cyan
    [
        EscapeTemplate::new("\x1b[36m"),
        EscapeTemplate::new("\x1b[36;22m"),
        EscapeTemplate::new("\x1b[36;1m"),
    ],
    // white
    [
        EscapeTemplate::new("\x1b[37m"),
        EscapeTemplate::new("\x1b[37;22m"),
        EscapeTemplate::new("\x1b[37;1m"),
    ],
];

/// Read-only access to the palette table.
pub struct Palette;

impl Palette {
    /// Template used when a style token cannot be resolved.
    pub const DEFAULT: EscapeTemplate = Self::get(ColorName::White, Intensity::Normal);

    /// Total lookup over the typed pair.
    pub const fn get(color: ColorName, intensity: Intensity) -> EscapeTemplate {
        TABLE[color.index()][intensity.index()]
    }

    /// Lookup by name; `None` unless both parts name a palette member.
    pub fn lookup(color: &str, intensity: &str) -> Option<EscapeTemplate> {
        let color = color.parse::<ColorName>().ok()?;
        let intensity = intensity.parse::<Intensity>().ok()?;
        Some(Self::get(color, intensity))
    }

    /// All 24 entries in row-major order.
    pub fn entries() -> impl Iterator<Item = (ColorName, Intensity, EscapeTemplate)> {
        ColorName::ALL.into_iter().flat_map(|c| {
            Intensity::ALL
                .into_iter()
                .map(move |i| (c, i, Self::get(c, i)))
        })
    }
}

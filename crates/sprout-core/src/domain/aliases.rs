//! Semantic alias table: level name → palette template.

use crate::domain::{
    palette::{EscapeTemplate, Palette},
    style::SemanticLevel,
};

impl SemanticLevel {
    /// The palette template bound to this level.
    pub const fn template(self) -> EscapeTemplate {
        let (color, intensity) = self.style();
        Palette::get(color, intensity)
    }
}

/// The level a name is an alias for.
pub fn level(name: &str) -> Option<SemanticLevel> {
    name.parse().ok()
}

/// Lookup by level name; `None` for anything but the six level names.
pub fn lookup(name: &str) -> Option<EscapeTemplate> {
    level(name).map(SemanticLevel::template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::style::{ColorName, Intensity};

    #[test]
    fn success_is_green_intense() {
        assert_eq!(
            lookup("success"),
            Some(Palette::get(ColorName::Green, Intensity::Intense))
        );
    }

    #[test]
    fn every_level_resolves() {
        for level in SemanticLevel::ALL {
            assert_eq!(lookup(level.as_str()), Some(level.template()));
        }
    }

    #[test]
    fn level_names_the_alias() {
        assert_eq!(level("warn"), Some(SemanticLevel::Warn));
        assert_eq!(level("Warn"), None);
    }

    #[test]
    fn composite_tokens_are_not_aliases() {
        assert_eq!(lookup("red.intense"), None);
        assert_eq!(lookup("warning"), None);
    }
}

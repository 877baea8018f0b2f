//! Project entities for the backend scaffold.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// Name used when the user does not give one.
pub const DEFAULT_PROJECT_NAME: &str = "My-app";
/// Placeholder written into every new backend project.
pub const DEFAULT_PLACEHOLDER_FILE: &str = "server.js";
pub const DEFAULT_PLACEHOLDER_CONTENT: &str = "//servercode";

/// A validated project directory name.
///
/// Must be non-empty, must not start with `.`, and must not contain a path
/// separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let reason = if name.trim().is_empty() {
            Some("name cannot be empty")
        } else if name.starts_with('.') {
            Some("name cannot start with '.'")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain path separators")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidProjectName {
                name,
                reason: reason.into(),
            }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectName {
    fn default() -> Self {
        Self(DEFAULT_PROJECT_NAME.to_string())
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything needed to lay down one backend project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBlueprint {
    pub name: ProjectName,
    pub placeholder_file: String,
    pub placeholder_content: String,
}

impl ProjectBlueprint {
    /// Blueprint with the stock placeholder file.
    pub fn new(name: ProjectName) -> Self {
        Self {
            name,
            placeholder_file: DEFAULT_PLACEHOLDER_FILE.to_string(),
            placeholder_content: DEFAULT_PLACEHOLDER_CONTENT.to_string(),
        }
    }

    pub fn with_placeholder(
        mut self,
        file: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let file = file.into();
        let mut components = Path::new(&file).components();
        let plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !plain {
            return Err(DomainError::InvalidPlaceholder { file });
        }
        self.placeholder_file = file;
        self.placeholder_content = content.into();
        Ok(self)
    }

    /// Directory the project lives in, under `parent`.
    pub fn project_dir(&self, parent: &Path) -> PathBuf {
        parent.join(self.name.as_str())
    }
}

/// What a scaffold run found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Created { path: PathBuf },
    AlreadyExisted { path: PathBuf },
}

impl ScaffoldOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created { path } | Self::AlreadyExisted { path } => path,
        }
    }

    pub fn created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        for name in ["my-api", "My-app", "project_1", "a"] {
            assert!(ProjectName::new(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_hidden_names() {
        let err = ProjectName::new(".hidden").unwrap_err();
        assert!(matches!(err, DomainError::InvalidProjectName { .. }));
    }

    #[test]
    fn rejects_empty_and_separators() {
        assert!(ProjectName::new("").is_err());
        assert!(ProjectName::new("   ").is_err());
        assert!(ProjectName::new("a/b").is_err());
        assert!(ProjectName::new("a\\b").is_err());
    }

    #[test]
    fn default_name() {
        assert_eq!(ProjectName::default().as_str(), "My-app");
    }

    #[test]
    fn blueprint_defaults_to_server_js() {
        let bp = ProjectBlueprint::new(ProjectName::default());
        assert_eq!(bp.placeholder_file, "server.js");
        assert_eq!(bp.placeholder_content, "//servercode");
        assert_eq!(bp.project_dir(Path::new("/tmp")), PathBuf::from("/tmp/My-app"));
    }

    #[test]
    fn placeholder_must_be_a_bare_file_name() {
        let bp = ProjectBlueprint::new(ProjectName::default());
        assert!(bp.clone().with_placeholder("main.py", "").is_ok());
        assert!(bp.clone().with_placeholder("src/main.py", "").is_err());
        assert!(bp.clone().with_placeholder("/etc/passwd", "").is_err());
        assert!(bp.clone().with_placeholder("..", "x").is_err());
        assert!(bp.clone().with_placeholder(".", "x").is_err());
        assert!(bp.clone().with_placeholder("./", "x").is_err());
        assert!(bp.with_placeholder("", "").is_err());
    }
}

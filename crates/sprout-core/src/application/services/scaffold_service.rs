//! Scaffold Service - backend project creation.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Check whether the project directory exists
//! 2. Create it if not, and say which case applied
//! 3. Write the placeholder file (always; an existing one is replaced)
//!
//! Progress lines go through the caller's [`Emitter`]; failures come back as
//! `SproutError`.

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, LineSink},
        services::Emitter,
    },
    domain::{ProjectBlueprint, ScaffoldOutcome},
    error::{SproutError, SproutResult},
};

/// Style for the two directory status lines: plain `\x1b[32m` green.
pub const STATUS_STYLE: &str = "green.dim";
pub const CREATED_MESSAGE: &str = "Project created successfully!";
pub const EXISTS_MESSAGE: &str = "Directory already exists!";

/// Main scaffolding service.
pub struct ScaffoldService<'a, S> {
    filesystem: Box<dyn Filesystem>,
    emitter: &'a Emitter<S>,
}

impl<'a, S: LineSink> ScaffoldService<'a, S> {
    /// Create a new scaffold service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, emitter: &'a Emitter<S>) -> Self {
        Self {
            filesystem,
            emitter,
        }
    }

    /// Lay down `blueprint` under `parent`.
    #[instrument(
        skip_all,
        fields(
            project = %blueprint.name,
            parent = %parent.as_ref().display()
        )
    )]
    pub fn create_backend(
        &self,
        blueprint: &ProjectBlueprint,
        parent: impl AsRef<Path>,
    ) -> SproutResult<ScaffoldOutcome> {
        let project_dir = blueprint.project_dir(parent.as_ref());

        let outcome = if self.filesystem.exists(&project_dir) {
            self.emitter.emit_str(STATUS_STYLE, EXISTS_MESSAGE);
            ScaffoldOutcome::AlreadyExisted { path: project_dir }
        } else {
            self.filesystem.create_dir_all(&project_dir)?;
            self.emitter.emit_str(STATUS_STYLE, CREATED_MESSAGE);
            ScaffoldOutcome::Created { path: project_dir }
        };

        let placeholder = outcome.path().join(&blueprint.placeholder_file);
        if let Err(e) = self
            .filesystem
            .write_file(&placeholder, &blueprint.placeholder_content)
        {
            if outcome.created() {
                warn!("Placeholder write failed, attempting rollback");
                return Err(self.rollback(outcome.path(), e));
            }
            return Err(e);
        }

        info!(
            created = outcome.created(),
            file = %placeholder.display(),
            "Backend scaffold written"
        );
        Ok(outcome)
    }

    /// Remove a directory this run created after `cause` stopped the run.
    ///
    /// Returns the error to report: `cause` itself, or `RollbackFailed`
    /// carrying it when the directory could not be removed.
    fn rollback(&self, root: &Path, cause: SproutError) -> SproutError {
        match self.filesystem.remove_dir_all(root) {
            Ok(()) => cause,
            Err(e) => {
                warn!(error = %e, path = %root.display(), "Rollback failed");
                ApplicationError::RollbackFailed {
                    path: root.to_path_buf(),
                    reason: e.to_string(),
                    cause: cause.to_string(),
                }
                .into()
            }
        }
    }
}

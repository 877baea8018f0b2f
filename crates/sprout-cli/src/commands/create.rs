//! Implementation of the `sprout create:backend` command.
//!
//! Responsibility: turn CLI arguments and config into a `ProjectBlueprint`,
//! call the core scaffold service, and print follow-up hints. No business
//! logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use sprout_adapters::LocalFilesystem;
use sprout_core::{
    application::{ScaffoldService, ports::LineSink},
    domain::{ProjectBlueprint, ProjectName, ScaffoldOutcome},
};

use crate::{
    cli::CreateBackendArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `sprout create:backend` command.
///
/// Dispatch sequence:
/// 1. Announce the project when a name was given explicitly
/// 2. Build the blueprint (name + placeholder from config)
/// 3. Resolve the parent directory
/// 4. Scaffold via `ScaffoldService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(project = ?args.name))]
pub fn execute<S: LineSink>(
    args: CreateBackendArgs,
    config: &AppConfig,
    output: &OutputManager<S>,
) -> CliResult<()> {
    if let Some(name) = &args.name {
        output.info(&format!("Creating backend project: {name}"));
    }

    let blueprint = build_blueprint(args.name.as_deref(), config)?;
    let parent = resolve_parent(args.dir)?;

    debug!(
        project = %blueprint.name,
        parent = %parent.display(),
        placeholder = %blueprint.placeholder_file,
        "Blueprint resolved"
    );

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), output.emitter());
    let outcome = service
        .create_backend(&blueprint, &parent)
        .with_cli_context(|| format!("creating {}", blueprint.name))?;

    if let ScaffoldOutcome::Created { .. } = outcome {
        output.hint("Next steps:");
        output.hint(&format!("  cd {}", next_step_path(&parent, &blueprint)));
    }

    Ok(())
}

// ── Blueprint ─────────────────────────────────────────────────────────────────

fn build_blueprint(name: Option<&str>, config: &AppConfig) -> CliResult<ProjectBlueprint> {
    let name = ProjectName::new(name.unwrap_or(&config.defaults.project_name))
        .map_err(|e| CliError::Core(e.into()))?;

    ProjectBlueprint::new(name)
        .with_placeholder(
            config.scaffold.placeholder_file.as_str(),
            config.scaffold.placeholder_content.as_str(),
        )
        .map_err(|e| CliError::Core(e.into()))
}

// ── Paths ─────────────────────────────────────────────────────────────────────

fn resolve_parent(dir: Option<PathBuf>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) if dir.is_dir() => Ok(dir),
        Some(dir) => Err(CliError::InvalidInput {
            message: format!("'{}' is not a directory", dir.display()),
            source: None,
        }),
        None => std::env::current_dir().with_cli_context(|| "reading current directory"),
    }
}

/// What to `cd` into: just the name when scaffolding into the CWD.
fn next_step_path(parent: &Path, blueprint: &ProjectBlueprint) -> String {
    let cwd = std::env::current_dir().ok();
    if cwd.as_deref() == Some(parent) {
        blueprint.name.to_string()
    } else {
        blueprint.project_dir(parent).display().to_string()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blueprint_uses_config_default_name() {
        let bp = build_blueprint(None, &AppConfig::default()).unwrap();
        assert_eq!(bp.name.as_str(), "My-app");
        assert_eq!(bp.placeholder_file, "server.js");
    }

    #[test]
    fn blueprint_prefers_explicit_name() {
        let bp = build_blueprint(Some("my-api"), &AppConfig::default()).unwrap();
        assert_eq!(bp.name.as_str(), "my-api");
    }

    #[test]
    fn hidden_name_is_user_error() {
        let err = build_blueprint(Some(".hidden"), &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn nested_placeholder_is_config_error() {
        let mut config = AppConfig::default();
        config.scaffold.placeholder_file = "src/server.js".into();
        let err = build_blueprint(None, &config).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn parent_must_be_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(resolve_parent(Some(tmp.path().to_path_buf())).is_ok());
        assert!(matches!(
            resolve_parent(Some(tmp.path().join("missing"))),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn next_step_is_full_path_outside_cwd() {
        let bp = build_blueprint(Some("svc"), &AppConfig::default()).unwrap();
        let parent = Path::new("/definitely/not/cwd");
        assert_eq!(next_step_path(parent, &bp), "/definitely/not/cwd/svc");
    }
}

//! `sprout config`: read configuration values.

use sprout_core::application::ports::LineSink;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute<S: LineSink>(
    cmd: ConfigCommands,
    config: &AppConfig,
    output: &OutputManager<S>,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.info(&format!("{key} = {value:?}"));
        }

        ConfigCommands::List => {
            output.header("Current Configuration:");
            let serialised =
                toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            for line in serialised.lines().filter(|l| !l.is_empty()) {
                output.info(line);
            }
        }

        ConfigCommands::Path => {
            output.info(&AppConfig::config_path().display().to_string());
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.project_name" => Ok(config.defaults.project_name.clone()),
        "scaffold.placeholder_file" => Ok(config.scaffold.placeholder_file.clone()),
        "scaffold.placeholder_content" => Ok(config.scaffold.placeholder_content.clone()),
        "output.unknown_style" => Ok(format!("{:?}", config.output.unknown_style).to_lowercase()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

//! `sprout styles`: preview every style token.

use sprout_core::{
    application::ports::LineSink,
    domain::{Palette, SemanticLevel},
};

use crate::{cli::StylesArgs, error::CliResult, output::OutputManager};

/// Print each semantic level, then (unless `--levels`) all palette entries,
/// each line rendered in the style it names.
pub fn execute<S: LineSink>(args: StylesArgs, output: &OutputManager<S>) -> CliResult<()> {
    output.header("Levels");
    for level in SemanticLevel::ALL {
        let (color, intensity) = level.style();
        output.emit(
            level.as_str(),
            Some(&format!("  {:<9} {color}.{intensity}", level.as_str())),
        );
    }

    if args.levels {
        return Ok(());
    }

    output.header("Palette");
    for (color, intensity, _) in Palette::entries() {
        let token = format!("{color}.{intensity}");
        output.emit(&token, Some(&format!("  {token}")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cli::GlobalArgs, config::AppConfig};
    use sprout_adapters::MemorySink;

    fn run(levels: bool) -> Vec<String> {
        let sink = MemorySink::new();
        let out = OutputManager::with_sink(sink.clone(), &GlobalArgs::default(), &AppConfig::default());
        execute(StylesArgs { levels }, &out).unwrap();
        sink.lines()
    }

    #[test]
    fn levels_only() {
        let lines = run(true);
        // header + six levels
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[2], "\x1b[32;1m  success   green.intense\x1b[0m");
    }

    #[test]
    fn full_listing_includes_palette() {
        let lines = run(false);
        assert_eq!(lines.len(), 7 + 1 + 24);
        assert!(lines.contains(&"\x1b[90m  black.dim\x1b[0m".to_string()));
    }
}

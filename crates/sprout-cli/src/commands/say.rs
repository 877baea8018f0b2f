//! `sprout say`: print one styled line.

use sprout_core::application::ports::LineSink;

use crate::{cli::SayArgs, error::CliResult, output::OutputManager};

/// Emit `args.text` in `args.style`.
///
/// Never fails: unknown styles print in white.normal and missing text
/// prints the red diagnostic line.
pub fn execute<S: LineSink>(args: SayArgs, output: &OutputManager<S>) -> CliResult<()> {
    output.emit(&args.style, args.text.as_deref());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cli::GlobalArgs, config::AppConfig};
    use sprout_adapters::MemorySink;

    fn say(style: &str, text: Option<&str>) -> Vec<String> {
        let sink = MemorySink::new();
        let out = OutputManager::with_sink(sink.clone(), &GlobalArgs::default(), &AppConfig::default());
        execute(
            SayArgs {
                style: style.into(),
                text: text.map(Into::into),
            },
            &out,
        )
        .unwrap();
        sink.lines()
    }

    #[test]
    fn warn_disk_low() {
        assert_eq!(say("warn", Some("Disk low")), vec!["\x1b[33;22mDisk low\x1b[0m"]);
    }

    #[test]
    fn missing_text_is_not_an_error() {
        assert_eq!(
            say("success", None),
            vec!["\x1b[31;1mText or style is missing.\x1b[0m"]
        );
    }
}

//! Command-line entry point: writes the Launchpad investor deck.

use anyhow::Context;
use clap::Parser;
use launchpad_deck::deck::{OUTPUT_FILE_NAME, launchpad_deck};
use std::io::Write;
use std::path::PathBuf;

/// Build the Launchpad investor pitch deck
#[derive(Parser, Debug)]
#[command(
    name = "launchpad-deck",
    about = "Build the Launchpad investor pitch deck as a PowerPoint file",
    version
)]
struct Cli {
    /// Output path for the .pptx file
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "LAUNCHPAD_DECK_OUTPUT",
        default_value = OUTPUT_FILE_NAME
    )]
    output: PathBuf,

    /// Print the slide outline as JSON instead of writing a file
    #[arg(long)]
    outline: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&cli, &mut std::io::stdout().lock())
}

/// Print the outline or save the deck, reporting on `out`.
fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let deck = launchpad_deck();

    if cli.outline {
        let json = serde_json::to_string_pretty(&deck.outline())
            .context("Failed to render deck outline")?;
        writeln!(out, "{json}").context("Failed to write deck outline")?;
        return Ok(());
    }

    deck.save(&cli.output)
        .with_context(|| format!("Failed to save deck to {}", cli.output.display()))?;
    writeln!(out, "Saved {}", cli.output.display())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    const OUTPUT_ENV: &str = "LAUNCHPAD_DECK_OUTPUT";

    #[test]
    fn test_output_default_and_env_override() {
        // Both cases share one test: they read the same process environment.
        unsafe { std::env::remove_var(OUTPUT_ENV) };
        let cli = Cli::try_parse_from(["launchpad-deck"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("Launchpad-Investor-Deck-v3.pptx"));
        assert!(!cli.outline);
        assert!(!cli.verbose);

        unsafe { std::env::set_var(OUTPUT_ENV, "from-env/deck.pptx") };
        let from_env = Cli::try_parse_from(["launchpad-deck"]).unwrap();
        let flag_wins = Cli::try_parse_from(["launchpad-deck", "-o", "flag.pptx"]).unwrap();
        unsafe { std::env::remove_var(OUTPUT_ENV) };

        assert_eq!(from_env.output, PathBuf::from("from-env/deck.pptx"));
        assert_eq!(flag_wins.output, PathBuf::from("flag.pptx"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["launchpad-deck", "--output", "a.pptx", "--outline", "-v"])
            .unwrap();
        assert_eq!(cli.output, PathBuf::from("a.pptx"));
        assert!(cli.outline);
        assert!(cli.verbose);

        assert!(Cli::try_parse_from(["launchpad-deck", "--bogus"]).is_err());
    }

    #[test]
    fn test_outline_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        let cli = Cli::try_parse_from([
            OsStr::new("launchpad-deck"),
            OsStr::new("--outline"),
            OsStr::new("-o"),
            path.as_os_str(),
        ])
        .unwrap();

        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();

        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
        let outline: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(outline.as_array().unwrap().len(), 12);
        assert_eq!(outline[0]["title"], "Launchpad");
    }

    #[test]
    fn test_save_prints_saved_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deck.pptx");
        let cli =
            Cli::try_parse_from([OsStr::new("launchpad-deck"), OsStr::new("-o"), path.as_os_str()])
                .unwrap();

        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();

        assert!(path.is_file());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Saved {}\n", path.display())
        );
    }

    #[test]
    fn test_closed_stdout_is_an_error() {
        struct ClosedPipe;

        impl Write for ClosedPipe {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let cli = Cli::try_parse_from(["launchpad-deck", "--outline"]).unwrap();
        let err = run(&cli, &mut ClosedPipe).unwrap_err();
        assert_eq!(err.to_string(), "Failed to write deck outline");
    }
}

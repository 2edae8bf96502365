use clap::Parser;
use tracing::Level;

use crate::{render::OutputFormat, shell::ShellConfig};

/// Command-line arguments for the library catalog shell
#[derive(Parser, Debug)]
#[command(name = "library-catalog", author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Print one JSON document per command instead of text
    #[arg(long)]
    pub json: bool,

    /// Do not print the command menu or the prompt
    #[arg(short, long)]
    pub quiet: bool,

    /// Clear the screen before every command
    #[arg(long)]
    pub clear: bool,

    /// Wait for Enter after every command
    #[arg(long)]
    pub pause: bool,

    /// Never colour the output
    #[arg(long)]
    pub no_color: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Maximum level of diagnostics written to stderr
    #[must_use]
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Shell settings; `interactive` is whether stdout is a terminal
    #[must_use]
    pub fn shell_config(&self, interactive: bool) -> ShellConfig {
        ShellConfig {
            banner: !self.quiet,
            prompt: !self.quiet && !self.json,
            clear_screen: self.clear,
            pause: self.pause,
            color: interactive && !self.no_color,
            format: if self.json { OutputFormat::Json } else { OutputFormat::Text },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_interactive_text() {
        let cli = Cli::try_parse_from(["library-catalog"]);
        assert!(cli.is_ok());
        if let Ok(cli) = cli {
            assert_eq!(cli.log_level(), Level::WARN);
            assert_eq!(cli.shell_config(false), ShellConfig::default());
            assert!(cli.shell_config(true).color);
        }
    }

    #[test]
    fn test_flags_map_to_shell_config() {
        let cli = Cli::try_parse_from(["library-catalog", "--json", "--pause", "--no-color", "-vv"]);
        assert!(cli.is_ok());
        if let Ok(cli) = cli {
            let config = cli.shell_config(true);
            assert_eq!(config.format, OutputFormat::Json);
            assert!(!config.prompt);
            assert!(config.pause);
            assert!(!config.color);
            assert_eq!(cli.log_level(), Level::DEBUG);
        }
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["library-catalog", "--persist"]).is_err());
    }
}

//! lintgate CLI tool.
//!
//! Usage:
//! ```bash
//! lintgate [OPTIONS] FILELIST
//! lintgate [OPTIONS] FILE.cs
//! lintgate [OPTIONS] -r DIRECTORY
//! lintgate -l DIRECTORY
//! ```

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};
use lintgate_core::{has_extension, Config, FileSource};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

use config_resolver::ConfigSource;

/// Exit status for a malformed invocation.
const EXIT_USAGE: i32 = 1;

/// Runs a style checker over changed files from a version-control hook
#[derive(Parser, Debug)]
#[command(name = "lintgate")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["input", "recursive", "list"])))]
struct Cli {
    /// File of newline-separated paths, or a single source file
    #[arg(value_name = "FILELIST|FILE")]
    input: Option<PathBuf>,

    /// Analyze every source file under DIRECTORY
    #[arg(short = 'r', value_name = "DIRECTORY")]
    recursive: Option<PathBuf>,

    /// Print every source file under DIRECTORY, one per line, and exit
    #[arg(short = 'l', value_name = "DIRECTORY")]
    list: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Engine settings file (default: next to the executable)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

/// What this invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    /// Analyze files from the given source.
    Check(FileSource),
    /// Print the recursive scan of a directory.
    List(PathBuf),
}

impl Cli {
    /// Maps the parsed arguments to a [`Mode`]. A positional argument with
    /// the recognized extension is a single file; anything else is a list file.
    fn mode(&self, extension: &str) -> Option<Mode> {
        if let Some(dir) = &self.list {
            return Some(Mode::List(dir.clone()));
        }
        if let Some(dir) = &self.recursive {
            return Some(Mode::Check(FileSource::Directory(dir.clone())));
        }
        let input = self.input.as_ref()?;
        if has_extension(&input.to_string_lossy(), extension) {
            Some(Mode::Check(FileSource::SingleFile(input.clone())))
        } else {
            Some(Mode::Check(FileSource::ListFile(input.clone())))
        }
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", e.render());
                std::process::exit(EXIT_USAGE);
            }
        },
    };

    // stderr carries the report, so only warnings and errors by default.
    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&config_resolver::resolve(cli.config.as_deref()))?;

    let Some(mode) = cli.mode(&config.extension) else {
        // Unreachable with the required `mode` group; treated as a usage error.
        println!("{}", <Cli as clap::CommandFactory>::command().render_usage());
        std::process::exit(EXIT_USAGE);
    };

    match mode {
        Mode::List(dir) => {
            commands::list::run(&dir, &config)?;
            Ok(())
        }
        Mode::Check(source) => {
            let settings =
                config_resolver::resolve_settings(cli.settings.as_deref(), &config.settings_file)?;
            let code = commands::check::run(&source, &config, settings)?;
            if code != lintgate_core::EXIT_CLEAN {
                std::process::exit(code);
            }
            Ok(())
        }
    }
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("lintgate").chain(args.iter().copied()))
    }

    #[test]
    fn positional_source_file_is_single_file() {
        let cli = parse(&["src/Program.CS"]).unwrap();
        assert_eq!(
            cli.mode("cs"),
            Some(Mode::Check(FileSource::SingleFile(PathBuf::from(
                "src/Program.CS"
            ))))
        );
    }

    #[test]
    fn positional_other_file_is_list_file() {
        let cli = parse(&["changed-files.tmp"]).unwrap();
        assert_eq!(
            cli.mode("cs"),
            Some(Mode::Check(FileSource::ListFile(PathBuf::from(
                "changed-files.tmp"
            ))))
        );
    }

    #[test]
    fn recursive_flag_scans_directory() {
        let cli = parse(&["-r", "src"]).unwrap();
        assert_eq!(
            cli.mode("cs"),
            Some(Mode::Check(FileSource::Directory(PathBuf::from("src"))))
        );
    }

    #[test]
    fn list_flag_lists_directory() {
        let cli = parse(&["-l", "src"]).unwrap();
        assert_eq!(cli.mode("cs"), Some(Mode::List(PathBuf::from("src"))));
    }

    #[test]
    fn no_arguments_is_a_usage_error() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn too_many_arguments_is_a_usage_error() {
        assert!(parse(&["a.txt", "b.txt"]).is_err());
        assert!(parse(&["-r", "src", "list.txt"]).is_err());
        assert!(parse(&["-r", "src", "-l", "src"]).is_err());
    }

    #[test]
    fn flag_without_directory_is_a_usage_error() {
        assert!(parse(&["-r"]).is_err());
        assert!(parse(&["-x", "src"]).is_err());
    }

    #[test]
    fn ambient_flags_combine_with_modes() {
        let cli = parse(&["-v", "--config", "lg.toml", "--settings", "S.StyleCop", "-r", "src"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("lg.toml")));
        assert_eq!(cli.settings, Some(PathBuf::from("S.StyleCop")));
    }

    #[test]
    fn default_config_when_none_found() {
        let config = load_config(&ConfigSource::Default).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let source = ConfigSource::Explicit(PathBuf::from("/nonexistent/lintgate.toml"));
        assert!(load_config(&source).is_err());
    }
}

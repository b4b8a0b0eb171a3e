//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Rewrite generated HTML in place for edge hosting
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output directory to rewrite (default: `[build].output`, else `out`)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: postbuild.toml, searched upward from cwd)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Package manifest providing the app version (default: package.json)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub manifest: Option<PathBuf>,

    /// Brand appended to translated titles
    #[arg(long)]
    pub brand: Option<String>,

    /// Transform files without writing them back
    #[arg(short, long)]
    pub dry: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["postbuild"]);
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.dry);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::parse_from([
            "postbuild",
            "dist",
            "-C",
            "ci.toml",
            "-m",
            "app/package.json",
            "--brand",
            "Acme",
            "-d",
            "-v",
            "--color",
            "never",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("dist")));
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
        assert_eq!(cli.manifest, Some(PathBuf::from("app/package.json")));
        assert_eq!(cli.brand.as_deref(), Some("Acme"));
        assert!(cli.dry);
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }
}

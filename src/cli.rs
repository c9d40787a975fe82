//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scriptorium static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Root directory of the site (default: current directory)
    #[arg(short, long)]
    pub root: Option<String>,

    /// Config file name, relative to root
    #[arg(short = 'C', long, default_value = "site.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments of the build command
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clear the output directory before building
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub clean: Option<bool>,

    /// Output directory path (relative to root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override base URL for the site.
    ///
    /// Useful when the production URL differs from local development,
    /// without touching site.toml:
    ///   scriptorium build --base-url "https://example.github.io/blog"
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Init a template site
    Init {
        /// the name(path) of site directory, related to `root`
        name: Option<PathBuf>,
    },

    /// Build the site into the output directory
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

impl Cli {
    /// Root with a leading `~` expanded.
    pub fn root_dir(&self) -> PathBuf {
        match self.root.as_deref() {
            Some(root) => PathBuf::from(shellexpand::tilde(root).into_owned()),
            None => PathBuf::from("./"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_build_args() {
        let cli = Cli::parse_from([
            "scriptorium",
            "--root",
            "site",
            "build",
            "--clean=false",
            "--output",
            "public",
            "--base-url",
            "https://example.com/blog",
        ]);

        assert_eq!(cli.root.as_deref(), Some("site"));
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(build_args.clean, Some(false));
        assert_eq!(build_args.output, Some(PathBuf::from("public")));
        assert_eq!(build_args.base_url.as_deref(), Some("https://example.com/blog"));
    }

    #[test]
    fn test_bare_clean_flag_means_true() {
        let cli = Cli::parse_from(["scriptorium", "build", "--clean"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(build_args.clean, Some(true));
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::parse_from(["scriptorium", "-C", "other.toml", "init", "blog"]);
        assert!(matches!(cli.command, Commands::Init { name: Some(ref name) } if name == Path::new("blog")));
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }

    #[test]
    fn test_root_dir_expands_tilde() {
        let cli = Cli::parse_from(["scriptorium", "--root", "~/sites/blog", "build"]);
        assert!(cli.root_dir().ends_with("sites/blog"));

        let cli = Cli::parse_from(["scriptorium", "build"]);
        assert_eq!(cli.root_dir(), PathBuf::from("./"));
    }
}

//! CLI argument parsing with clap.

use std::collections::HashMap;

use clap::{Parser, Subcommand};

/// Language context and placeholder image service for the career platform site.
#[derive(Parser, Debug)]
#[command(name = "career-platform", version, about)]
pub struct Cli {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server.
    Serve {
        /// Address to listen on (overrides config and `CAREER_PLATFORM_BIND`).
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Render a placeholder SVG from positional segments.
    Placeholder {
        /// Segments: width, height, background, text color, label.
        segments: Vec<String>,

        /// Output file path (stdout if not specified).
        #[arg(short, long)]
        output: Option<String>,

        /// Write to an auto-generated file name in the current directory.
        #[arg(long, conflicts_with = "output")]
        auto_name: bool,
    },

    /// Read or change the persisted language.
    Lang {
        /// Language action.
        #[command(subcommand)]
        action: LangAction,
    },

    /// Translate a key in the active language.
    Translate {
        /// Dotted translation key, e.g. `hero.title`.
        key: String,

        /// Named parameters as `name=value`.
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// Translate in this language instead of the persisted one (not saved).
        #[arg(short, long)]
        lang: Option<String>,
    },
}

/// Actions of the `lang` command.
#[derive(Subcommand, Debug)]
pub enum LangAction {
    /// Print the active language code.
    Get,
    /// Make a language active and persist it.
    Set {
        /// Language code.
        code: String,
    },
    /// List the supported languages.
    List,
}

/// Parse `name=value` pairs into a parameter map.
///
/// # Errors
///
/// Returns an error naming the first pair without `=` or with an empty name.
pub fn parse_params(pairs: &[String]) -> Result<HashMap<String, String>, String> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
            _ => Err(format!("Invalid parameter '{pair}'. Expected NAME=VALUE")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_segments() {
        let cli = Cli::parse_from(["career-platform", "placeholder", "300", "200", "ff0000"]);
        match cli.command {
            Command::Placeholder { segments, output, auto_name } => {
                assert_eq!(segments, vec!["300", "200", "ff0000"]);
                assert!(output.is_none());
                assert!(!auto_name);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn placeholder_output_conflicts_with_auto_name() {
        let result = Cli::try_parse_from([
            "career-platform",
            "placeholder",
            "-o",
            "x.svg",
            "--auto-name",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::parse_from(["career-platform", "lang", "set", "hi", "-v", "--config", "c.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some("c.toml"));
        match cli.command {
            Command::Lang { action: LangAction::Set { code } } => assert_eq!(code, "hi"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn translate_with_params() {
        let cli = Cli::parse_from([
            "career-platform",
            "translate",
            "hero.greeting",
            "-p",
            "name=Asha",
            "--param",
            "city=Pune",
            "--lang",
            "ta",
        ]);
        match cli.command {
            Command::Translate { key, params, lang } => {
                assert_eq!(key, "hero.greeting");
                let map = parse_params(&params).unwrap();
                assert_eq!(map["name"], "Asha");
                assert_eq!(map["city"], "Pune");
                assert_eq!(lang.as_deref(), Some("ta"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::parse_from(["career-platform", "serve"]);
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Command::Serve { bind: None }));
    }

    #[test]
    fn param_values_may_contain_equals() {
        let map = parse_params(&["q=a=b".to_string()]).unwrap();
        assert_eq!(map["q"], "a=b");
    }

    #[test]
    fn malformed_params_rejected() {
        assert!(parse_params(&["novalue".to_string()]).is_err());
        assert!(parse_params(&["=x".to_string()]).is_err());
    }

    #[test]
    fn missing_subcommand_errors() {
        assert!(Cli::try_parse_from(["career-platform"]).is_err());
    }
}

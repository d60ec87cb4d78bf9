//! career-platform - language context and placeholder image service.

mod adapters;
mod cli;
mod config;
mod context;
mod error;
mod language;
mod locale;
mod output;
mod placeholder;
mod ports;
mod server;

use std::process;

use clap::Parser;

use crate::cli::{parse_params, Cli, Command, LangAction};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::AppError;
use crate::locale::{supported_locales, Language};
use crate::output::{resolve_output_path, save_document};
use crate::placeholder::Placeholder;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(AppError::Config)?;
    if cli.verbose {
        eprintln!("Config: {}", config_path.display());
    }

    match cli.command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| config.bind_addr());
            let ctx = ServiceContext::from_config(&config, cli.verbose)?;
            server::serve(ctx, &addr, cli.verbose).await
        }
        Command::Placeholder { segments, output, auto_name } => {
            let placeholder = Placeholder::from_segments(&segments);
            if cli.verbose {
                eprintln!("Placeholder: {placeholder:?}");
            }
            let document = placeholder.render();
            match resolve_output_path(output.as_deref(), auto_name, &placeholder) {
                Some(path) => {
                    save_document(&document, &path)?;
                    eprintln!("Saved: {}", path.display());
                }
                None => println!("{document}"),
            }
            Ok(())
        }
        Command::Lang { action } => run_lang(&config, action, cli.verbose),
        Command::Translate { key, params, lang } => {
            let params = parse_params(&params).map_err(AppError::InvalidArgument)?;
            let ctx = with_language_provider(&config, cli.verbose)?;
            let value = ctx.with_language(|language| {
                Ok(match lang.as_deref() {
                    Some(code) => language.translate_in(code, &key, &params),
                    None => language.translate_with(&key, &params),
                })
            })?;
            println!("{value}");
            Ok(())
        }
    }
}

fn run_lang(config: &Config, action: LangAction, verbose: bool) -> Result<(), AppError> {
    match action {
        LangAction::List => {
            for locale in supported_locales() {
                println!("{}\t{}\t{}", locale.code, locale.name, locale.direction.as_str());
            }
            Ok(())
        }
        LangAction::Get => {
            let ctx = with_language_provider(config, verbose)?;
            let code = ctx.with_language(|language| Ok(language.language().to_string()))?;
            println!("{code}");
            Ok(())
        }
        LangAction::Set { code } => {
            let ctx = with_language_provider(config, verbose)?;
            ctx.with_language(|language| {
                language.set_language(&code)?;
                if !Language::is_supported(&code) {
                    eprintln!(
                        "Warning: '{code}' is not a supported language and will not be restored"
                    );
                }
                Ok(())
            })?;
            println!("{code}");
            Ok(())
        }
    }
}

/// Service context from config, failing fast when the provider is disabled.
fn with_language_provider(config: &Config, verbose: bool) -> Result<ServiceContext, AppError> {
    let ctx = ServiceContext::from_config(config, verbose)?;
    ctx.language()?;
    Ok(ctx)
}

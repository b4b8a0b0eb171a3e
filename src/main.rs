//! Postbuild - rewrites generated HTML in place for edge hosting.

mod cli;
mod config;
mod i18n;
mod logger;
mod manifest;
mod page;
mod pipeline;
mod scan;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, rewrite::rewrite_site};
use config::PostbuildConfig;
use i18n::Translations;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = PostbuildConfig::load(&cli)?;
    let translations = Translations::resolve(config.i18n.translations.as_deref())?;
    if translations.is_empty() {
        log!("warning"; "translation tables are empty, titles and descriptions are left as built");
    }
    debug!("config"; "root {}, {} translations", config.get_root().display(), translations.len());

    // Per-file failures are logged and do not change the exit status.
    rewrite_site(&config, &translations);
    Ok(())
}

//! rodo - a todo.txt manager for the command line

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use rodo::cli::commands;
use rodo::config::{ColorSetting, Config};
use rodo::storage::Store;
use rodo::{Cli, Commands, RodoError};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RodoError> {
    let cli = Cli::parse();

    let config = Config::load()?;
    apply_color_setting(config.general.color);

    let format = cli.output.unwrap_or(config.general.default_output);

    if let Commands::Completions { shell } = &cli.command {
        commands::completions(*shell);
        return Ok(());
    }

    let store_path = config.resolve_store_path(cli.file)?;
    let store = Store::open_at(&store_path);

    let report = match cli.command {
        Commands::Add { text, parse_only } => commands::add(&store, &text, parse_only, format)?,
        Commands::List {
            project,
            context,
            key,
            done,
            pending,
        } => commands::list(
            &store,
            project.as_deref(),
            context.as_deref(),
            key.as_deref(),
            done,
            pending,
            format,
        )?,
        Commands::Done { text } => commands::done(&store, &text, format)?,
        Commands::Delete { text } => commands::delete(&store, &text)?,
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    println!("{report}");
    Ok(())
}

fn apply_color_setting(setting: ColorSetting) {
    match setting {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }
}

//! `paydash` - CLI for the paycheck-to-paycheck dashboard
//!
//! This binary opens the interactive dashboard, renders frames headlessly,
//! and prints the datasets behind the charts.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use paydash::cli::{Cli, Command, ConfigCommand, DataCommand, OutputFormat, RenderCommand};
use paydash::{init_logging, tui, Config, Dashboard, Dataset, LogTarget, Tab, ViewState};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let verbosity = cli.verbosity();
    let config_path = cli.config.clone();
    let load = || Config::load_from(config_path.clone()).context("loading configuration");

    // Execute the command
    match cli.into_command() {
        Command::View(view) => {
            let config = load()?;
            // The interactive dashboard owns the terminal, so it logs to a file
            init_logging(verbosity, &LogTarget::File(config.log_file()))?;
            debug!(log_file = %config.log_file().display(), "logging initialized");

            let tab = view.tab.map_or(config.ui.initial_tab, Tab::from);
            tui::run(&config, tab)?;
        }
        Command::Render(render) => {
            init_logging(verbosity, &LogTarget::Stderr)?;
            handle_render(&load()?, &render)?;
        }
        Command::Data(data) => {
            init_logging(verbosity, &LogTarget::Stderr)?;
            handle_data(&data)?;
        }
        Command::Tabs => handle_tabs(),
        // Config commands load the file themselves so a broken one can be inspected
        Command::Config(config_cmd) => {
            init_logging(verbosity, &LogTarget::Stderr)?;
            handle_config(config_cmd, config_path)?;
        }
    }
    Ok(())
}

fn handle_render(config: &Config, cmd: &RenderCommand) -> anyhow::Result<()> {
    let tab = cmd.tab.map_or(config.ui.initial_tab, Tab::from);
    let screen = Dashboard::new(config.ui.show_sources).render(&ViewState::new(tab));

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&screen)?),
        OutputFormat::Plain => {
            let mut frame = config.render.clone();
            frame.width = cmd.width.unwrap_or(frame.width);
            frame.height = cmd.height.unwrap_or(frame.height);
            let checked = Config {
                render: frame,
                ..config.clone()
            };
            checked.validate()?;

            info!(%tab, width = checked.render.width, height = checked.render.height, "rendering frame");
            print!(
                "{}",
                tui::snapshot(&screen, checked.render.width, checked.render.height)?
            );
        }
    }
    Ok(())
}

fn handle_data(cmd: &DataCommand) -> anyhow::Result<()> {
    let datasets = match cmd.dataset {
        Some(arg) => vec![Dataset::from(arg)],
        None => Dataset::ALL.to_vec(),
    };

    match cmd.format {
        OutputFormat::Json => {
            let mut out = serde_json::Map::new();
            for dataset in &datasets {
                out.insert(dataset.name().to_string(), dataset.to_json()?);
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Plain => {
            for (i, dataset) in datasets.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{dataset} ({} rows)", dataset.len());
                println!("{}", dataset.table().to_plain());
            }
        }
    }
    Ok(())
}

fn handle_tabs() {
    for (i, tab) in Tab::ALL.iter().enumerate() {
        println!("{}  {:<14} {}", i + 1, tab.id(), tab.label());
    }
}

fn handle_config(cmd: ConfigCommand, custom: Option<PathBuf>) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(custom).context("loading configuration")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[UI]");
                println!("  Initial tab:        {}", config.ui.initial_tab);
                println!("  Tick rate (ms):     {}", config.ui.tick_rate_ms);
                println!("  Mouse:              {}", config.ui.mouse);
                println!("  Show sources:       {}", config.ui.show_sources);
                println!();
                println!("[Render]");
                println!("  Width:              {}", config.render.width);
                println!("  Height:             {}", config.render.height);
                println!();
                println!("[Logging]");
                println!("  Log file:           {}", config.log_file().display());
            }
        }
        ConfigCommand::Path => {
            let path = custom.unwrap_or_else(Config::default_config_path);
            println!("{}", path.display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.or(custom).unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path.clone()))
                .with_context(|| format!("invalid configuration in {}", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}

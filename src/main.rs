#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use dossier_core::{Content, Preferences, Theme, Timings};

use crate::context::{AppConfig, DEFAULT_IMAGE_DIR};

/// The Dinner Dossier - spy-themed supper club invitation
#[derive(Parser, Debug)]
#[command(name = "dossier-desktop")]
#[command(about = "The Dinner Dossier - your next mission, served with dessert")]
struct Args {
    /// Directory holding page.json and agents.json (defaults to the built-in documents)
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Directory agent images are loaded from
    #[arg(long, default_value = DEFAULT_IMAGE_DIR)]
    image_dir: String,

    /// Theme for this session (light or dark), overrides the saved preference
    #[arg(long)]
    theme: Option<Theme>,

    /// Skip the loading screen
    #[arg(long)]
    skip_intro: bool,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_content(dir: Option<&PathBuf>) -> anyhow::Result<Content> {
    match dir {
        Some(dir) => Content::from_dir(dir)
            .with_context(|| format!("failed to load content from {}", dir.display())),
        None => Content::embedded().context("embedded content is malformed"),
    }
}

fn build_config(args: &Args) -> anyhow::Result<AppConfig> {
    let content = load_content(args.content_dir.as_ref())?;

    let preferences_path = Preferences::default_path();
    let saved_theme = preferences_path
        .as_deref()
        .map(Preferences::load_or_default)
        .unwrap_or_default()
        .theme;

    let timings = if args.skip_intro {
        Timings::without_intro()
    } else {
        Timings::default()
    };

    Ok(AppConfig {
        content: Arc::new(content),
        timings,
        image_dir: args.image_dir.clone(),
        preferences_path,
        initial_theme: args.theme.unwrap_or(saved_theme),
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    // Fail before any window opens if a document is malformed
    let config = build_config(&args)?;

    tracing::info!(
        agents = config.content.roster.len(),
        theme = %config.initial_theme,
        "Starting '{}'",
        config.content.page.title
    );

    let window = WindowBuilder::new()
        .with_title(&config.content.page.title)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_flags() {
        let args = Args::try_parse_from([
            "dossier-desktop",
            "--theme",
            "light",
            "--skip-intro",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.theme, Some(Theme::Light));
        assert!(args.skip_intro);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.image_dir, DEFAULT_IMAGE_DIR);
    }

    #[test]
    fn args_reject_unknown_theme() {
        assert!(Args::try_parse_from(["dossier-desktop", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn skip_intro_zeroes_the_gate() {
        let args = Args::try_parse_from(["dossier-desktop", "--skip-intro"]).unwrap();
        let config = build_config(&args).unwrap();
        assert!(config.timings.loading_gate.is_zero());
    }

    #[test]
    fn missing_content_dir_fails() {
        let args =
            Args::try_parse_from(["dossier-desktop", "--content-dir", "/no/such/dossier"]).unwrap();
        let err = build_config(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("/no/such/dossier"));
    }
}

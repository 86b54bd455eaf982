#![allow(non_snake_case)]

mod app;
pub mod context;
mod theme;

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::app::Revision;
use crate::context::{default_data_dir, resource_dir, set_launch_config, LaunchConfig};

/// JPM Console - process manager console
#[derive(Parser, Debug)]
#[command(name = "jpm-console")]
#[command(version)]
#[command(about = "JPM Console - desktop console for the JPM process manager")]
struct Args {
    /// Directory for persisted preferences (default: <data dir>/jpm)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Scaffold revision to render
    #[arg(long, value_enum, default_value_t = Revision::WithIcon)]
    revision: Revision,

    /// Increase verbosity (-v, -vv, -vvv)
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

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    tracing::info!(
        "Starting JPM Console ({:?} revision) with data dir: {:?}",
        args.revision,
        data_dir
    );

    set_launch_config(LaunchConfig {
        data_dir: Some(data_dir),
        revision: args.revision,
    });

    let window_width = 1024.0;
    let window_height = 768.0;

    let resources = resource_dir();
    tracing::debug!("Serving static files from {:?}", resources);

    let config = Config::new()
        .with_resource_directory(resources)
        .with_window(
            WindowBuilder::new()
                .with_title("JPM Console")
                .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

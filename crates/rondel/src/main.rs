use clap::Parser;
use relm4::prelude::*;
use rondel::config;
use rondel::gui::app::{AppInit, AppModel};
use rondel::sys::runtime;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rondel", version, about, long_about = None)]
struct Cli {
    /// Configuration file to load and watch (defaults to the user config directory)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write the default configuration file if it does not exist, then exit
    #[arg(long)]
    init_config: bool,

    /// Keep the ring still unless it is dragged
    #[arg(long)]
    no_spin: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };
    let config_path = config::resolve_config_path(&config_path)?;

    if cli.init_config {
        let path = config::write_default_config(&config_path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx, config_path.clone());

    // clap already consumed the arguments
    let app = RelmApp::new("io.rondel.Rondel").with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        config,
        config_path,
        spin_enabled: !cli.no_spin,
        events: rx,
    });
    Ok(())
}

mod alarm;
mod beep;
mod config;
mod controller;
mod error;
mod geometry;
mod time_source;
mod ui;

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::beep::TerminalBell;
use crate::config::ClockConfig;
use crate::time_source::LocalTimeSource;

#[derive(Parser, Debug)]
#[command(
    name = "dialclock",
    version,
    about = "Analog desk clock with a one-time alarm and a daily reminder"
)]
struct Cli {}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    let config = ClockConfig::default();

    info!("Clock started");
    let result = ui::app::run_gui(config, Box::new(LocalTimeSource), Box::new(TerminalBell));
    info!("Clock stopped");
    result
}

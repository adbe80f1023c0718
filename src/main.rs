mod cli;
mod commands;
mod error;
mod img;
mod png;
mod rgb565;

use clap::Parser;
use cli::Cli;

fn main() {
    env_logger::init();
    Cli::parse().run();
}

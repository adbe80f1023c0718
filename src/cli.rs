use crate::commands::Command;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) {
        if let Err(e) = self.command.run() {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

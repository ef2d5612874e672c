//! CLI entry point for the blue-noise generator

use bluenoise::io::cli::{Cli, Driver};
use clap::Parser;

fn main() -> bluenoise::Result<()> {
    let cli = Cli::parse();
    let driver = Driver::new(cli);
    driver.run()
}

use std::process::ExitCode;

use clap::Parser;
use create_large_file::{config::GeneratorConfig, generator::RandomFileGenerator, logging};
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(name = "create_large_file")]
#[command(version)]
#[command(about = "writes a 1 GB file of random alphanumeric characters to ./large_file_1_gb.txt")]
struct Cli {}

/// Writes `./large_file_1_gb.txt` in the current working directory, 100 chunks
/// of 10&nbsp;MB each, and exits with status 1 if the file cannot be opened.
fn main() -> ExitCode {
    let _cli = Cli::parse();
    logging::init();

    // one seed for the whole run
    let mut rng = SmallRng::from_os_rng();

    let generator = RandomFileGenerator::new(GeneratorConfig::default());
    match generator.run(&mut rng) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

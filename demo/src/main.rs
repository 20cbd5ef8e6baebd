//! Print an A* route across a generated or hand-authored grid.
//!
//! Run: cargo run --bin tilepath-demo -- --seed 7 --max-weight 3 -vv

use anyhow::Result;
use clap::Parser;
use tilepath_demo::{Args, DemoConfig, logger, run};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = DemoConfig::from_args(&args)?;
    logger::init(logger::level_for(config.verbosity))?;

    let outcome = run(&config)?;
    print!("{}", outcome.picture());
    println!("{}", outcome.summary());
    Ok(())
}

use anyhow::Result;
use cellblock_lib::app::{App, OutputMode};
use cellblock_lib::model::metrics::init_logging;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Block JSON file: {"hash": "...", "transactions": [{"hash": "..."}]}
    #[arg(short, long)]
    block: String,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// What to print
    #[arg(short, long, value_enum, default_value = "attributes")]
    output: OutputMode,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let app = App::from_config_path(&args.config)?;
    tracing::info!(fingerprint = %app.config.fingerprint(), "Configuration loaded");

    let block = App::load_block(&args.block)?;
    let out = app.run(&block, args.output)?;
    println!("{out}");

    Ok(())
}

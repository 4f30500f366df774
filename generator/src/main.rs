mod error;
mod logger;
mod opt;

use error::GeneratorError;
use graphql_schema::generate_graphql_schema;
use logger::Logger;
use opt::GeneratorOpt;
use std::{fs, process};
use structopt::StructOpt;
use tracing::info;

fn main() {
    let opts = GeneratorOpt::from_args();

    let mut logger = Logger::new();
    logger.log_format(opts.log_format());
    logger.install().unwrap();

    if let Err(err) = run(&opts) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(opts: &GeneratorOpt) -> Result<(), GeneratorError> {
    let schema = fs::read_to_string(&opts.schema)?;
    let config = opts.generator_config()?;

    let file_name = match config.get("format") {
        Some("ts") => "schema.ts",
        _ => "schema.graphql",
    };

    let result = generate_graphql_schema(&schema, config)?;

    fs::create_dir_all(&opts.out)?;
    let target = opts.out.join(file_name);
    fs::write(&target, result)?;

    info!(file = %target.display(), "schema written");

    Ok(())
}

use std::fs;
use std::io::{self, Write};

use anyhow::Context;
use cdarray::script::Script;
use cdarray::CircularArray;
use clap::{Arg, ArgAction, Command};
use log::{info, LevelFilter};

fn main() -> anyhow::Result<()> {
    let matches = Command::new("cdarray-script")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs a scripted operation file against a circular dynamic array")
        .arg(
            Arg::new("file")
                .default_value("data.txt")
                .help("Script file: step count, data values, operation codes"),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .action(ArgAction::SetTrue)
                .help("Log the array contents after every step"),
        )
        .get_matches();

    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("trace") {
        logger.filter_module("cdarray", LevelFilter::Debug);
    }
    logger.init();

    let path = matches
        .get_one::<String>("file")
        .context("no script file given")?;
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let script: Script = text.parse().with_context(|| format!("parsing {}", path))?;
    info!("running {} steps from {}", script.len(), path);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut array = CircularArray::new();
    script.run(&mut array, &mut out)?;
    out.flush()?;
    Ok(())
}

//! Barcode driver
//!
//! `tda-barcode <filtration> <output>` computes one barcode;
//! `tda-barcode <max_dim>` runs the sphere family d = 0..=max_dim.
//! Exit code 0 on success, 1 on usage error or stage failure.

use std::process;

use clap::Parser;
use log::info;

use tda_persistence::config::{Cli, Command};
use tda_persistence::{run_file, run_spheres, Result};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.into_command()? {
        Command::Run { input, output, options } => {
            let barcode = run_file(&input, &output, &options)?;
            info!("{} intervals", barcode.len());
        }
        Command::Spheres {
            max_dimension,
            out_dir,
            options,
        } => {
            let runs = run_spheres(max_dimension, &out_dir, &options)?;
            for r in &runs {
                info!(
                    "d = {:2}  simplices = {:9}  intervals = {:9}  {:10.1} ms",
                    r.dimension,
                    r.simplices,
                    r.intervals,
                    r.elapsed.as_secs_f64() * 1e3
                );
            }
        }
    }
    Ok(())
}

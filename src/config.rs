//! # Command Line Configuration
//!
//! ```bash
//! # one filtration
//! tda-barcode filtration.txt barcode.txt
//!
//! # sphere family, d = 0..=12
//! tda-barcode 12 --out-dir spheres/
//! ```
//!
//! With a single positional argument it is read as the largest sphere
//! dimension; with two, as input and output paths.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::error::{PersistenceError, Result};
use crate::matrix::BoundaryBuilder;
use crate::pipeline::{Representation, RunOptions};

/// The d-sphere has 2^(d+2) - 2 simplices
pub const MAX_SPHERE_DIMENSION: usize = 24;

/// The dense matrix holds n² bytes: about 268 MB at d = 12
pub const MAX_DENSE_SPHERE_DIMENSION: usize = 12;

/// Digits beyond this carry no information for f64 values
pub const MAX_PRECISION: usize = 17;

#[derive(Parser, Debug)]
#[command(name = "tda-barcode")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Persistent homology barcodes of simplicial filtrations")]
pub struct Cli {
    /// Filtration file, or the largest sphere dimension when OUTPUT is omitted
    #[arg(value_name = "FILTRATION|MAX_DIM")]
    pub source: String,

    /// Barcode output file
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Matrix representation used for reduction
    #[arg(long, value_enum, default_value_t = Representation::Sparse)]
    pub representation: Representation,

    /// Boundary matrix construction strategy
    #[arg(long, value_enum, default_value_t = BoundaryBuilder::FaceEnumeration)]
    pub builder: BoundaryBuilder,

    /// Fixed-point digits in the output
    #[arg(long, default_value_t = 6)]
    pub precision: usize,

    /// Output directory for sphere barcodes
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Fail on filtrations with missing or out-of-order faces
    #[arg(long)]
    pub strict: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Warnings and errors only
    #[arg(short, long)]
    pub quiet: bool,
}

/// Validated work to perform
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// One filtration file
    Run {
        input: PathBuf,
        output: PathBuf,
        options: RunOptions,
    },
    /// Sphere family d = 0..=max_dimension
    Spheres {
        max_dimension: usize,
        out_dir: PathBuf,
        options: RunOptions,
    },
}

impl Cli {
    /// Validate arguments into a [`Command`]
    pub fn into_command(self) -> Result<Command> {
        if self.precision > MAX_PRECISION {
            return Err(PersistenceError::config(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, self.precision
            )));
        }

        let options = RunOptions {
            representation: self.representation,
            builder: self.builder,
            precision: self.precision,
            strict: self.strict,
        };

        match self.output {
            Some(output) => Ok(Command::Run {
                input: PathBuf::from(self.source),
                output,
                options,
            }),
            None => {
                let max_dimension: usize = self.source.parse().map_err(|_| {
                    PersistenceError::config(format!(
                        "expected an OUTPUT path or an integer sphere dimension, got {:?}",
                        self.source
                    ))
                })?;
                if max_dimension > MAX_SPHERE_DIMENSION {
                    return Err(PersistenceError::config(format!(
                        "sphere dimension must be at most {}, got {}",
                        MAX_SPHERE_DIMENSION, max_dimension
                    )));
                }
                if options.representation == Representation::Dense
                    && max_dimension > MAX_DENSE_SPHERE_DIMENSION
                {
                    return Err(PersistenceError::config(format!(
                        "dense sphere runs are limited to dimension {}, got {}",
                        MAX_DENSE_SPHERE_DIMENSION, max_dimension
                    )));
                }
                Ok(Command::Spheres {
                    max_dimension,
                    out_dir: self.out_dir,
                    options,
                })
            }
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tda-barcode").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_run_command() {
        let cmd = parse(&["in.txt", "out.txt", "--representation", "dense"])
            .into_command()
            .unwrap();
        match cmd {
            Command::Run { input, output, options } => {
                assert_eq!(input, PathBuf::from("in.txt"));
                assert_eq!(output, PathBuf::from("out.txt"));
                assert_eq!(options.representation, Representation::Dense);
                assert_eq!(options.builder, BoundaryBuilder::FaceEnumeration);
                assert_eq!(options.precision, 6);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_sphere_command() {
        let cmd = parse(&["4", "--builder", "subset-scan", "--out-dir", "out"])
            .into_command()
            .unwrap();
        assert_eq!(
            cmd,
            Command::Spheres {
                max_dimension: 4,
                out_dir: PathBuf::from("out"),
                options: RunOptions {
                    builder: BoundaryBuilder::SubsetScan,
                    ..Default::default()
                },
            }
        );
    }

    #[test]
    fn test_usage_errors() {
        assert!(parse(&["not-a-number"]).into_command().is_err());
        assert!(parse(&["99"]).into_command().is_err());
        assert!(matches!(
            parse(&["24", "--representation", "dense"]).into_command(),
            Err(PersistenceError::Config { .. })
        ));
        assert!(parse(&["12", "--representation", "dense"]).into_command().is_ok());
        assert!(parse(&["24"]).into_command().is_ok());
        assert!(parse(&["a", "b", "--precision", "40"]).into_command().is_err());
        assert!(Cli::try_parse_from(["tda-barcode"]).is_err());
        assert!(Cli::try_parse_from(["tda-barcode", "1", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(parse(&["1", "-q"]).log_level(), LevelFilter::Warn);
        assert_eq!(parse(&["1", "-v"]).log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["1"]).log_level(), LevelFilter::Info);
    }
}

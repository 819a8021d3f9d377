//! Persistence Pipeline
//!
//! Filtration → boundary matrix → reduced matrix → barcode.
//!
//! The driver owns the filtration and the matrix buffer for the duration
//! of one run; the barcode is returned to the caller after it has been
//! written out.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::ValueEnum;
use log::{info, warn};

use crate::error::{PersistenceError, Result};
use crate::matrix::{build_dense, build_sparse, BoundaryBuilder};
use crate::persistence::{reduce, Barcode, ReductionStats};
use crate::topology::{sphere_filtration, Filtration};

/// Matrix representation used for reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Representation {
    /// Sorted row-index columns
    #[default]
    Sparse,
    /// Full n×n matrix
    Dense,
}

/// Per-run settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub representation: Representation,
    pub builder: BoundaryBuilder,
    /// Fixed-point digits in the barcode output
    pub precision: usize,
    /// Reject filtrations that are not closed under faces
    pub strict: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            representation: Representation::Sparse,
            builder: BoundaryBuilder::FaceEnumeration,
            precision: 6,
            strict: false,
        }
    }
}

/// Outcome of one sphere in a sphere-family run
#[derive(Debug, Clone)]
pub struct SphereRun {
    pub dimension: usize,
    pub simplices: usize,
    pub intervals: usize,
    pub elapsed: Duration,
    pub output: PathBuf,
}

/// Build, reduce and extract. Infallible once the filtration exists.
pub fn compute_barcode(
    filtration: &Filtration,
    options: &RunOptions,
) -> (Barcode, ReductionStats) {
    let n = filtration.len();

    let start = Instant::now();
    let (barcode, stats) = match options.representation {
        Representation::Sparse => {
            let mut matrix = build_sparse(filtration, options.builder);
            info!("boundary matrix built: {} columns ({:?})", n, start.elapsed());
            let (_, stats) = reduce(&mut matrix);
            (Barcode::from_reduced(&matrix, filtration), stats)
        }
        Representation::Dense => {
            let mut matrix = build_dense(filtration, options.builder);
            info!("boundary matrix built: {}x{} dense ({:?})", n, n, start.elapsed());
            let (_, stats) = reduce(&mut matrix);
            (Barcode::from_reduced(&matrix, filtration), stats)
        }
    };
    info!(
        "barcode extracted: {} intervals, {} column additions ({:?})",
        barcode.len(),
        stats.column_additions,
        start.elapsed()
    );
    (barcode, stats)
}

/// Check the face-before-coface condition, failing only in strict mode
pub fn check_closure(filtration: &Filtration, strict: bool) -> Result<()> {
    let missing = filtration.missing_faces();
    if missing.is_empty() {
        return Ok(());
    }
    if strict {
        let (id, face) = &missing[0];
        return Err(PersistenceError::config(format!(
            "filtration is not closed under faces: {} missing, first is {:?} of simplex {}",
            missing.len(),
            face,
            id
        )));
    }
    warn!(
        "{} faces are missing or out of order; their boundary entries are omitted",
        missing.len()
    );
    Ok(())
}

/// Write a barcode file
pub fn write_barcode(barcode: &Barcode, path: &Path, precision: usize) -> Result<()> {
    let output_err = |source| PersistenceError::Output {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(output_err)?;
    barcode
        .write_to(BufWriter::new(file), precision)
        .map_err(|e| match e {
            PersistenceError::Io(source) => output_err(source),
            other => other,
        })
}

/// Compute the barcode of one filtration file and write it to `output`
pub fn run_file(input: &Path, output: &Path, options: &RunOptions) -> Result<Barcode> {
    info!("reading filtration {}", input.display());
    let filtration = Filtration::read(input)?;
    info!(
        "{} simplices, max dimension {}",
        filtration.len(),
        filtration.max_dimension().map_or("-".to_string(), |d| d.to_string())
    );
    check_closure(&filtration, options.strict)?;

    let (barcode, _) = compute_barcode(&filtration, options);

    write_barcode(&barcode, output, options.precision)?;
    info!("barcode written to {}", output.display());
    Ok(barcode)
}

/// Barcodes of the d-spheres for d = 0..=max_dimension, one file each
/// (`<out_dir>/sphere_<d>.txt`)
pub fn run_spheres(
    max_dimension: usize,
    out_dir: &Path,
    options: &RunOptions,
) -> Result<Vec<SphereRun>> {
    fs::create_dir_all(out_dir).map_err(|source| PersistenceError::Output {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut runs = Vec::with_capacity(max_dimension + 1);
    for d in 0..=max_dimension {
        let start = Instant::now();
        let filtration = sphere_filtration(d);
        let (barcode, _) = compute_barcode(&filtration, options);
        let elapsed = start.elapsed();

        let output = out_dir.join(format!("sphere_{d}.txt"));
        write_barcode(&barcode, &output, options.precision)?;
        info!(
            "sphere {}: {} simplices in {:.1} ms -> {}",
            d,
            filtration.len(),
            elapsed.as_secs_f64() * 1e3,
            output.display()
        );

        runs.push(SphereRun {
            dimension: d,
            simplices: filtration.len(),
            intervals: barcode.len(),
            elapsed,
            output,
        });
    }
    Ok(runs)
}

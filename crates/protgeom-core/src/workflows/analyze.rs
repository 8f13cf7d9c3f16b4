use super::config::{AnalysisConfig, ParsingConfig};
use super::error::AnalysisError;
use crate::core::io::pdb::{PdbError, PdbFile, PdbReadOptions};
use crate::core::io::report::StatisticsRecord;
use crate::core::io::traits::StructureFile;
use crate::core::models::collection::AtomCollection;
use crate::core::utils::geometry;
use nalgebra::Point3;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The three geometric descriptors of one atom collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryStatistics {
    pub atom_count: usize,
    pub center_of_gravity: Point3<f64>,
    pub radius_of_gyration: f64,
    pub max_distance: f64,
}

impl GeometryStatistics {
    pub fn compute(atoms: &AtomCollection) -> Self {
        let center_of_gravity = geometry::center_of_gravity(atoms);
        let radius_of_gyration = geometry::radius_of_gyration(atoms, &center_of_gravity);
        let max_distance = geometry::max_pairwise_distance(atoms);

        Self {
            atom_count: atoms.len(),
            center_of_gravity,
            radius_of_gyration,
            max_distance,
        }
    }
}

/// Statistics for one input file, ready to be printed or exported.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub statistics: GeometryStatistics,
}

impl FileReport {
    /// Renders the summary line followed by the `Cg`, `Rg` and `Dmax` lines,
    /// each terminated by a newline.
    pub fn render(&self, precision: usize) -> String {
        let stats = &self.statistics;
        let cg = &stats.center_of_gravity;
        format!(
            "PDB file {path}, {count} atoms were read\n\
             Cg = {x:.p$} {y:.p$} {z:.p$}\n\
             Rg = {rg:.p$}\n\
             Dmax = {dmax:.p$}\n",
            path = self.path.display(),
            count = stats.atom_count,
            x = cg.x,
            y = cg.y,
            z = cg.z,
            rg = stats.radius_of_gyration,
            dmax = stats.max_distance,
            p = precision
        )
    }

    pub fn to_record(&self) -> StatisticsRecord {
        let stats = &self.statistics;
        StatisticsRecord {
            path: self.path.display().to_string(),
            atoms: stats.atom_count,
            cg_x: stats.center_of_gravity.x,
            cg_y: stats.center_of_gravity.y,
            cg_z: stats.center_of_gravity.z,
            rg: stats.radius_of_gyration,
            dmax: stats.max_distance,
        }
    }
}

/// Reads the atom records of one source, attributing any failure to `path`.
pub fn read_atoms(
    reader: &mut impl BufRead,
    path: &Path,
    parsing: &ParsingConfig,
) -> Result<AtomCollection, AnalysisError> {
    let options = PdbReadOptions::from(parsing);
    PdbFile::read_from(reader, &options).map_err(|e| match e {
        PdbError::Io(source) => AnalysisError::Read {
            path: path.to_path_buf(),
            source,
        },
        PdbError::Parse { line, kind } => AnalysisError::Record {
            path: path.to_path_buf(),
            line,
            kind,
        },
        PdbError::NoAtomRecords => AnalysisError::EmptyFile {
            path: path.to_path_buf(),
        },
    })
}

/// Opens, reads and analyzes a single structure file.
///
/// # Errors
///
/// Returns [`AnalysisError::FileOpen`] if the file cannot be opened, and the
/// errors of [`read_atoms`] otherwise.
pub fn run(path: &Path, config: &AnalysisConfig) -> Result<FileReport, AnalysisError> {
    debug!("Opening structure file {:?}", path);
    let file = File::open(path).map_err(|source| AnalysisError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let atoms = read_atoms(&mut reader, path, &config.parsing)?;
    info!("Read {} atom records from {:?}", atoms.len(), path);

    let statistics = GeometryStatistics::compute(&atoms);
    debug!(
        "Statistics for {:?}: Rg = {}, Dmax = {}",
        path, statistics.radius_of_gyration, statistics.max_distance
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        statistics,
    })
}

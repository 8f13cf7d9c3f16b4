use crate::core::io::pdb::PdbParseErrorKind;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Cannot open file {path}: {source}", path = path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed while reading {path}: {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record in {path} on line {line}: {kind}", path = path.display())]
    Record {
        path: PathBuf,
        line: usize,
        kind: PdbParseErrorKind,
    },

    #[error("0 atoms were found in the file {path}", path = path.display())]
    EmptyFile { path: PathBuf },
}

impl AnalysisError {
    pub fn path(&self) -> &Path {
        match self {
            Self::FileOpen { path, .. }
            | Self::Read { path, .. }
            | Self::Record { path, .. }
            | Self::EmptyFile { path } => path,
        }
    }
}

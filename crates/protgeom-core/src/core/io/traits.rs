use crate::core::models::collection::AtomCollection;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading atom coordinates from a structure file format.
///
/// Implementors handle the format-specific recognition and parsing of
/// coordinate records. Readers never terminate the process; every failure is
/// reported through [`StructureFile::Error`].
pub trait StructureFile {
    /// Format-specific knobs controlling which records are read and how strictly.
    type Options: Default;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads every coordinate record from a buffered reader, in input order.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `options` - Format-specific read options.
    ///
    /// # Errors
    ///
    /// Returns an error if a record is malformed, if the source holds no
    /// coordinate records, or if the underlying reader fails.
    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<AtomCollection, Self::Error>;

    /// Reads every coordinate record from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or [`Self::read_from`] fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        options: &Self::Options,
    ) -> Result<AtomCollection, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, options)
    }
}

use crate::core::io::traits::StructureFile;
use crate::core::models::atom::AtomCoordinate;
use crate::core::models::collection::AtomCollection;
use phf::{Map, phf_map};
use std::io::{self, BufRead};
use thiserror::Error;

/// Literal record name that marks a standard atom record.
pub const ATOM_RECORD_PREFIX: &str = "ATOM  ";

/// Width of the record name field at the start of every line.
pub const RECORD_NAME_WIDTH: usize = 6;

/// Width of each coordinate field.
pub const COORDINATE_WIDTH: usize = 8;

/// Byte offsets of the x, y and z coordinate fields.
pub const COORDINATE_OFFSETS: [usize; 3] = [30, 38, 46];

/// Byte offset just past the z coordinate field.
pub const COORDINATE_FIELDS_END: usize = 54;

/// A record must be strictly longer than this to be accepted by default.
pub const DEFAULT_MIN_RECORD_LENGTH: usize = 60;

const COORDINATE_COLUMNS: [&str; 3] = ["31-38", "39-46", "47-54"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Standard residue atom (`ATOM  `).
    Atom,
    /// Heterogen atom (`HETATM`).
    Hetatm,
}

static COORDINATE_RECORDS: Map<&'static str, RecordKind> = phf_map! {
    "ATOM  " => RecordKind::Atom,
    "HETATM" => RecordKind::Hetatm,
};

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("No atom records were found")]
    NoAtomRecords,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Atom record is too short: {length} characters (must be longer than {min_length})")]
    LineTooShort { length: usize, min_length: usize },
    #[error("Invalid coordinate in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: &'static str, value: String },
}

/// Controls which records [`PdbFile`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdbReadOptions {
    /// Also accept `HETATM` records as atoms.
    pub include_hetatm: bool,
    /// A record must be strictly longer than this many bytes.
    pub min_record_length: usize,
}

impl Default for PdbReadOptions {
    fn default() -> Self {
        Self {
            include_hetatm: false,
            min_record_length: DEFAULT_MIN_RECORD_LENGTH,
        }
    }
}

/// Returns `true` if `line` starts with the exact `ATOM  ` record name.
pub fn is_atom_record(line: &str) -> bool {
    line.starts_with(ATOM_RECORD_PREFIX)
}

/// Identifies the coordinate record kind of a line from its first six bytes.
///
/// The match is exact and case-sensitive; no trimming is applied.
pub fn record_kind(line: &str) -> Option<RecordKind> {
    if is_atom_record(line) {
        return Some(RecordKind::Atom);
    }
    line.get(..RECORD_NAME_WIDTH)
        .and_then(|name| COORDINATE_RECORDS.get(name).copied())
}

/// Extracts the x, y and z coordinates from a classified coordinate record.
///
/// # Errors
///
/// Returns [`PdbParseErrorKind::LineTooShort`] if the line is not longer than
/// `min_record_length` bytes, or [`PdbParseErrorKind::InvalidFloat`] if any of
/// the three fields does not start with a number (after leading blanks) or
/// holds one that overflows or underflows. Text following the number inside a
/// field is ignored.
pub fn parse_coordinates(
    line: &str,
    min_record_length: usize,
) -> Result<AtomCoordinate, PdbParseErrorKind> {
    if line.len() <= min_record_length {
        return Err(PdbParseErrorKind::LineTooShort {
            length: line.len(),
            min_length: min_record_length,
        });
    }

    let mut values = [0.0_f64; 3];
    for (axis, value) in values.iter_mut().enumerate() {
        *value = parse_coordinate_field(line, axis)?;
    }
    Ok(AtomCoordinate::from(values))
}

fn parse_coordinate_field(line: &str, axis: usize) -> Result<f64, PdbParseErrorKind> {
    let start = COORDINATE_OFFSETS[axis];
    let end = start + COORDINATE_WIDTH;
    let invalid = |value: String| PdbParseErrorKind::InvalidFloat {
        columns: COORDINATE_COLUMNS[axis],
        value,
    };

    let Some(field) = line.get(start..end) else {
        let raw = line.as_bytes().get(start..end.min(line.len())).unwrap_or(&[]);
        return Err(invalid(String::from_utf8_lossy(raw).into_owned()));
    };

    let Some(number) = leading_number(field.trim_start()) else {
        return Err(invalid(field.to_string()));
    };
    match number.parse::<f64>() {
        Ok(value) if value.is_finite() && !underflowed(number, value) => Ok(value),
        _ => Err(invalid(field.to_string())),
    }
}

/// Returns the longest leading decimal literal of `text`, the part `strtod`
/// would consume. Anything after it is ignored.
fn leading_number(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let digits_from = |at: usize| bytes[at..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&text[..end])
}

/// A literal with a nonzero mantissa that still parsed to zero is out of range.
fn underflowed(number: &str, value: f64) -> bool {
    let mantissa = number.split(['e', 'E']).next().unwrap_or(number);
    value == 0.0 && mantissa.bytes().any(|b| (b'1'..=b'9').contains(&b))
}

pub struct PdbFile;

impl StructureFile for PdbFile {
    type Options = PdbReadOptions;
    type Error = PdbError;

    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::Options,
    ) -> Result<AtomCollection, Self::Error> {
        let mut atoms = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let accepted = match record_kind(&line) {
                Some(RecordKind::Atom) => true,
                Some(RecordKind::Hetatm) => options.include_hetatm,
                None => false,
            };
            if !accepted {
                continue;
            }

            let atom = parse_coordinates(&line, options.min_record_length)
                .map_err(|kind| PdbError::Parse {
                    line: line_num,
                    kind,
                })?;
            atoms.push(atom);
        }

        AtomCollection::new(atoms).map_err(|_| PdbError::NoAtomRecords)
    }
}

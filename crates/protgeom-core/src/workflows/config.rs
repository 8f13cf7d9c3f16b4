use crate::core::io::pdb::{COORDINATE_FIELDS_END, DEFAULT_MIN_RECORD_LENGTH, PdbReadOptions};
use thiserror::Error;

/// Upper bound on printed decimal digits.
pub const MAX_PRECISION: usize = 12;

/// Decimal digits printed for every statistic unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 3;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error(
        "min-record-length must be at least {min} so that all coordinate fields fit (got {0})",
        min = COORDINATE_FIELDS_END
    )]
    RecordLengthTooSmall(usize),
    #[error("precision must not exceed {max} digits (got {0})", max = MAX_PRECISION)]
    PrecisionTooLarge(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsingConfig {
    pub include_hetatm: bool,
    pub min_record_length: usize,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            include_hetatm: false,
            min_record_length: DEFAULT_MIN_RECORD_LENGTH,
        }
    }
}

impl From<&ParsingConfig> for PdbReadOptions {
    fn from(config: &ParsingConfig) -> Self {
        Self {
            include_hetatm: config.include_hetatm,
            min_record_length: config.min_record_length,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Decimal digits used when printing Cg, Rg and Dmax.
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Complete, validated settings for an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisConfig {
    pub parsing: ParsingConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Default, Clone)]
pub struct AnalysisConfigBuilder {
    include_hetatm: Option<bool>,
    min_record_length: Option<usize>,
    precision: Option<usize>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_hetatm(mut self, include: bool) -> Self {
        self.include_hetatm = Some(include);
        self
    }

    pub fn min_record_length(mut self, length: usize) -> Self {
        self.min_record_length = Some(length);
        self
    }

    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let defaults = AnalysisConfig::default();

        let min_record_length = self
            .min_record_length
            .unwrap_or(defaults.parsing.min_record_length);
        if min_record_length < COORDINATE_FIELDS_END {
            return Err(ConfigError::RecordLengthTooSmall(min_record_length));
        }

        let precision = self.precision.unwrap_or(defaults.report.precision);
        if precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge(precision));
        }

        Ok(AnalysisConfig {
            parsing: ParsingConfig {
                include_hetatm: self
                    .include_hetatm
                    .unwrap_or(defaults.parsing.include_hetatm),
                min_record_length,
            },
            report: ReportConfig { precision },
        })
    }
}

use crate::cli::{Cli, HetatmRecords};
use crate::error::{CliError, Result};
use protgeom::workflows::config::{AnalysisConfig, AnalysisConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialParsingConfig {
    #[serde(rename = "include-hetatm")]
    include_hetatm: Option<bool>,
    #[serde(rename = "min-record-length")]
    min_record_length: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialReportConfig {
    precision: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAnalysisConfig {
    parsing: Option<PartialParsingConfig>,
    report: Option<PartialReportConfig>,
}

impl PartialAnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the final configuration: CLI flags win over file values, which
    /// win over the built-in defaults.
    pub fn merge_with_cli(self, args: &Cli) -> Result<AnalysisConfig> {
        let parsing = self.parsing.unwrap_or_default();
        let report = self.report.unwrap_or_default();

        let mut builder = AnalysisConfigBuilder::new();

        builder = Self::merge_include_hetatm(builder, args.hetatm, parsing.include_hetatm);
        if let Some(length) = parsing.min_record_length {
            builder = builder.min_record_length(length);
        }
        if let Some(digits) = args.precision.or(report.precision) {
            builder = builder.precision(digits);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn merge_include_hetatm(
        builder: AnalysisConfigBuilder,
        cli_flags: HetatmRecords,
        file_val: Option<bool>,
    ) -> AnalysisConfigBuilder {
        if cli_flags.include_hetatm {
            builder.include_hetatm(true)
        } else if cli_flags.exclude_hetatm {
            builder.include_hetatm(false)
        } else if let Some(val) = file_val {
            builder.include_hetatm(val)
        } else {
            builder
        }
    }
}

use crate::cli::Cli;
use crate::config::PartialAnalysisConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::FileProgress;
use protgeom::core::io::report::CsvReportWriter;
use protgeom::workflows::analyze::{self, FileReport};
use protgeom::workflows::config::AnalysisConfig;
use protgeom::workflows::error::AnalysisError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<FileReport>,
    pub failures: Vec<AnalysisError>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolves the configuration for `cli`, analyzes every file and writes the
/// optional CSV report.
///
/// Returns [`CliError::BatchFailed`] when `--keep-going` skipped any file.
pub fn execute(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
    let config = PartialAnalysisConfig::load(cli.config.as_deref())?.merge_with_cli(cli)?;
    debug!("Resolved configuration: {:?}", config);

    let progress = FileProgress::new(cli.files.len(), !cli.quiet && cli.files.len() > 1);
    let result = run(&cli.files, &config, cli.keep_going, out, err, &progress);
    progress.finish();
    let outcome = result?;

    if let Some(csv_path) = &cli.csv {
        write_csv(csv_path, &outcome.reports)?;
    }

    if !outcome.is_success() {
        return Err(CliError::BatchFailed {
            failed: outcome.failures.len(),
            total: cli.files.len(),
        });
    }

    info!("All {} file(s) analyzed successfully.", cli.files.len());
    Ok(())
}

/// Analyzes `files` in order, writing each file's statistics block to `out`
/// as soon as that file completes.
///
/// Without `keep_going` the first failing file ends the batch with its error;
/// statistics already written for earlier files stay written. With it, each
/// skipped file gets one `Error: ` line on `err`.
pub fn run(
    files: &[PathBuf],
    config: &AnalysisConfig,
    keep_going: bool,
    out: &mut impl Write,
    err: &mut impl Write,
    progress: &FileProgress,
) -> Result<BatchOutcome> {
    let mut outcome = BatchOutcome::default();

    for path in files {
        progress.start_file(path);

        match analyze::run(path, config) {
            Ok(report) => {
                let block = report.render(config.report.precision);
                progress.suspend(|| -> std::io::Result<()> {
                    out.write_all(block.as_bytes())?;
                    out.flush()
                })?;
                outcome.reports.push(report);
            }
            Err(e) if keep_going => {
                debug!("Skipping {:?}", path);
                progress.suspend(|| writeln!(err, "Error: {}", e))?;
                outcome.failures.push(e);
            }
            Err(e) => return Err(e.into()),
        }

        progress.finish_file();
    }

    info!(
        "Analyzed {} of {} file(s).",
        outcome.reports.len(),
        files.len()
    );
    Ok(outcome)
}

pub fn write_csv(path: &Path, reports: &[FileReport]) -> Result<()> {
    let to_error = |source| CliError::Report {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = CsvReportWriter::create(path).map_err(to_error)?;
    for report in reports {
        writer.write_record(&report.to_record()).map_err(to_error)?;
    }
    writer.finish().map_err(to_error)?;

    info!("Wrote {} row(s) to {:?}", reports.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::exit_code;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const ATOM_A: &str =
        "ATOM      1  N   ALA A   1       0.000   0.000   0.000  1.00  0.00           N";
    const ATOM_B: &str =
        "ATOM      2  CA  ALA A   1       3.000   4.000   0.000  1.00  0.00           C";

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn two_atom_file(dir: &TempDir, name: &str) -> PathBuf {
        write_file(dir, name, &format!("{}\n{}\n", ATOM_A, ATOM_B))
    }

    fn run_batch(
        files: &[PathBuf],
        keep_going: bool,
    ) -> (Result<BatchOutcome>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let progress = FileProgress::new(files.len(), false);
        let result = run(
            files,
            &AnalysisConfig::default(),
            keep_going,
            &mut out,
            &mut err,
            &progress,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn execute_with(args: &[&str]) -> (Result<()>, String, String) {
        let cli = Cli::parse_from(std::iter::once("analyze-protein").chain(args.iter().copied()));
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = execute(&cli, &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn successful_files_are_reported_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = two_atom_file(&dir, "first.pdb");
        let second = write_file(&dir, "second.pdb", &format!("{}\n", ATOM_B));

        let (result, output, errors) = run_batch(&[first.clone(), second.clone()], false);
        let outcome = result.unwrap();

        assert!(outcome.is_success());
        assert_eq!(outcome.reports.len(), 2);
        let expected = format!(
            "PDB file {}, 2 atoms were read\nCg = 1.500 2.000 0.000\nRg = 2.500\nDmax = 5.000\n\
             PDB file {}, 1 atoms were read\nCg = 3.000 4.000 0.000\nRg = 0.000\nDmax = 0.000\n",
            first.display(),
            second.display()
        );
        assert_eq!(output, expected);
        assert!(errors.is_empty());
    }

    #[test]
    fn first_failure_stops_the_batch_but_keeps_earlier_output() {
        let dir = tempfile::tempdir().unwrap();
        let good = two_atom_file(&dir, "good.pdb");
        let empty = write_file(&dir, "empty.pdb", "HEADER\nEND\n");
        let never = two_atom_file(&dir, "never.pdb");

        let (result, output, errors) = run_batch(&[good.clone(), empty, never.clone()], false);

        assert!(matches!(
            result,
            Err(CliError::Analysis(AnalysisError::EmptyFile { .. }))
        ));
        assert!(output.contains(&format!("PDB file {}", good.display())));
        assert!(!output.contains(&format!("PDB file {}", never.display())));
        assert!(errors.is_empty());
    }

    #[test]
    fn keep_going_collects_failures_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.pdb");
        let short = write_file(&dir, "short.pdb", "ATOM      1  N   ALA A   1\n");
        let good = two_atom_file(&dir, "good.pdb");

        let (result, output, errors) = run_batch(&[missing.clone(), short, good.clone()], true);
        let outcome = result.unwrap();

        assert!(!outcome.is_success());
        assert_eq!(outcome.reports.len(), 1);
        assert_eq!(outcome.failures.len(), 2);
        assert!(matches!(outcome.failures[0], AnalysisError::FileOpen { .. }));
        assert!(matches!(outcome.failures[1], AnalysisError::Record { .. }));
        assert!(output.starts_with(&format!("PDB file {}, 2 atoms were read", good.display())));

        let error_lines: Vec<&str> = errors.lines().collect();
        assert_eq!(error_lines.len(), 2);
        assert!(error_lines.iter().all(|line| line.starts_with("Error: ")));
        assert!(error_lines[0].contains(&missing.display().to_string()));
    }

    #[test]
    fn csv_report_contains_one_row_per_report() {
        let dir = tempfile::tempdir().unwrap();
        let first = two_atom_file(&dir, "first.pdb");
        let (result, _, _) = run_batch(&[first.clone()], false);
        let outcome = result.unwrap();

        let csv_path = dir.path().join("stats.csv");
        write_csv(&csv_path, &outcome.reports).unwrap();

        let content = fs::read_to_string(&csv_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "path,atoms,cg_x,cg_y,cg_z,rg,dmax");
        assert!(lines[1].ends_with(",2,1.5,2.0,0.0,2.5,5.0"));
    }

    #[test]
    fn csv_report_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_csv(&dir.path().join("no").join("stats.csv"), &[]);
        assert!(matches!(result, Err(CliError::Report { .. })));
    }

    #[test]
    fn successful_run_exits_with_zero() {
        let dir = tempfile::tempdir().unwrap();
        let file = two_atom_file(&dir, "ok.pdb");

        let (result, output, errors) = execute_with(&[file.to_str().unwrap()]);

        assert!(result.is_ok());
        assert_eq!(exit_code(&result), 0);
        assert!(output.starts_with("PDB file "));
        assert!(errors.is_empty());
    }

    #[test]
    fn failing_file_exits_with_one() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.pdb");

        let (result, output, _) = execute_with(&[missing.to_str().unwrap()]);

        assert!(matches!(
            result,
            Err(CliError::Analysis(AnalysisError::FileOpen { .. }))
        ));
        assert_eq!(exit_code(&result), 1);
        assert!(output.is_empty());
    }

    #[test]
    fn skipped_files_still_exit_with_one_and_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let good = two_atom_file(&dir, "good.pdb");
        let empty = write_file(&dir, "empty.pdb", "HEADER\nEND\n");
        let csv_path = dir.path().join("stats.csv");

        let (result, _, errors) = execute_with(&[
            "--keep-going",
            "--csv",
            csv_path.to_str().unwrap(),
            good.to_str().unwrap(),
            empty.to_str().unwrap(),
        ]);

        assert!(matches!(
            result,
            Err(CliError::BatchFailed {
                failed: 1,
                total: 2
            })
        ));
        assert_eq!(exit_code(&result), 1);
        assert_eq!(errors.lines().count(), 1);
        assert_eq!(fs::read_to_string(&csv_path).unwrap().lines().count(), 2);
    }

    #[test]
    fn invalid_configuration_exits_with_one() {
        let dir = tempfile::tempdir().unwrap();
        let file = two_atom_file(&dir, "ok.pdb");

        let (result, output, _) = execute_with(&["--precision", "13", file.to_str().unwrap()]);

        assert!(matches!(result, Err(CliError::Config(_))));
        assert_eq!(exit_code(&result), 1);
        assert!(output.is_empty());
    }
}

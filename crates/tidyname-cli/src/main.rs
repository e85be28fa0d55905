//! tidyname — standardize file and directory names in place.
//!
//! Reads one root path per line from standard input and renames every
//! entry under each root to its standardized form. Each rename prints the
//! resulting path on stdout; logs go to stderr.

mod input;

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tidyname_core::{Config, CoreError, Event, TreeWalker};

use crate::input::{parse_line, resolve_root};

#[derive(Parser)]
#[command(name = "tidyname")]
#[command(version)]
#[command(about = "Standardize file and directory names read from stdin, children first")]
struct Cli {
    /// TOML file overriding the built-in void words and naming rules.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log more (-v for renames, -vv for every visited entry).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Outcome of processing all input lines.
#[derive(Debug, Default, PartialEq, Eq)]
struct RunReport {
    roots: usize,
    renamed: usize,
    failed_roots: usize,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();
}

/// Writes `path` on its own line, byte for byte where the platform allows.
#[cfg(unix)]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(path.as_os_str().as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(not(unix))]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", path.display())?;
    out.flush()
}

/// Processes every root listed in `input`, printing renamed paths to `out`.
///
/// A root that fails (missing path, rename conflict, I/O error) is logged
/// and counted; the remaining roots are still processed. Only read errors
/// on `input` and write errors on `out` end the run early; a write error
/// also stops the current walk so no further renames go unreported.
fn run<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    walker: &TreeWalker,
    cwd: &Path,
) -> anyhow::Result<RunReport> {
    let mut report = RunReport::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = input
            .read_until(b'\n', &mut line)
            .context("failed to read root paths from stdin")?;
        if read == 0 {
            break;
        }
        let Some(raw) = parse_line(&line) else {
            continue;
        };
        let root = resolve_root(&raw, cwd);
        report.roots += 1;

        let mut write_error: Option<io::Error> = None;
        let result = walker.standardize_tree(&root, |event| {
            if let Event::Renamed { to, .. } = event {
                if let Err(e) = write_path(out, &to) {
                    write_error = Some(e);
                    return ControlFlow::Break(());
                }
            }
            ControlFlow::Continue(())
        });
        if let Some(e) = write_error {
            return Err(e).context("failed to write to stdout");
        }

        match result {
            Ok(summary) => {
                report.renamed += summary.renamed;
                tracing::info!(
                    "{}: {} visited, {} renamed, {} skipped, {} failed",
                    root.display(),
                    summary.visited,
                    summary.renamed,
                    summary.skipped,
                    summary.failed
                );
            }
            Err(CoreError::InvalidInputPath(path)) => {
                report.failed_roots += 1;
                tracing::warn!("skipping {}: no such file or directory", path.display());
            }
            Err(e) => {
                report.failed_roots += 1;
                tracing::error!("aborted {}: {e}", root.display());
            }
        }
    }

    Ok(report)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    let walker = TreeWalker::from_config(&config);
    let cwd = std::env::current_dir().context("failed to get current directory")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let report = run(stdin.lock(), &mut stdout.lock(), &walker, &cwd)?;

    tracing::info!(
        "{} roots, {} renamed, {} failed",
        report.roots,
        report.renamed,
        report.failed_roots
    );
    Ok(if report.failed_roots == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run_bytes(input: &[u8], cwd: &Path) -> (Vec<u8>, RunReport) {
        let mut out = Vec::new();
        let report = run(input, &mut out, &TreeWalker::default(), cwd).unwrap();
        (out, report)
    }

    fn run_lines(input: &str, cwd: &Path) -> (String, RunReport) {
        let (out, report) = run_bytes(input.as_bytes(), cwd);
        (String::from_utf8(out).unwrap(), report)
    }

    /// Accepts one line, then fails every write.
    struct FailingWriter {
        writes_left: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.writes_left == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            if buf.ends_with(b"\n") {
                self.writes_left -= 1;
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn prints_renamed_paths_children_first() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("Mes Photos");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("Été 2014.jpg"), "").unwrap();

        let (out, report) = run_lines(&format!("{}\n", dir.display()), tmp.path());

        let expected = format!(
            "{}\n{}\n",
            dir.join("Ete_2014.jpg").display(),
            tmp.path().join("Mes_Photos").display()
        );
        assert_eq!(out, expected);
        assert_eq!(
            report,
            RunReport {
                roots: 1,
                renamed: 2,
                failed_roots: 0
            }
        );
    }

    #[test]
    fn relative_roots_resolve_against_cwd() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("un essai.txt"), "").unwrap();

        let (out, _) = run_lines("un essai.txt  \n", tmp.path());

        assert_eq!(out, format!("{}\n", tmp.path().join("essai.txt").display()));
    }

    #[test]
    fn missing_root_is_skipped_and_next_root_processed() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a b"), "").unwrap();

        let (out, report) = run_lines("nope\n\na b\n", tmp.path());

        assert_eq!(out, format!("{}\n", tmp.path().join("a_b").display()));
        assert_eq!(report.roots, 2);
        assert_eq!(report.failed_roots, 1);
        assert_eq!(report.renamed, 1);
    }

    #[test]
    fn standard_tree_prints_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("deja_propre")).unwrap();

        let (out, report) = run_lines("deja_propre", tmp.path());

        assert!(out.is_empty());
        assert_eq!(report.roots, 1);
        assert_eq!(report.failed_roots, 0);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_parent_is_printed_verbatim() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join(OsStr::from_bytes(b"caf\xe9"));
        fs::create_dir(&parent).unwrap();
        fs::write(parent.join("a b"), "").unwrap();

        let mut line = parent.join("a b").into_os_string().into_vec();
        line.push(b'\n');
        let (out, report) = run_bytes(&line, tmp.path());

        let mut expected = parent.join("a_b").into_os_string().into_vec();
        expected.push(b'\n');
        assert_eq!(out, expected);
        assert_eq!(report.renamed, 1);
        assert!(parent.join("a_b").exists());
    }

    #[test]
    fn write_error_stops_the_walk() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("Ma Racine");
        fs::create_dir(&root).unwrap();
        for name in ["a b", "c d", "e f"] {
            fs::write(root.join(name), "").unwrap();
        }
        let mut out = FailingWriter { writes_left: 1 };

        let result = run("Ma Racine\n".as_bytes(), &mut out, &TreeWalker::default(), tmp.path());

        assert!(result.is_err());
        assert!(root.join("a_b").exists());
        assert!(root.join("c_d").exists());
        assert!(root.join("e f").exists());
        assert!(root.exists());
    }

    #[test]
    fn cli_parses_flags() {
        let cli =
            Cli::try_parse_from(["tidyname", "-vv", "--config", "/etc/tidyname.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/tidyname.toml")));
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["tidyname"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }
}

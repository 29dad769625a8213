// inflex-cli: shared utilities for CLI tools.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use inflex_core::{Record, RecordError};
use inflex_core::record::parse_records;
use inflex_rules::task::{Quantity, QuantityAverages, RunOutcome, Task, run_inflection, run_paradigm};
use inflex_rules::{InflectionModel, InflexError, LearnerOptions};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the shared-task data directory.
pub const DATA_PATH_ENV: &str = "INFLEX_DATA_PATH";

/// Data directory used when neither a flag nor the environment names one.
pub const DEFAULT_DATA_PATH: &str = "./../all/";

/// Error type for CLI file handling.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: RecordError,
    },
    #[error(transparent)]
    Inflex(#[from] InflexError),
}

/// Pick the data directory.
///
/// Search order:
/// 1. `explicit` argument (if provided)
/// 2. `INFLEX_DATA_PATH` environment variable
/// 3. `./../all/`
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    if let Ok(env_path) = std::env::var(DATA_PATH_ENV) {
        return PathBuf::from(env_path);
    }
    PathBuf::from(DEFAULT_DATA_PATH)
}

/// File naming of the shared-task data directory.
///
/// ```text
/// <root>/task<N>/<lang>-train-<quantity>
/// <root>/task1/<lang>-dev
/// <root>/task2/<lang>-covered-dev
/// <root>/task2/<lang>-uncovered-dev
/// <root>/task<N>/<lang>-<quantity>-out
/// ```
#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn task_dir(&self, task: Task) -> PathBuf {
        self.root.join(format!("task{}", task.number()))
    }

    pub fn train_file(&self, task: Task, lang: &str, quantity: Quantity) -> PathBuf {
        self.task_dir(task).join(format!("{lang}-train-{quantity}"))
    }

    pub fn dev_file(&self, lang: &str) -> PathBuf {
        self.task_dir(Task::Inflection).join(format!("{lang}-dev"))
    }

    pub fn covered_dev_file(&self, lang: &str) -> PathBuf {
        self.task_dir(Task::Paradigm).join(format!("{lang}-covered-dev"))
    }

    pub fn uncovered_dev_file(&self, lang: &str) -> PathBuf {
        self.task_dir(Task::Paradigm).join(format!("{lang}-uncovered-dev"))
    }

    pub fn output_file(&self, task: Task, lang: &str, quantity: Quantity) -> PathBuf {
        self.task_dir(task).join(format!("{lang}-{quantity}-out"))
    }

    /// Languages with at least one training file for `task`, sorted.
    pub fn languages(&self, task: Task) -> Result<Vec<String>, CliError> {
        let dir = self.task_dir(task);
        let entries = fs::read_dir(&dir).map_err(|source| CliError::Read {
            path: dir.clone(),
            source,
        })?;

        let mut langs = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|source| CliError::Read {
                path: dir.clone(),
                source,
            })?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if let Some((lang, _)) = name.split_once("-train") {
                langs.insert(lang.to_string());
            }
        }
        Ok(langs.into_iter().collect())
    }
}

/// Read a tab-separated corpus file.
pub fn read_records(path: &Path) -> Result<Vec<Record>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&text).map_err(|source| CliError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// Write records as `lemma \t form \t msd` lines.
pub fn write_records(path: &Path, records: &[Record]) -> Result<(), CliError> {
    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    for rec in records {
        writeln!(out, "{rec}").map_err(write_err)?;
    }
    out.flush().map_err(write_err)
}

/// Accuracy of one (language, quantity) run; `None` when nothing was scored.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub language: String,
    pub quantity: Quantity,
    pub accuracy: Option<f64>,
}

/// All runs of one task plus their per-quantity averages.
#[derive(Debug, Clone, Default)]
pub struct TaskSummary {
    pub runs: Vec<RunSummary>,
    pub averages: QuantityAverages,
}

/// Train and evaluate every (language, quantity) of `task` found under
/// `layout`. Missing training files are skipped. With `write_output`,
/// predictions go to the `<lang>-<quantity>-out` files.
pub fn run_shared_task(
    layout: &DataLayout,
    task: Task,
    options: &LearnerOptions,
    write_output: bool,
) -> Result<TaskSummary, CliError> {
    let mut summary = TaskSummary::default();

    for language in layout.languages(task)? {
        for quantity in Quantity::ALL {
            let train_path = layout.train_file(task, &language, quantity);
            if !train_path.is_file() {
                continue;
            }
            let train = read_records(&train_path)?;
            let model = InflectionModel::train(&train, options);
            let outcome = evaluate(layout, task, &language, &model)?;

            if write_output {
                write_records(
                    &layout.output_file(task, &language, quantity),
                    &outcome.predictions,
                )?;
            }

            let accuracy = outcome.accuracy();
            match accuracy {
                Some(acc) => summary.averages.add(quantity, acc),
                None => tracing::warn!(%language, %quantity, "no items were scored"),
            }
            tracing::info!(
                task = task.number(),
                %language,
                %quantity,
                correct = outcome.correct,
                guesses = outcome.guesses,
                "finished run"
            );
            summary.runs.push(RunSummary {
                language: language.clone(),
                quantity,
                accuracy,
            });
        }
    }
    Ok(summary)
}

fn evaluate(
    layout: &DataLayout,
    task: Task,
    language: &str,
    model: &InflectionModel,
) -> Result<RunOutcome, CliError> {
    match task {
        Task::Inflection => {
            let dev = read_records(&layout.dev_file(language))?;
            Ok(run_inflection(model, &dev))
        }
        Task::Paradigm => {
            let covered = read_records(&layout.covered_dev_file(language))?;
            let uncovered = read_records(&layout.uncovered_dev_file(language))?;
            Ok(run_paradigm(model, &covered, &uncovered)?)
        }
    }
}

/// Install a stderr `tracing` subscriber.
///
/// `level` takes precedence over `RUST_LOG`; the fallback is `warn`.
pub fn init_tracing(level: Option<&str>) {
    let filter = level
        .and_then(|l| EnvFilter::try_new(l).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir_wins() {
        let dir = resolve_data_dir(Some(Path::new("/data/conll")));
        assert_eq!(dir, PathBuf::from("/data/conll"));
    }

    #[test]
    fn layout_file_names() {
        let layout = DataLayout::new("/d");
        assert_eq!(
            layout.train_file(Task::Inflection, "finnish", Quantity::Medium),
            PathBuf::from("/d/task1/finnish-train-medium")
        );
        assert_eq!(layout.dev_file("finnish"), PathBuf::from("/d/task1/finnish-dev"));
        assert_eq!(
            layout.covered_dev_file("welsh"),
            PathBuf::from("/d/task2/welsh-covered-dev")
        );
        assert_eq!(
            layout.uncovered_dev_file("welsh"),
            PathBuf::from("/d/task2/welsh-uncovered-dev")
        );
        assert_eq!(
            layout.output_file(Task::Paradigm, "welsh", Quantity::Low),
            PathBuf::from("/d/task2/welsh-low-out")
        );
    }
}

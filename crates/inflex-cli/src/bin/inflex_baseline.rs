// inflex-baseline: Train affix rules and evaluate on dev data.
//
// For every task, language and data quantity found in the data directory,
// learns prefix/suffix rules from the training file, predicts the dev
// items and prints the accuracy, followed by per-quantity averages.
//
// Usage:
//   inflex-baseline [-o] [-p PATH] [-t TASK]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use inflex_cli::{DataLayout, run_shared_task};
use inflex_rules::task::{Quantity, Task};
use inflex_rules::{Direction, LearnerOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    Prefixing,
    Suffixing,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Prefixing => Direction::Prefixing,
            DirectionArg::Suffixing => Direction::Suffixing,
        }
    }
}

/// Baseline affix-rule learner for morphological reinflection.
///
/// The training and dev data are expected under PATH/task1/ and
/// PATH/task2/.
#[derive(Parser, Debug)]
#[command(name = "inflex-baseline", version)]
struct Args {
    /// Create output files with guesses (and don't just evaluate).
    #[arg(short = 'o', long)]
    output: bool,

    /// Data files path (default: $INFLEX_DATA_PATH or ./../all/).
    #[arg(short = 'p', long)]
    path: Option<PathBuf>,

    /// Run only this task (1 or 2). Both tasks run by default.
    #[arg(short = 't', long, value_parser = clap::value_parser!(u8).range(1..=2))]
    task: Option<u8>,

    /// Skip direction detection and treat every language this way.
    #[arg(long, value_enum)]
    direction: Option<DirectionArg>,

    /// Log filter, e.g. `info` or `inflex_rules=debug`.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();
    inflex_cli::init_tracing(args.log_level.as_deref());

    let layout = DataLayout::new(inflex_cli::resolve_data_dir(args.path.as_deref()));
    let options = LearnerOptions {
        direction: args.direction.map(Direction::from),
        ..LearnerOptions::default()
    };
    let tasks: Vec<Task> = match args.task.and_then(Task::from_number) {
        Some(task) => vec![task],
        None => Task::ALL.to_vec(),
    };

    for task in tasks {
        let summary = run_shared_task(&layout, task, &options, args.output)
            .unwrap_or_else(|e| inflex_cli::fatal(&e.to_string()));

        for run in &summary.runs {
            match run.accuracy {
                Some(acc) => println!(
                    "{}[task {}/{}]: {acc:.5}",
                    run.language,
                    task.number(),
                    run.quantity
                ),
                None => println!(
                    "{}[task {}/{}]: no data",
                    run.language,
                    task.number(),
                    run.quantity
                ),
            }
        }
        for quantity in Quantity::ALL {
            match summary.averages.average(quantity) {
                Some(avg) => println!("Average[{quantity}]: {avg}"),
                None => println!("Average[{quantity}]: no data"),
            }
        }
        println!("------------------------------------\n");
    }
}

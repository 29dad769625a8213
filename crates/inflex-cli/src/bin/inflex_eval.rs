// inflex-eval: Score guesses against gold data.
//
// Reports accuracy and mean Levenshtein distance; for task 2 also the
// paradigm accuracy (a lemma counts only if all of its slots are right).
// For task 2, slots already filled in the covered file (--gold-input) are
// not scored.
//
// Usage:
//   inflex-eval --gold FILE --guess FILE --task 1
//   inflex-eval --gold FILE --gold-input FILE --guess FILE --task 2 [--json]

use std::path::PathBuf;

use clap::Parser;
use inflex_cli::{CliError, read_records};
use inflex_rules::score::{FormScores, filled_slots, paradigm_accuracy, paradigms, score_forms};
use serde::Serialize;

/// Evaluate inflection guesses against a gold standard.
#[derive(Parser, Debug)]
#[command(name = "inflex-eval", version)]
struct Args {
    /// Gold standard (uncovered).
    #[arg(long)]
    gold: PathBuf,

    /// Gold input (covered); required for task 2.
    #[arg(long, required_if_eq("task", "2"))]
    gold_input: Option<PathBuf>,

    /// Model output.
    #[arg(long)]
    guess: PathBuf,

    /// Task 1 or task 2.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    task: u8,

    /// Print the scores as JSON.
    #[arg(long)]
    json: bool,

    /// Log filter, e.g. `debug`.
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Serialize)]
struct Report {
    #[serde(flatten)]
    forms: FormScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    paradigm: Option<f64>,
}

fn evaluate(args: &Args) -> Result<Report, CliError> {
    let gold = paradigms(&read_records(&args.gold)?);
    let guess = paradigms(&read_records(&args.guess)?);

    let ignore = match (&args.gold_input, args.task) {
        (Some(path), 2) => filled_slots(&read_records(path)?),
        _ => Default::default(),
    };
    let forms = score_forms(&gold, &guess, &ignore)?;
    tracing::debug!(items = forms.items, "scored forms");

    let paradigm = if args.task == 2 {
        Some(paradigm_accuracy(&gold, &guess)?)
    } else {
        None
    };

    Ok(Report { forms, paradigm })
}

fn main() {
    let args = Args::parse();
    inflex_cli::init_tracing(args.log_level.as_deref());

    let report = evaluate(&args).unwrap_or_else(|e| inflex_cli::fatal(&e.to_string()));

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => inflex_cli::fatal(&e.to_string()),
        }
        return;
    }

    println!("accuracy:\t{:.2}", report.forms.accuracy);
    println!("levenshtein:\t{:.2}", report.forms.mean_distance);
    if let Some(p) = report.paradigm {
        println!("paradigm:\t{p:.2}");
    }
}

//! End-to-end runs over a small fixture corpus.

use inflex_core::record::parse_records;
use inflex_core::Record;
use inflex_rules::score::{filled_slots, paradigm_accuracy, paradigms, score_forms};
use inflex_rules::task::{QuantityAverages, Quantity, run_inflection, run_paradigm};
use inflex_rules::{Direction, InflectionModel, LearnerOptions};

fn load(text: &str) -> Vec<Record> {
    parse_records(text).unwrap_or_else(|e| panic!("bad fixture: {e}"))
}

fn model() -> InflectionModel {
    let train = load(include_str!("data/toy-train-low"));
    InflectionModel::train(&train, &LearnerOptions::default())
}

#[test]
fn task1_dev_accuracy() {
    let model = model();
    assert_eq!(model.direction(), Direction::Suffixing);

    let dev = load(include_str!("data/toy-dev"));
    let outcome = run_inflection(&model, &dev);

    assert_eq!(outcome.accuracy(), Some(0.75));
    let forms: Vec<&str> = outcome.predictions.iter().map(|r| r.form.as_str()).collect();
    assert_eq!(forms, ["kicked", "hurried", "talks", "goed"]);
}

#[test]
fn task1_predictions_score_like_the_evaluator() {
    let dev = load(include_str!("data/toy-dev"));
    let outcome = run_inflection(&model(), &dev);

    let scores = score_forms(
        &paradigms(&dev),
        &paradigms(&outcome.predictions),
        &Default::default(),
    )
    .unwrap();
    assert_eq!(scores.accuracy, 75.0);
    // "goed" vs "went" is the only miss: 4 edits over 4 items.
    assert_eq!(scores.mean_distance, 1.0);
}

#[test]
fn task2_fills_blank_slots() {
    let covered = load(include_str!("data/toy-covered-dev"));
    let uncovered = load(include_str!("data/toy-uncovered-dev"));
    let outcome = run_paradigm(&model(), &covered, &uncovered).unwrap();

    assert_eq!((outcome.correct, outcome.guesses), (2, 2));
    assert_eq!(outcome.predictions, uncovered);

    let gold = paradigms(&uncovered);
    let guess = paradigms(&outcome.predictions);
    let scores = score_forms(&gold, &guess, &filled_slots(&covered)).unwrap();
    assert_eq!(scores.items, 2);
    assert_eq!(scores.accuracy, 100.0);
    assert_eq!(paradigm_accuracy(&gold, &guess).unwrap(), 100.0);
}

#[test]
fn runs_accumulate_into_quantity_averages() {
    let dev = load(include_str!("data/toy-dev"));
    let mut averages = QuantityAverages::new();
    if let Some(acc) = run_inflection(&model(), &dev).accuracy() {
        averages.add(Quantity::Low, acc);
    }
    assert_eq!(averages.average(Quantity::Low), Some(0.75));
    assert_eq!(averages.average(Quantity::High), None);
}

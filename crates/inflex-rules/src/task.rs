// Shared-task runners
//
// Task 1 inflects isolated (lemma, msd) pairs. Task 2 fills in the blank
// slots of partially given paradigms. Both count exact matches against
// gold forms; aggregation over runs goes through `QuantityAverages`.

use std::fmt;
use std::str::FromStr;

use inflex_core::Record;

use crate::InflexError;
use crate::model::InflectionModel;

/// Training-set size condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Low,
    Medium,
    High,
}

impl Quantity {
    pub const ALL: [Quantity; 3] = [Quantity::Low, Quantity::Medium, Quantity::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Quantity::Low => "low",
            Quantity::Medium => "medium",
            Quantity::High => "high",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quantity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Quantity::Low),
            "medium" => Ok(Quantity::Medium),
            "high" => Ok(Quantity::High),
            other => Err(format!("unknown data quantity: {other}")),
        }
    }
}

/// Which shared task a run belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Inflect a lemma for a single MSD.
    Inflection,
    /// Complete a partially given paradigm.
    Paradigm,
}

impl Task {
    pub const ALL: [Task; 2] = [Task::Inflection, Task::Paradigm];

    pub fn number(self) -> u8 {
        match self {
            Task::Inflection => 1,
            Task::Paradigm => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Task::Inflection),
            2 => Some(Task::Paradigm),
            _ => None,
        }
    }
}

/// Result of running a model over one evaluation set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub correct: usize,
    pub guesses: usize,
    /// One line per input record: `lemma \t form \t msd`.
    pub predictions: Vec<Record>,
}

impl RunOutcome {
    /// Fraction of exact matches, `None` when nothing was guessed.
    pub fn accuracy(&self) -> Option<f64> {
        (self.guesses > 0).then(|| self.correct as f64 / self.guesses as f64)
    }
}

/// Predict every `(lemma, gold form, msd)` item.
pub fn run_inflection(model: &InflectionModel, dev: &[Record]) -> RunOutcome {
    let mut outcome = RunOutcome::default();
    for rec in dev {
        let predicted = model.inflect(&rec.lemma, &rec.msd);
        if predicted == rec.form {
            outcome.correct += 1;
        }
        outcome.guesses += 1;
        outcome
            .predictions
            .push(Record::new(rec.lemma.as_str(), predicted, rec.msd.as_str()));
    }
    outcome
}

/// Fill the blank slots of `covered`, scoring them against `uncovered`.
///
/// The two streams must list the same (lemma, msd) items in the same
/// order. Slots already filled in `covered` are passed through unscored.
pub fn run_paradigm(
    model: &InflectionModel,
    covered: &[Record],
    uncovered: &[Record],
) -> Result<RunOutcome, InflexError> {
    if covered.len() != uncovered.len() {
        return Err(InflexError::StreamLengthMismatch {
            covered: covered.len(),
            uncovered: uncovered.len(),
        });
    }

    let mut outcome = RunOutcome::default();
    for (i, (given, gold)) in covered.iter().zip(uncovered).enumerate() {
        if given.lemma != gold.lemma || given.msd != gold.msd {
            return Err(InflexError::StreamRecordMismatch {
                line: i + 1,
                covered: given.to_string(),
                uncovered: gold.to_string(),
            });
        }

        let form = if given.is_blank() {
            let predicted = model.inflect(&given.lemma, &given.msd);
            if predicted == gold.form {
                outcome.correct += 1;
            }
            outcome.guesses += 1;
            predicted
        } else {
            given.form.clone()
        };
        outcome
            .predictions
            .push(Record::new(given.lemma.as_str(), form, given.msd.as_str()));
    }
    Ok(outcome)
}

/// Running per-quantity accuracy sums, combined by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuantityAverages {
    sums: [f64; 3],
    runs: [usize; 3],
}

impl QuantityAverages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the accuracy of one run.
    pub fn add(&mut self, quantity: Quantity, accuracy: f64) {
        self.sums[quantity.index()] += accuracy;
        self.runs[quantity.index()] += 1;
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: &QuantityAverages) {
        for i in 0..3 {
            self.sums[i] += other.sums[i];
            self.runs[i] += other.runs[i];
        }
    }

    pub fn runs(&self, quantity: Quantity) -> usize {
        self.runs[quantity.index()]
    }

    /// Mean accuracy for `quantity`, `None` if no run contributed.
    pub fn average(&self, quantity: Quantity) -> Option<f64> {
        let runs = self.runs[quantity.index()];
        (runs > 0).then(|| self.sums[quantity.index()] / runs as f64)
    }
}

// Scoring predictions against gold data

use std::hash::{Hash, Hasher};

use hashbrown::{Equivalent, HashMap, HashSet};
use inflex_align::distance;
use inflex_core::Record;
use serde::Serialize;

use crate::InflexError;

/// `lemma -> msd -> form`.
pub type Paradigms = HashMap<String, HashMap<String, String>>;

/// Group records by lemma and MSD. A later record for the same slot
/// replaces an earlier one.
pub fn paradigms<'a, I>(records: I) -> Paradigms
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut out = Paradigms::new();
    for rec in records {
        out.entry(rec.lemma.clone())
            .or_default()
            .insert(rec.msd.clone(), rec.form.clone());
    }
    out
}

/// The `(lemma, msd)` slots that are already filled in a covered input.
pub fn filled_slots<'a, I>(covered: I) -> HashSet<(String, String)>
where
    I: IntoIterator<Item = &'a Record>,
{
    covered
        .into_iter()
        .filter(|rec| !rec.is_blank())
        .map(|rec| (rec.lemma.clone(), rec.msd.clone()))
        .collect()
}

/// Borrowed `(lemma, msd)` lookup key, hashed like the owned tuple.
struct SlotKey<'a>(&'a str, &'a str);

impl Hash for SlotKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
        self.1.hash(state);
    }
}

impl Equivalent<(String, String)> for SlotKey<'_> {
    fn equivalent(&self, key: &(String, String)) -> bool {
        self.0 == key.0 && self.1 == key.1
    }
}

/// Form-level scores, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormScores {
    /// Percentage of exact matches.
    pub accuracy: f64,
    /// Mean edit distance between gold and guess.
    #[serde(rename = "levenshtein")]
    pub mean_distance: f64,
    /// Number of scored slots.
    pub items: usize,
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn guess_for<'g>(guess: &'g Paradigms, lemma: &str, msd: &str) -> &'g str {
    guess
        .get(lemma)
        .and_then(|slots| slots.get(msd))
        .map_or("", String::as_str)
}

/// Score every gold slot not listed in `ignore`. A slot missing from
/// `guess` is scored against the empty string.
pub fn score_forms(
    gold: &Paradigms,
    guess: &Paradigms,
    ignore: &HashSet<(String, String)>,
) -> Result<FormScores, InflexError> {
    let mut correct = 0usize;
    let mut dist = 0usize;
    let mut total = 0usize;

    for (lemma, slots) in gold {
        for (msd, gold_form) in slots {
            if ignore.contains(&SlotKey(lemma, msd)) {
                continue;
            }
            let guessed = guess_for(guess, lemma, msd);
            if gold_form == guessed {
                correct += 1;
            }
            dist += distance(gold_form, guessed);
            total += 1;
        }
    }

    if total == 0 {
        return Err(InflexError::NoData);
    }
    Ok(FormScores {
        accuracy: round2(correct as f64 / total as f64 * 100.0),
        mean_distance: round2(dist as f64 / total as f64),
        items: total,
    })
}

/// Percentage of lemmas whose every gold slot is guessed exactly.
pub fn paradigm_accuracy(gold: &Paradigms, guess: &Paradigms) -> Result<f64, InflexError> {
    if gold.is_empty() {
        return Err(InflexError::NoData);
    }
    let correct = gold
        .iter()
        .filter(|(lemma, slots)| {
            slots
                .iter()
                .all(|(msd, form)| form == guess_for(guess, lemma, msd))
        })
        .count();
    Ok(round2(correct as f64 / gold.len() as f64 * 100.0))
}

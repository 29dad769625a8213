// InflectionModel: training and prediction entry point
//
// A model is built once from one training set and is read-only
// afterwards. Models share no state, so independent training sets can be
// processed on separate threads.

use inflex_align::{EditAligner, EditCosts};
use inflex_core::Record;

use crate::apply::apply;
use crate::bias::{Direction, detect_direction};
use crate::extract::extract_from_words;
use crate::table::RuleTable;

/// Options controlling rule learning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LearnerOptions {
    /// Costs used by the exact aligner during rule extraction.
    pub costs: EditCosts,
    /// Force a direction instead of detecting it from the training set.
    pub direction: Option<Direction>,
}

/// Learned prefix and suffix rule tables for one training set.
#[derive(Debug, Clone, Default)]
pub struct InflectionModel {
    direction: Direction,
    prefix_rules: RuleTable,
    suffix_rules: RuleTable,
    examples: usize,
}

impl InflectionModel {
    /// Learn rules from `(lemma, form, msd)` examples.
    pub fn train(records: &[Record], options: &LearnerOptions) -> Self {
        let direction = options
            .direction
            .unwrap_or_else(|| detect_direction(records));
        let aligner = EditAligner::new(options.costs);

        let mut model = Self {
            direction,
            ..Self::default()
        };
        for rec in records {
            model.learn_pair(&aligner, rec);
        }

        tracing::debug!(
            examples = model.examples,
            ?direction,
            prefix_rules = model.prefix_rules.len(),
            suffix_rules = model.suffix_rules.len(),
            msds = model.suffix_rules.msd_count(),
            "trained inflection model"
        );
        model
    }

    fn learn_pair(&mut self, aligner: &EditAligner, rec: &Record) {
        let lemma = self.direction.orient(&rec.lemma);
        let form = self.direction.orient(&rec.form);
        let rules = extract_from_words(aligner, &lemma, &form);
        self.prefix_rules.observe(&rec.msd, rules.prefix);
        self.suffix_rules.observe(&rec.msd, rules.suffix);
        self.examples += 1;
    }

    /// Predict the inflected form of `lemma` for `msd`.
    ///
    /// Never fails: an MSD without learned rules yields the lemma itself.
    pub fn inflect(&self, lemma: &str, msd: &str) -> String {
        let oriented = self.direction.orient(lemma);
        let predicted = apply(&oriented, msd, &self.prefix_rules, &self.suffix_rules);
        self.direction.orient(&predicted)
    }

    /// Whether any rule was learned for `msd`.
    pub fn knows_msd(&self, msd: &str) -> bool {
        self.prefix_rules.contains_msd(msd) || self.suffix_rules.contains_msd(msd)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn prefix_rules(&self) -> &RuleTable {
        &self.prefix_rules
    }

    pub fn suffix_rules(&self) -> &RuleTable {
        &self.suffix_rules
    }

    /// Number of training examples seen.
    pub fn examples(&self) -> usize {
        self.examples
    }
}

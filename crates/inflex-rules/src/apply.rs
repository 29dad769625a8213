// Best-rule selection and application

use std::cmp::Ordering;

use hashbrown::HashMap;
use inflex_core::symbol::{self, Symbol};

use crate::rule::Rule;
use crate::table::RuleTable;

/// Inflect `lemma` for `msd` with the learned rule tables.
///
/// The working string is `START + lemma + END`. The suffix step runs
/// first, then the prefix step on its result; each step rewrites the
/// first occurrence of the chosen rule's input. An MSD unknown to both
/// tables returns the lemma unchanged, as does a step with no applicable
/// rule.
pub fn apply(lemma: &str, msd: &str, prefix_table: &RuleTable, suffix_table: &RuleTable) -> String {
    let suffix_rules = suffix_table.rules(msd);
    let prefix_rules = prefix_table.rules(msd);
    if suffix_rules.is_none() && prefix_rules.is_none() {
        return lemma.to_string();
    }

    let mut word = symbol::marked(lemma);

    if let Some(rule) = suffix_rules.and_then(|rules| best_suffix_rule(rules, &word)) {
        rule.apply_first(&mut word);
    }
    if let Some(rule) = prefix_rules.and_then(|rules| best_prefix_rule(rules, &word)) {
        rule.apply_first(&mut word);
    }

    symbol::to_word(&word)
}

/// Longest input wins, then the more frequent rule, then the longer output.
fn suffix_preference(a: (&Rule, u32), b: (&Rule, u32)) -> Ordering {
    a.0.input()
        .len()
        .cmp(&b.0.input().len())
        .then(a.1.cmp(&b.1))
        .then(a.0.output().len().cmp(&b.0.output().len()))
        .then_with(|| b.0.cmp(a.0))
}

/// Only frequency counts for prefix rules.
fn prefix_preference(a: (&Rule, u32), b: (&Rule, u32)) -> Ordering {
    a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0))
}

fn best_rule<'t>(
    rules: &'t HashMap<Rule, u32>,
    word: &[Symbol],
    preference: fn((&Rule, u32), (&Rule, u32)) -> Ordering,
) -> Option<&'t Rule> {
    rules
        .iter()
        .filter(|(rule, _)| rule.find_in(word).is_some())
        .max_by(|a, b| preference((a.0, *a.1), (b.0, *b.1)))
        .map(|(rule, _)| rule)
}

/// The suffix rule that would be applied to `word`, if any.
pub fn best_suffix_rule<'t>(rules: &'t HashMap<Rule, u32>, word: &[Symbol]) -> Option<&'t Rule> {
    best_rule(rules, word, suffix_preference)
}

/// The prefix rule that would be applied to `word`, if any.
pub fn best_prefix_rule<'t>(rules: &'t HashMap<Rule, u32>, word: &[Symbol]) -> Option<&'t Rule> {
    best_rule(rules, word, prefix_preference)
}

// Per-MSD rule occurrence counts

use hashbrown::HashMap;

use crate::rule::Rule;

/// Occurrence counts of rules, grouped by MSD.
///
/// An MSD appears only once at least one rule has been observed for it.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    by_msd: HashMap<String, HashMap<Rule, u32>>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of each rule under `msd`.
    pub fn observe<I>(&mut self, msd: &str, rules: I)
    where
        I: IntoIterator<Item = Rule>,
    {
        let mut rules = rules.into_iter().peekable();
        if rules.peek().is_none() {
            return;
        }
        let counts = self.by_msd.entry(msd.to_owned()).or_default();
        for rule in rules {
            *counts.entry(rule).or_insert(0) += 1;
        }
    }

    /// All rules seen for `msd` with their counts.
    pub fn rules(&self, msd: &str) -> Option<&HashMap<Rule, u32>> {
        self.by_msd.get(msd)
    }

    pub fn contains_msd(&self, msd: &str) -> bool {
        self.by_msd.contains_key(msd)
    }

    /// Occurrence count of `rule` under `msd` (0 if never seen).
    pub fn count(&self, msd: &str, rule: &Rule) -> u32 {
        self.rules(msd)
            .and_then(|rules| rules.get(rule))
            .copied()
            .unwrap_or(0)
    }

    /// Number of MSDs with at least one rule.
    pub fn msd_count(&self) -> usize {
        self.by_msd.len()
    }

    /// Number of distinct (MSD, rule) entries.
    pub fn len(&self) -> usize {
        self.by_msd.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_msd.is_empty()
    }
}

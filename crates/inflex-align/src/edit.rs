// Exact weighted edit-distance alignment

use inflex_core::symbol::{Symbol, symbols};

use crate::{Aligner, Alignment};

/// Two costs closer than this are treated as equal when picking a step.
const TIE_EPSILON: f64 = 1e-9;

/// Per-operation edit costs.
///
/// The default substitution cost is slightly above 1.0, so that a
/// deletion + insertion pair at a word edge is preferred over a
/// substitution inside the word whenever the totals would otherwise tie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditCosts {
    pub insertion: f64,
    pub deletion: f64,
    pub substitution: f64,
}

impl EditCosts {
    /// Plain Levenshtein costs.
    pub const UNIT: Self = Self {
        insertion: 1.0,
        deletion: 1.0,
        substitution: 1.0,
    };
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            insertion: 1.0,
            deletion: 1.0,
            substitution: 1.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Match or substitute `s[i]` with `t[j]`.
    Pair,
    /// Insert `t[j]` (gap on the upper side).
    Insert,
    /// Delete `s[i]` (gap on the lower side).
    Delete,
}

/// Minimum-cost aligner under configurable edit costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditAligner {
    costs: EditCosts,
}

impl EditAligner {
    pub fn new(costs: EditCosts) -> Self {
        Self { costs }
    }

    /// Align and also return the total cost of the alignment.
    pub fn align_with_cost(&self, source: &str, target: &str) -> (Alignment, f64) {
        edit_align(&symbols(source), &symbols(target), self.costs)
    }
}

impl Aligner for EditAligner {
    fn align(&self, source: &str, target: &str) -> Alignment {
        self.align_with_cost(source, target).0
    }
}

/// Cost table indexed by the start of the remaining suffixes of `s` and `t`.
///
/// `cost[i][j]` is the cheapest way to align `s[i..]` with `t[j..]`, and
/// `step[i][j]` the first operation of that alignment. Filling the table
/// from the bottom-right corner gives the same values as a memoized
/// recursion over (remaining `s`, remaining `t`), without the recursion.
fn edit_align(s: &[Symbol], t: &[Symbol], costs: EditCosts) -> (Alignment, f64) {
    let (m, n) = (s.len(), t.len());
    let width = n + 1;
    let at = |i: usize, j: usize| i * width + j;

    let mut cost = vec![0.0f64; (m + 1) * width];
    let mut step = vec![Step::Pair; (m + 1) * width];

    for i in (0..=m).rev() {
        for j in (0..=n).rev() {
            if i == m {
                cost[at(i, j)] = (n - j) as f64 * costs.insertion;
                step[at(i, j)] = Step::Insert;
                continue;
            }
            if j == n {
                cost[at(i, j)] = (m - i) as f64 * costs.deletion;
                step[at(i, j)] = Step::Delete;
                continue;
            }

            // Enumeration order decides ties: pair, then insert, then delete.
            let pair_cost = if s[i] == t[j] { 0.0 } else { costs.substitution };
            let mut best = (pair_cost + cost[at(i + 1, j + 1)], Step::Pair);

            let insert = costs.insertion + cost[at(i, j + 1)];
            if insert < best.0 - TIE_EPSILON {
                best = (insert, Step::Insert);
            }
            let delete = costs.deletion + cost[at(i + 1, j)];
            if delete < best.0 - TIE_EPSILON {
                best = (delete, Step::Delete);
            }

            cost[at(i, j)] = best.0;
            step[at(i, j)] = best.1;
        }
    }

    let mut upper = Vec::with_capacity(m + n);
    let mut lower = Vec::with_capacity(m + n);
    let (mut i, mut j) = (0, 0);
    while i < m || j < n {
        match step[at(i, j)] {
            Step::Pair => {
                upper.push(s[i]);
                lower.push(t[j]);
                i += 1;
                j += 1;
            }
            Step::Insert => {
                upper.push(Symbol::Gap);
                lower.push(t[j]);
                j += 1;
            }
            Step::Delete => {
                upper.push(s[i]);
                lower.push(Symbol::Gap);
                i += 1;
            }
        }
    }

    (Alignment::new(upper, lower), cost[at(0, 0)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned(s: &str, t: &str) -> (String, String, f64) {
        let (al, cost) = EditAligner::default().align_with_cost(s, t);
        let (u, l) = al.render();
        (u, l, cost)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn suffix_insertion() {
        let (u, l, cost) = aligned("walk", "walked");
        assert_eq!((u.as_str(), l.as_str()), ("walk__", "walked"));
        assert!(approx(cost, 2.0));
    }

    #[test]
    fn substitution_preferred_on_exact_tie_with_insert() {
        // Both "pair first" and "insert first" reach 4.2; pair wins.
        let (u, l, cost) = aligned("go", "went");
        assert_eq!((u.as_str(), l.as_str()), ("go__", "went"));
        assert!(approx(cost, 4.2));
    }

    #[test]
    fn insert_preferred_over_delete_on_tie() {
        let (u, l, cost) = aligned("ab", "ba");
        assert_eq!((u.as_str(), l.as_str()), ("_ab", "ba_"));
        assert!(approx(cost, 2.0));
    }

    #[test]
    fn single_substitution_beats_delete_plus_insert() {
        let (u, l, cost) = aligned("sing", "sang");
        assert_eq!((u.as_str(), l.as_str()), ("sing", "sang"));
        assert!(approx(cost, 1.1));
    }

    #[test]
    fn unit_costs_give_levenshtein_distance() {
        let aligner = EditAligner::new(EditCosts::UNIT);
        let (_, cost) = aligner.align_with_cost("kitten", "sitting");
        assert!(approx(cost, 3.0));
    }

    #[test]
    fn empty_sides_degrade_to_pure_insertion_or_deletion() {
        let (u, l, cost) = aligned("", "abc");
        assert_eq!((u.as_str(), l.as_str()), ("___", "abc"));
        assert!(approx(cost, 3.0));

        let (u, l, cost) = aligned("abc", "");
        assert_eq!((u.as_str(), l.as_str()), ("abc", "___"));
        assert!(approx(cost, 3.0));

        let (u, l, cost) = aligned("", "");
        assert!(u.is_empty() && l.is_empty());
        assert!(approx(cost, 0.0));
    }

    #[test]
    fn alignment_invariants_hold() {
        let aligner = EditAligner::default();
        let pairs = [
            ("kirja", "kirjoissa"),
            ("machen", "gemacht"),
            ("ring", "rang"),
            ("hablar", "hablábamos"),
            ("x", "yyy"),
        ];
        for (s, t) in pairs {
            let (al, cost) = aligner.align_with_cost(s, t);
            assert_eq!(al.upper().len(), al.lower().len());
            assert!(al.len() >= s.chars().count().max(t.chars().count()));
            assert_eq!(al.upper_word(), s);
            assert_eq!(al.lower_word(), t);
            assert!(cost <= (s.chars().count() + t.chars().count()) as f64 + 1e-9);
            assert!(al.pairs().all(|(u, l)| !(u.is_gap() && l.is_gap())));
        }
    }

    #[test]
    fn repeated_calls_are_independent() {
        let aligner = EditAligner::default();
        let first = aligner.align("abc", "abd");
        aligner.align("zzz", "abd");
        assert_eq!(aligner.align("abc", "abd"), first);
    }
}

// Heuristic alignment: slide one word against the other, keep the
// placement with the smallest Hamming distance.

use inflex_core::symbol::{Symbol, symbols};

use crate::{Aligner, Alignment};

/// Fast heuristic aligner.
///
/// Every candidate places both words inside a frame of length
/// `|s| + |t|` padded with gaps, so only whole-word shifts are explored
/// (no internal gaps). Used to estimate whether a language is mostly
/// prefixing or suffixing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingAligner;

impl Aligner for HammingAligner {
    fn align(&self, source: &str, target: &str) -> Alignment {
        hamming_align(source, target)
    }
}

/// Count positions at which two equal-length sequences differ.
///
/// A gap facing a gap is a match; a gap facing a character is a mismatch.
fn hamming(a: &[Symbol], b: &[Symbol]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

fn padded(lead: usize, word: &[Symbol], trail: usize) -> Vec<Symbol> {
    let mut out = Vec::with_capacity(lead + word.len() + trail);
    out.resize(lead, Symbol::Gap);
    out.extend_from_slice(word);
    out.resize(lead + word.len() + trail, Symbol::Gap);
    out
}

/// Align two words by the minimum-Hamming shift.
///
/// Candidates are enumerated in a fixed order: first `s` slides right over
/// a right-anchored `t` (`upad = 0..=|t|`), then `t` slides left under a
/// right-anchored `s` (`lpad = 0..=|s|`). The first candidate reaching the
/// minimum score wins. Positions where both sides are gaps are then
/// dropped.
pub fn hamming_align(source: &str, target: &str) -> Alignment {
    let s = symbols(source);
    let t = symbols(target);
    let (m, n) = (s.len(), t.len());

    let mut best_score = m + n + 1;
    let mut best = (Vec::new(), Vec::new());

    for upad in 0..=n {
        let upper = padded(upad, &s, n - upad);
        let lower = padded(m, &t, 0);
        let score = hamming(&upper, &lower);
        if score < best_score {
            best_score = score;
            best = (upper, lower);
        }
    }

    for lpad in 0..=m {
        let upper = padded(n, &s, 0);
        let lower = padded(m - lpad, &t, lpad);
        let score = hamming(&upper, &lower);
        if score < best_score {
            best_score = score;
            best = (upper, lower);
        }
    }

    let (upper, lower): (Vec<Symbol>, Vec<Symbol>) = best
        .0
        .into_iter()
        .zip(best.1)
        .filter(|(u, l)| !(u.is_gap() && l.is_gap()))
        .unzip();

    Alignment::new(upper, lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(s: &str, t: &str) -> (String, String) {
        hamming_align(s, t).render()
    }

    #[test]
    fn suffixation_leaves_trailing_gaps() {
        assert_eq!(
            rendered("walk", "walked"),
            ("walk__".to_string(), "walked".to_string())
        );
    }

    #[test]
    fn prefixation_leaves_leading_gaps() {
        assert_eq!(
            rendered("spiel", "gespiel"),
            ("__spiel".to_string(), "gespiel".to_string())
        );
    }

    #[test]
    fn deletion_of_final_material() {
        assert_eq!(
            rendered("walked", "walk"),
            ("walked".to_string(), "walk__".to_string())
        );
    }

    #[test]
    fn identical_words_align_without_gaps() {
        assert_eq!(rendered("talo", "talo"), ("talo".to_string(), "talo".to_string()));
    }

    #[test]
    fn empty_inputs_degrade_to_pure_insertion_or_deletion() {
        assert_eq!(rendered("", "ab"), ("__".to_string(), "ab".to_string()));
        assert_eq!(rendered("ab", ""), ("ab".to_string(), "__".to_string()));
        assert!(hamming_align("", "").is_empty());
    }

    #[test]
    fn first_minimum_wins_ties() {
        // Several shifts score 4 here; the earliest keeps the gaps at the end.
        assert_eq!(rendered("go", "went"), ("go__".to_string(), "went".to_string()));
        assert_eq!(rendered("ab", "ba"), ("ab_".to_string(), "_ba".to_string()));
    }

    #[test]
    fn alignment_reconstructs_both_words() {
        for (s, t) in [("sing", "sang"), ("kirja", "kirjoissa"), ("go", "went"), ("x", "")] {
            let al = hamming_align(s, t);
            assert_eq!(al.upper_word(), s);
            assert_eq!(al.lower_word(), t);
            assert!(al.len() >= s.chars().count().max(t.chars().count()));
        }
    }

    #[test]
    fn score_never_exceeds_delete_all_insert_all_baseline() {
        for (s, t) in [("abc", "xyz"), ("lemma", "forms"), ("a", "bcd")] {
            let al = hamming_align(s, t);
            let score = al.pairs().filter(|(u, l)| u != l).count();
            assert!(score <= s.len() + t.len());
        }
    }
}

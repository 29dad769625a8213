// Rule extraction from one (lemma, form) example

use hashbrown::HashSet;
use inflex_align::{Aligner, EditAligner, SegmentedPair};
use inflex_core::symbol::Symbol;

use crate::rule::Rule;

/// Prefix and suffix rules derived from a single example.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedRules {
    pub prefix: HashSet<Rule>,
    pub suffix: HashSet<Rule>,
}

/// Derive both rule families from a segmented pair.
pub fn extract(pair: &SegmentedPair) -> ExtractedRules {
    ExtractedRules {
        prefix: prefix_rules(pair),
        suffix: suffix_rules(pair),
    }
}

/// Align `lemma` with `form`, segment, and extract.
pub fn extract_from_words(aligner: &EditAligner, lemma: &str, form: &str) -> ExtractedRules {
    extract(&SegmentedPair::split(&aligner.align(lemma, form)))
}

/// Suffix rules: every tail of `stem + suffix + END` on the lemma side,
/// paired with the tail starting at the same aligned position on the form
/// side. Runs from the whole stem down to the bare end marker.
pub fn suffix_rules(pair: &SegmentedPair) -> HashSet<Rule> {
    let mut input = Vec::with_capacity(pair.lemma.stem.len() + pair.lemma.suffix.len() + 1);
    input.extend_from_slice(&pair.lemma.stem);
    input.extend_from_slice(&pair.lemma.suffix);
    input.push(Symbol::End);

    let mut output = Vec::with_capacity(pair.form.stem.len() + pair.form.suffix.len() + 1);
    output.extend_from_slice(&pair.form.stem);
    output.extend_from_slice(&pair.form.suffix);
    output.push(Symbol::End);

    (0..input.len().min(output.len()))
        .map(|i| Rule::new(&input[i..], &output[i..]))
        .collect()
}

/// Prefix rules: `START + prefix` on each side, extended by the first
/// `0..|stem|` aligned symbols of the form-side stem (shared context).
pub fn prefix_rules(pair: &SegmentedPair) -> HashSet<Rule> {
    let stem = &pair.form.stem;
    (0..stem.len())
        .map(|i| {
            let mut input = Vec::with_capacity(1 + pair.lemma.prefix.len() + i);
            input.push(Symbol::Start);
            input.extend_from_slice(&pair.lemma.prefix);
            input.extend_from_slice(&stem[..i]);

            let mut output = Vec::with_capacity(1 + pair.form.prefix.len() + i);
            output.push(Symbol::Start);
            output.extend_from_slice(&pair.form.prefix);
            output.extend_from_slice(&stem[..i]);

            Rule::new(&input, &output)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_of(lemma: &str, form: &str) -> ExtractedRules {
        extract_from_words(&EditAligner::default(), lemma, form)
    }

    fn set(rules: &[(&str, &str)]) -> HashSet<Rule> {
        rules
            .iter()
            .map(|(i, o)| Rule::from_patterns(i, o))
            .collect()
    }

    #[test]
    fn suffixing_example_yields_nested_suffix_rules() {
        let rules = rules_of("walk", "walked");
        assert_eq!(
            rules.suffix,
            set(&[
                ("walk>", "walked>"),
                ("alk>", "alked>"),
                ("lk>", "lked>"),
                ("k>", "ked>"),
                (">", "ed>"),
                (">", "d>"),
                (">", ">"),
            ])
        );
    }

    #[test]
    fn suffixing_example_yields_identity_prefix_rules() {
        let rules = rules_of("walk", "walked");
        assert_eq!(
            rules.prefix,
            set(&[("<", "<"), ("<w", "<w"), ("<wa", "<wa"), ("<wal", "<wal")])
        );
        assert!(rules.prefix.iter().all(Rule::is_identity));
    }

    #[test]
    fn circumfixing_example_yields_both_families() {
        let rules = rules_of("spiel", "gespielt");
        assert!(rules.prefix.contains(&Rule::from_patterns("<", "<ge")));
        assert!(rules.prefix.contains(&Rule::from_patterns("<spie", "<gespie")));
        assert!(!rules.prefix.contains(&Rule::from_patterns("<spiel", "<gespiel")));
        assert!(rules.suffix.contains(&Rule::from_patterns("l>", "lt>")));
        assert!(rules.suffix.contains(&Rule::from_patterns(">", "t>")));
    }

    #[test]
    fn every_aligned_tail_of_a_suffix_rule_is_extracted() {
        let pair = SegmentedPair::split(&EditAligner::default().align("kirja", "kirjoissa"));
        let rules = suffix_rules(&pair);

        let mut input: Vec<Symbol> = pair.lemma.stem.clone();
        input.extend(&pair.lemma.suffix);
        input.push(Symbol::End);
        let mut output: Vec<Symbol> = pair.form.stem.clone();
        output.extend(&pair.form.suffix);
        output.push(Symbol::End);

        for i in 0..input.len() {
            assert!(rules.contains(&Rule::new(&input[i..], &output[i..])));
        }
        assert!(rules.iter().all(|r| r.input().last() == Some(&Symbol::End)));
        assert!(rules.iter().all(|r| !r.input().iter().any(|s| s.is_gap())));
    }

    #[test]
    fn empty_lemma_learns_the_whole_form_as_suffix() {
        let rules = rules_of("", "xy");
        assert!(rules.prefix.is_empty());
        assert_eq!(rules.suffix, set(&[(">", "xy>"), (">", "y>"), (">", ">")]));
    }

    #[test]
    fn empty_form_learns_deletion_of_the_whole_lemma() {
        let rules = rules_of("abc", "");
        assert!(rules.prefix.is_empty());
        assert_eq!(
            rules.suffix,
            set(&[("abc>", ">"), ("bc>", ">"), ("c>", ">"), (">", ">")])
        );
    }
}

//! Surface-form analysis: given a word, returns every human-readable
//! analysis the compiled analyzer accepts for it.
//!
//! Grounded on `turkish_morphology/analyze.py`. The per-word input
//! transducer is built at Unicode-character granularity through the
//! analyzer's shared symbol table rather than as a raw UTF-8 byte chain —
//! see DESIGN.md's "Resolved ambiguity — surface tape granularity" entry.

use crate::analyzer::Analyzer;
use crate::fst::{extract_parses, Arc, Fst};

fn input_fst(word: &str, analyzer: &Analyzer) -> Option<Fst> {
    let mut fst = Fst::new();
    let mut from = fst.start;

    for ch in word.chars() {
        let label = analyzer.symbols.index_of(&ch.to_string())?;
        let to = fst.add_state();
        fst.add_arc(
            from,
            Arc {
                ilabel: label,
                olabel: label,
                nextstate: to,
            },
        );
        from = to;
    }

    fst.accept = Some(from);
    Some(fst)
}

fn remove_proper_feature(human_readable: &str) -> String {
    human_readable
        .replace("+[Proper=False]", "")
        .replace("+[Proper=True]", "")
}

/// Returns every distinct human-readable analysis the analyzer accepts for
/// `word`, sorted. When `use_proper_feature` is `false`, the
/// `+[Proper=True/False]` marker is stripped from every analysis before
/// deduplication, matching the source's `use_proper_feature=False` mode.
pub fn surface_form(word: &str, analyzer: &Analyzer, use_proper_feature: bool) -> Vec<String> {
    let Some(word_fst) = input_fst(word, analyzer) else {
        return Vec::new();
    };

    let composed = crate::fst::compose(&word_fst, &analyzer.fst);
    if composed.accept.is_none() {
        return Vec::new();
    }

    let mut parses: Vec<String> = extract_parses(&composed, composed.start, false, &analyzer.symbols)
        .into_iter()
        .map(|parse| {
            if use_proper_feature {
                parse
            } else {
                remove_proper_feature(&parse)
            }
        })
        .collect();

    parses.sort();
    parses.dedup();
    parses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::build_from_rules;
    use crate::rule::RewriteRule;

    fn rule(from: &str, to: &str, input: &str, output: &str) -> RewriteRule {
        RewriteRule {
            from_state: from.to_string(),
            to_state: to.to_string(),
            input: input.to_string(),
            output: output.to_string(),
        }
    }

    #[test]
    fn test_known_word_is_analyzed() {
        let rules = vec![
            rule("START", "NN", "(ev[NN]", "ev"),
            rule("NN", "ACCEPT", "<eps>", "<eps>"),
        ];
        let analyzer = build_from_rules(&rules);
        let parses = surface_form("ev", &analyzer, true);
        assert_eq!(parses, vec!["(ev[NN]".to_string()]);
    }

    #[test]
    fn test_unknown_word_yields_no_analyses() {
        let rules = vec![
            rule("START", "NN", "(ev[NN]", "ev"),
            rule("NN", "ACCEPT", "<eps>", "<eps>"),
        ];
        let analyzer = build_from_rules(&rules);
        assert!(surface_form("yok", &analyzer, true).is_empty());
    }

    #[test]
    fn test_proper_feature_stripped_when_not_requested() {
        let rules = vec![
            rule("START", "NNP", "(Ali[NNP]", "Ali"),
            rule("NNP", "ACCEPT", ")+[Proper=True]", "<eps>"),
        ];
        let analyzer = build_from_rules(&rules);
        let parses = surface_form("Ali", &analyzer, false);
        assert_eq!(parses, vec!["(Ali[NNP])".to_string()]);
    }
}

//! Surface-form generation: given a structured analysis, returns the word
//! form it's generated from.
//!
//! Grounded on `turkish_morphology/generate.py`. Where the original
//! resolves multiple composed paths by taking the first element of a
//! (hash-ordered) `set`, this picks the lexicographically-first candidate
//! instead, a deterministic stand-in documented in DESIGN.md's Open
//! Question resolutions.

use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::Analysis;
use crate::analyzer::Analyzer;
use crate::common;
use crate::fst::compile_chain;
use crate::pretty_print;

fn symbols_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r#"\(.+?\[[A-Z\.,:\(\)'\-"`\$]+?\]|"#,
            r"\)?\(\[[A-Z]+?\]|",
            r"-(?:[^\W\d_]|')+?\[[A-z]+?=[A-z]+?\]|",
            r"\+(?:[^\W\d_]|['\.])*?\[[A-z]+?=[A-z0-9]+?\]|",
            r"\)\+\[Proper=(?:True|False)\]|",
            r"\d+(?:\[[A-Z]+?\])?|",
            r"[\(\.,]",
        ))
        .unwrap()
    })
}

/// Sets the `proper` field of the last inflectional group to `pos == "NNP"`
/// if it isn't already set, leaving `analysis` untouched otherwise.
fn add_proper(analysis: &Analysis) -> Analysis {
    let mut with_proper = analysis.clone();
    if let Some(last) = with_proper.ig.last_mut() {
        if last.proper.is_none() {
            last.proper = Some(last.pos == "NNP");
        }
    }
    with_proper
}

fn symbol_indices(analysis: &Analysis, analyzer: &Analyzer) -> Option<Vec<u32>> {
    let human_readable = pretty_print::analysis(analysis);
    symbols_regex()
        .find_iter(&human_readable)
        .map(|m| analyzer.symbols.index_of(m.as_str()))
        .collect()
}

/// Generates the surface form of `analysis`. Assumes `analysis` is
/// structurally well-formed (first validate it with
/// [`crate::validate::analysis`]). Returns an empty string if no surface
/// form can be generated.
pub fn surface_form(analysis: &Analysis, analyzer: &Analyzer) -> String {
    let with_proper = add_proper(analysis);

    let Some(indices) = symbol_indices(&with_proper, analyzer) else {
        return String::new();
    };

    let tag_chain = compile_chain(&indices);
    let composed = crate::fst::compose(&analyzer.fst, &tag_chain);

    if composed.accept.is_none() {
        return String::new();
    }

    let mut surface_forms: Vec<String> =
        crate::fst::extract_parses(&composed, composed.start, true, &analyzer.symbols)
            .into_iter()
            .map(|form| common::lower(&form))
            .collect();

    surface_forms.sort();
    surface_forms.dedup();

    surface_forms.into_iter().next().unwrap_or_default()
}

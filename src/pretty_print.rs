//! Renders a structured [`crate::analysis::Analysis`] into its
//! human-readable string form.
//!
//! Grounded on `turkish_morphology/pretty_print.py`.

use crate::analysis::{Affix, Analysis, Feature, InflectionalGroup, Root};

fn format_root(root: &Root) -> String {
    root.morpheme.clone()
}

fn format_feature(feature: &Feature) -> String {
    format!("[{}={}]", feature.category, feature.value)
}

fn format_affix(affix: &Affix, derivational: bool) -> String {
    let delimiter = if derivational { "-" } else { "+" };
    let meta_morpheme = affix.meta_morpheme.as_deref().unwrap_or("");
    format!("{delimiter}{meta_morpheme}{}", format_feature(&affix.feature))
}

fn format_inflectional_group(ig: &InflectionalGroup, position: usize) -> String {
    let pos = format!("[{}]", ig.pos);

    let pos_root_derivation = if position == 0 {
        let root = ig.root.as_ref().map(format_root).unwrap_or_default();
        format!("{root}{pos}")
    } else {
        let derivation = ig
            .derivation
            .as_ref()
            .map(|a| format_affix(a, true))
            .unwrap_or_default();
        format!("{pos}{derivation}")
    };

    let inflections: String = ig
        .inflection
        .iter()
        .map(|affix| format_affix(affix, false))
        .collect();

    let proper = match ig.proper {
        Some(true) => "+[Proper=True]",
        Some(false) => "+[Proper=False]",
        None => "",
    };

    format!("({pos_root_derivation}{inflections}){proper}")
}

/// Constructs the human-readable analysis string from a structured
/// [`Analysis`].
pub fn analysis(analysis: &Analysis) -> String {
    analysis
        .ig
        .iter()
        .enumerate()
        .map(|(i, ig)| format_inflectional_group(ig, i))
        .collect()
}

//! Parses lexicon entries into rewrite rule records.

use super::reader::LexiconEntry;
use crate::common::{self, START_STATE};
use crate::rule::RewriteRule;
use crate::tags::{self, Formatting};

const CIRCUMFLEX: &[(char, char)] = &[('â', 'a'), ('î', 'i'), ('û', 'u')];

fn format_root(root: &str, tag: &str) -> String {
    match tags::tables().formatting[tag] {
        Formatting::Lower => common::lower(root),
        Formatting::Upper => common::upper(root),
        Formatting::Capitals => common::capitalize(root),
    }
}

fn normalize_entry(mut entry: LexiconEntry) -> LexiconEntry {
    let tag = entry.get("tag").cloned().unwrap_or_default().to_uppercase();
    entry.insert("tag".to_string(), tag.clone());

    let is_compound = entry
        .get("is_compound")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);
    entry.insert(
        "is_compound".to_string(),
        if is_compound { "true" } else { "false" }.to_string(),
    );

    let root = entry.get("root").cloned().unwrap_or_default();
    entry.insert("root".to_string(), format_root(&root, &tag));

    for field in ["morphophonemics", "features"] {
        if entry.get(field).map(String::as_str) == Some("~") {
            entry.insert(field.to_string(), String::new());
        }
    }

    entry
}

fn root_has_circumflex(entry: &LexiconEntry) -> bool {
    let root = entry.get("root").map(String::as_str).unwrap_or("");
    CIRCUMFLEX.iter().any(|(with, _)| root.contains(*with))
}

fn make_circumflex_entry(entry: &LexiconEntry) -> LexiconEntry {
    let mut normalized = entry.clone();
    for field in ["root", "morphophonemics"] {
        if let Some(value) = normalized.get(field).cloned() {
            let mut replaced = value;
            for (with, without) in CIRCUMFLEX {
                replaced = replaced.replace(*with, &without.to_string());
            }
            normalized.insert(field.to_string(), replaced);
        }
    }
    normalized
}

/// Normalizes annotated values of each field of the lexicon entry.
///
/// Converts `tag` to uppercase, `is_compound` to a canonical `"true"`/
/// `"false"` string, formats `root` per [`tags::Formatting`], clears
/// `morphophonemics`/`features` when annotated as `"~"`, and duplicates
/// every entry whose `root` has a circumflex letter (â, î, û) with the
/// plain-letter counterpart in both `root` and `morphophonemics`.
fn normalize(entries: Vec<LexiconEntry>) -> Vec<LexiconEntry> {
    let normalized: Vec<LexiconEntry> = entries.into_iter().map(normalize_entry).collect();
    let extra: Vec<LexiconEntry> = normalized
        .iter()
        .filter(|e| root_has_circumflex(e))
        .map(make_circumflex_entry)
        .collect();

    let mut all = normalized;
    all.extend(extra);
    all
}

fn new_features(old_features: &str, old_tag: &str, new_tag: &str) -> String {
    if new_tag == "NOMP-CASE-BARE" {
        return "+[PersonNumber=A3sg]+[Possessive=Pnon]+[Case=Bare]".to_string();
    }

    let t = tags::tables();
    let old_required = t.required_features[old_tag];
    let new_required = t.required_features[new_tag];
    if !old_required.is_empty() && old_required == new_required {
        return old_features.to_string();
    }

    let old_optional = t.optional_features[old_tag];
    let new_optional = t.optional_features[new_tag];
    if !old_optional.is_empty() && old_optional == new_optional {
        return old_features.to_string();
    }

    String::new()
}

fn make_cross_classified_entry(entry: &LexiconEntry, old_tag: &str, new_tag: &str) -> LexiconEntry {
    let mut new_entry = entry.clone();
    new_entry.insert("tag".to_string(), new_tag.to_string());
    let root = new_entry.get("root").cloned().unwrap_or_default();
    new_entry.insert("root".to_string(), format_root(&root, new_tag));
    let old_features = entry.get("features").map(String::as_str).unwrap_or("");
    new_entry.insert(
        "features".to_string(),
        new_features(old_features, old_tag, new_tag),
    );
    new_entry
}

/// Cross-classifies lexicon entries across parts of speech.
///
/// Adds a new entry by rewriting its tag for each part of speech named in
/// the tag catalog's cross-classification list, retaining required/optional
/// features only when the source and target tag's feature schema match.
fn cross_classify(entries: Vec<LexiconEntry>) -> Vec<LexiconEntry> {
    let mut cross_classified = entries.clone();

    for entry in &entries {
        let old_tag = entry.get("tag").cloned().unwrap_or_default();
        for new_tag in tags::tables().cross_classify_as[old_tag.as_str()] {
            cross_classified.push(make_cross_classified_entry(entry, &old_tag, new_tag));
        }
    }

    cross_classified
}

fn rule_input(entry: &LexiconEntry) -> String {
    let root = entry.get("root").map(String::as_str).unwrap_or("");
    let tag = entry.get("tag").map(String::as_str).unwrap_or("");
    let output_tag = tags::tables().output_as[tag];
    let features = entry.get("features").map(String::as_str).unwrap_or("");
    format!("({root}[{output_tag}]{features}")
}

fn rule_output(entry: &LexiconEntry) -> String {
    let morphophonemics = entry.get("morphophonemics").map(String::as_str).unwrap_or("");
    if !morphophonemics.is_empty() {
        return morphophonemics.to_string();
    }
    common::lower(entry.get("root").map(String::as_str).unwrap_or(""))
}

fn create_rewrite_rule(entry: &LexiconEntry) -> RewriteRule {
    RewriteRule {
        from_state: START_STATE.to_string(),
        to_state: entry.get("tag").cloned().unwrap_or_default(),
        input: rule_input(entry),
        output: rule_output(entry),
    }
}

/// Generates a rewrite rule set from lexicon entries.
///
/// Assumes every entry has already been validated with
/// [`super::validator::validate`].
pub fn parse(entries: Vec<LexiconEntry>) -> Vec<RewriteRule> {
    let normalized = normalize(entries);
    let cross_classified = cross_classify(normalized);
    let fst_states = &tags::tables().fst_states;

    cross_classified
        .iter()
        .filter(|e| {
            fst_states.contains(e.get("tag").map(String::as_str).unwrap_or(""))
        })
        .map(create_rewrite_rule)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn entry(fields: &[(&str, &str)]) -> LexiconEntry {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>()
    }

    #[test]
    fn test_simple_noun_emits_single_rule() {
        let e = entry(&[
            ("tag", "NN"),
            ("root", "ev"),
            ("morphophonemics", ""),
            ("features", ""),
            ("is_compound", "false"),
        ]);
        let rules = parse(vec![e]);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].from_state, "START");
        assert_eq!(rules[0].to_state, "NN");
        assert_eq!(rules[0].input, "(ev[NN]");
        assert_eq!(rules[0].output, "ev");
    }

    #[test]
    fn test_morphophonemics_used_as_output_when_present() {
        let e = entry(&[
            ("tag", "NN"),
            ("root", "dokumak"),
            ("morphophonemics", "dokun"),
            ("features", ""),
            ("is_compound", "false"),
        ]);
        let rules = parse(vec![e]);
        assert_eq!(rules[0].output, "dokun");
    }

    #[test]
    fn test_cross_classification_adds_nomp_entry() {
        let e = entry(&[
            ("tag", "NN"),
            ("root", "ev"),
            ("morphophonemics", ""),
            ("features", ""),
            ("is_compound", "false"),
        ]);
        let rules = parse(vec![e]);
        // NN cross-classifies to NOMP, which is an FST state.
        assert!(rules.iter().any(|r| r.to_state == "NOMP"));
        assert!(rules.iter().any(|r| r.to_state == "NN"));
    }

    #[test]
    fn test_jjn_is_not_fst_state_but_cross_classifies() {
        let e = entry(&[
            ("tag", "JJN"),
            ("root", "iyi"),
            ("morphophonemics", ""),
            ("features", ""),
            ("is_compound", "false"),
        ]);
        let rules = parse(vec![e]);
        assert!(!rules.iter().any(|r| r.to_state == "JJN"));
        assert!(rules.iter().any(|r| r.to_state == "JJ"));
        assert!(rules.iter().any(|r| r.to_state == "NN"));
        assert!(rules.iter().any(|r| r.to_state == "NOMP"));
    }

    #[test]
    fn test_circumflex_root_duplicated() {
        let e = entry(&[
            ("tag", "NN"),
            ("root", "âlem"),
            ("morphophonemics", ""),
            ("features", ""),
            ("is_compound", "false"),
        ]);
        let rules = parse(vec![e]);
        assert!(rules.iter().any(|r| r.input == "(âlem[NN]"));
        assert!(rules.iter().any(|r| r.input == "(alem[NN]"));
    }

    #[test]
    fn test_nomp_case_bare_gets_forced_features() {
        let e = entry(&[
            ("tag", "EX"),
            ("root", "var"),
            ("morphophonemics", ""),
            ("features", ""),
            ("is_compound", "false"),
        ]);
        let rules = parse(vec![e]);
        let bare = rules.iter().find(|r| r.to_state == "NOMP-CASE-BARE").unwrap();
        assert_eq!(
            bare.input,
            "(var[NOMP]+[PersonNumber=A3sg]+[Possessive=Pnon]+[Case=Bare]"
        );
    }

    #[test]
    fn test_nnp_root_capitalized() {
        let e = entry(&[
            ("tag", "NNP"),
            ("root", "ali"),
            ("morphophonemics", ""),
            ("features", ""),
            ("is_compound", "false"),
        ]);
        let rules = parse(vec![e]);
        let nnp = rules.iter().find(|r| r.to_state == "NNP").unwrap();
        assert_eq!(nnp.input, "(Ali[NNP]");
    }
}

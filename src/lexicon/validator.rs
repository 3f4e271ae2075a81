//! Validates lexicon entry annotations.

use std::sync::OnceLock;

use regex::Regex;

use super::reader::LexiconEntry;
use crate::error::LexiconError;
use crate::tags;

const REQUIRED_FIELDS: &[&str] = &["tag", "root", "morphophonemics", "features", "is_compound"];

// `[A-z]` (not `[A-Za-z]`) is the source's literal byte range, which also
// admits `[`, `\`, `]`, `^`, `_` and `` ` `` between 'Z' and 'a'; preserved
// as-is rather than narrowed, matching the original regex's accepted set.
fn feature_category_value_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\+\[([A-z0-9]+?)=([A-z0-9]+?)\]").unwrap())
}

fn features_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\+\[[A-z0-9]+?=[A-z0-9]+?\])+$").unwrap())
}

fn tag_of(entry: &LexiconEntry) -> String {
    entry.get("tag").cloned().unwrap_or_default().to_uppercase()
}

fn morphophonemics_of(entry: &LexiconEntry) -> &str {
    entry.get("morphophonemics").map(String::as_str).unwrap_or("")
}

fn features_of(entry: &LexiconEntry) -> &str {
    entry.get("features").map(String::as_str).unwrap_or("")
}

fn is_compound_of(entry: &LexiconEntry) -> String {
    entry
        .get("is_compound")
        .cloned()
        .unwrap_or_default()
        .to_lowercase()
}

fn category_value_pairs(features: &str) -> Vec<(String, String)> {
    feature_category_value_regex()
        .captures_iter(features)
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect()
}

fn entry_has_required_fields(entry: &LexiconEntry) -> Result<(), LexiconError> {
    let mut missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .filter(|f| !entry.contains_key(**f))
        .copied()
        .collect();
    if !missing.is_empty() {
        missing.sort_unstable();
        return Err(LexiconError::MissingFields(missing.join(", ")));
    }
    Ok(())
}

fn entry_field_values_are_not_empty(entry: &LexiconEntry) -> Result<(), LexiconError> {
    let mut empty: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .filter(|f| entry.get(**f).map(|v| v.is_empty()).unwrap_or(true))
        .copied()
        .collect();
    if !empty.is_empty() {
        empty.sort_unstable();
        return Err(LexiconError::EmptyFieldValues(empty.join(", ")));
    }
    Ok(())
}

fn entry_field_values_does_not_contain_infix_whitespace(
    entry: &LexiconEntry,
) -> Result<(), LexiconError> {
    let fields_to_check = ["tag", "morphophonemics", "features"];
    let mut multi_token: Vec<&str> = fields_to_check
        .iter()
        .filter(|f| {
            entry
                .get(**f)
                .map(|v| v.split_whitespace().count() != 1)
                .unwrap_or(true)
        })
        .copied()
        .collect();
    if !multi_token.is_empty() {
        multi_token.sort_unstable();
        return Err(LexiconError::FieldValuesContainWhitespace(
            multi_token.join(", "),
        ));
    }
    Ok(())
}

fn entry_tag_is_valid(entry: &LexiconEntry) -> Result<(), LexiconError> {
    let tag = tag_of(entry);
    if !tags::tables().valid_tags.contains(tag.as_str()) {
        return Err(LexiconError::InvalidTag);
    }
    Ok(())
}

fn entry_compound_annotation_is_valid(entry: &LexiconEntry) -> Result<(), LexiconError> {
    let compound = is_compound_of(entry);
    if compound != "true" && compound != "false" {
        return Err(LexiconError::InvalidCompoundAnnotation);
    }
    Ok(())
}

fn entry_morphophonemics_annotation_is_valid(entry: &LexiconEntry) -> Result<(), LexiconError> {
    let compound = is_compound_of(entry);
    let morphophonemics = morphophonemics_of(entry);
    if compound == "true" && morphophonemics == "~" {
        return Err(LexiconError::MissingCompoundMorphophonemics);
    }
    Ok(())
}

fn entry_features_annotation_is_valid(entry: &LexiconEntry) -> Result<(), LexiconError> {
    let features = features_of(entry);
    if !(features == "~" || features_regex().is_match(features)) {
        return Err(LexiconError::InvalidFeaturesAnnotation);
    }
    Ok(())
}

fn entry_has_required_features(entry: &LexiconEntry) -> Result<(), LexiconError> {
    let features = features_of(entry);
    let tag = tag_of(entry);
    let required = tags::tables().required_features[tag.as_str()];
    if features == "~" && !required.is_empty() {
        return Err(LexiconError::MissingRequiredFeatures);
    }
    Ok(())
}

fn entry_required_features_are_valid(entry: &LexiconEntry) -> Result<(), LexiconError> {
    let tag = tag_of(entry);
    let required = tags::tables().required_features[tag.as_str()];
    if required.is_empty() {
        return Ok(());
    }

    let features = features_of(entry);
    let category_value = category_value_pairs(features);

    let categories: Vec<&str> = category_value.iter().map(|(c, _)| c.as_str()).collect();
    let expected: Vec<&str> = required.iter().map(|(c, _)| *c).collect();
    if categories != expected {
        return Err(LexiconError::InvalidRequiredFeatureCategory);
    }

    for ((_, value), (_, allowed)) in category_value.iter().zip(required.iter()) {
        if !allowed.contains(&value.as_str()) {
            return Err(LexiconError::InvalidRequiredFeatureValue);
        }
    }
    Ok(())
}

fn entry_optional_features_are_valid(entry: &LexiconEntry) -> Result<(), LexiconError> {
    let tag = tag_of(entry);
    let optional = tags::tables().optional_features[tag.as_str()];
    if optional.is_empty() {
        return Ok(());
    }

    let features = features_of(entry);
    let category_value = category_value_pairs(features);

    let all_valid = category_value.iter().all(|(c, v)| {
        tags::schema_lookup(optional, c)
            .map(|allowed| allowed.contains(&v.as_str()))
            .unwrap_or(false)
    });
    if !all_valid {
        return Err(LexiconError::InvalidOptionalFeatures);
    }
    Ok(())
}

fn entry_features_are_not_redundant(entry: &LexiconEntry) -> Result<(), LexiconError> {
    let features = features_of(entry);
    let tag = tag_of(entry);
    let required = tags::tables().required_features[tag.as_str()];
    let optional = tags::tables().optional_features[tag.as_str()];
    if required.is_empty() && optional.is_empty() && features != "~" {
        return Err(LexiconError::RedundantFeatures);
    }
    Ok(())
}

/// Checks that a lexicon entry's annotations are well-formed.
///
/// Runs the checks in the same order the source data format was designed
/// around: fields present, fields non-empty, no infix whitespace, valid
/// tag, valid compound annotation, compound/morphophonemics consistency,
/// valid features syntax, then required/optional/redundant feature checks
/// (which depend on the tag already being valid).
pub fn validate(entry: &LexiconEntry) -> Result<(), LexiconError> {
    entry_has_required_fields(entry)?;
    entry_field_values_are_not_empty(entry)?;
    entry_field_values_does_not_contain_infix_whitespace(entry)?;
    entry_tag_is_valid(entry)?;
    entry_compound_annotation_is_valid(entry)?;
    entry_morphophonemics_annotation_is_valid(entry)?;
    entry_features_annotation_is_valid(entry)?;
    entry_has_required_features(entry)?;
    entry_required_features_are_valid(entry)?;
    entry_optional_features_are_valid(entry)?;
    entry_features_are_not_redundant(entry)?;
    Ok(())
}

//! Validates tokenized morphotactics rewrite rule definitions.

use std::sync::OnceLock;

use regex::Regex;

use crate::common::EPSILON;
use crate::error::MorphotacticsError;

use super::reader::RuleDefinition;

fn rule_input_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:(?:\)?\(\[[A-Z]+?\]-([^\W\d_]|')+?\[[A-z]+?=[A-z]+?\]|",
            r"\+([^\W\d_]|['\.])*?\[[A-z]+?=[A-z0-9]+?\]|",
            r"\)\+\[Proper=(?:True|False)\]|",
            r"\d+?(?:\[[A-Z]+?\])?)+|",
            r"[\(\.,])$",
        ))
        .unwrap()
    })
}

fn rule_output_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:'?\+[^\W\d_]+|",
            r"\d+(?:\.?\*?([^\W\d_]|['~])+\*?)?|",
            r"[',\.])$",
        ))
        .unwrap()
    })
}

fn rule_has_expected_number_of_tokens(
    rule_definition: &RuleDefinition,
) -> Result<(), MorphotacticsError> {
    if rule_definition.len() != 4 {
        return Err(MorphotacticsError::WrongTokenCount(rule_definition.len()));
    }
    Ok(())
}

fn rule_has_non_empty_tokens(rule_definition: &RuleDefinition) -> Result<(), MorphotacticsError> {
    if rule_definition.iter().any(|t| t.is_empty()) {
        return Err(MorphotacticsError::EmptyTokens);
    }
    Ok(())
}

/// Checks if the input label of the rule definition is valid.
///
/// Valid if the label is epsilon, or matches an inflectional group
/// boundary analysis, an inflectional morpheme analysis, a proper noun
/// analysis, a number analysis, or a parenthesis/decimal-point separator.
fn rule_input_is_valid(input_label: &str) -> Result<(), MorphotacticsError> {
    if input_label.to_lowercase() == EPSILON {
        return Ok(());
    }
    if !rule_input_regex().is_match(input_label) {
        return Err(MorphotacticsError::InvalidInputLabel);
    }
    Ok(())
}

/// Checks if the output label of the rule definition is valid.
///
/// Valid if the label is epsilon, or matches a meta-morpheme, the
/// morphophonemics of a number, or a comma/full-stop/apostrophe.
fn rule_output_is_valid(output_label: &str) -> Result<(), MorphotacticsError> {
    if output_label.to_lowercase() == EPSILON {
        return Ok(());
    }
    if !rule_output_regex().is_match(output_label) {
        return Err(MorphotacticsError::InvalidOutputLabel);
    }
    Ok(())
}

/// Raises an error if a tokenized morphotactics rewrite rule is illformed.
pub fn validate(rule_definition: &RuleDefinition) -> Result<(), MorphotacticsError> {
    rule_has_expected_number_of_tokens(rule_definition)?;
    rule_has_non_empty_tokens(rule_definition)?;
    rule_input_is_valid(&rule_definition[2])?;
    rule_output_is_valid(&rule_definition[3])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(tokens: &[&str]) -> RuleDefinition {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_valid_epsilon_rule() {
        let rule = def(&["START", "NN", "<eps>", "<eps>"]);
        assert!(validate(&rule).is_ok());
    }

    #[test]
    fn test_valid_ig_boundary_input() {
        let rule = def(&["JJ", "NN", "([NN]-cI[Derivation=With]", "cI"]);
        assert!(validate(&rule).is_ok());
    }

    #[test]
    fn test_valid_feature_input() {
        let rule = def(&["NN", "NN-CASE", "+lAr[Number=Plural]", "+lAr"]);
        assert!(validate(&rule).is_ok());
    }

    #[test]
    fn test_valid_proper_noun_input() {
        let rule = def(&["NNP", "NNP-PROPER", r")+[Proper=True]", "<eps>"]);
        assert!(validate(&rule).is_ok());
    }

    #[test]
    fn test_valid_number_input() {
        let rule = def(&["CD", "CD-NUM", "10[CD]", "10"]);
        assert!(validate(&rule).is_ok());
    }

    #[test]
    fn test_wrong_token_count() {
        let rule = def(&["START", "NN", "<eps>"]);
        assert_eq!(
            validate(&rule),
            Err(MorphotacticsError::WrongTokenCount(3))
        );
    }

    #[test]
    fn test_empty_token() {
        let rule = def(&["START", "", "<eps>", "<eps>"]);
        assert_eq!(validate(&rule), Err(MorphotacticsError::EmptyTokens));
    }

    #[test]
    fn test_invalid_input_label() {
        let rule = def(&["START", "NN", "???", "<eps>"]);
        assert_eq!(
            validate(&rule),
            Err(MorphotacticsError::InvalidInputLabel)
        );
    }

    #[test]
    fn test_invalid_output_label() {
        let rule = def(&["START", "NN", "<eps>", "???"]);
        assert_eq!(
            validate(&rule),
            Err(MorphotacticsError::InvalidOutputLabel)
        );
    }
}

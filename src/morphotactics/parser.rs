//! Parses morphotactics rule definitions into rewrite rule records.

use crate::rule::RewriteRule;

use super::reader::RuleDefinition;

fn is_bracketed(token: &str) -> bool {
    token.starts_with('<') && token.ends_with('>')
}

/// Normalizes the tokens of a morphotactics rewrite rule definition:
/// `from_state`/`to_state` to uppercase, and bracketed (`<...>`) `input`/
/// `output` labels to lowercase.
fn normalize(rule_definition: &RuleDefinition) -> RuleDefinition {
    vec![
        rule_definition[0].to_uppercase(),
        rule_definition[1].to_uppercase(),
        if is_bracketed(&rule_definition[2]) {
            rule_definition[2].to_lowercase()
        } else {
            rule_definition[2].clone()
        },
        if is_bracketed(&rule_definition[3]) {
            rule_definition[3].to_lowercase()
        } else {
            rule_definition[3].clone()
        },
    ]
}

fn create_rewrite_rule(rule_definition: &RuleDefinition) -> RewriteRule {
    RewriteRule {
        from_state: rule_definition[0].clone(),
        to_state: rule_definition[1].clone(),
        input: rule_definition[2].clone(),
        output: rule_definition[3].clone(),
    }
}

/// Generates a rewrite rule set from morphotactics rule definitions.
///
/// Assumes every rule definition has already been validated with
/// [`super::validator::validate`].
pub fn parse(rule_definitions: Vec<RuleDefinition>) -> Vec<RewriteRule> {
    rule_definitions
        .iter()
        .map(normalize)
        .map(|d| create_rewrite_rule(&d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_uppercased() {
        let defs = vec![vec![
            "state-1".to_string(),
            "state-2".to_string(),
            "<eps>".to_string(),
            "<eps>".to_string(),
        ]];
        let rules = parse(defs);
        assert_eq!(rules[0].from_state, "STATE-1");
        assert_eq!(rules[0].to_state, "STATE-2");
    }

    #[test]
    fn test_bracketed_epsilon_lowercased() {
        let defs = vec![vec![
            "START".to_string(),
            "NN".to_string(),
            "<EPS>".to_string(),
            "<EPS>".to_string(),
        ]];
        let rules = parse(defs);
        assert_eq!(rules[0].input, "<eps>");
        assert_eq!(rules[0].output, "<eps>");
    }

    #[test]
    fn test_unbracketed_labels_left_untouched() {
        let defs = vec![vec![
            "NN".to_string(),
            "NN-CASE".to_string(),
            "+lAr[Number=Plural]".to_string(),
            "+lAr".to_string(),
        ]];
        let rules = parse(defs);
        assert_eq!(rules[0].input, "+lAr[Number=Plural]");
        assert_eq!(rules[0].output, "+lAr");
    }
}

//! Reads whitespace-tokenized morphotactics rewrite rule definition files.

use std::fs;
use std::io;
use std::path::Path;

/// A single rule definition: the raw whitespace-separated tokens of one
/// non-blank, non-comment source line.
pub type RuleDefinition = Vec<String>;

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parses rule definitions out of the raw content of a morphotactics
/// rewrite rule definition file.
///
/// Blank lines and lines starting with `#` are skipped. Keys of the
/// returned map are 1-based source line indices.
pub fn parse_rule_definitions(content: &str) -> std::collections::BTreeMap<usize, RuleDefinition> {
    let mut definitions = std::collections::BTreeMap::new();

    for (offset, line) in content.lines().enumerate() {
        if is_skippable(line) {
            continue;
        }
        let index = offset + 1;
        let tokens: RuleDefinition = line.split_whitespace().map(str::to_string).collect();
        definitions.insert(index, tokens);
    }

    definitions
}

/// Reads rule definitions of a morphotactics rewrite rule file from `path`.
pub fn read_rule_definitions(
    path: &Path,
) -> io::Result<std::collections::BTreeMap<usize, RuleDefinition>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_rule_definitions(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_definitions_one_based() {
        let defs = parse_rule_definitions("START NN <eps> <eps>\n");
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[&1], vec!["START", "NN", "<eps>", "<eps>"]);
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let defs = parse_rule_definitions(
            "# a comment\nSTART NN <eps> <eps>\n\nNN ACCEPT <eps> <eps>\n",
        );
        assert_eq!(defs.len(), 2);
        assert!(defs.contains_key(&2));
        assert!(defs.contains_key(&4));
    }
}

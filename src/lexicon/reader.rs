//! Reads TSV-structured lexicon files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A lexicon entry: field name -> annotated value, as read from one TSV row.
pub type LexiconEntry = BTreeMap<String, String>;

fn split_trimmed(line: &str) -> Vec<String> {
    line.split('\t').map(|c| c.trim().to_string()).collect()
}

fn is_empty_line(line: &str) -> bool {
    line.is_empty() || line.chars().all(char::is_whitespace)
}

/// Parses lexicon entries out of the raw content of a TSV-structured
/// lexicon file.
///
/// Line 1 is assumed to be the TSV header (field names); every line below
/// it is assumed to be a lexicon entry. Keys of the returned map are
/// 1-based source line indices (starting at 2, since line 1 is the
/// header); blank rows are pruned.
pub fn parse_lexicon_entries(content: &str) -> BTreeMap<usize, LexiconEntry> {
    let mut lines = content.lines();

    let header = match lines.next() {
        Some(h) => h,
        None => return BTreeMap::new(),
    };
    let field_names = split_trimmed(header);

    let mut entries = BTreeMap::new();
    for (offset, line) in lines.enumerate() {
        if is_empty_line(line) {
            continue;
        }
        let index = offset + 2;
        let columns = split_trimmed(line);
        let entry: LexiconEntry = field_names
            .iter()
            .cloned()
            .zip(columns.into_iter())
            .collect();
        entries.insert(index, entry);
    }

    entries
}

/// Reads lexicon entries of a TSV-structured lexicon file from `path`.
pub fn read_lexicon_entries(path: &Path) -> std::io::Result<BTreeMap<usize, LexiconEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lexicon_entries(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_entries_with_two_based_line_index() {
        let entries = parse_lexicon_entries(
            "tag\troot\tmorphophonemics\tfeatures\tis_compound\nNN\tev\t~\t~\tfalse\n",
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[&2]["root"], "ev");
        assert_eq!(entries[&2]["tag"], "NN");
    }

    #[test]
    fn test_skips_blank_lines() {
        let entries = parse_lexicon_entries(
            "tag\troot\tmorphophonemics\tfeatures\tis_compound\n\nNN\tev\t~\t~\tfalse\n   \nNN\tkapı\t~\t~\tfalse\n",
        );
        assert_eq!(entries.len(), 2);
        assert!(entries.contains_key(&3));
        assert!(entries.contains_key(&5));
    }

    #[test]
    fn test_empty_file_past_header_returns_empty_map() {
        let entries =
            parse_lexicon_entries("tag\troot\tmorphophonemics\tfeatures\tis_compound\n");
        assert!(entries.is_empty());
    }
}

//! Tag catalog used to validate and cross-classify part-of-speech tags of
//! lexicon entries.
//!
//! Transcribed from the original `_TAG_SET` table: one entry per annotated
//! part-of-speech tag, carrying how it is rendered in output, how its root
//! is cased, whether it doubles as a morphotactics FST state, which other
//! tags it cross-classifies to, and its required/optional feature schemas.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Root casing applied to a lexicon entry's `root` field for a given tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatting {
    Lower,
    Upper,
    Capitals,
}

/// A single row of the tag catalog.
pub struct TagSetItem {
    pub tag: &'static str,
    pub output_as: Option<&'static str>,
    pub formatting: Formatting,
    pub is_fst_state: bool,
    pub cross_classify_as: &'static [&'static str],
    /// Ordered category -> allowed-value-set pairs; order matters for
    /// cross-classification schema equality and for validating that a
    /// lexicon entry's features appear in the expected category order.
    pub required_features: &'static [(&'static str, &'static [&'static str])],
    pub optional_features: &'static [(&'static str, &'static [&'static str])],
}

macro_rules! item {
    ($tag:expr) => {
        TagSetItem {
            tag: $tag,
            output_as: None,
            formatting: Formatting::Lower,
            is_fst_state: true,
            cross_classify_as: &[],
            required_features: &[],
            optional_features: &[],
        }
    };
}

pub static TAG_SET: &[TagSetItem] = &[
    // ADJ: Adjective.
    TagSetItem {
        cross_classify_as: &["NN", "NOMP", "PRI", "RB"],
        optional_features: &[("Emphasis", &["True"])],
        ..item!("JJ")
    },
    TagSetItem {
        is_fst_state: false,
        cross_classify_as: &["JJ", "NN", "NOMP"],
        optional_features: &[("Emphasis", &["True"])],
        ..item!("JJN")
    },
    // ADP: Adposition.
    TagSetItem {
        cross_classify_as: &["NN", "NOMP"],
        required_features: &[(
            "ComplementType",
            &["CAbl", "CAcc", "CBare", "CDat", "CFin", "CGen", "CIns", "CNum"],
        )],
        ..item!("IN")
    },
    // ADV: Adverb.
    TagSetItem {
        optional_features: &[("Emphasis", &["True"]), ("Temporal", &["True"])],
        ..item!("RB")
    },
    TagSetItem {
        output_as: Some("RB"),
        cross_classify_as: &["NN-TEMP", "NOMP"],
        required_features: &[("Temporal", &["True"])],
        ..item!("RB-TEMP")
    },
    TagSetItem {
        cross_classify_as: &["NOMP"],
        ..item!("WRB")
    },
    // AFFIX: Affix.
    TagSetItem { ..item!("PFX") },
    // CONJ: Conjunction.
    TagSetItem {
        required_features: &[("ConjunctionType", &["Adv", "Coor", "Par", "Sub"])],
        ..item!("CC")
    },
    // DET: Determiner.
    TagSetItem {
        cross_classify_as: &["NOMP", "PRI"],
        required_features: &[("DeterminerType", &["Def", "Dem", "Dir", "Ind"])],
        ..item!("DT")
    },
    TagSetItem {
        cross_classify_as: &["NOMP"],
        ..item!("PDT")
    },
    TagSetItem {
        cross_classify_as: &["PRI", "NOMP"],
        ..item!("WDT")
    },
    // EXS: Existential.
    TagSetItem {
        cross_classify_as: &["NOMP-CASE-BARE"],
        ..item!("EX")
    },
    // NOUN: Noun.
    TagSetItem {
        cross_classify_as: &["NOMP-WITH-APOS"],
        ..item!("ADD")
    },
    TagSetItem {
        cross_classify_as: &["NOMP"],
        ..item!("NN")
    },
    TagSetItem {
        output_as: Some("NN"),
        formatting: Formatting::Upper,
        cross_classify_as: &["NOMP-WITH-APOS"],
        ..item!("NN-ABBR")
    },
    TagSetItem {
        output_as: Some("NN"),
        formatting: Formatting::Upper,
        cross_classify_as: &["NOMP-APOS"],
        ..item!("NN-ABBR-APOS")
    },
    TagSetItem {
        output_as: Some("NN"),
        required_features: &[("Temporal", &["True"])],
        ..item!("NN-TEMP")
    },
    TagSetItem {
        formatting: Formatting::Capitals,
        cross_classify_as: &["NOMP-WITH-APOS"],
        ..item!("NNP")
    },
    TagSetItem {
        output_as: Some("NNP"),
        formatting: Formatting::Upper,
        cross_classify_as: &["NOMP-WITH-APOS"],
        ..item!("NNP-ABBR")
    },
    // NUM: Number.
    TagSetItem {
        cross_classify_as: &["NN", "NOMP-WITH-APOS"],
        ..item!("CD")
    },
    TagSetItem {
        is_fst_state: false,
        cross_classify_as: &["NN", "NOMP-WITH-APOS"],
        ..item!("CD-DIST")
    },
    TagSetItem {
        is_fst_state: false,
        cross_classify_as: &["NN", "NOMP-WITH-APOS"],
        ..item!("CD-ORD")
    },
    // ONOM: Onomatopoeic.
    TagSetItem { ..item!("DUP") },
    // PRON: Pronoun.
    TagSetItem {
        cross_classify_as: &["NOMP"],
        ..item!("PRD")
    },
    TagSetItem {
        output_as: Some("PRD"),
        cross_classify_as: &["NOMP-PNON"],
        required_features: &[
            (
                "PersonNumber",
                &["A1sg", "A2sg", "A3sg", "A1pl", "A2pl", "A3pl"],
            ),
            ("Possessive", &["Pnon"]),
        ],
        ..item!("PRD-PNON")
    },
    TagSetItem {
        output_as: Some("PRD"),
        cross_classify_as: &["NOMP-PNPOSS"],
        required_features: &[(
            "PersonNumber",
            &["A1sg", "A2sg", "A3sg", "A1pl", "A2pl", "A3pl"],
        )],
        ..item!("PRD-PNPOSS")
    },
    TagSetItem {
        cross_classify_as: &["NOMP"],
        ..item!("PRI")
    },
    TagSetItem {
        cross_classify_as: &["NOMP-PN"],
        required_features: &[(
            "PersonNumber",
            &["A1sg", "A2sg", "A3sg", "A1pl", "A2pl", "A3pl"],
        )],
        ..item!("PRP")
    },
    TagSetItem {
        output_as: Some("PRP"),
        cross_classify_as: &["NOMP-CASE-MARKED"],
        required_features: &[
            (
                "PersonNumber",
                &["A1sg", "A2sg", "A3sg", "A1pl", "A2pl", "A3pl"],
            ),
            ("Possessive", &["Pnon"]),
            ("Case", &["Acc", "Abl", "Dat", "Gen", "Ins", "Loc"]),
        ],
        ..item!("PRP-CASE")
    },
    TagSetItem {
        output_as: Some("PRP"),
        cross_classify_as: &["NOMP-PNON"],
        required_features: &[
            (
                "PersonNumber",
                &["A1sg", "A2sg", "A3sg", "A1pl", "A2pl", "A3pl"],
            ),
            ("Possessive", &["Pnon"]),
        ],
        ..item!("PRP-IRR")
    },
    TagSetItem {
        cross_classify_as: &["NOMP-PNON"],
        required_features: &[
            (
                "PersonNumber",
                &["A1sg", "A2sg", "A3sg", "A1pl", "A2pl", "A3pl"],
            ),
            ("Possessive", &["Pnon"]),
        ],
        ..item!("PRP$")
    },
    TagSetItem {
        cross_classify_as: &["NOMP"],
        ..item!("PRR")
    },
    TagSetItem {
        cross_classify_as: &["NOMP"],
        ..item!("WP")
    },
    // PRT: Particle.
    TagSetItem { ..item!("EP") },
    TagSetItem { ..item!("OP") },
    TagSetItem { ..item!("RPC") },
    TagSetItem {
        cross_classify_as: &["NOMP-CASE-BARE"],
        ..item!("RPNEG")
    },
    TagSetItem {
        cross_classify_as: &["NOMP-CASE-BARE"],
        ..item!("RPQ")
    },
    // PUNCT: Punctuation.
    TagSetItem {
        output_as: Some("."),
        ..item!("PUNCT-1")
    },
    TagSetItem {
        output_as: Some(","),
        ..item!("PUNCT-2")
    },
    TagSetItem {
        output_as: Some(":"),
        ..item!("PUNCT-3")
    },
    TagSetItem {
        output_as: Some("("),
        ..item!("PUNCT-4")
    },
    TagSetItem {
        output_as: Some(")"),
        ..item!("PUNCT-5")
    },
    TagSetItem {
        output_as: Some("``"),
        ..item!("PUNCT-6")
    },
    TagSetItem {
        output_as: Some("'"),
        ..item!("PUNCT-7")
    },
    TagSetItem {
        output_as: Some("-"),
        ..item!("PUNCT-8")
    },
    // VERB: Verb.
    TagSetItem { ..item!("NOMP") },
    TagSetItem {
        output_as: Some("NOMP"),
        ..item!("NOMP-APOS")
    },
    TagSetItem {
        output_as: Some("NOMP"),
        required_features: &[
            ("PersonNumber", &["A3sg"]),
            ("Possessive", &["Pnon"]),
            ("Case", &["Bare"]),
        ],
        ..item!("NOMP-CASE-BARE")
    },
    TagSetItem {
        output_as: Some("NOMP"),
        required_features: &[
            (
                "PersonNumber",
                &["A1sg", "A2sg", "A3sg", "A1pl", "A2pl", "A3pl"],
            ),
            ("Possessive", &["Pnon"]),
            ("Case", &["Acc", "Abl", "Dat", "Gen", "Ins", "Loc"]),
        ],
        ..item!("NOMP-CASE-MARKED")
    },
    TagSetItem {
        output_as: Some("NOMP"),
        required_features: &[(
            "PersonNumber",
            &["A1sg", "A2sg", "A3sg", "A1pl", "A2pl", "A3pl"],
        )],
        ..item!("NOMP-PN")
    },
    TagSetItem {
        output_as: Some("NOMP"),
        required_features: &[
            (
                "PersonNumber",
                &["A1sg", "A2sg", "A3sg", "A1pl", "A2pl", "A3pl"],
            ),
            ("Possessive", &["Pnon"]),
        ],
        ..item!("NOMP-PNON")
    },
    TagSetItem {
        output_as: Some("NOMP"),
        required_features: &[(
            "PersonNumber",
            &["A1sg", "A2sg", "A3sg", "A1pl", "A2pl", "A3pl"],
        )],
        ..item!("NOMP-PNPOSS")
    },
    TagSetItem {
        output_as: Some("NOMP"),
        ..item!("NOMP-WITH-APOS")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-HL-AR-DHR")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-HL-AR-HR")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-HL-AR-HT")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-HL-AR-NO")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-HL-AR-T")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-HL-HR-DHR")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-HL-HR-NO")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-HL-HR-T")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-HN-AR-DHR")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-HN-HR-DHR")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-HN-HR-NO")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-HN-HR-T")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-ON-OR-DHR")
    },
    TagSetItem {
        output_as: Some("VB"),
        ..item!("VB-ON-OR-T")
    },
    // X: Other.
    TagSetItem { ..item!("FW") },
    TagSetItem { ..item!("GW") },
    TagSetItem { ..item!("LS") },
    TagSetItem { ..item!("NFP") },
    TagSetItem { ..item!("SYM") },
    TagSetItem { ..item!("UH") },
    TagSetItem { ..item!("XX") },
];

/// Derived lookup tables, built once from [`TAG_SET`].
pub struct TagTables {
    pub valid_tags: HashSet<&'static str>,
    pub output_as: HashMap<&'static str, &'static str>,
    pub formatting: HashMap<&'static str, Formatting>,
    pub fst_states: HashSet<&'static str>,
    pub cross_classify_as: HashMap<&'static str, &'static [&'static str]>,
    pub required_features: HashMap<&'static str, &'static [(&'static str, &'static [&'static str])]>,
    pub optional_features: HashMap<&'static str, &'static [(&'static str, &'static [&'static str])]>,
}

static TABLES: OnceLock<TagTables> = OnceLock::new();

pub fn tables() -> &'static TagTables {
    TABLES.get_or_init(|| TagTables {
        valid_tags: TAG_SET.iter().map(|t| t.tag).collect(),
        output_as: TAG_SET
            .iter()
            .map(|t| (t.tag, t.output_as.unwrap_or(t.tag)))
            .collect(),
        formatting: TAG_SET.iter().map(|t| (t.tag, t.formatting)).collect(),
        fst_states: TAG_SET
            .iter()
            .filter(|t| t.is_fst_state)
            .map(|t| t.tag)
            .collect(),
        cross_classify_as: TAG_SET
            .iter()
            .map(|t| (t.tag, t.cross_classify_as))
            .collect(),
        required_features: TAG_SET
            .iter()
            .map(|t| (t.tag, t.required_features))
            .collect(),
        optional_features: TAG_SET
            .iter()
            .map(|t| (t.tag, t.optional_features))
            .collect(),
    })
}

/// Looks up the allowed value set for a category within a feature schema.
pub fn schema_lookup(
    schema: &'static [(&'static str, &'static [&'static str])],
    category: &str,
) -> Option<&'static [&'static str]> {
    schema
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, values)| *values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tags_contains_common_pos() {
        let t = tables();
        assert!(t.valid_tags.contains("NN"));
        assert!(t.valid_tags.contains("JJ"));
        assert!(t.valid_tags.contains("VB-HL-AR-DHR"));
        assert!(!t.valid_tags.contains("NOT-A-TAG"));
    }

    #[test]
    fn test_output_as_defaults_to_tag() {
        let t = tables();
        assert_eq!(t.output_as["NN"], "NN");
        assert_eq!(t.output_as["NN-ABBR"], "NN");
        assert_eq!(t.output_as["PUNCT-1"], ".");
    }

    #[test]
    fn test_fst_states_excludes_non_state_tags() {
        let t = tables();
        assert!(t.fst_states.contains("NN"));
        assert!(!t.fst_states.contains("JJN"));
        assert!(!t.fst_states.contains("CD-DIST"));
    }

    #[test]
    fn test_cross_classify_as() {
        let t = tables();
        assert_eq!(t.cross_classify_as["JJ"], &["NN", "NOMP", "PRI", "RB"]);
    }

    #[test]
    fn test_required_features_order_preserved() {
        let t = tables();
        let required = t.required_features["PRP-CASE"];
        assert_eq!(required[0].0, "PersonNumber");
        assert_eq!(required[1].0, "Possessive");
        assert_eq!(required[2].0, "Case");
    }
}

//! The structured morphological analysis data model.
//!
//! Grounded on the implied shape of `analysis.proto` as used by
//! `turkish_morphology/{pretty_print,decompose,validate}.py`: an `Analysis`
//! is a sequence of inflectional groups, each carrying a part-of-speech
//! tag, either a root (position 0) or a derivational affix (later
//! positions), zero or more inflectional affixes, and an optional
//! proper-noun marker.

use serde::{Deserialize, Serialize};

/// The root morpheme of the first inflectional group of an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    pub morpheme: String,
}

/// A single category/value feature pair (e.g. `Number=Plural`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub category: String,
    pub value: String,
}

/// An affix: the feature it realizes, and (for derivational affixes) the
/// meta-morpheme surface form it's rendered from. `meta_morpheme` is
/// `None` for inflectional affixes and `Some` (possibly empty) for
/// derivational ones — the distinction between "unset" and "set but
/// empty" matters for structural validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affix {
    pub feature: Feature,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_morpheme: Option<String>,
}

/// One inflectional group: a part-of-speech tag, a root or a derivational
/// affix depending on position, zero or more inflectional affixes, and an
/// optional proper-noun marker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InflectionalGroup {
    pub pos: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<Root>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivation: Option<Affix>,
    #[serde(default)]
    pub inflection: Vec<Affix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proper: Option<bool>,
}

/// A full morphological analysis: an ordered sequence of inflectional
/// groups.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Analysis {
    pub ig: Vec<InflectionalGroup>,
}

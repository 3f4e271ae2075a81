//! Parses a human-readable analysis string back into a structured
//! [`crate::analysis::Analysis`].
//!
//! Grounded on `turkish_morphology/decompose.py`.

use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::{Affix, Analysis, Feature, InflectionalGroup, Root};
use crate::error::AnalysisError;

fn affix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"[+-]",
            r"(?P<meta_morpheme>(?:[^\W\d_]|['.])*?)",
            r"\[(?P<category>[A-z]+?)=(?P<value>[A-z0-9]+?)\]",
        ))
        .unwrap()
    })
}

fn ig_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"\(",
            r"(?:",
            r"(?P<root>.+?)",
            r#"\[(?P<root_pos>[A-Z\.,:\(\)'\-"`\$]+?)\]"#,
            r"|",
            r#"\[(?P<derivation_pos>[A-Z\.,:\(\)'\-"`\$]+?)\]"#,
            r"(?P<derivation>-(?:[^\W\d_]|')+?\[[A-z]+?=[A-z]+?\])?",
            r")",
            r"(?P<inflections>(?:\+(?:[^\W\d_]|['.])*?\[[A-z]+?=[A-z0-9]+?\])*)",
            r"\)",
            r"(?:\+\[Proper=(?P<proper>True|False)\])?",
        ))
        .unwrap()
    })
}

/// Parses a sequence of human-readable affix analyses (e.g.
/// `"+lAr[PersonNumber=A3pl]+Hm[Possessive=P1sg]"`) into [`Affix`] values.
fn make_affixes(human_readable: &str) -> Vec<Affix> {
    affix_regex()
        .captures_iter(human_readable)
        .map(|caps| {
            let meta_morpheme = caps.name("meta_morpheme").map(|m| m.as_str());
            Affix {
                feature: Feature {
                    category: caps["category"].to_string(),
                    value: caps["value"].to_string(),
                },
                meta_morpheme: meta_morpheme
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            }
        })
        .collect()
}

/// Parses a human-readable morphological analysis into a structured
/// [`Analysis`].
pub fn human_readable_analysis(human_readable: &str) -> Result<Analysis, AnalysisError> {
    if human_readable.is_empty() {
        return Err(AnalysisError::EmptyHumanReadable);
    }

    let igs: Vec<regex::Captures> = ig_regex().captures_iter(human_readable).collect();

    let illformed = || AnalysisError::IllformedHumanReadable(human_readable.to_string());

    let last = igs.last().ok_or_else(illformed)?;
    let last_match = last.get(0).ok_or_else(illformed)?;
    if last_match.end() != human_readable.len() {
        return Err(illformed());
    }

    let first = &igs[0];
    if first.name("root").map(|m| m.as_str()).unwrap_or("").is_empty()
        || first
            .name("root_pos")
            .map(|m| m.as_str())
            .unwrap_or("")
            .is_empty()
    {
        return Err(illformed());
    }
    for ig in &igs[1..] {
        if ig.name("derivation").map(|m| m.as_str()).unwrap_or("").is_empty()
            || ig
                .name("derivation_pos")
                .map(|m| m.as_str())
                .unwrap_or("")
                .is_empty()
        {
            return Err(illformed());
        }
    }

    let mut analysis = Analysis::default();

    for (position, caps) in igs.iter().enumerate() {
        let mut ig = InflectionalGroup::default();

        if position == 0 {
            ig.pos = caps["root_pos"].to_string();
            ig.root = Some(Root {
                morpheme: caps["root"].to_string(),
            });
        } else {
            ig.pos = caps["derivation_pos"].to_string();
            let derivation_text = &caps["derivation"];
            ig.derivation = make_affixes(derivation_text).into_iter().next();
        }

        ig.inflection = make_affixes(&caps["inflections"]);

        if let Some(proper) = caps.name("proper") {
            ig.proper = Some(proper.as_str() == "True");
        }

        analysis.ig.push(ig);
    }

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(
            human_readable_analysis(""),
            Err(AnalysisError::EmptyHumanReadable)
        );
    }

    #[test]
    fn test_simple_noun_root() {
        let analysis = human_readable_analysis("(ev[NN])").unwrap();
        assert_eq!(analysis.ig.len(), 1);
        assert_eq!(analysis.ig[0].pos, "NN");
        assert_eq!(analysis.ig[0].root.as_ref().unwrap().morpheme, "ev");
    }

    #[test]
    fn test_proper_noun_with_feature() {
        let analysis = human_readable_analysis(
            "(Ali[NNP]+lAr[PersonNumber=A3pl]+[Possessive=Pnon]+NHn[Case=Gen])+[Proper=True]",
        )
        .unwrap();
        let ig = &analysis.ig[0];
        assert_eq!(ig.pos, "NNP");
        assert_eq!(ig.root.as_ref().unwrap().morpheme, "Ali");
        assert_eq!(ig.inflection.len(), 3);
        assert_eq!(ig.inflection[0].meta_morpheme.as_deref(), Some("lAr"));
        assert_eq!(ig.inflection[1].meta_morpheme, None);
        assert_eq!(ig.proper, Some(true));
    }

    #[test]
    fn test_derived_inflectional_group() {
        let analysis =
            human_readable_analysis("(yap[VB])([JJ]-yAn[Derivation=PresPart])").unwrap();
        assert_eq!(analysis.ig.len(), 2);
        assert_eq!(analysis.ig[1].pos, "JJ");
        let derivation = analysis.ig[1].derivation.as_ref().unwrap();
        assert_eq!(derivation.meta_morpheme.as_deref(), Some("yAn"));
        assert_eq!(derivation.feature.category, "Derivation");
    }

    #[test]
    fn test_trailing_garbage_is_illformed() {
        let result = human_readable_analysis("(ev[NN])xyz");
        assert!(matches!(
            result,
            Err(AnalysisError::IllformedHumanReadable(_))
        ));
    }

    #[test]
    fn test_non_first_ig_missing_derivation_is_illformed() {
        let result = human_readable_analysis("(yap[VB])([JJ])");
        assert!(matches!(
            result,
            Err(AnalysisError::IllformedHumanReadable(_))
        ));
    }
}

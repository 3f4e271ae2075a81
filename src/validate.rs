//! Structural validation of a [`crate::analysis::Analysis`]: every field
//! that must be present and non-empty for the analysis to be meaningful,
//! independent of whether it could actually arise from the analyzer FST.
//!
//! Grounded on `turkish_morphology/validate.py`.

use crate::analysis::{Affix, Analysis, Feature, InflectionalGroup, Root};
use crate::error::AnalysisError;

fn validate_root(root: &Root) -> Result<(), AnalysisError> {
    if root.morpheme.is_empty() {
        return Err(AnalysisError::EmptyRootMorpheme);
    }
    Ok(())
}

fn validate_feature(feature: &Feature) -> Result<(), AnalysisError> {
    if feature.category.is_empty() {
        return Err(AnalysisError::EmptyFeatureCategory);
    }
    if feature.value.is_empty() {
        return Err(AnalysisError::EmptyFeatureValue);
    }
    Ok(())
}

fn validate_affix(affix: &Affix, derivational: bool) -> Result<(), AnalysisError> {
    validate_feature(&affix.feature)?;
    if derivational {
        match &affix.meta_morpheme {
            None => return Err(AnalysisError::MissingMetaMorpheme),
            Some(meta_morpheme) if meta_morpheme.is_empty() => {
                return Err(AnalysisError::EmptyMetaMorpheme)
            }
            Some(_) => {}
        }
    }
    Ok(())
}

fn validate_inflectional_group(ig: &InflectionalGroup, position: usize) -> Result<(), AnalysisError> {
    if ig.pos.is_empty() {
        return Err(AnalysisError::EmptyPartOfSpeechTag(position + 1));
    }

    if position == 0 {
        match &ig.root {
            None => return Err(AnalysisError::MissingRoot(position + 1)),
            Some(root) => validate_root(root)?,
        }
    } else {
        match &ig.derivation {
            None => return Err(AnalysisError::MissingDerivationalAffix(position + 1)),
            Some(derivation) => validate_affix(derivation, true)?,
        }
    }

    for affix in &ig.inflection {
        validate_affix(affix, false)?;
    }

    Ok(())
}

/// Validates that `analysis` is structurally well-formed: it has at least
/// one inflectional group, every group carries a non-empty part-of-speech
/// tag, the first group has a non-empty root and later groups have a
/// well-formed derivational affix, and every feature and affix is complete.
pub fn analysis(analysis: &Analysis) -> Result<(), AnalysisError> {
    if analysis.ig.is_empty() {
        return Err(AnalysisError::MissingInflectionalGroups);
    }
    for (position, ig) in analysis.ig.iter().enumerate() {
        validate_inflectional_group(ig, position)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun_ig() -> InflectionalGroup {
        InflectionalGroup {
            pos: "NN".to_string(),
            root: Some(Root {
                morpheme: "ev".to_string(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_single_ig_analysis() {
        let a = Analysis { ig: vec![noun_ig()] };
        assert_eq!(analysis(&a), Ok(()));
    }

    #[test]
    fn test_empty_analysis_is_rejected() {
        let a = Analysis::default();
        assert_eq!(analysis(&a), Err(AnalysisError::MissingInflectionalGroups));
    }

    #[test]
    fn test_missing_root_on_first_ig_is_rejected() {
        let a = Analysis {
            ig: vec![InflectionalGroup {
                pos: "NN".to_string(),
                ..Default::default()
            }],
        };
        assert_eq!(analysis(&a), Err(AnalysisError::MissingRoot(1)));
    }

    #[test]
    fn test_missing_derivation_on_later_ig_is_rejected() {
        let a = Analysis {
            ig: vec![
                noun_ig(),
                InflectionalGroup {
                    pos: "JJ".to_string(),
                    ..Default::default()
                },
            ],
        };
        assert_eq!(
            analysis(&a),
            Err(AnalysisError::MissingDerivationalAffix(2))
        );
    }

    #[test]
    fn test_derivation_missing_meta_morpheme_is_rejected() {
        let a = Analysis {
            ig: vec![
                noun_ig(),
                InflectionalGroup {
                    pos: "JJ".to_string(),
                    derivation: Some(Affix {
                        feature: Feature {
                            category: "Derivation".to_string(),
                            value: "PresPart".to_string(),
                        },
                        meta_morpheme: None,
                    }),
                    ..Default::default()
                },
            ],
        };
        assert_eq!(analysis(&a), Err(AnalysisError::MissingMetaMorpheme));
    }

    #[test]
    fn test_empty_pos_is_rejected() {
        let mut ig = noun_ig();
        ig.pos = String::new();
        let a = Analysis { ig: vec![ig] };
        assert_eq!(analysis(&a), Err(AnalysisError::EmptyPartOfSpeechTag(1)));
    }

    #[test]
    fn test_empty_root_morpheme_is_rejected() {
        let a = Analysis {
            ig: vec![InflectionalGroup {
                pos: "NN".to_string(),
                root: Some(Root {
                    morpheme: String::new(),
                }),
                ..Default::default()
            }],
        };
        assert_eq!(analysis(&a), Err(AnalysisError::EmptyRootMorpheme));
    }

    #[test]
    fn test_inflection_feature_missing_category_is_rejected() {
        let a = Analysis {
            ig: vec![InflectionalGroup {
                pos: "NN".to_string(),
                root: Some(Root {
                    morpheme: "ev".to_string(),
                }),
                inflection: vec![Affix {
                    feature: Feature {
                        category: String::new(),
                        value: "A3sg".to_string(),
                    },
                    meta_morpheme: None,
                }],
                ..Default::default()
            }],
        };
        assert_eq!(analysis(&a), Err(AnalysisError::EmptyFeatureCategory));
    }
}

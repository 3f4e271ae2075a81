//! Error types for the lexicon/morphotactics compiler pipeline and the
//! structured-parse data model.

use std::path::PathBuf;
use thiserror::Error;

/// Raised when a lexicon entry is illformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexiconError {
    #[error("Entry is missing fields: '{0}'")]
    MissingFields(String),

    #[error("Entry fields have empty values: '{0}'")]
    EmptyFieldValues(String),

    #[error("Entry field values contain whitespace: '{0}'")]
    FieldValuesContainWhitespace(String),

    #[error(
        "Entry 'tag' field has invalid value. It can only be one of the valid \
         tags that are defined in the tag catalog."
    )]
    InvalidTag,

    #[error(
        "Entry 'is_compound' field has invalid value. It can only have the \
         values 'true' or 'false'."
    )]
    InvalidCompoundAnnotation,

    #[error(
        "Entry is marked as ending with compounding marker but it is missing \
         morphophonemics annotation."
    )]
    MissingCompoundMorphophonemics,

    #[error(
        "Entry features annotation is invalid. Features need to be annotated \
         as '+[Category_1=Value_x]...+[Category_n=Value_y]."
    )]
    InvalidFeaturesAnnotation,

    #[error("Entry is missing required features.")]
    MissingRequiredFeatures,

    #[error("Entry has invalid required feature category.")]
    InvalidRequiredFeatureCategory,

    #[error("Entry has invalid required feature value.")]
    InvalidRequiredFeatureValue,

    #[error("Entry has invalid optional features.")]
    InvalidOptionalFeatures,

    #[error("Entry has features while it is not expected to have any.")]
    RedundantFeatures,
}

/// Raised when a morphotactics rewrite rule definition is illformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MorphotacticsError {
    #[error("Expecting 4 tokens got {0}.")]
    WrongTokenCount(usize),

    #[error("Rule definition contains empty tokens.")]
    EmptyTokens,

    #[error("Invalid rule input label.")]
    InvalidInputLabel,

    #[error("Invalid rule output label.")]
    InvalidOutputLabel,
}

/// Raised when one of the compiler's source files contains an illformed
/// line or entry, or when a directory yields no usable rewrite rules.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Lexicon entry at line {line} of '{}' is illformed. {source}", path.display())]
    Lexicon {
        path: PathBuf,
        line: usize,
        #[source]
        source: LexiconError,
    },

    #[error("Rewrite rule at line {line} of '{}' is illformed. {source}", path.display())]
    Morphotactics {
        path: PathBuf,
        line: usize,
        #[source]
        source: MorphotacticsError,
    },

    #[error("no valid lexicon rewrite rules found.")]
    NoLexiconRules,

    #[error("no valid morphotactics rewrite rules found.")]
    NoMorphotacticsRules,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Raised when a human-readable or structured morphological analysis is
/// structurally illformed (used by both the structural validator and the
/// decomposer).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Human-readable analysis is empty.")]
    EmptyHumanReadable,

    #[error("Human-readable analysis is ill-formed: '{0}'")]
    IllformedHumanReadable(String),

    #[error("Analysis is missing inflectional groups")]
    MissingInflectionalGroups,

    /// Unreachable from this crate's validator: `pos` is a plain `String`
    /// field with no "unset" state distinct from empty, unlike the original
    /// protobuf's `HasField`. Kept for parity with the message catalog.
    #[error("Inflectional group {0} is missing part-of-speech tag")]
    MissingPartOfSpeechTag(usize),

    #[error("Inflectional group {0} part-of-speech tag is empty")]
    EmptyPartOfSpeechTag(usize),

    #[error("Inflectional group {0} is missing root")]
    MissingRoot(usize),

    #[error("Inflectional group {0} is missing derivational affix")]
    MissingDerivationalAffix(usize),

    /// Unreachable from this crate's validator: `Affix::feature` is a plain
    /// `Feature`, not an `Option<Feature>`, so it can be empty but never
    /// absent. Kept for parity with the message catalog.
    #[error("Affix is missing feature")]
    AffixMissingFeature,

    #[error("Derivational affix is missing meta-morpheme")]
    MissingMetaMorpheme,

    #[error("Derivational affix meta-morpheme is empty")]
    EmptyMetaMorpheme,

    /// Unreachable from this crate's validator: `Feature::category` is a
    /// plain `String`, not `Option<String>`. Kept for parity with the
    /// message catalog.
    #[error("Feature is missing category")]
    FeatureMissingCategory,

    #[error("Feature category is empty")]
    EmptyFeatureCategory,

    /// Unreachable from this crate's validator: `Feature::value` is a plain
    /// `String`, not `Option<String>`. Kept for parity with the message
    /// catalog.
    #[error("Feature is missing value")]
    FeatureMissingValue,

    #[error("Feature value is empty")]
    EmptyFeatureValue,

    /// Unreachable from this crate's validator: `Root::morpheme` is a plain
    /// `String`, not `Option<String>`. Kept for parity with the message
    /// catalog.
    #[error("Root is missing morpheme")]
    RootMissingMorpheme,

    #[error("Root morpheme is empty")]
    EmptyRootMorpheme,
}

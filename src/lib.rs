//! Two-level Turkish morphological analyzer and generator: a lexicon and a
//! set of morphotactic rewrite rules compile down to a single finite-state
//! transducer that maps surface word forms to human-readable morphological
//! analyses and back.
//!
//! The pipeline mirrors the ten components described by the project this
//! crate reimplements: a tag catalog ([`tags`]), a lexicon reader/validator/
//! parser ([`lexicon`]), a morphotactics reader/validator/parser
//! ([`morphotactics`]), a compiler that merges both rule sources into a
//! de-duplicated rewrite rule set ([`compiler`]), a minimal FST runtime
//! ([`fst`]) the compiled [`analyzer::Analyzer`] is built on top of, surface
//! analysis and generation ([`analyze`], [`generate`]), and the structured
//! parse data model with its pretty-printer, decomposer and structural
//! validator ([`analysis`], [`pretty_print`], [`decompose`], [`validate`]).

pub mod analysis;
pub mod analyze;
pub mod analyzer;
pub mod common;
pub mod compiler;
pub mod decompose;
pub mod error;
pub mod fst;
pub mod generate;
pub mod lexicon;
pub mod morphotactics;
pub mod pretty_print;
pub mod rule;
pub mod tags;
pub mod validate;

pub use analysis::{Affix, Analysis, Feature, InflectionalGroup, Root};
pub use analyzer::Analyzer;
pub use compiler::CompilerConfig;
pub use error::{AnalysisError, CompileError, LexiconError, MorphotacticsError};
pub use rule::RewriteRule;

/// Compiles an analyzer from a lexicon directory and a morphotactics
/// directory. A thin, discoverable alias for [`analyzer::compile`].
pub fn compile_from_dirs(
    lexicon_dir: &std::path::Path,
    morphotactics_dir: &std::path::Path,
) -> Result<Analyzer, CompileError> {
    analyzer::compile(lexicon_dir, morphotactics_dir)
}

//! Builds the runtime analyzer transducer from a compiled rewrite rule set.
//!
//! Grounded on the state-chaining algorithm of `model_compile.py`'s
//! `_text_fst_file_content`, but targets the in-memory [`crate::fst::Fst`]
//! runtime directly instead of an AT&T text file, and performs the
//! ilabel/olabel inversion documented in DESIGN.md: the compiled rules list
//! `input` as the analysis-tag label and `output` as the surface label, but
//! the runtime transducer this crate composes against surface-form input
//! needs its `ilabel` tape to carry surface symbols and its `olabel` tape to
//! carry analysis symbols.

use std::collections::HashMap;
use std::path::Path;

use crate::common::{ACCEPT_STATE, EPSILON, START_STATE};
use crate::compiler::{self, CompilerConfig};
use crate::error::CompileError;
use crate::fst::{Arc, Fst, SymbolTable};
use crate::rule::RewriteRule;

/// The compiled two-level analyzer: a single transducer (surface form on
/// the input tape, human-readable analysis tokens on the output tape) plus
/// the symbol table shared by both tapes.
pub struct Analyzer {
    pub fst: Fst,
    pub symbols: SymbolTable,
}

struct StateAllocator {
    index_of: HashMap<String, usize>,
}

impl StateAllocator {
    fn new(fst: &mut Fst) -> Self {
        let mut index_of = HashMap::new();
        index_of.insert(START_STATE.to_string(), fst.start);
        StateAllocator { index_of }
    }

    fn index_of(&mut self, fst: &mut Fst, state: &str) -> usize {
        *self
            .index_of
            .entry(state.to_string())
            .or_insert_with(|| fst.add_state())
    }
}

/// Builds the runtime [`Analyzer`] directly from a rewrite rule set (the
/// output of [`compiler::compile_rule_sets`]), without an intermediate text
/// FST representation.
pub fn build_from_rules(rules: &[RewriteRule]) -> Analyzer {
    let mut fst = Fst::new();
    let mut symbols = SymbolTable::new();
    let mut allocator = StateAllocator::new(&mut fst);

    for rule in rules {
        let mut tag_symbols = compiler::symbols_of_input(&rule.input);
        let mut surface_symbols = compiler::symbols_of_output(&rule.output);

        while tag_symbols.len() < surface_symbols.len() {
            tag_symbols.push(EPSILON.to_string());
        }
        while surface_symbols.len() < tag_symbols.len() {
            surface_symbols.push(EPSILON.to_string());
        }

        let mut from = allocator.index_of(&mut fst, &rule.from_state);

        for (tag, surface) in tag_symbols.iter().zip(surface_symbols.iter()) {
            let to = fst.add_state();
            let ilabel = if surface == EPSILON {
                0
            } else {
                symbols.intern(surface)
            };
            let olabel = if tag == EPSILON { 0 } else { symbols.intern(tag) };
            fst.add_arc(
                from,
                Arc {
                    ilabel,
                    olabel,
                    nextstate: to,
                },
            );
            from = to;
        }

        let to_state_index = allocator.index_of(&mut fst, &rule.to_state);
        fst.add_arc(
            from,
            Arc {
                ilabel: 0,
                olabel: 0,
                nextstate: to_state_index,
            },
        );
    }

    fst.accept = Some(allocator.index_of(&mut fst, ACCEPT_STATE));
    crate::fst::arcsort_by_output(&mut fst);

    Analyzer { fst, symbols }
}

/// Compiles lexicon and morphotactics source files into a runtime
/// [`Analyzer`], without writing intermediate text artifacts to disk.
pub fn compile(lexicon_dir: &Path, morphotactics_dir: &Path) -> Result<Analyzer, CompileError> {
    let config = CompilerConfig {
        lexicon_dir: lexicon_dir.to_path_buf(),
        morphotactics_dir: morphotactics_dir.to_path_buf(),
        output_dir: std::path::PathBuf::new(),
    };
    let rules = compiler::compile_rule_sets(&config)?;
    Ok(build_from_rules(&rules))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(from: &str, to: &str, input: &str, output: &str) -> RewriteRule {
        RewriteRule {
            from_state: from.to_string(),
            to_state: to.to_string(),
            input: input.to_string(),
            output: output.to_string(),
        }
    }

    #[test]
    fn test_single_rule_start_to_accept_has_accept_state() {
        let rules = vec![
            rule("START", "NN", "(ev[NN]", "ev"),
            rule("NN", "ACCEPT", "<eps>", "<eps>"),
        ];
        let analyzer = build_from_rules(&rules);
        assert!(analyzer.fst.accept.is_some());
    }

    #[test]
    fn test_surface_symbols_land_on_byte_values_for_ascii() {
        let rules = vec![
            rule("START", "NN", "(ev[NN]", "ev"),
            rule("NN", "ACCEPT", "<eps>", "<eps>"),
        ];
        let analyzer = build_from_rules(&rules);
        assert_eq!(analyzer.symbols.index_of("e"), Some(b'e' as u32));
    }

    #[test]
    fn test_tag_symbol_gets_complex_index() {
        let rules = vec![
            rule("START", "NN", "(ev[NN]", "ev"),
            rule("NN", "ACCEPT", "<eps>", "<eps>"),
        ];
        let analyzer = build_from_rules(&rules);
        assert!(analyzer.symbols.index_of("(ev[NN]").is_some());
    }
}

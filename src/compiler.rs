//! Compiles lexicon and morphotactics rewrite rules into the AT&T-format
//! text artifacts used to build the morphotactics FST: a complex symbols
//! table and a text FST transition file.
//!
//! Grounded on `model_compile.py`: file discovery, per-line validation with
//! file/line-annotated errors, rule-set merge with last-wins de-duplication,
//! and the two emitted file formats.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::common::{ACCEPT_STATE, EPSILON, START_STATE};
use crate::error::CompileError;
use crate::lexicon;
use crate::morphotactics;
use crate::rule::RewriteRule;

fn symbols_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r#"\(.+?\[[A-Z\.,:\(\)'\-"`\$]+?\]|"#,
            r"\)\(\[[A-Z]+?\]|",
            r"-(?:[^\W\d_]|')+?\[[A-z]+?=[A-z]+?\]|",
            r"\+(?:[^\W\d_]|['\.])*?\[[A-z]+?=[A-z0-9]+?\]|",
            r"\)\+\[Proper=(?:True|False)\]|",
            r"\d+(?:\[[A-Z]+?\])?|",
            r"[\(\.,]",
        ))
        .unwrap()
    })
}

/// Paths to the source directories read by the compiler, and the directory
/// its two text artifacts are written to.
pub struct CompilerConfig {
    pub lexicon_dir: PathBuf,
    pub morphotactics_dir: PathBuf,
    pub output_dir: PathBuf,
}

fn sorted_files_with_extension(dir: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|e| e == extension).unwrap_or(false))
        .collect();
    paths.sort();
    Ok(paths)
}

fn lexicon_rules_of_file(path: &Path) -> Result<Vec<RewriteRule>, CompileError> {
    log::info!("reading rewrite rules from {:?}", path);
    let entries = lexicon::read_lexicon_entries(path)?;

    for (&index, entry) in entries.iter() {
        lexicon::validate(entry).map_err(|source| CompileError::Lexicon {
            path: path.to_path_buf(),
            line: index,
            source,
        })?;
    }

    Ok(lexicon::parser::parse(entries.into_values().collect()))
}

/// Parses every `.tsv` file under `lexicon_dir` into validated rewrite rules.
pub fn lexicon_rules(lexicon_dir: &Path) -> Result<Vec<RewriteRule>, CompileError> {
    let paths = sorted_files_with_extension(lexicon_dir, "tsv")?;

    let mut rules = Vec::new();
    for path in &paths {
        rules.extend(lexicon_rules_of_file(path)?);
    }

    if rules.is_empty() {
        return Err(CompileError::NoLexiconRules);
    }

    Ok(rules)
}

fn morphotactics_rules_of_file(path: &Path) -> Result<Vec<RewriteRule>, CompileError> {
    log::info!("reading rewrite rules from {:?}", path);
    let definitions = morphotactics::read_rule_definitions(path)?;

    for (&index, definition) in definitions.iter() {
        morphotactics::validate(definition).map_err(|source| CompileError::Morphotactics {
            path: path.to_path_buf(),
            line: index,
            source,
        })?;
    }

    Ok(morphotactics::parser::parse(
        definitions.into_values().collect(),
    ))
}

/// Parses every `.txt` file under `morphotactics_dir` into validated rewrite
/// rules.
pub fn morphotactics_rules(morphotactics_dir: &Path) -> Result<Vec<RewriteRule>, CompileError> {
    let paths = sorted_files_with_extension(morphotactics_dir, "txt")?;

    let mut rules = Vec::new();
    for path in &paths {
        rules.extend(morphotactics_rules_of_file(path)?);
    }

    if rules.is_empty() {
        return Err(CompileError::NoMorphotacticsRules);
    }

    Ok(rules)
}

/// Removes duplicate rewrite rules, keeping each key's first-seen position
/// (keyed on the 4-tuple of from_state/to_state/input/output) — mirroring
/// `OrderedDict(map(_key_and_value, rule_set.rule))`, whose re-insertion of
/// an existing key updates the value in place without moving it.
pub fn remove_duplicate_rules(rules: Vec<RewriteRule>) -> Vec<RewriteRule> {
    let mut seen: HashMap<(String, String, String, String), ()> = HashMap::new();
    let mut deduped = Vec::with_capacity(rules.len());
    let mut removed = 0;

    for rule in rules {
        let key = (
            rule.from_state.clone(),
            rule.to_state.clone(),
            rule.input.clone(),
            rule.output.clone(),
        );
        if seen.insert(key, ()).is_some() {
            removed += 1;
            continue;
        }
        deduped.push(rule);
    }

    if removed > 0 {
        log::info!("found {} duplicate rewrite rules, removing them", removed);
    }

    deduped
}

/// Extracts FST symbols composing a complex input label.
pub(crate) fn symbols_of_input(label: &str) -> Vec<String> {
    if label == EPSILON {
        return vec![label.to_string()];
    }
    if !label.contains('[') {
        return label.chars().map(|c| c.to_string()).collect();
    }
    symbols_regex()
        .find_iter(label)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extracts FST symbols composing a complex output label.
pub(crate) fn symbols_of_output(label: &str) -> Vec<String> {
    if label == EPSILON {
        return vec![label.to_string()];
    }
    label.chars().map(|c| c.to_string()).collect()
}

/// Generates the content of the complex symbols table file: the union of
/// every non-epsilon, non-single-character symbol used across `rules`,
/// sorted, assigned dense indices starting at the Unicode private-use area.
pub fn complex_symbols_table(rules: &[RewriteRule]) -> String {
    let mut unique_symbols: std::collections::BTreeSet<String> = std::collections::BTreeSet::new();

    for rule in rules {
        for symbol in symbols_of_input(&rule.input) {
            unique_symbols.insert(symbol);
        }
        for symbol in symbols_of_output(&rule.output) {
            unique_symbols.insert(symbol);
        }
    }

    let mut content = String::new();
    let mut index: u32 = 983_040;
    for symbol in unique_symbols.iter().filter(|s| s.chars().count() > 1) {
        content.push_str(&format!("{symbol}\t{index}\n"));
        index += 1;
    }

    content
}

struct StateAllocator {
    index_of: HashMap<String, usize>,
    next: usize,
}

impl StateAllocator {
    fn new() -> Self {
        let mut index_of = HashMap::new();
        index_of.insert(START_STATE.to_string(), 0);
        StateAllocator { index_of, next: 0 }
    }

    fn index_of(&mut self, state: &str) -> usize {
        if let Some(&index) = self.index_of.get(state) {
            return index;
        }
        self.next += 1;
        self.index_of.insert(state.to_string(), self.next);
        self.next
    }

    fn new_state(&mut self) -> usize {
        self.next += 1;
        self.next
    }
}

fn arc_line(from: usize, to: usize, input: &str, output: &str) -> String {
    format!("{from}\t{to}\t{input}\t{output}\n")
}

/// Generates the content of the text FST file: one state-transition arc per
/// line, in AT&T format, followed by a final line naming the accept state's
/// integer index.
pub fn text_fst(rules: &[RewriteRule]) -> String {
    let mut allocator = StateAllocator::new();
    let mut content = String::new();

    for rule in rules {
        let mut input_symbols = symbols_of_input(&rule.input);
        let mut output_symbols = symbols_of_output(&rule.output);

        while input_symbols.len() < output_symbols.len() {
            input_symbols.push(EPSILON.to_string());
        }
        while output_symbols.len() < input_symbols.len() {
            output_symbols.push(EPSILON.to_string());
        }

        let mut from = allocator.index_of(&rule.from_state);

        for (input, output) in input_symbols.iter().zip(output_symbols.iter()) {
            let to = allocator.new_state();
            content.push_str(&arc_line(from, to, input, output));
            from = to;
        }

        let to_state_index = allocator.index_of(&rule.to_state);
        content.push_str(&arc_line(from, to_state_index, EPSILON, EPSILON));
    }

    let accept_index = allocator.index_of(ACCEPT_STATE);
    content.push_str(&format!("{accept_index}\n"));
    content
}

/// Reads and merges the lexicon and morphotactics rule sources named in
/// `config`, de-duplicates them, and returns the resulting rewrite rule set.
pub fn compile_rule_sets(config: &CompilerConfig) -> Result<Vec<RewriteRule>, CompileError> {
    let mut merged = lexicon_rules(&config.lexicon_dir)?;
    merged.extend(morphotactics_rules(&config.morphotactics_dir)?);
    Ok(remove_duplicate_rules(merged))
}

/// Runs the full compiler pipeline and writes `complex_symbols.syms` and
/// `morphotactics.txt` under `config.output_dir`.
pub fn compile_to_files(config: &CompilerConfig) -> Result<(), CompileError> {
    let rules = compile_rule_sets(config)?;

    let symbols_content = complex_symbols_table(&rules);
    let fst_content = text_fst(&rules);

    std::fs::create_dir_all(&config.output_dir)?;

    let symbols_path = config.output_dir.join("complex_symbols.syms");
    std::fs::write(&symbols_path, symbols_content)?;
    log::info!("wrote to {:?}", symbols_path);

    let fst_path = config.output_dir.join("morphotactics.txt");
    std::fs::write(&fst_path, fst_content)?;
    log::info!("wrote to {:?}", fst_path);

    Ok(())
}

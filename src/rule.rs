//! The rewrite rule: the common output of both the lexicon and the
//! morphotactics rule compilers, and the input to the FST text compiler.

/// A single state-transition rule: reading `input` while moving from
/// `from_state` to `to_state` emits `output`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RewriteRule {
    pub from_state: String,
    pub to_state: String,
    pub input: String,
    pub output: String,
}

impl RewriteRule {
    /// The 4-tuple identity used to detect and remove duplicate rules.
    pub fn key(&self) -> (&str, &str, &str, &str) {
        (
            self.from_state.as_str(),
            self.to_state.as_str(),
            self.input.as_str(),
            self.output.as_str(),
        )
    }
}

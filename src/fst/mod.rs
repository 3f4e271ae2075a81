//! A minimal finite-state transducer runtime: just enough to compile a
//! byte/symbol chain, compose two transducers, and enumerate accepted
//! paths. There is no general-purpose arc-level transducer crate in the
//! ecosystem (map/set-oriented crates like `fst` don't expose this), so
//! this is hand-rolled, matching the handful of operations the original
//! toolchain actually used (`compile`, `compose`, `extract_parses`).

mod symbols;

pub use symbols::SymbolTable;

/// A single state-transition arc: consuming `ilabel` while emitting
/// `olabel`, with weight ignored (every produced arc in this crate is
/// unweighted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub ilabel: u32,
    pub olabel: u32,
    pub nextstate: usize,
}

/// An unweighted finite-state transducer: a flat vector of per-state arc
/// lists, a start state, and a single accepting state (every FST built or
/// composed in this crate has exactly one; multi-final-state transducers
/// are out of scope).
#[derive(Debug, Clone)]
pub struct Fst {
    pub arcs: Vec<Vec<Arc>>,
    pub start: usize,
    pub accept: Option<usize>,
}

impl Fst {
    pub fn new() -> Self {
        Fst {
            arcs: vec![Vec::new()],
            start: 0,
            accept: None,
        }
    }

    pub fn num_states(&self) -> usize {
        self.arcs.len()
    }

    /// Appends a fresh state and returns its index.
    pub fn add_state(&mut self) -> usize {
        self.arcs.push(Vec::new());
        self.arcs.len() - 1
    }

    pub fn add_arc(&mut self, from: usize, arc: Arc) {
        self.arcs[from].push(arc);
    }

    /// Whether `state` has no outgoing arcs.
    pub fn is_terminal(&self, state: usize) -> bool {
        self.arcs[state].is_empty()
    }
}

impl Default for Fst {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a linear-chain FST over `symbols`: state 0 is the start, each
/// symbol advances to a freshly allocated state with `ilabel == olabel ==
/// symbol`, and the final state is the accepting state.
pub fn compile_chain(symbols: &[u32]) -> Fst {
    let mut fst = Fst::new();
    let mut from = fst.start;
    for &symbol in symbols {
        let to = fst.add_state();
        fst.add_arc(
            from,
            Arc {
                ilabel: symbol,
                olabel: symbol,
                nextstate: to,
            },
        );
        from = to;
    }
    fst.accept = Some(from);
    fst
}

/// Sorts the outgoing arcs of every state by output label, the precondition
/// `compose` relies on for its merge-style arc scan.
pub fn arcsort_by_output(fst: &mut Fst) {
    for arcs in fst.arcs.iter_mut() {
        arcs.sort_by_key(|a| a.olabel);
    }
}

/// Composes `left` with `right`: the result accepts input `x` and produces
/// output `z` if there is some `y` such that `left` maps `x` to `y` and
/// `right` maps `y` to `z`. Matching is a brute-force scan over each state's
/// outgoing arcs, so [`arcsort_by_output`] isn't load-bearing here; callers
/// still arcsort before composing to mirror the calling convention of the
/// source toolchain this is grounded on.
///
/// The compiled analyzer transducer freely mixes real symbols with epsilon
/// on either tape (padding arcs, state-closing arcs), so matching also lets
/// either side advance alone on an epsilon: a `left` arc with `olabel == 0`
/// advances `left` without requiring a matching `right` arc, and a `right`
/// arc with `ilabel == 0` advances `right` without consuming a `left` arc.
pub fn compose(left: &Fst, right: &Fst) -> Fst {
    use std::collections::{HashMap, VecDeque};

    let mut result = Fst::new();
    let mut index_of: HashMap<(usize, usize), usize> = HashMap::new();
    index_of.insert((left.start, right.start), result.start);

    let mut queue = VecDeque::new();
    queue.push_back((left.start, right.start));

    let mut accept_pair = None;

    while let Some((l, r)) = queue.pop_front() {
        let from = index_of[&(l, r)];

        let state_of = |index_of: &mut HashMap<(usize, usize), usize>,
                             result: &mut Fst,
                             queue: &mut VecDeque<(usize, usize)>,
                             pair: (usize, usize)| {
            *index_of.entry(pair).or_insert_with(|| {
                let idx = result.add_state();
                queue.push_back(pair);
                idx
            })
        };

        for l_arc in &left.arcs[l] {
            if l_arc.olabel == 0 {
                let pair = (l_arc.nextstate, r);
                let to = state_of(&mut index_of, &mut result, &mut queue, pair);
                result.add_arc(
                    from,
                    Arc {
                        ilabel: l_arc.ilabel,
                        olabel: 0,
                        nextstate: to,
                    },
                );
                continue;
            }

            for r_arc in &right.arcs[r] {
                if r_arc.ilabel != l_arc.olabel {
                    continue;
                }
                let pair = (l_arc.nextstate, r_arc.nextstate);
                let to = state_of(&mut index_of, &mut result, &mut queue, pair);
                result.add_arc(
                    from,
                    Arc {
                        ilabel: l_arc.ilabel,
                        olabel: r_arc.olabel,
                        nextstate: to,
                    },
                );
            }
        }

        for r_arc in &right.arcs[r] {
            if r_arc.ilabel != 0 {
                continue;
            }
            let pair = (l, r_arc.nextstate);
            let to = state_of(&mut index_of, &mut result, &mut queue, pair);
            result.add_arc(
                from,
                Arc {
                    ilabel: 0,
                    olabel: r_arc.olabel,
                    nextstate: to,
                },
            );
        }

        if left.accept == Some(l) && right.accept == Some(r) {
            accept_pair = Some(from);
        }
    }

    result.accept = accept_pair;
    result
}

/// Reads the tape (`ilabel`s or `olabel`s, selected by `use_input_tape`)
/// of every accepting path through `fst`, starting at `state`.
///
/// Mirrors `turkish_morphology/fst.py`'s `extract_parses`: a DFS that joins
/// the chosen label of each arc along a path from `state` to the accepting
/// state, skipping epsilon (symbol index 0).
pub fn extract_parses(
    fst: &Fst,
    state: usize,
    use_input_tape: bool,
    symbol_table: &SymbolTable,
) -> Vec<String> {
    fn walk(
        fst: &Fst,
        state: usize,
        use_input_tape: bool,
        symbol_table: &SymbolTable,
        prefix: &mut Vec<u8>,
        out: &mut Vec<String>,
    ) {
        if fst.is_terminal(state) {
            if fst.accept == Some(state) {
                out.push(String::from_utf8_lossy(prefix).into_owned());
            }
            return;
        }

        for arc in &fst.arcs[state] {
            let label = if use_input_tape { arc.ilabel } else { arc.olabel };
            let appended = if label == 0 {
                0
            } else if let Some(symbol) = symbol_table.find(label) {
                prefix.extend_from_slice(symbol.as_bytes());
                symbol.len()
            } else if label < 256 {
                // Every single-byte symbol interns to its own byte value
                // (see SymbolTable::intern), so an untracked low label is
                // still safe to treat as that literal ASCII byte.
                prefix.push(label as u8);
                1
            } else {
                0
            };

            walk(fst, arc.nextstate, use_input_tape, symbol_table, prefix, out);
            prefix.truncate(prefix.len() - appended);
        }
    }

    let mut out = Vec::new();
    let mut prefix = Vec::new();
    walk(fst, state, use_input_tape, symbol_table, &mut prefix, &mut out);
    out
}

//! Rule table: the automaton description, parsed and interned.
//!
//! The description is line-oriented:
//!
//! ```text
//! # comment
//! Start_state = S0
//! Final_state = S_ID, S_NUM
//! S0 a S_ID
//! S0 SPACE S_BLANK
//! ```
//!
//! Blank lines and lines whose first non-blank character is `#` are
//! ignored. A line is a directive when the text before its first `=`
//! trims to `Start_state` or `Final_state`; every other line is read as a
//! `<from> <input> <to>` transition. `<input>` is `SPACE` or exactly one
//! character. Malformed transition lines are skipped without failing the
//! load; only a table with zero transitions is rejected.
//!
//! State names are interned to [`StateId`]s on the way in, so stepping the
//! automaton never hashes a string.

use std::fmt;
use std::io;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;
use tracing::{debug, warn};

use crate::Automaton;

/// The Pascal-S automaton description shipped with the crate.
pub const BUILTIN_RULES: &str = include_str!("../rules/pascal.dfa");

/// Origin label used for the embedded description.
pub const BUILTIN_ORIGIN: &str = "<builtin>";

/// Compact handle for an automaton state.
///
/// Only meaningful for the [`RuleTable`] that issued it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct StateId(u32);

impl StateId {
    /// Get the index into the table's name list.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateId({})", self.0)
    }
}

/// Why a rule description could not be turned into a table.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("{0}")]
    Io(#[from] io::Error),

    /// The description parsed, but defined no transitions.
    #[error("no transitions defined")]
    NoTransitions,
}

/// Failure to load a rule table.
///
/// Callers may recover by switching to the fallback scanner.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot load rules from '{origin}': {reason}")]
    EmptyOrUnreadable {
        origin: String,
        #[source]
        reason: LoadFailure,
    },
}

impl LoadError {
    /// Where the rules were being loaded from.
    pub fn origin(&self) -> &str {
        match self {
            LoadError::EmptyOrUnreadable { origin, .. } => origin,
        }
    }
}

/// Immutable automaton description: transitions, start state, final states.
///
/// Built once, then shared read-only by any number of scan sessions.
#[derive(Clone)]
pub struct RuleTable {
    /// `StateId` -> name.
    names: Vec<String>,
    /// Name -> `StateId`.
    ids: FxHashMap<String, StateId>,
    transitions: FxHashMap<(StateId, char), StateId>,
    start: StateId,
    finals: FxHashSet<StateId>,
    skipped_lines: usize,
    origin: String,
}

impl RuleTable {
    /// Parse a rule description held in memory.
    ///
    /// `origin` names the source in logs and errors (usually a path).
    pub fn parse(source: &str, origin: impl Into<String>) -> Result<Self, LoadError> {
        let origin = origin.into();
        let mut builder = Builder::default();

        for (index, line) in source.lines().enumerate() {
            builder.line(index + 1, line);
        }

        builder.finish(origin)
    }

    /// Read and parse a rule description from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        match std::fs::read_to_string(path) {
            Ok(source) => Self::parse(&source, origin),
            Err(err) => Err(LoadError::EmptyOrUnreadable {
                origin,
                reason: LoadFailure::Io(err),
            }),
        }
    }

    /// Parse the embedded Pascal-S description.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::parse(BUILTIN_RULES, BUILTIN_ORIGIN)
    }

    /// A stepping view over this table.
    #[inline]
    pub fn automaton(&self) -> Automaton<'_> {
        Automaton::new(self)
    }

    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    #[inline]
    pub fn is_final(&self, state: StateId) -> bool {
        self.finals.contains(&state)
    }

    /// Look up the transition for `(state, input)`. `None` means reject.
    #[inline]
    pub fn transition(&self, state: StateId, input: char) -> Option<StateId> {
        self.transitions.get(&(state, input)).copied()
    }

    /// Name of a state, as written in the description.
    pub fn state_name(&self, state: StateId) -> &str {
        self.names.get(state.index()).map_or("", String::as_str)
    }

    /// Resolve a state name to its id, if the description mentions it.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.ids.get(name).copied()
    }

    /// Final states, in no particular order.
    pub fn final_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.finals.iter().copied()
    }

    pub fn state_count(&self) -> usize {
        self.names.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Number of non-blank, non-comment lines that were not understood.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleTable")
            .field("origin", &self.origin)
            .field("start", &self.state_name(self.start))
            .field("states", &self.names.len())
            .field("finals", &self.finals.len())
            .field("transitions", &self.transitions.len())
            .finish_non_exhaustive()
    }
}

/// Accumulates a table line by line.
#[derive(Default)]
struct Builder {
    names: Vec<String>,
    ids: FxHashMap<String, StateId>,
    transitions: FxHashMap<(StateId, char), StateId>,
    start: Option<StateId>,
    finals: FxHashSet<StateId>,
    skipped_lines: usize,
}

impl Builder {
    fn intern(&mut self, name: &str) -> StateId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = StateId(u32::try_from(self.names.len()).unwrap_or(u32::MAX));
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        id
    }

    fn line(&mut self, line_no: usize, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return;
        }

        if let Some((key, value)) = trimmed.split_once('=') {
            match key.trim() {
                "Start_state" => {
                    self.start = Some(self.intern(value.trim()));
                    return;
                }
                "Final_state" => {
                    for name in value.split(',').map(str::trim) {
                        if !name.is_empty() {
                            let id = self.intern(name);
                            self.finals.insert(id);
                        }
                    }
                    return;
                }
                _ => {}
            }
        }

        let mut fields = trimmed.split_whitespace();
        let (Some(from), Some(input), Some(to)) = (fields.next(), fields.next(), fields.next())
        else {
            self.skip(line_no, trimmed, "expected `<from> <input> <to>`");
            return;
        };
        let Some(input) = parse_input(input) else {
            self.skip(line_no, trimmed, "input must be SPACE or a single character");
            return;
        };

        let from = self.intern(from);
        let to = self.intern(to);
        self.transitions.insert((from, input), to);
    }

    fn skip(&mut self, line_no: usize, line: &str, reason: &str) {
        debug!(line = line_no, text = line, reason, "skipping rule line");
        self.skipped_lines += 1;
    }

    fn finish(mut self, origin: String) -> Result<RuleTable, LoadError> {
        if self.transitions.is_empty() {
            return Err(LoadError::EmptyOrUnreadable {
                origin,
                reason: LoadFailure::NoTransitions,
            });
        }

        let start = match self.start {
            Some(start) => start,
            None => {
                warn!(%origin, "no Start_state directive; every scan will fail");
                self.intern("")
            }
        };

        debug!(
            %origin,
            states = self.names.len(),
            finals = self.finals.len(),
            transitions = self.transitions.len(),
            skipped = self.skipped_lines,
            "rule table loaded"
        );

        Ok(RuleTable {
            names: self.names,
            ids: self.ids,
            transitions: self.transitions,
            start,
            finals: self.finals,
            skipped_lines: self.skipped_lines,
            origin,
        })
    }
}

/// Decode an input field: `SPACE` or exactly one character.
fn parse_input(field: &str) -> Option<char> {
    if field == "SPACE" {
        return Some(' ');
    }
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

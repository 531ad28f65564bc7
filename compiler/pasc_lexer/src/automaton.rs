//! Pure state stepper over a [`RuleTable`].

use crate::{RuleTable, StateId};

/// Borrowed, copyable view of a rule table as a DFA.
///
/// No state of its own: any number of scans may step the same automaton.
#[derive(Clone, Copy, Debug)]
pub struct Automaton<'t> {
    table: &'t RuleTable,
}

impl<'t> Automaton<'t> {
    pub fn new(table: &'t RuleTable) -> Self {
        Self { table }
    }

    #[inline]
    pub fn start(self) -> StateId {
        self.table.start()
    }

    /// Next state for `input`, or `None` to reject.
    #[inline]
    pub fn step(self, state: StateId, input: char) -> Option<StateId> {
        self.table.transition(state, input)
    }

    #[inline]
    pub fn is_final(self, state: StateId) -> bool {
        self.table.is_final(state)
    }

    pub fn state_name(self, state: StateId) -> &'t str {
        self.table.state_name(state)
    }

    pub fn table(self) -> &'t RuleTable {
        self.table
    }

    /// Run the whole of `input` from the start state.
    ///
    /// Returns the state reached, or `None` if some character is rejected.
    /// Finality is not checked.
    pub fn walk(self, input: &str) -> Option<StateId> {
        input
            .chars()
            .try_fold(self.start(), |state, ch| self.step(state, ch))
    }
}

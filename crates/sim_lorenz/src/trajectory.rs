//! Integrator output.

use serde::Serialize;

use crate::state::LorenzState;

/// The ordered states produced by one Lorenz run.
///
/// Index 0 is the initial state and every later entry is one Euler step past
/// the previous one. The sequence is only ever appended to by the integrator
/// and is read-only afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LorenzTrajectory {
    states: Vec<LorenzState>,
}

impl LorenzTrajectory {
    pub(crate) fn with_capacity(initial: LorenzState, capacity: usize) -> Self {
        let mut states = Vec::with_capacity(capacity);
        states.push(initial);
        Self { states }
    }

    pub(crate) fn push(&mut self, state: LorenzState) {
        self.states.push(state);
    }

    /// All states in order.
    #[must_use]
    pub fn states(&self) -> &[LorenzState] {
        &self.states
    }

    /// Number of states (`num_steps + 1`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`: a trajectory contains at least its initial state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn initial(&self) -> LorenzState {
        self.states[0]
    }

    #[must_use]
    pub fn last(&self) -> LorenzState {
        self.states[self.states.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LorenzState> {
        self.states.iter()
    }

    /// The x coordinate sequence.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.states.iter().map(LorenzState::x).collect()
    }

    /// The y coordinate sequence.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.states.iter().map(LorenzState::y).collect()
    }

    /// The z coordinate sequence.
    #[must_use]
    pub fn zs(&self) -> Vec<f64> {
        self.states.iter().map(LorenzState::z).collect()
    }

    /// Index of the first state with a non-finite coordinate, if any.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.states.iter().position(|s| !s.is_finite())
    }
}

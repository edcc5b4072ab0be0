//! # Proof state.
//!
//! The ordered collection of goals that are still open in a derivation.
//! The proof is complete when no goal remains.

use super::{Formula, Goal, Result, Rule};
use crate::{errorstr, logdebug};
use std::{collections::VecDeque, fmt};

/// Default number of steps that can be undone.
pub const DEFAULT_UNDO_LIMIT: usize = 1000;

/// All the open goals of a derivation, plus the previous states for `undo`.
///
/// Each snapshot copies the list of goals and their assumption lists, but
/// shares every formula with the current goals. At most `undo_limit`
/// snapshots are kept; older ones are dropped.
#[derive(Clone, Debug)]
pub struct ProofState {
    goals: Vec<Goal>,
    history: VecDeque<Vec<Goal>>,
    undo_limit: usize,
}

impl ProofState {
    /// Start a derivation of `target` from `assumptions`.
    pub fn new<I>(assumptions: I, target: Formula) -> Self
    where
        I: IntoIterator<Item = Formula>,
    {
        Self::from_goal(Goal::new(assumptions, target))
    }

    /// Start a derivation with a single goal.
    pub fn from_goal(g: Goal) -> Self {
        ProofState {
            goals: vec![g],
            history: VecDeque::new(),
            undo_limit: DEFAULT_UNDO_LIMIT,
        }
    }

    /// Keep at most `n` steps for `undo`. `0` disables undo.
    pub fn set_undo_limit(&mut self, n: usize) {
        self.undo_limit = n;
        while self.history.len() > n {
            self.history.pop_front();
        }
    }

    /// Open goals, in order.
    #[inline]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Number of open goals.
    #[inline]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Is the derivation complete?
    #[inline]
    pub fn is_done(&self) -> bool {
        self.goals.is_empty()
    }

    /// The `i`-th open goal (0-based).
    pub fn goal(&self, i: usize) -> Option<&Goal> {
        self.goals.get(i)
    }

    /// Apply `rule` to the `i`-th goal (0-based).
    ///
    /// On success the goal is replaced, in place, by the subgoals the rule
    /// produced, and their number is returned. On failure the state is
    /// unchanged.
    pub fn apply(&mut self, i: usize, rule: Rule) -> Result<usize> {
        let g = self.goals.get(i).ok_or_else(|| {
            errorstr!(
                "no goal number {} ({} open goal(s))",
                i + 1,
                self.goals.len()
            )
        })?;
        let sub = rule.apply(g)?;
        let n = sub.len();
        logdebug!("{} on goal {}: {} subgoal(s)", rule, i + 1, n);

        if self.undo_limit > 0 {
            if self.history.len() == self.undo_limit {
                self.history.pop_front();
            }
            self.history.push_back(self.goals.clone());
        }
        self.goals.splice(i..i + 1, sub);
        Ok(n)
    }

    /// Go back to the state before the last successful `apply`.
    pub fn undo(&mut self) -> Result<()> {
        let prev = self
            .history
            .pop_back()
            .ok_or_else(|| errorstr!("nothing to undo"))?;
        self.goals = prev;
        Ok(())
    }

    /// Number of steps that can be undone.
    pub fn n_steps(&self) -> usize {
        self.history.len()
    }
}

mod impls {
    use super::*;

    impl fmt::Display for ProofState {
        fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
            if self.goals.is_empty() {
                return writeln!(out, "No more goals.");
            }
            for (i, g) in self.goals.iter().enumerate() {
                writeln!(out, "{}: {}", i + 1, g)?;
            }
            Ok(())
        }
    }
}

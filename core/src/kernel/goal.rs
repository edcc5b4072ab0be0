//! # Goals.
//!
//! A goal is a sequent `assumptions |-- target` that remains to be proved.

use super::Formula;
use std::fmt;

/// A pending proof obligation.
///
/// Assumptions are kept in insertion order, and no two of them are
/// syntactically equal.
#[derive(Clone, PartialEq, Eq)]
pub struct Goal {
    assumptions: Vec<Formula>,
    target: Formula,
}

impl Goal {
    /// New goal. Duplicate assumptions are dropped, keeping the first one.
    pub fn new<I>(assumptions: I, target: Formula) -> Self
    where
        I: IntoIterator<Item = Formula>,
    {
        let mut g = Goal {
            assumptions: vec![],
            target,
        };
        for a in assumptions {
            g.add_assumption(a);
        }
        g
    }

    /// Assumptions of the goal, in insertion order.
    #[inline]
    pub fn assumptions(&self) -> &[Formula] {
        &self.assumptions
    }

    /// Formula to prove.
    #[inline]
    pub fn target(&self) -> &Formula {
        &self.target
    }

    /// Is `f` syntactically one of the assumptions?
    pub fn has_assumption(&self, f: &Formula) -> bool {
        self.assumptions.iter().any(|a| a.equal_to(f))
    }

    /// Add `f` to the assumptions, unless it is already there.
    ///
    /// Returns `true` if `f` was added.
    pub fn add_assumption(&mut self, f: Formula) -> bool {
        if self.has_assumption(&f) {
            false
        } else {
            self.assumptions.push(f);
            true
        }
    }

    /// Replace the target.
    pub fn set_target(&mut self, f: Formula) {
        self.target = f;
    }

    /// Remove the assumption syntactically equal to `f`, if any.
    pub fn remove_assumption(&mut self, f: &Formula) -> Option<Formula> {
        let i = self.assumptions.iter().position(|a| a.equal_to(f))?;
        Some(self.assumptions.remove(i))
    }

    /// Remove and return the `i`-th assumption.
    pub(super) fn remove_assumption_at(&mut self, i: usize) -> Formula {
        self.assumptions.remove(i)
    }

    /// Replace the `i`-th assumption by `f`, keeping its position.
    ///
    /// If `f` already occurs elsewhere, the `i`-th assumption is removed instead.
    pub(super) fn replace_assumption(&mut self, i: usize, f: Formula) {
        if self
            .assumptions
            .iter()
            .enumerate()
            .any(|(j, a)| j != i && a.equal_to(&f))
        {
            self.assumptions.remove(i);
        } else {
            self.assumptions[i] = f;
        }
    }
}

mod impls {
    use super::*;

    impl fmt::Display for Goal {
        fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
            let mut first = true;
            for a in &self.assumptions {
                if first {
                    first = false;
                } else {
                    write!(out, " , ")?;
                }
                write!(out, "{}", a)?;
            }
            if !first {
                write!(out, " ")?;
            }
            write!(out, "|-- {}", self.target)
        }
    }

    impl fmt::Debug for Goal {
        fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
            write!(out, "{}", self)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn atom(s: &str) -> Formula {
        Formula::mk_atom(s)
    }

    #[test]
    fn test_new_dedup() {
        let g = Goal::new(vec![atom("p"), atom("q"), atom("p")], atom("r"));
        assert_eq!(g.assumptions().len(), 2);
        assert_eq!(g.to_string(), "p , q |-- r");
    }

    #[test]
    fn test_print_no_assumptions() {
        let g = Goal::new(vec![], Formula::mk_true());
        assert_eq!(g.to_string(), "|-- True");
    }

    #[test]
    fn test_add_remove() {
        let mut g = Goal::new(vec![atom("p")], atom("r"));
        assert!(!g.add_assumption(atom("p")));
        assert!(g.add_assumption(Formula::mk_not(atom("p"))));
        assert!(g.has_assumption(&Formula::mk_not(atom("p"))));
        assert!(g.remove_assumption(&atom("q")).is_none());
        assert!(g.remove_assumption(&atom("p")).is_some());
        assert_eq!(g.assumptions().len(), 1);
        g.set_target(atom("s"));
        assert_eq!(g.to_string(), "~p |-- s");
    }

    #[test]
    fn test_remove_at() {
        let a1 = Formula::mk_and(atom("a"), atom("b"));
        let a2 = Formula::mk_and(atom("c"), atom("d"));
        let mut g = Goal::new(vec![atom("p"), a1.clone(), a2.clone()], atom("r"));
        let t = g.remove_assumption_at(1);
        assert!(t.equal_to(&a1));
        assert_eq!(g.assumptions(), &[atom("p"), a2][..]);
    }

    #[test]
    fn test_replace_assumption() {
        let nnp = Formula::mk_not(Formula::mk_not(atom("p")));
        let mut g = Goal::new(vec![nnp.clone(), atom("q")], atom("r"));
        g.replace_assumption(0, atom("p"));
        assert_eq!(g.to_string(), "p , q |-- r");

        let mut g = Goal::new(vec![atom("p"), nnp], atom("r"));
        g.replace_assumption(1, atom("p"));
        assert_eq!(g.to_string(), "p |-- r");
    }
}

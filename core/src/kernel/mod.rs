//! Kernel: Formulas, Goals and Rules.

pub type Ref<T> = std::rc::Rc<T>;

pub use crate::error::{Error, Result};

pub mod formula;
pub mod goal;
pub mod proof_state;
pub mod rules;
pub mod symbol;

pub use formula::{Formula, FormulaType, FormulaView};
pub use goal::Goal;
pub use proof_state::ProofState;
pub use rules::{Rule, Subgoals};
pub use symbol::Variable;
pub use FormulaView::*;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_var() {
        let s1 = Variable::from_str("a");
        let s2 = Variable::from_str("a");
        let s3 = Variable::from_str("b");
        assert_eq!(s1, s2);
        assert_ne!(s1, s3);
        assert_eq!(s1.name(), "a");
    }

    #[test]
    fn test_sharing() {
        let p = Formula::mk_atom("p");
        let q = Formula::mk_atom("q");
        let pq = Formula::mk_and(p.clone(), q);
        let g1 = Goal::new(vec![pq.clone()], p.clone());
        let g2 = Goal::new(vec![], pq.clone());
        // both goals point to the same node
        assert!(Formula::ptr_eq(&g1.assumptions()[0], g2.target()));
    }

    #[test]
    fn test_assume() {
        let p = Formula::mk_atom("p");
        let g = Goal::new(vec![p.clone()], p.clone());
        let sub = Rule::Assumption.apply(&g).unwrap();
        assert!(sub.is_empty());
    }
}

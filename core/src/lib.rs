//! # Natural deduction kernel.
//!
//! This library contains a small kernel for propositional natural deduction:
//! immutable, structurally shared formulas, goals (sequents still to be
//! proved), and a fixed catalogue of inference rules that transform goals
//! into subgoals.
//!
//! It also contains:
//! - a proof state, the collection of open goals a driver works on (in `kernel::proof_state`)
//! - barebone syntax for formulas and sequents (in `syntax`)
//!
//! The kernel never decides which rule to apply; it only checks that
//! a rule's precondition holds and performs the transformation.

#![deny(unsafe_code)]

pub mod error;
pub mod kernel;
pub mod syntax;

pub use error::{Error, Result};
pub use kernel::FormulaView::*;
pub use kernel::{Formula, FormulaType, FormulaView, Goal, ProofState, Rule, Subgoals, Variable};
pub use syntax::{parse_formula, parse_goal};

pub(crate) mod macros {
    #[allow(unused_macros)]
    #[macro_export]
    macro_rules! ignore{
        () => { () };
        ($t :expr) => {{
            #[allow(unused)]
            let _ = $t;
        } };
        ($t0: expr, $($t:expr),*) => {{
            #[allow(unused)]
            let _ = $t0;
            crate::ignore!($($t),*)
        }}
    }

    #[macro_export]
    macro_rules! logtrace{
        ($($t:expr),*) => {{
            {
                #[cfg(feature="logging")]
                log::trace!($($t),*)
            }

            {
                #[cfg(not(feature="logging"))]
                crate::ignore!($($t),*)
            }
        }}
    }

    #[macro_export]
    macro_rules! logdebug{
        ($($t:expr),*) => {{
            {
                #[cfg(feature="logging")]
                log::debug!($($t),*)
            }

            {
                #[cfg(not(feature="logging"))]
                crate::ignore!($($t),*)
            }
        }}
    }

    #[macro_export]
    macro_rules! errorstr{
        ($($t:expr),*) => {
            crate::error::Error::new_string(format!($($t),*))
        }
    }
}

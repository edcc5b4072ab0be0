//! # Propositional formulas

use super::{symbol::Variable, Ref};
use std::fmt;

/// A propositional formula.
///
/// The formula is refcounted and is thus cheaply clonable. Sub-formulas
/// are shared between all the formulas (and goals) that contain them,
/// and are never modified after construction.
#[derive(Clone)]
pub struct Formula(Ref<FormulaView>);

/// The public view of a formula's root.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum FormulaView {
    FTrue,
    FFalse,
    FAtom(Variable),
    FNot(Formula),
    FAnd(Formula, Formula),
    FOr(Formula, Formula),
    FImp(Formula, Formula),
    FIff(Formula, Formula),
}

pub use FormulaView::*;

/// Tag for the root connective of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormulaType {
    True,
    False,
    Atom,
    Not,
    And,
    Or,
    Imp,
    Iff,
}

impl FormulaView {
    /// Tag of this view.
    pub fn ty(&self) -> FormulaType {
        match self {
            FTrue => FormulaType::True,
            FFalse => FormulaType::False,
            FAtom(_) => FormulaType::Atom,
            FNot(_) => FormulaType::Not,
            FAnd(..) => FormulaType::And,
            FOr(..) => FormulaType::Or,
            FImp(..) => FormulaType::Imp,
            FIff(..) => FormulaType::Iff,
        }
    }
}

impl Formula {
    #[inline]
    fn make_(v: FormulaView) -> Self {
        Formula(Ref::new(v))
    }

    /// The constant `True`.
    pub fn mk_true() -> Self {
        Self::make_(FTrue)
    }

    /// The constant `False`.
    pub fn mk_false() -> Self {
        Self::make_(FFalse)
    }

    /// An atom named `v`.
    pub fn mk_atom<V: Into<Variable>>(v: V) -> Self {
        Self::make_(FAtom(v.into()))
    }

    /// `~a`
    pub fn mk_not(a: Formula) -> Self {
        Self::make_(FNot(a))
    }

    /// `(a /\ b)`
    pub fn mk_and(a: Formula, b: Formula) -> Self {
        Self::make_(FAnd(a, b))
    }

    /// `(a \/ b)`
    pub fn mk_or(a: Formula, b: Formula) -> Self {
        Self::make_(FOr(a, b))
    }

    /// `(a => b)`
    pub fn mk_imp(a: Formula, b: Formula) -> Self {
        Self::make_(FImp(a, b))
    }

    /// `(a <=> b)`
    pub fn mk_iff(a: Formula, b: Formula) -> Self {
        Self::make_(FIff(a, b))
    }

    /// View the formula's root.
    #[inline]
    pub fn view(&self) -> &FormulaView {
        &self.0
    }

    /// Tag of the root connective.
    #[inline]
    pub fn ty(&self) -> FormulaType {
        self.0.ty()
    }

    /// Do `self` and `other` point to the same node?
    #[inline]
    pub fn ptr_eq(&self, other: &Formula) -> bool {
        Ref::ptr_eq(&self.0, &other.0)
    }

    /// Syntactic equality.
    ///
    /// Two formulas are equal iff they have the same connective and
    /// their operands are equal, in the same order. `a /\ b` and
    /// `b /\ a` are distinct.
    pub fn equal_to(&self, other: &Formula) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        match (self.view(), other.view()) {
            (FTrue, FTrue) | (FFalse, FFalse) => true,
            (FAtom(v1), FAtom(v2)) => v1 == v2,
            (FNot(a1), FNot(a2)) => a1.equal_to(a2),
            (FAnd(a1, b1), FAnd(a2, b2))
            | (FOr(a1, b1), FOr(a2, b2))
            | (FImp(a1, b1), FImp(a2, b2))
            | (FIff(a1, b1), FIff(a2, b2)) => a1.equal_to(a2) && b1.equal_to(b2),
            _ => false,
        }
    }

    /// One step of simplification at the root.
    ///
    /// `a <=> b` becomes `(a => b) /\ (b => a)`; every other formula is
    /// returned as is. Sub-formulas are not simplified.
    pub fn simplify(&self) -> Formula {
        match self.view() {
            FIff(a, b) => Formula::mk_and(
                Formula::mk_imp(a.clone(), b.clone()),
                Formula::mk_imp(b.clone(), a.clone()),
            ),
            _ => self.clone(),
        }
    }

    /// Is this `True`?
    pub fn is_true(&self) -> bool {
        match self.view() {
            FTrue => true,
            _ => false,
        }
    }

    /// Is this `False`?
    pub fn is_false(&self) -> bool {
        match self.view() {
            FFalse => true,
            _ => false,
        }
    }

    /// View as an atom.
    pub fn as_atom(&self) -> Option<&Variable> {
        if let FAtom(ref v) = self.view() {
            Some(v)
        } else {
            None
        }
    }

    /// View as a negation.
    pub fn as_not(&self) -> Option<&Formula> {
        if let FNot(ref a) = self.view() {
            Some(a)
        } else {
            None
        }
    }

    /// View as a conjunction.
    pub fn as_and(&self) -> Option<(&Formula, &Formula)> {
        if let FAnd(ref a, ref b) = self.view() {
            Some((a, b))
        } else {
            None
        }
    }

    /// View as a disjunction.
    pub fn as_or(&self) -> Option<(&Formula, &Formula)> {
        if let FOr(ref a, ref b) = self.view() {
            Some((a, b))
        } else {
            None
        }
    }

    /// View as an implication.
    pub fn as_imp(&self) -> Option<(&Formula, &Formula)> {
        if let FImp(ref a, ref b) = self.view() {
            Some((a, b))
        } else {
            None
        }
    }

    /// View as an equivalence.
    pub fn as_iff(&self) -> Option<(&Formula, &Formula)> {
        if let FIff(ref a, ref b) = self.view() {
            Some((a, b))
        } else {
            None
        }
    }

    /// Both operands of a binary connective.
    pub fn operands(&self) -> Option<(&Formula, &Formula)> {
        match self.view() {
            FAnd(a, b) | FOr(a, b) | FImp(a, b) | FIff(a, b) => Some((a, b)),
            FTrue | FFalse | FAtom(_) | FNot(_) => None,
        }
    }

    /// Left operand of a binary connective.
    pub fn operand1(&self) -> Option<&Formula> {
        self.operands().map(|(a, _)| a)
    }

    /// Right operand of a binary connective.
    pub fn operand2(&self) -> Option<&Formula> {
        self.operands().map(|(_, b)| b)
    }

    /// `~~a.strip_double_neg()` is `Some(a)`.
    pub fn strip_double_neg(&self) -> Option<&Formula> {
        self.as_not()?.as_not()
    }

    fn pp_(&self, out: &mut fmt::Formatter) -> fmt::Result {
        let (a, op, b) = match self.view() {
            FTrue => return write!(out, "True"),
            FFalse => return write!(out, "False"),
            FAtom(v) => return write!(out, "{}", v.name()),
            FNot(a) => {
                write!(out, "~")?;
                return a.pp_(out);
            }
            FAnd(a, b) => (a, "/\\", b),
            FOr(a, b) => (a, "\\/", b),
            FImp(a, b) => (a, "=>", b),
            FIff(a, b) => (a, "<=>", b),
        };
        write!(out, "(")?;
        a.pp_(out)?;
        write!(out, " {} ", op)?;
        b.pp_(out)?;
        write!(out, ")")
    }
}

mod impls {
    use super::*;

    impl fmt::Display for Formula {
        fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
            self.pp_(out)
        }
    }

    impl fmt::Debug for Formula {
        fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
            self.pp_(out)
        }
    }

    impl fmt::Display for FormulaType {
        fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
            let s = match self {
                FormulaType::True => "true",
                FormulaType::False => "false",
                FormulaType::Atom => "atom",
                FormulaType::Not => "negation",
                FormulaType::And => "conjunction",
                FormulaType::Or => "disjunction",
                FormulaType::Imp => "implication",
                FormulaType::Iff => "equivalence",
            };
            write!(out, "{}", s)
        }
    }

    impl Eq for Formula {}
    impl PartialEq for Formula {
        fn eq(&self, other: &Self) -> bool {
            self.equal_to(other)
        }
    }

    impl std::hash::Hash for Formula {
        fn hash<H: std::hash::Hasher>(&self, h: &mut H) {
            // structural, to agree with `equal_to`
            self.view().hash(h)
        }
    }

    impl From<Variable> for Formula {
        fn from(v: Variable) -> Self {
            Formula::mk_atom(v)
        }
    }
}

//! # Inference rules.
//!
//! Each rule takes a goal and either closes it, or replaces it by one or two
//! subgoals. A rule never modifies the goal it is given: on success it
//! returns fresh goals (which share their formulas with the input goal),
//! and on failure it returns an error built by `Error::rule_not_applicable`.
//!
//! ```text
//!                                  ------>  G, A |-- A              (assumption)
//!  G, A |-- False                  ------>  G |-- ~A                (notI)
//!  G |-- A                         ------>  G, ~A |-- C             (notE)
//!  G |-- A; G |-- B                ------>  G |-- A /\ B            (conjI)
//!  G, A |-- C                      ------>  G, A /\ B |-- C         (conjE1)
//!  G, B |-- C                      ------>  G, A /\ B |-- C         (conjE2)
//!  G, A, B |-- C                   ------>  G, A /\ B |-- C         (conjE)
//!  G |-- A                         ------>  G |-- A \/ B            (disjI1)
//!  G |-- B                         ------>  G |-- A \/ B            (disjI2)
//!  G, A |-- C; G, B |-- C          ------>  G, A \/ B |-- C         (disjE)
//!  G, A |-- B                      ------>  G |-- A => B            (impI)
//!  G |-- A; G, B |-- C             ------>  G, A => B |-- C         (impE)
//!  G |-- (A => B) /\ (B => A)      ------>  G |-- A <=> B           (iffI)
//!  G, (A => B) /\ (B => A) |-- C   ------>  G, A <=> B |-- C        (iffE)
//!                                  ------>  G, False |-- C          (falseE)
//!                                  ------>  G |-- True              (trueI)
//!                                  ------>  G |-- A \/ ~A           (excludedMiddle)
//!  G |-- ~~A                       ------>  G |-- A                 (doubleNegationI)
//!  G, A |-- C                      ------>  G, ~~A |-- C            (doubleNegationE)
//!  G |-- A                         ------>  G |-- ~~A               (doubleNegationE, no `~~` assumption)
//!  G, ~A |-- False                 ------>  G |-- A                 (contradiction)
//! ```

use super::{Error, Formula, Goal, Result};
use crate::{errorstr, logdebug, logtrace};
use smallvec::{smallvec, SmallVec};
use std::{fmt, str::FromStr};

/// The goals that replace a goal after a rule application.
///
/// Empty means the goal is closed.
pub type Subgoals = SmallVec<[Goal; 2]>;

/// An inference rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Assumption,
    NotI,
    ConjI,
    DisjI1,
    DisjI2,
    ImpI,
    TrueI,
    IffI,
    NotE,
    ConjE1,
    ConjE2,
    ConjE,
    DisjE,
    ImpE,
    FalseE,
    IffE,
    ExcludedMiddle,
    DoubleNegationI,
    DoubleNegationE,
    Contradiction,
}

/// Alternative names, as found in textbooks.
const ALIASES: &[(&str, Rule)] = &[
    ("ass", Rule::Assumption),
    ("andI", Rule::ConjI),
    ("andE", Rule::ConjE),
    ("andE1", Rule::ConjE1),
    ("andE2", Rule::ConjE2),
    ("orI1", Rule::DisjI1),
    ("orI2", Rule::DisjI2),
    ("orE", Rule::DisjE),
    ("lem", Rule::ExcludedMiddle),
    ("dni", Rule::DoubleNegationI),
    ("dne", Rule::DoubleNegationE),
    ("raa", Rule::Contradiction),
];

impl Rule {
    /// All the rules, intuitionistic ones first.
    pub const ALL: [Rule; 20] = [
        Rule::Assumption,
        Rule::NotI,
        Rule::ConjI,
        Rule::DisjI1,
        Rule::DisjI2,
        Rule::ImpI,
        Rule::TrueI,
        Rule::IffI,
        Rule::NotE,
        Rule::ConjE1,
        Rule::ConjE2,
        Rule::ConjE,
        Rule::DisjE,
        Rule::ImpE,
        Rule::FalseE,
        Rule::IffE,
        Rule::ExcludedMiddle,
        Rule::DoubleNegationI,
        Rule::DoubleNegationE,
        Rule::Contradiction,
    ];

    /// Name of the rule.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Assumption => "assumption",
            Rule::NotI => "notI",
            Rule::ConjI => "conjI",
            Rule::DisjI1 => "disjI1",
            Rule::DisjI2 => "disjI2",
            Rule::ImpI => "impI",
            Rule::TrueI => "trueI",
            Rule::IffI => "iffI",
            Rule::NotE => "notE",
            Rule::ConjE1 => "conjE1",
            Rule::ConjE2 => "conjE2",
            Rule::ConjE => "conjE",
            Rule::DisjE => "disjE",
            Rule::ImpE => "impE",
            Rule::FalseE => "falseE",
            Rule::IffE => "iffE",
            Rule::ExcludedMiddle => "excludedMiddle",
            Rule::DoubleNegationI => "doubleNegationI",
            Rule::DoubleNegationE => "doubleNegationE",
            Rule::Contradiction => "contradiction",
        }
    }

    /// What the rule does to a goal `G |-- C`.
    pub fn descr(self) -> &'static str {
        match self {
            Rule::Assumption => "close `G, A |-- A`",
            Rule::NotI => "`G |-- ~A` becomes `G, A |-- False`",
            Rule::ConjI => "`G |-- A /\\ B` splits into `G |-- A` and `G |-- B`",
            Rule::DisjI1 => "`G |-- A \\/ B` becomes `G |-- A`",
            Rule::DisjI2 => "`G |-- A \\/ B` becomes `G |-- B`",
            Rule::ImpI => "`G |-- A => B` becomes `G, A |-- B`",
            Rule::TrueI => "close `G |-- True`",
            Rule::IffI => "`G |-- A <=> B` becomes `G |-- (A => B) /\\ (B => A)`",
            Rule::NotE => "`G, ~A |-- C` becomes `G |-- A`",
            Rule::ConjE1 => "`G, A /\\ B |-- C` becomes `G, A |-- C`",
            Rule::ConjE2 => "`G, A /\\ B |-- C` becomes `G, B |-- C`",
            Rule::ConjE => "`G, A /\\ B |-- C` becomes `G, A, B |-- C`",
            Rule::DisjE => "`G, A \\/ B |-- C` splits into `G, A |-- C` and `G, B |-- C`",
            Rule::ImpE => "`G, A => B |-- C` splits into `G |-- A` and `G, B |-- C`",
            Rule::FalseE => "close `G, False |-- C`",
            Rule::IffE => "`G, A <=> B |-- C` becomes `G, (A => B) /\\ (B => A) |-- C`",
            Rule::ExcludedMiddle => "close `G |-- A \\/ ~A` and `G |-- ~A \\/ A`",
            Rule::DoubleNegationI => "`G |-- A` becomes `G |-- ~~A`",
            Rule::DoubleNegationE => {
                "`G, ~~A |-- C` becomes `G, A |-- C` (or `G |-- ~~A` becomes `G |-- A`)"
            }
            Rule::Contradiction => "`G |-- A` becomes `G, ~A |-- False`",
        }
    }

    /// Is this rule only valid in classical logic?
    pub fn is_classical(self) -> bool {
        match self {
            Rule::ExcludedMiddle
            | Rule::DoubleNegationI
            | Rule::DoubleNegationE
            | Rule::Contradiction => true,
            _ => false,
        }
    }

    /// Apply the rule to `g`.
    ///
    /// Returns the subgoals that replace `g`; `g` itself is left untouched,
    /// whether the rule applies or not.
    pub fn apply(self, g: &Goal) -> Result<Subgoals> {
        logtrace!("apply {} to `{}`", self, g);
        let res = match self {
            Rule::Assumption => assumption(g),
            Rule::NotI => not_i(g),
            Rule::ConjI => conj_i(g),
            Rule::DisjI1 => disj_i1(g),
            Rule::DisjI2 => disj_i2(g),
            Rule::ImpI => imp_i(g),
            Rule::TrueI => true_i(g),
            Rule::IffI => iff_i(g),
            Rule::NotE => not_e(g),
            Rule::ConjE1 => conj_e1(g),
            Rule::ConjE2 => conj_e2(g),
            Rule::ConjE => conj_e(g),
            Rule::DisjE => disj_e(g),
            Rule::ImpE => imp_e(g),
            Rule::FalseE => false_e(g),
            Rule::IffE => iff_e(g),
            Rule::ExcludedMiddle => excluded_middle(g),
            Rule::DoubleNegationI => double_negation_i(g),
            Rule::DoubleNegationE => double_negation_e(g),
            Rule::Contradiction => contradiction(g),
        };
        match &res {
            Ok(sub) => logtrace!("{} produced {} subgoal(s)", self, sub.len()),
            Err(e) => logdebug!("{}", e),
        }
        res
    }
}

mod impls {
    use super::*;

    impl fmt::Display for Rule {
        fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
            write!(out, "{}", self.name())
        }
    }

    impl FromStr for Rule {
        type Err = Error;

        /// Parse a rule name. Case and underscores are ignored, so that
        /// `conjI`, `conj_i` and `CONJI` are the same rule.
        fn from_str(s: &str) -> Result<Self> {
            let norm = |s: &str| -> String {
                s.chars()
                    .filter(|c| *c != '_' && *c != '-')
                    .map(|c| c.to_ascii_lowercase())
                    .collect()
            };
            let key = norm(s);
            Rule::ALL
                .iter()
                .map(|r| (r.name(), *r))
                .chain(ALIASES.iter().cloned())
                .find(|(name, _)| norm(name) == key)
                .map(|(_, r)| r)
                .ok_or_else(|| errorstr!("unknown rule `{}`", s))
        }
    }
}

/// A goal with the same assumptions as `g`, and target `f`.
fn with_target(g: &Goal, f: Formula) -> Goal {
    let mut g2 = g.clone();
    g2.set_target(f);
    g2
}

/// Remove, from a copy of `g`, the first assumption that `view` accepts.
///
/// Returns the remaining goal and what `view` extracted from the assumption.
fn take_hyp<'a, T>(
    g: &'a Goal,
    rule: Rule,
    msg: &'static str,
    view: impl Fn(&'a Formula) -> Option<T>,
) -> Result<(Goal, T)> {
    let (i, x) = g
        .assumptions()
        .iter()
        .enumerate()
        .find_map(|(i, h)| view(h).map(|x| (i, x)))
        .ok_or_else(|| Error::rule_not_applicable(rule, msg))?;
    let mut g2 = g.clone();
    g2.remove_assumption_at(i);
    Ok((g2, x))
}

/// `G, A |-- A` is closed.
pub fn assumption(g: &Goal) -> Result<Subgoals> {
    if g.has_assumption(g.target()) {
        Ok(smallvec![])
    } else {
        Err(Error::rule_not_applicable(
            Rule::Assumption,
            "target is not among the assumptions",
        ))
    }
}

/// `G |-- ~A` becomes `G, A |-- False`.
pub fn not_i(g: &Goal) -> Result<Subgoals> {
    let a = g
        .target()
        .as_not()
        .ok_or_else(|| Error::rule_not_applicable(Rule::NotI, "target is not a negation"))?;
    let mut g2 = with_target(g, Formula::mk_false());
    g2.add_assumption(a.clone());
    Ok(smallvec![g2])
}

/// `G |-- A /\ B` becomes `G |-- A` and `G |-- B`.
pub fn conj_i(g: &Goal) -> Result<Subgoals> {
    let (a, b) = g
        .target()
        .as_and()
        .ok_or_else(|| Error::rule_not_applicable(Rule::ConjI, "target is not a conjunction"))?;
    Ok(smallvec![with_target(g, a.clone()), with_target(g, b.clone())])
}

/// `G |-- A \/ B` becomes `G |-- A`.
pub fn disj_i1(g: &Goal) -> Result<Subgoals> {
    let (a, _) = g
        .target()
        .as_or()
        .ok_or_else(|| Error::rule_not_applicable(Rule::DisjI1, "target is not a disjunction"))?;
    Ok(smallvec![with_target(g, a.clone())])
}

/// `G |-- A \/ B` becomes `G |-- B`.
pub fn disj_i2(g: &Goal) -> Result<Subgoals> {
    let (_, b) = g
        .target()
        .as_or()
        .ok_or_else(|| Error::rule_not_applicable(Rule::DisjI2, "target is not a disjunction"))?;
    Ok(smallvec![with_target(g, b.clone())])
}

/// `G |-- A => B` becomes `G, A |-- B`.
pub fn imp_i(g: &Goal) -> Result<Subgoals> {
    let (a, b) = g
        .target()
        .as_imp()
        .ok_or_else(|| Error::rule_not_applicable(Rule::ImpI, "target is not an implication"))?;
    let mut g2 = with_target(g, b.clone());
    g2.add_assumption(a.clone());
    Ok(smallvec![g2])
}

/// `G |-- True` is closed.
pub fn true_i(g: &Goal) -> Result<Subgoals> {
    if g.target().is_true() {
        Ok(smallvec![])
    } else {
        Err(Error::rule_not_applicable(
            Rule::TrueI,
            "target is not `True`",
        ))
    }
}

/// `G |-- A <=> B` becomes `G |-- (A => B) /\ (B => A)`.
pub fn iff_i(g: &Goal) -> Result<Subgoals> {
    let t = g.target();
    if t.as_iff().is_none() {
        return Err(Error::rule_not_applicable(
            Rule::IffI,
            "target is not an equivalence",
        ));
    }
    Ok(smallvec![with_target(g, t.simplify())])
}

/// `G, ~A |-- C` becomes `G |-- A`.
pub fn not_e(g: &Goal) -> Result<Subgoals> {
    let (mut g2, a) = take_hyp(g, Rule::NotE, "no negated assumption", Formula::as_not)?;
    g2.set_target(a.clone());
    Ok(smallvec![g2])
}

fn conj_e_(g: &Goal, rule: Rule, left: bool, right: bool) -> Result<Subgoals> {
    let (mut g2, (a, b)) = take_hyp(g, rule, "no conjunctive assumption", Formula::as_and)?;
    if left {
        g2.add_assumption(a.clone());
    }
    if right {
        g2.add_assumption(b.clone());
    }
    Ok(smallvec![g2])
}

/// `G, A /\ B |-- C` becomes `G, A |-- C`.
pub fn conj_e1(g: &Goal) -> Result<Subgoals> {
    conj_e_(g, Rule::ConjE1, true, false)
}

/// `G, A /\ B |-- C` becomes `G, B |-- C`.
pub fn conj_e2(g: &Goal) -> Result<Subgoals> {
    conj_e_(g, Rule::ConjE2, false, true)
}

/// `G, A /\ B |-- C` becomes `G, A, B |-- C`.
pub fn conj_e(g: &Goal) -> Result<Subgoals> {
    conj_e_(g, Rule::ConjE, true, true)
}

/// `G, A \/ B |-- C` becomes `G, A |-- C` and `G, B |-- C`.
pub fn disj_e(g: &Goal) -> Result<Subgoals> {
    let (rest, (a, b)) = take_hyp(g, Rule::DisjE, "no disjunctive assumption", Formula::as_or)?;
    let mut g1 = rest.clone();
    g1.add_assumption(a.clone());
    let mut g2 = rest;
    g2.add_assumption(b.clone());
    Ok(smallvec![g1, g2])
}

/// `G, A => B |-- C` becomes `G |-- A` and `G, B |-- C`.
pub fn imp_e(g: &Goal) -> Result<Subgoals> {
    let (rest, (a, b)) = take_hyp(g, Rule::ImpE, "no implicative assumption", Formula::as_imp)?;
    let g1 = with_target(&rest, a.clone());
    let mut g2 = rest;
    g2.add_assumption(b.clone());
    Ok(smallvec![g1, g2])
}

/// `G, False |-- C` is closed.
pub fn false_e(g: &Goal) -> Result<Subgoals> {
    if g.assumptions().iter().any(Formula::is_false) {
        Ok(smallvec![])
    } else {
        Err(Error::rule_not_applicable(
            Rule::FalseE,
            "no `False` assumption",
        ))
    }
}

/// `G, A <=> B |-- C` becomes `G, (A => B) /\ (B => A) |-- C`.
pub fn iff_e(g: &Goal) -> Result<Subgoals> {
    let i = g
        .assumptions()
        .iter()
        .position(|h| h.as_iff().is_some())
        .ok_or_else(|| Error::rule_not_applicable(Rule::IffE, "no equivalence assumption"))?;
    let mut g2 = g.clone();
    g2.replace_assumption(i, g.assumptions()[i].simplify());
    Ok(smallvec![g2])
}

/// Is `f` of the shape `A \/ ~A` or `~A \/ A`?
fn is_excluded_middle(f: &Formula) -> bool {
    match f.as_or() {
        Some((a, b)) => {
            b.as_not().map_or(false, |b1| a.equal_to(b1))
                || a.as_not().map_or(false, |a1| b.equal_to(a1))
        }
        None => false,
    }
}

/// `G |-- A \/ ~A` and `G |-- ~A \/ A` are closed.
pub fn excluded_middle(g: &Goal) -> Result<Subgoals> {
    if is_excluded_middle(g.target()) {
        Ok(smallvec![])
    } else {
        Err(Error::rule_not_applicable(
            Rule::ExcludedMiddle,
            "target is not of the form `A \\/ ~A` or `~A \\/ A`",
        ))
    }
}

/// `G |-- A` becomes `G |-- ~~A`.
pub fn double_negation_i(g: &Goal) -> Result<Subgoals> {
    let t = g.target().clone();
    Ok(smallvec![with_target(g, Formula::mk_not(Formula::mk_not(t)))])
}

/// `G, ~~A |-- C` becomes `G, A |-- C`.
///
/// If no assumption is a double negation, `G |-- ~~A` becomes `G |-- A`.
pub fn double_negation_e(g: &Goal) -> Result<Subgoals> {
    let hyp = g
        .assumptions()
        .iter()
        .enumerate()
        .find_map(|(i, h)| h.strip_double_neg().map(|a| (i, a)));
    if let Some((i, a)) = hyp {
        let mut g2 = g.clone();
        g2.replace_assumption(i, a.clone());
        return Ok(smallvec![g2]);
    }
    match g.target().strip_double_neg() {
        Some(a) => Ok(smallvec![with_target(g, a.clone())]),
        None => Err(Error::rule_not_applicable(
            Rule::DoubleNegationE,
            "no doubly negated assumption or target",
        )),
    }
}

/// `G |-- A` becomes `G, ~A |-- False`.
pub fn contradiction(g: &Goal) -> Result<Subgoals> {
    let t = g.target().clone();
    let mut g2 = with_target(g, Formula::mk_false());
    g2.add_assumption(Formula::mk_not(t));
    Ok(smallvec![g2])
}

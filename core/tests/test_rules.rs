use natded::*;

fn atom(s: &str) -> Formula {
    Formula::mk_atom(s)
}

fn goal(hyps: &[Formula], t: Formula) -> Goal {
    Goal::new(hyps.iter().cloned(), t)
}

#[test]
fn test_and_not_commutative() {
    let pairs = vec![
        (atom("a"), atom("b")),
        (Formula::mk_not(atom("a")), atom("a")),
        (Formula::mk_true(), Formula::mk_false()),
        (
            Formula::mk_imp(atom("p"), atom("q")),
            Formula::mk_imp(atom("q"), atom("p")),
        ),
    ];
    for (a, b) in pairs {
        assert!(!a.equal_to(&b));
        let ab = Formula::mk_and(a.clone(), b.clone());
        let ba = Formula::mk_and(b, a);
        assert!(!ab.equal_to(&ba), "{} should differ from {}", ab, ba);
    }
}

#[test]
fn test_simplify() {
    let a = parse_formula("p /\\ q").unwrap();
    let b = parse_formula("~r").unwrap();
    let f = Formula::mk_iff(a.clone(), b.clone());
    let expected = Formula::mk_and(
        Formula::mk_imp(a.clone(), b.clone()),
        Formula::mk_imp(b.clone(), a.clone()),
    );
    assert!(f.simplify().equal_to(&expected));

    for s in &["True", "False", "p", "~(a <=> b)", "a /\\ b", "a \\/ b", "a => b"] {
        let g = parse_formula(s).unwrap();
        assert!(g.simplify().equal_to(&g), "{} should be unchanged", s);
    }
}

#[test]
fn test_conj_i() {
    let gamma = [atom("p"), Formula::mk_not(atom("q"))];
    let (a, b) = (atom("a"), Formula::mk_or(atom("b"), atom("c")));
    let g = goal(&gamma, Formula::mk_and(a.clone(), b.clone()));
    let sub = Rule::ConjI.apply(&g).unwrap();
    assert_eq!(sub.len(), 2);
    assert_eq!(sub[0], goal(&gamma, a));
    assert_eq!(sub[1], goal(&gamma, b));

    let g = goal(&gamma, atom("p"));
    let e = Rule::ConjI.apply(&g).unwrap_err();
    assert!(e.is_rule_not_applicable());
    assert_eq!(g.assumptions(), &gamma[..]);
}

#[test]
fn test_assumption() {
    let sub = Rule::Assumption.apply(&goal(&[atom("p")], atom("p"))).unwrap();
    assert!(sub.is_empty());
    let e = Rule::Assumption
        .apply(&goal(&[atom("p")], atom("q")))
        .unwrap_err();
    assert_eq!(e.rule(), Some(Rule::Assumption));
}

#[test]
fn test_imp_e() {
    let g = goal(
        &[Formula::mk_imp(atom("p"), atom("q")), atom("r")],
        atom("s"),
    );
    let sub = Rule::ImpE.apply(&g).unwrap();
    assert_eq!(sub.len(), 2);
    assert_eq!(sub[0], goal(&[atom("r")], atom("p")));
    assert_eq!(sub[1], goal(&[atom("r"), atom("q")], atom("s")));
    assert!(Rule::ImpE.apply(&goal(&[atom("r")], atom("s"))).is_err());
}

#[test]
fn test_excluded_middle() {
    let ok = goal(&[], Formula::mk_or(atom("p"), Formula::mk_not(atom("p"))));
    assert!(Rule::ExcludedMiddle.apply(&ok).unwrap().is_empty());
    let ok = goal(&[], Formula::mk_or(Formula::mk_not(atom("p")), atom("p")));
    assert!(Rule::ExcludedMiddle.apply(&ok).unwrap().is_empty());
    let bad = goal(&[], Formula::mk_or(atom("p"), Formula::mk_not(atom("q"))));
    assert!(Rule::ExcludedMiddle.apply(&bad).is_err());
}

#[test]
fn test_render_deterministic() {
    let f = parse_formula("(a <=> ~b) \\/ (True => False /\\ c)").unwrap();
    let s1 = f.to_string();
    let s2 = f.to_string();
    assert_eq!(s1, s2);
    assert_eq!(s1, "((a <=> ~b) \\/ (True => (False /\\ c)))");
}

#[test]
fn test_failures_do_not_mutate() {
    let g = parse_goal("p , q |-- r").unwrap();
    let before = g.to_string();
    for r in Rule::ALL.iter() {
        if let Err(e) = r.apply(&g) {
            assert_eq!(e.rule(), Some(*r));
        }
        assert_eq!(g.to_string(), before);
    }
}

#[test]
fn test_shared_subformulas() {
    // the split goals point to the very same nodes
    let big = parse_formula("(a => b) /\\ (c \\/ d)").unwrap();
    let g = goal(&[big.clone()], Formula::mk_and(big.clone(), big.clone()));
    let sub = Rule::ConjI.apply(&g).unwrap();
    assert!(sub[0].target().ptr_eq(&big));
    assert!(sub[1].target().ptr_eq(&big));
    assert!(sub[1].assumptions()[0].ptr_eq(&big));
}

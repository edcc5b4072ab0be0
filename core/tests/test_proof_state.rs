use natded::*;

fn run(st: &mut ProofState, steps: &[(usize, &str)]) {
    for (i, r) in steps {
        let rule: Rule = r.parse().unwrap();
        st.apply(*i, rule)
            .unwrap_or_else(|e| panic!("{} on goal {} failed: {}\n{}", r, i + 1, e, st));
    }
}

#[test]
fn test_modus_ponens() {
    let g = parse_goal("p , p => q |-- q").unwrap();
    let mut st = ProofState::from_goal(g);
    run(&mut st, &[(0, "impE"), (0, "assumption"), (0, "assumption")]);
    assert!(st.is_done());
}

#[test]
fn test_conj_comm() {
    let mut st = ProofState::from_goal(parse_goal("|-- a /\\ b => b /\\ a").unwrap());
    run(&mut st, &[(0, "impI"), (0, "conjE")]);
    assert_eq!(st.to_string(), "1: a , b |-- (b /\\ a)\n");
    run(&mut st, &[(0, "conjI"), (1, "assumption"), (0, "assumption")]);
    assert!(st.is_done());
}

#[test]
fn test_disj_comm() {
    let mut st = ProofState::from_goal(parse_goal("a \\/ b |-- b \\/ a").unwrap());
    run(&mut st, &[(0, "disjE")]);
    assert_eq!(st.to_string(), "1: a |-- (b \\/ a)\n2: b |-- (b \\/ a)\n");
    run(
        &mut st,
        &[(0, "disjI2"), (0, "assumption"), (0, "disjI1"), (0, "assumption")],
    );
    assert!(st.is_done());
}

#[test]
fn test_contraposition() {
    // (p => q) => (~q => ~p)
    let mut st = ProofState::from_goal(parse_goal("(p => q) => ~q => ~p").unwrap());
    run(&mut st, &[(0, "impI"), (0, "impI"), (0, "notI")]);
    assert_eq!(st.to_string(), "1: (p => q) , ~q , p |-- False\n");
    run(&mut st, &[(0, "impE"), (0, "assumption"), (0, "notE"), (0, "assumption")]);
    assert!(st.is_done());
}

#[test]
fn test_classical_double_negation() {
    // ~~p => p, classically
    let mut st = ProofState::from_goal(parse_goal("~~p => p").unwrap());
    run(&mut st, &[(0, "impI"), (0, "doubleNegationE"), (0, "assumption")]);
    assert!(st.is_done());

    let mut st = ProofState::from_goal(parse_goal("~~p => p").unwrap());
    run(&mut st, &[(0, "impI"), (0, "contradiction")]);
    assert_eq!(st.to_string(), "1: ~~p , ~p |-- False\n");
    run(&mut st, &[(0, "notE"), (0, "assumption")]);
    assert!(st.is_done());
}

#[test]
fn test_iff_and_ex_falso() {
    let mut st = ProofState::from_goal(parse_goal("False |-- (a <=> b)").unwrap());
    run(&mut st, &[(0, "iffI"), (0, "conjI")]);
    assert_eq!(st.len(), 2);
    run(&mut st, &[(1, "falseE"), (0, "false_e")]);
    assert!(st.is_done());
}

#[test]
fn test_lem_and_true() {
    let mut st = ProofState::from_goal(parse_goal("|-- (r \\/ ~r) /\\ True").unwrap());
    run(&mut st, &[(0, "conjI"), (0, "excluded_middle"), (0, "trueI")]);
    assert!(st.is_done());
}

#[test]
fn test_failed_step_keeps_state() {
    let mut st = ProofState::from_goal(parse_goal("a |-- b").unwrap());
    let before = st.to_string();
    for r in Rule::ALL.iter().filter(|r| !r.is_classical()) {
        assert!(st.apply(0, *r).is_err());
    }
    assert_eq!(st.to_string(), before);
    assert_eq!(st.n_steps(), 0);
}

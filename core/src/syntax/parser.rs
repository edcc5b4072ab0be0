//! # Formula parser
//!
//! This parses a formula from a string directly, without intermediate AST.
//! The notation is the one used for printing, so that anything printed
//! can be parsed back.
//!
//! We follow https://matklad.github.io/2020/04/13/simple-but-powerful-pratt-parsing.html
//! for binding powers.

use {
    super::{Lexer, Tok},
    crate::{
        error::{Error, Position, Result},
        kernel::{Formula, Goal},
    },
};

/// Binding power. The higher, the stronger it tights.
///
/// It's a pair of left and right binding powers, so we can represent
/// associativity.
type BindingPower = (u16, u16);

const BP_IFF: BindingPower = (2, 1);
const BP_IMP: BindingPower = (4, 3);
const BP_OR: BindingPower = (5, 6);
const BP_AND: BindingPower = (7, 8);
/// Right binding power of `~`.
const BP_NOT: u16 = 9;

/// Maximum depth of a parsed formula tree. This bounds the recursion of
/// the parser, and of anything that later walks the tree.
const MAX_DEPTH: usize = 1000;

/// Parse the string into a formula.
pub fn parse_formula(s: &str) -> Result<Formula> {
    let mut p = Parser::new(s);
    p.parse_formula()
}

/// Parse the string into a goal `a1 , … , an |-- target`.
///
/// The assumptions and the turnstile are optional: `t` alone is the goal `|-- t`.
pub fn parse_goal(s: &str) -> Result<Goal> {
    let mut p = Parser::new(s);
    p.parse_goal()
}

/// Parser for formulas and sequents.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Depth, in the formula tree, of the node being parsed.
    depth: usize,
}

macro_rules! perror {
    ($self: ident, $fmt: literal) => {
        Error::new_parse(format!($fmt), $self.loc())
    };
    ($self: ident, $fmt: literal, $($arg:expr ),*) => {
        Error::new_parse(format!($fmt, $($arg),*), $self.loc())
    };
}

impl<'a> Parser<'a> {
    /// New parser using the given string `src`.
    pub fn new(src: &'a str) -> Self {
        Self {
            lexer: Lexer::new(src),
            depth: 0,
        }
    }

    /// Return current `(line,column)` pair.
    pub fn loc(&self) -> Position {
        self.lexer.cur_pos()
    }

    /// Parse a whole formula; the input must end after it.
    pub fn parse_formula(&mut self) -> Result<Formula> {
        let f = self.parse_bp_(0)?;
        self.lexer.eat(Tok::EOF, "after formula")?;
        Ok(f)
    }

    /// Parse a whole sequent; the input must end after it.
    pub fn parse_goal(&mut self) -> Result<Goal> {
        let mut hyps = vec![];
        if self.lexer.cur() != Tok::TURNSTILE {
            let f = self.parse_bp_(0)?;
            match self.lexer.cur() {
                Tok::EOF => return Ok(Goal::new(hyps, f)),
                _ => hyps.push(f),
            }
            while self.lexer.cur() == Tok::COMMA {
                self.lexer.next();
                hyps.push(self.parse_bp_(0)?);
            }
        }
        self.lexer.eat(Tok::TURNSTILE, "between assumptions and target")?;
        let target = self.parse_bp_(0)?;
        self.lexer.eat(Tok::EOF, "after target")?;
        Ok(Goal::new(hyps, target))
    }

    fn infix_bp_(t: Tok) -> Option<BindingPower> {
        match t {
            Tok::IFF => Some(BP_IFF),
            Tok::IMP => Some(BP_IMP),
            Tok::OR => Some(BP_OR),
            Tok::AND => Some(BP_AND),
            _ => None,
        }
    }

    fn mk_infix_(t: Tok, a: Formula, b: Formula) -> Formula {
        match t {
            Tok::IFF => Formula::mk_iff(a, b),
            Tok::IMP => Formula::mk_imp(a, b),
            Tok::OR => Formula::mk_or(a, b),
            _ => Formula::mk_and(a, b),
        }
    }

    /// Parse a formula.
    ///
    /// `bp` is the current binding power for this Pratt parser.
    fn parse_bp_(&mut self, bp: u16) -> Result<Formula> {
        let depth = self.depth;
        let res = self.parse_bp_rec_(bp);
        self.depth = depth;
        res
    }

    /// One more level in the formula tree.
    fn enter_(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(perror!(self, "formula nested too deeply (max depth {})", MAX_DEPTH));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_bp_rec_(&mut self, bp: u16) -> Result<Formula> {
        use Tok::*;
        self.enter_()?;

        let mut lhs = {
            let t = self.lexer.consume_cur();
            match t {
                TRUE => Formula::mk_true(),
                FALSE => Formula::mk_false(),
                SYM(s) => Formula::mk_atom(s),
                NOT => Formula::mk_not(self.parse_bp_(BP_NOT)?),
                LPAREN => {
                    let f = self.parse_bp_(0)?;
                    self.lexer.eat(RPAREN, "after '('-prefixed formula")?;
                    f
                }
                ERROR(c) => {
                    return Err(perror!(self, "invalid char {:?}", c as char));
                }
                RPAREN | COMMA | TURNSTILE | AND | OR | IMP | IFF | EOF => {
                    return Err(perror!(self, "unexpected token {:?}", t));
                }
            }
        };

        loop {
            let t = self.lexer.cur();
            let (l_bp, r_bp) = match t {
                EOF | RPAREN | COMMA | TURNSTILE => break,
                ERROR(c) => {
                    return Err(perror!(self, "invalid char {:?}", c as char));
                }
                _ => match Self::infix_bp_(t) {
                    Some(p) => p,
                    None => return Err(perror!(self, "expected a connective, got {:?}", t)),
                },
            };

            if l_bp < bp {
                break; // binding left
            }

            self.lexer.next();
            // `lhs` becomes an operand of the new node
            self.enter_()?;
            let rhs = self.parse_bp_(r_bp)?;
            lhs = Self::mk_infix_(t, lhs, rhs);
        }

        Ok(lhs)
    }
}

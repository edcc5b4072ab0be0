//! # Lexing for formulas and sequents

use crate::{
    error::{Error, Position, Result},
    kernel::symbol::{is_ident_char, is_ident_start},
};

/// A token of the language. This is zero-copy.
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) enum Tok<'a> {
    LPAREN,
    RPAREN,
    COMMA,
    TURNSTILE,
    TRUE,
    FALSE,
    NOT,
    AND,
    OR,
    IMP,
    IFF,
    SYM(&'a str),
    ERROR(u8),
    EOF,
}

/// Operators, longest first so that `<=>` is not read as `<` then `=>`.
const OPERATORS: &[(&str, Tok<'static>)] = &[
    ("<=>", Tok::IFF),
    ("|--", Tok::TURNSTILE),
    ("=>", Tok::IMP),
    ("/\\", Tok::AND),
    ("\\/", Tok::OR),
    ("|-", Tok::TURNSTILE),
    ("~", Tok::NOT),
    (",", Tok::COMMA),
    ("(", Tok::LPAREN),
    (")", Tok::RPAREN),
];

/// Lexer for formulas.
pub(super) struct Lexer<'a> {
    src: &'a str,
    /// Index in `src`
    i: usize,
    /// Position is `src`
    pos: Position,
    is_done: bool,
    cur_: Option<Tok<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            i: 0,
            pos: Position { line: 1, col: 1 },
            is_done: false,
            cur_: None,
        }
    }

    /// Current position.
    pub fn cur_pos(&self) -> Position {
        self.pos
    }

    fn advance_(&mut self, n: usize) {
        self.i += n;
        self.pos.col += n as u32;
    }

    fn next_(&mut self) -> Tok<'a> {
        use Tok::*;
        assert!(!self.is_done);

        let bytes = self.src.as_bytes();

        // skip whitespace
        while self.i < bytes.len() {
            let c = bytes[self.i];
            if c == b' ' || c == b'\t' || c == b'\r' {
                self.advance_(1);
            } else if c == b'\n' {
                self.pos.col = 1;
                self.pos.line += 1;
                self.i += 1;
            } else {
                break;
            }
        }

        if self.i >= bytes.len() {
            self.is_done = true;
            return EOF;
        }

        let rest = &self.src[self.i..];
        for (s, t) in OPERATORS {
            if rest.starts_with(s) {
                self.advance_(s.len());
                return *t;
            }
        }

        let c = bytes[self.i];
        if is_ident_start(c) {
            let mut j = self.i + 1;
            while j < bytes.len() {
                if is_ident_char(bytes[j]) {
                    j += 1
                } else {
                    break;
                }
            }
            let slice = &self.src[self.i..j];
            self.advance_(j - self.i);
            match slice {
                "True" => TRUE,
                "False" => FALSE,
                _ => SYM(slice),
            }
        } else {
            // Error token!
            ERROR(c)
        }
    }

    /// get next token.
    pub fn next(&mut self) -> Tok<'a> {
        let t = self.next_();
        self.cur_ = Some(t);
        t
    }

    /// Current token.
    pub fn cur(&mut self) -> Tok<'a> {
        if let Some(c) = self.cur_ {
            c
        } else {
            self.next()
        }
    }

    pub fn consume_cur(&mut self) -> Tok<'a> {
        let t = self.cur();
        if t != Tok::EOF {
            self.next();
        }
        t
    }

    /// Expect the token `t`, and consume it; or return an error.
    ///
    /// The error message should be a position in the grammar,
    /// like "after `(`".
    pub fn eat(&mut self, t: Tok, errmsg: &str) -> Result<()> {
        let t2 = self.cur();
        if t2 == t {
            if t != Tok::EOF {
                self.next();
            }
            Ok(())
        } else {
            Err(Error::new_parse(
                format!("expected {:?} {}, got {:?}", t, errmsg, t2),
                self.pos,
            ))
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Tok<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done {
            None
        } else {
            Some(self.next())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lexer1() {
        use Tok::*;
        let lexer = Lexer::new(" (p /\\ ~~q') \\/ True=>x_1<=>False ");
        let toks = lexer.collect::<Vec<_>>();
        assert_eq!(
            toks,
            vec![
                LPAREN,
                SYM("p"),
                AND,
                NOT,
                NOT,
                SYM("q'"),
                RPAREN,
                OR,
                TRUE,
                IMP,
                SYM("x_1"),
                IFF,
                FALSE,
                EOF
            ]
        );
    }

    #[test]
    fn test_lexer_sequent() {
        use Tok::*;
        let lexer = Lexer::new("a , b |-- c\n|- d ?");
        let toks = lexer.take(9).collect::<Vec<_>>();
        assert_eq!(
            vec![
                SYM("a"),
                COMMA,
                SYM("b"),
                TURNSTILE,
                SYM("c"),
                TURNSTILE,
                SYM("d"),
                ERROR(b'?'),
                // the lexer does not skip erroneous bytes
                ERROR(b'?'),
            ],
            toks
        );
    }

    #[test]
    fn test_lex_empty() {
        // always at least one token
        let lexer = Lexer::new("");
        let toks: Vec<_> = lexer.collect();
        assert_eq!(vec![Tok::EOF], toks);
    }

    #[test]
    fn test_pos() {
        let mut lexer = Lexer::new("a\n  b");
        assert_eq!(lexer.next(), Tok::SYM("a"));
        assert_eq!(lexer.next(), Tok::SYM("b"));
        assert_eq!(lexer.cur_pos(), Position { line: 2, col: 4 });
    }
}

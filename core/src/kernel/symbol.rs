//! # Variables.

use super::Ref;
use std::fmt;

/// The name of a propositional atom.
///
/// Two variables are equal iff their names are equal.
#[derive(Debug, Clone, Ord, PartialOrd, Hash, Eq, PartialEq)]
pub struct Variable(Ref<str>);

impl Variable {
    /// New variable from this string.
    pub fn from_str(s: &str) -> Self {
        Variable(Ref::from(s))
    }

    pub fn name(&self) -> &str {
        &*self.0
    }

    /// Is the name an identifier that reads back as this atom?
    ///
    /// That is, `[A-Za-z_][A-Za-z0-9_']*` other than `True` and `False`.
    /// Only formulas whose atoms are identifiers can be printed and
    /// parsed back.
    pub fn is_ident(&self) -> bool {
        let s = self.name().as_bytes();
        match s.split_first() {
            Some((c, rest)) => {
                is_ident_start(*c)
                    && rest.iter().all(|c| is_ident_char(*c))
                    && self.name() != "True"
                    && self.name() != "False"
            }
            None => false,
        }
    }
}

/// Can an atom's name start with `c`?
#[inline]
pub(crate) fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Can an atom's name contain `c`, after the first character?
#[inline]
pub(crate) fn is_ident_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_' || c == b'\''
}

mod impls {
    use super::*;

    impl std::borrow::Borrow<str> for Variable {
        fn borrow(&self) -> &str {
            &*self.0
        }
    }

    impl<'a> From<&'a str> for Variable {
        fn from(s: &str) -> Self {
            Variable::from_str(s)
        }
    }

    impl From<String> for Variable {
        fn from(s: String) -> Self {
            Variable(Ref::from(s))
        }
    }

    impl fmt::Display for Variable {
        fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
            write!(out, "{}", self.name())
        }
    }
}

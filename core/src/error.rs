//! Errors for natded.

use crate::kernel::Rule;
use std::fmt;

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Position in a source string, 1-based.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub col: u32,
}

/// Errors that can be returned from the kernel or the parser.
#[derive(Debug, Clone)]
pub struct Error(Box<ErrorImpl>);

#[derive(Debug, Clone)]
pub struct ErrorImpl {
    pub msg: ErrorMsg,
    pub source: Option<Error>,
}

/// An error message.
#[derive(Debug, Clone)]
pub enum ErrorMsg {
    Static(&'static str),
    Dyn(String),
    /// The structural precondition of `rule` does not hold on the goal.
    RuleNotApplicable {
        rule: Rule,
        msg: &'static str,
    },
    Parse {
        pos: Position,
        msg: String,
    },
}

mod impls {
    use super::*;

    impl std::ops::Deref for Error {
        type Target = ErrorImpl;
        fn deref(&self) -> &Self::Target {
            &*self.0
        }
    }

    impl fmt::Display for Error {
        fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
            match &self.msg {
                ErrorMsg::Static(msg) => write!(out, "{}", msg),
                ErrorMsg::Dyn(s) => write!(out, "{}", &s),
                ErrorMsg::RuleNotApplicable { rule, msg } => {
                    write!(out, "failed to apply {}: {}", rule, msg)
                }
                ErrorMsg::Parse { pos, msg } => write!(out, "parse error at {}: {}", pos, msg),
            }
        }
    }

    impl std::error::Error for Error {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match &self.source {
                None => None,
                Some(p) => Some(&*p),
            }
        }
    }

    impl fmt::Debug for Position {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "[line={}, col={}]", self.line, self.col)
        }
    }

    impl fmt::Display for Position {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}:{}", self.line, self.col)
        }
    }
}

impl Error {
    /// Build a new error.
    pub fn new(msg: &'static str) -> Self {
        Error(Box::new(ErrorImpl {
            msg: ErrorMsg::Static(msg),
            source: None,
        }))
    }

    pub fn new_string(msg: String) -> Self {
        Error(Box::new(ErrorImpl {
            msg: ErrorMsg::Dyn(msg),
            source: None,
        }))
    }

    /// `rule` cannot be applied to the current goal.
    pub fn rule_not_applicable(rule: Rule, msg: &'static str) -> Self {
        Error(Box::new(ErrorImpl {
            msg: ErrorMsg::RuleNotApplicable { rule, msg },
            source: None,
        }))
    }

    /// New parse error.
    pub fn new_parse(msg: String, pos: Position) -> Self {
        Error(Box::new(ErrorImpl {
            msg: ErrorMsg::Parse { pos, msg },
            source: None,
        }))
    }

    /// Is this the failure of a rule precondition?
    pub fn is_rule_not_applicable(&self) -> bool {
        match self.msg {
            ErrorMsg::RuleNotApplicable { .. } => true,
            _ => false,
        }
    }

    /// The rule that failed, if this is a rule failure.
    pub fn rule(&self) -> Option<Rule> {
        match self.msg {
            ErrorMsg::RuleNotApplicable { rule, .. } => Some(rule),
            _ => None,
        }
    }

    /// Change the source of this error.
    pub fn set_source(&mut self, src: Self) {
        // append at the end of the `source` linked list.
        if let Some(e2) = &mut self.0.source {
            e2.set_source(src)
        } else {
            self.0.source = Some(src);
        }
    }

    pub fn with_source(mut self, src: Self) -> Self {
        self.set_source(src);
        self
    }

    /// Display the error, along with its source if any.
    pub fn to_string_with_src(&self) -> String {
        use std::fmt::Write;

        let mut s = String::new();
        let mut e = self;
        loop {
            // writing into a `String` cannot fail
            let _ = write!(&mut s, "{}", e);
            if let Some(src) = &e.0.source {
                s.push_str("\nin ");
                e = src;
            } else {
                break;
            }
        }
        s
    }
}

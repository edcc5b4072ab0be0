//! A basic syntax for parsing formulas and goals.
//!
//! This syntax is optional and is not needed at all when using the kernel.
//! It reads the same ASCII notation that `Formula` and `Goal` print.

pub mod lexer;
pub mod parser;

use lexer::{Lexer, Tok};
pub use parser::{parse_formula, parse_goal, Parser};

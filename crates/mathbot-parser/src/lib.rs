//! mathbot parser: linearizes an infix expression into postfix tokens.

mod parser;

pub use parser::{parse, to_rpn_string, Parser};

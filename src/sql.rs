// SQL module - command clause location and predicate tokenization.

pub mod command;
pub mod lexer;
pub mod token;

pub use command::SelectCommand;
pub use lexer::Lexer;
pub use token::Token;

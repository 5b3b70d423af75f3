use logic_ast::AstError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error: {0}")]
    NomError(String),
    #[error("Unconsumed input: {0}")]
    UnconsumedInput(String),
    #[error("Empty formula")]
    Empty,
    #[error(transparent)]
    Ast(#[from] AstError),
}

use generational_arena::Index;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TreeError {
    #[error("Operation requires a non-empty tree")]
    EmptyTree,

    #[error("Node not found in tree arena: {0:?}")]
    NodeNotFound(Index),
}

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Error, Debug, PartialEq)]
pub enum ListError {
    #[error("List index out of bounds: {0}")]
    IndexOutOfBounds(usize),
}

pub type ListResult<T> = Result<T, ListError>;

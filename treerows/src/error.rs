use thiserror::Error;

/// Errors produced while building coordinates or resolving flat rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("coordinate must contain at least one index")]
    EmptyCoordinate,

    #[error("invalid coordinate component `{0}`")]
    InvalidComponent(String),

    #[error("rows of group {group} have not been counted")]
    Uncounted { group: usize },

    #[error("row {row} is outside group {group} with {rows} rows")]
    RowOutOfRange {
        group: usize,
        row: usize,
        rows: usize,
    },

    #[error("row {row} is not backed by cached tree structure")]
    Unresolved { row: usize },
}

pub type Result<T> = std::result::Result<T, TreeError>;

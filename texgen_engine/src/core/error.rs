use crate::core::types::Number;
use std::num::ParseIntError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TexgenError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TexgenError {
    /// A coordinate, seed or other numeric argument was not a finite number
    #[error("the passed argument `{name}` is not a number (got {value})")]
    InvalidNumericInput { name: &'static str, value: Number },
    /// A grid dimension was zero, negative, or would push the grid past the pixel limit
    #[error("the grid dimension `{name}` must be positive and keep the grid within the pixel limit (got {value})")]
    InvalidDimension { name: &'static str, value: i64 },
    /// The attribute isn't one the generator observes
    #[error("unknown attribute `{name}`")]
    UnknownAttribute { name: String },
    /// The attribute value couldn't be parsed as an integer
    #[error("couldn't parse value `{value}` for attribute `{name}`")]
    AttributeParse {
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

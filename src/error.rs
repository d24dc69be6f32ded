use thiserror::Error;

/// Top-level error type for the geoloc crate.
#[derive(Debug, Error)]
pub enum GeolocError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Errors related to coordinate values.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} = {value} is not finite")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors related to path and polygon operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while decoding an encoded polyline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("byte {byte:#04x} at index {index} is outside the polyline alphabet")]
    InvalidCharacter { index: usize, byte: u8 },

    #[error("encoded polyline ends in the middle of a value at index {index}")]
    Truncated { index: usize },

    #[error("encoded value at index {index} has more chunks than fit in 64 bits")]
    Overflow { index: usize },
}

/// Convenience type alias for results using [`GeolocError`].
pub type Result<T> = std::result::Result<T, GeolocError>;

use thiserror::Error;

/// Validation failures of spatial addressing. None of these are transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpatialError {
    /// A chunk coordinate or body index lies outside its documented range.
    #[error("{field} out of range: {value} not in {min}..={max}")]
    FieldOutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Chunk text did not have the `R_Theta_Z` shape.
    #[error("malformed chunk coordinates {0:?}: expected R_Theta_Z")]
    MalformedChunk(String),

    /// A body index at or past the chunk's expected body count.
    #[error("body index {index} out of range for chunk with {count} bodies")]
    IndexOutOfRange { index: u64, count: u64 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot normalize a zero-length or non-finite vector")]
    DegenerateVector,

    #[error("invalid primitive: {0}")]
    InvalidPrimitive(String),

    #[error("invalid render config: {0}")]
    InvalidConfig(String),

    #[error("render cancelled after {rows_done}/{total_rows} rows")]
    Cancelled { rows_done: usize, total_rows: usize },

    #[error("failed to write image: {0}")]
    Image(#[from] ::image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;

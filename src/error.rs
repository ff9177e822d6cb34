use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid axis domain for `{axis}`: min={min}, max={max}")]
    InvalidDomain {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid chart payload: {0}")]
    Format(String),

    #[error("storage i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

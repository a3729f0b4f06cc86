use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown series `{0}`")]
    UnknownSeries(String),

    #[error("invalid control point reference: series=`{series}`, index={index}, len={len}")]
    InvalidReference {
        series: String,
        index: usize,
        len: usize,
    },

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

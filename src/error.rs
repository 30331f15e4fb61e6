use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart payload is missing")]
    MissingPayload,

    #[error("chart payload rejected: {labels} labels but {values} data values")]
    RejectedPayload { labels: usize, values: usize },

    #[error("drawing surface `{element_id}` could not be resolved")]
    SurfaceUnavailable { element_id: String },

    #[error("chart was already mounted; render is single-shot")]
    AlreadyMounted,

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failed: {0}")]
    Render(String),
}

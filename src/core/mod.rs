pub mod matrix_source;
pub mod payload;
pub mod types;

pub use matrix_source::{
    MatrixSourceOptions, fallback_payload, payload_from_csv_path,
    payload_from_csv_path_or_fallback, payload_from_csv_reader,
};
pub use payload::{ChartPayload, Label};
pub use types::Viewport;

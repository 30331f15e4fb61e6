use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Category identifier on the chart's index axis.
///
/// Labels keep the JSON form they arrived in so integer indices stay integers
/// in the emitted configuration. `Display` gives the rendered string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Label {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Label {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Two-series dataset injected by the producing process.
///
/// `labels[i]` belongs to `data_values[i]`. The payload is read-only for the
/// lifetime of a mount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    pub labels: Vec<Label>,
    pub dataset_label: String,
    pub data_values: Vec<f64>,
}

impl ChartPayload {
    #[must_use]
    pub fn new<L: Into<Label>>(
        labels: impl IntoIterator<Item = L>,
        dataset_label: impl Into<String>,
        data_values: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            dataset_label: dataset_label.into(),
            data_values: data_values.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data_values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.labels.len() == self.data_values.len()
    }

    /// Enforces index alignment between labels and values.
    pub fn ensure_aligned(&self) -> ChartResult<()> {
        if self.is_aligned() {
            return Ok(());
        }
        Err(ChartError::RejectedPayload {
            labels: self.labels.len(),
            values: self.data_values.len(),
        })
    }

    /// Label strings as they appear on the category axis.
    #[must_use]
    pub fn label_strings(&self) -> Vec<String> {
        self.labels.iter().map(ToString::to_string).collect()
    }
}

use serde::{Deserialize, Serialize};

use crate::core::ChartPayload;
use crate::error::{ChartError, ChartResult};

use super::{ChartConfig, ChartOptionsConfig};

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const CHART_OPTIONS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptionsJsonContractV1 {
    pub schema_version: u32,
    pub options: ChartOptionsConfig,
}

impl ChartConfig {
    /// Bare runtime configuration, as the charting runtime reads it.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config contract v1: {e}"))
        })
    }
}

impl ChartPayload {
    /// Parses `{ labels, dataset_label, data_values }`.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart payload: {e}")))
    }
}

impl ChartOptionsConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartOptionsJsonContractV1 {
            schema_version: CHART_OPTIONS_JSON_SCHEMA_V1,
            options: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart options contract v1: {e}"))
        })
    }

    /// Accepts both the bare options object and the versioned contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart options json: {e}"))
        })?;

        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse chart options json: {e}"))
            });
        }

        let payload: ChartOptionsJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart options contract: {e}"))
        })?;
        if payload.schema_version != CHART_OPTIONS_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart options schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.options)
    }
}

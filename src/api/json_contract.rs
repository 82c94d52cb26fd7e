use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::series::ChartModel;

pub const CHART_MODEL_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for exporting a [`ChartModel`] to other tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartModelJsonContractV1 {
    pub schema_version: u32,
    pub model: ChartModel,
}

impl ChartModel {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart model json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartModelJsonContractV1 {
            schema_version: CHART_MODEL_JSON_SCHEMA_V1,
            model: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart model contract v1: {e}"))
        })
    }

    /// Accepts either a bare model or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(model) = serde_json::from_str::<ChartModel>(input) {
            return Ok(model);
        }
        let payload: ChartModelJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart model json payload: {e}"))
        })?;
        if payload.schema_version != CHART_MODEL_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart model schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.model)
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, EditedData, InputData};

pub const COMMIT_PAYLOAD_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitPayloadJsonContractV1 {
    pub schema_version: u32,
    pub data: EditedData,
}

impl InputData {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse input data json: {e}")))
    }
}

impl EditedData {
    /// Bare payload, in the same JSON shape the host supplied.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize edited data: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = CommitPayloadJsonContractV1 {
            schema_version: COMMIT_PAYLOAD_JSON_SCHEMA_V1,
            data: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize commit contract v1: {e}"))
        })
    }

    /// Accepts both the bare payload and the versioned contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(payload) = serde_json::from_str::<CommitPayloadJsonContractV1>(input) {
            if payload.schema_version != COMMIT_PAYLOAD_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported commit payload schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.data);
        }
        serde_json::from_str::<EditedData>(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse commit payload json: {e}"))
        })
    }
}

impl<R: Renderer> ChartEngine<R> {
    /// Loads host data given as JSON.
    pub fn set_data_json(&mut self, input: &str) -> ChartResult<()> {
        self.set_data(InputData::from_json_str(input)?)
    }

    pub fn last_commit_json_pretty(&self) -> ChartResult<Option<String>> {
        self.last_commit
            .as_ref()
            .map(EditedData::to_json_pretty)
            .transpose()
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{ZoomError, ZoomResult};
use crate::render::Renderer;

use super::{ZoomEngine, ZoomEngineConfig};

pub const ENGINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomEngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ZoomEngineConfig,
}

impl ZoomEngineConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ZoomResult<String> {
        let payload = ZoomEngineConfigJsonContractV1 {
            schema_version: ENGINE_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ZoomError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config payload or a schema-versioned contract.
    pub fn from_json_compat_str(input: &str) -> ZoomResult<Self> {
        if let Ok(config) = serde_json::from_str::<ZoomEngineConfig>(input) {
            return Ok(config);
        }
        let payload: ZoomEngineConfigJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| ZoomError::InvalidData(format!("failed to parse config json payload: {e}")))?;
        if payload.schema_version != ENGINE_CONFIG_JSON_SCHEMA_V1 {
            return Err(ZoomError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

impl<R: Renderer> ZoomEngine<R> {
    pub fn config_json_contract_v1_pretty(&self) -> ZoomResult<String> {
        self.snapshot_config().to_json_contract_v1_pretty()
    }
}

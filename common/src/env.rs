use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvType {
    Local,
    Dev,
    Staging,
    Prod,
}

impl EnvType {
    /// Whether logs should be human readable rather than structured.
    pub fn is_local(&self) -> bool {
        matches!(self, EnvType::Local)
    }
}

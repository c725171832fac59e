use serde::Deserialize;

#[derive(Deserialize)]
pub struct EnvVar {
    #[serde(default = "default_deposit_server_base_url")]
    pub deposit_server_base_url: String,
}

fn default_deposit_server_base_url() -> String {
    "http://localhost:5000".to_string()
}

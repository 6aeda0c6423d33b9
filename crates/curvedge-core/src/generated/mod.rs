use crate::EdgeConfig;
use std::sync::OnceLock;

static DEFAULT_EDGE_CONFIG: OnceLock<EdgeConfig> = OnceLock::new();

pub fn default_edge_config() -> EdgeConfig {
    DEFAULT_EDGE_CONFIG
        .get_or_init(|| {
            let json_text = include_str!("default_config.json");
            let value: serde_json::Value =
                serde_json::from_str(json_text).expect("embedded default config JSON is valid");
            EdgeConfig::from_value(value)
        })
        .clone()
}

use crate::{Algorithm, Error, Result};
use serde_json::{Map, Value};

pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::BezierCatmullRom;
pub const DEFAULT_CURVATURE: f64 = 0.25;
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Rendering configuration for editable edges.
///
/// Stored as a JSON object so hosts can pass partial overrides straight through; the typed
/// accessors fall back to the built-in defaults whenever a value is missing or unusable.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeConfig(Value);

impl Default for EdgeConfig {
    fn default() -> Self {
        crate::generated::default_edge_config()
    }
}

impl EdgeConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Built-in defaults with `overrides` merged on top.
    pub fn with_overrides(overrides: &Value) -> Self {
        let mut cfg = Self::default();
        cfg.deep_merge(overrides);
        cfg
    }

    /// Parses a JSON object of overrides and merges it onto the defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        if !value.is_object() {
            return Err(Error::InvalidConfig {
                message: "config must be a JSON object".to_string(),
            });
        }
        if let Some(raw) = value.get("defaultAlgorithm") {
            if raw.as_str().and_then(Algorithm::parse).is_none() {
                return Err(Error::InvalidConfig {
                    message: format!("unknown defaultAlgorithm: {raw}"),
                });
            }
        }
        if let Some(raw) = value.get("curvature") {
            if !raw.as_f64().is_some_and(|v| v.is_finite() && v >= 0.0) {
                return Err(Error::InvalidConfig {
                    message: format!("curvature must be a non-negative number, got {raw}"),
                });
            }
        }
        Ok(Self::with_overrides(&value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    fn lookup(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.lookup(dotted_path)?.as_str()
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        self.lookup(dotted_path)?.as_f64()
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
    }

    /// Algorithm used when an edge has no (or an unknown) selector.
    pub fn default_algorithm(&self) -> Algorithm {
        self.get_str("defaultAlgorithm")
            .and_then(Algorithm::parse)
            .unwrap_or(DEFAULT_ALGORITHM)
    }

    pub fn resolve_algorithm(&self, selected: Option<Algorithm>) -> Algorithm {
        selected.unwrap_or_else(|| self.default_algorithm())
    }

    /// Bezier handle length as a fraction of the adjacent chord.
    pub fn curvature(&self) -> f64 {
        self.get_f64("curvature")
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(DEFAULT_CURVATURE)
    }

    pub fn stroke_width(&self) -> f64 {
        self.get_f64("strokeWidth")
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(DEFAULT_STROKE_WIDTH)
    }

    pub fn color(&self, algorithm: Algorithm) -> String {
        let key = format!("colors.{}", algorithm.as_str());
        match self.get_str(&key) {
            Some(c) if !c.trim().is_empty() => c.to_string(),
            _ => builtin_color(algorithm).to_string(),
        }
    }
}

fn builtin_color(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Linear => "#0375ff",
        Algorithm::Bezier => "#ffb703",
        Algorithm::CatmullRom => "#ff0072",
        Algorithm::BezierCatmullRom => "#68d391",
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(in_map)) => {
            for (key, in_value) in in_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, in_value),
                    None => {
                        base_map.insert(key.clone(), in_value.clone());
                    }
                }
            }
        }
        (base_slot, in_value) => {
            *base_slot = in_value.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_builtin_constants() {
        let cfg = EdgeConfig::default();
        assert_eq!(cfg.default_algorithm(), DEFAULT_ALGORITHM);
        assert_eq!(cfg.curvature(), DEFAULT_CURVATURE);
        assert_eq!(cfg.stroke_width(), DEFAULT_STROKE_WIDTH);
        for alg in Algorithm::ALL {
            assert_eq!(cfg.color(alg), builtin_color(alg));
        }
    }

    #[test]
    fn overrides_merge_without_dropping_sibling_keys() {
        let cfg = EdgeConfig::with_overrides(&json!({
            "colors": { "linear": "#000" },
            "curvature": 0.5
        }));
        assert_eq!(cfg.color(Algorithm::Linear), "#000");
        assert_eq!(cfg.color(Algorithm::Bezier), "#ffb703");
        assert_eq!(cfg.curvature(), 0.5);
    }

    #[test]
    fn unusable_values_fall_back_to_defaults() {
        let cfg = EdgeConfig::with_overrides(&json!({
            "defaultAlgorithm": "wiggly",
            "curvature": -3,
            "strokeWidth": "thick"
        }));
        assert_eq!(cfg.default_algorithm(), DEFAULT_ALGORITHM);
        assert_eq!(cfg.curvature(), DEFAULT_CURVATURE);
        assert_eq!(cfg.stroke_width(), DEFAULT_STROKE_WIDTH);

        let empty = EdgeConfig::empty_object();
        assert_eq!(empty.resolve_algorithm(None), DEFAULT_ALGORITHM);
        assert_eq!(
            empty.resolve_algorithm(Some(Algorithm::Linear)),
            Algorithm::Linear
        );
    }

    #[test]
    fn from_json_str_rejects_bad_documents() {
        let err = EdgeConfig::from_json_str("[1, 2]").unwrap_err().to_string();
        assert_eq!(err, "Invalid edge config: config must be a JSON object");

        let err = EdgeConfig::from_json_str(r#"{ "defaultAlgorithm": "zigzag" }"#)
            .unwrap_err()
            .to_string();
        assert_eq!(err, r#"Invalid edge config: unknown defaultAlgorithm: "zigzag""#);

        assert!(matches!(
            EdgeConfig::from_json_str("{"),
            Err(Error::Json(_))
        ));

        let cfg = EdgeConfig::from_json_str(r#"{ "defaultAlgorithm": "linear" }"#).unwrap();
        assert_eq!(cfg.default_algorithm(), Algorithm::Linear);
    }
}

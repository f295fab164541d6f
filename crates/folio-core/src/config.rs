use serde_json::{Map, Value, json};

/// Geometry constants consumed by the chart generators.
///
/// Stored as a JSON object so overrides can be deep-merged from files and so lookups can fall
/// back to defaults when a key is missing or carries a non-numeric value.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryConfig(Value);

impl Default for GeometryConfig {
    fn default() -> Self {
        Self(default_geometry_config())
    }
}

pub fn default_geometry_config() -> Value {
    json!({
        "radar": {
            "center": 250.0,
            "radius": 180.0,
            "maxScale": 6.0,
            "labelValue": 7.0,
            "gridLevels": [0.2, 0.4, 0.6, 0.8, 1.0]
        },
        "pie": {
            "center": 200.0,
            "radius": 160.0,
            "labelOffset": 30.0
        },
        "scatter": {
            "tension": 0.3,
            "plotSize": 100.0
        },
        "bar": {
            "horizontalCeiling": 150.0,
            "verticalCeiling": 100.0
        },
        "flywheel": {
            "center": 350.0,
            "outerRadius": 260.0,
            "innerRadius": 200.0,
            "gapDegrees": 8.0,
            "tipDegrees": 5.0
        }
    })
}

impl GeometryConfig {
    /// Defaults with `overrides` merged on top.
    pub fn with_overrides(overrides: &Value) -> Self {
        let mut cfg = Self::default();
        cfg.deep_merge(overrides);
        cfg
    }

    fn lookup(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        let v = self.lookup(dotted_path)?;
        v.as_f64()
            .or_else(|| v.as_i64().map(|n| n as f64))
            .or_else(|| v.as_u64().map(|n| n as f64))
            .filter(|n| n.is_finite())
    }

    pub fn f64_or(&self, dotted_path: &str, default: f64) -> f64 {
        self.get_f64(dotted_path).unwrap_or(default)
    }

    pub fn f64_list(&self, dotted_path: &str) -> Option<Vec<f64>> {
        let arr = self.lookup(dotted_path)?.as_array()?;
        Some(
            arr.iter()
                .filter_map(|v| v.as_f64())
                .filter(|n| n.is_finite())
                .collect(),
        )
    }

    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }

        let Value::Object(ref mut root) = self.0 else {
            return;
        };
        let mut cur: &mut Map<String, Value> = root;
        let mut segments = dotted_path.split('.').peekable();
        while let Some(seg) = segments.next() {
            if segments.peek().is_none() {
                cur.insert(seg.to_string(), value);
                return;
            }
            let slot = cur.entry(seg).or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Some(next) = slot.as_object_mut() else {
                return;
            };
            cur = next;
        }
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
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

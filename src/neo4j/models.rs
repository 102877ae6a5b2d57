//! Raw graph shapes returned by the store, before any typing

use serde_json::{Map, Value};

/// A node as read from the graph: its primary label plus a loose property map.
///
/// This is the duck-typed boundary. Nothing outside `medical::mapper` should
/// read `properties` directly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawNode {
    /// Primary label (`labels(n)[0]`), if the node has any
    pub label: Option<String>,
    pub properties: Map<String, Value>,
}

impl RawNode {
    pub fn new(label: Option<String>, properties: Map<String, Value>) -> Self {
        Self { label, properties }
    }

    /// Build a node from a JSON object literal. Non-object values yield no properties.
    pub fn from_json(label: &str, properties: Value) -> Self {
        let properties = match properties {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(Some(label.to_string()), properties)
    }

    /// Property value, with explicit `null` treated the same as absent
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key).filter(|v| !v.is_null())
    }

    /// The `name` property when it is a string
    pub fn name(&self) -> Option<&str> {
        self.property("name").and_then(Value::as_str)
    }
}

/// Result of the disease lookup query: the disease plus its one-hop neighbours
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiseaseRecord {
    pub disease: RawNode,
    pub symptoms: Vec<RawNode>,
    pub drugs: Vec<RawNode>,
}

//! Response entities for the medical knowledge graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// A disease, optionally with its one-hop symptoms and drugs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub name: String,
    #[serde(rename = "type")]
    pub disease_type: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub drugs: Vec<Drug>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub name: String,
    pub severity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drug {
    pub name: String,
    #[serde(rename = "type")]
    pub drug_type: Option<String>,
}

/// Search hits bucketed by entity type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The caller's query, unmodified
    pub query: String,
    pub diseases: Vec<Disease>,
    pub symptoms: Vec<Symptom>,
    pub drugs: Vec<Drug>,
}

impl SearchResult {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            diseases: Vec::new(),
            symptoms: Vec::new(),
            drugs: Vec::new(),
        }
    }
}

/// Node labels the API knows how to shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeLabel {
    Disease,
    Symptom,
    Drug,
}

impl NodeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeLabel::Disease => "Disease",
            NodeLabel::Symptom => "Symptom",
            NodeLabel::Drug => "Drug",
        }
    }

    /// Exact, case-sensitive label match; `None` for untracked labels
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Disease" => Some(NodeLabel::Disease),
            "Symptom" => Some(NodeLabel::Symptom),
            "Drug" => Some(NodeLabel::Drug),
            _ => None,
        }
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Raw graph nodes to typed entities.
//!
//! This is the only place that decides which node properties are required.
//! `name` must be present and a string; everything else defaults to `None`.

use super::models::{Disease, Drug, NodeLabel, Symptom};
use crate::neo4j::{DiseaseRecord, RawNode};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MappingError {
    #[error("{label} node is missing required property `{property}`")]
    MissingProperty {
        label: NodeLabel,
        property: &'static str,
    },
}

fn required_name(node: &RawNode, label: NodeLabel) -> Result<String, MappingError> {
    node.name()
        .map(str::to_string)
        .ok_or(MappingError::MissingProperty {
            label,
            property: "name",
        })
}

/// Strings as-is, other scalars in their JSON text form
fn optional_string(node: &RawNode, key: &str) -> Option<String> {
    match node.property(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Shallow disease: no symptoms or drugs attached
pub fn disease_from_node(node: &RawNode) -> Result<Disease, MappingError> {
    Ok(Disease {
        name: required_name(node, NodeLabel::Disease)?,
        disease_type: optional_string(node, "type"),
        symptoms: Vec::new(),
        drugs: Vec::new(),
    })
}

pub fn symptom_from_node(node: &RawNode) -> Result<Symptom, MappingError> {
    Ok(Symptom {
        name: required_name(node, NodeLabel::Symptom)?,
        severity: optional_string(node, "severity"),
    })
}

pub fn drug_from_node(node: &RawNode) -> Result<Drug, MappingError> {
    Ok(Drug {
        name: required_name(node, NodeLabel::Drug)?,
        drug_type: optional_string(node, "type"),
    })
}

/// Disease with its related nodes, preserving their order
pub fn disease_from_record(record: &DiseaseRecord) -> Result<Disease, MappingError> {
    let mut disease = disease_from_node(&record.disease)?;
    disease.symptoms = record
        .symptoms
        .iter()
        .map(symptom_from_node)
        .collect::<Result<Vec<_>, _>>()?;
    disease.drugs = record
        .drugs
        .iter()
        .map(drug_from_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(disease)
}

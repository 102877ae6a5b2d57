//! Disease lookup and name search over the graph store

use super::mapper::{self, MappingError};
use super::models::{Disease, NodeLabel, SearchResult};
use crate::neo4j::GraphStore;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The store could not be reached or rejected the query
    #[error("graph store error: {0:#}")]
    Store(#[from] anyhow::Error),
    /// A node in the store lacks a required property
    #[error("malformed graph data: {0}")]
    Mapping(#[from] MappingError),
}

/// Read-only queries against the medical graph
pub struct MedicalService {
    store: Arc<dyn GraphStore>,
}

impl MedicalService {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Disease by exact name with its symptoms and drugs, or `None`
    pub async fn get_disease(&self, name: &str) -> Result<Option<Disease>, ServiceError> {
        let Some(record) = self.store.find_disease(name).await? else {
            tracing::debug!(disease = name, "Disease not found");
            return Ok(None);
        };

        Ok(Some(mapper::disease_from_record(&record)?))
    }

    /// Case-insensitive substring search over names, bucketed by label.
    ///
    /// Results are shallow: diseases carry no symptoms or drugs. Nodes with
    /// any other label are dropped.
    pub async fn search(&self, query: &str) -> Result<SearchResult, ServiceError> {
        let nodes = self.store.search_nodes(query).await?;
        let mut result = SearchResult::empty(query);

        for node in &nodes {
            match node.label.as_deref().and_then(NodeLabel::from_label) {
                Some(NodeLabel::Disease) => result.diseases.push(mapper::disease_from_node(node)?),
                Some(NodeLabel::Symptom) => result.symptoms.push(mapper::symptom_from_node(node)?),
                Some(NodeLabel::Drug) => result.drugs.push(mapper::drug_from_node(node)?),
                None => {
                    tracing::debug!(
                        label = node.label.as_deref().unwrap_or("<none>"),
                        name = node.name().unwrap_or_default(),
                        "Skipping search hit with untracked label"
                    );
                }
            }
        }

        tracing::debug!(
            query,
            diseases = result.diseases.len(),
            symptoms = result.symptoms.len(),
            drugs = result.drugs.len(),
            "Search results partitioned"
        );
        Ok(result)
    }

    /// True when the store answers a ping
    pub async fn health_check(&self) -> bool {
        self.store.health_check().await.unwrap_or(false)
    }
}

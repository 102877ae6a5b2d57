//! In-memory mock implementation of GraphStore for testing.
//!
//! Mirrors the Cypher semantics of `Neo4jClient` over plain collections
//! guarded by `tokio::sync::RwLock`. Conditionally compiled with `#[cfg(test)]`.

use crate::neo4j::models::*;
use crate::neo4j::traits::GraphStore;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// In-memory mock implementation of GraphStore for testing.
#[derive(Default)]
pub struct MockGraphStore {
    pub nodes: RwLock<Vec<RawNode>>,

    // Relationships (disease name -> target names)
    pub has_symptom: RwLock<HashMap<String, Vec<String>>>,
    pub treated_with: RwLock<HashMap<String, Vec<String>>>,

    /// When set, every query fails with this message
    pub failure: RwLock<Option<String>>,
    /// Number of queries issued (health checks excluded)
    pub queries: AtomicUsize,
}

impl MockGraphStore {
    /// Create a new empty MockGraphStore.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_node(&self, node: RawNode) {
        self.nodes.write().await.push(node);
    }

    pub async fn link_symptom(&self, disease: &str, symptom: &str) {
        self.has_symptom
            .write()
            .await
            .entry(disease.to_string())
            .or_default()
            .push(symptom.to_string());
    }

    pub async fn link_drug(&self, disease: &str, drug: &str) {
        self.treated_with
            .write()
            .await
            .entry(disease.to_string())
            .or_default()
            .push(drug.to_string());
    }

    pub async fn fail_with(&self, message: &str) {
        *self.failure.write().await = Some(message.to_string());
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    async fn begin_query(&self) -> Result<()> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        match self.failure.read().await.as_ref() {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(()),
        }
    }

    /// Nodes with `label` whose name is one of `names`, deduplicated like `collect(DISTINCT ..)`
    fn neighbours(nodes: &[RawNode], label: &str, names: Option<&Vec<String>>) -> Vec<RawNode> {
        let mut found: Vec<RawNode> = Vec::new();
        for name in names.into_iter().flatten() {
            for node in nodes
                .iter()
                .filter(|n| n.label.as_deref() == Some(label) && n.name() == Some(name.as_str()))
            {
                if !found.contains(node) {
                    found.push(node.clone());
                }
            }
        }
        found
    }
}

#[async_trait]
impl GraphStore for MockGraphStore {
    async fn find_disease(&self, name: &str) -> Result<Option<DiseaseRecord>> {
        self.begin_query().await?;

        let nodes = self.nodes.read().await;
        let disease = nodes
            .iter()
            .find(|n| n.label.as_deref() == Some("Disease") && n.name() == Some(name));

        let Some(disease) = disease else {
            return Ok(None);
        };

        let symptoms = Self::neighbours(&nodes, "Symptom", self.has_symptom.read().await.get(name));
        let drugs = Self::neighbours(&nodes, "Drug", self.treated_with.read().await.get(name));

        Ok(Some(DiseaseRecord {
            disease: disease.clone(),
            symptoms,
            drugs,
        }))
    }

    async fn search_nodes(&self, query: &str) -> Result<Vec<RawNode>> {
        self.begin_query().await?;

        let needle = query.to_lowercase();
        let nodes = self.nodes.read().await;
        Ok(nodes
            .iter()
            .filter(|n| {
                n.name()
                    .map(|name| name.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.failure.read().await.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_find_disease_collects_distinct_neighbours() {
        let store = MockGraphStore::new();
        store
            .add_node(RawNode::from_json("Disease", json!({"name": "Flu"})))
            .await;
        store
            .add_node(RawNode::from_json("Symptom", json!({"name": "Fever"})))
            .await;
        store.link_symptom("Flu", "Fever").await;
        store.link_symptom("Flu", "Fever").await;

        let record = store.find_disease("Flu").await.unwrap().unwrap();
        assert_eq!(record.symptoms.len(), 1);
        assert!(record.drugs.is_empty());
        assert!(store.find_disease("flu").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failure_is_reported() {
        let store = MockGraphStore::new();
        store.fail_with("connection refused").await;

        let err = store.search_nodes("x").await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
        assert!(!store.health_check().await.unwrap());
        assert_eq!(store.query_count(), 1);
    }
}

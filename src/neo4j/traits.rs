//! GraphStore trait definition
//!
//! Abstract interface over the read queries the API needs. `Neo4jClient`
//! implements it for production; tests use the in-memory mock.

use crate::neo4j::models::*;
use anyhow::Result;
use async_trait::async_trait;

/// Abstract interface for all graph database operations.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Disease by exact, case-sensitive name plus its symptoms and drugs.
    /// `None` when no Disease node has that name.
    async fn find_disease(&self, name: &str) -> Result<Option<DiseaseRecord>>;

    /// Every node whose `name` contains `query` case-insensitively, labelled
    /// with its primary label. An empty query matches every named node.
    async fn search_nodes(&self, query: &str) -> Result<Vec<RawNode>>;

    /// Check connectivity
    async fn health_check(&self) -> Result<bool>;
}

//! `GraphStore` implementation for `Neo4jClient`.
//!
//! Every method simply delegates to the corresponding inherent method on `Neo4jClient`.

use async_trait::async_trait;

use super::client::Neo4jClient;
use super::models::*;
use super::traits::GraphStore;

#[async_trait]
impl GraphStore for Neo4jClient {
    async fn find_disease(&self, name: &str) -> anyhow::Result<Option<DiseaseRecord>> {
        self.find_disease(name).await
    }

    async fn search_nodes(&self, query: &str) -> anyhow::Result<Vec<RawNode>> {
        self.search_nodes(query).await
    }

    async fn health_check(&self) -> anyhow::Result<bool> {
        self.health_check().await
    }
}

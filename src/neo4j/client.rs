//! Neo4j client for reading the medical knowledge graph

use super::models::*;
use anyhow::{Context, Result};
use neo4rs::{query, Graph};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Disease by exact name, with its symptoms and treating drugs in one round trip.
///
/// The two OPTIONAL MATCHes multiply into a cartesian product, so both
/// collections are DISTINCT.
const DISEASE_LOOKUP: &str = r#"
    MATCH (d:Disease {name: $name})
    OPTIONAL MATCH (d)-[:HAS_SYMPTOM]->(s:Symptom)
    OPTIONAL MATCH (d)-[:TREATED_WITH]->(dr:Drug)
    RETURN d, collect(DISTINCT s) AS symptoms, collect(DISTINCT dr) AS drugs
"#;

/// Case-insensitive substring match on `name` across every label
const NAME_SEARCH: &str = r#"
    MATCH (n)
    WHERE toLower(n.name) CONTAINS toLower($query)
    RETURN n, labels(n)[0] AS type
"#;

/// Client for Neo4j operations
pub struct Neo4jClient {
    graph: Arc<Graph>,
}

impl Neo4jClient {
    /// Create a new Neo4j client
    ///
    /// The underlying `Graph` is a connection pool; each query below checks a
    /// connection out and returns it when its row stream is dropped.
    pub async fn new(uri: &str, user: &str, password: &str) -> Result<Self> {
        let graph = Graph::new(uri, user, password)
            .await
            .context("Failed to connect to Neo4j")?;

        Ok(Self {
            graph: Arc::new(graph),
        })
    }

    /// Execute a raw Cypher query and drain its rows (internal use only)
    pub(crate) async fn execute(&self, cypher: &str) -> Result<Vec<neo4rs::Row>> {
        let mut result = self.graph.execute(query(cypher)).await?;
        let mut rows = Vec::new();
        while let Some(row) = result.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Get a disease and its one-hop neighbourhood by exact name
    pub async fn find_disease(&self, name: &str) -> Result<Option<DiseaseRecord>> {
        let q = query(DISEASE_LOOKUP).param("name", name);

        let mut result = self
            .graph
            .execute(q)
            .await
            .context("Disease lookup query failed")?;

        match result.next().await? {
            Some(row) => {
                let record = disease_record_from_row(&row)?;
                tracing::debug!(
                    disease = name,
                    symptoms = record.symptoms.len(),
                    drugs = record.drugs.len(),
                    "Disease found"
                );
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// All nodes whose `name` contains `query`, ignoring case
    pub async fn search_nodes(&self, search: &str) -> Result<Vec<RawNode>> {
        let q = query(NAME_SEARCH).param("query", search);

        let mut result = self
            .graph
            .execute(q)
            .await
            .context("Search query failed")?;

        let mut nodes = Vec::new();
        while let Some(row) = result.next().await? {
            nodes.push(search_hit_from_row(&row)?);
        }

        tracing::debug!(query = search, hits = nodes.len(), "Search complete");
        Ok(nodes)
    }

    /// Ping the database
    pub async fn health_check(&self) -> Result<bool> {
        match self.execute("RETURN 1 AS ping").await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!("Neo4j health check failed: {}", e);
                Ok(false)
            }
        }
    }
}

/// Decode a lookup row. Every column must decode; a bad neighbour list is an
/// error rather than an empty list.
fn disease_record_from_row(row: &neo4rs::Row) -> Result<DiseaseRecord> {
    let disease: neo4rs::Node = row.get("d").context("Failed to decode disease node")?;
    let symptoms: Vec<neo4rs::Node> = row
        .get("symptoms")
        .context("Failed to decode symptoms")?;
    let drugs: Vec<neo4rs::Node> = row.get("drugs").context("Failed to decode drugs")?;

    Ok(DiseaseRecord {
        disease: node_to_raw(&disease, None),
        symptoms: symptoms.iter().map(|n| node_to_raw(n, None)).collect(),
        drugs: drugs.iter().map(|n| node_to_raw(n, None)).collect(),
    })
}

/// Decode a search row; `type` is null for label-less nodes
fn search_hit_from_row(row: &neo4rs::Row) -> Result<RawNode> {
    let node: neo4rs::Node = row.get("n").context("Failed to decode search hit")?;
    let label: Option<String> = row
        .get("type")
        .context("Failed to decode search hit label")?;
    Ok(node_to_raw(&node, label))
}

/// Copy a driver node into a `RawNode`.
///
/// `label` overrides the node's first label when the query already projected it.
fn node_to_raw(node: &neo4rs::Node, label: Option<String>) -> RawNode {
    let label = label.or_else(|| node.labels().first().map(|l| l.to_string()));

    let mut properties = Map::new();
    for key in node.keys() {
        if let Some(value) = property_value(node, key) {
            properties.insert(key.to_string(), value);
        }
    }

    RawNode::new(label, properties)
}

/// Scalar properties only; lists and maps are skipped
fn property_value(node: &neo4rs::Node, key: &str) -> Option<Value> {
    if let Ok(s) = node.get::<String>(key) {
        return Some(Value::String(s));
    }
    if let Ok(i) = node.get::<i64>(key) {
        return Some(Value::from(i));
    }
    if let Ok(f) = node.get::<f64>(key) {
        return serde_json::Number::from_f64(f).map(Value::Number);
    }
    if let Ok(b) = node.get::<bool>(key) {
        return Some(Value::Bool(b));
    }
    None
}

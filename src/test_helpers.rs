//! Test helper factories and mock state builders
//!
//! Provides a seeded in-memory graph and helpers for building mock
//! AppState / ServerState instances.
#![allow(dead_code)]

use crate::api::handlers::{ApiState, ServerState};
use crate::medical::MedicalService;
use crate::neo4j::mock::MockGraphStore;
use crate::neo4j::RawNode;
use crate::{AppState, Config};
use serde_json::json;
use std::sync::Arc;

// ============================================================================
// Mock state builders
// ============================================================================

pub fn mock_config() -> Config {
    Config {
        neo4j_uri: "bolt://mock:7687".to_string(),
        neo4j_user: "neo4j".to_string(),
        neo4j_password: "mock".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
    }
}

/// Create a mock AppState over the given graph
pub fn mock_app_state_with(graph: Arc<MockGraphStore>) -> AppState {
    AppState {
        neo4j: graph,
        config: Arc::new(mock_config()),
    }
}

/// Create a mock ServerState over the given graph
pub fn mock_server_state(graph: Arc<MockGraphStore>) -> ApiState {
    let state = mock_app_state_with(graph);
    Arc::new(ServerState {
        service: Arc::new(MedicalService::new(state.neo4j)),
    })
}

// ============================================================================
// Seed data
// ============================================================================

/// Small graph used across tests:
///
/// - Flu (Viral) -HAS_SYMPTOM-> Fever (high), Cough (mild); -TREATED_WITH-> Oseltamivir
/// - Gout, no relations
/// - Headache, Aspirin unlinked
pub async fn seeded_graph() -> MockGraphStore {
    let graph = MockGraphStore::new();

    for node in [
        RawNode::from_json("Disease", json!({"name": "Flu", "type": "Viral"})),
        RawNode::from_json("Disease", json!({"name": "Gout"})),
        RawNode::from_json("Symptom", json!({"name": "Fever", "severity": "high"})),
        RawNode::from_json("Symptom", json!({"name": "Cough", "severity": "mild"})),
        RawNode::from_json("Symptom", json!({"name": "Headache"})),
        RawNode::from_json("Drug", json!({"name": "Oseltamivir", "type": "Antiviral"})),
        RawNode::from_json("Drug", json!({"name": "Aspirin", "type": "NSAID"})),
    ] {
        graph.add_node(node).await;
    }

    graph.link_symptom("Flu", "Fever").await;
    graph.link_symptom("Flu", "Cough").await;
    graph.link_drug("Flu", "Oseltamivir").await;

    graph
}

//! Medical knowledge graph: typed entities, node mapping and the query service

pub mod mapper;
pub mod models;
pub mod service;

pub use mapper::MappingError;
pub use models::*;
pub use service::{MedicalService, ServiceError};

//! Backend de gerenciamento de territórios.
//! Tabela in-memory com capacidade limitada, sem persistência entre execuções.

pub mod error;
pub mod model;
pub mod repository;

pub use error::TerritoryError;
pub use model::{NewTerritory, StoreConfig, TerritoryUpdate};
pub use repository::{InMemoryRepository, TerritoryRepository};

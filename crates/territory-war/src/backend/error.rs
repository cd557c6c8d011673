use thiserror::Error;

/// Falhas recuperáveis do gerenciador de territórios.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerritoryError {
    #[error("Territory limit reached ({capacity}).")]
    CapacityExceeded { capacity: usize },
    #[error("Territory '{name}' not found.")]
    NotFound { name: String },
}

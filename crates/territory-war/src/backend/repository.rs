use super::error::TerritoryError;
use super::model::{NewTerritory, StoreConfig, Territory, TerritoryUpdate};

pub trait TerritoryRepository {
    fn create(&mut self, new: NewTerritory) -> Result<Territory, TerritoryError>;
    fn find_by_name(&self, query: &str) -> Result<usize, TerritoryError>;
    fn list(&self) -> &[Territory];
    fn update(&mut self, query: &str, update: TerritoryUpdate) -> Result<Territory, TerritoryError>;
    fn delete(&mut self, query: &str) -> Result<Territory, TerritoryError>;
    fn capacity(&self) -> usize;

    fn get_by_name(&self, query: &str) -> Result<&Territory, TerritoryError> {
        let index = self.find_by_name(query)?;
        Ok(&self.list()[index])
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

/// Tabela de territórios em memória, em ordem de inserção.
#[derive(Debug)]
pub struct InMemoryRepository {
    territories: Vec<Territory>,
    next_id: u32,
    config: StoreConfig,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::with_config(StoreConfig::default())
    }
}

impl InMemoryRepository {
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            territories: Vec::new(),
            next_id: 1,
            config,
        }
    }

    fn not_found(query: &str) -> TerritoryError {
        log::debug!("territory '{query}' not found");
        TerritoryError::NotFound {
            name: query.to_string(),
        }
    }
}

impl TerritoryRepository for InMemoryRepository {
    fn create(&mut self, new: NewTerritory) -> Result<Territory, TerritoryError> {
        if self.is_full() {
            log::warn!(
                "rejecting territory '{}': capacity {} reached",
                new.name,
                self.config.capacity
            );
            return Err(TerritoryError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }

        let territory = Territory::new(self.next_id, new);
        self.next_id += 1;
        self.territories.push(territory.clone());
        log::debug!("created territory {territory}");
        Ok(territory)
    }

    fn find_by_name(&self, query: &str) -> Result<usize, TerritoryError> {
        self.territories
            .iter()
            .position(|t| t.matches_name(query))
            .ok_or_else(|| Self::not_found(query))
    }

    fn list(&self) -> &[Territory] {
        &self.territories
    }

    fn update(&mut self, query: &str, update: TerritoryUpdate) -> Result<Territory, TerritoryError> {
        let index = self.find_by_name(query)?;
        let territory = &mut self.territories[index];
        territory.apply(update);
        log::debug!("updated territory {territory}");
        Ok(territory.clone())
    }

    fn delete(&mut self, query: &str) -> Result<Territory, TerritoryError> {
        let index = self.find_by_name(query)?;
        // Vec::remove desloca os seguintes uma posição à esquerda
        let removed = self.territories.remove(index);
        log::debug!("removed territory {removed}");
        Ok(removed)
    }

    fn capacity(&self) -> usize {
        self.config.capacity
    }
}

//! In-memory store for the server default and for tests.
//!
//! [`InMemoryStore`] keeps both collaborators — the emission factor catalog
//! and the product repository — in `HashMap`s behind `RwLock`s, with a
//! shared monotonically increasing id counter per table. Data is lost when
//! the store is dropped.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use foodprint_core::{FactorLookup, LookupError};
use foodprint_types::{EmissionFactor, FoodProduct};

use crate::error::{Result, StoreError, FACTOR_ENTITY, PRODUCT_ENTITY};
use crate::records::{EmissionFactorRecord, FoodProductRecord};
use crate::traits::{EmissionFactorCatalog, ProductRepository};

/// An in-memory implementation of both store traits.
///
/// Records are keyed by name; ids start at 1 and are assigned in insert
/// order per table.
#[derive(Debug)]
pub struct InMemoryStore {
    factors: RwLock<HashMap<String, EmissionFactorRecord>>,
    products: RwLock<HashMap<String, FoodProductRecord>>,
    next_factor_id: AtomicU64,
    next_product_id: AtomicU64,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            factors: RwLock::new(HashMap::new()),
            products: RwLock::new(HashMap::new()),
            next_factor_id: AtomicU64::new(1),
            next_product_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(e: impl std::fmt::Display) -> StoreError {
    StoreError::Internal(format!("lock poisoned: {e}"))
}

impl FactorLookup for InMemoryStore {
    fn find_by_names(&self, names: &[String]) -> std::result::Result<Vec<EmissionFactor>, LookupError> {
        let factors = self
            .factors
            .read()
            .map_err(|e| LookupError(format!("lock poisoned: {e}")))?;
        let mut matched: Vec<&EmissionFactorRecord> = factors
            .values()
            .filter(|record| names.iter().any(|n| n == &record.factor.name))
            .collect();
        matched.sort_by_key(|record| record.id);
        Ok(matched.into_iter().map(|r| r.factor.clone()).collect())
    }
}

impl EmissionFactorCatalog for InMemoryStore {
    fn find_all(&self) -> Result<Vec<EmissionFactorRecord>> {
        let factors = self.factors.read().map_err(poisoned)?;
        let mut records: Vec<EmissionFactorRecord> = factors.values().cloned().collect();
        records.sort_by_key(|record| record.id);
        Ok(records)
    }

    fn find_by_name(&self, name: &str) -> Result<EmissionFactorRecord> {
        let factors = self.factors.read().map_err(poisoned)?;
        factors.get(name).cloned().ok_or_else(|| StoreError::NotFound {
            entity: FACTOR_ENTITY,
            name: name.to_string(),
        })
    }

    fn insert(&self, factor: EmissionFactor) -> Result<EmissionFactorRecord> {
        let mut factors = self.factors.write().map_err(poisoned)?;
        if factors.contains_key(&factor.name) {
            return Err(StoreError::AlreadyExists {
                entity: FACTOR_ENTITY,
                name: factor.name,
            });
        }
        let record = EmissionFactorRecord {
            id: self.next_factor_id.fetch_add(1, Ordering::Relaxed),
            factor,
        };
        tracing::debug!(name = %record.factor.name, id = record.id, "stored emission factor");
        factors.insert(record.factor.name.clone(), record.clone());
        Ok(record)
    }
}

impl ProductRepository for InMemoryStore {
    fn find_by_name(&self, name: &str) -> Result<FoodProductRecord> {
        let products = self.products.read().map_err(poisoned)?;
        products.get(name).cloned().ok_or_else(|| StoreError::NotFound {
            entity: PRODUCT_ENTITY,
            name: name.to_string(),
        })
    }

    fn insert(&self, product: FoodProduct) -> Result<FoodProductRecord> {
        let mut products = self.products.write().map_err(poisoned)?;
        if products.contains_key(&product.name) {
            return Err(StoreError::AlreadyExists {
                entity: PRODUCT_ENTITY,
                name: product.name,
            });
        }
        let record = FoodProductRecord {
            id: self.next_product_id.fetch_add(1, Ordering::Relaxed),
            product,
        };
        tracing::debug!(name = %record.product.name, id = record.id, "stored food product");
        products.insert(record.product.name.clone(), record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodprint_types::Ingredient;

    fn ham() -> EmissionFactor {
        EmissionFactor::new("ham", "kg", Some(0.11), "Agrybalise").unwrap()
    }

    fn beef() -> EmissionFactor {
        EmissionFactor::new("beef", "kg", Some(14.0), "Agrybalise").unwrap()
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let store = InMemoryStore::new();
        let first = EmissionFactorCatalog::insert(&store, ham()).unwrap();
        let second = EmissionFactorCatalog::insert(&store, beef()).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn default_store_ids_also_start_at_one() {
        let store = InMemoryStore::default();
        let record = EmissionFactorCatalog::insert(&store, ham()).unwrap();
        assert_eq!(record.id, 1);
        let product = FoodProduct::new("vinaigrette", Some(0.16), Vec::new()).unwrap();
        assert_eq!(ProductRepository::insert(&store, product).unwrap().id, 1);
    }

    #[test]
    fn duplicate_factor_name_conflicts() {
        let store = InMemoryStore::new();
        EmissionFactorCatalog::insert(&store, ham()).unwrap();
        let err = EmissionFactorCatalog::insert(&store, ham()).unwrap_err();
        assert_eq!(err.to_string(), "Carbon Emission factor 'ham' already exists");
    }

    #[test]
    fn find_by_name_misses_with_contract_message() {
        let store = InMemoryStore::new();
        let err = EmissionFactorCatalog::find_by_name(&store, "chocolate").unwrap_err();
        assert_eq!(err.to_string(), "Carbon Emission factor chocolate not found");
    }

    #[test]
    fn find_all_is_ordered_by_id() {
        let store = InMemoryStore::new();
        EmissionFactorCatalog::insert(&store, beef()).unwrap();
        EmissionFactorCatalog::insert(&store, ham()).unwrap();
        let all = store.find_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].factor.name, "beef");
        assert_eq!(all[1].factor.name, "ham");
    }

    #[test]
    fn find_by_names_returns_only_matches() {
        let store = InMemoryStore::new();
        EmissionFactorCatalog::insert(&store, ham()).unwrap();
        EmissionFactorCatalog::insert(&store, beef()).unwrap();
        let found = store
            .find_by_names(&["ham".to_string(), "bread".to_string()])
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "ham");
    }

    #[test]
    fn insert_many_stops_at_first_conflict() {
        let store = InMemoryStore::new();
        EmissionFactorCatalog::insert(&store, ham()).unwrap();
        let err = store.insert_many(vec![beef(), ham()]).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists { .. }));
        // beef made it in before the conflict.
        assert!(EmissionFactorCatalog::find_by_name(&store, "beef").is_ok());
    }

    #[test]
    fn duplicate_product_name_conflicts() {
        let store = InMemoryStore::new();
        let vinaigrette = FoodProduct::new(
            "vinaigrette",
            Some(0.18),
            vec![Ingredient::new("oliveOil", 0.15, "kg")],
        )
        .unwrap();
        ProductRepository::insert(&store, vinaigrette.clone()).unwrap();
        let err = ProductRepository::insert(&store, vinaigrette).unwrap_err();
        assert_eq!(err.to_string(), "Food Product 'vinaigrette' already exists");
    }

    #[test]
    fn missing_product_not_found() {
        let store = InMemoryStore::new();
        let err = ProductRepository::find_by_name(&store, "ham").unwrap_err();
        assert_eq!(err.to_string(), "Food Product ham not found");
    }

    #[test]
    fn product_round_trips() {
        let store = InMemoryStore::new();
        let product = FoodProduct::new(
            "chocolateBar",
            Some(0.4),
            vec![
                Ingredient::new("chocolate", 0.2, "kg"),
                Ingredient::new("cereal", 0.1, "kg"),
            ],
        )
        .unwrap();
        ProductRepository::insert(&store, product.clone()).unwrap();
        let read = ProductRepository::find_by_name(&store, "chocolateBar").unwrap();
        assert_eq!(read.product, product);
    }
}

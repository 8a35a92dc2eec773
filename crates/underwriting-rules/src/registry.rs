use std::collections::BTreeMap;
use std::sync::Arc;

use underwriting_core::{Result, ScoringModel, UnderwritingError};

use crate::probe::ProbeModel5lProfit;

/// Scoring models addressable by name.
#[derive(Clone, Default)]
pub struct ModelRegistry {
    models: BTreeMap<&'static str, Arc<dyn ScoringModel>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every model shipped with this crate.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ProbeModel5lProfit::new()));
        registry
    }

    /// Add a model, replacing any previous model with the same name.
    pub fn register(&mut self, model: Arc<dyn ScoringModel>) {
        let name = model.name();
        if self.models.insert(name, model).is_some() {
            tracing::warn!(model = name, "Replaced an already registered scoring model");
        }
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn ScoringModel>> {
        self.models
            .get(name)
            .cloned()
            .ok_or_else(|| UnderwritingError::UnknownModel(name.to_string()))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.models.keys().copied().collect()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.names())
            .finish()
    }
}

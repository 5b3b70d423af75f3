use crate::backend::{CacheKey, MemoryBackend, StorageBackend};
use crate::error::StoreError;
use logic_ast::{Formula, Notation};
use logic_equiv::{EquivalenceProliferator, Switches};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info, warn};

/// Closure lookup with compute-on-miss.
///
/// Backend failures never fail a lookup: they are logged and the freshly
/// computed closure is returned.
pub struct EquivalenceStore<B = Box<dyn StorageBackend>> {
    backend: B,
    notation: &'static Notation,
    computations: AtomicUsize,
}

impl EquivalenceStore<MemoryBackend> {
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}

impl Default for EquivalenceStore<MemoryBackend> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<B: StorageBackend> EquivalenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_notation(backend, Notation::default_notation())
    }

    /// `notation` is used by [`EquivalenceStore::load`].
    pub fn with_notation(backend: B, notation: &'static Notation) -> Self {
        Self {
            backend,
            notation,
            computations: AtomicUsize::new(0),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn notation(&self) -> &'static Notation {
        self.notation
    }

    /// How many closures this store has computed instead of reading back.
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::Relaxed)
    }

    /// [`EquivalenceStore::load_equivalents`] in the store's own notation.
    pub fn load(&self, formula: &str) -> Result<Vec<String>, StoreError> {
        self.load_equivalents(formula, self.notation.name)
    }

    /// Sorted closure of `formula`, parsed in the notation named `notation`.
    pub fn load_equivalents(
        &self,
        formula: &str,
        notation: &str,
    ) -> Result<Vec<String>, StoreError> {
        let syntax = Notation::by_name(notation)
            .ok_or_else(|| StoreError::UnknownNotation(notation.to_string()))?;
        let key = CacheKey::new(syntax.name, formula);
        if let Some(hit) = self.lookup(&key) {
            return Ok(hit);
        }

        let parsed = logic_parser::parse(formula, syntax)?;
        Ok(self.compute_and_store(&key, &parsed))
    }

    /// Same as [`EquivalenceStore::load_equivalents`] for an already parsed
    /// formula, keyed by its normal form.
    pub fn load_equivalents_for(&self, formula: &Formula) -> Vec<String> {
        let key = CacheKey::new(formula.notation().name, formula.normal());
        if let Some(hit) = self.lookup(&key) {
            return hit;
        }
        self.compute_and_store(&key, formula)
    }

    /// Writes `closure` under `formula` when the backend persists and the
    /// closure is not empty. Returns whether anything was written.
    pub fn save_equivalents(&self, formula: &str, closure: &[String], notation: &str) -> bool {
        if !self.backend.is_persistent() || closure.is_empty() {
            return false;
        }
        let Some(syntax) = Notation::by_name(notation) else {
            warn!(notation, "not saving closure under unknown notation");
            return false;
        };
        let key = CacheKey::new(syntax.name, formula);
        match self.backend.set(&key, closure) {
            Ok(()) => true,
            Err(e) => {
                warn!(backend = self.backend.name(), formula, error = %e, "failed to save closure");
                false
            }
        }
    }

    fn lookup(&self, key: &CacheKey) -> Option<Vec<String>> {
        match self.backend.get(key) {
            Ok(Some(hit)) => {
                debug!(formula = %key.formula, notation = %key.notation, "closure cache hit");
                Some(hit)
            }
            Ok(None) => {
                debug!(formula = %key.formula, notation = %key.notation, "closure cache miss");
                None
            }
            Err(e) => {
                warn!(backend = self.backend.name(), formula = %key.formula, error = %e, "cache read failed, recomputing");
                None
            }
        }
    }

    fn compute_and_store(&self, key: &CacheKey, formula: &Formula) -> Vec<String> {
        let mut engine = EquivalenceProliferator::new();
        let closure: Vec<String> = engine
            .proliferate(formula, &Switches::new())
            .into_iter()
            .collect();
        self.computations.fetch_add(1, Ordering::Relaxed);

        let stats = engine.stats();
        info!(
            formula = %key.formula,
            notation = %key.notation,
            size = closure.len(),
            nodes = stats.nodes_visited,
            rewrites = stats.rewrites,
            "computed equivalence closure"
        );

        if !closure.is_empty() {
            if let Err(e) = self.backend.set(key, &closure) {
                warn!(backend = self.backend.name(), formula = %key.formula, error = %e, "failed to cache closure");
            }
        }
        closure
    }
}

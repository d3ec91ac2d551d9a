//! Compiled pattern cache shared by every construct rule.
//!
//! Patterns are keyed by their source text. Lookups take the shared read
//! lock; only a miss takes the write lock, and the map is checked again
//! after acquiring it so concurrent misses compile a pattern once.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use regex::Regex;

/// A read-mostly map from pattern text to compiled [`Regex`].
///
/// The cache never affects output: dropping it and compiling on every call
/// produces identical results.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: RwLock<HashMap<String, Arc<Regex>>>,
}

impl PatternCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the compiled form of `pattern`, compiling and inserting it on a miss.
    ///
    /// Returns `None` if the pattern does not compile; the failure is logged
    /// and callers treat it as "no match".
    pub fn get(&self, pattern: &str) -> Option<Arc<Regex>> {
        {
            let patterns = self.patterns.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(re) = patterns.get(pattern) {
                return Some(Arc::clone(re));
            }
        }

        let mut patterns = self.patterns.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(re) = patterns.get(pattern) {
            return Some(Arc::clone(re));
        }

        match Regex::new(pattern) {
            Ok(re) => {
                let re = Arc::new(re);
                patterns.insert(pattern.to_owned(), Arc::clone(&re));
                Some(re)
            }
            Err(e) => {
                log::error!("pattern failed to compile: {pattern}: {e}");
                None
            }
        }
    }

    /// Number of compiled patterns held.
    pub fn len(&self) -> usize {
        self.patterns
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no pattern has been compiled yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

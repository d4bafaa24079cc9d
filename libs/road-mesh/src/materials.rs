//! # Material Registry
//!
//! Idempotent lookup-or-create of material slots by name. Stands in for
//! the scene host's material store: repeated lookups of the same name
//! must return the same handle, never a duplicate slot.

use serde::{Deserialize, Serialize};

/// Handle to a registered material slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(u32);

impl MaterialId {
    /// The material slot index this handle refers to.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Ordered registry of material slots, keyed by name.
///
/// # Example
///
/// ```rust
/// use road_mesh::MaterialRegistry;
///
/// let mut registry = MaterialRegistry::new();
/// let road = registry.get_or_create("road");
/// let kerb = registry.get_or_create("kerb");
/// assert_ne!(road, kerb);
/// // Idempotent: same name, same handle.
/// assert_eq!(registry.get_or_create("road"), road);
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialRegistry {
    names: Vec<String>,
}

impl MaterialRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a material by name, creating a new slot if absent.
    pub fn get_or_create(&mut self, name: &str) -> MaterialId {
        if let Some(index) = self.names.iter().position(|n| n == name) {
            return MaterialId(index as u32);
        }
        let index = self.names.len() as u32;
        self.names.push(name.to_string());
        MaterialId(index)
    }

    /// Returns the ordered slot names.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of registered slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no slots are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut registry = MaterialRegistry::new();
        let first = registry.get_or_create("road");
        let second = registry.get_or_create("road");
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_slots_are_ordered() {
        let mut registry = MaterialRegistry::new();
        assert_eq!(registry.get_or_create("road").index(), 0);
        assert_eq!(registry.get_or_create("kerb").index(), 1);
        assert_eq!(registry.get_or_create("sidewalk").index(), 2);
        assert_eq!(registry.names(), ["road", "kerb", "sidewalk"]);
    }
}

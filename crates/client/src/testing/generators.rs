//! Generated alert registries for paging tests.

use serde_json::Value;

use super::{alert_json, page_json};

/// Generates a registry of `count` alerts named `alert-<n>` with ids from
/// `first_id` upward.
///
/// # Example
/// ```ignore
/// use librato_client::testing::generators::RegistryGenerator;
///
/// let registry = RegistryGenerator::new()
///     .with_count(3)
///     .with_inactive_every(2)
///     .generate();
/// assert_eq!(registry.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RegistryGenerator {
    count: usize,
    first_id: u64,
    inactive_every: Option<usize>,
}

impl Default for RegistryGenerator {
    fn default() -> Self {
        Self {
            count: 10,
            first_id: 1,
            inactive_every: None,
        }
    }
}

impl RegistryGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_first_id(mut self, id: u64) -> Self {
        self.first_id = id;
        self
    }

    /// Mark every `n`th alert (1-based) inactive.
    pub fn with_inactive_every(mut self, n: usize) -> Self {
        self.inactive_every = Some(n.max(1));
        self
    }

    pub fn generate(&self) -> Registry {
        let alerts = (0..self.count)
            .map(|i| {
                let id = self.first_id + i as u64;
                let active = match self.inactive_every {
                    Some(n) => (i + 1) % n != 0,
                    None => true,
                };
                alert_json(id, &format!("alert-{id}"), active)
            })
            .collect();
        Registry { alerts }
    }
}

/// A generated registry that can be sliced into API pages.
#[derive(Debug, Clone)]
pub struct Registry {
    alerts: Vec<Value>,
}

impl Registry {
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn alerts(&self) -> &[Value] {
        &self.alerts
    }

    /// The page body the API would return for `offset` with the given page size.
    pub fn page(&self, offset: usize, page_size: usize) -> Value {
        let start = offset.min(self.alerts.len());
        let end = offset.saturating_add(page_size).min(self.alerts.len());
        page_json(offset, self.alerts.len(), self.alerts[start..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ids_and_inactive() {
        let registry = RegistryGenerator::new()
            .with_count(4)
            .with_first_id(100)
            .with_inactive_every(2)
            .generate();
        let alerts = registry.alerts();
        assert_eq!(alerts[0]["id"], 100);
        assert_eq!(alerts[0]["active"], true);
        assert_eq!(alerts[1]["active"], false);
        assert_eq!(alerts[3]["name"], "alert-103");
    }

    #[test]
    fn test_page_slices_and_reports_total() {
        let registry = RegistryGenerator::new().with_count(5).generate();
        let page = registry.page(4, 2);
        assert_eq!(page["query"]["offset"], 4);
        assert_eq!(page["query"]["length"], 1);
        assert_eq!(page["query"]["total"], 5);
        assert_eq!(page["alerts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let registry = RegistryGenerator::new().with_count(2).generate();
        let page = registry.page(10, 5);
        assert_eq!(page["query"]["length"], 0);
    }
}

// src/viz.rs
//! Loads server-rendered chart fragments into page containers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::api::Fetcher;
use crate::renderer::Renderer;
use crate::ui::{FAILED_PLACEHOLDER, LOADING_PLACEHOLDER};

/// What happened to a single `load` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No container with that id, either up front or by the time the
    /// fragment was written.
    MissingContainer,
    Loaded,
    Failed,
    /// A newer load for the same container was issued while this one was in
    /// flight, so its response was dropped.
    Superseded,
}

/// Swaps fetched HTML fragments into containers of a [`Renderer`].
///
/// Fragments are inserted as-is: the endpoints return markup produced by
/// the dashboard server, not user input.
///
/// When several loads target the same container, the most recently
/// *issued* one wins regardless of which response arrives last.
pub struct VisualizationLoader {
    fetcher: Arc<dyn Fetcher>,
    renderer: Arc<dyn Renderer>,
    tickets: Mutex<HashMap<String, u64>>,
}

impl VisualizationLoader {
    pub fn new(fetcher: Arc<dyn Fetcher>, renderer: Arc<dyn Renderer>) -> Self {
        VisualizationLoader {
            fetcher,
            renderer,
            tickets: Mutex::new(HashMap::new()),
        }
    }

    pub async fn load(&self, endpoint: &str, container_id: &str) -> LoadOutcome {
        if !self.renderer.contains(container_id) {
            log::debug!("No container '{}' for {}", container_id, endpoint);
            return LoadOutcome::MissingContainer;
        }

        let ticket = self.issue_ticket(container_id);
        if !self
            .renderer
            .set_inner_html(container_id, LOADING_PLACEHOLDER.as_str())
        {
            return self.container_gone(endpoint, container_id);
        }

        let result = self.fetcher.fetch_text(endpoint).await;

        if !self.is_current(container_id, ticket) {
            log::debug!(
                "Dropping stale response from {} for container '{}'",
                endpoint,
                container_id
            );
            return LoadOutcome::Superseded;
        }

        // fetch errors are already logged by the fetcher
        let (html, outcome) = match &result {
            Ok(html) => (html.as_str(), LoadOutcome::Loaded),
            Err(_) => (FAILED_PLACEHOLDER.as_str(), LoadOutcome::Failed),
        };

        if self.renderer.set_inner_html(container_id, html) {
            outcome
        } else {
            self.container_gone(endpoint, container_id)
        }
    }

    fn container_gone(&self, endpoint: &str, container_id: &str) -> LoadOutcome {
        log::debug!(
            "Container '{}' disappeared while loading {}",
            container_id,
            endpoint
        );
        LoadOutcome::MissingContainer
    }

    fn issue_ticket(&self, container_id: &str) -> u64 {
        let mut tickets = self.lock_tickets();
        let ticket = tickets.entry(container_id.to_string()).or_insert(0);
        *ticket += 1;
        *ticket
    }

    fn is_current(&self, container_id: &str, ticket: u64) -> bool {
        self.lock_tickets().get(container_id) == Some(&ticket)
    }

    fn lock_tickets(&self) -> std::sync::MutexGuard<'_, HashMap<String, u64>> {
        self.tickets
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

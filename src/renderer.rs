// src/renderer.rs
use std::sync::Mutex;

use crate::table::escape_html;

/// The page surface a loader writes into: named containers whose inner
/// HTML can be replaced.
pub trait Renderer: Send + Sync {
    fn contains(&self, id: &str) -> bool;

    /// Replaces the container's markup. Returns `false` if there is no
    /// container with that id.
    fn set_inner_html(&self, id: &str, html: &str) -> bool;
}

/// In-memory page made of named containers, kept in insertion order.
#[derive(Debug, Default)]
pub struct Document {
    containers: Mutex<Vec<(String, String)>>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let document = Document::new();
        for id in ids {
            document.add_container(id);
        }
        document
    }

    /// Adds an empty container. Adding an existing id leaves it untouched.
    pub fn add_container(&self, id: impl Into<String>) {
        let id = id.into();
        let mut containers = self.lock();
        if !containers.iter().any(|(existing, _)| *existing == id) {
            containers.push((id, String::new()));
        }
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.lock()
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, html)| html.clone())
    }

    pub fn container_ids(&self) -> Vec<String> {
        self.lock().iter().map(|(id, _)| id.clone()).collect()
    }

    /// Each container as `<div id="…">…</div>`, in insertion order.
    pub fn to_html(&self) -> String {
        self.lock()
            .iter()
            .map(|(id, html)| format!(r#"<div id="{}">{}</div>"#, escape_html(id), html))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, String)>> {
        // A poisoned lock still holds consistent strings
        self.containers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Renderer for Document {
    fn contains(&self, id: &str) -> bool {
        self.lock().iter().any(|(existing, _)| existing == id)
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        let mut containers = self.lock();
        match containers.iter_mut().find(|(existing, _)| existing == id) {
            Some((_, content)) => {
                *content = html.to_string();
                true
            }
            None => false,
        }
    }
}

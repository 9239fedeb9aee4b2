use crate::core::{Announcer, PresetStorage, StorageError};
use web_sys as web;

/// `window.localStorage`. Private browsing or disabled storage surfaces as
/// `StorageError::Unavailable`, which the controller logs and ignores.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn local_storage() -> Result<web::Storage, StorageError> {
    let window = web::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
}

impl PresetStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

/// Writes announcements into the `aria-live` status element, if present.
pub struct StatusAnnouncer {
    el: Option<web::Element>,
}

impl StatusAnnouncer {
    pub fn new(document: &web::Document, id: &str) -> Self {
        Self {
            el: document.get_element_by_id(id),
        }
    }
}

impl Announcer for StatusAnnouncer {
    fn announce(&mut self, text: &str) {
        match &self.el {
            Some(el) => el.set_text_content(Some(text)),
            None => log::info!("[preset] {}", text),
        }
    }
}

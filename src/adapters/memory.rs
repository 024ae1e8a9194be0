use crate::domain::ports::Document;
use crate::utils::error::{Result, WidgetError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Elements kept in memory, keyed by id.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: RwLock<HashMap<String, String>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document holding empty elements with the given ids.
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = ids
            .into_iter()
            .map(|id| (id.into(), String::new()))
            .collect();
        Self {
            elements: RwLock::new(elements),
        }
    }

    pub async fn insert_element(&self, id: impl Into<String>) {
        self.elements
            .write()
            .await
            .entry(id.into())
            .or_default();
    }

    pub async fn element_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.elements.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }
}

#[async_trait]
impl Document for MemoryDocument {
    async fn replace_inner_html(&self, element_id: &str, markup: &str) -> Result<()> {
        let mut elements = self.elements.write().await;
        let slot = elements
            .get_mut(element_id)
            .ok_or_else(|| WidgetError::ElementNotFound {
                element_id: element_id.to_string(),
            })?;
        *slot = markup.to_string();
        Ok(())
    }

    async fn inner_html(&self, element_id: &str) -> Result<String> {
        self.elements
            .read()
            .await
            .get(element_id)
            .cloned()
            .ok_or_else(|| WidgetError::ElementNotFound {
                element_id: element_id.to_string(),
            })
    }

    async fn contains(&self, element_id: &str) -> bool {
        self.elements.read().await.contains_key(element_id)
    }
}

use crate::adapters::memory::MemoryDocument;
use crate::domain::ports::Document;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Prints each replaced element as `#id: markup` on stdout.
#[derive(Debug)]
pub struct StdoutDocument {
    inner: MemoryDocument,
}

impl StdoutDocument {
    pub fn new<I, S>(element_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: MemoryDocument::with_elements(element_ids),
        }
    }
}

#[async_trait]
impl Document for StdoutDocument {
    async fn replace_inner_html(&self, element_id: &str, markup: &str) -> Result<()> {
        self.inner.replace_inner_html(element_id, markup).await?;
        println!("#{}: {}", element_id, markup);
        Ok(())
    }

    async fn inner_html(&self, element_id: &str) -> Result<String> {
        self.inner.inner_html(element_id).await
    }

    async fn contains(&self, element_id: &str) -> bool {
        self.inner.contains(element_id).await
    }
}

use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Source of the local wall-clock instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// A document holding container elements addressed by id.
///
/// `replace_inner_html` swaps the whole content of one element. When the id is
/// unknown it returns `WidgetError::ElementNotFound` and leaves the document as
/// it was.
#[async_trait]
pub trait Document: Send + Sync {
    async fn replace_inner_html(&self, element_id: &str, markup: &str) -> Result<()>;
    async fn inner_html(&self, element_id: &str) -> Result<String>;
    async fn contains(&self, element_id: &str) -> bool;
}

#[async_trait]
impl<D: Document + ?Sized> Document for Box<D> {
    async fn replace_inner_html(&self, element_id: &str, markup: &str) -> Result<()> {
        (**self).replace_inner_html(element_id, markup).await
    }

    async fn inner_html(&self, element_id: &str) -> Result<String> {
        (**self).inner_html(element_id).await
    }

    async fn contains(&self, element_id: &str) -> bool {
        (**self).contains(element_id).await
    }
}

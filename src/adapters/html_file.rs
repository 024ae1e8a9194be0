use crate::config::widget::WidgetDefinition;
use crate::domain::ports::Document;
use crate::utils::error::{Result, WidgetError};
use async_trait::async_trait;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Page-level settings around the container elements.
#[derive(Debug, Clone, PartialEq)]
pub struct PageShell {
    pub title: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub transparent_bg: bool,
}

impl Default for PageShell {
    fn default() -> Self {
        Self {
            title: "datetime".to_string(),
            width: None,
            height: None,
            transparent_bg: false,
        }
    }
}

impl From<&WidgetDefinition> for PageShell {
    fn from(def: &WidgetDefinition) -> Self {
        Self {
            title: def.name.clone(),
            width: Some(def.width),
            height: Some(def.height),
            transparent_bg: def.transparent_bg,
        }
    }
}

impl PageShell {
    fn render(&self, elements: &[(String, String)]) -> String {
        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(page, "<title>{}</title>", escape_text(&self.title));

        let mut style = String::new();
        if let Some(width) = self.width {
            let _ = write!(style, "width: {}px; ", width);
        }
        if let Some(height) = self.height {
            let _ = write!(style, "height: {}px; ", height);
        }
        if self.transparent_bg {
            style.push_str("background: transparent; ");
        }
        if !style.is_empty() {
            let _ = writeln!(page, "<style>body {{ {}}}</style>", style);
        }

        page.push_str("</head>\n<body>\n");
        for (id, markup) in elements {
            let _ = writeln!(page, "<div id=\"{}\">{}</div>", escape_text(id), markup);
        }
        page.push_str("</body>\n</html>\n");
        page
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// An HTML page on disk. Every replace rewrites the whole page.
///
/// The page goes to a sibling temp file first and is then renamed over the
/// target, so a reader sees either the old page or the new one.
pub struct HtmlFileDocument {
    path: PathBuf,
    shell: PageShell,
    elements: Mutex<Vec<(String, String)>>,
}

impl HtmlFileDocument {
    pub fn new<I, S>(path: impl Into<PathBuf>, shell: PageShell, element_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut elements: Vec<(String, String)> = Vec::new();
        for id in element_ids {
            let id = id.into();
            if !elements.iter().any(|(existing, _)| *existing == id) {
                elements.push((id, String::new()));
            }
        }

        Self {
            path: path.into(),
            shell,
            elements: Mutex::new(elements),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current page to disk.
    pub async fn flush(&self) -> Result<()> {
        let elements = self.elements.lock().await;
        self.write_page(&elements).await
    }

    async fn write_page(&self, elements: &[(String, String)]) -> Result<()> {
        let page = self.shell.render(elements);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| WidgetError::InvalidConfigValueError {
                field: "output.path".to_string(),
                value: self.path.display().to_string(),
                reason: "Output path has no file name".to_string(),
            })?;
        let tmp = self.path.with_file_name(format!(".{}.tmp", file_name));

        tokio::fs::write(&tmp, page.as_bytes()).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl Document for HtmlFileDocument {
    async fn replace_inner_html(&self, element_id: &str, markup: &str) -> Result<()> {
        let mut elements = self.elements.lock().await;
        let index = elements
            .iter()
            .position(|(id, _)| id == element_id)
            .ok_or_else(|| WidgetError::ElementNotFound {
                element_id: element_id.to_string(),
            })?;

        // 寫檔成功後才更新記憶體中的狀態
        let mut next = elements.clone();
        next[index].1 = markup.to_string();
        self.write_page(&next).await?;
        *elements = next;
        Ok(())
    }

    async fn inner_html(&self, element_id: &str) -> Result<String> {
        self.elements
            .lock()
            .await
            .iter()
            .find(|(id, _)| id == element_id)
            .map(|(_, markup)| markup.clone())
            .ok_or_else(|| WidgetError::ElementNotFound {
                element_id: element_id.to_string(),
            })
    }

    async fn contains(&self, element_id: &str) -> bool {
        self.elements
            .lock()
            .await
            .iter()
            .any(|(id, _)| id == element_id)
    }
}

//! Table of raw post bodies keyed by identifier.

use crate::error::Error;
use crate::{MarkdownToHtml, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Raw post bodies, ordered by identifier.
#[derive(Debug, Clone, Default)]
pub struct PostTable {
    posts: BTreeMap<String, String>,
}

impl PostTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `*.md` file in `dir`; the file stem becomes the identifier.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut table = Self::new();

        for entry in std::fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }
            let id = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .ok_or_else(|| Error::InvalidPostPath(path.display().to_string()))?
                .to_string();
            let body = std::fs::read_to_string(&path)?;
            log::debug!("loaded post {:?} from {}", id, path.display());
            table.insert(id, body);
        }

        Ok(table)
    }

    /// Registers a body, returning the one it replaced.
    pub fn insert(&mut self, id: impl Into<String>, body: impl Into<String>) -> Option<String> {
        self.posts.insert(id.into(), body.into())
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.posts.get(id).map(String::as_str)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.posts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Renders the body registered under `id`.
    pub fn render(&self, id: &str, converter: &MarkdownToHtml) -> Result<String> {
        let body = self
            .get(id)
            .ok_or_else(|| Error::PostNotFound(id.to_string()))?;
        Ok(converter.convert(body))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PostTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (id, body) in iter {
            table.insert(id, body);
        }
        table
    }
}

use crate::prelude::*;
use serde::Deserialize;
use std::{ops::Deref, path::Path, sync::OnceLock};
use tokio::fs;

const EMBEDDED_JSON: &str = include_str!("../data/fortunes.json");

static EMBEDDED: OnceLock<Fortunes> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fortune {
    pub text: String,
    pub category: String,
}

impl Fortune {
    #[cfg(test)]
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// Read-only, source-ordered list of fortunes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fortunes {
    fortunes: Vec<Fortune>,
}

impl Fortunes {
    /// The dataset compiled into the binary, parsed on first use.
    pub fn embedded() -> Result<&'static Self> {
        if let Some(fortunes) = EMBEDDED.get() {
            return Ok(fortunes);
        }

        let fortunes =
            Self::from_json(EMBEDDED_JSON).context("fails to load embedded fortunes")?;
        Ok(EMBEDDED.get_or_init(|| fortunes))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let fortunes: Self = serde_json::from_str(json).context("fails to parse fortunes")?;
        debug!("parsed {} fortunes", fortunes.len());
        if fortunes.is_empty() {
            warn!("fortune dataset is empty");
        }

        Ok(fortunes)
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("📖 reading fortunes from {}", path.to_string_lossy());

        let json = fs::read_to_string(path)
            .await
            .context("fails to read fortunes file")?;

        Self::from_json(&json)
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = vec![];
        for fortune in &self.fortunes {
            if !categories.contains(&fortune.category.as_str()) {
                categories.push(&fortune.category);
            }
        }

        categories
    }
}

impl Deref for Fortunes {
    type Target = [Fortune];

    fn deref(&self) -> &Self::Target {
        &self.fortunes
    }
}

//! Storefront browsing over a fetched app list.
//!
//! Each app is classified once when the catalog is built. Listings are
//! newest first by `date`; undated apps sort last, ties by title.

mod history;

pub use history::VersionHistory;

use serde::Serialize;
use std::cmp::Ordering;

use crate::classify::{classify, Category};
use crate::model::AppRecord;
use crate::resolver::{resolve_app, DownloadEndpoints, DownloadTarget};

/// An app together with its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub app: AppRecord,
    pub category: Category,
}

/// Everything the detail page shows for one app.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppDetail<'a> {
    #[serde(flatten)]
    pub entry: &'a CatalogEntry,
    pub download: DownloadTarget,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(apps: Vec<AppRecord>) -> Self {
        let mut entries: Vec<CatalogEntry> = apps
            .into_iter()
            .map(|app| {
                let category = classify(&app);
                CatalogEntry { app, category }
            })
            .collect();
        entries.sort_by(newest_first);
        tracing::debug!(apps = entries.len(), "catalog built");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn all(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, app_id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.app.app_id == app_id)
    }

    /// The `n` newest apps.
    pub fn top(&self, n: usize) -> &[CatalogEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Case-insensitive substring search over title, package name and
    /// description. A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|e| matches_query(&e.app, &needle))
            .collect()
    }

    pub fn by_category(&self, category: Category) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// App count for every category, in [`Category::ALL`] order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.entries.iter().filter(|e| e.category == c).count()))
            .collect()
    }

    pub fn detail(&self, app_id: &str, endpoints: &DownloadEndpoints) -> Option<AppDetail<'_>> {
        let entry = self.get(app_id)?;
        Some(AppDetail {
            entry,
            download: resolve_app(&entry.app, endpoints),
        })
    }
}

fn matches_query(app: &AppRecord, needle: &str) -> bool {
    [Some(app.app_id.as_str()), app.title.as_deref(), app.description.as_deref()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

fn newest_first(a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    let by_date = match (&a.app.date, &b.app.date) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date
        .then_with(|| a.app.display_title().cmp(b.app.display_title()))
        .then_with(|| a.app.app_id.cmp(&b.app.app_id))
}

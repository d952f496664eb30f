//! Photo gallery with category filter buttons and a lightbox.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub src: String,
    pub title: String,
    pub description: String,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => &item.category == category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    filter: Filter,
    lightbox: Option<usize>,
}

impl Gallery {
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }

    /// Every item with its index and whether the current filter shows it.
    pub fn items(&self) -> impl Iterator<Item = (usize, &GalleryItem, bool)> {
        self.items
            .iter()
            .enumerate()
            .map(move |(index, item)| (index, item, self.filter.matches(item)))
    }

    /// Items without an image source do not open.
    pub fn open(&mut self, index: usize) {
        if self.items.get(index).is_some_and(|item| !item.src.is_empty()) {
            self.lightbox = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.lightbox = None;
    }

    pub fn lightbox(&self) -> Option<&GalleryItem> {
        self.lightbox.and_then(|index| self.items.get(index))
    }

    /// Handle a key press; returns `true` when it closed the lightbox.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.lightbox.is_some() {
            self.close();
            true
        } else {
            false
        }
    }
}

//! # Listing filter engine
//!
//! Pure functions that narrow the job board and brand directory as the user
//! types. Collections are small and provided whole, so filtering is a single
//! pass that keeps input order.
//!
//! ## Predicates
//!
//! An item passes a [`ListingFilter`] iff all four of these hold:
//!
//! | Predicate | Rule | Empty filter |
//! |-----------|------|--------------|
//! | search | case-insensitive substring of any [`Listing::search_fields`] value or any tag | matches all |
//! | location | case-insensitive substring of [`Listing::location`] | matches all |
//! | category | exact equality with [`Listing::category`] | matches all |
//! | tags | item has at least one tag equal to an active tag | matches all |
//!
//! Sorting lives in [`sort`] and is applied to the filtered result separately.

pub mod catalog;
pub mod sort;

use crate::models::{Brand, Job};

/// A record that can be searched and filtered on the listing pages.
pub trait Listing {
    /// Fields matched by free-text search, in addition to the tags.
    fn search_fields(&self) -> Vec<&str>;
    fn location(&self) -> &str;
    /// Job type or brand category.
    fn category(&self) -> &str;
    fn tags(&self) -> &[String];
    fn is_featured(&self) -> bool;
}

impl Listing for Job {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.company.as_str()]
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn category(&self) -> &str {
        self.job_type.as_str()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn is_featured(&self) -> bool {
        self.is_featured
    }
}

impl Listing for Brand {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn is_featured(&self) -> bool {
        self.is_featured
    }
}

/// What the user has typed and toggled on a listing page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub search: String,
    pub location: String,
    /// `None` or an empty string disables the category check.
    pub category: Option<String>,
    /// Active tags in the order they were switched on.
    pub tags: Vec<String>,
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Switch a tag on if it is off, off if it is on.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any field would exclude something.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || !self.location.is_empty()
            || self.active_category().is_some()
            || !self.tags.is_empty()
    }

    fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn matches_search<T: Listing>(&self, item: &T) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        item.search_fields()
            .into_iter()
            .chain(item.tags().iter().map(String::as_str))
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn matches_location<T: Listing>(&self, item: &T) -> bool {
        self.location.is_empty()
            || item
                .location()
                .to_lowercase()
                .contains(&self.location.to_lowercase())
    }

    pub fn matches_category<T: Listing>(&self, item: &T) -> bool {
        self.active_category()
            .map_or(true, |category| item.category() == category)
    }

    pub fn matches_tags<T: Listing>(&self, item: &T) -> bool {
        self.tags.is_empty() || item.tags().iter().any(|tag| self.tags.contains(tag))
    }

    pub fn matches<T: Listing>(&self, item: &T) -> bool {
        self.matches_search(item)
            && self.matches_location(item)
            && self.matches_category(item)
            && self.matches_tags(item)
    }

    /// Items passing every predicate, in input order.
    pub fn apply<'a, T: Listing>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }
}

/// Distinct categories in first-seen order, for category pickers.
pub fn categories<T: Listing>(items: &[T]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        if !seen.contains(&item.category()) {
            seen.push(item.category());
        }
    }
    seen
}

/// Featured items in input order.
pub fn featured<T: Listing>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| item.is_featured()).collect()
}

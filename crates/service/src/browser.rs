//! Endpoint Browser (sidebar) state.

use std::collections::HashSet;

use frn_console_core::{BadgeTone, Catalog, EndpointQuery};
use serde::Serialize;

/// Search text and expanded categories of one sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    search_query: String,
    expanded: HashSet<String>,
}

impl BrowserState {
    /// Every category of `catalog` starts expanded.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            search_query: String::new(),
            expanded: catalog.categories().into_iter().map(|c| c.name).collect(),
        }
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search_query = text.into();
    }

    /// Flips one category between expanded and collapsed; returns the new state.
    pub fn toggle_category(&mut self, name: &str) -> bool {
        if self.expanded.remove(name) {
            false
        } else {
            self.expanded.insert(name.to_owned());
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.contains(name)
    }

    /// The sidebar as it should be drawn right now.
    #[must_use]
    pub fn view(&self, catalog: &Catalog, selected: Option<&str>) -> SidebarView {
        let query = EndpointQuery::new(&self.search_query);
        let categories = query
            .filter_categories(&catalog.categories())
            .into_iter()
            .map(|category| {
                let expanded = self.is_expanded(&category.name);
                let endpoint_count = category.endpoints.len();
                let endpoints = if expanded {
                    category
                        .endpoints
                        .iter()
                        .map(|e| SidebarEntry {
                            id: e.id.clone(),
                            name: e.name.clone(),
                            method: e.method.as_str().to_owned(),
                            tone: e.method.tone(),
                            path: e.path.clone(),
                            selected: selected == Some(e.id.as_str()),
                        })
                        .collect()
                } else {
                    Vec::new()
                };
                SidebarCategory { name: category.name, endpoint_count, expanded, endpoints }
            })
            .collect();

        SidebarView { search_query: self.search_query.clone(), categories }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarView {
    pub search_query: String,
    /// Only categories with at least one matching endpoint.
    pub categories: Vec<SidebarCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarCategory {
    pub name: String,
    /// Matching endpoints, counted even when collapsed.
    pub endpoint_count: usize,
    pub expanded: bool,
    /// Empty when collapsed.
    pub endpoints: Vec<SidebarEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarEntry {
    pub id: String,
    pub name: String,
    pub method: String,
    pub tone: BadgeTone,
    pub path: String,
    pub selected: bool,
}

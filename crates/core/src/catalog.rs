//! Catalog Store: the immutable endpoint list and its derived views.
//!
//! A [`Catalog`] is built once at startup and shared read-only (`Arc<Catalog>`).
//! Derived views ([`categorize`], [`method_breakdown`], [`author_breakdown`]) are
//! cheap pure functions recomputed on every read.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::error::{CoreError, Result};

/// Endpoints sharing one `category` value, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub endpoints: Vec<Endpoint>,
}

/// Number of endpoints using one (uppercased) method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCount {
    pub method: String,
    pub count: usize,
}

/// Number of endpoints contributed by one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCount {
    pub author: String,
    pub count: usize,
}

/// Read-only, id-unique list of endpoints.
#[derive(Debug, Clone)]
pub struct Catalog {
    endpoints: Vec<Endpoint>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(endpoints: Vec<Endpoint>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(endpoints.len());
        for endpoint in &endpoints {
            if !seen.insert(endpoint.id.as_str()) {
                return Err(CoreError::DuplicateEndpointId(endpoint.id.clone()));
            }
        }
        Ok(Self { endpoints })
    }

    /// The endpoint list shipped with the console.
    #[must_use]
    pub fn builtin() -> Self {
        Self { endpoints: builtin::builtin_endpoints() }
    }

    /// Loads a catalog from a JSON array of endpoint records.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let endpoints: Vec<Endpoint> = serde_json::from_str(&raw)
            .map_err(|source| CoreError::InvalidCatalog { path: path.to_path_buf(), source })?;
        let catalog = Self::new(endpoints)?;
        tracing::info!(path = %path.display(), endpoints = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }

    /// Built-in catalog, or the file at `path` when one is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_json_file(p),
            None => Ok(Self::builtin()),
        }
    }

    #[must_use]
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.id == id)
    }

    /// Like `get`, but a missing id is an `EndpointNotFound` error.
    pub fn require(&self, id: &str) -> Result<&Endpoint> {
        self.get(id).ok_or_else(|| CoreError::EndpointNotFound(id.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        categorize(&self.endpoints)
    }

    #[must_use]
    pub fn method_breakdown(&self) -> Vec<MethodCount> {
        method_breakdown(&self.endpoints)
    }

    #[must_use]
    pub fn author_breakdown(&self) -> Vec<AuthorCount> {
        author_breakdown(&self.endpoints)
    }
}

/// Groups endpoints by exact `category`, categories in first-seen order.
#[must_use]
pub fn categorize(endpoints: &[Endpoint]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for endpoint in endpoints {
        match categories.iter_mut().find(|c| c.name == endpoint.category) {
            Some(category) => category.endpoints.push(endpoint.clone()),
            None => categories.push(Category {
                name: endpoint.category.clone(),
                endpoints: vec![endpoint.clone()],
            }),
        }
    }
    categories
}

/// Tallies uppercased methods, most used first; ties keep first-seen order.
#[must_use]
pub fn method_breakdown(endpoints: &[Endpoint]) -> Vec<MethodCount> {
    let mut tally: Vec<MethodCount> = Vec::new();
    for endpoint in endpoints {
        let method = endpoint.method.as_str().to_uppercase();
        match tally.iter_mut().find(|m| m.method == method) {
            Some(entry) => entry.count += 1,
            None => tally.push(MethodCount { method, count: 1 }),
        }
    }
    // sort_by is stable
    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally
}

/// Tallies endpoints per `author`, in first-seen order.
#[must_use]
pub fn author_breakdown(endpoints: &[Endpoint]) -> Vec<AuthorCount> {
    let mut tally: Vec<AuthorCount> = Vec::new();
    for endpoint in endpoints {
        match tally.iter_mut().find(|a| a.author == endpoint.author) {
            Some(entry) => entry.count += 1,
            None => tally.push(AuthorCount { author: endpoint.author.clone(), count: 1 }),
        }
    }
    tally
}

#[cfg(test)]
mod catalog_tests;

//! Case-insensitive search over endpoint name, path and description.

use crate::catalog::Category;
use crate::endpoint::Endpoint;

/// Lowercased search query, built once per filtering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointQuery {
    needle: String,
}

impl EndpointQuery {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self { needle: query.to_lowercase() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Empty query matches everything; otherwise any of name/path/description must contain it.
    #[must_use]
    pub fn matches(&self, endpoint: &Endpoint) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [&endpoint.name, &endpoint.path, &endpoint.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Keeps matching endpoints and drops categories left empty.
    #[must_use]
    pub fn filter_categories(&self, categories: &[Category]) -> Vec<Category> {
        categories
            .iter()
            .filter_map(|category| {
                let endpoints: Vec<Endpoint> =
                    category.endpoints.iter().filter(|e| self.matches(e)).cloned().collect();
                (!endpoints.is_empty())
                    .then(|| Category { name: category.name.clone(), endpoints })
            })
            .collect()
    }

    #[must_use]
    pub fn filter_endpoints<'a>(&self, endpoints: &'a [Endpoint]) -> Vec<&'a Endpoint> {
        endpoints.iter().filter(|e| self.matches(e)).collect()
    }
}

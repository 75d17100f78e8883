//! Attribution for the repositories the catalog is aggregated from.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// A repository contributing endpoints to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRepository {
    /// Matches the `author` field of the endpoints it contributed.
    pub name: String,
    pub url: String,
    pub attribution: String,
    /// Derived from the catalog, not hard-coded.
    pub endpoint_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    pub repositories: Vec<SourceRepository>,
    pub original_developers: Vec<Contributor>,
    pub developed_by: String,
}

const KNOWN_SOURCES: &[(&str, &str, &str)] = &[
    (
        "wataru-api",
        "https://github.com/ajirodesu/wataru-api",
        "Created by Rynn • Modified by AjiroDesu",
    ),
    (
        "Shin-API-UI-V2",
        "https://github.com/ajirodesu/Shin-API-UI-V2",
        "Based on Rynn's UI design • Adapted by AjiroDesu",
    ),
];

const ORIGINAL_DEVELOPERS: &[(&str, &str)] =
    &[("Rynn", "Creator"), ("Lenwy", "Inspiration"), ("AjiroDesu", "Modifications")];

const DEVELOPED_BY: &str = "Gtajisan";

impl Credits {
    /// Known repositories get their url and attribution line; any other author
    /// in a custom catalog is listed with empty metadata.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let repositories = catalog
            .author_breakdown()
            .into_iter()
            .map(|tally| {
                let known = KNOWN_SOURCES.iter().find(|(name, _, _)| *name == tally.author);
                SourceRepository {
                    url: known.map(|(_, url, _)| (*url).to_owned()).unwrap_or_default(),
                    attribution: known
                        .map(|(_, _, line)| (*line).to_owned())
                        .unwrap_or_default(),
                    name: tally.author,
                    endpoint_count: tally.count,
                }
            })
            .collect();

        Self {
            repositories,
            original_developers: ORIGINAL_DEVELOPERS
                .iter()
                .map(|(name, role)| Contributor {
                    name: (*name).to_owned(),
                    role: (*role).to_owned(),
                })
                .collect(),
            developed_by: DEVELOPED_BY.to_owned(),
        }
    }
}

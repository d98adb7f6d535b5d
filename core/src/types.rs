//! Domain records returned by the resource API.
//!
//! # Design
//! The API uses snake_case field names, which are also the Rust field names,
//! so each field maps to its wire name one to one and no container-wide
//! rename rule is applied. Fields the API may omit are `Option` so absence is
//! never confused with zero or empty. Numbers go through `wire` adapters since
//! the API often sends them as strings.

use serde::{Deserialize, Serialize};

use crate::wire;

/// A resource listing (plugin, mod, asset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(with = "wire::int")]
    pub id: u64,
    pub title: String,
    pub tag: String,
    pub current_version: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_minecraft_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supported_minecraft_versions: Option<Vec<String>>,
    pub icon_link: String,
    pub author: Author,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<Premium>,
    pub stats: Stats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_download_url: Option<String>,
    pub description: String,
}

/// A resource author. The slimmer embedded form carries only `id` and `username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(with = "wire::int")]
    pub id: u64,
    pub username: String,
    #[serde(default, with = "wire::int::option", skip_serializing_if = "Option::is_none")]
    pub resource_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identities: Option<Identities>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(with = "wire::int")]
    pub id: u64,
    pub title: String,
}

/// A changelog entry posted for a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    #[serde(with = "wire::int")]
    pub id: u64,
    #[serde(with = "wire::int")]
    pub resource_id: u64,
    pub title: String,
    pub message: String,
}

/// Social handles linked to an author; any subset may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aim: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yahoo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtalk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(with = "wire::int")]
    pub downloads: u64,
    #[serde(with = "wire::int")]
    pub updates: u64,
    pub reviews: Reviews,
    #[serde(with = "wire::int")]
    pub rating: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviews {
    #[serde(with = "wire::int")]
    pub unique: u64,
    #[serde(with = "wire::int")]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Premium {
    #[serde(with = "wire::float")]
    pub price: f64,
    pub currency: String,
}

/// Body the API sends alongside a non-200 status. Only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ErrorShape {
    #[serde(with = "wire::signed")]
    pub code: i64,
    pub message: String,
}

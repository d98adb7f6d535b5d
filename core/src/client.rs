//! Endpoint facade for the resource API.
//!
//! # Design
//! `ResourceClient` holds the base URL, a shared `Transport`, and the
//! `Executor` used by the `_async` methods; it carries no per-call state, so
//! one instance can serve concurrent callers. Each operation is split into a
//! `build_*` method that produces the `HttpRequest` and a shared `fetch` that
//! runs it through the transport and the decoder.
//!
//! Paged operations normalize a missing or zero page to 1 rather than
//! rejecting it.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::action::Action;
use crate::config::{ClientConfig, API_URL};
use crate::decode::decode;
use crate::error::ApiError;
use crate::executor::{Executor, Pending};
use crate::http::{HttpRequest, Transport, UreqTransport};
use crate::types::{Author, Category, Resource, Update};

/// Filters for `list_resources`. Unset fields fall back to the API defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListResources {
    pub category: Option<u64>,
    pub page: Option<u32>,
}

impl ListResources {
    pub fn category(mut self, category: u64) -> Self {
        self.category = Some(category);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

fn normalize_page(page: Option<u32>) -> u32 {
    match page {
        None | Some(0) => 1,
        Some(page) => page,
    }
}

/// Client for the resource API.
#[derive(Clone)]
pub struct ResourceClient {
    base_url: Url,
    transport: Arc<dyn Transport>,
    executor: Executor,
}

impl fmt::Debug for ResourceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("base_url", &self.base_url.as_str())
            .field("executor", &self.executor)
            .finish_non_exhaustive()
    }
}

impl ResourceClient {
    /// Client for `base_url` using the default transport and shared executor.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::builder().base_url(base_url).build()
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url)
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// A copy of this client whose `_async` methods run on `executor`.
    pub fn with_executor(&self, executor: impl Into<Executor>) -> Self {
        Self {
            executor: executor.into(),
            ..self.clone()
        }
    }

    fn request(&self, action: Action, params: &[(&str, String)]) -> HttpRequest {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("action", action.as_str());
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        HttpRequest {
            action,
            url: url.into(),
        }
    }

    // --- request builders ---

    pub fn build_list_resources(&self, options: ListResources) -> HttpRequest {
        let mut params = Vec::with_capacity(2);
        if let Some(category) = options.category {
            params.push(("category", category.to_string()));
        }
        params.push(("page", normalize_page(options.page).to_string()));
        self.request(Action::ListResources, &params)
    }

    pub fn build_get_resource(&self, id: u64) -> HttpRequest {
        self.request(Action::GetResource, &[("id", id.to_string())])
    }

    pub fn build_get_resources_by_author(&self, author_id: u64, page: Option<u32>) -> HttpRequest {
        self.request(
            Action::GetResourcesByAuthor,
            &[
                ("id", author_id.to_string()),
                ("page", normalize_page(page).to_string()),
            ],
        )
    }

    pub fn build_list_resource_categories(&self) -> HttpRequest {
        self.request(Action::ListResourceCategories, &[])
    }

    pub fn build_get_resource_update(&self, id: u64) -> HttpRequest {
        self.request(Action::GetResourceUpdate, &[("id", id.to_string())])
    }

    pub fn build_get_resource_updates(&self, resource_id: u64, page: Option<u32>) -> HttpRequest {
        self.request(
            Action::GetResourceUpdates,
            &[
                ("id", resource_id.to_string()),
                ("page", normalize_page(page).to_string()),
            ],
        )
    }

    pub fn build_get_author(&self, id: u64) -> HttpRequest {
        self.request(Action::GetAuthor, &[("id", id.to_string())])
    }

    pub fn build_find_author(&self, name: &str) -> HttpRequest {
        self.request(Action::FindAuthor, &[("name", name.to_string())])
    }

    /// Execute `request` and decode the body into `T`.
    pub fn fetch<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<Option<T>, ApiError> {
        debug!(endpoint = %request.action, url = %request.url, "GET");
        let response = self
            .transport
            .get(&request.url)
            .map_err(|source| ApiError::Transport {
                endpoint: request.action,
                url: request.url.clone(),
                source,
            })?;
        decode(&request, &response)
    }

    // --- blocking operations ---

    pub fn list_resources(&self, options: ListResources) -> Result<Option<Vec<Resource>>, ApiError> {
        self.fetch(self.build_list_resources(options))
    }

    pub fn get_resource(&self, id: u64) -> Result<Option<Resource>, ApiError> {
        self.fetch(self.build_get_resource(id))
    }

    pub fn get_resources_by_author(
        &self,
        author_id: u64,
        page: Option<u32>,
    ) -> Result<Option<Vec<Resource>>, ApiError> {
        self.fetch(self.build_get_resources_by_author(author_id, page))
    }

    pub fn list_resource_categories(&self) -> Result<Option<Vec<Category>>, ApiError> {
        self.fetch(self.build_list_resource_categories())
    }

    pub fn get_resource_update(&self, id: u64) -> Result<Option<Update>, ApiError> {
        self.fetch(self.build_get_resource_update(id))
    }

    pub fn get_resource_updates(
        &self,
        resource_id: u64,
        page: Option<u32>,
    ) -> Result<Option<Vec<Update>>, ApiError> {
        self.fetch(self.build_get_resource_updates(resource_id, page))
    }

    pub fn get_author(&self, id: u64) -> Result<Option<Author>, ApiError> {
        self.fetch(self.build_get_author(id))
    }

    pub fn find_author(&self, name: &str) -> Result<Option<Author>, ApiError> {
        self.fetch(self.build_find_author(name))
    }

    // --- async operations ---

    pub fn list_resources_async(&self, options: ListResources) -> Pending<Option<Vec<Resource>>> {
        let client = self.clone();
        self.executor.spawn(move || client.list_resources(options))
    }

    pub fn get_resource_async(&self, id: u64) -> Pending<Option<Resource>> {
        let client = self.clone();
        self.executor.spawn(move || client.get_resource(id))
    }

    pub fn get_resources_by_author_async(
        &self,
        author_id: u64,
        page: Option<u32>,
    ) -> Pending<Option<Vec<Resource>>> {
        let client = self.clone();
        self.executor.spawn(move || client.get_resources_by_author(author_id, page))
    }

    pub fn list_resource_categories_async(&self) -> Pending<Option<Vec<Category>>> {
        let client = self.clone();
        self.executor.spawn(move || client.list_resource_categories())
    }

    pub fn get_resource_update_async(&self, id: u64) -> Pending<Option<Update>> {
        let client = self.clone();
        self.executor.spawn(move || client.get_resource_update(id))
    }

    pub fn get_resource_updates_async(
        &self,
        resource_id: u64,
        page: Option<u32>,
    ) -> Pending<Option<Vec<Update>>> {
        let client = self.clone();
        self.executor.spawn(move || client.get_resource_updates(resource_id, page))
    }

    pub fn get_author_async(&self, id: u64) -> Pending<Option<Author>> {
        let client = self.clone();
        self.executor.spawn(move || client.get_author(id))
    }

    pub fn find_author_async(&self, name: &str) -> Pending<Option<Author>> {
        let client = self.clone();
        let name = name.to_string();
        self.executor.spawn(move || client.find_author(&name))
    }
}

/// Builder for `ResourceClient`.
pub struct ClientBuilder {
    base_url: String,
    transport: Option<Arc<dyn Transport>>,
    executor: Executor,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: API_URL.to_string(),
            transport: None,
            executor: Executor::default(),
        }
    }
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn executor(mut self, executor: impl Into<Executor>) -> Self {
        self.executor = executor.into();
        self
    }

    pub fn build(self) -> Result<ResourceClient, ApiError> {
        let base_url = Url::parse(self.base_url.trim())?;
        Ok(ResourceClient {
            base_url,
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(UreqTransport::new())),
            executor: self.executor,
        })
    }
}

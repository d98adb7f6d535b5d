//! Client for a XenForo-style resource manager JSON API.
//!
//! # Overview
//! One typed method per remote action (`listResources`, `getResource`,
//! `getAuthor`, ...). Each builds a query URL against a fixed endpoint, issues a
//! GET, and decodes the JSON body into a typed record. Every blocking method
//! has an `_async` twin that runs it on a thread pool.
//!
//! # Design
//! - `ResourceClient` is stateless apart from its configuration and is cheap
//!   to clone and share across threads.
//! - Request building (`build_*`) is separate from execution, so URLs can be
//!   inspected without touching the network.
//! - The network sits behind the `Transport` trait; `UreqTransport` is the
//!   default.
//! - Non-200 responses are soft failures: logged through `tracing` and
//!   returned as `None`. Transport errors and malformed success bodies are
//!   returned as `ApiError`.

pub mod action;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod executor;
pub mod http;
pub mod types;
mod wire;

pub use action::Action;
pub use client::{ClientBuilder, ListResources, ResourceClient};
pub use config::{ClientConfig, API_URL};
pub use error::{ApiError, TransportError};
pub use executor::{Executor, Pending};
pub use http::{HttpRequest, HttpResponse, Transport, UreqTransport};
pub use types::{Author, Category, Identities, Premium, Resource, Reviews, Stats, Update};

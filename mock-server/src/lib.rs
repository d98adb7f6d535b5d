use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

/// Path the API is served under, mirroring the public endpoint.
pub const API_PATH: &str = "/simple/0.2/index.php";

/// Items per page for paged actions.
pub const PAGE_SIZE: usize = 10;

/// Query string accepted by every action.
#[derive(Debug, Default, Deserialize)]
pub struct ApiQuery {
    pub action: Option<String>,
    pub id: Option<u64>,
    pub category: Option<u64>,
    pub page: Option<usize>,
    pub name: Option<String>,
}

/// Read-only seed data. Numbers are string-encoded like the live API.
#[derive(Debug)]
pub struct Catalog {
    pub categories: Vec<Value>,
    pub authors: Vec<Value>,
    pub resources: Vec<Value>,
    pub updates: Vec<Value>,
}

impl Catalog {
    pub fn seeded() -> Self {
        let categories = vec![
            json!({"id": "4", "title": "Bungee - Spigot"}),
            json!({"id": "16", "title": "Misc"}),
        ];
        let authors = vec![
            json!({
                "id": "1",
                "username": "md_5",
                "resource_count": "12",
                "identities": {"github": "md-5", "twitter": "md__5"},
                "avatar": "https://static.example.test/avatars/1.png"
            }),
            json!({"id": "2", "username": "Jane Doe", "resource_count": "13"}),
        ];
        let mut resources = Vec::new();
        for id in 1..=25u64 {
            let (author_id, username) = if id <= 12 { (1, "md_5") } else { (2, "Jane Doe") };
            let category = if id % 2 == 0 { &categories[0] } else { &categories[1] };
            let premium = if id == 3 {
                json!({"price": "4.99", "currency": "USD"})
            } else {
                json!({"price": "0.00", "currency": ""})
            };
            resources.push(json!({
                "id": id.to_string(),
                "title": format!("Resource {id}"),
                "tag": format!("Tag line {id}"),
                "current_version": format!("1.{id}"),
                "category": category,
                "native_minecraft_version": null,
                "supported_minecraft_versions": ["1.20", "1.21"],
                "icon_link": format!("https://static.example.test/icons/{id}.png"),
                "author": {"id": author_id.to_string(), "username": username},
                "premium": premium,
                "stats": {
                    "downloads": (id * 100).to_string(),
                    "updates": "2",
                    "reviews": {"unique": "3", "total": "4"},
                    "rating": "5"
                },
                "external_download_url": "",
                "description": format!("Description of resource {id}")
            }));
        }
        let mut updates = Vec::new();
        for id in 1..=12u64 {
            updates.push(json!({
                "id": (100 + id).to_string(),
                "resource_id": "1",
                "title": format!("Update {id}"),
                "message": format!("Changes in update {id}")
            }));
        }
        Self {
            categories,
            authors,
            resources,
            updates,
        }
    }
}

pub type Db = Arc<Catalog>;

pub fn app() -> Router {
    app_with(Catalog::seeded())
}

pub fn app_with(catalog: Catalog) -> Router {
    let db: Db = Arc::new(catalog);
    Router::new().route(API_PATH, get(dispatch)).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({"code": status.as_u16(), "message": message})),
    )
        .into_response()
}

fn not_found(what: &str) -> Response {
    error(StatusCode::NOT_FOUND, &format!("{what} not found"))
}

fn id_of(value: &Value) -> Option<u64> {
    value["id"].as_str().and_then(|s| s.parse().ok())
}

fn page_of<'a>(items: impl Iterator<Item = &'a Value>, page: Option<usize>) -> Vec<Value> {
    let page = page.filter(|p| *p > 0).unwrap_or(1);
    items
        .skip((page - 1).saturating_mul(PAGE_SIZE))
        .take(PAGE_SIZE)
        .cloned()
        .collect()
}

fn find<'a>(items: &'a [Value], id: u64) -> Option<&'a Value> {
    items.iter().find(|v| id_of(v) == Some(id))
}

async fn dispatch(State(db): State<Db>, Query(q): Query<ApiQuery>) -> Response {
    debug!(?q, "request");
    let Some(action) = q.action.as_deref() else {
        return error(StatusCode::BAD_REQUEST, "missing action");
    };
    match action {
        "listResources" => {
            let items = db.resources.iter().filter(|r| match q.category {
                Some(category) => id_of(&r["category"]) == Some(category),
                None => true,
            });
            Json(page_of(items, q.page)).into_response()
        }
        "getResource" => match q.id {
            Some(id) => find(&db.resources, id)
                .map(|r| Json(r.clone()).into_response())
                .unwrap_or_else(|| not_found("Resource")),
            None => error(StatusCode::BAD_REQUEST, "missing id"),
        },
        "getResourcesByAuthor" => match q.id {
            Some(id) => {
                let items = db
                    .resources
                    .iter()
                    .filter(|r| id_of(&r["author"]) == Some(id));
                Json(page_of(items, q.page)).into_response()
            }
            None => error(StatusCode::BAD_REQUEST, "missing id"),
        },
        "listResourceCategories" => Json(db.categories.clone()).into_response(),
        "getResourceUpdate" => match q.id {
            Some(id) => find(&db.updates, id)
                .map(|u| Json(u.clone()).into_response())
                .unwrap_or_else(|| not_found("Update")),
            None => error(StatusCode::BAD_REQUEST, "missing id"),
        },
        "getResourceUpdates" => match q.id {
            Some(id) => {
                let items = db
                    .updates
                    .iter()
                    .filter(|u| u["resource_id"].as_str() == Some(id.to_string().as_str()));
                Json(page_of(items, q.page)).into_response()
            }
            None => error(StatusCode::BAD_REQUEST, "missing id"),
        },
        "getAuthor" => match q.id {
            Some(id) => find(&db.authors, id)
                .map(|a| Json(a.clone()).into_response())
                .unwrap_or_else(|| not_found("Author")),
            None => error(StatusCode::BAD_REQUEST, "missing id"),
        },
        "findAuthor" => match q.name.as_deref() {
            Some(name) => db
                .authors
                .iter()
                .find(|a| a["username"].as_str() == Some(name))
                .map(|a| Json(a.clone()).into_response())
                .unwrap_or_else(|| not_found("Author")),
            None => error(StatusCode::BAD_REQUEST, "missing name"),
        },
        // Deliberately not JSON, for exercising clients' fallback path.
        other => (StatusCode::BAD_REQUEST, format!("unknown action {other}")).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_has_expected_sizes() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.authors.len(), 2);
        assert_eq!(catalog.resources.len(), 25);
        assert_eq!(catalog.updates.len(), 12);
    }

    #[test]
    fn ids_are_string_encoded() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.resources[0]["id"], "1");
        assert_eq!(id_of(&catalog.resources[0]), Some(1));
        assert_eq!(id_of(&json!({"id": 5})), None);
    }

    #[test]
    fn page_zero_is_first_page() {
        let catalog = Catalog::seeded();
        let first = page_of(catalog.resources.iter(), Some(1));
        let zero = page_of(catalog.resources.iter(), Some(0));
        let none = page_of(catalog.resources.iter(), None);
        assert_eq!(first, zero);
        assert_eq!(first, none);
        assert_eq!(first.len(), PAGE_SIZE);
    }

    #[test]
    fn last_page_is_partial() {
        let catalog = Catalog::seeded();
        assert_eq!(page_of(catalog.resources.iter(), Some(3)).len(), 5);
        assert!(page_of(catalog.resources.iter(), Some(4)).is_empty());
    }

    #[test]
    fn huge_page_is_empty() {
        let catalog = Catalog::seeded();
        assert!(page_of(catalog.resources.iter(), Some(usize::MAX)).is_empty());
    }

    #[test]
    fn query_parses_optional_fields() {
        let q: ApiQuery = serde_json::from_str(r#"{"action":"getResource","id":3}"#).unwrap();
        assert_eq!(q.action.as_deref(), Some("getResource"));
        assert_eq!(q.id, Some(3));
        assert!(q.page.is_none());
        assert!(q.name.is_none());
    }
}

//! Shared helpers for router-level integration tests

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use noteful_backend::api;
use noteful_backend::config::{
    Config, CorsConfig, DatabaseConfig, Environment, ServerConfig,
};
use noteful_backend::state::AppState;
use noteful_backend::store::{NewNote, Store};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

/// Router wired to a fresh database
pub struct TestApp {
    pub router: Router,
    pub store: Store,
    _temp_dir: TempDir,
}

/// Response captured from the router
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub fn test_config(environment: Environment, allowed_origin: Option<&str>) -> Config {
    Config {
        server: ServerConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
        },
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 2,
        },
        cors: CorsConfig {
            allowed_origin: allowed_origin.map(str::to_string),
        },
        environment,
    }
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let store = Store::connect(db_path.to_str().unwrap(), config.database.max_connections)
        .await
        .expect("Failed to create test database");
    let router = api::router(AppState::new(store.clone()), &config).expect("router");
    TestApp {
        router,
        store,
        _temp_dir: temp_dir,
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config(Environment::Development, None)).await
}

impl TestApp {
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        };
        self.request(request.unwrap()).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    /// Insert the folder and note fixtures, returning them as the API renders them
    pub async fn seed(&self) -> (Vec<Value>, Vec<Value>) {
        let folders = make_folders_array();
        for folder in &folders {
            self.store
                .insert_folder(folder["title"].as_str().unwrap())
                .await
                .unwrap();
        }

        let notes = make_notes_array();
        for note in &notes {
            self.store
                .insert_note(&NewNote {
                    title: note["title"].as_str().unwrap().to_string(),
                    content: note["content"].as_str().unwrap().to_string(),
                    folder_id: note["folder_id"].as_i64().unwrap(),
                    date_modified: timestamp(note["date_modified"].as_str().unwrap()),
                })
                .await
                .unwrap();
        }

        (folders, notes)
    }
}

pub fn timestamp(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

pub fn make_folders_array() -> Vec<Value> {
    vec![
        json!({ "id": 1, "title": "Important" }),
        json!({ "id": 2, "title": "Super" }),
        json!({ "id": 3, "title": "Spangley" }),
    ]
}

pub fn make_notes_array() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "title": "Title 1",
            "content": "Content 1",
            "date_modified": "2019-07-24T22:35:49.504Z",
            "folder_id": 1
        }),
        json!({
            "id": 2,
            "title": "Title 2",
            "content": "Content 2",
            "date_modified": "2019-08-24T22:35:49.504Z",
            "folder_id": 1
        }),
        json!({
            "id": 3,
            "title": "Title 3",
            "content": "Content 3",
            "date_modified": "2019-09-24T22:35:49.504Z",
            "folder_id": 2
        }),
    ]
}

pub fn error_message(response: &TestResponse) -> &str {
    response.body["error"]["message"].as_str().unwrap_or_default()
}

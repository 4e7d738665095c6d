//! Router harness for handler tests.

use std::path::PathBuf;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, HeaderName, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use bazaar_core::image::{ImageStore, ImageStoreConfig};
use bazaar_db::{
    CategoryRepository, connect,
    migration::{Migrator, MigratorTrait},
};
use bazaar_shared::config::DatabaseConfig;

use crate::{AppState, HttpOptions, create_router};

pub const FRONT_URL: &str = "http://localhost:3000";
pub const JPEG_BYTES: &[u8] = b"\xff\xd8\xff\xe0uploaded jpeg";
pub const DEFAULT_IMAGE_BYTES: &[u8] = b"\xff\xd8\xff\xe0default jpeg";

const BOUNDARY: &str = "bazaar-test-boundary";

/// A router over a fresh SQLite file and image directory.
///
/// The database has one category, `fashion`. The image directory holds
/// only `default.jpg`.
pub struct TestApp {
    _dir: TempDir,
    images_dir: PathBuf,
    router: Router,
}

/// Collected response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn header(&self, name: HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");

        let url = format!("sqlite:{}?mode=rwc", dir.path().join("api.sqlite3").display());
        let db = connect(&DatabaseConfig::with_url(url))
            .await
            .expect("Failed to connect to database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        CategoryRepository::new(db.clone())
            .create("fashion")
            .await
            .expect("Failed to seed category");

        let images_dir = dir.path().join("images");
        std::fs::create_dir_all(&images_dir).expect("Failed to create image dir");
        std::fs::write(images_dir.join("default.jpg"), DEFAULT_IMAGE_BYTES)
            .expect("Failed to write default image");
        let images = ImageStore::from_config(ImageStoreConfig::new(&images_dir))
            .expect("Failed to open image store");

        let state = AppState {
            db: db.into(),
            images: images.into(),
        };
        let options = HttpOptions::new(FRONT_URL, 1024 * 1024).expect("valid origin");

        Self {
            _dir: dir,
            images_dir,
            router: create_router(state, &options),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, json: &'static str) -> TestResponse {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_multipart(&self, uri: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_item(&self, name: &str, category: &str, image: &[u8]) -> TestResponse {
        let body = multipart_body(&[("name", name), ("category", category)], Some(image));
        self.post_multipart("/items", body).await
    }

    /// File names currently in the image directory, sorted.
    pub fn image_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.images_dir)
            .expect("Failed to read image dir")
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn remove_default_image(&self) {
        std::fs::remove_file(self.images_dir.join("default.jpg"))
            .expect("Failed to remove default image");
    }
}

/// Encode text fields and an optional `image` file part as multipart/form-data.
pub fn multipart_body(fields: &[(&str, &str)], image: Option<&[u8]>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some(image) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"upload.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(image);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

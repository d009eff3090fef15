use std::fs;
use std::sync::Arc;

use hp_catalog::{http, JsonFileStore};
use tempfile::TempDir;

pub const SEED: &str = r#"{
  "carModels": [
    { "id": "1", "make": "Ford", "model": "Mustang GT", "year": 2020, "baseHorsepower": 450, "engineSpecs": "5.0L V8" },
    { "id": "3", "make": "Subaru", "model": "WRX STI", "year": 2019, "baseHorsepower": 310, "engineSpecs": "2.5L H4 turbo" }
  ],
  "products": [
    { "id": "1", "name": "Cold Air Intake", "category": "Performance", "compatibleModels": ["1"], "performanceGains": { "hp": 15, "torque": 12 }, "price": 329.99, "vendor": "K&N" },
    { "id": "2", "name": "ECU Tune", "category": "Performance", "compatibleModels": ["1", "3"], "performanceGains": { "hp": 60, "torque": 70 }, "price": 599, "vendor": "Cobb" },
    { "id": "3", "name": "Roof Rack", "category": "Off-Road", "compatibleModels": ["3"], "performanceGains": { "torque": 0 }, "price": 420, "vendor": "Thule" }
  ]
}
"#;

pub struct Server {
    pub base: String,
    pub client: reqwest::Client,
    pub dir: TempDir,
}

impl Server {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Write `document` to a temp file and serve it on port 0.
pub async fn start(document: &str) -> Server {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    fs::write(&path, document).unwrap();
    let store = Arc::new(JsonFileStore::open(&path).unwrap());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        http::serve(store, listener, std::future::pending()).await.unwrap();
    });

    Server {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
        dir,
    }
}

pub async fn seeded() -> Server {
    start(SEED).await
}

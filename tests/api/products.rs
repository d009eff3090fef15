use std::collections::BTreeSet;

use serde_json::{json, Value};
use tokio::task::JoinSet;

use crate::support;

fn exhaust(name: &str) -> Value {
    json!({
        "name": name,
        "category": "Performance",
        "compatibleModels": ["3", "1", "99"],
        "performanceGains": { "hp": 20, "torque": 18 },
        "price": "1099.5",
        "vendor": "Borla"
    })
}

#[tokio::test]
async fn create_product_keeps_dangling_references() {
    let server = support::seeded().await;
    let resp = server
        .client
        .post(server.url("/products"))
        .json(&exhaust("Cat-back Exhaust"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], "4");
    assert_eq!(body["price"], 1099.5);
    assert_eq!(body["compatibleModels"], json!(["1", "3", "99"]));

    let listed: Value = server
        .client
        .get(server.url("/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Cold Air Intake", "ECU Tune", "Roof Rack", "Cat-back Exhaust"]
    );
}

#[tokio::test]
async fn null_gain_in_one_product_keeps_both_collections_serving() {
    let server = support::start(
        r#"{
  "carModels": [
    { "id": "1", "make": "VW", "model": "Golf R", "year": 2020, "baseHorsepower": 288, "engineSpecs": "2.0L I4 turbo" }
  ],
  "products": [
    { "id": "1", "name": "Short Shifter", "category": "Performance", "compatibleModels": ["1"], "performanceGains": { "hp": null, "torque": 0 }, "price": 240, "vendor": "Kartboy" }
  ]
}"#,
    )
    .await;

    let resp = server.client.get(server.url("/products")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let resp = server.client.get(server.url("/car-models")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let resp = server
        .client
        .post(server.url("/products"))
        .json(&exhaust("Downpipe"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], "2");
}

#[tokio::test]
async fn missing_performance_gains_is_400() {
    let server = support::seeded().await;
    let resp = server
        .client
        .post(server.url("/products"))
        .json(&json!({
            "name": "Wheels",
            "category": "Aesthetic",
            "price": 1600,
            "vendor": "Enkei"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn concurrent_posts_on_empty_collection_get_consecutive_ids() {
    let server = support::start(r#"{ "carModels": [], "products": [] }"#).await;
    const REQUESTS: usize = 12;

    let mut tasks = JoinSet::new();
    for i in 0..REQUESTS {
        let client = server.client.clone();
        let url = server.url("/products");
        tasks.spawn(async move {
            let resp = client
                .post(url)
                .json(&exhaust(&format!("Exhaust {i}")))
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status(), 201);
            let body: Value = resp.json().await.unwrap();
            body["id"].as_str().unwrap().parse::<usize>().unwrap()
        });
    }

    let mut ids = BTreeSet::new();
    while let Some(id) = tasks.join_next().await {
        ids.insert(id.unwrap());
    }
    assert_eq!(ids, (1..=REQUESTS).collect::<BTreeSet<_>>());

    let listed: Value = server
        .client
        .get(server.url("/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), REQUESTS);
}

use serde_json::{json, Value};

use crate::support;

async fn calculate(server: &support::Server, request: Value) -> reqwest::Response {
    server
        .client
        .post(server.url("/horsepower"))
        .json(&request)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn sums_selected_products() {
    let server = support::seeded().await;
    let resp = calculate(&server, json!({ "carId": "1", "productIds": ["1", "2"] })).await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["car"]["model"], "Mustang GT");
    assert_eq!(body["car"]["baseHorsepower"], 450);
    assert_eq!(body["baseHorsepower"], 450);
    assert_eq!(body["theoreticalHorsepower"], 525);
    assert_eq!(body["horsepowerGain"], 75);
    assert_eq!(body["torqueGain"], 82);
    assert_eq!(body["products"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn duplicate_and_unknown_products_are_ignored() {
    let server = support::seeded().await;
    let resp = calculate(
        &server,
        json!({ "carId": "3", "productIds": ["2", "2", "404", "3"] }),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["theoreticalHorsepower"], 370);
    assert_eq!(body["horsepowerGain"], 60);
    let ids: Vec<&str> = body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["2", "3"]);
}

#[tokio::test]
async fn no_products_is_base_horsepower() {
    let server = support::seeded().await;
    let resp = calculate(&server, json!({ "carId": "3" })).await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["theoreticalHorsepower"], 310);
    assert_eq!(body["horsepowerGain"], 0);
}

#[tokio::test]
async fn fractional_gains_stay_fractional() {
    let server = support::start(
        r#"{
  "carModels": [
    { "id": "1", "make": "Mini", "model": "Cooper S", "year": 2015, "baseHorsepower": 189, "engineSpecs": "2.0L I4 turbo" }
  ],
  "products": [
    { "id": "1", "name": "Pulley", "category": "Performance", "compatibleModels": ["1"], "performanceGains": { "hp": 7.5, "torque": null }, "price": 150, "vendor": "Alta" }
  ]
}"#,
    )
    .await;
    let resp = calculate(&server, json!({ "carId": "1", "productIds": ["1"] })).await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["theoreticalHorsepower"], 196.5);
    assert_eq!(body["horsepowerGain"], 7.5);
    assert_eq!(body["torqueGain"], 0);
}

#[tokio::test]
async fn unknown_car_is_404() {
    let server = support::seeded().await;
    let resp = calculate(&server, json!({ "carId": "42", "productIds": ["1"] })).await;
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("42"));
}

#[tokio::test]
async fn no_car_selected_is_no_result() {
    let server = support::seeded().await;
    let resp = calculate(&server, json!({ "productIds": ["1"] })).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, Value::Null);
}

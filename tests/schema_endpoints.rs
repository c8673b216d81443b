//! Integration tests for schema document exposure.

use klant_gateway::config::AppConfig;
use klant_gateway::HttpServer;

mod common;

const EXPECTED_VERSIONS: [(&str, &str); 2] = [("klanten", "1.0.0"), ("contactmomenten", "1.0.0")];

#[tokio::test]
async fn schema_documents_as_json() {
    let (addr, shutdown) = common::spawn_gateway(AppConfig::default()).await;
    let client = common::client();

    for (component, api_version) in EXPECTED_VERSIONS {
        let response = client
            .get(format!(
                "http://{addr}/{component}/api/v1/schema/openapi.json"
            ))
            .send()
            .await
            .expect("gateway unreachable");

        assert_eq!(response.status(), 200, "{component}");
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(
            content_type.contains("application/json"),
            "{component}: {content_type}"
        );

        let document: serde_json::Value = response.json().await.unwrap();
        assert!(document["openapi"].as_str().unwrap() >= "3.0.0", "{component}");
        assert_eq!(document["info"]["version"], api_version, "{component}");
    }

    shutdown.trigger();
}

#[tokio::test]
async fn schema_documents_as_yaml() {
    let (addr, shutdown) = common::spawn_gateway(AppConfig::default()).await;
    let client = common::client();

    for (component, api_version) in EXPECTED_VERSIONS {
        let response = client
            .get(format!(
                "http://{addr}/{component}/api/v1/schema/openapi.yaml"
            ))
            .send()
            .await
            .expect("gateway unreachable");

        assert_eq!(response.status(), 200, "{component}");
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(
            content_type.contains("application/yaml"),
            "{component}: {content_type}"
        );

        let document: serde_yaml::Value =
            serde_yaml::from_str(&response.text().await.unwrap()).unwrap();
        let openapi = document
            .get("openapi")
            .and_then(|v| v.as_str())
            .expect("document misses the openapi field");
        assert!(openapi >= "3.0.0", "{component}: {openapi}");
        assert_eq!(
            document
                .get("info")
                .and_then(|info| info.get("version"))
                .and_then(|v| v.as_str()),
            Some(api_version),
            "{component}"
        );
    }

    shutdown.trigger();
}

#[tokio::test]
async fn unsupported_format_suffix_is_not_acceptable() {
    let (addr, shutdown) = common::spawn_gateway(AppConfig::default()).await;

    let response = common::client()
        .get(format!("http://{addr}/klanten/api/v1/schema/openapi.toml"))
        .send()
        .await
        .expect("gateway unreachable");

    assert_eq!(response.status(), 406);

    shutdown.trigger();
}

#[tokio::test]
async fn unknown_schema_name_is_not_found() {
    let (addr, shutdown) = common::spawn_gateway(AppConfig::default()).await;

    let response = common::client()
        .get(format!("http://{addr}/klanten/api/v1/schema/swagger.json"))
        .send()
        .await
        .expect("gateway unreachable");

    assert_eq!(response.status(), 404);

    shutdown.trigger();
}

#[tokio::test]
async fn file_backed_documents_are_served_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("openapi.yaml");
    std::fs::write(
        &path,
        r#"
openapi: "3.0.0"
info:
  title: Klanten API
  version: 1.0.0
  description: Customer records
paths: {}
servers:
  - url: https://example.com/klanten/api/v1
"#,
    )
    .unwrap();

    let mut config = AppConfig::default();
    config.components[0].schema_path = Some(path);

    let (addr, shutdown) = common::spawn_gateway(config).await;

    let response = common::client()
        .get(format!("http://{addr}/klanten/api/v1/schema/openapi.json"))
        .send()
        .await
        .expect("gateway unreachable");

    let document: serde_json::Value = response.json().await.unwrap();
    assert_eq!(document["info"]["title"], "Klanten API");
    assert_eq!(document["info"]["description"], "Customer records");
    assert_eq!(
        document["servers"][0]["url"],
        "https://example.com/klanten/api/v1"
    );

    shutdown.trigger();
}

#[test]
fn documents_below_the_minimum_version_fail_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("openapi.yaml");
    std::fs::write(
        &path,
        "openapi: \"2.0\"\ninfo:\n  title: Klanten API\n  version: 1.0.0\n",
    )
    .unwrap();

    let mut config = AppConfig::default();
    config.components[0].schema_path = Some(path);

    assert!(HttpServer::new(config).is_err());
}

#![allow(clippy::unwrap_used)]
// Integration tests for `NetlifyClient` using wiremock.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use netsite_api::{Error, NetlifyClient, RepoSetup, SiteSetup, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, NetlifyClient) {
    let server = MockServer::start().await;
    let client = NetlifyClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn plain_setup(name: &str) -> SiteSetup {
    SiteSetup {
        name: name.into(),
        custom_domain: String::new(),
        repo: None,
    }
}

fn site_body(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "url": format!("https://{name}.netlify.app"),
        "deploy_url": format!("https://main--{name}.netlify.app"),
        "account_slug": "team-x",
        "account_name": "Team X",
        "created_at": "2024-05-01T10:00:00Z",
        "build_settings": null
    })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_create_site_posts_setup_payload() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sites"))
        .and(body_json(json!({ "name": "site1", "custom_domain": "" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(site_body("s-1", "site1")))
        .expect(1)
        .mount(&server)
        .await;

    let site = client.create_site(&plain_setup("site1")).await.unwrap();

    assert_eq!(site.id, "s-1");
    assert_eq!(site.name, "site1");
    assert_eq!(site.account_name, "Team X");
    assert!(site.created_at.is_some());
}

#[tokio::test]
async fn test_create_site_in_team_uses_account_path() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/team-x/sites"))
        .respond_with(ResponseTemplate::new(201).set_body_json(site_body("s-2", "auto-name")))
        .expect(1)
        .mount(&server)
        .await;

    let site = client
        .create_site_in_team("team-x", &plain_setup(""))
        .await
        .unwrap();

    assert_eq!(site.id, "s-2");
    assert_eq!(site.account_slug, "team-x");
}

#[tokio::test]
async fn test_repo_payload_is_sent_without_installation_id() {
    let (server, client) = setup().await;

    let expected = json!({
        "name": "site1",
        "custom_domain": "www.example.com",
        "repo": {
            "cmd": "npm run build",
            "deploy_key_id": "",
            "dir": "web",
            "provider": "gitlab",
            "repo_path": "grp/proj",
            "repo_branch": "dev"
        }
    });

    Mock::given(method("PATCH"))
        .and(path("/api/v1/sites/s-1"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(site_body("s-1", "site1")))
        .expect(1)
        .mount(&server)
        .await;

    let setup = SiteSetup {
        name: "site1".into(),
        custom_domain: "www.example.com".into(),
        repo: Some(RepoSetup {
            cmd: "npm run build".into(),
            deploy_key_id: String::new(),
            dir: "web".into(),
            provider: "gitlab".into(),
            repo_path: "grp/proj".into(),
            repo_branch: "dev".into(),
        }),
    };

    client.update_site("s-1", &setup).await.unwrap();
}

#[tokio::test]
async fn test_get_site_reads_build_settings() {
    let (server, client) = setup().await;

    let mut body = site_body("s-1", "site1");
    body["build_settings"] = json!({
        "provider": "github",
        "repo_path": "org/repo",
        "repo_branch": "main",
        "repo_url": "https://github.com/org/repo",
        "cmd": "make",
        "dir": "public",
        "deploy_key_id": null,
        "installation_id": 987
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/sites/s-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let site = client.get_site("s-1").await.unwrap();
    let build = site.build_settings.unwrap();

    assert_eq!(build.repo_path, "org/repo");
    assert_eq!(build.deploy_key_id, "");
    assert_eq!(build.installation_id, Some(987));
}

#[tokio::test]
async fn test_delete_site() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/sites/s-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_site("s-1").await.unwrap();
}

#[tokio::test]
async fn test_token_is_sent_as_bearer_header() {
    let server = MockServer::start().await;
    let token = SecretString::from("tok-123".to_string());
    let client =
        NetlifyClient::from_token(&server.uri(), &token, &TransportConfig::default()).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/sites/s-1"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(site_body("s-1", "site1")))
        .expect(1)
        .mount(&server)
        .await;

    client.get_site("s-1").await.unwrap();
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_404_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "code": 404, "message": "Not Found" })),
        )
        .mount(&server)
        .await;

    let err = client.get_site("gone").await.unwrap_err();

    assert!(err.is_not_found(), "expected not-found, got: {err:?}");
    assert!(matches!(
        err,
        Error::Api {
            status: 404,
            code: Some(404),
            ..
        }
    ));
}

#[tokio::test]
async fn test_error_401_unauthorized() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.get_site("s-1").await.unwrap_err();

    assert!(matches!(err, Error::InvalidToken), "got: {err:?}");
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_error_429_carries_retry_after() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "17"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.create_site(&plain_setup("x")).await.unwrap_err();

    assert!(matches!(
        err,
        Error::RateLimited {
            retry_after_secs: 17
        }
    ));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_error_422_plain_text_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_string("name already taken"))
        .mount(&server)
        .await;

    let err = client.create_site(&plain_setup("dup")).await.unwrap_err();

    match err {
        Error::Api {
            status, message, ..
        } => {
            assert_eq!(status, 422);
            assert_eq!(message, "name already taken");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_response() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.get_site("s-1").await.unwrap_err();

    assert!(matches!(err, Error::Deserialization { .. }), "got: {err:?}");
}

#![allow(clippy::unwrap_used)]
// End-to-end reconciler tests: real `NetlifyClient` against wiremock.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

use netsite_api::NetlifyClient;
use netsite_core::reconciler;
use netsite_core::{ClientConfig, CoreError, RepoConfig, SiteAttributes, TrackedSite};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, NetlifyClient) {
    let server = MockServer::start().await;
    let mut config = ClientConfig::new(SecretString::from("test-token")).unwrap();
    config.api_url = server.uri().parse().unwrap();
    let client = config.connect().unwrap();
    (server, client)
}

async fn mount_site(server: &MockServer, id: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/sites/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn bodies_for(server: &MockServer, http_method: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.method.as_str() == http_method)
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}

// ── Scenarios ───────────────────────────────────────────────────────

#[tokio::test]
async fn team_scoped_create_reads_back_server_name() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/team-x/sites"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({ "name": "", "custom_domain": "" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "s-1" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/sites"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    mount_site(
        &server,
        "s-1",
        json!({
            "id": "s-1",
            "name": "eager-hopper-1a2b3c",
            "custom_domain": null,
            "deploy_url": "https://eager-hopper-1a2b3c.netlify.app",
            "account_slug": "team-x",
            "account_name": "Team X",
            "build_settings": { "repo_path": "" }
        }),
    )
    .await;

    let mut tracked = TrackedSite::new(SiteAttributes {
        name: Some(String::new()),
        custom_domain: Some(String::new()),
        account_slug: Some("team-x".into()),
        repo: None,
    });
    reconciler::create(&client, &mut tracked).await.unwrap();

    let state = tracked.state.unwrap();
    assert_eq!(tracked.id.unwrap().as_str(), "s-1");
    assert_eq!(state.name, "eager-hopper-1a2b3c");
    assert_eq!(state.account_slug, "team-x");
    assert_eq!(state.account_name, "Team X");
    assert_eq!(state.repo, None);
}

#[tokio::test]
async fn repo_create_sends_writable_fields_and_reads_installation_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sites"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "s-2" })))
        .expect(1)
        .mount(&server)
        .await;
    mount_site(
        &server,
        "s-2",
        json!({
            "id": "s-2",
            "name": "site1",
            "deploy_url": "https://site1.netlify.app",
            "account_slug": "me",
            "account_name": "Me",
            "build_settings": {
                "provider": "gitlab",
                "repo_path": "grp/proj",
                "repo_branch": "dev",
                "dir": "web",
                "cmd": "npm run build",
                "deploy_key_id": "",
                "installation_id": 31337
            }
        }),
    )
    .await;

    let declared_repo = RepoConfig {
        provider: "gitlab".into(),
        repo_path: "grp/proj".into(),
        repo_branch: "dev".into(),
        dir: Some("web".into()),
        command: Some("npm run build".into()),
        ..RepoConfig::default()
    };
    let mut tracked = TrackedSite::new(SiteAttributes {
        name: Some("site1".into()),
        repo: Some(declared_repo.clone()),
        ..SiteAttributes::default()
    });
    reconciler::create(&client, &mut tracked).await.unwrap();

    let posted = bodies_for(&server, "POST").await;
    assert_eq!(
        posted,
        vec![json!({
            "name": "site1",
            "custom_domain": "",
            "repo": {
                "cmd": "npm run build",
                "deploy_key_id": "",
                "dir": "web",
                "provider": "gitlab",
                "repo_path": "grp/proj",
                "repo_branch": "dev"
            }
        })]
    );

    let repo = tracked.state.unwrap().repo.unwrap();
    assert_eq!(
        repo,
        RepoConfig {
            installation_id: Some(31337),
            ..declared_repo
        }
    );
}

#[tokio::test]
async fn read_of_deleted_site_clears_identifier() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sites/gone"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "code": 404, "message": "Not Found" })),
        )
        .mount(&server)
        .await;

    let mut tracked = TrackedSite::from_id("gone".parse().unwrap());
    reconciler::read(&client, &mut tracked).await.unwrap();

    assert_eq!(tracked.id, None);
    assert_eq!(tracked.state, None);
}

#[tokio::test]
async fn read_surfaces_server_errors() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let mut tracked = TrackedSite::from_id("s-1".parse().unwrap());
    let err = reconciler::read(&client, &mut tracked).await.unwrap_err();

    assert!(matches!(err, CoreError::Api(ref e) if e.status() == Some(502)));
    assert!(tracked.exists());
}

#[tokio::test]
async fn update_patches_then_refreshes() {
    let (server, client) = setup().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/sites/s-3"))
        .and(body_json(json!({ "name": "renamed", "custom_domain": "www.example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "s-3" })))
        .expect(1)
        .mount(&server)
        .await;
    mount_site(
        &server,
        "s-3",
        json!({
            "id": "s-3",
            "name": "renamed",
            "custom_domain": "www.example.com",
            "account_slug": "team-x"
        }),
    )
    .await;

    let mut tracked = TrackedSite::from_id("s-3".parse().unwrap());
    tracked.declared = SiteAttributes {
        name: Some("renamed".into()),
        custom_domain: Some("www.example.com".into()),
        account_slug: Some("team-x".into()),
        repo: None,
    };
    reconciler::update(&client, &mut tracked).await.unwrap();

    let state = tracked.state.unwrap();
    assert_eq!(state.name, "renamed");
    assert_eq!(state.custom_domain, "www.example.com");
}

#[tokio::test]
async fn create_then_missing_site_clears_record() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sites"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "s-4" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let declared = SiteAttributes {
        name: Some("ephemeral".into()),
        ..SiteAttributes::default()
    };
    let mut tracked = TrackedSite::new(declared.clone());
    reconciler::create(&client, &mut tracked).await.unwrap();

    assert!(!tracked.exists());
    assert_eq!(tracked.state, None);
    assert_eq!(tracked.declared, declared);
}

#[tokio::test]
async fn delete_then_import_by_id() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/sites/s-5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    mount_site(
        &server,
        "s-6",
        json!({
            "id": "s-6",
            "name": "imported",
            "deploy_url": "https://imported.netlify.app",
            "build_settings": {
                "provider": "github",
                "repo_path": "org/repo",
                "repo_branch": "main",
                "installation_id": 12
            }
        }),
    )
    .await;

    let mut tracked = TrackedSite::from_id("s-5".parse().unwrap());
    reconciler::delete(&client, &mut tracked).await.unwrap();
    assert!(!tracked.exists());

    let imported = reconciler::import(&client, "s-6".parse().unwrap())
        .await
        .unwrap()
        .unwrap();
    let state = imported.state.unwrap();
    assert_eq!(state.deploy_url, "https://imported.netlify.app");
    assert_eq!(state.repo.as_ref().unwrap().installation_id, Some(12));
    assert_eq!(imported.declared.name.as_deref(), Some("imported"));
    assert_eq!(imported.declared.repo, state.repo);
}

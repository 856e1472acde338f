use std::net::TcpListener;
use std::sync::Arc;

use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{json, Value};

use cricketpro_backend::config::settings::{get_config, SyncSettings};
use cricketpro_backend::run;
use cricketpro_backend::store::MemStore;
use cricketpro_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub store: Arc<MemStore>,
}

pub async fn spawn_app() -> TestApp {
    let config = get_config().expect("Failed to read configuration.");
    spawn_app_with_sync(config.sync).await
}

pub async fn spawn_app_with_sync(sync_settings: SyncSettings) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let store = Arc::new(MemStore::new());
    let server = run(listener, store.clone(), sync_settings).expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp { address, store }
}

pub async fn create_team(app: &TestApp, name: &str, short_name: &str) -> Value {
    let client = Client::new();
    let response = client
        .post(&format!("{}/api/teams", app.address))
        .json(&json!({ "name": name, "shortName": short_name }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);
    response.json().await.expect("Failed to parse team response")
}

pub async fn create_player(app: &TestApp, name: &str, role: &str, team_id: Option<&str>) -> Value {
    let client = Client::new();
    let mut body = json!({ "name": name, "role": role });
    if let Some(team_id) = team_id {
        body["teamId"] = json!(team_id);
    }
    let response = client
        .post(&format!("{}/api/players", app.address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);
    response
        .json()
        .await
        .expect("Failed to parse player response")
}

pub async fn create_match(app: &TestApp, team1: &Value, team2: &Value, format: &str) -> Value {
    let client = Client::new();
    let response = client
        .post(&format!("{}/api/matches", app.address))
        .json(&json!({
            "team1Id": team1["id"],
            "team2Id": team2["id"],
            "team1Name": team1["name"],
            "team2Name": team2["name"],
            "format": format
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);
    response
        .json()
        .await
        .expect("Failed to parse match response")
}

/// Start a match and return its live state.
pub async fn start_match(app: &TestApp, match_id: &str) -> Value {
    let client = Client::new();
    let response = client
        .post(&format!("{}/api/matches/{}/start", app.address, match_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 200);
    response
        .json()
        .await
        .expect("Failed to parse match response")
}

/// Record a delivery and return the `{progress, match}` response body.
pub async fn record_ball(app: &TestApp, match_id: &str, ball: Value) -> Value {
    let client = Client::new();
    let response = client
        .post(&format!("{}/api/matches/{}/balls", app.address, match_id))
        .json(&ball)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 200);
    response
        .json()
        .await
        .expect("Failed to parse ball response")
}

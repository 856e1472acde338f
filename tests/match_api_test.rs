use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_match, create_team, spawn_app};

#[tokio::test]
async fn create_match_zeroes_innings_state_regardless_of_input() {
    let app = spawn_app().await;
    let client = Client::new();

    let alpha = create_team(&app, "Alpha", "ALP").await;
    let beta = create_team(&app, "Beta", "BET").await;

    // Caller-supplied scores and status must be ignored.
    let response = client
        .post(&format!("{}/api/matches", app.address))
        .json(&json!({
            "team1Id": alpha["id"],
            "team2Id": beta["id"],
            "team1Name": alpha["name"],
            "team2Name": beta["name"],
            "format": "T20",
            "team1Score": 187,
            "team1Wickets": 5,
            "team1Overs": 20.0,
            "status": "completed"
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);

    let m: serde_json::Value = response.json().await.unwrap();
    assert_eq!(m["team1Score"], 0);
    assert_eq!(m["team1Wickets"], 0);
    assert_eq!(m["team1Overs"], 0.0);
    assert_eq!(m["team2Score"], 0);
    assert_eq!(m["status"], "not_started");
    assert_eq!(m["currentInnings"], 1);
    assert_eq!(m["ballByBall"], json!([]));
    assert_eq!(m["playerStats"], json!({}));
}

#[tokio::test]
async fn create_match_rejects_same_team_twice() {
    let app = spawn_app().await;
    let client = Client::new();

    let alpha = create_team(&app, "Alpha", "ALP").await;
    let response = client
        .post(&format!("{}/api/matches", app.address))
        .json(&json!({
            "team1Id": alpha["id"],
            "team2Id": alpha["id"],
            "team1Name": alpha["name"],
            "team2Name": alpha["name"],
            "format": "T20"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Teams must be different");
}

#[tokio::test]
async fn create_match_rejects_unknown_team_reference() {
    let app = spawn_app().await;
    let client = Client::new();

    let alpha = create_team(&app, "Alpha", "ALP").await;
    let response = client
        .post(&format!("{}/api/matches", app.address))
        .json(&json!({
            "team1Id": alpha["id"],
            "team2Id": uuid::Uuid::new_v4(),
            "team1Name": "Alpha",
            "team2Name": "Ghosts",
            "format": "ODI"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn matches_are_listed_most_recent_first() {
    let app = spawn_app().await;
    let client = Client::new();

    let alpha = create_team(&app, "Alpha", "ALP").await;
    let beta = create_team(&app, "Beta", "BET").await;

    let older = client
        .post(&format!("{}/api/matches", app.address))
        .json(&json!({
            "team1Id": alpha["id"],
            "team2Id": beta["id"],
            "team1Name": alpha["name"],
            "team2Name": beta["name"],
            "format": "T20",
            "date": "2026-07-01T10:00:00Z"
        }))
        .send()
        .await
        .unwrap()
        .json::<serde_json::Value>()
        .await
        .unwrap();

    let newer = client
        .post(&format!("{}/api/matches", app.address))
        .json(&json!({
            "team1Id": alpha["id"],
            "team2Id": beta["id"],
            "team1Name": alpha["name"],
            "team2Name": beta["name"],
            "format": "T20",
            "date": "2026-08-01T10:00:00Z"
        }))
        .send()
        .await
        .unwrap()
        .json::<serde_json::Value>()
        .await
        .unwrap();

    let matches: Vec<serde_json::Value> = client
        .get(&format!("{}/api/matches", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["id"], newer["id"]);
    assert_eq!(matches[1]["id"], older["id"]);
}

#[tokio::test]
async fn patch_merges_partial_score_updates() {
    let app = spawn_app().await;
    let client = Client::new();

    let alpha = create_team(&app, "Alpha", "ALP").await;
    let beta = create_team(&app, "Beta", "BET").await;
    let m = create_match(&app, &alpha, &beta, "T20").await;
    let match_id = m["id"].as_str().unwrap();

    let response = client
        .patch(&format!("{}/api/matches/{}", app.address, match_id))
        .json(&json!({ "team1Score": 42, "team1Wickets": 2 }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 200);

    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["team1Score"], 42);
    assert_eq!(updated["team1Wickets"], 2);
    // The rest of the record is untouched.
    assert_eq!(updated["team2Score"], 0);
    assert_eq!(updated["format"], "T20");

    // A later patch wins over the earlier one.
    let response = client
        .patch(&format!("{}/api/matches/{}", app.address, match_id))
        .json(&json!({ "team1Score": 45 }))
        .send()
        .await
        .unwrap();
    let updated: serde_json::Value = response.json().await.unwrap();
    assert_eq!(updated["team1Score"], 45);
    assert_eq!(updated["team1Wickets"], 2);
}

#[tokio::test]
async fn patch_rejects_impossible_wicket_counts() {
    let app = spawn_app().await;
    let client = Client::new();

    let alpha = create_team(&app, "Alpha", "ALP").await;
    let beta = create_team(&app, "Beta", "BET").await;
    let m = create_match(&app, &alpha, &beta, "T20").await;

    let response = client
        .patch(&format!(
            "{}/api/matches/{}",
            app.address,
            m["id"].as_str().unwrap()
        ))
        .json(&json!({ "team1Wickets": 11 }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn delete_match_removes_it() {
    let app = spawn_app().await;
    let client = Client::new();

    let alpha = create_team(&app, "Alpha", "ALP").await;
    let beta = create_team(&app, "Beta", "BET").await;
    let m = create_match(&app, &alpha, &beta, "Test").await;
    let match_id = m["id"].as_str().unwrap();

    let response = client
        .delete(&format!("{}/api/matches/{}", app.address, match_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let lookup = client
        .get(&format!("{}/api/matches/{}", app.address, match_id))
        .send()
        .await
        .unwrap();
    assert_eq!(lookup.status().as_u16(), 404);

    // Deleting again reports the absence.
    let again = client
        .delete(&format!("{}/api/matches/{}", app.address, match_id))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status().as_u16(), 404);
}

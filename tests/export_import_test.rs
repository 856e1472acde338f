use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_match, create_player, create_team, spawn_app};

#[tokio::test]
async fn export_bundles_all_collections_with_version_tag() {
    let app = spawn_app().await;
    let client = Client::new();

    let alpha = create_team(&app, "Alpha", "ALP").await;
    let beta = create_team(&app, "Beta", "BET").await;
    create_player(&app, "Asha", "batsman", Some(alpha["id"].as_str().unwrap())).await;
    create_match(&app, &alpha, &beta, "T20").await;

    let snapshot: serde_json::Value = client
        .get(&format!("{}/api/export", app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();

    assert_eq!(snapshot["teams"].as_array().unwrap().len(), 2);
    assert_eq!(snapshot["players"].as_array().unwrap().len(), 1);
    assert_eq!(snapshot["matches"].as_array().unwrap().len(), 1);
    assert_eq!(snapshot["version"], "1.0.0");
    assert!(snapshot["exportDate"].as_str().is_some());
}

#[tokio::test]
async fn export_then_import_reproduces_counts_with_fresh_consistent_ids() {
    let source = spawn_app().await;
    let client = Client::new();

    let alpha = create_team(&source, "Alpha", "ALP").await;
    let beta = create_team(&source, "Beta", "BET").await;
    let alpha_id = alpha["id"].as_str().unwrap();
    create_player(&source, "Asha", "batsman", Some(alpha_id)).await;
    create_player(&source, "Ravi", "bowler", Some(beta["id"].as_str().unwrap())).await;
    create_match(&source, &alpha, &beta, "T20").await;

    let snapshot: serde_json::Value = client
        .get(&format!("{}/api/export", source.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Restore into a second, empty server.
    let target = spawn_app().await;
    let report: serde_json::Value = client
        .post(&format!("{}/api/import", target.address))
        .json(&snapshot)
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();

    assert_eq!(report["success"], true);
    assert_eq!(report["teamsCreated"], 2);
    assert_eq!(report["playersCreated"], 2);
    assert_eq!(report["matchesCreated"], 1);

    let teams: Vec<serde_json::Value> = client
        .get(&format!("{}/api/teams", target.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let players: Vec<serde_json::Value> = client
        .get(&format!("{}/api/players", target.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let matches: Vec<serde_json::Value> = client
        .get(&format!("{}/api/matches", target.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(teams.len(), 2);
    assert_eq!(players.len(), 2);
    assert_eq!(matches.len(), 1);

    // Identifiers are new...
    let new_team_ids: Vec<&str> = teams.iter().map(|t| t["id"].as_str().unwrap()).collect();
    assert!(!new_team_ids.contains(&alpha_id));

    // ...and every team reference resolves inside the new id set.
    for player in &players {
        let team_ref = player["teamId"].as_str().unwrap();
        assert!(new_team_ids.contains(&team_ref));
    }
    for m in &matches {
        assert!(new_team_ids.contains(&m["team1Id"].as_str().unwrap()));
        assert!(new_team_ids.contains(&m["team2Id"].as_str().unwrap()));
    }
}

#[tokio::test]
async fn import_is_additive_unless_replace_is_set() {
    let app = spawn_app().await;
    let client = Client::new();

    create_team(&app, "Resident", "RES").await;

    let snapshot = json!({
        "teams": [{ "name": "Visitor", "shortName": "VIS" }],
        "players": [],
        "matches": []
    });

    client
        .post(&format!("{}/api/import", app.address))
        .json(&snapshot)
        .send()
        .await
        .unwrap();

    let teams: Vec<serde_json::Value> = client
        .get(&format!("{}/api/teams", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(teams.len(), 2);

    // With replace, only the snapshot's content survives.
    let mut replacing = snapshot.clone();
    replacing["replace"] = json!(true);
    client
        .post(&format!("{}/api/import", app.address))
        .json(&replacing)
        .send()
        .await
        .unwrap();

    let teams: Vec<serde_json::Value> = client
        .get(&format!("{}/api/teams", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["name"], "Visitor");
}

#[tokio::test]
async fn import_collects_per_record_errors_without_aborting() {
    let app = spawn_app().await;
    let client = Client::new();

    let report: serde_json::Value = client
        .post(&format!("{}/api/import", app.address))
        .json(&json!({
            "teams": [
                { "name": "Alpha", "shortName": "ALP" },
                { "name": "", "shortName": "BAD" }
            ],
            "players": [{ "role": "batsman" }],
            "matches": []
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(report["success"], false);
    assert_eq!(report["errors"].as_array().unwrap().len(), 2);
    // The valid team still made it in.
    assert_eq!(report["teamsCreated"], 1);
}

#[tokio::test]
async fn import_without_required_collections_is_rejected() {
    let app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/api/import", app.address))
        .json(&json!({ "teams": [] }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}

// SPDX-License-Identifier: MIT

//! Profile façade: CRUD, search, and payload shape.

use nutrilife_client::models::profile::{Goal, ProfileSearchQuery};
use nutrilife_client::ui::ProfileForm;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

mod common;

#[tokio::test]
async fn test_exists_decodes_bare_boolean() {
    let (app, server, store, _) = common::test_app().await;
    common::sign_in(&store);

    Mock::given(method("GET"))
        .and(path("/api/profiles/exists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(false)))
        .mount(&server)
        .await;

    assert!(!app.profiles.exists().await.unwrap());
}

#[tokio::test]
async fn test_get_decodes_server_computed_fields() {
    let (app, server, store, _) = common::test_app().await;
    common::sign_in(&store);

    Mock::given(method("GET"))
        .and(path("/api/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::profile_json()))
        .mount(&server)
        .await;

    let profile = app.profiles.get().await.unwrap();
    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.bmi, Some(20.8));
    assert_eq!(profile.bmi_category.as_deref(), Some("Normal"));
    assert_eq!(profile.bmr, Some(1346));
    assert_eq!(profile.tdee, Some(2086));
}

#[tokio::test]
async fn test_create_submits_numbers_and_omits_blanks() {
    let (app, server, store, _) = common::test_app().await;
    common::sign_in(&store);

    // Height and weight as filled-in text, everything else blank
    let form = ProfileForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        height: "170".to_string(),
        weight: "60".to_string(),
        ..Default::default()
    };

    Mock::given(method("POST"))
        .and(path("/api/profiles"))
        .and(body_json(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "height": 170.0,
            "weight": 60.0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(common::profile_json()))
        .expect(1)
        .mount(&server)
        .await;

    let profile = app.profiles.create(&form.to_request()).await.unwrap();
    assert_eq!(profile.id, 7);
}

#[tokio::test]
async fn test_update_is_a_put_with_full_payload() {
    let (app, server, store, _) = common::test_app().await;
    common::sign_in(&store);

    let form = ProfileForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        weight: "72.5".to_string(),
        daily_calorie_goal: "2000".to_string(),
        ..Default::default()
    };

    Mock::given(method("PUT"))
        .and(path("/api/profiles"))
        .and(body_json(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "weight": 72.5,
            "dailyCalorieGoal": 2000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::profile_json()))
        .expect(1)
        .mount(&server)
        .await;

    app.profiles.update(&form.to_request()).await.unwrap();
}

#[tokio::test]
async fn test_delete_accepts_empty_204() {
    let (app, server, store, _) = common::test_app().await;
    common::sign_in(&store);

    Mock::given(method("DELETE"))
        .and(path("/api/profiles"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    app.profiles.delete().await.unwrap();
}

#[tokio::test]
async fn test_search_sends_only_set_parameters() {
    let (app, server, store, _) = common::test_app().await;
    common::sign_in(&store);

    Mock::given(method("GET"))
        .and(path("/api/profiles/search"))
        .and(query_param("name", "Ada"))
        .and(query_param("goal", "WEIGHT_LOSS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([common::profile_json()])))
        .expect(1)
        .mount(&server)
        .await;

    let query = ProfileSearchQuery {
        name: Some("Ada".to_string()),
        goal: Some(Goal::WeightLoss),
        activity_level: None,
    };

    let results = app.profiles.search(&query).await.unwrap();
    assert_eq!(results.len(), 1);

    // The unset parameter must not appear in the query string at all
    let requests = server.received_requests().await.unwrap();
    let url = requests[0].url.to_string();
    assert!(!url.contains("activityLevel"));
}

#[tokio::test]
async fn test_create_conflict_surfaces_backend_message() {
    let (app, server, store, _) = common::test_app().await;
    common::sign_in(&store);

    Mock::given(method("POST"))
        .and(path("/api/profiles"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Profile already exists"})),
        )
        .mount(&server)
        .await;

    let form = ProfileForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        ..Default::default()
    };

    let error = app.profiles.create(&form.to_request()).await.unwrap_err();
    assert_eq!(
        error.display_message("fallback"),
        "Profile already exists"
    );
}

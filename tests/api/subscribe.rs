use anyhow::Result;
use mailpass::web::{GENERIC_ERROR_MSG, REQUEST_ID_HEADER, SUBSCRIBED_MSG};
use reqwest::StatusCode;
use serde_json::{json, Value};
use wiremock::{
    matchers::{any, body_json, header, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{closed_port_url, TestApp, TEST_API_KEY, TEST_GROUP_ID};

#[tokio::test]
async fn api_subscribe_forwards_to_provider_and_returns_200() -> Result<()> {
    let app = TestApp::spawn().await?;
    let provider_payload = json!({
        "data": {
            "id": "31897397363737859",
            "email": "ursula@example.com",
            "status": "unconfirmed"
        }
    });

    Mock::given(path("/api/subscribers"))
        .and(method("POST"))
        .and(header("Authorization", format!("Bearer {TEST_API_KEY}").as_str()))
        .and(body_json(json!({
            "email": "ursula@example.com",
            "groups": [TEST_GROUP_ID],
            "status": "unconfirmed"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&provider_payload))
        .expect(1)
        .mount(&app.provider_server)
        .await;

    let res = app
        .post_subscribe(&json!({"email": "ursula@example.com"}))
        .await?;

    assert_eq!(StatusCode::OK, res.status());
    let body: Value = res.json().await?;
    assert_eq!(
        json!({"message": SUBSCRIBED_MSG, "data": provider_payload}),
        body
    );

    Ok(())
}

#[tokio::test]
async fn api_subscribe_relays_provider_rejection_verbatim() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(422).set_body_raw(r#"{"error":"invalid"}"#, "application/json"),
        )
        .expect(1)
        .mount(&app.provider_server)
        .await;

    let res = app
        .post_subscribe(&json!({"email": "ursula@example.com"}))
        .await?;

    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, res.status());
    assert_eq!(r#"{"error":"invalid"}"#, res.text().await?);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_relays_any_provider_status() -> Result<()> {
    let app = TestApp::spawn().await?;
    let cases = [
        (401u16, json!({"message": "Unauthenticated."})),
        (429, json!({"message": "Too Many Attempts."})),
        (503, json!({"message": "Service Unavailable"})),
    ];

    for (status, provider_body) in cases {
        let _guard = Mock::given(any())
            .respond_with(ResponseTemplate::new(status).set_body_json(&provider_body))
            .expect(1)
            .mount_as_scoped(&app.provider_server)
            .await;

        let res = app
            .post_subscribe(&json!({"email": "ursula@example.com"}))
            .await?;

        assert_eq!(status, res.status().as_u16());
        let body: Value = res.json().await?;
        assert_eq!(provider_body, body, "Wrong body for provider status: {status}");
    }

    Ok(())
}

#[tokio::test]
async fn api_subscribe_unreachable_provider_returns_generic_500() -> Result<()> {
    let unreachable = closed_port_url()?;
    let app = TestApp::spawn_with(|config| config.base_url = unreachable).await?;

    let res = app
        .post_subscribe(&json!({"email": "ursula@example.com"}))
        .await?;

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());
    let body: Value = res.json().await?;
    assert_eq!(json!({"message": GENERIC_ERROR_MSG}), body);

    Ok(())
}

#[tokio::test]
async fn api_subscribe_missing_configuration_returns_generic_500() -> Result<()> {
    let cases: [(fn(&mut mailpass::config::ProviderConfig), &str); 2] = [
        (|config| config.api_key = None, "Missing api key"),
        (|config| config.group_id = None, "Missing group id"),
    ];

    for (customize, description) in cases {
        let app = TestApp::spawn_with(customize).await?;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&app.provider_server)
            .await;

        let res = app
            .post_subscribe(&json!({"email": "ursula@example.com"}))
            .await?;

        assert_eq!(
            StatusCode::INTERNAL_SERVER_ERROR,
            res.status(),
            "Wrong status for: {description}"
        );
        let body: Value = res.json().await?;
        assert_eq!(json!({"message": GENERIC_ERROR_MSG}), body);
    }

    Ok(())
}

#[tokio::test]
async fn api_subscribe_forwards_email_without_validating_it() -> Result<()> {
    let app = TestApp::spawn().await?;
    let cases = [
        (
            json!({}),
            json!({"groups": [TEST_GROUP_ID], "status": "unconfirmed"}),
            "Missing email",
        ),
        (
            json!({"email": 42}),
            json!({"email": 42, "groups": [TEST_GROUP_ID], "status": "unconfirmed"}),
            "Numeric email",
        ),
        (
            json!({"email": "not an email"}),
            json!({"email": "not an email", "groups": [TEST_GROUP_ID], "status": "unconfirmed"}),
            "Invalid email",
        ),
    ];

    for (request_body, forwarded_body, description) in cases {
        let provider_error = json!({"message": "The email must be a valid email address."});
        let _guard = Mock::given(body_json(&forwarded_body))
            .respond_with(ResponseTemplate::new(422).set_body_json(&provider_error))
            .expect(1)
            .mount_as_scoped(&app.provider_server)
            .await;

        let res = app.post_subscribe(&request_body).await?;

        assert_eq!(
            StatusCode::UNPROCESSABLE_ENTITY,
            res.status(),
            "Wrong status for: {description}"
        );
        let body: Value = res.json().await?;
        assert_eq!(provider_error, body, "Wrong body for: {description}");
    }

    Ok(())
}

#[tokio::test]
async fn api_subscribe_unreadable_body_returns_generic_500() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.provider_server)
        .await;

    for raw_body in ["not json", "[1, 2, 3]", r#""ursula@example.com""#] {
        let res = app.post_subscribe_raw(raw_body).await?;

        assert_eq!(
            StatusCode::INTERNAL_SERVER_ERROR,
            res.status(),
            "Wrong status for body: {raw_body}"
        );
        let body: Value = res.json().await?;
        assert_eq!(json!({"message": GENERIC_ERROR_MSG}), body);
    }

    Ok(())
}

#[tokio::test]
async fn api_subscribe_response_carries_request_id() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&app.provider_server)
        .await;

    let res = app
        .post_subscribe(&json!({"email": "ursula@example.com"}))
        .await?;

    assert!(res.headers().contains_key(REQUEST_ID_HEADER));

    Ok(())
}

#[tokio::test]
async fn api_subscribe_error_responses_carry_request_id() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(422).set_body_raw(r#"{"error":"invalid"}"#, "application/json"),
        )
        .mount(&app.provider_server)
        .await;

    let res = app
        .post_subscribe(&json!({"email": "ursula@example.com"}))
        .await?;
    assert_eq!(StatusCode::UNPROCESSABLE_ENTITY, res.status());
    assert!(res.headers().contains_key(REQUEST_ID_HEADER));

    let res = app.post_subscribe_raw("not json").await?;
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());
    assert!(res.headers().contains_key(REQUEST_ID_HEADER));

    Ok(())
}

#[tokio::test]
async fn api_subscribe_provider_success_without_body_returns_200() -> Result<()> {
    let app = TestApp::spawn().await?;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.provider_server)
        .await;

    let res = app
        .post_subscribe(&json!({"email": "ursula@example.com"}))
        .await?;

    assert_eq!(StatusCode::OK, res.status());
    let body: Value = res.json().await?;
    assert_eq!(json!({"message": SUBSCRIBED_MSG, "data": null}), body);

    Ok(())
}

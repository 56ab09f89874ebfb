use crate::helpers::{assert_json_response, TestApp};
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn health_check_works() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let response = app.get_health_check().await;

    // Assert
    let body = assert_json_response(response, 200).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "LVR API работает");
}

#[tokio::test]
async fn health_check_is_ok_even_when_telegram_is_down() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(503))
        // Health never talks to Telegram
        .expect(0)
        .mount(&app.telegram_server)
        .await;

    // Act
    let response = app.get_health_check().await;

    // Assert
    let body = assert_json_response(response, 200).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let response = app
        .api_client
        .get(&format!("{}/api/health", &app.address))
        .header("Origin", "https://lvr-school.example")
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert!(response.status().is_success());
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_some());
}

#[tokio::test]
async fn cors_preflight_for_the_form_is_allowed() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let response = app
        .api_client
        .request(
            reqwest::Method::OPTIONS,
            &format!("{}/api/send-form", &app.address),
        )
        .header("Origin", "https://lvr-school.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert!(response.status().is_success());
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_some());
}

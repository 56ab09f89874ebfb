use crate::helpers::{assert_json_response, TestApp, RECIPIENT_CHAT_ID};
use lvr_form_relay::constant::FORM_PAYLOAD_LIMIT;
use wiremock::matchers::any;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn send_form_returns_200_for_valid_form_data() {
    // Arrange
    let app = TestApp::spawn_app().await;
    app.telegram_accepts_messages(1).await;

    // Act
    let body = serde_json::json!({"name": "Ann", "phone": "+79991234567"});
    let response = app.post_send_form(&body).await;

    // Assert
    let body = assert_json_response(response, 200).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Заявка успешно отправлена! Мы свяжемся с вами в ближайшее время."
    );
}

#[tokio::test]
async fn send_form_relays_the_submission_to_the_configured_chat() {
    // Arrange
    let app = TestApp::spawn_app().await;
    app.telegram_accepts_messages(1).await;

    // Act
    let body = serde_json::json!({
        "name": "  Анна Петрова ",
        "phone": "8 (999) 123-45-67",
        "message": "Хочу записаться на английский"
    });
    let response = app.post_send_form(&body).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let sent = app.sent_messages().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["chat_id"], RECIPIENT_CHAT_ID);
    assert_eq!(sent[0]["parse_mode"], "HTML");
    let text = sent[0]["text"].as_str().unwrap();
    assert!(text.contains("<b>Имя:</b> Анна Петрова\n"));
    // The recipient sees the number the way the client typed it
    assert!(text.contains("<b>Телефон:</b> 8 (999) 123-45-67\n"));
    assert!(text.contains("<b>Сообщение:</b> Хочу записаться на английский"));
}

#[tokio::test]
async fn send_form_returns_400_when_data_is_missing() {
    // Arrange
    let app = TestApp::spawn_app().await;
    app.telegram_accepts_messages(0).await;
    let test_cases = vec![
        ("", "empty body"),
        ("not json", "malformed json"),
        ("{}", "empty object"),
        ("[1, 2]", "not an object"),
    ];

    for (invalid_body, error_message) in test_cases {
        // Act
        let response = app.post_send_form_raw(invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Данные не получены");
    }
}

#[tokio::test]
async fn send_form_returns_400_when_fields_are_invalid() {
    // Arrange
    let app = TestApp::spawn_app().await;
    app.telegram_accepts_messages(0).await;
    let test_cases = vec![
        (
            serde_json::json!({"phone": "+79991234567"}),
            "Имя обязательно для заполнения",
            "missing name",
        ),
        (
            serde_json::json!({"name": "   ", "phone": "+79991234567"}),
            "Имя обязательно для заполнения",
            "whitespace name",
        ),
        (
            serde_json::json!({"name": "A", "phone": "+79991234567"}),
            "Имя должно содержать минимум 2 символа",
            "one character name",
        ),
        (
            serde_json::json!({"name": "Ann"}),
            "Телефон обязателен для заполнения",
            "missing phone",
        ),
        (
            serde_json::json!({"name": "Ann", "phone": "123"}),
            "Пожалуйста, введите корректный номер телефона",
            "short phone",
        ),
        (
            serde_json::json!({"name": "Ann", "phone": "+7 (599) 123-45-67"}),
            "Пожалуйста, введите корректный номер телефона",
            "phone without a mobile prefix",
        ),
        (
            serde_json::json!({"name": "A", "phone": "123"}),
            "Имя должно содержать минимум 2 символа",
            "both invalid, name wins",
        ),
    ];

    for (invalid_body, expected_error, description) in test_cases {
        // Act
        let response = app.post_send_form(&invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request for {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false, "{}", description);
        assert_eq!(body["error"], expected_error, "{}", description);
    }
}

#[tokio::test]
async fn send_form_returns_500_when_telegram_fails() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        // No retry
        .expect(1)
        .mount(&app.telegram_server)
        .await;

    // Act
    let body = serde_json::json!({"name": "Ann", "phone": "+79991234567"});
    let response = app.post_send_form(&body).await;

    // Assert
    let text = {
        assert_eq!(500, response.status().as_u16());
        response.text().await.unwrap()
    };
    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Ошибка отправки заявки. Попробуйте позже.");
    assert!(!text.contains("chat not found"));
}

#[tokio::test]
async fn send_form_returns_500_when_telegram_is_unreachable() {
    // Arrange
    let app = TestApp::spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(30)))
        .mount(&app.telegram_server)
        .await;

    // Act
    let body = serde_json::json!({"name": "Ann", "phone": "+79991234567", "message": ""});
    let response = app.post_send_form(&body).await;

    // Assert
    let body = assert_json_response(response, 500).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Ошибка отправки заявки. Попробуйте позже.");
}

#[tokio::test]
async fn send_form_returns_500_when_the_payload_cannot_be_read() {
    // Arrange
    let app = TestApp::spawn_app().await;
    app.telegram_accepts_messages(0).await;
    let oversized_message = "a".repeat(FORM_PAYLOAD_LIMIT + 1);

    // Act
    let body = serde_json::json!({
        "name": "Ann",
        "phone": "+79991234567",
        "message": oversized_message
    });
    let response = app.post_send_form(&body).await;

    // Assert
    let text = {
        assert_eq!(500, response.status().as_u16());
        response.text().await.unwrap()
    };
    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Внутренняя ошибка сервера");
    assert!(!text.to_lowercase().contains("payload"));
    assert!(!text.contains("overflow"));
}

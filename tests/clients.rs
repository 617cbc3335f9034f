use std::time::Duration;

use homework_status_bot::{
    BotError, HomeworkApi, HttpSettings, Notifier, PracticumClient, TelegramBot,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn practicum(endpoint: impl Into<String>) -> PracticumClient {
    PracticumClient::new(endpoint, "secret", &HttpSettings::default()).expect("client builds")
}

fn telegram(server: &MockServer) -> TelegramBot {
    TelegramBot::new(&server.uri(), "token", "42", &HttpSettings::default()).expect("client builds")
}

fn impatient() -> HttpSettings {
    HttpSettings {
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_millis(200),
    }
}

#[tokio::test]
async fn practicum_client_sends_token_and_cursor() {
    let server = MockServer::start().await;
    let payload = json!({"homeworks": [], "current_date": 1234});
    Mock::given(method("GET"))
        .and(path("/homework_statuses/"))
        .and(header("Authorization", "OAuth secret"))
        .and(query_param("from_date", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .expect(1)
        .mount(&server)
        .await;

    let client = practicum(format!("{}/homework_statuses/", server.uri()));
    let body = client.homework_statuses(1000).await.expect("fetch ok");

    assert_eq!(body, payload);
}

#[tokio::test]
async fn practicum_client_reports_http_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such endpoint"))
        .mount(&server)
        .await;

    let client = practicum(server.uri());
    let err = client.homework_statuses(0).await.unwrap_err();

    assert_eq!(
        err,
        BotError::FetchFailed {
            status: 404,
            reason: "Not Found".into(),
            body: "no such endpoint".into(),
        }
    );
}

#[tokio::test]
async fn practicum_client_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = practicum(server.uri());
    let err = client.homework_statuses(0).await.unwrap_err();

    assert!(matches!(err, BotError::MalformedResponse(_)));
}

#[tokio::test]
async fn practicum_client_maps_unreachable_host_to_transport() {
    let client = practicum("http://127.0.0.1:9/");
    let err = client.homework_statuses(0).await.unwrap_err();

    assert!(matches!(err, BotError::Transport(_)));
}

#[tokio::test]
async fn telegram_bot_posts_message_to_chat() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bottoken/sendMessage"))
        .and(body_json(json!({"chat_id": "42", "text": "hello"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true, "result": {"message_id": 1, "text": "hello"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let bot = telegram(&server);
    bot.send_message("hello").await.expect("send ok");
}

#[tokio::test]
async fn telegram_bot_surfaces_api_refusal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": false, "description": "Bad Request: chat not found"})),
        )
        .mount(&server)
        .await;

    let bot = telegram(&server);
    let err = bot.send_message("hello").await.unwrap_err();

    assert_eq!(err, BotError::SendFailed("Bad Request: chat not found".into()));
}

#[tokio::test]
async fn telegram_bot_surfaces_http_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let bot = telegram(&server);
    let err = bot.send_message("hello").await.unwrap_err();

    assert!(matches!(err, BotError::SendFailed(ref msg) if msg.contains("401")));
}

#[tokio::test]
async fn dry_run_never_calls_telegram() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let bot = telegram(&server).with_sending(false);
    bot.send_message("hello").await.expect("dry run ok");
}

#[tokio::test]
async fn practicum_client_gives_up_on_stalled_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"homeworks": []}))
                .set_delay(Duration::from_secs(3600)),
        )
        .mount(&server)
        .await;

    let client = PracticumClient::new(server.uri(), "secret", &impatient()).expect("client builds");
    let result = tokio::time::timeout(Duration::from_secs(10), client.homework_statuses(0))
        .await
        .expect("request should time out on its own");

    assert!(matches!(result, Err(BotError::Transport(_))));
}

#[tokio::test]
async fn telegram_bot_gives_up_on_stalled_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true}))
                .set_delay(Duration::from_secs(3600)),
        )
        .mount(&server)
        .await;

    let bot = TelegramBot::new(&server.uri(), "token", "42", &impatient()).expect("client builds");
    let result = tokio::time::timeout(Duration::from_secs(10), bot.send_message("hello"))
        .await
        .expect("send should time out on its own");

    assert!(matches!(result, Err(BotError::SendFailed(_))));
}

use mockito::{Matcher, Server};
use serde_json::json;
use tokio::net::TcpListener;
use tokio_test::{assert_err, assert_ok};
use menu_designer::{
  ChatCompletionClient, CompletionClient, CompletionConfig, Error
};

const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

fn client_for(api_base: String) -> ChatCompletionClient
{   let mut config = CompletionConfig::with_api_key("sk-test");
    config.api_base = api_base;
    config.headers.insert(
      "HTTP-Referer".to_string(),
      "https://menu.example".to_string()
    );
    ChatCompletionClient::new(config).expect("valid config")
}

#[tokio::test]
async fn test_complete_returns_content_verbatim()
{   let mut server = Server::new_async().await;
    let mock = server.mock("POST", COMPLETIONS_PATH)
      .match_header("authorization", "Bearer sk-test")
      .match_header("x-title", "menu-designer")
      .match_header("http-referer", "https://menu.example")
      .match_header("content-type", "application/json")
      .match_body(Matcher::PartialJson(json!({
        "model": "openai/gpt-3.5-turbo",
        "stream": false,
        "messages": [
          { "role": "user", "content": "Name a Chinese restaurant" }
        ]
      })))
      .with_status(200)
      .with_header("content-type", "application/json")
      .with_body(r#"{"id":"gen-1","model":"openai/gpt-3.5-turbo","choices":[{"index":0,"message":{"role":"assistant","content":"  The Golden Lotus\n"},"finish_reason":"stop"}],"usage":{"prompt_tokens":20,"completion_tokens":5,"total_tokens":25}}"#)
      .create_async()
      .await;
    let client = client_for(format!("{}/api/v1", server.url()));

    let text = assert_ok!(client.complete("Name a Chinese restaurant").await);
    assert_eq!(text, "  The Golden Lotus\n");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_body_carries_temperature()
{   let mut server = Server::new_async().await;
    let mock = server.mock("POST", COMPLETIONS_PATH)
      .match_body(Matcher::Regex(r#""temperature":0\.6"#.to_string()))
      .with_status(200)
      .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"ok"}}]}"#)
      .create_async()
      .await;
    let client = client_for(format!("{}/api/v1", server.url()));

    assert_eq!(client.complete("hi").await, Ok("ok".to_string()));
    mock.assert_async().await;

    let request = serde_json::to_value(menu_designer::request::ChatRequest
    {   model: "m".to_string()
      , messages: vec![]
      , temperature: 0.6
      , max_tokens: None
      , stream: false
    }).expect("serializable");
    assert!(request.get("max_tokens").is_none());
}

#[tokio::test]
async fn test_non_success_status_is_api_error()
{   let mut server = Server::new_async().await;
    let _mock = server.mock("POST", COMPLETIONS_PATH)
      .with_status(401)
      .with_body(r#"{"error":{"message":"No auth credentials found","code":401}}"#)
      .create_async()
      .await;
    let client = client_for(format!("{}/api/v1", server.url()));

    let err = assert_err!(client.complete("hello").await);
    assert!(err.is_upstream());
    match err
    {   Error::ApiError { status, body } => {
          assert_eq!(status, 401);
          assert!(body.contains("No auth credentials"));
        }
      , other => panic!("expected ApiError, got {:?}", other)
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error()
{   let mut server = Server::new_async().await;
    let _mock = server.mock("POST", COMPLETIONS_PATH)
      .with_status(200)
      .with_body("not json")
      .create_async()
      .await;
    let client = client_for(format!("{}/api/v1", server.url()));

    let err = assert_err!(client.complete("hello").await);
    assert!(matches!(err, Error::ParseError(_)));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn test_empty_choices_is_an_error()
{   let mut server = Server::new_async().await;
    let _mock = server.mock("POST", COMPLETIONS_PATH)
      .with_status(200)
      .with_body(r#"{"choices":[]}"#)
      .create_async()
      .await;
    let client = client_for(format!("{}/api/v1", server.url()));

    assert_eq!(
      client.complete("hello").await,
      Err(Error::NoChoicesInResponse)
    );
}

#[tokio::test]
async fn test_silent_endpoint_times_out()
{   // Accepts connections at the socket level and never answers.
    let listener = TcpListener::bind("127.0.0.1:0").await
      .expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let mut config = CompletionConfig::with_api_key("sk-test");
    config.api_base = format!("http://{}/v1", addr);
    config.timeout_secs = 1;
    let client = assert_ok!(ChatCompletionClient::new(config));

    let result = client.complete("hello").await;
    assert_eq!(result, Err(Error::Timeout));
    assert!(result.unwrap_err().is_upstream());
    drop(listener);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_http_error()
{   let listener = TcpListener::bind("127.0.0.1:0").await
      .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let client = client_for(format!("http://{}/v1", addr));

    let err = assert_err!(client.complete("hello").await);
    assert!(matches!(err, Error::HttpError(_)));
}

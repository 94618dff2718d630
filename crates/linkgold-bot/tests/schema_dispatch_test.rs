//! Updates driven through the full handler tree against a mocked Telegram Bot API
//!
//! Run with: cargo test -p linkgold-bot --test schema_dispatch_test

use std::ops::ControlFlow;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{Me, Update};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use linkgold_bot::{schema, BotLinks, HandlerDeps, HandlerError};

const SITE_URL: &str = "https://linkgold.example/app/";

type Flow = ControlFlow<Result<(), HandlerError>, dptree::di::DependencyMap>;

struct SchemaHarness {
    server: MockServer,
    bot: Bot,
    me: Me,
    handler: UpdateHandler<HandlerError>,
}

impl SchemaHarness {
    async fn new() -> Self {
        let server = MockServer::start().await;
        let bot = Bot::new("test_token_12345:ABCDEF").set_api_url(server.uri().parse().unwrap());

        let me: Me = serde_json::from_value(json!({
            "id": 987654321,
            "is_bot": true,
            "first_name": "LinkGold",
            "username": "linkgold_bot",
            "can_join_groups": true,
            "can_read_all_group_messages": false,
            "supports_inline_queries": false,
            "has_main_web_app": true
        }))
        .unwrap();

        let links = BotLinks::new(SITE_URL, "https://t.me/LinkGoldChannel").unwrap();

        Self {
            server,
            bot,
            me,
            handler: schema(HandlerDeps::new(links)),
        }
    }

    async fn dispatch(&self, update: Value) -> Flow {
        // teloxide's Update deserializer needs a string source; from_value yields UpdateKind::Error
        let update: Update = serde_json::from_str(&update.to_string()).unwrap();
        self.handler
            .dispatch(dptree::deps![self.bot.clone(), self.me.clone(), update])
            .await
    }

    async fn requests_to(&self, api_method: &str) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|request| request.url.path().ends_with(api_method))
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}

fn message_update(update_id: i32, message: Value) -> Value {
    let mut message = message;
    message["message_id"] = json!(update_id);
    message["date"] = json!(1735992000);
    message["chat"] = json!({"id": 123456789, "type": "private", "first_name": "Test"});
    message["from"] = json!({"id": 123456789, "is_bot": false, "first_name": "Test"});
    json!({"update_id": update_id, "message": message})
}

fn text_update(update_id: i32, text: &str) -> Value {
    message_update(update_id, json!({"text": text}))
}

fn handled_ok(flow: &Flow) -> bool {
    matches!(flow, ControlFlow::Break(Ok(())))
}

#[tokio::test]
async fn test_commands_are_routed_to_replies() {
    let harness = SchemaHarness::new().await;
    Mock::given(method("POST"))
        .and(path_regex("/bot[^/]+/SendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": {
                "message_id": 42,
                "from": {"id": 987654321, "is_bot": true, "first_name": "LinkGold", "username": "linkgold_bot"},
                "chat": {"id": 123456789, "type": "private", "first_name": "Test"},
                "date": 1735992000,
                "text": "reply"
            }
        })))
        .expect(3)
        .mount(&harness.server)
        .await;

    for (id, text) in [(1, "/start"), (2, "/help"), (3, "/site@linkgold_bot")] {
        let flow = harness.dispatch(text_update(id, text)).await;
        assert!(handled_ok(&flow), "{text} was not handled");
    }

    let sends = harness.requests_to("SendMessage").await;
    assert_eq!(sends.len(), 3);
    for body in sends {
        assert!(!body["text"].as_str().unwrap().trim().is_empty());
        assert!(body["reply_markup"].to_string().contains(SITE_URL));
    }
}

#[tokio::test]
async fn test_failed_send_is_swallowed() {
    let harness = SchemaHarness::new().await;
    Mock::given(method("POST"))
        .and(path_regex("/bot[^/]+/SendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "error_code": 403,
            "description": "Forbidden: bot was blocked by the user"
        })))
        .expect(3)
        .mount(&harness.server)
        .await;

    for (id, text) in [(1, "/start"), (2, "/help"), (3, "/site@linkgold_bot")] {
        let flow = harness.dispatch(text_update(id, text)).await;
        assert!(handled_ok(&flow), "{text} failure escaped the handler");
    }
}

#[tokio::test]
async fn test_callback_query_is_answered_through_schema() {
    let harness = SchemaHarness::new().await;
    Mock::given(method("POST"))
        .and(path_regex("/bot[^/]+/AnswerCallbackQuery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": true})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let flow = harness
        .dispatch(json!({
            "update_id": 10,
            "callback_query": {
                "id": "cb-7",
                "from": {"id": 555, "is_bot": false, "first_name": "Test"},
                "chat_instance": "instance-1",
                "data": "whatever"
            }
        }))
        .await;

    assert!(handled_ok(&flow));
    let answers = harness.requests_to("AnswerCallbackQuery").await;
    assert_eq!(answers[0]["callback_query_id"], json!("cb-7"));
}

#[tokio::test]
async fn test_web_app_data_is_logged_without_reply() {
    let harness = SchemaHarness::new().await;

    let flow = harness
        .dispatch(message_update(
            20,
            json!({"web_app_data": {"data": "{\"action\":\"open\"}", "button_text": "Open"}}),
        ))
        .await;

    assert!(handled_ok(&flow));
    assert!(harness.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_plain_text_and_unknown_commands_are_not_handled() {
    let harness = SchemaHarness::new().await;

    for (id, text) in [(30, "hello"), (31, "/unknown")] {
        let flow = harness.dispatch(text_update(id, text)).await;
        assert!(matches!(flow, ControlFlow::Continue(_)), "{text} was handled");
    }
    assert!(harness.server.received_requests().await.unwrap().is_empty());
}

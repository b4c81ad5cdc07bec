use application::chat_service::ChatService;
use infrastructure::config::Config;
use std::io::Write;
use tests::turn;

#[tokio::test(start_paused = true)]
async fn sessions_answer_from_a_configured_intent_file() {
    let table = serde_json::json!({
        "categories": [
            { "label": "refill", "keywords": ["refill"], "response": "Your refill is ready for pickup." },
            { "label": "doctor", "keywords": ["doctor"], "response": "Dr. Chen is available tomorrow." }
        ],
        "fallback": "Ask me about refills or doctors."
    });
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(table.to_string().as_bytes()).unwrap();

    let config = Config {
        intents_path: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    let service = ChatService::new(config).unwrap();
    let session = service.open_session();

    turn(&session, "Can my doctor approve a REFILL?").await;
    turn(&session, "What's in my health record?").await;

    let messages = session.messages();
    assert_eq!(messages[2].text(), "Your refill is ready for pickup.");
    assert_eq!(messages[4].text(), "Ask me about refills or doctors.");
}

#[test]
fn broken_intent_file_fails_service_start() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[1, 2, 3]").unwrap();

    let config = Config {
        intents_path: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    assert!(ChatService::new(config).is_err());
}

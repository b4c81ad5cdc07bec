use domain::error::ChatError;
use domain::intent::{
    APPOINTMENT_RESPONSE, DOCTOR_RESPONSE, FALLBACK_RESPONSE, HEALTH_SUMMARY_RESPONSE,
    MEDICATION_RESPONSE,
};
use domain::message::Sender;
use std::time::Duration;
use tests::{contents, default_session, session_with_delay, turn};

#[tokio::test(start_paused = true)]
async fn health_record_questions_get_the_summary() {
    for input in [
        "What's in my health record?",
        "show my HEALTH SUMMARY and book an appointment with a doctor",
    ] {
        let session = default_session();
        turn(&session, input).await;
        assert_eq!(session.messages()[2].text(), HEALTH_SUMMARY_RESPONSE);
    }
}

#[tokio::test(start_paused = true)]
async fn appointment_request_gets_scheduling_reply() {
    let session = default_session();
    turn(&session, "I need an appointment").await;
    assert_eq!(session.messages()[2].text(), APPOINTMENT_RESPONSE);
}

#[tokio::test(start_paused = true)]
async fn blank_submissions_change_nothing() {
    let session = default_session();
    for blank in ["", "   "] {
        session.set_input(blank);
        assert_eq!(session.submit(), Err(ChatError::EmptyInput));
        assert_eq!(session.len(), 1);
        assert!(!session.is_busy());
    }
}

#[tokio::test(start_paused = true)]
async fn sequential_turns_alternate() {
    let session = default_session();
    let inputs = [
        "Find a doctor near me",
        "Remind me about my medications",
        "hello",
        "I need an appointment",
    ];
    for input in inputs {
        turn(&session, input).await;
    }

    let messages = session.messages();
    assert_eq!(messages.len(), 1 + 2 * inputs.len());
    assert_eq!(messages[0].sender(), Sender::Assistant);
    for (i, message) in messages.iter().enumerate().skip(1) {
        let expected = if i % 2 == 1 { Sender::User } else { Sender::Assistant };
        assert_eq!(message.sender(), expected, "index {i}");
    }

    let replies: Vec<&str> = messages.iter().skip(2).step_by(2).map(|m| m.text()).collect();
    assert_eq!(
        replies,
        vec![
            DOCTOR_RESPONSE,
            MEDICATION_RESPONSE,
            FALLBACK_RESPONSE,
            APPOINTMENT_RESPONSE
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn quick_reply_matches_typed_input() {
    let typed = default_session();
    turn(&typed, "Find a doctor near me").await;

    let quick = default_session();
    let suggestion = quick
        .quick_replies()
        .iter()
        .find(|s| s.as_str() == "Find a doctor near me")
        .cloned()
        .expect("built-in suggestion");
    quick.select_quick_reply(&suggestion).unwrap();
    quick.wait_idle().await;

    assert_eq!(contents(&typed.messages()), contents(&quick.messages()));
}

#[tokio::test(start_paused = true)]
async fn busy_session_refuses_until_reply_lands() {
    let session = default_session();
    session.send("Find a doctor near me").unwrap();

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(session.send("I need an appointment"), Err(ChatError::Busy));
    assert_eq!(
        session.select_quick_reply("I need an appointment"),
        Err(ChatError::Busy)
    );
    assert_eq!(session.len(), 2);

    session.wait_idle().await;
    assert_eq!(session.len(), 3);
    assert_eq!(session.messages()[2].text(), DOCTOR_RESPONSE);
    assert!(session.submit().is_ok());
}

#[tokio::test(start_paused = true)]
async fn dropped_session_never_receives_reply() {
    let session = session_with_delay(Duration::from_millis(200));
    let mut events = session.subscribe();
    session.send("Remind me about my medications").unwrap();
    assert_eq!(events.recv().await.unwrap().sender(), Sender::User);

    drop(session);
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(events.try_recv().is_err());
}

use super::*;

#[test]
fn test_save_to_notion_deserialize() {
    let json = serde_json::json!({
        "type": "SAVE_TO_NOTION",
        "payload": {
            "answerText": "  The answer  ",
            "questionText": "The question?",
            "pageUrl": "https://chat.example.com/c/42",
            "mode": "full"
        }
    });
    let msg: ExtensionMessage = serde_json::from_value(json).unwrap();
    assert_eq!(msg.kind(), "SAVE_TO_NOTION");

    let capture = msg.into_capture().unwrap();
    assert_eq!(capture.answer_text, "The answer");
    assert_eq!(capture.question_text, "The question?");
    assert_eq!(capture.source_url.as_deref(), Some("https://chat.example.com/c/42"));
    assert_eq!(capture.mode, CaptureMode::Full);
}

#[test]
fn test_save_to_notion_highlight_mode() {
    let json = serde_json::json!({
        "type": "SAVE_TO_NOTION",
        "payload": { "answerText": "selected", "mode": "highlight" }
    });
    let msg: ExtensionMessage = serde_json::from_value(json).unwrap();
    let capture = msg.into_capture().unwrap();
    assert_eq!(capture.mode, CaptureMode::Highlight);
    assert!(capture.source_url.is_none());
}

#[test]
fn test_save_to_notion_missing_answer_is_empty_input() {
    let json = serde_json::json!({
        "type": "SAVE_TO_NOTION",
        "payload": { "questionText": "Q?" }
    });
    let msg: ExtensionMessage = serde_json::from_value(json).unwrap();
    assert!(matches!(msg.into_capture(), Err(CaptureError::EmptyInput)));
}

#[test]
fn test_save_selection_is_highlight_without_question() {
    let json = serde_json::json!({
        "type": "SAVE_SELECTION",
        "selectionText": "some selected words",
        "pageUrl": "https://chat.example.com"
    });
    let msg: ExtensionMessage = serde_json::from_value(json).unwrap();
    let capture = msg.into_capture().unwrap();
    assert_eq!(capture.mode, CaptureMode::Highlight);
    assert!(capture.question_text.is_empty());
    assert_eq!(capture.answer_text, "some selected words");
}

#[test]
fn test_latest_answer_is_full() {
    let msg = ExtensionMessage::LatestAnswer {
        answer_text: "answer".to_string(),
        question_text: "  question  ".to_string(),
        page_url: Some("   ".to_string()),
    };
    let capture = msg.into_capture().unwrap();
    assert_eq!(capture.mode, CaptureMode::Full);
    assert_eq!(capture.question_text, "question");
    assert!(capture.source_url.is_none());
}

#[test]
fn test_blank_selection_rejected() {
    let msg = ExtensionMessage::SaveSelection {
        selection_text: "   ".to_string(),
        page_url: None,
    };
    assert!(matches!(msg.into_capture(), Err(CaptureError::EmptyInput)));
}

#[test]
fn test_result_message_is_not_a_capture() {
    let msg = ExtensionMessage::from(SaveResult::success());
    assert!(matches!(
        msg.into_capture(),
        Err(CaptureError::InvalidMessage(_))
    ));
}

#[test]
fn test_unknown_kind_rejected() {
    let json = serde_json::json!({ "type": "REQUEST_LATEST" });
    assert!(serde_json::from_value::<ExtensionMessage>(json).is_err());
}

#[test]
fn test_save_result_wire_shape() {
    let ok = serde_json::to_value(ExtensionMessage::from(SaveResult::success())).unwrap();
    assert_eq!(ok, serde_json::json!({ "type": "NOTION_SAVE_RESULT", "ok": true }));

    let failed =
        serde_json::to_value(ExtensionMessage::from(SaveResult::failure("401 Unauthorized")))
            .unwrap();
    assert_eq!(
        failed,
        serde_json::json!({
            "type": "NOTION_SAVE_RESULT",
            "ok": false,
            "error": "401 Unauthorized"
        })
    );
}

#[test]
fn test_save_result_from_result() {
    assert!(SaveResult::from(Ok(())).ok);

    let failed = SaveResult::from(Err(CaptureError::EmptyInput));
    assert!(!failed.ok);
    assert_eq!(failed.error.as_deref(), Some("No answer text found"));
}

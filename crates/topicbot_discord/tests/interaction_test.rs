//! Tests for the `/topic` command, the suggestion modal and their payloads.

use serde_json::json;
use serenity::model::application::{ActionRow, CommandDataOption};
use topicbot_core::{ActionButton, Topic};
use topicbot_discord::interaction::{
    MODAL_ID, TOPIC_INPUT, command_topic, deferred_submission, modal_topic, suggestion_modal,
    topic_command,
};

#[test]
fn test_topic_command_has_optional_topic_option() {
    let json = serde_json::to_value(topic_command()).expect("serializable");

    assert_eq!(json["name"], "topic");
    assert_eq!(json["description"], "Suggest a new topic");
    assert_eq!(json["options"][0]["name"], "topic");
    assert_eq!(json["options"][0]["type"], 3);
    assert_eq!(json["options"][0]["required"], false);
}

#[test]
fn test_suggestion_modal_has_topic_input() {
    let json = serde_json::to_value(suggestion_modal()).expect("serializable");

    assert_eq!(json["custom_id"], MODAL_ID);
    assert_eq!(json["title"], "Topic suggestion");
    let input = &json["components"][0]["components"][0];
    assert_eq!(input["custom_id"], TOPIC_INPUT);
    assert_eq!(input["label"], "Your topic suggestion");
}

#[test]
fn test_command_topic_reads_string_option() {
    let options: Vec<CommandDataOption> = serde_json::from_value(json!([
        {"name": "topic", "type": 3, "value": "Best board games"}
    ]))
    .expect("options");

    assert_eq!(command_topic(&options), Some("Best board games"));
    assert_eq!(command_topic(&[]), None);
}

#[test]
fn test_modal_topic_reads_input_value() {
    let rows: Vec<ActionRow> = serde_json::from_value(json!([
        {"type": 1, "components": [
            {"type": 4, "custom_id": "topic", "value": "  Best board games "}
        ]}
    ]))
    .expect("rows");

    assert_eq!(modal_topic(&rows).as_deref(), Some("  Best board games "));
    assert_eq!(modal_topic(&[]), None);
}

#[test]
fn test_button_ids_round_trip() {
    for button in [ActionButton::Approve, ActionButton::Deny, ActionButton::Retry] {
        assert_eq!(ActionButton::from_custom_id(button.custom_id()), Some(button));
    }
    assert_eq!(ActionButton::from_custom_id(MODAL_ID), None);
}

#[test]
fn test_topic_inputs_cap_length() {
    let command = serde_json::to_value(topic_command()).expect("serializable");
    assert_eq!(command["options"][0]["max_length"], Topic::MAX_CHARS);

    let modal = serde_json::to_value(suggestion_modal()).expect("serializable");
    assert_eq!(
        modal["components"][0]["components"][0]["max_length"],
        Topic::MAX_CHARS
    );
}

#[test]
fn test_submission_is_deferred_privately() {
    let json = serde_json::to_value(deferred_submission()).expect("serializable");

    assert_eq!(json["type"], 5);
    assert!(!json["data"]["flags"].is_null());
}

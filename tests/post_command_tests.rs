mod common;

use common::{RecordingOutbound, Sent};
use kira_studio_bot::bot::commands::post::{publish_post, PostOutcome};
use teloxide::types::ChatId;

const CHANNEL: ChatId = ChatId(-1001234567890);

#[tokio::test]
async fn test_post_published_to_channel() {
    let outbound = RecordingOutbound::default();

    let outcome = publish_post(&outbound, true, Some(CHANNEL), "  <b>New offer</b> this week  ").await;

    assert_eq!(outcome, PostOutcome::Published(CHANNEL));
    assert_eq!(
        outbound.sent(),
        vec![Sent::Html {
            chat: CHANNEL,
            html: "<b>New offer</b> this week".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_post_rejected_for_non_admin() {
    let outbound = RecordingOutbound::default();

    let outcome = publish_post(&outbound, false, Some(CHANNEL), "spam").await;

    assert_eq!(outcome, PostOutcome::Unauthorized);
    assert!(outbound.sent().is_empty());
}

#[tokio::test]
async fn test_post_without_text() {
    let outbound = RecordingOutbound::default();

    assert_eq!(
        publish_post(&outbound, true, Some(CHANNEL), "").await,
        PostOutcome::MissingText
    );
    assert_eq!(
        publish_post(&outbound, true, Some(CHANNEL), "   ").await,
        PostOutcome::MissingText
    );
    assert!(outbound.sent().is_empty());
}

#[tokio::test]
async fn test_post_without_channel() {
    let outbound = RecordingOutbound::default();

    let outcome = publish_post(&outbound, true, None, "hello").await;

    assert_eq!(outcome, PostOutcome::ChannelNotConfigured);
    assert!(outbound.sent().is_empty());
}

#[tokio::test]
async fn test_post_delivery_failure() {
    let outbound = RecordingOutbound::default();
    outbound.fail_for(CHANNEL);

    let outcome = publish_post(&outbound, true, Some(CHANNEL), "hello").await;

    match outcome {
        PostOutcome::Failed(reason) => assert!(reason.contains("Forbidden")),
        other => panic!("expected failure, got {other:?}"),
    }
}

//! Domain events delivered by the widget host.
//!
//! One variant per platform event kind plus the synthetic [`Tick`]
//! the host emits on its own cadence. Events arrive already validated
//! and typed; decoding the wire form is `serde_json`'s job via the
//! derives here, and malformed payloads are rejected before reduction.
//!
//! [`Tick`]: DomainEvent::Tick

use serde::{Deserialize, Serialize};

/// A node of rich chat content.
///
/// Messages arrive as node lists so emotes survive alongside plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChatNode {
    Text { text: String },
    Emote { name: String, url: String },
}

/// Flatten rich chat content to plain text.
///
/// Emotes render as their name so prefix checks and text-only surfaces
/// see something sensible.
pub fn chat_to_text(nodes: &[ChatNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            ChatNode::Text { text } => out.push_str(text),
            ChatNode::Emote { name, .. } => out.push_str(name),
        }
    }
    out
}

/// The event union a widget reduces over.
///
/// Identifiers are unique within the stream and stable across
/// delete/clear correlation: an `event-deleted` references an id
/// previously seen on a content-bearing event. The host delivers events
/// in non-decreasing timestamp order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DomainEvent {
    #[serde(rename_all = "camelCase")]
    ChatSent {
        id: String,
        timestamp: u64,
        author_id: String,
        author_display_name: String,
        message: Vec<ChatNode>,
    },
    #[serde(rename_all = "camelCase")]
    EventDeleted {
        id: String,
        timestamp: u64,
        deleted_event_id: String,
    },
    #[serde(rename_all = "camelCase")]
    MessagesCleared {
        id: String,
        timestamp: u64,
        author_id: String,
    },
    #[serde(rename_all = "camelCase")]
    ChannelFollowed {
        id: String,
        timestamp: u64,
        follower_display_name: String,
        followed_at: u64,
    },
    #[serde(rename_all = "camelCase")]
    SubscriptionStarted {
        id: String,
        timestamp: u64,
        subscriber_display_name: String,
        tier: String,
    },
    #[serde(rename_all = "camelCase")]
    SubscriptionRenewed {
        id: String,
        timestamp: u64,
        subscriber_display_name: String,
        months_subscribed: u32,
        tier: String,
    },
    #[serde(rename_all = "camelCase")]
    SubscriptionGifted {
        id: String,
        timestamp: u64,
        gifter_display_name: Option<String>,
        gift_count: u32,
        tier: String,
        is_anonymous: bool,
    },
    #[serde(rename_all = "camelCase")]
    TipSent {
        id: String,
        timestamp: u64,
        tipper_display_name: String,
        amount_cents: i64,
        currency: String,
    },
    /// Synthetic periodic event driving time-based recomputation.
    /// Carries no id or payload; the tick's clock is `ctx.now`.
    Tick,
}

impl DomainEvent {
    /// Stable event identifier. `Tick` is synthetic and has none.
    pub fn id(&self) -> Option<&str> {
        match self {
            DomainEvent::ChatSent { id, .. }
            | DomainEvent::EventDeleted { id, .. }
            | DomainEvent::MessagesCleared { id, .. }
            | DomainEvent::ChannelFollowed { id, .. }
            | DomainEvent::SubscriptionStarted { id, .. }
            | DomainEvent::SubscriptionRenewed { id, .. }
            | DomainEvent::SubscriptionGifted { id, .. }
            | DomainEvent::TipSent { id, .. } => Some(id),
            DomainEvent::Tick => None,
        }
    }

    /// Event timestamp. `Tick` carries none; use the context clock.
    pub fn timestamp(&self) -> Option<u64> {
        match self {
            DomainEvent::ChatSent { timestamp, .. }
            | DomainEvent::EventDeleted { timestamp, .. }
            | DomainEvent::MessagesCleared { timestamp, .. }
            | DomainEvent::ChannelFollowed { timestamp, .. }
            | DomainEvent::SubscriptionStarted { timestamp, .. }
            | DomainEvent::SubscriptionRenewed { timestamp, .. }
            | DomainEvent::SubscriptionGifted { timestamp, .. }
            | DomainEvent::TipSent { timestamp, .. } => Some(*timestamp),
            DomainEvent::Tick => None,
        }
    }

    /// Wire name of the event kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainEvent::ChatSent { .. } => "chat-sent",
            DomainEvent::EventDeleted { .. } => "event-deleted",
            DomainEvent::MessagesCleared { .. } => "messages-cleared",
            DomainEvent::ChannelFollowed { .. } => "channel-followed",
            DomainEvent::SubscriptionStarted { .. } => "subscription-started",
            DomainEvent::SubscriptionRenewed { .. } => "subscription-renewed",
            DomainEvent::SubscriptionGifted { .. } => "subscription-gifted",
            DomainEvent::TipSent { .. } => "tip-sent",
            DomainEvent::Tick => "tick",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_chat_sent() {
        let json = r#"{
            "type": "chat-sent",
            "id": "ev-1",
            "timestamp": 1000,
            "authorId": "42",
            "authorDisplayName": "Alice",
            "message": [{"kind": "text", "text": "hello"}]
        }"#;
        let event: DomainEvent = serde_json::from_str(json).unwrap();
        match &event {
            DomainEvent::ChatSent {
                id,
                author_id,
                message,
                ..
            } => {
                assert_eq!(id, "ev-1");
                assert_eq!(author_id, "42");
                assert_eq!(chat_to_text(message), "hello");
            }
            other => panic!("decoded wrong variant: {other:?}"),
        }
        assert_eq!(event.id(), Some("ev-1"));
        assert_eq!(event.timestamp(), Some(1000));
    }

    #[test]
    fn decodes_anonymous_gift() {
        let json = r#"{
            "type": "subscription-gifted",
            "id": "ev-2",
            "timestamp": 2000,
            "gifterDisplayName": "Real Name",
            "giftCount": 5,
            "tier": "1000",
            "isAnonymous": true
        }"#;
        let event: DomainEvent = serde_json::from_str(json).unwrap();
        assert!(matches!(
            event,
            DomainEvent::SubscriptionGifted {
                is_anonymous: true,
                gift_count: 5,
                ..
            }
        ));
    }

    #[test]
    fn decodes_tick_without_payload() {
        let event: DomainEvent = serde_json::from_str(r#"{"type": "tick"}"#).unwrap();
        assert_eq!(event, DomainEvent::Tick);
        assert_eq!(event.id(), None);
        assert_eq!(event.timestamp(), None);
        assert_eq!(event.kind(), "tick");
    }

    #[test]
    fn rejects_unknown_kind() {
        let result: Result<DomainEvent, _> =
            serde_json::from_str(r#"{"type": "channel-raided", "id": "x", "timestamp": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn chat_to_text_flattens_emotes_by_name() {
        let nodes = vec![
            ChatNode::Text {
                text: "gg ".to_string(),
            },
            ChatNode::Emote {
                name: "Kappa".to_string(),
                url: "https://cdn.example/kappa.png".to_string(),
            },
        ];
        assert_eq!(chat_to_text(&nodes), "gg Kappa");
    }
}

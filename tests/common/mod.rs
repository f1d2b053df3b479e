//! Shared test utilities: event factories.

#![allow(dead_code)]

use glint::event::{ChatNode, DomainEvent};

/// Install a subscriber once so `RUST_LOG`-style filtering works when
/// debugging a test run.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub fn text_nodes(text: &str) -> Vec<ChatNode> {
    vec![ChatNode::Text {
        text: text.to_string(),
    }]
}

pub fn chat_sent(id: &str, author_id: &str, name: &str, text: &str, timestamp: u64) -> DomainEvent {
    DomainEvent::ChatSent {
        id: id.to_string(),
        timestamp,
        author_id: author_id.to_string(),
        author_display_name: name.to_string(),
        message: text_nodes(text),
    }
}

pub fn event_deleted(deleted_event_id: &str, timestamp: u64) -> DomainEvent {
    DomainEvent::EventDeleted {
        id: format!("del-{deleted_event_id}"),
        timestamp,
        deleted_event_id: deleted_event_id.to_string(),
    }
}

pub fn messages_cleared(author_id: &str, timestamp: u64) -> DomainEvent {
    DomainEvent::MessagesCleared {
        id: format!("clear-{author_id}"),
        timestamp,
        author_id: author_id.to_string(),
    }
}

pub fn followed(name: &str, followed_at: u64) -> DomainEvent {
    DomainEvent::ChannelFollowed {
        id: format!("follow-{name}-{followed_at}"),
        timestamp: followed_at,
        follower_display_name: name.to_string(),
        followed_at,
    }
}

pub fn sub_started(name: &str, timestamp: u64) -> DomainEvent {
    DomainEvent::SubscriptionStarted {
        id: format!("sub-{name}-{timestamp}"),
        timestamp,
        subscriber_display_name: name.to_string(),
        tier: "1000".to_string(),
    }
}

pub fn resub(name: &str, months: u32, timestamp: u64) -> DomainEvent {
    DomainEvent::SubscriptionRenewed {
        id: format!("resub-{name}-{timestamp}"),
        timestamp,
        subscriber_display_name: name.to_string(),
        months_subscribed: months,
        tier: "1000".to_string(),
    }
}

pub fn gifted(name: Option<&str>, count: u32, anonymous: bool, timestamp: u64) -> DomainEvent {
    DomainEvent::SubscriptionGifted {
        id: format!("gift-{timestamp}"),
        timestamp,
        gifter_display_name: name.map(str::to_string),
        gift_count: count,
        tier: "1000".to_string(),
        is_anonymous: anonymous,
    }
}

pub fn tip(name: &str, amount_cents: i64, currency: &str, timestamp: u64) -> DomainEvent {
    DomainEvent::TipSent {
        id: format!("tip-{name}-{timestamp}"),
        timestamp,
        tipper_display_name: name.to_string(),
        amount_cents,
        currency: currency.to_string(),
    }
}

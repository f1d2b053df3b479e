use std::sync::Arc;

use tracing::{debug, trace};

use crate::context::WidgetContext;
use crate::event::{chat_to_text, ChatNode, DomainEvent};
use crate::snapshot::HydrationSnapshot;
use crate::widget::Widget;

use super::state::{ChatFeedState, ChatMessage, REMOVE_GRACE_MS};

/// Reducer for the floating chat feed.
pub struct ChatFeedWidget;

impl Widget for ChatFeedWidget {
    type State = ChatFeedState;

    fn hydrate(_ctx: &WidgetContext<'_>, _snapshot: &HydrationSnapshot) -> Self::State {
        // The feed starts empty; chat history is not replayed.
        ChatFeedState::default()
    }

    fn reduce(event: &DomainEvent, state: Self::State, ctx: &WidgetContext<'_>) -> Self::State {
        match event {
            DomainEvent::ChatSent {
                id,
                author_id,
                author_display_name,
                message,
                ..
            } => append(id, author_id, author_display_name, message, state, ctx),
            DomainEvent::EventDeleted {
                deleted_event_id, ..
            } => retain(state, |m| m.id != *deleted_event_id),
            DomainEvent::MessagesCleared { author_id, .. } => {
                retain(state, |m| m.author_id != *author_id)
            }
            DomainEvent::Tick => sweep_expired(state, ctx.now),
            DomainEvent::ChannelFollowed { .. }
            | DomainEvent::SubscriptionStarted { .. }
            | DomainEvent::SubscriptionRenewed { .. }
            | DomainEvent::SubscriptionGifted { .. }
            | DomainEvent::TipSent { .. } => {
                trace!(kind = event.kind(), "chat feed ignores event");
                state
            }
        }
    }
}

fn append(
    id: &str,
    author_id: &str,
    display_name: &str,
    message: &[ChatNode],
    state: ChatFeedState,
    ctx: &WidgetContext<'_>,
) -> ChatFeedState {
    let settings = ctx.settings;

    if settings.is_excluded_author(author_id) {
        trace!(author_id, "dropping message from excluded author");
        return state;
    }

    let text = chat_to_text(message);
    if settings.is_command(&text) {
        trace!(author_id, "dropping command message");
        return state;
    }

    // Sampling order is part of the contract: duration, then size, then
    // position draw consecutive values from the host source.
    let duration_ms = ctx.between(settings.min_duration * 1000.0, settings.max_duration * 1000.0)
        as u64;
    let size = ctx.between(settings.min_font_size, settings.max_font_size);
    let position = ctx.random();

    let entry = ChatMessage {
        id: id.to_string(),
        author_id: author_id.to_string(),
        display_name: display_name.to_string(),
        message: message.to_vec(),
        position,
        size,
        duration_ms,
        remove_at: ctx.now + duration_ms + REMOVE_GRACE_MS,
    };
    debug!(id = %entry.id, remove_at = entry.remove_at, "feed entry added");

    let messages: Arc<[ChatMessage]> = state
        .messages
        .iter()
        .cloned()
        .chain(std::iter::once(entry))
        .collect();
    ChatFeedState { messages }
}

fn sweep_expired(state: ChatFeedState, now: u64) -> ChatFeedState {
    retain(state, |m| m.remove_at >= now)
}

/// Keep entries matching the predicate. Returns the input state, same
/// allocation included, when membership is unchanged.
fn retain(state: ChatFeedState, keep: impl Fn(&ChatMessage) -> bool) -> ChatFeedState {
    if state.messages.iter().all(|m| keep(m)) {
        return state;
    }

    let messages: Arc<[ChatMessage]> = state
        .messages
        .iter()
        .filter(|m| keep(m))
        .cloned()
        .collect();
    debug!(remaining = messages.len(), "feed entries removed");
    ChatFeedState { messages }
}

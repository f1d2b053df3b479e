use std::sync::Arc;

use tracing::trace;

use crate::context::WidgetContext;
use crate::event::DomainEvent;
use crate::snapshot::HydrationSnapshot;
use crate::widget::Widget;
use crate::widgets::ANONYMOUS_NAME;

use super::state::{
    GiftDetail, Highlight, ResubDetail, SupportersState, TipDetail, ANIMATION_WINDOW_MS,
};

/// Reducer for the latest-supporter highlight slots.
pub struct SupportersWidget;

impl Widget for SupportersWidget {
    type State = SupportersState;

    fn hydrate(ctx: &WidgetContext<'_>, snapshot: &HydrationSnapshot) -> Self::State {
        let animating_until = ctx.now + ANIMATION_WINDOW_MS;

        SupportersState {
            latest_follower: snapshot.latest_follower.as_ref().map(|fact| {
                Arc::new(Highlight {
                    name: fact.display_name.clone(),
                    timestamp: fact.followed_at,
                    animating_until,
                    is_animating: true,
                    detail: (),
                })
            }),
            latest_subscriber: snapshot.latest_subscriber.as_ref().map(|fact| {
                Arc::new(Highlight {
                    name: fact.display_name.clone(),
                    timestamp: fact.timestamp,
                    animating_until,
                    is_animating: true,
                    detail: (),
                })
            }),
            latest_tip: snapshot.latest_tip.as_ref().map(|fact| {
                Arc::new(Highlight {
                    name: fact.display_name.clone(),
                    timestamp: fact.timestamp,
                    animating_until,
                    is_animating: true,
                    detail: TipDetail {
                        amount_cents: fact.amount_cents,
                        currency: fact.currency.clone(),
                    },
                })
            }),
            // No snapshot facts exist for these categories.
            latest_gift_sub: None,
            latest_resub: None,
        }
    }

    fn reduce(event: &DomainEvent, state: Self::State, ctx: &WidgetContext<'_>) -> Self::State {
        match event {
            DomainEvent::ChannelFollowed {
                follower_display_name,
                followed_at,
                ..
            } => {
                // Followers are keyed by name alone; a repeat follow by
                // the same name keeps its animation window.
                let is_new = state
                    .latest_follower
                    .as_deref()
                    .map_or(true, |f| f.name != *follower_display_name);
                let slot = Some(Arc::new(Highlight {
                    name: follower_display_name.clone(),
                    timestamp: *followed_at,
                    animating_until: window(is_new, state.latest_follower.as_deref(), ctx.now),
                    is_animating: is_new,
                    detail: (),
                }));
                SupportersState {
                    latest_follower: slot,
                    ..state
                }
            }

            DomainEvent::SubscriptionStarted {
                subscriber_display_name,
                timestamp,
                ..
            } => {
                let is_new = state
                    .latest_subscriber
                    .as_deref()
                    .map_or(true, |s| s.name != *subscriber_display_name);
                let slot = Some(Arc::new(Highlight {
                    name: subscriber_display_name.clone(),
                    timestamp: *timestamp,
                    animating_until: window(is_new, state.latest_subscriber.as_deref(), ctx.now),
                    is_animating: is_new,
                    detail: (),
                }));
                SupportersState {
                    latest_subscriber: slot,
                    ..state
                }
            }

            DomainEvent::TipSent {
                tipper_display_name,
                timestamp,
                amount_cents,
                currency,
                ..
            } => {
                let is_new = state
                    .latest_tip
                    .as_deref()
                    .map_or(true, |t| t.name != *tipper_display_name || t.timestamp != *timestamp);
                let slot = Some(Arc::new(Highlight {
                    name: tipper_display_name.clone(),
                    timestamp: *timestamp,
                    animating_until: window(is_new, state.latest_tip.as_deref(), ctx.now),
                    is_animating: is_new,
                    detail: TipDetail {
                        amount_cents: *amount_cents,
                        currency: currency.clone(),
                    },
                }));
                SupportersState {
                    latest_tip: slot,
                    ..state
                }
            }

            DomainEvent::SubscriptionGifted {
                gifter_display_name,
                timestamp,
                gift_count,
                tier,
                is_anonymous,
                ..
            } => {
                let name = if *is_anonymous {
                    ANONYMOUS_NAME.to_string()
                } else {
                    gifter_display_name
                        .clone()
                        .unwrap_or_else(|| ANONYMOUS_NAME.to_string())
                };
                let is_new = state
                    .latest_gift_sub
                    .as_deref()
                    .map_or(true, |g| g.name != name || g.timestamp != *timestamp);
                let slot = Some(Arc::new(Highlight {
                    name,
                    timestamp: *timestamp,
                    animating_until: window(is_new, state.latest_gift_sub.as_deref(), ctx.now),
                    is_animating: is_new,
                    detail: GiftDetail {
                        gift_count: *gift_count,
                        tier: tier.clone(),
                        label: format!("{gift_count} gifted"),
                    },
                }));
                SupportersState {
                    latest_gift_sub: slot,
                    ..state
                }
            }

            DomainEvent::SubscriptionRenewed {
                subscriber_display_name,
                timestamp,
                months_subscribed,
                ..
            } => {
                let is_new = state.latest_resub.as_deref().map_or(true, |r| {
                    r.name != *subscriber_display_name || r.timestamp != *timestamp
                });
                let slot = Some(Arc::new(Highlight {
                    name: subscriber_display_name.clone(),
                    timestamp: *timestamp,
                    animating_until: window(is_new, state.latest_resub.as_deref(), ctx.now),
                    is_animating: is_new,
                    detail: ResubDetail {
                        months: *months_subscribed,
                        label: format!("{months_subscribed} months"),
                    },
                }));
                SupportersState {
                    latest_resub: slot,
                    ..state
                }
            }

            DomainEvent::Tick => {
                let latest_follower = refresh(&state.latest_follower, ctx.now);
                let latest_subscriber = refresh(&state.latest_subscriber, ctx.now);
                let latest_tip = refresh(&state.latest_tip, ctx.now);
                let latest_gift_sub = refresh(&state.latest_gift_sub, ctx.now);
                let latest_resub = refresh(&state.latest_resub, ctx.now);

                // Only return a new state if some slot actually flipped.
                if same_slot(&latest_follower, &state.latest_follower)
                    && same_slot(&latest_subscriber, &state.latest_subscriber)
                    && same_slot(&latest_tip, &state.latest_tip)
                    && same_slot(&latest_gift_sub, &state.latest_gift_sub)
                    && same_slot(&latest_resub, &state.latest_resub)
                {
                    return state;
                }

                SupportersState {
                    latest_follower,
                    latest_subscriber,
                    latest_tip,
                    latest_gift_sub,
                    latest_resub,
                }
            }

            DomainEvent::ChatSent { .. }
            | DomainEvent::EventDeleted { .. }
            | DomainEvent::MessagesCleared { .. } => {
                trace!(kind = event.kind(), "supporters widget ignores event");
                state
            }
        }
    }
}

/// Animation window end for a slot update: fresh occurrences start a
/// new window at `now`, repeats keep whatever window was stored.
fn window<E>(is_new: bool, prior: Option<&Highlight<E>>, now: u64) -> u64 {
    if is_new {
        now + ANIMATION_WINDOW_MS
    } else {
        prior.map_or(0, |h| h.animating_until)
    }
}

/// Recompute the derived animating flag from the stored absolute
/// instant. The slot `Arc` is reused when the flag did not change.
fn refresh<E: Clone>(slot: &Option<Arc<Highlight<E>>>, now: u64) -> Option<Arc<Highlight<E>>> {
    let highlight = slot.as_ref()?;
    let is_animating = now < highlight.animating_until;
    if is_animating == highlight.is_animating {
        Some(Arc::clone(highlight))
    } else {
        Some(Arc::new(Highlight {
            is_animating,
            ..(**highlight).clone()
        }))
    }
}

/// Pointer-level equality for a slot pair.
fn same_slot<E>(a: &Option<Arc<Highlight<E>>>, b: &Option<Arc<Highlight<E>>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

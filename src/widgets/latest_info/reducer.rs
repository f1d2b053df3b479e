use tracing::trace;

use crate::config::InfoType;
use crate::context::WidgetContext;
use crate::event::DomainEvent;
use crate::snapshot::HydrationSnapshot;
use crate::widget::Widget;
use crate::widgets::ANONYMOUS_NAME;

use super::state::InfoValue;

/// Reducer for the single-value latest-info readout.
pub struct LatestInfoWidget;

impl Widget for LatestInfoWidget {
    type State = InfoValue;

    fn hydrate(ctx: &WidgetContext<'_>, snapshot: &HydrationSnapshot) -> Self::State {
        let configured = match ctx.settings.info_type {
            InfoType::FollowerName => snapshot.latest_follower.as_ref().map(|fact| {
                InfoValue::Text {
                    text: fact.display_name.clone(),
                }
            }),
            InfoType::SubscriberName => snapshot.latest_subscriber.as_ref().map(|fact| {
                InfoValue::Text {
                    text: fact.display_name.clone(),
                }
            }),
            InfoType::TipperName => snapshot.latest_tip.as_ref().map(|fact| InfoValue::Text {
                text: fact.display_name.clone(),
            }),
            InfoType::TipAmount => snapshot.latest_tip.as_ref().map(|fact| InfoValue::Currency {
                value: fact.amount_cents,
                currency: fact.currency.clone(),
            }),
            // Gift facts are never part of the snapshot.
            InfoType::GiftSubberName | InfoType::GiftSubCount | InfoType::Unknown => None,
        };

        configured.unwrap_or_else(|| InfoValue::Text {
            text: ctx.settings.placeholder_text.clone(),
        })
    }

    fn reduce(event: &DomainEvent, state: Self::State, ctx: &WidgetContext<'_>) -> Self::State {
        let info_type = ctx.settings.info_type;

        match event {
            DomainEvent::ChannelFollowed {
                follower_display_name,
                ..
            } if info_type == InfoType::FollowerName => InfoValue::Text {
                text: follower_display_name.clone(),
            },

            DomainEvent::SubscriptionStarted {
                subscriber_display_name,
                ..
            } if info_type == InfoType::SubscriberName => InfoValue::Text {
                text: subscriber_display_name.clone(),
            },

            DomainEvent::TipSent {
                tipper_display_name,
                ..
            } if info_type == InfoType::TipperName => InfoValue::Text {
                text: tipper_display_name.clone(),
            },

            DomainEvent::TipSent {
                amount_cents,
                currency,
                ..
            } if info_type == InfoType::TipAmount => InfoValue::Currency {
                value: *amount_cents,
                currency: currency.clone(),
            },

            DomainEvent::SubscriptionGifted {
                gifter_display_name,
                ..
            } if info_type == InfoType::GiftSubberName => InfoValue::Text {
                text: gifter_display_name
                    .clone()
                    .unwrap_or_else(|| ANONYMOUS_NAME.to_string()),
            },

            DomainEvent::SubscriptionGifted { gift_count, .. }
                if info_type == InfoType::GiftSubCount =>
            {
                InfoValue::Number {
                    value: i64::from(*gift_count),
                }
            }

            _ => {
                trace!(kind = event.kind(), "latest-info widget ignores event");
                state
            }
        }
    }
}

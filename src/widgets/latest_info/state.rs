use serde::Serialize;

use crate::widget::WidgetState;

/// The single surfaced value of a latest-info widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InfoValue {
    Text { text: String },
    Number { value: i64 },
    /// Amount in the smallest currency unit; no conversion is performed.
    Currency { value: i64, currency: String },
}

impl Default for InfoValue {
    fn default() -> Self {
        InfoValue::Text {
            text: String::new(),
        }
    }
}

impl WidgetState for InfoValue {}

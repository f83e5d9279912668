use serde::{Deserialize, Serialize};

/// One order line in a total calculation. Both fields are optional; an item
/// missing either one contributes nothing to the total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl LineItem {
    pub fn new(price: f64, quantity: f64) -> Self {
        Self {
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    pub fn price_only(price: f64) -> Self {
        Self {
            price: Some(price),
            quantity: None,
        }
    }
}

use serde::{Deserialize, Serialize};

/// Flat price of one brown bag add-on.
pub const BROWN_BAG_UNIT_PRICE: f64 = 200.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(id: &str, name: &str, price: f64, quantity: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        finite_or_zero(self.price) * self.quantity as f64
    }
}

/// Items ordered together, e.g. one recipient's share of a group order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPack {
    pub id: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl CartPack {
    pub fn new(id: &str, items: Vec<CartItem>) -> Self {
        Self {
            id: id.to_string(),
            items,
        }
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

/// What the checkout page shows before the order is placed.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub delivery_fee: f64,
    pub service_fee: f64,
    pub total: f64,
}

impl OrderSummary {
    pub fn compute(
        packs: &[CartPack],
        brown_bag_quantity: u32,
        brown_bag_unit_price: f64,
        discount_percent: f64,
        delivery_fee: f64,
        service_fee: f64,
    ) -> Self {
        let subtotal = subtotal(packs, brown_bag_quantity, brown_bag_unit_price);
        Self {
            subtotal,
            discount_amount: discount_amount(subtotal, discount_percent),
            delivery_fee: finite_or_zero(delivery_fee),
            service_fee: finite_or_zero(service_fee),
            total: total(subtotal, discount_percent, delivery_fee, service_fee),
        }
    }
}

/// Non-finite inputs count as zero so a summary never renders `NaN`.
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Sum of every pack's line totals plus the brown bags.
pub fn subtotal(packs: &[CartPack], brown_bag_quantity: u32, brown_bag_unit_price: f64) -> f64 {
    let items: f64 = packs.iter().map(CartPack::total).sum();
    items + brown_bag_quantity as f64 * finite_or_zero(brown_bag_unit_price)
}

pub fn discount_amount(subtotal: f64, discount_percent: f64) -> f64 {
    finite_or_zero(subtotal) * finite_or_zero(discount_percent) / 100.0
}

/// `discount_percent` is not clamped; keeping it within 0..=100 is up to the caller.
pub fn total(subtotal: f64, discount_percent: f64, delivery_fee: f64, service_fee: f64) -> f64 {
    finite_or_zero(subtotal) - discount_amount(subtotal, discount_percent)
        + finite_or_zero(delivery_fee)
        + finite_or_zero(service_fee)
}

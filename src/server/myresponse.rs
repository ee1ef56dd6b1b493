use serde::{Deserialize, Serialize};

use crate::pricing::CartPack;

/// Body of `/api/hours/days`.
#[derive(Serialize, Clone, Debug)]
pub struct DaysResponse {
    days: Vec<u8>,
}

impl DaysResponse {
    pub fn new(days: Vec<u8>) -> Self {
        Self { days }
    }
}

/// Body of `/api/hours/open-at`. `at` echoes the epoch millis that were checked.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OpenAtResponse {
    is_open: bool,
    at: i64,
}

impl OpenAtResponse {
    pub fn new(is_open: bool, at: i64) -> Self {
        Self { is_open, at }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct LabelResponse {
    label: String,
}

impl LabelResponse {
    pub fn new(label: String) -> Self {
        Self { label }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct PaymentCodeResponse {
    label: String,
    code: &'static str,
}

impl PaymentCodeResponse {
    pub fn new(label: String, code: &'static str) -> Self {
        Self { label, code }
    }
}

/// JSON body posted to `/api/cart/summary`. Fees come from the fee service upstream.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CartSummaryRequest {
    pub packs: Vec<CartPack>,
    pub brown_bag_quantity: u32,
    pub discount: f64,
    pub delivery_fee: f64,
    pub service_fee: f64,
}

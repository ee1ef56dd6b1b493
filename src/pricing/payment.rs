use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StorefrontError, StorefrontResult};

/// Payment options offered at checkout. Serialises as the API code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Wallet,
    Card,
    BankTransfer,
    Ussd,
    Qr,
    CashOnDelivery,
    Opay,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 7] = [
        PaymentMethod::Wallet,
        PaymentMethod::Card,
        PaymentMethod::BankTransfer,
        PaymentMethod::Ussd,
        PaymentMethod::Qr,
        PaymentMethod::CashOnDelivery,
        PaymentMethod::Opay,
    ];

    pub fn display_label(&self) -> &'static str {
        match self {
            PaymentMethod::Wallet => "Wallet",
            PaymentMethod::Card => "Pay with Card",
            PaymentMethod::BankTransfer => "Pay with Bank Transfer",
            PaymentMethod::Ussd => "Pay with USSD",
            PaymentMethod::Qr => "Pay with QR Code",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::Opay => "Pay with Opay",
        }
    }

    pub fn api_code(&self) -> &'static str {
        match self {
            PaymentMethod::Wallet => "wallet",
            PaymentMethod::Card => "card",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Ussd => "ussd",
            PaymentMethod::Qr => "qr",
            PaymentMethod::CashOnDelivery => "cash_on_delivery",
            PaymentMethod::Opay => "opay",
        }
    }

    /// Exact label match. No guessing: an unknown label is an error.
    pub fn from_display_label(label: &str) -> StorefrontResult<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.display_label() == label)
            .ok_or_else(|| StorefrontError::UnknownPaymentMethod {
                label: label.to_string(),
            })
    }
}

impl FromStr for PaymentMethod {
    type Err = StorefrontError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::from_display_label(label)
    }
}

pub fn map_display_payment_method_to_api_code(label: &str) -> StorefrontResult<&'static str> {
    Ok(PaymentMethod::from_display_label(label)?.api_code())
}

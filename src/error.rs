use thiserror::Error;

/// Errors surfaced by the storefront core.
///
/// Schedule parsing never ends up here, a badge must always render. The payment label
/// lookup does, since guessing a gateway code could charge through the wrong provider.
#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Unknown payment method: {label}")]
    UnknownPaymentMethod { label: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Invalid timezone: {name}")]
    InvalidTimezone { name: String },

    #[error("I/O error.\n{0}")]
    Io(#[from] std::io::Error),

    #[error("Could not deserialize.\n{0}")]
    Deserialize(#[from] serde_json::Error),
}

pub type StorefrontResult<T> = Result<T, StorefrontError>;

pub mod cart;
pub mod payment;

pub use cart::{subtotal, total, CartItem, CartPack, OrderSummary, BROWN_BAG_UNIT_PRICE};
pub use payment::{map_display_payment_method_to_api_code, PaymentMethod};

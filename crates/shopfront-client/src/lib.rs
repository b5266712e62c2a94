pub mod client;
pub mod error;
pub mod operation;
pub mod types;

pub use client::{ClientConfig, FrontendClient};
pub use error::FrontendError;
pub use operation::Operation;
pub use types::{AddToCartRequest, CheckoutRequest, EmptyResponse, Quote};

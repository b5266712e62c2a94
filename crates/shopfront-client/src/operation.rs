//! The fixed set of frontend service operations and their per-call policy.

use std::fmt;

use reqwest::Method;

/// One frontend service endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListQuotes,
    HomePage,
    SingleProduct,
    AddToCart,
    CartPage,
    Checkout,
    Metadata,
    EmptyCart,
}

impl Operation {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ListQuotes => "list_quotes",
            Self::HomePage => "home_page",
            Self::SingleProduct => "single_product",
            Self::AddToCart => "add_product_to_cart",
            Self::CartPage => "cart_page",
            Self::Checkout => "checkout",
            Self::Metadata => "metadata",
            Self::EmptyCart => "empty_cart",
        }
    }

    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::AddToCart | Self::Checkout | Self::EmptyCart => Method::POST,
            Self::ListQuotes
            | Self::HomePage
            | Self::SingleProduct
            | Self::CartPage
            | Self::Metadata => Method::GET,
        }
    }

    /// Whether the request goes out with the client's cookie jar attached.
    /// The quotes listing is the only anonymous call.
    #[must_use]
    pub const fn sends_cookies(self) -> bool {
        !matches!(self, Self::ListQuotes)
    }

    /// Message used when a failed response carries no `message` of its own.
    ///
    /// Add-to-cart and checkout share "Could not add comment." with each other;
    /// callers match on it verbatim, so it stays as is.
    #[must_use]
    pub const fn default_error_message(self) -> &'static str {
        match self {
            Self::SingleProduct => "Could not fetch quote.",
            Self::AddToCart | Self::Checkout => "Could not add comment.",
            Self::ListQuotes
            | Self::HomePage
            | Self::CartPage
            | Self::Metadata
            | Self::EmptyCart => "Could not fetch quotes.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Client for the external commerce platform.
//!
//! Checkout and payment run entirely on the commerce provider's side; this
//! client only knows how to address it. It is constructed once in
//! `main.rs` from `CommerceConfig` and injected as `web::Data`, so there
//! is no process-global commerce state.

use crate::config::CommerceConfig;

#[derive(Clone)]
pub struct CommerceClient {
    config: CommerceConfig,
}

impl CommerceClient {
    pub fn new(config: CommerceConfig) -> Self {
        CommerceClient { config }
    }

    /// Builds a cart permalink that drops `quantity` units of the product
    /// variant into the shopper's cart and lands them on the provider's
    /// checkout page.
    pub fn cart_permalink(&self, variant_id: &str, quantity: u32) -> String {
        format!(
            "https://{}/cart/{}:{}",
            self.config.shop_domain,
            variant_id,
            quantity.max(1)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CommerceClient {
        CommerceClient::new(CommerceConfig {
            shop_domain: "cardsmith-store.myshopify.com".to_string(),
            storefront_token: String::new(),
        })
    }

    #[test]
    fn permalink_carries_domain_variant_and_quantity() {
        assert_eq!(
            client().cart_permalink("41553878122648", 2),
            "https://cardsmith-store.myshopify.com/cart/41553878122648:2"
        );
    }

    #[test]
    fn zero_quantity_is_clamped_to_one() {
        assert_eq!(
            client().cart_permalink("41553878122648", 0),
            "https://cardsmith-store.myshopify.com/cart/41553878122648:1"
        );
    }
}

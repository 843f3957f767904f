use serde::Serialize;

use crate::location::models::IndiaStatus;

/// Price shown by the pricing widget for the caller's region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingVariant {
    pub plan: &'static str,
    pub currency: &'static str,
    /// Minor-unit-free list price.
    pub amount: u32,
    pub display_price: &'static str,
}

const INDIA_PRICING: PricingVariant = PricingVariant {
    plan: "india",
    currency: "INR",
    amount: 1999,
    display_price: "₹1,999",
};

const INTERNATIONAL_PRICING: PricingVariant = PricingVariant {
    plan: "international",
    currency: "USD",
    amount: 49,
    display_price: "$49",
};

impl PricingVariant {
    /// Unknown callers see international pricing.
    pub fn for_status(status: IndiaStatus) -> Self {
        match status {
            IndiaStatus::India => INDIA_PRICING,
            IndiaStatus::Elsewhere | IndiaStatus::Unknown => INTERNATIONAL_PRICING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_by_status() {
        assert_eq!(PricingVariant::for_status(IndiaStatus::India).currency, "INR");
        assert_eq!(PricingVariant::for_status(IndiaStatus::Elsewhere).currency, "USD");
        assert_eq!(
            PricingVariant::for_status(IndiaStatus::Unknown),
            PricingVariant::for_status(IndiaStatus::Elsewhere)
        );
    }
}

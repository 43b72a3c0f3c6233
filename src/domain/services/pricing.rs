use rust_decimal::Decimal;

use crate::domain::models::pricing::{DiscountType, PricingTier, ServiceItem};

/// Resolves the unit price of a service at a given quantity. The qualifying
/// tier with the largest `min_quantity` wins; on duplicate thresholds the
/// last matching tier in input order is kept. With no qualifying tier the
/// base price passes through unchanged.
pub fn resolve_price(base_price: Decimal, tiers: &[PricingTier], quantity: u32) -> Decimal {
    let mut best: Option<&PricingTier> = None;
    for tier in tiers {
        if tier.min_quantity > quantity {
            continue;
        }
        match best {
            Some(current) if tier.min_quantity < current.min_quantity => {}
            _ => best = Some(tier),
        }
    }

    let Some(tier) = best else {
        return base_price;
    };

    match tier.discount_type {
        DiscountType::TierPrice => tier.price.unwrap_or(base_price),
        DiscountType::Percentage => {
            let pct = tier.discount.unwrap_or(Decimal::ZERO);
            base_price * (Decimal::ONE_HUNDRED - pct) / Decimal::ONE_HUNDRED
        }
        // Price never goes negative.
        DiscountType::Fixed => {
            (base_price - tier.discount.unwrap_or(Decimal::ZERO)).max(Decimal::ZERO)
        }
        DiscountType::None => base_price,
    }
}

/// Line total for a quotation line item: tier-resolved unit price times
/// quantity, using the tier list stored on the fetched service record.
pub fn price_line(service: &ServiceItem, quantity: u32) -> Decimal {
    resolve_price(service.unit_price, &service.tiers(), quantity) * Decimal::from(quantity)
}

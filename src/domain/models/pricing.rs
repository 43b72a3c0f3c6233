use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    None,
    Percentage,
    Fixed,
    TierPrice,
}

/// A quantity threshold at which a different price or discount applies.
/// `price` is meaningful only for TIER_PRICE, `discount` only for
/// PERCENTAGE and FIXED.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PricingTier {
    pub min_quantity: u32,
    pub discount_type: DiscountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
}

impl PricingTier {
    pub fn new(
        min_quantity: u32,
        discount_type: DiscountType,
        price: Option<Decimal>,
        discount: Option<Decimal>,
    ) -> Result<Self, DomainError> {
        if min_quantity == 0 {
            return Err(DomainError::InvalidTier(
                "min_quantity must be at least 1".to_string(),
            ));
        }

        match discount_type {
            DiscountType::TierPrice => {
                if price.is_none() {
                    return Err(DomainError::InvalidTier(
                        "a TIER_PRICE tier requires a price".to_string(),
                    ));
                }
            }
            DiscountType::Percentage | DiscountType::Fixed => {
                if discount.is_none() {
                    return Err(DomainError::InvalidTier(
                        "a PERCENTAGE or FIXED tier requires a discount".to_string(),
                    ));
                }
            }
            DiscountType::None => {}
        }

        Ok(Self {
            min_quantity,
            discount_type,
            price: if discount_type == DiscountType::TierPrice {
                price
            } else {
                None
            },
            discount: if matches!(discount_type, DiscountType::Percentage | DiscountType::Fixed) {
                discount
            } else {
                None
            },
        })
    }
}

/// An ancillary service (catering, equipment, day passes) as fetched from
/// tenant configuration. The tier list is stored as a JSON blob on the
/// record, mirroring how the backend ships it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceItem {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub tiers_json: String,
    pub created_at: DateTime<Utc>,
}

impl ServiceItem {
    pub fn new(tenant_id: String, name: String, unit_price: Decimal, tiers_json: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id,
            name,
            unit_price,
            tiers_json,
            created_at: Utc::now(),
        }
    }

    /// Parses the stored tier list. A malformed or empty blob falls back to
    /// flat pricing rather than failing the whole quotation.
    pub fn tiers(&self) -> Vec<PricingTier> {
        serde_json::from_str(&self.tiers_json).unwrap_or_default()
    }
}

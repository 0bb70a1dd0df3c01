use serde::{Deserialize, Serialize};

use crate::models::LineItem;

/// A nutrition reference record with macro content per 100g serving.
///
/// Field names match the lookup wire format: a JSON array of
/// `{id, name, carbs, protein, fats}` objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: u64,
    pub name: String,
    pub carbs: f64,
    pub protein: f64,
    pub fats: f64,
}

impl FoodItem {
    /// Scale this food's macros to a quantity in grams, producing a line item.
    ///
    /// Each macro is `round1(per100 * qty / 100)`.
    pub fn scale(&self, qty: f64) -> LineItem {
        LineItem {
            id: self.id,
            name: self.name.clone(),
            qty,
            carbs: round1(self.carbs * qty / 100.0),
            protein: round1(self.protein * qty / 100.0),
            fats: round1(self.fats * qty / 100.0),
        }
    }

    /// Basic validation: non-negative macro values.
    pub fn is_valid(&self) -> bool {
        self.carbs >= 0.0 && self.protein >= 0.0 && self.fats >= 0.0
    }

    /// Compact one-line summary used in result lists.
    pub fn summary(&self) -> String {
        format!(
            "{} (C:{} P:{} F:{})",
            self.name, self.carbs, self.protein, self.fats
        )
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Round to one decimal place.
///
/// The nudge counters binary representation error so that values which are
/// 4.05 or 0.45 in decimal round up instead of sitting a hair below the
/// halfway point.
pub fn round1(value: f64) -> f64 {
    let scaled = value * 10.0;
    let nudged = scaled + scaled.signum() * 1e-9;
    nudged.round() / 10.0
}

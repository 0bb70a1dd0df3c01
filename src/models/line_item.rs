use serde::{Deserialize, Serialize};

/// One logged quantity of a food with macros scaled to that quantity.
///
/// Field names match the submission format: a JSON array of
/// `{id, name, qty, carbs, protein, fats}` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: u64,
    pub name: String,
    pub qty: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fats: f64,
}

/// Macro sums over a list of line items. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub carbs: f64,
    pub protein: f64,
    pub fats: f64,
}

impl Totals {
    pub fn accumulate(mut self, item: &LineItem) -> Self {
        self.carbs += item.carbs;
        self.protein += item.protein;
        self.fats += item.fats;
        self
    }

    pub fn is_zero(&self) -> bool {
        self.carbs == 0.0 && self.protein == 0.0 && self.fats == 0.0
    }
}

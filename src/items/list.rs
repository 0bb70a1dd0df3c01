use crate::error::{LogError, Result};
use crate::models::{FoodItem, LineItem, Totals};

/// The ordered list of logged line items for one meal.
///
/// Every mutation refreshes the serialized JSON mirror, so `serialized()`
/// always reflects the in-memory list exactly.
pub struct MealItems {
    items: Vec<LineItem>,
    serialized: String,
}

impl MealItems {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            serialized: "[]".to_string(),
        }
    }

    /// Scale `food` to `qty` grams and append the resulting line item.
    ///
    /// Rejects quantities that are not strictly positive (NaN included).
    pub fn add(&mut self, food: &FoodItem, qty: f64) -> Result<LineItem> {
        if !(qty > 0.0) {
            return Err(LogError::InvalidQuantity);
        }

        let item = food.scale(qty);
        self.items.push(item.clone());
        self.refresh_mirror()?;
        Ok(item)
    }

    /// The "add" action: requires a current selection and a positive
    /// quantity, otherwise blocks without mutating the list.
    pub fn add_from_selection(
        &mut self,
        selected: Option<&FoodItem>,
        qty: f64,
    ) -> Result<LineItem> {
        let food = selected.ok_or(LogError::NoFoodSelected)?;
        self.add(food, qty)
    }

    /// Remove the entry at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Result<LineItem> {
        if index >= self.items.len() {
            return Err(LogError::NoSuchItem(index));
        }

        let removed = self.items.remove(index);
        self.refresh_mirror()?;
        Ok(removed)
    }

    /// Macro sums over the current entries.
    pub fn totals(&self) -> Totals {
        self.items
            .iter()
            .fold(Totals::default(), |acc, item| acc.accumulate(item))
    }

    /// The serialized JSON form of the current list, for submission.
    pub fn serialized(&self) -> &str {
        &self.serialized
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn refresh_mirror(&mut self) -> Result<()> {
        self.serialized = serde_json::to_string(&self.items)?;
        Ok(())
    }
}

impl Default for MealItems {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a serialized line-item array back into memory.
pub fn parse_items(json: &str) -> Result<Vec<LineItem>> {
    Ok(serde_json::from_str(json)?)
}

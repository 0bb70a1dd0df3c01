mod food;
mod line_item;

pub use food::{round1, FoodItem};
pub use line_item::{LineItem, Totals};

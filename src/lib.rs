pub mod cli;
pub mod error;
pub mod interface;
pub mod items;
pub mod models;
pub mod search;

pub use error::{LogError, Result};
pub use items::MealItems;
pub use models::{FoodItem, LineItem, Totals};
pub use search::{FoodSource, SearchSession};

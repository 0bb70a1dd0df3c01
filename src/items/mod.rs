mod list;

pub use list::{parse_items, MealItems};

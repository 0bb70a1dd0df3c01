mod debounce;
mod local;
mod session;
mod source;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use local::{load_food_table, LocalFoodSource, COMMON_FOOD_NAMES};
pub use session::{LookupRequest, SearchSession, Selection};
pub use source::{FoodSource, HttpFoodSource};

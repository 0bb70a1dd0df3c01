use crate::error::Result;
use crate::models::FoodItem;

/// A lookup source for foods by name fragment.
///
/// An empty query returns a default set of common foods.
pub trait FoodSource {
    fn search(&self, query: &str) -> Result<Vec<FoodItem>>;
}

/// Food lookup against the meal-service search endpoint:
/// `GET {base}/search/?q=<text>` returning a JSON array of
/// `{id, name, carbs, protein, fats}`.
pub struct HttpFoodSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpFoodSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl FoodSource for HttpFoodSource {
    fn search(&self, query: &str) -> Result<Vec<FoodItem>> {
        let url = format!("{}/search/", self.base_url.trim_end_matches('/'));
        let foods = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(retain_valid(foods))
    }
}

/// Drop foods whose macro data is malformed, logging each one.
pub fn retain_valid(foods: Vec<FoodItem>) -> Vec<FoodItem> {
    foods
        .into_iter()
        .filter(|food| {
            let valid = food.is_valid();
            if !valid {
                log::warn!("Discarding food '{}': invalid macro values", food.name);
            }
            valid
        })
        .collect()
}

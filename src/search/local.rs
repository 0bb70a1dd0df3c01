use std::path::Path;

use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::FoodItem;
use crate::search::FoodSource;

/// Default set served for an empty query.
pub const COMMON_FOOD_NAMES: &[&str] = &[
    "Rice",
    "Banana",
    "Egg",
    "Milk",
    "Chicken Breast",
    "Apple",
    "Bread",
    "Oats",
];

/// Result caps matching the endpoint contract.
const SHORT_QUERY_LIMIT: usize = 15;
const LONG_QUERY_LIMIT: usize = 20;

/// Offline food lookup over a CSV-loaded table.
///
/// Matching mirrors the search endpoint: empty query returns the common
/// set, a single character matches name prefixes, anything longer matches
/// substrings ranked by name similarity.
pub struct LocalFoodSource {
    foods: Vec<FoodItem>,
}

impl LocalFoodSource {
    pub fn new(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }

    /// Load the food table from a CSV file with a
    /// `name, carbs, protein, fats` header.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(load_food_table(path)?))
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl FoodSource for LocalFoodSource {
    fn search(&self, query: &str) -> Result<Vec<FoodItem>> {
        let query = query.trim();

        if query.is_empty() {
            let matches = self
                .foods
                .iter()
                .filter(|f| COMMON_FOOD_NAMES.iter().any(|n| n.eq_ignore_ascii_case(&f.name)))
                .take(SHORT_QUERY_LIMIT)
                .cloned()
                .collect();
            return Ok(matches);
        }

        let needle = query.to_lowercase();

        if query.chars().count() == 1 {
            let matches = self
                .foods
                .iter()
                .filter(|f| f.key().starts_with(&needle))
                .take(SHORT_QUERY_LIMIT)
                .cloned()
                .collect();
            return Ok(matches);
        }

        let mut candidates: Vec<(&FoodItem, f64)> = self
            .foods
            .iter()
            .filter(|f| f.key().contains(&needle))
            .map(|f| (f, jaro_winkler(&f.key(), &needle)))
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(candidates
            .into_iter()
            .take(LONG_QUERY_LIMIT)
            .map(|(f, _)| f.clone())
            .collect())
    }
}

/// Load foods from a CSV file, assigning ids by row order.
///
/// Rows with a blank name or unparseable macro values are skipped with a
/// warning, as the original import tooling does.
pub fn load_food_table<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let index_of = |name: &str| headers.iter().position(|h| h.trim() == name);
    let name_col = index_of("name");
    let carbs_col = index_of("carbs");
    let protein_col = index_of("protein");
    let fats_col = index_of("fats");

    let mut foods = Vec::new();

    for (row_num, record) in reader.records().enumerate() {
        let record = record?;

        let field = |col: Option<usize>| col.and_then(|i| record.get(i)).unwrap_or("").trim();

        let name = field(name_col);
        if name.is_empty() {
            continue;
        }

        let parse = |col: Option<usize>| field(col).parse::<f64>();
        match (parse(carbs_col), parse(protein_col), parse(fats_col)) {
            (Ok(carbs), Ok(protein), Ok(fats)) => {
                let food = FoodItem {
                    id: (foods.len() + 1) as u64,
                    name: name.to_string(),
                    carbs,
                    protein,
                    fats,
                };
                if food.is_valid() {
                    foods.push(food);
                } else {
                    log::warn!("Skipping '{}' (row {}): invalid macro values", name, row_num + 2);
                }
            }
            _ => {
                log::warn!("Skipping '{}' (row {}): invalid macro values", name, row_num + 2);
            }
        }
    }

    Ok(foods)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn sample_source() -> LocalFoodSource {
        let names = [
            "Rice", "Brown Rice", "Rice Cake", "Banana", "Egg", "Eggplant", "Bread",
        ];
        let foods = names
            .iter()
            .enumerate()
            .map(|(i, name)| FoodItem {
                id: (i + 1) as u64,
                name: name.to_string(),
                carbs: 10.0,
                protein: 5.0,
                fats: 1.0,
            })
            .collect();
        LocalFoodSource::new(foods)
    }

    #[test]
    fn test_empty_query_returns_common_set() {
        let source = sample_source();
        let results = source.search("").unwrap();
        let names: Vec<&str> = results.iter().map(|f| f.name.as_str()).collect();
        assert!(names.contains(&"Rice"));
        assert!(names.contains(&"Egg"));
        assert!(!names.contains(&"Eggplant"));
    }

    #[test]
    fn test_single_char_matches_prefix() {
        let source = sample_source();
        let results = source.search("e").unwrap();
        let names: Vec<&str> = results.iter().map(|f| f.name.as_str()).collect();
        assert!(names.contains(&"Egg"));
        assert!(names.contains(&"Eggplant"));
        assert!(!names.contains(&"Bread"));
    }

    #[test]
    fn test_longer_query_matches_substring() {
        let source = sample_source();
        let results = source.search("rice").unwrap();
        assert_eq!(results.len(), 3);
        // Closest name similarity first.
        assert_eq!(results[0].name, "Rice");
    }

    #[test]
    fn test_no_match_is_empty() {
        let source = sample_source();
        assert!(source.search("quinoa").unwrap().is_empty());
    }

    #[test]
    fn test_load_food_table_skips_bad_rows() {
        let csv = "name,carbs,protein,fats\n\
                   Rice,28,2.7,0.3\n\
                   ,10,1,1\n\
                   Mystery,abc,1,1\n\
                   Negative,-5,1,1\n\
                   Banana,22.8,1.1,0.3\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let foods = load_food_table(file.path()).unwrap();
        assert_eq!(foods.len(), 2);
        assert_eq!(foods[0].name, "Rice");
        assert_eq!(foods[1].name, "Banana");
        assert_eq!(foods[1].id, 2);
    }

    #[test]
    fn test_result_caps_per_query_shape() {
        let mut foods = Vec::new();
        for i in 0..25 {
            foods.push(FoodItem {
                id: i + 1,
                name: format!("Egg Curry {}", i + 1),
                carbs: 4.0,
                protein: 12.0,
                fats: 9.0,
            });
        }
        // Duplicate common names so the default set can overflow its cap.
        for i in 0..20 {
            foods.push(FoodItem {
                id: 100 + i,
                name: "Egg".to_string(),
                carbs: 1.1,
                protein: 13.0,
                fats: 11.0,
            });
        }
        let source = LocalFoodSource::new(foods);

        assert_eq!(source.search("").unwrap().len(), 15);
        assert_eq!(source.search("e").unwrap().len(), 15);
        assert_eq!(source.search("egg curry").unwrap().len(), 20);
    }
}

use assert_float_eq::assert_float_absolute_eq;

use nutrition_logger_rs::items::{parse_items, MealItems};
use nutrition_logger_rs::models::{FoodItem, Totals};
use nutrition_logger_rs::LogError;

fn make_food(id: u64, name: &str, carbs: f64, protein: f64, fats: f64) -> FoodItem {
    FoodItem {
        id,
        name: name.to_string(),
        carbs,
        protein,
        fats,
    }
}

fn rice() -> FoodItem {
    make_food(1, "Rice", 28.0, 2.7, 0.3)
}

#[test]
fn test_rice_150g_scaling() {
    let mut items = MealItems::new();
    let added = items.add(&rice(), 150.0).unwrap();

    assert_float_absolute_eq!(added.carbs, 42.0, 1e-9);
    assert_float_absolute_eq!(added.protein, 4.1, 1e-9);
    assert_float_absolute_eq!(added.fats, 0.5, 1e-9);
}

#[test]
fn test_totals_track_add_and_remove_sequences() {
    let foods = [
        rice(),
        make_food(2, "Egg", 1.1, 13.0, 11.0),
        make_food(3, "Milk", 5.0, 3.4, 1.0),
    ];

    let mut items = MealItems::new();
    items.add(&foods[0], 150.0).unwrap();
    items.add(&foods[1], 60.0).unwrap();
    items.add(&foods[2], 200.0).unwrap();
    items.remove(1).unwrap();
    items.add(&foods[1], 120.0).unwrap();

    let expected = items
        .items()
        .iter()
        .fold(Totals::default(), |acc, item| acc.accumulate(item));
    let totals = items.totals();

    assert_float_absolute_eq!(totals.carbs, expected.carbs, 1e-9);
    assert_float_absolute_eq!(totals.protein, expected.protein, 1e-9);
    assert_float_absolute_eq!(totals.fats, expected.fats, 1e-9);
    assert_eq!(items.len(), 3);
}

#[test]
fn test_remove_preserves_relative_order() {
    let mut items = MealItems::new();
    for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
        items
            .add(&make_food(i as u64 + 1, name, 10.0, 1.0, 1.0), 100.0)
            .unwrap();
    }

    items.remove(1).unwrap();

    let names: Vec<&str> = items.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C", "D"]);
}

#[test]
fn test_serialized_round_trip() {
    let mut items = MealItems::new();
    items.add(&rice(), 150.0).unwrap();
    items.add(&make_food(2, "Egg", 1.1, 13.0, 11.0), 60.0).unwrap();

    let parsed = parse_items(items.serialized()).unwrap();
    assert_eq!(parsed, items.items());
}

#[test]
fn test_add_without_selection_blocks() {
    let mut items = MealItems::new();

    let err = items.add_from_selection(None, 100.0).unwrap_err();
    assert!(matches!(err, LogError::NoFoodSelected));
    assert_eq!(err.to_string(), "Please select a food item first.");
    assert!(items.is_empty());
    assert_eq!(items.serialized(), "[]");
}

#[test]
fn test_add_with_selection_goes_through() {
    let mut items = MealItems::new();
    let food = rice();

    let added = items.add_from_selection(Some(&food), 50.0).unwrap();
    assert_float_absolute_eq!(added.carbs, 14.0, 1e-9);
}

#[test]
fn test_invalid_quantity_message() {
    let mut items = MealItems::new();
    let err = items.add(&rice(), 0.0).unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid quantity.");
}

#[test]
fn test_add_then_remove_returns_to_empty() {
    let mut items = MealItems::new();
    items.add(&rice(), 150.0).unwrap();
    items.remove(0).unwrap();

    let totals = items.totals();
    assert!(totals.is_zero());
    assert!(items.is_empty());
    assert_eq!(items.serialized(), "[]");
}

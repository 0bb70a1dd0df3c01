use crate::models::{FoodItem, LineItem, Totals};

pub const NO_MATCH_MESSAGE: &str = "No matching foods found.";

/// Display the search results panel.
pub fn display_results(foods: &[FoodItem]) {
    if foods.is_empty() {
        println!("{}", NO_MATCH_MESSAGE);
        return;
    }

    println!();
    for (i, food) in foods.iter().enumerate() {
        println!("{:>3}. {}", i + 1, food.summary());
    }
    println!();
}

/// Display the selected-food badge.
pub fn display_selected(food: &FoodItem) {
    println!(
        "Selected: {}  [C: {}g] [P: {}g] [F: {}g]",
        food.name, food.carbs, food.protein, food.fats
    );
}

/// Display the logged items as a table with a totals footer.
pub fn display_items_table(items: &[LineItem], totals: &Totals) {
    if items.is_empty() {
        println!("No items logged yet.");
        return;
    }

    let max_name_len = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    println!();
    println!("=== Logged Items ===");
    println!();

    for (i, item) in items.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} {:>7}g | C:{:>6.1}g P:{:>6.1}g F:{:>6.1}g",
            i + 1,
            item.name,
            item.qty,
            item.carbs,
            item.protein,
            item.fats,
            width = max_name_len
        );
    }

    println!();
    println!("--- Totals ---");
    println!(
        "Carbs: {:.1}g | Protein: {:.1}g | Fats: {:.1}g",
        totals.carbs, totals.protein, totals.fats
    );
    println!();
}

use dialoguer::{Confirm, Input, Select};

use crate::error::{LogError, Result};
use crate::models::{FoodItem, LineItem};

/// What the user wants to do next with the meal being logged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionAction {
    AddFood,
    RemoveItem,
    Finish,
}

/// Prompt for a search query. Empty input asks for the common-foods set.
pub fn prompt_query() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search foods (Enter for common foods)")
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Let the user pick one result, or none of them.
pub fn prompt_pick_result(foods: &[FoodItem]) -> Result<Option<usize>> {
    let mut options: Vec<String> = foods.iter().map(|f| f.summary()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Select a food")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < foods.len() {
        Ok(Some(selection))
    } else {
        Ok(None)
    }
}

/// Prompt for a quantity in grams. Range validation happens on add.
pub fn prompt_quantity() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Quantity (grams)")
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| LogError::InvalidQuantity)
}

/// Pick a line item to remove, or cancel.
pub fn prompt_remove_index(items: &[LineItem]) -> Result<Option<usize>> {
    let mut options: Vec<String> = items
        .iter()
        .map(|item| format!("{} ({}g)", item.name, item.qty))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Remove which item?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < items.len() {
        Ok(Some(selection))
    } else {
        Ok(None)
    }
}

/// Choose the next action for the meal.
pub fn prompt_action(has_items: bool) -> Result<SessionAction> {
    let mut options = vec!["Add a food"];
    if has_items {
        options.push("Remove an item");
    }
    options.push("Finish");

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match options[selection] {
        "Add a food" => SessionAction::AddFood,
        "Remove an item" => SessionAction::RemoveItem,
        _ => SessionAction::Finish,
    })
}

/// Direct macro entry for when no food was looked up.
pub fn prompt_manual_macros() -> Result<(f64, f64, f64)> {
    let read = |label: &str| -> Result<f64> {
        let input: String = Input::new()
            .with_prompt(label)
            .default("0".to_string())
            .interact_text()?;
        input
            .trim()
            .parse()
            .map_err(|_| LogError::InvalidInput("Invalid number".to_string()))
    };

    let carbs = read("Carbohydrates (g)")?;
    let protein = read("Protein (g)")?;
    let fats = read("Fats (g)")?;
    Ok((carbs, protein, fats))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::Parser;

use nutrition_logger_rs::cli::{Cli, Command};
use nutrition_logger_rs::error::{LogError, Result};
use nutrition_logger_rs::interface::{
    display_items_table, display_results, display_selected, prompt_action, prompt_manual_macros,
    prompt_pick_result, prompt_quantity, prompt_query, prompt_remove_index, prompt_yes_no,
    SessionAction,
};
use nutrition_logger_rs::items::MealItems;
use nutrition_logger_rs::search::{FoodSource, HttpFoodSource, LocalFoodSource, SearchSession};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or_default();
    let source = build_source(&cli)?;

    match command {
        Command::Log => cmd_log(&cli, source.as_ref()),
        Command::Search { query } => cmd_search(source.as_ref(), &query),
    }
}

fn build_source(cli: &Cli) -> Result<Box<dyn FoodSource>> {
    if let Some(endpoint) = &cli.endpoint {
        return Ok(Box::new(HttpFoodSource::new(endpoint.clone())));
    }

    if !Path::new(&cli.foods).exists() {
        return Err(LogError::InvalidInput(format!(
            "Food table not found: {} (provide --foods or --endpoint)",
            cli.foods
        )));
    }

    let source = LocalFoodSource::from_csv(&cli.foods)?;
    println!("Loaded {} foods from {}", source.len(), cli.foods);
    Ok(Box::new(source))
}

/// One-shot lookup, mostly useful for checking a food table or endpoint.
fn cmd_search(source: &dyn FoodSource, query: &str) -> Result<()> {
    let foods = source.search(query)?;
    display_results(&foods);
    Ok(())
}

/// Interactive meal logging: search, select, add, remove, finish.
fn cmd_log(cli: &Cli, source: &dyn FoodSource) -> Result<()> {
    // Direct macro entry is offered only while nothing is selected.
    let manual_entry = Rc::new(Cell::new(true));
    let toggle = Rc::clone(&manual_entry);

    let mut session = SearchSession::new(Duration::from_millis(cli.debounce_ms))
        .with_listener(Box::new(move |selected| toggle.set(!selected)));
    let mut items = MealItems::new();

    loop {
        match prompt_action(!items.is_empty())? {
            SessionAction::AddFood => add_food(&mut session, source, &mut items)?,
            SessionAction::RemoveItem => {
                if let Some(index) = prompt_remove_index(items.items())? {
                    let removed = items.remove(index)?;
                    println!("Removed {}", removed.name);
                    display_items_table(items.items(), &items.totals());
                }
            }
            SessionAction::Finish => break,
        }
    }

    if items.is_empty() && manual_entry.get() {
        let manual = prompt_yes_no("No items logged. Enter macros manually?", false)?;
        if manual {
            let (carbs, protein, fats) = prompt_manual_macros()?;
            println!(
                "Manual entry: C:{:.1}g P:{:.1}g F:{:.1}g",
                carbs, protein, fats
            );
        }
    }

    fs::write(&cli.output, items.serialized())?;
    println!("Wrote {} line item(s) to {}", items.len(), cli.output);
    Ok(())
}

/// Search until a food is selected, then take a quantity and add it.
fn add_food(
    session: &mut SearchSession,
    source: &dyn FoodSource,
    items: &mut MealItems,
) -> Result<()> {
    loop {
        if session.selected().is_none() && !search_and_select(session, source)? {
            return Ok(());
        }

        let qty = match prompt_quantity() {
            Ok(qty) => qty,
            Err(LogError::InvalidQuantity) => {
                println!("Please enter a valid quantity.");
                continue;
            }
            Err(e) => return Err(e),
        };

        match items.add_from_selection(session.selected(), qty) {
            Ok(added) => {
                println!("Added {} ({}g)", added.name, added.qty);
                session.clear();
                display_items_table(items.items(), &items.totals());
                return Ok(());
            }
            Err(e @ (LogError::NoFoodSelected | LogError::InvalidQuantity)) => {
                println!("{}", e);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Run the debounced search loop until a result is picked or the user
/// gives up. Returns whether a selection was made.
fn search_and_select(session: &mut SearchSession, source: &dyn FoodSource) -> Result<bool> {
    loop {
        let query = prompt_query()?;
        let now = Instant::now();

        if query.is_empty() {
            session.focus(now);
        } else {
            session.input(&query, now);
            // The whole query arrived as one line, so the quiet interval
            // has already passed from the session's point of view.
            session.flush(now);
        }

        while let Some(request) = session.next_request(Instant::now()) {
            session.complete(request.seq, source.search(&request.query));
        }

        let Some(results) = session.results() else {
            continue;
        };

        display_results(results);

        if results.is_empty() {
            session.dismiss();
            continue;
        }

        match prompt_pick_result(results)? {
            Some(index) => {
                let food = session.select(index)?;
                display_selected(food);
                return Ok(true);
            }
            None => {
                session.dismiss();
                if !prompt_yes_no("Search again?", true)? {
                    return Ok(false);
                }
            }
        }
    }
}

use clap::{Parser, Subcommand};

/// NutritionLogger — log a meal by searching foods and accumulating line items.
#[derive(Parser, Debug)]
#[command(name = "nutrition_logger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the food search service (e.g. http://localhost:8000/meals).
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Path to an offline food table CSV (name, carbs, protein, fats).
    /// Used when no endpoint is given.
    #[arg(long, default_value = "foods.csv")]
    pub foods: String,

    /// Quiet interval before a search fires, in milliseconds.
    #[arg(long, default_value_t = 300)]
    pub debounce_ms: u64,

    /// Where the serialized line items are written on finish.
    #[arg(short, long, default_value = "meal_items.json")]
    pub output: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log a meal interactively.
    Log,

    /// Run a one-shot food lookup and print the results.
    Search {
        /// Name fragment to search for; empty returns common foods.
        #[arg(default_value = "")]
        query: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Log
    }
}

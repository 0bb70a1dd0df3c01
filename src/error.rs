use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Please select a food item first.")]
    NoFoodSelected,

    #[error("Please enter a valid quantity.")]
    InvalidQuantity,

    #[error("No such line item: index {0}")]
    NoSuchItem(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Lookup error: {0}")]
    Lookup(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, LogError>;

pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_manual_macros, prompt_pick_result, prompt_quantity, prompt_query,
    prompt_remove_index, prompt_yes_no, SessionAction,
};
pub use render::{display_items_table, display_results, display_selected, NO_MATCH_MESSAGE};

use std::time::{Duration, Instant};

use crate::error::{LogError, Result};
use crate::models::FoodItem;
use crate::search::Debouncer;

/// The selection state machine: `Empty -> Selected` on a result pick,
/// back to `Empty` on clear or after a successful add.
#[derive(Debug, Clone)]
pub enum Selection {
    Empty,
    Selected(FoodItem),
}

/// A lookup the session wants issued, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupRequest {
    pub seq: u64,
    pub query: String,
}

/// Called with `true` when a food is selected and `false` when the
/// selection is cleared.
pub type SelectionListener = Box<dyn FnMut(bool)>;

/// Event-driven search state: debounced lookups, a results panel, one
/// selection, and a sequence guard discarding responses from superseded
/// requests.
pub struct SearchSession {
    debouncer: Debouncer,
    query: String,
    next_seq: u64,
    latest_seq: Option<u64>,
    results: Option<Vec<FoodItem>>,
    selection: Selection,
    listener: Option<SelectionListener>,
}

impl SearchSession {
    pub fn new(quiet: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(quiet),
            query: String::new(),
            next_seq: 0,
            latest_seq: None,
            results: None,
            selection: Selection::Empty,
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: SelectionListener) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Text typed into the search box. Schedules a debounced lookup,
    /// superseding any pending one. Any query length counts, including
    /// the empty string.
    pub fn input(&mut self, text: &str, now: Instant) {
        self.query = text.trim().to_string();
        self.debouncer.schedule(self.query.clone(), now);
    }

    /// Focus on an empty search box looks up the default set right away.
    /// With text in the box, focus changes nothing.
    pub fn focus(&mut self, now: Instant) {
        if self.query.is_empty() {
            self.debouncer.schedule_immediate(String::new(), now);
        }
    }

    /// Make the pending lookup due without waiting out the quiet interval.
    /// Line-based drivers call this after a whole query has been entered.
    pub fn flush(&mut self, now: Instant) {
        self.debouncer.flush(now);
    }

    /// The next lookup to issue, if one has become due.
    pub fn next_request(&mut self, now: Instant) -> Option<LookupRequest> {
        let query = self.debouncer.fire(now)?;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest_seq = Some(seq);
        Some(LookupRequest { seq, query })
    }

    /// A lookup finished. Responses from superseded requests are discarded;
    /// failures are logged and leave the panel in its prior state.
    pub fn complete(&mut self, seq: u64, outcome: Result<Vec<FoodItem>>) {
        if self.latest_seq != Some(seq) {
            log::debug!("Discarding stale lookup response (seq {})", seq);
            return;
        }

        match outcome {
            Ok(foods) => self.results = Some(foods),
            Err(err) => log::warn!("Error fetching foods: {}", err),
        }
    }

    /// The open results panel, if any. `Some(&[])` means the panel is open
    /// showing "No matching foods found."
    pub fn results(&self) -> Option<&[FoodItem]> {
        self.results.as_deref()
    }

    /// Pick a result from the open panel: caches it as the selection,
    /// closes the panel, and notifies the listener.
    pub fn select(&mut self, index: usize) -> Result<&FoodItem> {
        let results = self
            .results
            .as_ref()
            .ok_or_else(|| LogError::InvalidInput("No search results to select from".to_string()))?;
        let food = results
            .get(index)
            .ok_or_else(|| LogError::InvalidInput(format!("No search result at index {}", index)))?
            .clone();

        self.selection = Selection::Selected(food);
        self.results = None;
        self.query.clear();
        self.debouncer.cancel();
        self.notify(true);

        match &self.selection {
            Selection::Selected(food) => Ok(food),
            Selection::Empty => unreachable!(),
        }
    }

    /// Reset to the empty, search-visible state.
    pub fn clear(&mut self) {
        self.selection = Selection::Empty;
        self.results = None;
        self.query.clear();
        self.debouncer.cancel();
        self.notify(false);
    }

    /// Close an open results panel without touching the selection
    /// (the click-outside behavior).
    pub fn dismiss(&mut self) {
        self.results = None;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected(&self) -> Option<&FoodItem> {
        match &self.selection {
            Selection::Selected(food) => Some(food),
            Selection::Empty => None,
        }
    }

    fn notify(&mut self, selected: bool) {
        if let Some(listener) = &mut self.listener {
            listener(selected);
        }
    }
}

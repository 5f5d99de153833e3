use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::direction::{EnabledDirections, DIRECTIONS};
use crate::errors::WordSearchError;
use crate::grid::Cell;
use crate::log::init_logger;
use crate::session::{Session, REVEAL_DURATION};

/// Structured error information for JavaScript consumers
#[derive(Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<WordSearchError> for WasmError {
    fn from(e: WordSearchError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(what: &str, e: &serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: "WASM001".to_string(),
        message: format!("serialization failed: {e}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

fn to_js<T: Serialize>(what: &str, value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| serialization_error(what, &e))
}

/// Initialize logging and the panic hook.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(Serialize)]
struct DirectionInfo {
    id: &'static str,
    label: &'static str,
    direction: [isize; 2],
}

/// The direction catalog as `{ id, label, direction: [dRow, dCol] }[]`.
#[wasm_bindgen]
pub fn direction_catalog() -> Result<JsValue, JsValue> {
    let catalog: Vec<DirectionInfo> = DIRECTIONS
        .iter()
        .map(|d| DirectionInfo { id: d.id, label: d.label, direction: [d.d_row, d.d_col] })
        .collect();
    to_js("direction catalog", &catalog)
}

/// Milliseconds a revealed word stays highlighted; pair with `setTimeout` and `expire_reveal`.
#[wasm_bindgen]
pub fn reveal_duration_ms() -> u32 {
    u32::try_from(REVEAL_DURATION.as_millis()).unwrap_or(u32::MAX)
}

/// One player's session, owned by the JS side.
#[wasm_bindgen]
pub struct WasmSession {
    inner: Session,
}

impl Default for WasmSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSession {
        WasmSession { inner: Session::new() }
    }

    pub fn add_word(&mut self, word: &str) -> bool {
        self.inner.add_word(word)
    }

    pub fn remove_word(&mut self, word: &str) -> bool {
        self.inner.remove_word(word)
    }

    /// `string[]` in entry order.
    pub fn words(&self) -> Result<JsValue, JsValue> {
        to_js("word list", &self.inner.words())
    }

    pub fn grid_size(&self) -> usize {
        self.inner.grid_size()
    }

    pub fn set_grid_size(&mut self, size: usize) -> usize {
        self.inner.set_grid_size(size)
    }

    /// `{ [id]: boolean }`.
    pub fn directions(&self) -> Result<JsValue, JsValue> {
        to_js("direction set", self.inner.directions())
    }

    pub fn toggle_direction(&mut self, id: &str) -> Result<bool, JsValue> {
        self.inner
            .toggle_direction(id)
            .map_err(|e| WasmError::from(e).into())
    }

    /// Replace the enabled set with exactly `ids`, e.g. when restoring saved settings.
    pub fn set_directions(&mut self, ids: Vec<String>) -> Result<(), JsValue> {
        let directions = EnabledDirections::from_ids(&ids).map_err(WasmError::from)?;
        self.inner.set_directions(directions);
        Ok(())
    }

    pub fn toggle_all_directions(&mut self) {
        self.inner.toggle_all_directions();
    }

    /// Whether the Generate button should be enabled.
    pub fn can_generate(&self) -> bool {
        self.inner.can_generate().is_ok()
    }

    /// Generate a puzzle; returns `{ grid, placed_words, unplaced_words }`.
    ///
    /// Pass a seed for a reproducible puzzle, or nothing for a fresh one.
    pub fn generate(&mut self, seed: Option<u64>) -> Result<JsValue, JsValue> {
        let seed = seed.unwrap_or_else(rand::random);
        let puzzle = self
            .inner
            .generate_with_seed(seed)
            .map_err(WasmError::from)?;
        to_js("puzzle", puzzle)
    }

    /// `string[]` rows, or `null` outside a puzzle.
    pub fn grid(&self) -> Result<JsValue, JsValue> {
        to_js("grid", &self.inner.grid())
    }

    pub fn placed_words(&self) -> Result<JsValue, JsValue> {
        to_js("placed words", &self.inner.placed_words())
    }

    pub fn begin_selection(&mut self, row: usize, col: usize) {
        self.inner.begin_selection(Cell::new(row, col));
    }

    pub fn update_selection(&mut self, row: usize, col: usize) {
        self.inner.update_selection(Cell::new(row, col));
    }

    /// Release; returns the words newly found as `string[]`.
    pub fn end_selection(&mut self) -> Result<JsValue, JsValue> {
        let found = self.inner.end_selection();
        to_js("found words", &found)
    }

    pub fn leave_grid(&mut self) {
        self.inner.leave_grid();
    }

    pub fn selection(&self) -> Result<JsValue, JsValue> {
        to_js("selection", &self.inner.selection())
    }

    /// Start a reveal; returns the ticket generation to hand to `expire_reveal`, or `undefined`.
    pub fn reveal_word(&mut self, word: &str) -> Option<u64> {
        self.inner
            .reveal_word(word, instant::Instant::now())
            .map(|ticket| ticket.generation)
    }

    pub fn revealed_word(&self) -> Option<String> {
        self.inner.revealed_word().map(str::to_string)
    }

    /// Timer callback for a reveal; stale generations are ignored.
    pub fn expire_reveal(&mut self, generation: u64) -> bool {
        self.inner.expire_reveal_generation(generation)
    }

    /// Clear the reveal if its time is up (for hosts that poll on animation frames).
    pub fn poll_reveal(&mut self) -> bool {
        self.inner.poll_reveal(instant::Instant::now())
    }

    /// `{ found, total }`.
    pub fn progress(&self) -> Result<JsValue, JsValue> {
        to_js("progress", &self.inner.progress())
    }

    pub fn is_complete(&self) -> bool {
        self.inner.progress().is_complete()
    }

    /// `"selected" | "revealed" | "found" | "plain"`.
    pub fn cell_state(&self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        to_js("cell state", &self.inner.cell_state(Cell::new(row, col)))
    }

    pub fn reset_session(&mut self) {
        self.inner.reset_session();
    }
}

/// Generate a debug report for troubleshooting.
///
/// Users copy/paste this when reporting issues.
#[wasm_bindgen]
pub fn get_debug_info(error_message: &str, word_count: usize, grid_size: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // writing to a String never fails
    let _ = writeln!(&mut report, "=== WORDSEARCH DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let generated = js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_else(|| "unknown".to_string());
    let _ = writeln!(&mut report, "Generated: {generated}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Word Count: {word_count}");
    let _ = writeln!(&mut report, "Grid Size: {grid_size}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
        let location = window
            .location()
            .href()
            .unwrap_or_else(|_| "unknown".to_string());
        let _ = writeln!(&mut report, "Location: {location}");
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_arch = "wasm32")]
    fn test_get_debug_info_structure() {
        let report = get_debug_info("cannot generate", 3, 15);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=== WORDSEARCH DEBUG REPORT ===");
        assert!(lines[1].starts_with("Version: "));
        assert!(lines[2].starts_with("Generated: "));
        assert_eq!(lines[4], "## Error");
        assert_eq!(lines[5], "cannot generate");
        assert_eq!(lines[7], "## Input");
        assert_eq!(lines[8], "Word Count: 3");
        assert_eq!(lines[9], "Grid Size: 15");
        assert_eq!(lines.last(), Some(&"=== END DEBUG REPORT ==="));
    }

    #[test]
    fn test_wasm_error_carries_code_and_help() {
        let e = WasmError::from(WordSearchError::NoDirectionsEnabled);
        assert_eq!(e.code, "E002");
        assert!(e.help.is_some());
        assert!(!e.details.is_empty());
    }

    #[test]
    fn test_reveal_duration_ms() {
        assert_eq!(reveal_duration_ms(), 2_000);
    }
}

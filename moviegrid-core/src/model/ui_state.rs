//! src/model/ui_state.rs
//! ============================================================================
//! # UI State
//!
//! The single source of truth for what is visible. `UIMode` is owned and
//! mutated exclusively by the search state machine, `OverlayState` by the
//! overlay controller; everything else here is input/selection bookkeeping
//! for the shell. The renderer only ever reads this state, so the rendered
//! surface at any instant reflects exactly one mode.

use compact_str::CompactString;

use crate::catalog::types::{DetailRecord, ResultSet};

/// Number of cards per grid row.
pub const GRID_COLS: usize = 4;

/// UI operation modes. Exactly one is in force at any instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UIMode {
    #[default]
    Idle,
    Searching,
    Error(CompactString),
    Populated(ResultSet),
}

/// Detail overlay lifecycle. Transitions are independent of search cycles
/// and may outlive or be outlived by a `ResultSet`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open(DetailRecord),
}

/// Which surface receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SearchBar,
    Grid,
}

/// Input and selection bookkeeping for the shell.
#[derive(Debug, Clone)]
pub struct UIState {
    pub focus: Focus,

    // Search input with cursor
    pub input: CompactString,
    pub input_cursor: usize,

    // Grid selection
    pub selected: usize,

    // Background animation frame counter, advanced by ticks only while the
    // animation is active.
    pub anim_frame: u64,

    pub needs_redraw: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}

impl UIState {
    pub fn new() -> Self {
        Self {
            focus: Focus::SearchBar,
            input: CompactString::new(""),
            input_cursor: 0,
            selected: 0,
            anim_frame: 0,
            needs_redraw: true,
        }
    }

    #[inline]
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    #[inline]
    pub fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    /// Whether the submit affordance is enabled. Mirrors the input-layer
    /// check; the state machine re-validates on submission.
    pub fn can_submit(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn clear_input(&mut self) {
        self.input = CompactString::new("");
        self.input_cursor = 0;
        self.request_redraw();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut input_str = self.input.to_string();
        input_str.insert(self.input_cursor, ch);
        self.input = input_str.into();
        self.input_cursor += ch.len_utf8();
        self.request_redraw();
    }

    pub fn delete_char_before(&mut self) -> bool {
        if self.input_cursor > 0 {
            let mut input_str = self.input.to_string();
            if let Some((char_pos, _)) = input_str
                .char_indices()
                .rev()
                .find(|(pos, _)| *pos < self.input_cursor)
            {
                input_str.remove(char_pos);
                self.input = input_str.into();
                self.input_cursor = char_pos;
                self.request_redraw();
                return true;
            }
        }
        false
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::SearchBar => Focus::Grid,
            Focus::Grid => Focus::SearchBar,
        };
        self.request_redraw();
    }

    /// Move the grid selection by `delta` cards, clamped to `len`.
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        if next != current {
            self.selected = next as usize;
            self.request_redraw();
        }
    }

    pub fn reset_selection(&mut self) {
        self.selected = 0;
        self.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_editing_tracks_cursor() {
        let mut ui = UIState::new();
        for ch in "dune".chars() {
            ui.insert_char(ch);
        }
        assert_eq!(ui.input, "dune");
        assert_eq!(ui.input_cursor, 4);

        assert!(ui.delete_char_before());
        assert_eq!(ui.input, "dun");
        assert_eq!(ui.input_cursor, 3);
    }

    #[test]
    fn delete_on_empty_input_is_a_noop() {
        let mut ui = UIState::new();
        assert!(!ui.delete_char_before());
    }

    #[test]
    fn submit_affordance_disabled_for_whitespace() {
        let mut ui = UIState::new();
        assert!(!ui.can_submit());
        ui.insert_char(' ');
        assert!(!ui.can_submit());
        ui.insert_char('x');
        assert!(ui.can_submit());
    }

    #[test]
    fn selection_clamps_to_result_count() {
        let mut ui = UIState::new();
        ui.move_selection(10, 3);
        assert_eq!(ui.selected, 2);
        ui.move_selection(-10, 3);
        assert_eq!(ui.selected, 0);
        ui.move_selection(1, 0);
        assert_eq!(ui.selected, 0);
    }
}

//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::constants::SENDING_PLACEHOLDER;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{CollectionEntry, Header};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    pub fn focus_collections(&mut self) {
        self.active_panel = Panel::Collections;
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // HTTP Method
    // ========================

    pub fn cycle_method(&mut self) {
        if !self.is_loading {
            self.request.method = self.request.method.next();
        }
    }

    // ========================
    // Response scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.response_scroll = self.response_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.response_scroll = self.response_scroll.saturating_add(1);
    }

    // ========================
    // Headers
    // ========================

    pub fn next_header(&mut self) {
        if !self.request.headers.is_empty() {
            self.selected_header = (self.selected_header + 1) % self.request.headers.len();
        }
    }

    pub fn prev_header(&mut self) {
        if !self.request.headers.is_empty() {
            self.selected_header = self
                .selected_header
                .checked_sub(1)
                .unwrap_or(self.request.headers.len() - 1);
        }
    }

    pub fn add_header(&mut self) {
        self.request.headers.push(Header::new("X-Custom", "value"));
        self.selected_header = self.request.headers.len() - 1;
    }

    pub fn delete_header(&mut self) {
        if !self.request.headers.is_empty() {
            self.request.headers.remove(self.selected_header);
            if self.selected_header > 0 {
                self.selected_header -= 1;
            }
        }
    }

    // ========================
    // Collections
    // ========================

    pub fn next_collection(&mut self) {
        if !self.store.is_empty() {
            self.selected_collection = (self.selected_collection + 1) % self.store.len();
        }
    }

    pub fn prev_collection(&mut self) {
        if !self.store.is_empty() {
            self.selected_collection = self
                .selected_collection
                .checked_sub(1)
                .unwrap_or(self.store.len() - 1);
        }
    }

    /// Copy the selected entry's fields into the request
    pub fn select_collection(&mut self) {
        let entry = self.store.get(self.selected_collection).cloned();
        if let Some(entry) = entry {
            self.load_entry(&entry);
            self.active_panel = Panel::Url;
        }
    }

    fn load_entry(&mut self, entry: &CollectionEntry) {
        self.request = entry.to_request();
        self.cursor_position = self.request.url.len();
        self.selected_header = 0;

        self.response.body = format!("Loaded '{}'", entry.name);
        self.response.status_code = None;
        self.response.time_ms = 0;
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Request sending
    // ========================

    /// Start a send: non-blocking, returns the command for the network layer.
    ///
    /// Flips `is_loading` (disabling the send affordance) and shows the
    /// sending placeholder. Returns `None` while a request is already in
    /// flight, so at most one terminal update is ever pending.
    pub fn prepare_request(&mut self) -> Option<NetworkCommand> {
        if self.is_loading {
            return None;
        }

        self.is_loading = true;
        self.response.body = String::from(SENDING_PLACEHOLDER);
        self.response.status_code = None;

        let id = self.next_id();
        self.pending_request_id = Some(id);

        Some(NetworkCommand::ExecuteRequest {
            id,
            request: self.request.clone(),
        })
    }

    // ========================
    // Response handling
    // ========================

    /// Apply the terminal update for a completed send.
    ///
    /// Responses whose id does not match the pending request are dropped,
    /// so each submit gets exactly one terminal update.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            return;
        }

        match response {
            NetworkResponse::Completed { status, body, time_ms, .. } => {
                self.response.status_code = Some(status);
                self.response.body = body;
                self.response.time_ms = time_ms;
            }
            NetworkResponse::Failed { body, time_ms, .. } => {
                self.response.status_code = None;
                self.response.body = body;
                self.response.time_ms = time_ms;
            }
        }

        self.finalize_request();
    }

    /// Finalize a completed request (re-enable sending, reset scroll)
    fn finalize_request(&mut self) {
        self.is_loading = false;
        self.pending_request_id = None;
        self.response_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HttpMethod;
    use crate::storage::CollectionStore;
    use std::fs;
    use tempfile::tempdir;

    fn state() -> AppState {
        let dir = tempdir().unwrap();
        AppState::new(CollectionStore::open_at(dir.path()).unwrap())
    }

    fn pending_id(state: &AppState) -> u64 {
        state.pending_request_id.expect("a request should be pending")
    }

    #[test]
    fn test_prepare_request_enters_sending_state() {
        let mut state = state();
        let cmd = state.prepare_request();

        assert!(matches!(cmd, Some(NetworkCommand::ExecuteRequest { .. })));
        assert!(state.is_loading);
        assert!(state.pending_request_id.is_some());
        assert_eq!(state.response.body, SENDING_PLACEHOLDER);
        assert_eq!(state.response.status_code, None);
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut state = state();
        assert!(state.prepare_request().is_some());
        assert!(state.prepare_request().is_none());
    }

    #[test]
    fn test_submitted_request_is_a_snapshot() {
        let mut state = state();
        state.request.url = String::from("https://example.com/a");
        let cmd = state.prepare_request().unwrap();

        // Edits after submit must not affect the in-flight request
        state.request.url = String::from("https://example.com/b");

        let NetworkCommand::ExecuteRequest { request, .. } = cmd else {
            panic!("expected an execute command");
        };
        assert_eq!(request.url, "https://example.com/a");
    }

    #[test]
    fn test_completed_response_reenables_send() {
        let mut state = state();
        state.prepare_request();
        let id = pending_id(&state);

        state.handle_response(NetworkResponse::Completed {
            id,
            status: 200,
            body: String::from(r#"{"ok":true}"#),
            time_ms: 12,
        });

        assert!(!state.is_loading);
        assert_eq!(state.pending_request_id, None);
        assert_eq!(state.response.status_code, Some(200));
        assert_eq!(state.response.body, r#"{"ok":true}"#);
        assert_eq!(state.response.time_ms, 12);
    }

    #[test]
    fn test_failed_response_shows_empty_body() {
        let mut state = state();
        state.prepare_request();
        let id = pending_id(&state);

        state.handle_response(NetworkResponse::Failed {
            id,
            body: String::new(),
            time_ms: 5,
        });

        assert!(!state.is_loading);
        assert_eq!(state.response.status_code, None);
        assert_eq!(state.response.body, "");
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = state();
        state.prepare_request();
        let id = pending_id(&state);

        state.handle_response(NetworkResponse::Completed {
            id: id + 1,
            status: 200,
            body: String::from("stale"),
            time_ms: 1,
        });

        assert!(state.is_loading, "a stale response must not finalize the send");
        assert_eq!(state.response.body, SENDING_PLACEHOLDER);
    }

    #[test]
    fn test_exactly_one_terminal_update() {
        let mut state = state();
        state.prepare_request();
        let id = pending_id(&state);

        state.handle_response(NetworkResponse::Completed {
            id,
            status: 200,
            body: String::from("first"),
            time_ms: 1,
        });
        state.handle_response(NetworkResponse::Completed {
            id,
            status: 500,
            body: String::from("second"),
            time_ms: 2,
        });

        assert_eq!(state.response.status_code, Some(200));
        assert_eq!(state.response.body, "first");
    }

    #[test]
    fn test_cycle_method_preserves_other_fields() {
        let mut state = state();
        state.request.url = String::from("https://example.com");
        state.request.body = String::from(r#"{"a":1}"#);
        let headers = state.request.headers.clone();

        state.cycle_method();

        assert_eq!(state.request.method, HttpMethod::POST);
        assert_eq!(state.request.url, "https://example.com");
        assert_eq!(state.request.body, r#"{"a":1}"#);
        assert_eq!(state.request.headers, headers);
    }

    #[test]
    fn test_cycle_method_blocked_while_sending() {
        let mut state = state();
        state.prepare_request();
        state.cycle_method();
        assert_eq!(state.request.method, HttpMethod::GET);
    }

    #[test]
    fn test_add_and_delete_header() {
        let mut state = state();
        let initial = state.request.headers.len();

        state.add_header();
        assert_eq!(state.request.headers.len(), initial + 1);
        assert_eq!(state.selected_header, initial);

        state.delete_header();
        assert_eq!(state.request.headers.len(), initial);
    }

    #[test]
    fn test_select_collection_loads_fields() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("users.json"),
            r#"{
                "name": "create user",
                "method": "POST",
                "url": "https://api.example.com/users",
                "body": "{\"name\":\"ada\"}",
                "headers": {"Accept": "application/json"}
            }"#,
        )
        .unwrap();

        let mut state = AppState::new(CollectionStore::open_at(dir.path()).unwrap());
        state.focus_collections();
        state.select_collection();

        assert_eq!(state.request.method, HttpMethod::POST);
        assert_eq!(state.request.url, "https://api.example.com/users");
        assert_eq!(state.request.body, r#"{"name":"ada"}"#);
        assert_eq!(state.request.headers, vec![Header::new("Accept", "application/json")]);
        assert_eq!(state.active_panel, Panel::Url);
    }
}

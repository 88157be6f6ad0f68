//! App state - pure data structure with no I/O logic

use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::{Request, Response};
use crate::storage::CollectionStore;

/// Main application state - pure data, no I/O
///
/// Widget-free by design: the UI only ever sees the [`RenderState`]
/// snapshot produced by [`AppState::to_render_state`].
pub struct AppState {
    // Request data
    pub request: Request,
    pub cursor_position: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub response_scroll: u16,

    // Response
    pub response: Response,
    pub is_loading: bool,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Headers panel
    pub selected_header: usize,

    // Collections (persisted data)
    pub store: CollectionStore,
    pub selected_collection: usize,

    // Popups
    pub show_help: bool,
}

impl AppState {
    pub fn new(store: CollectionStore) -> Self {
        let request = Request::default();
        AppState {
            cursor_position: request.url.len(),
            request,
            active_panel: Panel::Url,
            input_mode: InputMode::Normal,
            response_scroll: 0,
            response: Response::default(),
            is_loading: false,
            next_request_id: 1,
            pending_request_id: None,
            selected_header: 0,
            store,
            selected_collection: 0,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_panel {
            Panel::Url => &self.request.url,
            Panel::Body => &self.request.body,
            _ => "",
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.active_panel {
            Panel::Body => &mut self.request.body,
            _ => &mut self.request.url,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            method: self.request.method,
            url: self.request.url.clone(),
            body: self.request.body.clone(),
            headers: self.request.headers.clone(),
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            response: self.response.clone(),
            response_scroll: self.response_scroll,
            is_loading: self.is_loading,
            selected_header: self.selected_header,
            collections: self.store.entries().to_vec(),
            selected_collection: self.selected_collection,
            show_help: self.show_help,
        }
    }
}

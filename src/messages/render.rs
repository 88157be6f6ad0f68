//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{InputMode, Panel};
use crate::models::{CollectionEntry, Header, HttpMethod, Response};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    // Request data
    pub method: HttpMethod,
    pub url: String,
    pub body: String,
    pub headers: Vec<Header>,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Response
    pub response: Response,
    pub response_scroll: u16,
    pub is_loading: bool,

    // Headers panel
    pub selected_header: usize,

    // Collections panel
    pub collections: Vec<CollectionEntry>,
    pub selected_collection: usize,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        let request = crate::models::Request::default();
        RenderState {
            method: request.method,
            cursor_position: request.url.len(),
            url: request.url,
            body: request.body,
            headers: request.headers,
            active_panel: Panel::Url,
            input_mode: InputMode::Normal,
            response: Response::default(),
            response_scroll: 0,
            is_loading: false,
            selected_header: 0,
            collections: Vec::new(),
            selected_collection: 0,
            show_help: false,
        }
    }
}

//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppMessage`] - Results reported back by spawned view loads
//! - [`Mutation`] - A server write that precedes a re-render
//!
//! The app owns the session, the navigation stack and the screen. Views run
//! on spawned tasks; only the latest load may change what is shown.

mod actions;
mod handlers;
mod keys;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use actions::INVALID_ID_ALERT;
pub use types::Mutation;

use crate::api::ApiClient;
use crate::domain::{Route, Session};
use crate::host::HostBridge;
use crate::navigation::NavigationStack;
use crate::startup::AppConfig;
use crate::views::{Binding, Screen};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Main application state
pub struct App {
    /// Who is signed in, once the main menu loaded
    pub session: Option<Session>,
    /// Routes visited, newest last
    pub nav: NavigationStack<Route>,
    /// What is on screen
    pub screen: Screen,
    /// Index into the current screen's targets
    pub selected: usize,
    /// Set when the user asked to leave
    pub should_quit: bool,
    /// A mutation is in flight and the previous page is still shown
    pub busy: bool,
    /// Dirty flag: set on state changes, cleared after each draw
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    api: ApiClient,
    host: Box<dyn HostBridge>,
    pending: Option<JoinHandle<()>>,
    generation: u64,
    /// Route to drop from the stack once the running mutation succeeds
    leaving: Option<Route>,
    /// Set when a load panicked; the event loop ends the session with it
    failure: Option<String>,
}

impl App {
    pub fn new(api: ApiClient, host: Box<dyn HostBridge>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            session: None,
            nav: NavigationStack::new(),
            screen: Screen::loading(Route::MainMenu.loading_title()),
            selected: 0,
            should_quit: false,
            busy: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
            api,
            host,
            pending: None,
            generation: 0,
            leaving: None,
            failure: None,
        }
    }

    /// Build an app whose API client uses the host's session proof.
    pub fn with_config(config: &AppConfig, host: Box<dyn HostBridge>) -> Self {
        let api = ApiClient::with_timeout(
            config.api_url.clone(),
            host.init_data(),
            config.request_timeout,
        );
        Self::new(api, host)
    }

    /// Initialize the host and show the main menu.
    pub fn start(&mut self) {
        self.host.ready();
        self.host.expand();
        tracing::info!(platform = self.host.platform(), "Starting session");
        self.navigate_to(Route::MainMenu);
    }

    pub fn host(&self) -> &dyn HostBridge {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> &mut dyn HostBridge {
        self.host.as_mut()
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Generation of the most recently started load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a load is still running.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Selectable bindings of the current screen.
    pub fn targets(&self) -> Vec<Binding> {
        self.screen.targets()
    }

    /// The binding under the cursor.
    pub fn selected_target(&self) -> Option<Binding> {
        self.targets().into_iter().nth(self.selected)
    }

    /// The failure that ended this session, if any. Taken once.
    pub fn take_failure(&mut self) -> Option<String> {
        self.failure.take()
    }

    pub fn take_message_rx(&mut self) -> Option<mpsc::UnboundedReceiver<AppMessage>> {
        self.message_rx.take()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations. Only a visible spinner needs a redraw.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.screen.is_loading() || self.busy {
            self.mark_dirty();
        }
    }

    /// Wait for the running load and apply its result.
    ///
    /// Only usable while the app still owns its message receiver.
    pub async fn settle(&mut self) {
        while let Some(handle) = self.pending.take() {
            if let Err(e) = handle.await {
                tracing::debug!("Load task ended without reporting: {}", e);
            }
            self.drain_messages();
        }
    }

    /// Apply every message already waiting in the receiver.
    pub fn drain_messages(&mut self) {
        let mut received = Vec::new();
        if let Some(rx) = self.message_rx.as_mut() {
            while let Ok(msg) = rx.try_recv() {
                received.push(msg);
            }
        }
        for msg in received {
            self.handle_message(msg);
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

//! Message handling for the App.

use super::{App, AppMessage};
use crate::views::{ErrorPage, Screen};
use tracing::{debug, error, warn};

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::ViewLoaded {
                generation,
                route,
                result,
                notice,
            } => {
                if generation != self.generation {
                    debug!(
                        "Discarding stale result for {} (generation {}, current {})",
                        route, generation, self.generation
                    );
                    return;
                }
                self.pending = None;
                self.busy = false;
                self.mark_dirty();
                let leaving = self.leaving.take();

                match result {
                    Ok(rendered) => {
                        if let Some(leaving) = leaving {
                            if self.nav.top() == Some(&leaving) {
                                self.nav.pop();
                            }
                            self.nav.push_unless_top(route.clone());
                        }
                        if let Some(session) = rendered.session {
                            self.session = Some(session);
                        }
                        debug!("Rendered {}", route);
                        self.screen = Screen::Page(rendered.page);
                    }
                    Err(e) => {
                        warn!(category = %e.category(), "Loading {} failed: {}", route, e);
                        self.screen = Screen::Error(ErrorPage::from(&e));
                    }
                }
                self.selected = 0;

                if let Some(notice) = notice {
                    self.host.show_alert(&notice);
                }
            }

            AppMessage::LoadPanicked {
                generation,
                route,
                message,
            } => {
                if generation != self.generation {
                    debug!("Discarding stale panic from {}: {}", route, message);
                    return;
                }
                if let Some(handle) = self.pending.take() {
                    handle.abort();
                }
                self.busy = false;
                self.leaving = None;
                self.selected = 0;
                self.mark_dirty();

                error!("Loading {} panicked: {}", route, message);
                let failure = format!("Loading {} panicked: {}", route, message);
                self.screen = Screen::Error(ErrorPage::new("Something went wrong", failure.clone()));
                self.failure = Some(failure);
            }
        }
    }
}

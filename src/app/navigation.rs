//! Navigation methods for the App.

use super::messages::panic_message;
use super::{App, AppMessage, Mutation};
use crate::domain::Route;
use crate::views::{self, Screen};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tracing::debug;

impl App {
    /// Show `route`, unless it is already on top of the stack.
    pub fn navigate_to(&mut self, route: Route) {
        if self.nav.push_unless_top(route.clone()) {
            debug!(depth = self.nav.len(), "Navigating to {}", route);
            self.load(route, None);
        }
    }

    /// Return to the previous route and render it again.
    ///
    /// With nothing left to go back to, the main menu is shown.
    pub fn go_back(&mut self) {
        match self.nav.pop().cloned() {
            Some(route) => {
                debug!(depth = self.nav.len(), "Back to {}", route);
                self.load(route, None);
            }
            None => self.navigate_to(Route::MainMenu),
        }
    }

    /// Drop the history and the session and start again from the main menu.
    pub fn reload(&mut self) {
        debug!("Reloading from the main menu");
        self.nav.clear();
        self.session = None;
        self.navigate_to(Route::MainMenu);
    }

    /// The route on top of the stack, or the main menu.
    pub fn current_route(&self) -> Route {
        self.nav.top().cloned().unwrap_or(Route::MainMenu)
    }

    /// Apply `mutation`, then render the current route again.
    pub(crate) fn mutate(&mut self, mutation: Mutation) {
        if self.nav.is_empty() {
            self.nav.push_unless_top(Route::MainMenu);
        }
        let route = self.current_route();
        self.load(route, Some(mutation));
    }

    /// Apply `mutation`, then leave `route` for the entry below it.
    ///
    /// `route` stays on the stack until the mutation succeeds, so going back
    /// while it runs still removes the page being shown. When `route` is not
    /// on top this is a plain [`App::mutate`].
    pub(crate) fn mutate_and_leave(&mut self, mutation: Mutation, route: Route) {
        if self.nav.top() != Some(&route) {
            self.mutate(mutation);
            return;
        }
        let below = self
            .nav
            .iter()
            .rev()
            .nth(1)
            .cloned()
            .unwrap_or(Route::MainMenu);
        self.load(below, Some(mutation));
        self.leaving = Some(route);
    }

    /// Start rendering `route` on a background task.
    ///
    /// Any load still running is aborted. A plain load puts a placeholder on
    /// screen; a load behind a mutation keeps the current page until the
    /// result arrives.
    pub(crate) fn load(&mut self, route: Route, mutation: Option<Mutation>) {
        self.generation += 1;
        self.leaving = None;
        let generation = self.generation;
        if let Some(handle) = self.pending.take() {
            debug!("Aborting load superseded by generation {}", generation);
            handle.abort();
        }

        match &mutation {
            Some(m) => {
                debug!(mutation = m.name(), "Applying before rendering {}", route);
                self.busy = true;
            }
            None => {
                self.busy = false;
                self.screen = Screen::loading(route.loading_title());
                self.selected = 0;
            }
        }
        self.mark_dirty();

        let api = self.api.clone();
        let session = self.session.clone();
        let tx = self.message_tx.clone();
        self.pending = Some(tokio::spawn(async move {
            let work = async {
                match &mutation {
                    Some(m) => match m.apply(&api).await {
                        Ok(notice) => views::render_route(&api, session.as_ref(), &route)
                            .await
                            .map(|rendered| (rendered, notice)),
                        Err(e) => Err(e),
                    },
                    None => views::render_route(&api, session.as_ref(), &route)
                        .await
                        .map(|rendered| (rendered, None)),
                }
            };

            let outcome = AssertUnwindSafe(work).catch_unwind().await;
            let msg = match outcome {
                Ok(Ok((rendered, notice))) => AppMessage::ViewLoaded {
                    generation,
                    route,
                    result: Ok(rendered),
                    notice,
                },
                Ok(Err(e)) => AppMessage::ViewLoaded {
                    generation,
                    route,
                    result: Err(e),
                    notice: None,
                },
                Err(payload) => AppMessage::LoadPanicked {
                    generation,
                    route,
                    message: panic_message(payload.as_ref()),
                },
            };
            let _ = tx.send(msg);
        }));
    }
}

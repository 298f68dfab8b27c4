//! Domain objects for the Pals client.
//!
//! These types carry no I/O and are shared by the API client, the views and
//! the application state.
//!
//! ## Domain Objects
//!
//! - [`UniqueId`] - The 8-digit public identifier of a user
//! - [`Route`] - A navigation entry: which view to show, with its arguments
//! - [`Relation`] - How a viewed user relates to the session user
//! - [`Action`] - Everything a binding on screen can trigger
//! - [`Session`] - Who the session user is

pub mod action;
pub mod relation;
pub mod route;
pub mod session;
pub mod uid;

pub use action::{Action, RelationAction};
pub use relation::{Relation, RelationFlags};
pub use route::{Route, ViewKind};
pub use session::Session;
pub use uid::{SearchInput, UniqueId};

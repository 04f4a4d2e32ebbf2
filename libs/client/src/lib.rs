//! Client library for the FrameHub application
//!
//! This crate provides the pieces shared by every FrameHub front-end surface:
//! the session store holding the access/refresh credential pair, the
//! authenticated backend client with transparent token refresh, the typed
//! facades over the backend resources (favorites, watchlist, history,
//! friends, comments, users), and the read-only facade over the external
//! metadata catalog.

pub mod backend;
pub mod error;
pub mod http;
pub mod models;
pub mod normalize;
pub mod optimistic;
pub mod session;
pub mod tmdb;
pub mod validation;

pub use error::{ClientError, ClientResult};
pub use session::{SessionEvent, SessionStore, SessionTokens};

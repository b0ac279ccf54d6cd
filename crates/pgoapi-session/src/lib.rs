//! Session state for the pgoapi batch client.
//!
//! Two pieces of process-wide state feed into every batch:
//!
//! 1. **Authentication** ([`AuthState`], [`AuthSession`]): whether the
//!    client holds a usable access ticket. The dispatcher refuses to send
//!    without one.
//! 2. **Location** ([`LocationState`], [`SharedLocation`]): where the
//!    player currently stands. Location-aware builders read it when they
//!    build their payload.
//!
//! Both are shared behind `Arc` and mutated by code outside the batch
//! layer (login flows, movement).

mod auth;
mod error;
mod location;

pub use auth::{AuthProvider, AuthSession, AuthState, AuthTicket};
pub use error::SessionError;
pub use location::{LocationState, SharedLocation};

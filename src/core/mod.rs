//! Core module - infrastructure shared across the application:
//! authentication, configuration, errors, authorization policy, state.

pub mod auth;
pub mod config;
pub mod error;
pub mod policy;
pub mod state;

pub use auth::{Claims, authentication_middleware, decode_jwt, encode_jwt};
pub use config::Config;
pub use error::{AppError, InvitationError};
pub use policy::InvitationPolicy;
pub use state::AppState;

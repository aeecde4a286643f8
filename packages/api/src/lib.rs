//! # API crate — typed access to the LiftDesk REST backend
//!
//! Everything the frontends know about the remote API lives here: the record
//! shapes the server returns, the request bodies it accepts, and the HTTP
//! transport that carries them. The stores in the `store` crate drive these
//! endpoints through the [`store::ResourceClient`] trait and never touch
//! HTTP themselves.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `User`, `Membership`, `Schedule`, `Exercise` and their create/update request types |
//! | [`client`] | [`ApiClient`] transport and the generic per-resource [`Endpoint`] |
//! | [`auth`] | Login request/response shapes |
//! | [`config`] | Base URL configuration |
//! | [`error`] | [`ApiError`] and its reduction to `store::ClientError` |

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use auth::{LoginRequest, LoginResponse};
pub use client::{ApiClient, Endpoint, RestResource};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    CreateExercise, CreateMembership, CreateSchedule, CreateUser, Exercise,
    Membership, Schedule, UpdateExercise, UpdateMembership, UpdateSchedule,
    UpdateUser, User,
};

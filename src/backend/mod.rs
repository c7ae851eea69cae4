//! Client plumbing for the hosted auth + document backend.
//!
//! Every operation bootstraps its own [`ApiClient`] from configuration;
//! nothing here is cached or shared between calls. The two capability
//! traits, [`UserRecordStore`] and [`SessionProvider`], are the seams the
//! role operations are written against, so they can run against in-memory
//! fakes in tests.

mod client;
mod error;
mod session;
mod store;

// Re-export public API
pub use client::ApiClient;
pub use error::BackendError;
pub use session::{RemoteSession, SessionProvider};
pub use store::{RemoteUserStore, UserRecordStore};

//! Read-only client for the customer listing service.
//!
//! [`CustomerDirectoryClient`] loads the customer collection once on
//! [`initialize`](CustomerDirectoryClient::initialize) and keeps the state a
//! presentation layer needs: the collection, a loading flag, the current
//! selection and the last fetch failure.

pub mod client;
pub mod error;
pub mod state;

pub use client::{CustomerDirectoryClient, CUSTOMERS_PATH};
pub use common::models::Customer;
pub use error::FetchError;
pub use state::DirectoryState;

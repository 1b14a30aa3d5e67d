//! A typed GraphQL client.
//!
//! A [`Client`] loads the remote [`Schema`] (through a [`SchemaProvider`],
//! optionally cached by a [`SchemaCache`]) and exposes each root operation
//! field through an [`OperationServiceProxy`]:
//!
//! ```ignore
//! let response = client.query()
//!     .get("film")?
//!     .variables([("id", "ZmlsbXM6MQ==")])?
//!     .select(fields!("id", "title"))?
//!     .execute()?;
//! ```

pub mod backend;
pub mod cache;
mod client;
mod error;
pub mod loader;
pub mod provider;
mod proxy;
pub mod response;
mod settings;

pub use backend::Backend;
pub use backend::BackendError;
pub use backend::GraphQLRequest;
pub use cache::SchemaCache;
pub use client::Client;
pub use client::ClientBuilder;
pub use error::ClientError;
pub use provider::SchemaProvider;
pub use proxy::OperationProxy;
pub use proxy::OperationServiceProxy;
pub use response::GraphQLResponse;
pub use settings::Settings;
pub use settings::SettingsError;

pub use selectql_core::fields;
pub use selectql_core::Directive;
pub use selectql_core::Field;
pub use selectql_core::Fields;
pub use selectql_core::OperationKind;
pub use selectql_core::Schema;
pub use selectql_core::SelectionArg;

#[cfg(test)]
mod tests;

//! Typed GraphQL query building.
//!
//! A [`Schema`] is built from an introspection document, a selection is
//! described with [`Fields`]/[`Field`] (or the [`fields!`] macro), and a
//! [`TypedQueryBuilder`] checks that selection against the schema before
//! rendering a single-line operation document along with the variables to
//! submit with it.

pub mod prepared;
pub mod query;
pub mod schema;
pub mod selection;
pub mod types;

pub use prepared::PrepareError;
pub use query::BuilderSettings;
pub use query::GQLQueryBuilder;
pub use query::OperationKind;
pub use query::TypedQueryBuilder;
pub use query::TypedQueryBuildError;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use selection::Directive;
pub use selection::Field;
pub use selection::Fields;
pub use selection::SelectionArg;
pub use selection::SelectionError;

#[cfg(test)]
mod test_utils;

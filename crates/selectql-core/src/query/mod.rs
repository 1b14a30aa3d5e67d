mod builder_settings;
mod gql_query_builder;
mod operation_kind;
mod typed_query_builder;

pub use builder_settings::BuilderSettings;
pub use gql_query_builder::collapse_whitespace;
pub use gql_query_builder::render_arguments;
pub use gql_query_builder::GQLQueryBuilder;
pub use operation_kind::OperationKind;
pub use operation_kind::ParseOperationKindError;
pub use typed_query_builder::TypedQueryBuilder;
pub use typed_query_builder::TypedQueryBuildError;

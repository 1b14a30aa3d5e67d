mod directive;
mod enum_value;
mod field;
mod graphql_type;
mod input;
mod type_kind;
mod type_ref;

pub use directive::Directive;
pub use enum_value::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use input::Input;
pub use type_kind::TypeKind;
pub use type_ref::TypeRef;
pub(crate) use type_ref::TypeIndex;

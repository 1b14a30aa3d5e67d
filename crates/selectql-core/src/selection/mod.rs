//! The caller-facing description of which fields an operation should select.
//!
//! Nothing in this module knows about a [`Schema`](crate::Schema): a
//! selection is only checked against one when it is prepared (see
//! [`crate::prepared`]).

mod directive;
mod field;
mod fields;
mod macros;
mod selection_arg;
mod selection_key;

pub use directive::Directive;
pub use field::Field;
pub use fields::Fields;
pub use selection_arg::SelectionArg;
pub use selection_arg::SelectionError;
pub use selection_key::SelectionKey;

#[cfg(test)]
mod tests;

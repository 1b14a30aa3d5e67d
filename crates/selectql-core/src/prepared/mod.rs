//! Selections that have been checked against a [`Schema`](crate::Schema).
//!
//! Preparing a selection assigns every argument a variable reference that is
//! unique within the process, so prepared selections from independent
//! builds can be combined into one operation without collisions.

mod prepare_error;
mod prepared_directive;
mod prepared_field;
mod prepared_fields;

pub use prepare_error::PrepareError;
pub use prepared_directive::PreparedDirective;
pub use prepared_field::PreparedField;
pub use prepared_fields::PreparedFields;

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

static NEXT_REF_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Mint the identity token embedded in the variable references of one
/// prepared field or directive.
pub(crate) fn next_ref_token() -> u64 {
    NEXT_REF_TOKEN.fetch_add(1, Ordering::Relaxed)
}

/// Render `name(arg: $ref arg2: $ref2)`-style argument lists.
pub(crate) fn fmt_var_refs(
    f: &mut std::fmt::Formatter<'_>,
    var_name_to_var_ref: &indexmap::IndexMap<String, String>,
) -> std::fmt::Result {
    if var_name_to_var_ref.is_empty() {
        return Ok(());
    }
    f.write_str("(")?;
    for (idx, (name, var_ref)) in var_name_to_var_ref.iter().enumerate() {
        if idx > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{name}: ${var_ref}")?;
    }
    f.write_str(")")
}

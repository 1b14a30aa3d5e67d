/// Build a [`Fields`](crate::Fields) selection.
///
/// Positional arguments are anything that converts into a
/// [`SelectionArg`](crate::SelectionArg); `name = value` selects `name` with
/// `value` as its sub-selection.
///
/// ```
/// use selectql_core::fields;
///
/// let member = fields!("first_name", "last_name", hobby = fields!("name", club = "name"));
/// assert_eq!(member.to_string(), "first_name last_name hobby { name club { name } }");
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };

    (@acc [$acc:expr]) => {
        $acc
    };

    (@acc [$acc:expr] $name:ident = $sub_fields:expr $(, $($rest:tt)*)?) => {
        $crate::fields!(
            @acc [$acc.nest(stringify!($name), $sub_fields)] $($($rest)*)?
        )
    };

    (@acc [$acc:expr] $arg:expr $(, $($rest:tt)*)?) => {
        $crate::fields!(@acc [$acc.select($arg)] $($($rest)*)?)
    };

    ($($args:tt)+) => {
        $crate::fields!(@acc [$crate::Fields::new()] $($args)+)
    };
}

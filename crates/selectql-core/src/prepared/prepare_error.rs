use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum PrepareError {
    #[error("A selected field or directive has an empty name")]
    EmptyName,

    #[error("No directive named `@{directive_name}` is defined in the schema")]
    UndefinedDirective {
        directive_name: String,
    },

    #[error("No field named `{field_name}` is defined on type `{parent_type_name}`")]
    UndefinedField {
        field_name: String,
        parent_type_name: String,
    },

    #[error(
        "Unable to resolve the output type of `{parent_type_name}.{field_name}` \
        to select sub-fields on"
    )]
    UnresolvedOutputType {
        field_name: String,
        parent_type_name: String,
    },

    #[error("Input `{arg_name}` not supported for directive `@{directive_name}`")]
    UnsupportedDirectiveArgument {
        arg_name: String,
        directive_name: String,
    },

    #[error("Input `{arg_name}` not supported for field `{parent_type_name}.{field_name}`")]
    UnsupportedFieldArgument {
        arg_name: String,
        field_name: String,
        parent_type_name: String,
    },
}

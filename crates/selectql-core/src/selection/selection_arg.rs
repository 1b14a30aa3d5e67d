use crate::selection::Field;
use crate::selection::Fields;
use indexmap::IndexMap;
use thiserror::Error;

/// Everything a selection can be built from.
///
/// `&str`/`String` select a bare field, [`Field`] and [`Fields`] are taken
/// as-is, lists are flattened, and mappings select each key with the value
/// as its sub-selection.
#[derive(Clone, Debug)]
pub enum SelectionArg {
    Field(Field),
    Fields(Fields),
    List(Vec<SelectionArg>),
    Mapping(IndexMap<String, SelectionArg>),
    Name(String),
}
impl std::convert::From<&str> for SelectionArg {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}
impl std::convert::From<&String> for SelectionArg {
    fn from(name: &String) -> Self {
        Self::Name(name.to_owned())
    }
}
impl std::convert::From<String> for SelectionArg {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}
impl std::convert::From<Field> for SelectionArg {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}
impl std::convert::From<Fields> for SelectionArg {
    fn from(fields: Fields) -> Self {
        Self::Fields(fields)
    }
}
impl<T: Into<SelectionArg>> std::convert::From<Vec<T>> for SelectionArg {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<SelectionArg>, const N: usize> std::convert::From<[T; N]> for SelectionArg {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
impl<K, V> std::convert::From<IndexMap<K, V>> for SelectionArg
where
    K: Into<String>,
    V: Into<SelectionArg>,
{
    fn from(entries: IndexMap<K, V>) -> Self {
        Self::Mapping(
            entries.into_iter()
                .map(|(name, sub_fields)| (name.into(), sub_fields.into()))
                .collect(),
        )
    }
}
impl std::convert::TryFrom<&serde_json::Value> for SelectionArg {
    type Error = SelectionError;

    fn try_from(value: &serde_json::Value) -> Result<Self, SelectionError> {
        match value {
            serde_json::Value::String(name) => Ok(Self::Name(name.to_owned())),
            serde_json::Value::Array(items) => Ok(Self::List(
                items.iter()
                    .map(SelectionArg::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            serde_json::Value::Object(entries) => Ok(Self::Mapping(
                entries.iter()
                    .map(|(name, sub_fields)| {
                        Ok((name.to_owned(), SelectionArg::try_from(sub_fields)?))
                    })
                    .collect::<Result<IndexMap<_, _>, SelectionError>>()?,
            )),
            serde_json::Value::Bool(_) => Err(SelectionError::UnsupportedShape {
                found: "boolean",
            }),
            serde_json::Value::Null => Err(SelectionError::UnsupportedShape {
                found: "null",
            }),
            serde_json::Value::Number(_) => Err(SelectionError::UnsupportedShape {
                found: "number",
            }),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error(
        "A {found} can not be turned into a selection; expected a field \
        name, a list or a mapping"
    )]
    UnsupportedShape {
        found: &'static str,
    },
}

use crate::prepared::PrepareError;
use crate::prepared::PreparedFields;
use crate::schema::Schema;
use crate::selection::Field;
use crate::selection::SelectionArg;
use crate::selection::SelectionKey;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// An ordered, de-duplicated set of selected [`Field`]s.
///
/// A field whose [`SelectionKey`] is already present is ignored, so the
/// first occurrence of a field wins. Equality does not depend on the order
/// fields were selected in.
#[derive(Clone, Debug, Default)]
pub struct Fields {
    pub(crate) selected: IndexMap<SelectionKey, Field>,
}
impl Fields {
    /// The part of this selection that can be added to `existing` without
    /// repeating or contradicting it.
    ///
    /// A field already selected by `existing` is skipped. So is a field that
    /// shares its response name (alias or name) with a field in `existing`
    /// but differs in arguments, directive or in whether it has a
    /// sub-selection: `existing` was there first. When both have a
    /// sub-selection, only the sub-fields that are themselves additions are
    /// kept, and the field is skipped if none are.
    pub fn additions_to(&self, existing: &Fields) -> Fields {
        let mut additions = Fields::new();
        for (key, field) in self.selected.iter() {
            if existing.selected.contains_key(key) {
                continue;
            }

            let same_response = existing.iter()
                .filter(|existing_field| {
                    existing_field.response_name() == field.response_name()
                })
                .collect::<Vec<_>>();
            if same_response.is_empty() {
                additions.push(field.clone());
                continue;
            }

            let conflicting = same_response.iter().any(|existing_field| {
                existing_field.args != field.args
                    || existing_field.directive != field.directive
                    || existing_field.directive.as_ref().map(|d| &d.args)
                        != field.directive.as_ref().map(|d| &d.args)
                    || existing_field.sub_fields.is_some() != field.sub_fields.is_some()
            });
            if conflicting {
                continue;
            }

            let Some(sub_fields) = field.sub_fields.as_ref() else {
                continue;
            };
            let existing_sub_fields = same_response.iter()
                .filter_map(|existing_field| existing_field.sub_fields.as_ref())
                .fold(Fields::new(), |acc, sub_fields| acc.union(sub_fields));
            let sub_additions = sub_fields.additions_to(&existing_sub_fields);
            if !sub_additions.is_empty() {
                additions.push(Field {
                    sub_fields: Some(sub_additions),
                    ..field.clone()
                });
            }
        }
        additions
    }

    pub fn contains(&self, field: &Field) -> bool {
        self.selected.contains_key(&field.key())
    }

    pub fn contains_key(&self, key: &SelectionKey) -> bool {
        self.selected.contains_key(key)
    }

    /// Remove everything `other` selects from this selection.
    ///
    /// Fields whose key is selected by `other` are dropped. A field with a
    /// sub-selection that `other` selects as the same field (alias, name and
    /// directive) with its own sub-selection has that sub-selection
    /// subtracted instead, and is dropped if nothing remains.
    pub fn difference(&self, other: &Fields) -> Fields {
        let mut remaining = Fields::new();
        for (key, field) in self.selected.iter() {
            if other.selected.contains_key(key) {
                continue;
            }

            let Some(sub_fields) = field.sub_fields.as_ref() else {
                remaining.push(field.clone());
                continue;
            };

            let mut overlapping = other.iter()
                .filter(|other_field| other_field.same_field_as(field))
                .filter_map(|other_field| other_field.sub_fields.as_ref())
                .peekable();
            if overlapping.peek().is_none() {
                remaining.push(field.clone());
                continue;
            }

            let sub_fields = overlapping.fold(
                sub_fields.clone(),
                |acc, other_sub_fields| acc.difference(other_sub_fields),
            );
            if !sub_fields.is_empty() {
                remaining.push(Field {
                    sub_fields: Some(sub_fields),
                    ..field.clone()
                });
            }
        }
        remaining
    }

    pub fn from_args<T: Into<SelectionArg>>(
        args: impl IntoIterator<Item = T>,
    ) -> Self {
        args.into_iter().fold(Self::new(), |fields, arg| fields.select(arg))
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.selected.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &SelectionKey> {
        self.selected.keys()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Select `name` with a sub-selection built from `sub_fields` (the
    /// keyword form of `fields!(name = ...)`).
    pub fn nest(
        self,
        name: impl Into<String>,
        sub_fields: impl Into<SelectionArg>,
    ) -> Self {
        self.select(Field::new(name).sub_fields(sub_fields))
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every selected field against `parent`.
    pub fn prepare<'schema>(
        &self,
        parent: &'schema GraphQLType,
        schema: &'schema Schema,
    ) -> Result<PreparedFields<'schema>, PrepareError> {
        PreparedFields::prepare(self, parent, schema)
    }

    /// Add to this selection. Bare names become fields, lists are flattened,
    /// mappings select each key with the value as its sub-selection.
    pub fn select(mut self, arg: impl Into<SelectionArg>) -> Self {
        self.extend_from_arg(arg.into());
        self
    }

    /// Merge two selections. Fields that select the same alias, name and
    /// directive and both carry a sub-selection are merged recursively.
    pub fn union(&self, other: &Fields) -> Fields {
        let mut merged: Vec<Field> = self.selected.values().cloned().collect();
        for field in other.iter() {
            let mergeable = merged.iter_mut().find(|existing| {
                existing.same_field_as(field)
                    && existing.sub_fields.is_some()
                    && field.sub_fields.is_some()
            });
            match (mergeable, field.sub_fields.as_ref()) {
                (Some(existing), Some(other_sub_fields)) => {
                    let sub_fields = existing.sub_fields
                        .take()
                        .unwrap_or_default()
                        .union(other_sub_fields);
                    existing.sub_fields = Some(sub_fields);
                },
                _ => merged.push(field.clone()),
            }
        }
        merged.into_iter().collect()
    }

    pub(crate) fn sorted_keys(&self) -> Vec<SelectionKey> {
        let mut keys: Vec<SelectionKey> = self.selected.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn extend_from_arg(&mut self, arg: SelectionArg) {
        match arg {
            SelectionArg::Name(name) => {
                let name = name.trim();
                if !name.is_empty() {
                    self.push(Field::new(name));
                }
            },
            SelectionArg::Field(field) => self.push(field),
            SelectionArg::List(items) => {
                for item in items {
                    self.extend_from_arg(item);
                }
            },
            SelectionArg::Mapping(entries) => {
                for (name, sub_fields) in entries {
                    self.push(Field::new(name).sub_fields(sub_fields));
                }
            },
            SelectionArg::Fields(fields) => {
                for field in fields.selected.into_values() {
                    self.push(field);
                }
            },
        }
    }

    fn push(&mut self, field: Field) {
        self.selected.entry(field.key()).or_insert(field);
    }
}
impl std::cmp::PartialEq for Fields {
    fn eq(&self, other: &Self) -> bool {
        self.selected.len() == other.selected.len()
            && self.selected.keys().all(|key| other.selected.contains_key(key))
    }
}
impl std::cmp::Eq for Fields {}
impl std::fmt::Display for Fields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, field) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}
impl std::convert::From<Field> for Fields {
    fn from(field: Field) -> Self {
        Self::new().select(field)
    }
}
impl std::iter::FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut fields = Self::new();
        for field in iter {
            fields.push(field);
        }
        fields
    }
}
impl<'a> std::iter::IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = indexmap::map::Values<'a, SelectionKey, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.selected.values()
    }
}
impl<T: Into<SelectionArg>> std::ops::Add<T> for Fields {
    type Output = Fields;

    fn add(self, other: T) -> Fields {
        self.union(&Fields::new().select(other))
    }
}
impl<T: Into<SelectionArg>> std::ops::BitAnd<T> for Fields {
    type Output = Fields;

    fn bitand(self, other: T) -> Fields {
        self + other
    }
}
impl<T: Into<SelectionArg>> std::ops::Sub<T> for Fields {
    type Output = Fields;

    fn sub(self, other: T) -> Fields {
        self.difference(&Fields::new().select(other))
    }
}

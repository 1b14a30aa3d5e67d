/// The structural identity of a selected [`Field`](crate::Field).
///
/// Two fields with the same key select the same data: the key covers the
/// alias, the field name, the directive name and (recursively) the keys of the
/// sub-selection, but never argument values. Sub-keys are kept sorted so
/// that the order fields were selected in does not affect identity.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SelectionKey {
    pub(crate) alias: Option<String>,
    pub(crate) directive: Option<String>,
    pub(crate) name: String,
    pub(crate) sub_keys: Option<Vec<SelectionKey>>,
}
impl SelectionKey {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn directive(&self) -> Option<&str> {
        self.directive.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Indicates if both keys address the same field, ignoring
    /// sub-selections.
    pub fn same_field_as(&self, other: &SelectionKey) -> bool {
        self.alias == other.alias
            && self.name == other.name
            && self.directive == other.directive
    }

    pub fn sub_keys(&self) -> Option<&[SelectionKey]> {
        self.sub_keys.as_deref()
    }
}

use crate::schema::introspection::IntrospectionType;
use crate::schema::SchemaBuildError;
use crate::types::input::inputs_from_introspection;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::Input;
use crate::types::TypeIndex;
use crate::types::TypeKind;
use crate::types::TypeRef;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// A named type defined by the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLType {
    pub(crate) description: Option<String>,
    pub(crate) enum_values: Vec<EnumValue>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) input_fields: IndexMap<String, Input>,
    pub(crate) interfaces: Vec<TypeRef>,
    pub(crate) kind: TypeKind,
    pub(crate) name: String,
    pub(crate) possible_types: Vec<TypeRef>,
}
impl GraphQLType {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn enum_values(&self) -> &[EnumValue] {
        self.enum_values.as_slice()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn input_field(&self, name: &str) -> Option<&Input> {
        self.input_fields.get(name)
    }

    pub fn input_fields(&self) -> &IndexMap<String, Input> {
        &self.input_fields
    }

    pub fn interfaces(&self) -> &[TypeRef] {
        self.interfaces.as_slice()
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn possible_types(&self) -> &[TypeRef] {
        self.possible_types.as_slice()
    }

    pub(crate) fn from_introspection(raw: &IntrospectionType) -> Result<Self> {
        let name = match raw.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => return Err(SchemaBuildError::UnnamedType { kind: raw.kind }),
        };

        let mut fields = IndexMap::new();
        for raw_field in raw.fields.iter().flatten() {
            let field = Field::from_introspection(&name, raw_field)?;
            fields.insert(field.name.to_owned(), field);
        }

        let interfaces = raw.interfaces
            .iter()
            .flatten()
            .map(|raw_ref| TypeRef::from_introspection(&name, raw_ref))
            .collect::<Result<Vec<_>>>()?;

        let possible_types = raw.possible_types
            .iter()
            .flatten()
            .map(|raw_ref| TypeRef::from_introspection(&name, raw_ref))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            description: raw.description.to_owned(),
            enum_values: raw.enum_values
                .iter()
                .flatten()
                .map(EnumValue::from)
                .collect(),
            fields,
            input_fields: inputs_from_introspection(&name, raw.input_fields.as_ref())?,
            interfaces,
            kind: raw.kind,
            name,
            possible_types,
        })
    }

    pub(crate) fn resolve(
        &mut self,
        type_indices: &IndexMap<String, TypeIndex>,
    ) -> Result<()> {
        let name = self.name.as_str();
        for field in self.fields.values_mut() {
            field.resolve(name, type_indices)?;
        }
        for input_field in self.input_fields.values_mut() {
            input_field.resolve(name, type_indices)?;
        }
        for type_ref in self.interfaces.iter_mut().chain(self.possible_types.iter_mut()) {
            type_ref.resolve(name, type_indices)?;
        }
        Ok(())
    }
}

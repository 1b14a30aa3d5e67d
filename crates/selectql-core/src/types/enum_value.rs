use crate::schema::introspection::IntrospectionEnumValue;

/// One value of an `ENUM` type.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) is_deprecated: bool,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl std::convert::From<&IntrospectionEnumValue> for EnumValue {
    fn from(raw: &IntrospectionEnumValue) -> Self {
        Self {
            deprecation_reason: raw.deprecation_reason.to_owned(),
            description: raw.description.to_owned(),
            is_deprecated: raw.is_deprecated.unwrap_or(false),
            name: raw.name.to_owned(),
        }
    }
}

use crate::schema::Schema;
use crate::types::GraphQLType;

pub(crate) const STARWARS_INTROSPECTION_JSON: &str =
    include_str!("../../../fixtures/starwars.introspection.json");

pub(crate) fn starwars_schema() -> Schema {
    Schema::from_json_str(STARWARS_INTROSPECTION_JSON)
        .expect("starwars fixture is a valid introspection document")
}

pub(crate) fn starwars_raw() -> serde_json::Value {
    serde_json::from_str(STARWARS_INTROSPECTION_JSON)
        .expect("starwars fixture is valid json")
}

pub(crate) fn get_type<'schema>(
    schema: &'schema Schema,
    type_name: &str,
) -> &'schema GraphQLType {
    schema.get_type(type_name)
        .unwrap_or_else(|| panic!("`{type_name}` is defined in the fixture"))
}

use crate::query::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::test_utils;
use crate::types::TypeKind;

type Result<T> = std::result::Result<T, SchemaBuildError>;

mod basics {
    use super::*;

    #[test]
    fn build_without_load() {
        let schema = SchemaBuilder::new().build();
        assert_eq!(schema.unwrap_err(), SchemaBuildError::NoTypesFound);
    }

    #[test]
    fn load_starwars_fixture() -> Result<()> {
        let schema = Schema::from_json_str(test_utils::STARWARS_INTROSPECTION_JSON)?;

        assert_eq!(schema.all_types().count(), 20);
        assert_eq!(
            schema.all_directives().keys().collect::<Vec<_>>(),
            vec!["include", "skip", "deprecated"],
        );
        assert_eq!(schema.query_type().map(|t| t.name()), Some("Root"));
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
        assert_eq!(
            schema.subscription_type().map(|t| t.name()),
            Some("Subscription"),
        );
        assert_eq!(
            schema.root_type(OperationKind::Mutation).map(|t| t.name()),
            Some("Mutation"),
        );

        let include = schema.get_directive("include").expect("directive exists");
        assert_eq!(
            include.arg("if").map(|arg| arg.type_ref().to_string()),
            Some("Boolean!".to_string()),
        );
        assert!(schema.get_type("Starship").is_none());

        Ok(())
    }

    #[test]
    fn raw_document_is_kept() -> Result<()> {
        let raw = test_utils::starwars_raw();
        let schema = Schema::from_raw(raw.clone())?;
        assert_eq!(schema.raw(), &raw);
        Ok(())
    }

    #[test]
    fn wrapped_documents_are_unwrapped() -> Result<()> {
        let raw = test_utils::starwars_raw();
        let bare = Schema::from_raw(raw.clone())?;

        let wrapped = Schema::from_raw(serde_json::json!({ "__schema": raw.clone() }))?;
        assert_eq!(wrapped, bare);

        let response = Schema::from_raw(serde_json::json!({
            "data": { "__schema": raw },
        }))?;
        assert_eq!(response, bare);

        Ok(())
    }

    #[test]
    fn root_types_may_be_absent() -> Result<()> {
        let schema = Schema::from_raw(serde_json::json!({
            "queryType": { "name": "Query" },
            "mutationType": null,
            "types": [{
                "kind": "OBJECT",
                "name": "Query",
                "fields": [{
                    "name": "hello",
                    "args": [],
                    "type": { "kind": "SCALAR", "name": "String", "ofType": null },
                }],
            }, {
                "kind": "SCALAR",
                "name": "String",
            }],
        }))?;

        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());
        assert!(schema.all_directives().is_empty());
        assert_eq!(
            schema.query_type().and_then(|q| q.field("hello")).map(|f| f.output_type_name()),
            Some(Some("String")),
        );

        Ok(())
    }
}

mod failures {
    use super::*;

    #[test]
    fn empty_types_list() {
        let result = Schema::from_raw(serde_json::json!({
            "queryType": { "name": "Query" },
            "types": [],
        }));
        assert_eq!(result.unwrap_err(), SchemaBuildError::NoTypesFound);
    }

    #[test]
    fn missing_types_list() {
        let result = Schema::from_raw(serde_json::json!({
            "queryType": { "name": "Query" },
        }));
        assert_eq!(result.unwrap_err(), SchemaBuildError::NoTypesFound);
    }

    #[test]
    fn invalid_json() {
        let result = Schema::from_json_str("{ \"types\": [");
        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidIntrospectionDocument { .. }),
        ));
    }

    #[test]
    fn duplicate_type_names() {
        let result = Schema::from_raw(serde_json::json!({
            "types": [
                { "kind": "SCALAR", "name": "String" },
                { "kind": "SCALAR", "name": "String" },
            ],
        }));
        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicateTypeDefinition {
            type_name: "String".to_string(),
        });
    }

    #[test]
    fn unnamed_type() {
        let result = Schema::from_raw(serde_json::json!({
            "types": [{ "kind": "OBJECT", "name": null }],
        }));
        assert_eq!(result.unwrap_err(), SchemaBuildError::UnnamedType {
            kind: TypeKind::Object,
        });
    }

    #[test]
    fn dangling_root_type_name() {
        let result = Schema::from_raw(serde_json::json!({
            "queryType": { "name": "Query" },
            "types": [{ "kind": "SCALAR", "name": "String" }],
        }));
        assert_eq!(result.unwrap_err(), SchemaBuildError::UndefinedRootOperationType {
            operation: "query",
            type_name: "Query".to_string(),
        });
    }

    #[test]
    fn dangling_field_type_reference() {
        let result = Schema::from_raw(serde_json::json!({
            "queryType": { "name": "Query" },
            "types": [{
                "kind": "OBJECT",
                "name": "Query",
                "fields": [{
                    "name": "starship",
                    "args": [{
                        "name": "id",
                        "type": { "kind": "SCALAR", "name": "ID", "ofType": null },
                    }],
                    "type": { "kind": "OBJECT", "name": "Starship", "ofType": null },
                }],
            }, {
                "kind": "SCALAR",
                "name": "ID",
            }],
        }));
        assert_eq!(result.unwrap_err(), SchemaBuildError::UndefinedTypeReference {
            referenced_from: "Query.starship".to_string(),
            undefined_type_name: "Starship".to_string(),
        });
    }

    #[test]
    fn dangling_argument_type_reference() {
        let result = Schema::from_raw(serde_json::json!({
            "types": [{
                "kind": "OBJECT",
                "name": "Query",
                "fields": [{
                    "name": "hello",
                    "args": [{
                        "name": "lang",
                        "type": { "kind": "ENUM", "name": "Language", "ofType": null },
                    }],
                    "type": { "kind": "OBJECT", "name": "Query", "ofType": null },
                }],
            }],
        }));
        assert_eq!(result.unwrap_err(), SchemaBuildError::UndefinedTypeReference {
            referenced_from: "Query.hello(lang:)".to_string(),
            undefined_type_name: "Language".to_string(),
        });
    }
}

#[test]
fn schema_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Schema>();
}

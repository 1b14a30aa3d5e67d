use crate::selection::Directive;
use crate::selection::Field;
use crate::selection::Fields;
use crate::selection::SelectionArg;
use crate::selection::SelectionError;
use indexmap::IndexMap;

mod construction {
    use super::*;

    #[test]
    fn names_are_trimmed_and_blank_names_skipped() {
        let fields = Fields::from_args(["  id ", "", "   ", "title"]);
        assert_eq!(fields.to_string(), "id title");
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn first_occurrence_wins() {
        let fields = Fields::new()
            .select(Field::new("film").arg("id", 1))
            .select(Field::new("film").arg("id", 2));

        assert_eq!(fields.len(), 1);
        let film = fields.iter().next().expect("one field");
        assert_eq!(film.args().get("id"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn lists_are_flattened() {
        let fields = Fields::new().select(vec![
            SelectionArg::from("a"),
            SelectionArg::from(vec!["b", "c"]),
            SelectionArg::from(Field::new("d")),
        ]);
        assert_eq!(fields.to_string(), "a b c d");
    }

    #[test]
    fn mappings_nest_sub_selections() {
        let mut hobby = IndexMap::new();
        hobby.insert("hobby", SelectionArg::from(vec!["name"]));
        let fields = Fields::from_args([
            SelectionArg::from("first_name"),
            SelectionArg::from(hobby),
        ]);
        assert_eq!(fields.to_string(), "first_name hobby { name }");
    }

    #[test]
    fn fields_macro_mixes_positional_and_keyword_args() {
        let fields = crate::fields!(
            "first_name",
            "last_name",
            hobby = crate::fields!("name", club = "name"),
        );
        assert_eq!(
            fields.to_string(),
            "first_name last_name hobby { name club { name } }",
        );
    }

    #[test]
    fn fields_macro_accepts_field_values() {
        let film = Field::new("film").alias("first").arg("id", 1);
        let fields = crate::fields!(film, "episodes");
        assert_eq!(fields.to_string(), "first: film episodes");
        assert_eq!(crate::fields!(), Fields::new());
    }

    #[test]
    fn aliases_and_directives_are_distinct_keys() {
        let fields = Fields::from_args([
            Field::new("film"),
            Field::new("film").alias("other"),
            Field::new("film").directive(Directive::new("include").arg("if", true)),
        ]);
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn field_addition_produces_fields() {
        let fields = Field::new("id") + "title" + vec!["director"];
        assert_eq!(fields.to_string(), "id title director");

        let fields = Field::new("id") & Field::new("id");
        assert_eq!(fields.len(), 1);
    }
}

mod equality {
    use super::*;

    #[test]
    fn order_does_not_matter() {
        assert_eq!(Fields::from_args(["a", "b"]), Fields::from_args(["b", "a"]));
        assert_ne!(Fields::from_args(["a"]), Fields::from_args(["b"]));
    }

    #[test]
    fn nested_order_does_not_matter() {
        let left = crate::fields!(hobby = ["name", "club"]);
        let right = crate::fields!(hobby = ["club", "name"]);
        assert_eq!(left, right);
        assert_ne!(left, crate::fields!(hobby = "name"));
    }

    #[test]
    fn argument_values_are_ignored() {
        assert_eq!(
            Field::new("repo").arg("last", 5),
            Field::new("repo").arg("last", 10),
        );
        assert_eq!(
            Directive::new("include").arg("if", true),
            Directive::new("include").arg("if", false),
        );
    }
}

mod union {
    use super::*;

    #[test]
    fn union_keeps_order_and_dedupes() {
        let fields = Fields::from_args(["a", "b"]) + Fields::from_args(["b", "c"]);
        assert_eq!(fields.to_string(), "a b c");
    }

    #[test]
    fn union_deep_merges_sub_selections() {
        let left = crate::fields!("first_name", hobby = "name");
        let right = crate::fields!(hobby = crate::fields!(club = "name"), "last_name");
        let merged = left.union(&right);
        assert_eq!(
            merged.to_string(),
            "first_name hobby { name club { name } } last_name",
        );
    }

    #[test]
    fn bare_and_nested_fields_do_not_merge() {
        let merged = crate::fields!("hobby") + crate::fields!(hobby = "name");
        assert_eq!(merged.to_string(), "hobby hobby { name }");
    }
}

mod difference {
    use super::*;

    #[test]
    fn removes_shared_fields() {
        let fields = Fields::from_args(["a", "b", "c"]) - "b";
        assert_eq!(fields.to_string(), "a c");
    }

    #[test]
    fn subtracts_sub_selections_recursively() {
        let fields = crate::fields!("first_name", hobby = crate::fields!("name", club = "name"));
        let remaining = fields - crate::fields!(hobby = crate::fields!(club = "name"));
        assert_eq!(remaining.to_string(), "first_name hobby { name }");
    }

    #[test]
    fn prunes_emptied_sub_selections() {
        let fields = crate::fields!("first_name", hobby = "name");
        let remaining = fields - crate::fields!(hobby = "name");
        assert_eq!(remaining.to_string(), "first_name");
    }

    #[test]
    fn bare_name_does_not_remove_nested_field() {
        let fields = crate::fields!(hobby = "name");
        let remaining = fields.clone() - "hobby";
        assert_eq!(remaining, fields);
    }

    #[test]
    fn self_difference_is_empty() {
        let fields = crate::fields!("a", b = crate::fields!("c", d = "e"));
        assert!(fields.difference(&fields).is_empty());
    }
}

mod additions {
    use super::*;

    #[test]
    fn already_selected_fields_are_skipped() {
        let existing = Fields::from_args(["id", "title"]);
        let additions = Fields::from_args(["title", "director"]).additions_to(&existing);
        assert_eq!(additions.to_string(), "director");
    }

    #[test]
    fn conflicting_arguments_are_skipped() {
        let existing = Fields::new()
            .select(Field::new("filmConnection").arg("first", 1).sub_fields("totalCount"));
        let additions = Fields::new()
            .select(Field::new("filmConnection").arg("first", 2).sub_fields("films"))
            .select(Field::new("filmConnection").alias("more").arg("first", 2))
            .additions_to(&existing);

        assert_eq!(additions.len(), 1);
        assert_eq!(additions.to_string(), "more: filmConnection");
    }

    #[test]
    fn leaf_and_nested_selections_under_one_name_conflict() {
        let existing = Fields::from_args(["homeworld"]);
        let additions = Fields::new()
            .nest("homeworld", "name")
            .additions_to(&existing);
        assert!(additions.is_empty());
    }

    #[test]
    fn only_new_sub_fields_are_kept() {
        let existing = crate::fields!(hobby = crate::fields!("name", club = "name"));
        let additions = crate::fields!(hobby = crate::fields!("name", "since", club = "name"))
            .additions_to(&existing);
        assert_eq!(additions.to_string(), "hobby { since }");
    }

    #[test]
    fn directive_arguments_must_match() {
        let existing = Fields::new()
            .select(Field::new("title").directive(Directive::new("include").arg("if", true)));
        let additions = Fields::new()
            .select(Field::new("title").directive(Directive::new("include").arg("if", false)))
            .additions_to(&existing);
        assert!(additions.is_empty());
    }
}

mod dynamic_shapes {
    use super::*;

    #[test]
    fn json_values_convert_to_selections() -> Result<(), SelectionError> {
        let value = serde_json::json!(["id", { "hobby": ["name", { "club": "name" }] }]);
        let fields = Fields::new().select(SelectionArg::try_from(&value)?);
        assert_eq!(fields.to_string(), "id hobby { name club { name } }");
        Ok(())
    }

    #[test]
    fn scalars_are_rejected() {
        assert_eq!(
            SelectionArg::try_from(&serde_json::json!(["id", 5])).unwrap_err(),
            SelectionError::UnsupportedShape { found: "number" },
        );
        assert_eq!(
            SelectionArg::try_from(&serde_json::json!({ "hobby": null })).unwrap_err(),
            SelectionError::UnsupportedShape { found: "null" },
        );
        assert_eq!(
            SelectionArg::try_from(&serde_json::json!(true)).unwrap_err(),
            SelectionError::UnsupportedShape { found: "boolean" },
        );
    }
}

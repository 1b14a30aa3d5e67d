use crate::command::run_offline;
use crate::commands::build::parse_var;
use crate::commands::build::BuildCmd;
use crate::commands::tests::fixture_path;
use crate::RunnableCommand;
use selectql::OperationKind;

fn compile(cmd: &BuildCmd) -> anyhow::Result<(String, String)> {
    let output = run_offline(cmd)?;
    let (document, variables) = output
        .split_once('\n')
        .ok_or_else(|| anyhow::anyhow!("output has a document and variables"))?;
    Ok((document.to_string(), variables.to_string()))
}

fn build_cmd(field: &str) -> BuildCmd {
    BuildCmd {
        field: field.to_string(),
        kind: OperationKind::Query,
        no_validate_variables: false,
        schema: fixture_path(),
        select: None,
        vars: vec![],
    }
}

mod vars {
    use super::*;

    #[test]
    fn json_values_are_parsed() {
        assert_eq!(parse_var("first=5"), Ok(("first".to_string(), serde_json::json!(5))));
        assert_eq!(
            parse_var(r#"input={"title": "Rogue One"}"#),
            Ok(("input".to_string(), serde_json::json!({ "title": "Rogue One" }))),
        );
    }

    #[test]
    fn other_values_are_strings() {
        assert_eq!(
            parse_var("id=ZmlsbXM6MQ=="),
            Ok(("id".to_string(), serde_json::json!("ZmlsbXM6MQ=="))),
        );
        assert_eq!(parse_var("id="), Ok(("id".to_string(), serde_json::json!(""))));
    }

    #[test]
    fn malformed_vars_are_rejected() {
        assert!(parse_var("id").is_err());
        assert!(parse_var("=5").is_err());
    }
}

mod documents {
    use super::*;

    #[test]
    fn film_query() -> anyhow::Result<()> {
        let mut cmd = build_cmd("film");
        cmd.select = Some(r#"["id", "title", "episodeID"]"#.to_string());
        cmd.vars = vec![("id".to_string(), serde_json::json!("ZmlsbXM6MQ=="))];

        let (document, variables) = compile(&cmd)?;
        assert_eq!(document, "query film($id: ID) { film(id: $id) { id title episodeID } }");
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&variables)?,
            serde_json::json!({ "id": "ZmlsbXM6MQ==" }),
        );
        Ok(())
    }

    #[test]
    fn nested_mutation() -> anyhow::Result<()> {
        let mut cmd = build_cmd("createFilm");
        cmd.kind = OperationKind::Mutation;
        cmd.select = Some(r#"["id", {"characterConnection": ["totalCount"]}]"#.to_string());
        cmd.vars = vec![("input".to_string(), serde_json::json!({ "title": "Rogue One" }))];

        let (document, _) = compile(&cmd)?;
        assert_eq!(
            document,
            "mutation createFilm($input: FilmInput!) { createFilm(input: $input) \
            { id characterConnection { totalCount } } }",
        );
        Ok(())
    }

    #[test]
    fn undeclared_var_depends_on_validation() -> anyhow::Result<()> {
        let mut cmd = build_cmd("episodes");
        cmd.vars = vec![("slug".to_string(), serde_json::json!("x"))];
        assert!(compile(&cmd).is_err());

        cmd.no_validate_variables = true;
        let (document, variables) = compile(&cmd)?;
        assert_eq!(document, "query episodes { episodes }");
        assert_eq!(serde_json::from_str::<serde_json::Value>(&variables)?, serde_json::json!({}));
        Ok(())
    }

    #[test]
    fn unknown_root_field_fails() {
        let err = compile(&build_cmd("starship")).expect_err("starship is not a root field");
        assert!(format!("{err:#}").contains("starship"));
    }

    #[test]
    fn validation_setting_follows_the_flag() {
        let mut cmd = build_cmd("film");
        assert!(cmd.settings().validate_variables);
        cmd.no_validate_variables = true;
        assert!(!cmd.settings().validate_variables);
        assert!(!cmd.settings().introspect);
    }

    #[test]
    fn missing_schema_fails() {
        let mut cmd = build_cmd("film");
        cmd.schema = "/nonexistent/schema.json".into();
        assert!(compile(&cmd).is_err());
    }
}

use crate::command::run_offline;
use crate::commands::inspect::InspectCmd;
use crate::commands::tests::fixture_path;
use crate::CommandResult;
use crate::RunnableCommand;

#[test]
fn lists_root_operations() -> anyhow::Result<()> {
    let description = run_offline(&InspectCmd { schema: fixture_path() })?;
    let lines = description.lines().collect::<Vec<_>>();

    assert!(lines[0].ends_with("starwars.introspection.json"));
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "query (Root):");
    assert_eq!(lines[3], "  film(id: ID, filmID: ID): Film");
    assert!(lines.contains(&"  person(id: ID!): Person"));
    assert!(lines.contains(&"mutation (Mutation):"));
    assert!(lines.contains(&"  createFilm(input: FilmInput!): Film"));
    assert!(lines.contains(&"subscription (Subscription):"));
    assert_eq!(lines.last(), Some(&"  filmAdded(episodeID: Int): Film"));
    Ok(())
}

#[test]
fn invalid_schema_fails() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file can be created");
    std::io::Write::write_all(&mut file, br#"{ "types": [] }"#).expect("temp file is writable");

    let cmd = InspectCmd { schema: file.path().to_path_buf() };
    let result = CommandResult::from_outcome(cmd.action().as_str(), run_offline(&cmd));

    assert_eq!(result.exit_code, std::process::ExitCode::FAILURE);
    assert!(result.stdout.is_none());
    let stderr = result.stderr.expect("failures are reported on stderr");
    assert!(stderr.contains("Failed to inspect"));
    assert!(stderr.contains("loading schema"));
}

mod build_tests;
mod inspect_tests;

fn fixture_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures/starwars.introspection.json")
}

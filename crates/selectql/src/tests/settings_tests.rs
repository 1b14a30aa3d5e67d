use crate::Settings;
use crate::SettingsError;

type Result<T> = std::result::Result<T, SettingsError>;

#[test]
fn defaults() {
    let settings = Settings::default();
    assert!(settings.introspect);
    assert!(settings.validate_variables);
    assert!(settings.builder_settings().validate_variables);
}

#[test]
fn missing_keys_fall_back_to_defaults() -> Result<()> {
    let settings = Settings::from_json_str(r#"{ "validate_variables": false }"#)?;
    assert!(settings.introspect);
    assert!(!settings.validate_variables);
    assert!(!settings.builder_settings().validate_variables);
    assert_eq!(Settings::from_json_str("{}")?, Settings::default());
    Ok(())
}

#[test]
fn invalid_json_is_reported() {
    assert!(matches!(
        Settings::from_json_str(r#"{ "introspect": "yes" }"#),
        Err(SettingsError::InvalidJson { .. }),
    ));
}

#[test]
fn from_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new().expect("temp file can be created");
    std::io::Write::write_all(&mut file, br#"{ "introspect": false }"#)
        .expect("temp file is writable");

    let settings = Settings::from_file(file.path())?;
    assert!(!settings.introspect);
    assert!(settings.validate_variables);

    assert!(matches!(
        Settings::from_file("/nonexistent/settings.json"),
        Err(SettingsError::FileReadError { .. }),
    ));
    Ok(())
}

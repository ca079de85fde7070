use super::*;

fn write_config(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_defaults_without_config_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(dir.path(), None).unwrap();
    assert_eq!(config.exclude, vec![".venv/"]);
    assert!(!config.non_recursive);
}

#[test]
fn test_standalone_config_file() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        "framelint.toml",
        "exclude = [\"build/\", \"*.generated.py\"]\n",
    );
    let config = Config::load(dir.path(), None).unwrap();
    assert_eq!(config.exclude, vec![".venv/", "build/", "*.generated.py"]);
}

#[test]
fn test_pyproject_tool_table() {
    let dir = tempfile::tempdir().unwrap();
    write_config(
        dir.path(),
        "pyproject.toml",
        "[project]\nname = \"demo\"\n\n[tool.framelint]\nexclude = [\"migrations/\"]\nnon_recursive = true\n",
    );
    let config = Config::load(dir.path(), None).unwrap();
    assert_eq!(config.exclude, vec![".venv/", "migrations/"]);
    assert!(config.non_recursive);
}

#[test]
fn test_pyproject_without_tool_table_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "pyproject.toml", "[project]\nname = \"demo\"\n");
    let config = Config::load(dir.path(), None).unwrap();
    assert_eq!(config.exclude, vec![".venv/"]);
}

#[test]
fn test_standalone_wins_over_pyproject() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "framelint.toml", "exclude = [\"a/\"]\n");
    write_config(
        dir.path(),
        "pyproject.toml",
        "[tool.framelint]\nexclude = [\"b/\"]\n",
    );
    let config = Config::load(dir.path(), None).unwrap();
    assert!(config.exclude.contains(&"a/".to_string()));
    assert!(!config.exclude.contains(&"b/".to_string()));
}

#[test]
fn test_override_path() {
    let dir = tempfile::tempdir().unwrap();
    let custom = write_config(dir.path(), "custom.toml", "non_recursive = true\n");
    let config = Config::load(dir.path(), Some(&custom)).unwrap();
    assert!(config.non_recursive);
}

#[test]
fn test_unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "framelint.toml", "unknown_option = 1\n");
    assert!(Config::load(dir.path(), None).is_err());
}

#[test]
fn test_missing_override_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(Config::load(dir.path(), Some(&missing)).is_err());
}

use cscaffold_core::replace_in_file;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_noop_substitution_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("fns.c");
    let content = "int add(int a, int b) { return a + b; }\n";
    fs::write(&file, content).unwrap();

    let outcome = replace_in_file(&file, "ctemplate", "widget").unwrap();

    assert_eq!(outcome.replacements, 0);
    assert_eq!(fs::read(&file).unwrap(), content.as_bytes());
}

#[test]
fn test_global_replacement_replaces_all_occurrences() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("main.c");
    fs::write(
        &file,
        "#include \"ctemplate/fns.h\"\n\nint main(void) {\n    ctemplate_run();\n    return ctemplate_status();\n}\n",
    )
    .unwrap();

    let outcome = replace_in_file(&file, "ctemplate", "widget").unwrap();

    assert_eq!(outcome.replacements, 3);
    let result = fs::read_to_string(&file).unwrap();
    assert_eq!(result.matches("ctemplate").count(), 0);
    assert_eq!(result.matches("widget").count(), 3);
}

#[test]
fn test_replacement_containing_the_needle() {
    // The scan is leftmost non-overlapping over the original text, so a
    // replacement that contains the needle does not trigger re-replacement.
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("Makefile");
    fs::write(&file, "TARGET = ctemplate\n").unwrap();

    let outcome = replace_in_file(&file, "ctemplate", "my_ctemplate").unwrap();

    assert_eq!(outcome.replacements, 1);
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "TARGET = my_ctemplate\n"
    );
}

#[test]
fn test_mixed_case_token_is_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("notes.txt");
    let content = "CTemplate CTEMPLATE Ctemplate\n";
    fs::write(&file, content).unwrap();

    let outcome = replace_in_file(&file, "ctemplate", "widget").unwrap();

    assert_eq!(outcome.replacements, 0);
    assert_eq!(fs::read_to_string(&file).unwrap(), content);
}

#[test]
fn test_adjacent_occurrences_are_all_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("dense.txt");
    fs::write(&file, "ctemplatectemplatectemplate").unwrap();

    let outcome = replace_in_file(&file, "ctemplate", "widget").unwrap();

    assert_eq!(outcome.replacements, 3);
    assert_eq!(fs::read_to_string(&file).unwrap(), "widgetwidgetwidget");
}

#[test]
fn test_missing_file_leaves_siblings_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let sibling = temp_dir.path().join("fns.c");
    fs::write(&sibling, "ctemplate\n").unwrap();

    let err = replace_in_file(&temp_dir.path().join("missing.c"), "ctemplate", "widget")
        .unwrap_err();

    assert_eq!(err.kind(), "file_not_found");
    assert_eq!(fs::read_to_string(&sibling).unwrap(), "ctemplate\n");
    // No stray temp files either.
    let count = fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(count, 1);
}

#[cfg(unix)]
#[test]
fn test_rewrite_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("run.sh");
    fs::write(&file, "exec ctemplate\n").unwrap();
    fs::set_permissions(&file, fs::Permissions::from_mode(0o755)).unwrap();

    replace_in_file(&file, "ctemplate", "widget").unwrap();

    let mode = fs::metadata(&file).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o755);
}

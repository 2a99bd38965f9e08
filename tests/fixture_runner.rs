//! Runs every `tests/fixtures/**/script.lum` and compares its output with
//! the `expected.txt` next to it. An optional `input.txt` feeds `inscan()`.

mod common;

use common::run_with_input;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

#[test]
fn run_fixtures() {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    let mut count = 0;
    run_fixtures_in_dir(&fixtures_dir, &mut count);
    assert!(count > 0, "No fixtures found under {}", fixtures_dir.display());
}

fn run_fixtures_in_dir(dir: &Path, count: &mut usize) {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .expect("Failed to read fixtures directory")
        .map(|entry| entry.expect("Failed to read entry").path())
        .collect();
    entries.sort();

    for path in entries.into_iter().filter(|path| path.is_dir()) {
        let script_path = path.join("script.lum");
        let expected_path = path.join("expected.txt");

        if script_path.exists() && expected_path.exists() {
            *count += 1;
            run_test_case(&path, &script_path, &expected_path);
        } else {
            run_fixtures_in_dir(&path, count);
        }
    }
}

fn run_test_case(test_dir: &Path, script_path: &Path, expected_path: &Path) {
    let test_name = test_dir.display();
    let script = fs::read_to_string(script_path).expect("Failed to read script.lum");
    let expected = fs::read_to_string(expected_path).expect("Failed to read expected.txt");
    let input = fs::read_to_string(test_dir.join("input.txt")).unwrap_or_default();

    let outcome = run_with_input(&script, &input);
    if let Err(e) = &outcome.result {
        panic!("Fixture {} failed with interpreter error: {}", test_name, e);
    }
    assert_eq!(outcome.output, expected, "Fixture {} produced unexpected output", test_name);
}

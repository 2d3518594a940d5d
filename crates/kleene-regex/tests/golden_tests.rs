use kleene_regex::render_output;
use std::fs;
use std::path::Path;

#[test]
fn run_golden_tests() {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let mut checked = 0;

    for entry in fs::read_dir(&fixtures_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();

        if path.extension().is_some_and(|ext| ext == "fsa") {
            let input = fs::read_to_string(&path).expect("Failed to read description");
            let output = render_output(&input);

            let golden_path = path.with_extension("expected");

            if std::env::var("UPDATE_GOLDEN").is_ok() {
                fs::write(&golden_path, &output).expect("Failed to update golden file");
            } else {
                let expected = fs::read_to_string(&golden_path)
                    .expect("Failed to read golden file (run with UPDATE_GOLDEN=1 to create)");
                assert_eq!(output, expected, "Golden test failed for {:?}", path);
            }
            checked += 1;
        }
    }

    assert!(checked > 0, "No fixtures found in {:?}", fixtures_dir);
}

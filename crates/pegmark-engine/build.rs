/// Generates one test function per .md file in tests/fixtures/.
/// Each test renders the file and compares it with the .html next to it.
fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dest = std::path::Path::new(&out_dir).join("golden_tests.rs");

    let mut code = String::from(
        r#"mod golden {
    use super::assert_golden;
"#,
    );

    let mut entries: Vec<_> = std::fs::read_dir("tests/fixtures")
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|e| e == "md"))
        .collect();
    entries.sort();

    for path in entries {
        let name = path.file_stem().unwrap().to_str().unwrap();
        code.push_str(&format!(
            r#"
    #[test]
    fn {name}() {{
        assert_golden("{name}");
    }}
"#
        ));
    }

    code.push_str("}\n");
    std::fs::write(&dest, code).unwrap();

    println!("cargo::rerun-if-changed=tests/fixtures");
}

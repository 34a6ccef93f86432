/// Generates one test function per .md file in src/snapshots/.
/// Each test parses the file and snapshots the resulting tree.
fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let dest = std::path::Path::new(&out_dir).join("snapshot_tests.rs");

    let mut code = String::from(
        r#"mod parse_snapshots {
    use super::snapshot_test;
"#,
    );

    let mut entries: Vec<_> = std::fs::read_dir("src/snapshots")
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
        snapshot_test("{name}");
    }}
"#
        ));
    }

    code.push_str("}\n");
    std::fs::write(&dest, code).unwrap();

    println!("cargo::rerun-if-changed=src/snapshots");
}

// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with *some* content and a [link](http://example.com).\n\n* Bullet point\n  * Nested item\n* Another item\n\n    fn example() {\n        println!(\"Hello\");\n    }\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_list(depth: usize, width: usize) -> String {
    let mut content = String::new();
    push_items(&mut content, 0, depth, width);
    content
}

fn push_items(content: &mut String, level: usize, depth: usize, width: usize) {
    if level == depth {
        return;
    }
    for i in 0..width {
        content.push_str(&format!("{}* Item {i} at level {level}\n", "  ".repeat(level)));
        push_items(content, level + 1, depth, width);
    }
}

//! Build script to generate embedded default categories
//!
//! Reads the category word files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Category files seeded into a fresh words directory, in display order
const CATEGORIES: &[&str] = &["Animals", "Countries", "Programming", "Science"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("categories.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated default categories").unwrap();
    writeln!(output).unwrap();

    for name in CATEGORIES {
        generate_word_list(&mut output, name);
        // Rebuild if word lists change
        println!("cargo:rerun-if-changed=data/categories/{name}.txt");
    }

    writeln!(
        output,
        "/// Built-in categories written to disk when their files are missing"
    )
    .unwrap();
    writeln!(output, "pub const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[").unwrap();
    for name in CATEGORIES {
        writeln!(output, "    (\"{name}\", {}),", const_name(name)).unwrap();
    }
    writeln!(output, "];").unwrap();
}

fn generate_word_list(output: &mut fs::File, name: &str) {
    let input_path = format!("data/categories/{name}.txt");
    let content = fs::read_to_string(&input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();

    writeln!(output, "/// Default {name} category ({} words)", words.len()).unwrap();
    writeln!(output, "const {}: &[&str] = &[", const_name(name)).unwrap();
    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}

fn const_name(name: &str) -> String {
    name.to_uppercase()
}

//! Build script to generate embedded word lists
//!
//! Reads the word bank files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Words that may be drawn as the word of the day
    generate_word_list(
        "data/target_words.txt",
        &Path::new(&out_dir).join("targets.rs"),
        "TARGETS",
        "Candidate words of the day",
    );

    // Every word accepted as a guess
    generate_word_list(
        "data/all_words.txt",
        &Path::new(&out_dir).join("dictionary.rs"),
        "DICTIONARY",
        "All words accepted as a guess",
    );

    println!("cargo:rerun-if-changed=data/target_words.txt");
    println!("cargo:rerun-if-changed=data/all_words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

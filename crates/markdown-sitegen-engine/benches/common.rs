// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n- Another [link](/page)\n\n1. First\n2. Second\n\n> Quoted line\n> and another\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    format!("# Title\n\n{}", base.repeat(size))
}

/// One long paragraph dense with inline markup, for the span passes alone.
#[allow(dead_code)]
pub fn generate_inline_heavy_paragraph(repeats: usize) -> String {
    "Some **bold** and *italic* with `code`, a [link](https://example.com) and ![img](a.png). "
        .repeat(repeats)
}

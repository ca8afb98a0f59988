//! HCL fixture renderer.

use crate::model::{Classification, FixtureEntry};

/// Emitted once at the top of the fixture.
pub const PREAMBLE: &str = r#"# DO NOT EDIT BY HAND
# This file is auto generated by gen-builtins

locals {
    # A load of the examples in the docs use `path.module` which _should_ resolve to the file system path of
    # the current module, but tf2pulumi doesn't support that so we replace it with local.path_module.
    path_module = "some/path"

    # Some of the examples in the docs use `path.root` which _should_ resolve to the file system path of the
    # root module of the configuration, but tf2pulumi doesn't support that so we replace it with local.path_root.
    path_root = "root/path"
}
"#;

pub const GUARD_OPEN: &str = "#if EXPERIMENTAL";
pub const GUARD_CLOSE: &str = "#endif";

/// Render the whole fixture. Unsupported entries produce no text.
pub fn render(entries: &[FixtureEntry]) -> String {
    let mut output = String::from(PREAMBLE);
    for entry in entries {
        output.push_str(&render_entry(entry));
    }
    output
}

/// Render one function's block, guarded when experimental.
pub fn render_entry(entry: &FixtureEntry) -> String {
    let guarded = match entry.class {
        Classification::Unsupported => return String::new(),
        Classification::Experimental => true,
        Classification::Supported => false,
    };

    let record = &entry.record;
    let mut out = String::new();
    if guarded {
        out.push_str(&format!("\n{}\n", GUARD_OPEN));
    }

    out.push_str(&format!("\n# Examples for {}\n", record.name));
    let base = output_name(&record.name);
    let numbered = record.examples.len() > 1;
    for (index, example) in record.examples.iter().enumerate() {
        let suffix = if numbered { index.to_string() } else { String::new() };
        out.push_str(&format!("output \"{}{}\" {{\n", base, suffix));
        out.push_str(&format!("  value = {}\n", example));
        out.push_str("}\n");
    }

    if guarded {
        out.push_str(&format!("\n{}\n", GUARD_CLOSE));
    }
    out.push('\n');
    out
}

/// Declaration name for a function: "upper" → "funcUpper".
pub fn output_name(function: &str) -> String {
    format!("func{}", capitalize(function))
}

/// Uppercase the first character, leave the rest as is.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

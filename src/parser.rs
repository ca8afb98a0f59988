//! Function page scanner — line-by-line state machine.
//!
//! Pages are MDX, but only two conventions matter here: the
//! ``# `name` Function`` heading and runnable snippets, which sit inside a
//! fenced block under `## Examples` on lines starting with `> `.

use crate::model::FunctionRecord;
use regex::Regex;
use std::sync::LazyLock;

static RE_FUNCTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# `([a-z]+)` Function").unwrap());

const EXAMPLES_MARKER: &str = "## Examples";
const FENCE: &str = "```";
const SNIPPET_PREFIX: &str = "> ";

/// Path lookups the converter cannot resolve, mapped to fixture locals.
const PATH_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("path.module", "local.path_module"),
    ("path.root", "local.path_root"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    OutsideExamples,
    InExamples,
    InCode,
}

/// Scan a page. `default_name` is used unless the page declares its own
/// function heading; the last heading on the page wins.
pub fn scan(default_name: &str, content: &str) -> FunctionRecord {
    let mut name = default_name.to_string();
    let mut headings = 0usize;
    let mut state = ScanState::OutsideExamples;
    let mut examples = Vec::new();

    // Pages may use \n, \r\n or bare \r line endings.
    for line in content.split(['\r', '\n']) {
        if let Some(caps) = RE_FUNCTION_HEADING.captures(line) {
            name = caps[1].to_string();
            headings += 1;
        }

        if line.contains(EXAMPLES_MARKER) {
            if state == ScanState::OutsideExamples {
                state = ScanState::InExamples;
            }
            continue;
        }

        match state {
            ScanState::OutsideExamples => {}
            _ if line.starts_with(FENCE) => {
                state = match state {
                    ScanState::InCode => ScanState::InExamples,
                    _ => ScanState::InCode,
                };
            }
            ScanState::InCode => {
                if line.starts_with(SNIPPET_PREFIX) {
                    examples.push(substitute_paths(line[1..].trim()));
                }
            }
            ScanState::InExamples => {}
        }
    }

    if headings > 1 {
        tracing::warn!("{}: {} function headings, using `{}`", default_name, headings, name);
    }
    if state == ScanState::InCode {
        tracing::warn!("{}: page ends inside a code fence", default_name);
    }

    FunctionRecord { name, examples }
}

/// Replace `path.module` / `path.root` with the fixture's locals.
pub fn substitute_paths(expr: &str) -> String {
    PATH_SUBSTITUTIONS
        .iter()
        .fold(expr.to_string(), |acc, (from, to)| acc.replace(from, to))
}

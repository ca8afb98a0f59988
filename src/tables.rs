//! Hand-maintained classification tables for the Terraform builtins.

use crate::model::{Classification, Override};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

// Functions without usable examples in the docs must have an override here,
// otherwise generation fails.
static OVERRIDES: LazyLock<HashMap<&'static str, Override>> = LazyLock::new(|| {
    HashMap::from([
        ("base64gzip", Override::Single(r#"base64gzip("test")"#)),
        ("filebase64sha256", Override::Single(r#"filebase64sha256("hello.txt")"#)),
        ("filebase64sha512", Override::Single(r#"filebase64sha512("hello.txt")"#)),
        ("filemd5", Override::Single(r#"filemd5("hello.txt")"#)),
        ("filesha1", Override::Single(r#"filesha1("hello.txt")"#)),
        ("filesha256", Override::Single(r#"filesha256("hello.txt")"#)),
        ("filesha512", Override::Single(r#"filesha512("hello.txt")"#)),
        ("list", Override::Single("list(1, 2, 3)")),
        ("map", Override::Single(r#"map("a", "b", "c", "d")"#)),
        // Copied by hand: the scanner only reads single-line examples.
        ("templatefile", Override::Many(TEMPLATEFILE_EXAMPLES)),
    ])
});

const TEMPLATEFILE_EXAMPLES: &[&str] = &[
    r#"templatefile("${path.module}/backends.tftpl", { port = 8080, ip_addrs = ["10.0.0.1", "10.0.0.2"] })"#,
    r#"templatefile(
               "${path.module}/config.tftpl",
               {
                 config = {
                   "x"   = "y"
                   "foo" = "bar"
                   "key" = "value"
                 }
               }
              )"#,
];

// Only handled by the experimental converter.
static EXPERIMENTAL: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "abs",
        "abspath",
        "base64decode",
        "base64encode",
        "base64gzip",
        "base64sha256",
        "base64sha512",
        "basename",
        "bcrypt",
        "ceil",
        "chomp",
        "cidrhost",
        "cidrnetmask",
        "cidrsubnet",
        "compact",
        "csvdecode",
        "dirname",
        "endswith",
        "filebase64sha512",
        "fileexists",
        "filemd5",
        "filesha1",
        "filesha256",
        "filesha512",
        "floor",
        "indent",
        "join",
        "log",
        "lower",
        "max",
        "md5",
        "min",
        "parseint",
        "pathexpand",
        "pow",
        "range",
        "replace",
        "rsadecrypt",
        "sensitive",
        "sha256",
        "sha512",
        "signum",
        "sort",
        "startswith",
        "strrev",
        "substr",
        "sum",
        "timeadd",
        "timecmp",
        "timestamp",
        "title",
        "transpose",
        "trim",
        "trimprefix",
        "trimspace",
        "trimsuffix",
        "upper",
        "urlencode",
        "uuid",
    ])
});

// Not converted at all yet; never written to the fixture.
static UNSUPPORTED: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "alltrue",
        "anytrue",
        "can",
        "chunklist",
        "cidrsubnets",
        "coalesce",
        "coalescelist",
        "concat",
        "contains",
        "distinct",
        "fileset",
        "flatten",
        "format",
        "formatdate",
        "formatlist",
        "index",
        "jsondecode",
        "keys",
        "list",
        "map",
        "matchkeys",
        "merge",
        "nonsensitive",
        "one",
        "regex",
        "regexall",
        "reverse",
        "setintersection",
        "setproduct",
        "setsubtract",
        "setunion",
        "slice",
        "templatefile",
        "textdecodebase64",
        "textencodebase64",
        "tobool",
        "tolist",
        "tomap",
        "tonumber",
        "toset",
        "tostring",
        "try",
        "type",
        "uuidv5",
        "values",
        "yamldecode",
        "yamlencode",
        "zipmap",
    ])
});

/// Hand-written examples for `name`, if any.
pub fn override_for(name: &str) -> Option<&'static Override> {
    OVERRIDES.get(name)
}

/// Classify a function. Unsupported wins over experimental.
pub fn classify(name: &str) -> Classification {
    if UNSUPPORTED.contains(name) {
        Classification::Unsupported
    } else if EXPERIMENTAL.contains(name) {
        Classification::Experimental
    } else {
        Classification::Supported
    }
}

/// Names listed as both experimental and unsupported, sorted.
pub fn overlapping() -> Vec<&'static str> {
    EXPERIMENTAL
        .intersection(&UNSUPPORTED)
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

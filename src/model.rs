//! Data model for scraped function pages — independent of the output format.

/// Examples scraped from one documentation page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    /// Resolved function name (file stem, or the `# \`name\` Function` heading)
    pub name: String,
    /// Example expressions in page order, after override resolution
    pub examples: Vec<String>,
}

/// How a function is emitted into the fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Supported,
    /// Wrapped in an `#if EXPERIMENTAL` guard
    Experimental,
    /// Omitted from the fixture
    Unsupported,
}

/// Hand-written replacement for scraped examples.
#[derive(Debug, Clone, Copy)]
pub enum Override {
    Single(&'static str),
    Many(&'static [&'static str]),
}

impl Override {
    pub fn examples(&self) -> Vec<String> {
        match self {
            Override::Single(expr) => vec![expr.to_string()],
            Override::Many(exprs) => exprs.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// A function ready to render, in page order.
#[derive(Debug)]
pub struct FixtureEntry {
    pub record: FunctionRecord,
    pub class: Classification,
}

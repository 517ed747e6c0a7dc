use std::fmt;

/// Inputs to rendering that do not come from the answers.
///
/// Passed in explicitly so rendering stays a pure function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    year: i32,
}

impl RenderContext {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Year printed in the licence copyright line.
    pub fn year(&self) -> i32 {
        self.year
    }
}

/// A rendered Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDocument(String);

impl RenderDocument {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self(markdown.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

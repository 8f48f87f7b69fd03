use std::fmt;

/// Where and why a `.cbml` document failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// 1-based.
    pub line: usize,
    /// 1-based, in characters.
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col }
    }

    /// The offending source line with a caret under the error column.
    ///
    /// Returns just the message when `src` has no such line.
    pub fn annotate(&self, src: &str) -> String {
        let Some(text) = src.lines().nth(self.line.saturating_sub(1)) else {
            return self.to_string();
        };
        let gutter = self.line.to_string();
        let pad = " ".repeat(gutter.len());
        let caret = " ".repeat(self.col.saturating_sub(1));
        format!("{self}\n{pad} |\n{gutter} | {text}\n{pad} | {caret}^")
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for ParseError {}

use serde::Serialize;

/// A point in a script, 1-based as pest reports it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash, Serialize)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(file: String, line: usize, column: usize) -> Self {
        Self { file, line, column }
    }

    pub fn from_position(file: &str, pos: pest::Position<'_>) -> Self {
        let (line, column) = pos.line_col();
        Self::new(file.to_string(), line, column)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash, Serialize)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    pub fn from_pest(file: &str, span: pest::Span<'_>) -> Self {
        Self::new(
            Location::from_position(file, span.start_pos()),
            Location::from_position(file, span.end_pos()),
        )
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

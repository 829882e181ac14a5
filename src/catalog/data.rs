/// Shared data structures for catalog rows
///
/// These structs represent the data that flows between the database
/// layer and the matching pipeline.

/// A catalog row still waiting for an image path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    /// Unique database ID
    pub id: i64,
    /// Book number, 1-based
    pub book: u32,
    /// Page number within the book, 1-based
    pub page: u32,
}

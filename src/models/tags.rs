/// Scene classification for an input photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    /// A photographed document page (receives rectification + enhancement).
    Document,
    /// A photographed item/object (passed through untouched).
    ItemPhoto,
}

/// Layout classification for a document image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Grid-structured content with horizontal and vertical rules.
    Table,
    /// Free-form text, labels or single lines.
    TextLabel,
}

//! Transient segmentation types for one announcement page.

/// Classification of a text block within a page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// All-uppercase service/section header (e.g. "NAVY")
    Header,
    /// An award announcement paragraph
    Paragraph,
}

/// One text-bearing block from a page body, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub text: String,
    pub kind: BlockKind,
}

impl TextBlock {
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BlockKind::Header,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BlockKind::Paragraph,
        }
    }
}

/// A paragraph block paired with its resolved service context.
///
/// The service is the most recent header block preceding the paragraph,
/// threaded explicitly instead of mutated during iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub service: String,
    pub text: String,
}

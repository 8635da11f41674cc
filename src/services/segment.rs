// src/services/segment.rs

//! Detail-page body segmentation.
//!
//! An announcement page body interleaves all-uppercase service headers
//! ("NAVY", "AIR FORCE") with award paragraphs. The segmenter walks the
//! content container in document order and classifies each block; the
//! annotator then pairs every paragraph with the most recent header.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Announcement, BlockKind, TextBlock};

/// Split a detail page into classified text blocks.
///
/// Enumerates the child elements of the content container in document
/// order. A block whose trimmed text contains no lowercase letters (it
/// equals its own upper-cased form) is a header; anything else is an award
/// paragraph. Whitespace-only blocks are dropped. A page without the
/// container yields no blocks.
pub fn segment(markup: &str, body_selector: &str) -> Result<Vec<TextBlock>> {
    let selector = Selector::parse(body_selector)
        .map_err(|e| AppError::selector(body_selector, format!("{e:?}")))?;
    let document = Html::parse_document(markup);

    let Some(body) = document.select(&selector).next() else {
        return Ok(Vec::new());
    };

    let mut blocks = Vec::new();
    for child in body.children().filter_map(ElementRef::wrap) {
        let text: String = child.text().collect();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }
        let kind = if trimmed == trimmed.to_uppercase() {
            BlockKind::Header
        } else {
            BlockKind::Paragraph
        };
        blocks.push(TextBlock {
            text: trimmed.to_string(),
            kind,
        });
    }

    Ok(blocks)
}

/// Pair each paragraph block with its resolved service context.
///
/// The service is the text of the most recent header block; paragraphs
/// before the first header carry an empty service.
pub fn annotate(blocks: &[TextBlock]) -> Vec<Announcement> {
    let mut service = String::new();
    let mut announcements = Vec::new();

    for block in blocks {
        match block.kind {
            BlockKind::Header => service = block.text.clone(),
            BlockKind::Paragraph => announcements.push(Announcement {
                service: service.clone(),
                text: block.text.clone(),
            }),
        }
    }

    announcements
}

//! A minimal page canvas over `lopdf`.
//!
//! Strings are drawn at absolute positions (points, origin bottom-left) with
//! one of the two standard Helvetica faces. Pages are finished explicitly
//! with [`Canvas::show_page`]; [`Canvas::save`] writes the document.

use std::path::Path;

use anyhow::{Context, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, StringFormat};

/// US letter, in points.
pub const LETTER: (i64, i64) = (612, 792);

/// Standard Type1 fonts available on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    fn base_font(self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }
}

pub struct Canvas {
    page_size: (i64, i64),
    finished: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    font: Font,
    font_size: i64,
}

impl Canvas {
    pub fn new(page_size: (i64, i64)) -> Self {
        Self {
            page_size,
            finished: Vec::new(),
            current: Vec::new(),
            font: Font::Helvetica,
            font_size: 12,
        }
    }

    pub fn page_size(&self) -> (i64, i64) {
        self.page_size
    }

    pub fn set_font(&mut self, font: Font, size: i64) {
        self.font = font;
        self.font_size = size;
    }

    /// Draw one line of text with its baseline starting at `(x, y)`.
    pub fn draw_string(&mut self, x: i64, y: i64, text: &str) {
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![
                    Object::Name(self.font.resource_name().as_bytes().to_vec()),
                    Object::Integer(self.font_size),
                ],
            ),
            Operation::new("Td", vec![Object::Integer(x), Object::Integer(y)]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    /// Finish the current page; drawing continues on a new blank page.
    pub fn show_page(&mut self) {
        self.finished.push(std::mem::take(&mut self.current));
    }

    /// Pages the saved document will have.
    pub fn page_count(&self) -> usize {
        if self.current.is_empty() && !self.finished.is_empty() {
            self.finished.len()
        } else {
            self.finished.len() + 1
        }
    }

    /// Write the document to `path`, returning the number of pages.
    ///
    /// The current page is kept if anything was drawn on it, or if it would
    /// otherwise be the only page.
    pub fn save(mut self, path: &Path) -> Result<usize> {
        if !self.current.is_empty() || self.finished.is_empty() {
            self.show_page();
        }
        let page_count = self.finished.len();

        let mut doc = self.into_document()?;
        doc.save(path)
            .with_context(|| format!("failed to write PDF: {}", path.display()))?;
        Ok(page_count)
    }

    fn into_document(self) -> Result<Document> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = lopdf::Dictionary::new();
        for font in [Font::Helvetica, Font::HelveticaBold] {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! { "Font" => fonts });

        let (width, height) = self.page_size;
        let mut kids = Vec::with_capacity(self.finished.len());
        for operations in self.finished {
            let content = Content { operations };
            let encoded = content.encode().context("failed to encode page content")?;
            let content_id = doc.add_object(lopdf::Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::from(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        Ok(doc)
    }
}

/// Encode text for a WinAnsi-encoded standard font.
///
/// Latin-1 characters map to themselves, the common typographic punctuation
/// to its WinAnsi slot; anything else is dropped.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .filter_map(|c| match c {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '™' => Some(0x99),
            '\t' => Some(b' '),
            c if c.is_control() => None,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => Some(c as u8),
            _ => None,
        })
        .collect()
}

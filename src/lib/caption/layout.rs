//! Module implementing the layout of caption text.
//!
//! All the sizes here are derived from the image width using integer arithmetic,
//! so that the same input always results in exactly the same layout.

use std::mem;

use crate::model::constants::{FONT_SIZE_DIVISOR, LINE_LEADING, MIN_FONT_SIZE, MIN_LINE_CHARS};


/// Font size (in pixels) used for captions on an image of given width.
#[inline]
pub fn font_size(image_width: u32) -> u32 {
    MIN_FONT_SIZE.max(image_width / FONT_SIZE_DIVISOR)
}

/// Maximum number of characters in a single line of caption text.
///
/// This approximates how many glyphs of given font size fit within the image,
/// assuming an average glyph is half as wide as the font size.
#[inline]
pub fn max_line_chars(image_width: u32, font_size: u32) -> u32 {
    MIN_LINE_CHARS.max(image_width / (font_size / 2).max(1))
}

/// Height of a single line of caption text (font size plus leading).
#[inline]
pub fn line_height(font_size: u32) -> u32 {
    font_size + LINE_LEADING
}


/// Caption text broken into lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineBlock {
    lines: Vec<String>,
    line_height: u32,
}

impl LineBlock {
    #[inline]
    pub fn lines(&self) -> &[String] { &self.lines }

    #[inline]
    pub fn len(&self) -> usize { self.lines.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Vertical distance between consecutive lines.
    #[inline]
    pub fn line_height(&self) -> u32 { self.line_height }

    /// Total height of the block.
    #[inline]
    pub fn height(&self) -> u32 {
        self.line_height * self.lines.len() as u32
    }
}


/// Lay out the caption text for an image of given width.
///
/// Text is upper-cased and wrapped at word boundaries.
/// Empty text produces an empty block.
///
/// Note that the line length limit is expressed in characters,
/// so a line may still end up wider than the image when rendered.
pub fn wrap(text: &str, image_width: u32, font_size: u32) -> LineBlock {
    let line_height = line_height(font_size);
    if text.is_empty() {
        return LineBlock{lines: vec![], line_height};
    }

    let max_chars = max_line_chars(image_width, font_size);
    let lines = wrap_lines(&text.to_uppercase(), max_chars as usize);
    trace!("Wrapped caption of {} character(s) into {} line(s) of at most {} characters",
        text.chars().count(), lines.len(), max_chars);
    LineBlock{lines, line_height}
}


/// Break the text into lines of at most `width` characters.
///
/// This is a greedy algorithm: each line takes as many chunks (words or runs
/// of whitespace) as will fit. Whitespace at the line breaks is dropped.
/// Words that don't fit within a line by themselves are broken up.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);

    // Chunks are kept in reverse so that the next one can be popped off the end.
    let mut chunks = split_chunks(text);
    chunks.reverse();

    let mut lines = vec![];
    while !chunks.is_empty() {
        // Whitespace at the beginning of any line but the first one
        // is represented by the line break itself.
        if !lines.is_empty() && chunks.last().map(|c| is_blank(c)).unwrap_or(false) {
            chunks.pop();
        }

        let mut line: Vec<Vec<char>> = vec![];
        let mut line_len = 0;
        while let Some(chunk) = chunks.pop() {
            if line_len + chunk.len() <= width {
                line_len += chunk.len();
                line.push(chunk);
            } else {
                chunks.push(chunk);
                break;
            }
        }

        // A chunk that can't fit even in an empty line is broken up,
        // with the first part filling the rest of the current one.
        if let Some(chunk) = chunks.last_mut() {
            if chunk.len() > width {
                let rest = chunk.split_off(width - line_len);
                line.push(mem::replace(chunk, rest));
            }
        }

        while line.last().map(|c| is_blank(c)).unwrap_or(false) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.into_iter().flatten().collect());
        }
    }
    lines
}

/// Split text into chunks that line breaks may occur between:
/// runs of whitespace, and words (further split after inner hyphens).
///
/// Every whitespace character is replaced with a space.
fn split_chunks(text: &str) -> Vec<Vec<char>> {
    let mut chunks: Vec<Vec<char>> = vec![];
    let mut current: Vec<char> = vec![];
    let chars: Vec<char> = text.chars().collect();
    for (i, &ch) in chars.iter().enumerate() {
        let space = ch.is_whitespace();
        if let Some(&last) = current.last() {
            if (last == ' ') != space {
                chunks.push(mem::replace(&mut current, vec![]));
            }
        }
        current.push(if space { ' ' } else { ch });

        // "WELL-KNOWN" can be broken as "WELL-" and "KNOWN".
        let hyphen_break = ch == '-'
            && i > 0 && chars[i - 1].is_alphanumeric()
            && chars.get(i + 1).map(|c| c.is_alphabetic()).unwrap_or(false);
        if hyphen_break {
            chunks.push(mem::replace(&mut current, vec![]));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[inline]
fn is_blank(chunk: &[char]) -> bool {
    chunk.iter().all(|&c| c == ' ')
}

//! Text wrapping and truncation for terminal display.
//!
//! Widths are measured in terminal columns with `unicode-width`, so wide
//! characters such as CJK text and emoji take two cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Wraps prose at word boundaries so no line exceeds `max_width` columns.
///
/// Existing line breaks are kept and blank lines are preserved as paragraph
/// breaks. A single word wider than `max_width` is hard-wrapped. A
/// `max_width` of zero disables wrapping.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return text.lines().map(str::to_owned).collect();
    }

    let mut wrapped = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            wrapped.push(String::new());
            continue;
        }
        wrap_line(line, max_width, &mut wrapped);
    }
    wrapped
}

fn wrap_line(line: &str, max_width: usize, wrapped: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0_usize;

    for word in line.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        let separator = usize::from(!current.is_empty());

        if current_width.saturating_add(separator).saturating_add(word_width) <= max_width {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width = current_width.saturating_add(separator).saturating_add(word_width);
            continue;
        }

        if !current.is_empty() {
            wrapped.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            let mut pieces = hard_wrap(word, max_width);
            if let Some(last) = pieces.pop() {
                wrapped.extend(pieces);
                current_width = UnicodeWidthStr::width(last.as_str());
                current = last;
            }
        }
    }

    if !current.is_empty() {
        wrapped.push(current);
    }
}

fn hard_wrap(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0_usize;

    for ch in word.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if piece_width.saturating_add(char_width) > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width = piece_width.saturating_add(char_width);
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Truncates a single line to `max_width` columns, ending with `...` when
/// anything was cut.
#[must_use]
pub fn truncate_to_width(line: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(line) <= max_width {
        return line.to_owned();
    }

    let keeps_ellipsis = max_width >= ELLIPSIS.len();
    let budget = if keeps_ellipsis {
        max_width.saturating_sub(ELLIPSIS.len())
    } else {
        max_width
    };
    let mut output = String::new();
    let mut used = 0_usize;
    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > budget {
            break;
        }
        output.push(ch);
        used = used.saturating_add(char_width);
    }

    if keeps_ellipsis {
        output.push_str(ELLIPSIS);
    }
    output
}

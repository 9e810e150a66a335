// Text-run translation and LaTeX escaping

use super::lookup::{SYMBOLS, fold_math_alphanumeric};
use memchr::memchr3;
use unicode_segmentation::UnicodeSegmentation;

/// Characters with a special meaning in LaTeX math mode
const RESERVED: &[char] = &['{', '}', '_', '^', '#', '&', '$', '%', '~'];

#[inline]
fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// Quick check whether escaping can change `text`
#[inline]
fn needs_escape(text: &str) -> bool {
    let bytes = text.as_bytes();
    memchr3(b'{', b'}', b'\\', bytes).is_some()
        || memchr3(b'_', b'^', b'#', bytes).is_some()
        || memchr3(b'&', b'$', b'%', bytes).is_some()
        || memchr::memchr(b'~', bytes).is_some()
}

/// Escape LaTeX reserved characters
///
/// Doubled backslashes are collapsed first. A reserved character is then
/// prefixed with a backslash unless the character before it already is one,
/// so text that is already escaped comes back unchanged.
pub fn escape_latex(text: &str) -> String {
    if !needs_escape(text) {
        return text.to_string();
    }

    let collapsed = text.replace("\\\\", "\\");
    let mut out = String::with_capacity(collapsed.len() + 8);
    let mut last = '\0';

    for c in collapsed.chars() {
        if is_reserved(c) && last != '\\' {
            out.push('\\');
        }
        out.push(c);
        last = c;
    }

    out
}

/// Translate the text of a run into LaTeX
///
/// Iterates by grapheme cluster so combining sequences stay intact. Math
/// italic letters fold to their plain forms, each cluster is looked up in
/// the symbol table (unmapped clusters pass through), and the result is
/// escaped.
pub fn translate_run(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for grapheme in text.graphemes(true) {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                let folded = fold_math_alphanumeric(c);
                if folded != c {
                    let mut buf = [0u8; 4];
                    push_symbol(&mut out, folded.encode_utf8(&mut buf));
                } else {
                    push_symbol(&mut out, grapheme);
                }
            },
            _ => push_symbol(&mut out, grapheme),
        }
    }

    escape_latex(&out)
}

#[inline]
fn push_symbol(out: &mut String, glyph: &str) {
    out.push_str(SYMBOLS.get(glyph).copied().unwrap_or(glyph));
}

/// Whether an n-ary operand is braced
///
/// Longer than two characters and containing a sign or a command.
pub fn is_complex_operand(text: &str) -> bool {
    text.chars().count() > 2 && text.contains(['+', '-', '\\'])
}

/// Whether appending `next` to `out` would fuse it into a trailing control word
pub fn needs_separator(out: &str, next: &str) -> bool {
    let Some(first) = next.chars().next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }

    let word = out.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    word.len() < out.len() && word.ends_with('\\') && !word.ends_with("\\\\")
}

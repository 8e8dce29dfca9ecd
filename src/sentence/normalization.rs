// WHY: standalone cleanup and word normalization so the segmenter and the
// stats calculator share one definition of a "word"

use super::Word;

/// Clean a raw sentence span: runs of commas become one comma, runs of
/// whitespace (including line breaks) become one space, ends are trimmed
pub fn clean_sentence(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    clean_sentence_into(text, &mut result);
    result
}

/// Clean a sentence span into supplied buffer to avoid allocation
pub fn clean_sentence_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut prev_was_space = false;
    let mut prev_was_comma = false;

    for ch in text.chars() {
        match ch {
            ',' => {
                if !prev_was_comma {
                    buffer.push(',');
                    prev_was_comma = true;
                }
                prev_was_space = false;
            }
            _ if ch.is_whitespace() => {
                // \r\n, tabs and runs of blanks all collapse to one space
                if !prev_was_space {
                    buffer.push(' ');
                    prev_was_space = true;
                }
                prev_was_comma = false;
            }
            _ => {
                buffer.push(ch);
                prev_was_space = false;
                prev_was_comma = false;
            }
        }
    }

    let trimmed = buffer.trim();
    if trimmed.len() != buffer.len() {
        let trimmed_content = trimmed.to_string();
        buffer.clear();
        buffer.push_str(&trimmed_content);
    }
}

/// Replace every character that cannot be part of a word with a space.
///
/// Letters, digits and whitespace survive. An apostrophe or hyphen survives
/// only when it sits between two letters ("it's", "well-known"); the
/// neighbours are looked up in the original text, not in the partially
/// cleaned output.
pub fn strip_non_word_chars(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());

    for (i, &ch) in chars.iter().enumerate() {
        let keep = if ch.is_alphabetic() || ch.is_numeric() || ch.is_whitespace() {
            true
        } else if is_joiner(ch) {
            let letter_before = i > 0 && chars[i - 1].is_alphabetic();
            let letter_after = chars.get(i + 1).is_some_and(|c| c.is_alphabetic());
            letter_before && letter_after
        } else {
            false
        };

        result.push(if keep { ch } else { ' ' });
    }

    result
}

fn is_joiner(ch: char) -> bool {
    ch == '\'' || ch == '-'
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Word Normalizer: turn sentence text into its ordered sequence of words
pub fn normalize_words(text: &str) -> Vec<Word> {
    strip_non_word_chars(text)
        .split_whitespace()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| Word::new(capitalize_first(fragment)))
        .collect()
}

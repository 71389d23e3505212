/// Wraps text into lines of at most `width` characters.
///
/// Existing line breaks are kept and blank lines survive as empty lines.
/// Words are split on whitespace; a word longer than `width` is broken
/// across lines. A `width` of zero is treated as one.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();

            // Break words that can never fit on a line.
            while chars.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = chars.split_off(width);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }

            let word_len = chars.len();
            if word_len == 0 {
                continue;
            }

            let needed = if line_len == 0 { word_len } else { line_len + 1 + word_len };
            if needed > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(chars);
            line_len += word_len;
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap("x = 3", 20), ["x = 3"]);
    }

    #[test]
    fn breaks_between_words() {
        assert_eq!(
            wrap("the discriminant is positive", 16),
            ["the discriminant", "is positive"]
        );
    }

    #[test]
    fn keeps_paragraph_breaks() {
        assert_eq!(wrap("Step 1\n\nStep 2", 40), ["Step 1", "", "Step 2"]);
    }

    #[test]
    fn splits_long_words() {
        assert_eq!(wrap("ab abcdefgh", 3), ["ab", "abc", "def", "gh"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(wrap("x² − 4ac", 4), ["x² −", "4ac"]);
    }

    #[test]
    fn collapses_repeated_spaces() {
        assert_eq!(wrap("a   b", 10), ["a b"]);
    }
}

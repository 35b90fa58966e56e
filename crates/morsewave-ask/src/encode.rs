use phf::phf_map;

static MORSE_TABLE: phf::Map<char, &'static str> = phf_map! {
    'A' => ".-",
    'B' => "-...",
    'C' => "-.-.",
    'D' => "-..",
    'E' => ".",
    'F' => "..-.",
    'G' => "--.",
    'H' => "....",
    'I' => "..",
    'J' => ".---",
    'K' => "-.-",
    'L' => ".-..",
    'M' => "--",
    'N' => "-.",
    'O' => "---",
    'P' => ".--.",
    'Q' => "--.-",
    'R' => ".-.",
    'S' => "...",
    'T' => "-",
    'U' => "..-",
    'V' => "...-",
    'W' => ".--",
    'X' => "-..-",
    'Y' => "-.--",
    'Z' => "--..",
    '0' => "-----",
    '1' => ".----",
    '2' => "..---",
    '3' => "...--",
    '4' => "....-",
    '5' => ".....",
    '6' => "-....",
    '7' => "--...",
    '8' => "---..",
    '9' => "----.",
};

/// Look up the Morse code for a single character, case-insensitively.
pub fn code_for(ch: char) -> Option<&'static str> {
    MORSE_TABLE.get(&ch.to_ascii_uppercase()).copied()
}

/// Encode text as a Morse string, joining per-character codes with spaces.
///
/// Characters outside the table (punctuation, whitespace, anything accented)
/// contribute an empty code. The separator is still inserted around them, so
/// an input space shows up as two consecutive spaces in the output; the
/// synthesizer turns each of those into a letter gap, which together form the
/// word gap.
pub fn text_to_morse(text: &str) -> String {
    text.chars()
        .map(|ch| code_for(ch).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_characters_match_table() {
        assert_eq!(text_to_morse("A"), ".-");
        assert_eq!(text_to_morse("E"), ".");
        assert_eq!(text_to_morse("5"), ".....");
        assert_eq!(text_to_morse("0"), "-----");
    }

    #[test]
    fn lowercase_folds_to_uppercase() {
        assert_eq!(text_to_morse("sos"), text_to_morse("SOS"));
        assert_eq!(text_to_morse("sos"), "... --- ...");
    }

    #[test]
    fn codes_join_with_single_spaces() {
        assert_eq!(text_to_morse("AB"), ".- -...");
        assert_eq!(text_to_morse("HI5"), ".... .. .....");
    }

    #[test]
    fn unmapped_characters_keep_their_separator() {
        // '!' has no code, so its token is empty but both separators remain.
        assert_eq!(text_to_morse("A!B"), ".-  -...");
        assert_eq!(text_to_morse("A B"), ".-  -...");
        assert_eq!(text_to_morse("!"), "");
        assert_eq!(text_to_morse("é"), "");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(text_to_morse(""), "");
    }
}

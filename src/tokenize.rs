//! Line splitting for option streams.
//!
//! Option files and argument lists are whitespace-separated `name=value`
//! tokens. [`split_quoted`] is the splitter the parser uses: double quotes
//! group a region so embedded whitespace survives, and the quote characters
//! themselves never reach the output. [`split`] is the plain single-delimiter
//! form used for comma-packed option strings.

/// Split on space, tab, CR, and LF, honoring double quotes.
///
/// A `"` toggles quoting and is dropped from the output; delimiters inside a
/// quoted region are literal. Runs of delimiters produce no empty tokens. An
/// unterminated quote extends to the end of the line.
pub fn split_quoted(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quote = !in_quote,
            ' ' | '\t' | '\n' | '\r' if !in_quote => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Split on a single delimiter, dropping empty pieces.
pub fn split(text: &str, delim: char) -> Vec<&str> {
    text.split(delim).filter(|piece| !piece.is_empty()).collect()
}

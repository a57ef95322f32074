/// Split text into sentences at `.`, `!`, or `?` followed by whitespace.
///
/// Terminal punctuation stays attached to its sentence, internal runs of
/// whitespace (including newlines) collapse to single spaces, and empty
/// fragments are dropped. Casing is preserved — matched sentences are
/// returned to the user verbatim.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            if current.ends_with(['.', '!', '?']) {
                flush(&mut sentences, &mut current);
            } else if !current.is_empty() && !current.ends_with(' ') {
                current.push(' ');
            }
        } else {
            current.push(c);
        }
    }
    flush(&mut sentences, &mut current);

    sentences
}

fn flush(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

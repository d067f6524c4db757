/// Reduces a participant name to display initials.
///
/// Names with at least two whitespace-separated tokens reduce to the first
/// character of each of the first two tokens. Single-token names reduce to
/// their first two characters. Returns `None` for empty or all-whitespace
/// names so the caller can pick a fallback. The characters are taken as
/// given; no case normalization is applied.
pub fn initials(name: &str) -> Option<String> {
    let name_chunks: Vec<&str> = name
        .split(' ')
        .map(|chunk| chunk.trim())
        .filter(|chunk| !chunk.is_empty())
        .collect();

    // Extract first name and family name initials?
    if name_chunks.len() >= 2 {
        let first_initial = name_chunks[0].chars().next()?;
        let second_initial = name_chunks[1].chars().next()?;
        return Some(format!("{}{}", first_initial, second_initial));
    }

    // Extract first two characters of first name?
    if let Some(first_chunk) = name_chunks.first() {
        return Some(first_chunk.chars().take(2).collect());
    }

    None
}

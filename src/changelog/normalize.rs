/// Trim and upper-case the first character. The rest of the subject is kept as written.
pub fn normalize(subject: &str) -> String {
    let trimmed = subject.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

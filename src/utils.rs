pub fn trim_line(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Shows only the first few characters of a secret so it can be logged.
pub fn mask_secret(secret: &str) -> String {
    const VISIBLE: usize = 4;

    if secret.chars().count() <= VISIBLE * 2 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(VISIBLE).collect();
    format!("{prefix}***")
}

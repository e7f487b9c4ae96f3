use std::fs;

pub fn load(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Failed to read file '{}': {}", path, e))
}

/// Reads `path` and drops a single trailing newline, if any.
pub fn load_trimmed(path: &str) -> Result<String, String> {
    let content = load(path)?;
    Ok(content
        .strip_suffix('\n')
        .map(str::to_string)
        .unwrap_or(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_file_success() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, "production\n").unwrap();

        let result = load(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(result, "production\n");
    }

    #[test]
    fn test_load_file_not_found() {
        let result = load("/nonexistent/environment");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to read file"));
    }

    #[test]
    fn test_load_trimmed_drops_one_newline() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, "staging\n\n").unwrap();

        let result = load_trimmed(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(result, "staging\n");
    }

    #[test]
    fn test_load_trimmed_without_newline() {
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(&temp_file, "dev").unwrap();

        let result = load_trimmed(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(result, "dev");
    }
}

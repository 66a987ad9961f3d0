use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read and decode a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use souschef_core::{ConversationRole, ConversationTurn};
    use std::io::Write;

    #[test]
    fn test_load_history() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"role": "user", "content": "less salt"}}, {{"role": "assistant", "content": "Done."}}]"#
        )
        .unwrap();

        let history: Vec<ConversationTurn> = load_json(file.path()).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, ConversationRole::Requester);
        assert_eq!(history[1].content, "Done.");
    }

    #[test]
    fn test_load_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("recipe.json");
        let err = load_json::<serde_json::Value>(&missing).unwrap_err();
        assert!(err.to_string().contains("recipe.json"));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        let err = load_json::<serde_json::Value>(&bad).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}

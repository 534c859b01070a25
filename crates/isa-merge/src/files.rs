use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{MergeError, Result};
use crate::model::{InstructionTable, PseudoTable};

/// Reads and parses a whole JSON document. The file is closed before this
/// returns.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| MergeError::read(path, source))?;
    debug!(path = %path.display(), bytes = text.len(), "read input");
    serde_json::from_str(&text).map_err(|source| MergeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_instructions(path: &Path) -> Result<InstructionTable> {
    read_json(path)
}

pub fn read_pseudo(path: &Path) -> Result<PseudoTable> {
    read_json(path)
}

/// Serializes `value` to `path`, replacing any existing file. A failure
/// part way through can leave the file truncated.
pub fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let file = File::create(path).map_err(|source| MergeError::write(path, source))?;
    let mut writer = BufWriter::new(file);
    let serialized = if pretty {
        serde_json::to_writer_pretty(&mut writer, value)
    } else {
        serde_json::to_writer(&mut writer, value)
    };
    serialized.map_err(|source| MergeError::write(path, source.into()))?;
    writer
        .flush()
        .map_err(|source| MergeError::write(path, source))?;
    debug!(path = %path.display(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn parse_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pseudo-instructions.json");
        fs::write(&path, "{ not json").unwrap();
        let err = read_pseudo(&path).unwrap_err();
        assert!(matches!(err, MergeError::Parse { .. }));
        assert!(err.to_string().contains("pseudo-instructions.json"));
    }

    #[test]
    fn compact_output_has_no_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&path, &json!({"a": [1, 2]}), false).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn pretty_output_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&path, &json!({"a": [1, 2]}), true).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains('\n'));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, json!({"a": [1, 2]}));
    }
}

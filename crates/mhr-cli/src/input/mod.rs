pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Input from `--input` if given, otherwise from piped stdin.
///
/// `Ok(None)` means neither was supplied and the caller should fall back
/// to its own flags.
pub fn read_input<T: DeserializeOwned>(
    path: Option<&str>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(file::read_json(path)?));
    }
    match stdin::read_stdin()? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Like [`read_input`], but one of the two sources is required.
pub fn require_input<T: DeserializeOwned>(
    path: Option<&str>,
    what: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    read_input(path)?.ok_or_else(|| {
        format!("{what} JSON is required (provide --input or pipe it on stdin)").into()
    })
}

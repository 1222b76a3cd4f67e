//! Front matter splitting.
//!
//! A file has front matter when its first three bytes are the delimiter
//! `---`. The block runs up to the next delimiter occurrence and is parsed as
//! TOML; everything after that second delimiter is the body.
//!
//! Delimiters are matched as plain substrings, not as whole lines, so a `---`
//! inside the metadata block (e.g. in a quoted title) ends the block early.
//! Delimiters after the second one belong to the body.

use crate::metadata::{Metadata, MetadataError};

/// Front matter delimiter.
pub const DELIMITER: &str = "---";

/// Result of splitting a file into metadata and body.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FrontMatter {
    /// Parsed metadata, `None` when the file has no front matter.
    pub metadata: Option<Metadata>,
    /// Content after the front matter.
    pub body: String,
}

/// Split raw file content into front matter and body.
///
/// `file_name` is only used for error messages. Invalid UTF-8 is replaced
/// lossily.
///
/// # Errors
///
/// Returns [`MetadataError::Parse`] if the block is not valid TOML, has a
/// field of the wrong type, or is never closed.
pub fn split_front_matter(data: &[u8], file_name: &str) -> Result<FrontMatter, MetadataError> {
    let text = String::from_utf8_lossy(data);

    if !data.starts_with(DELIMITER.as_bytes()) {
        return Ok(FrontMatter {
            metadata: None,
            body: text.into_owned(),
        });
    }

    let mut parts = text.splitn(3, DELIMITER).skip(1);
    let (Some(block), Some(body)) = (parts.next(), parts.next()) else {
        return Err(MetadataError::Parse {
            file: file_name.to_owned(),
            message: "missing closing delimiter".to_owned(),
        });
    };

    let metadata: Metadata = toml::from_str(block).map_err(|e| MetadataError::Parse {
        file: file_name.to_owned(),
        message: e.to_string(),
    })?;

    Ok(FrontMatter {
        metadata: Some(metadata),
        body: body.to_owned(),
    })
}

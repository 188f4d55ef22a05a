//! Storage values and listing records

use crate::path::StoragePath;

/// A value flowing through load/save/delete: a path, an optional payload
/// and an optional content type
///
/// `save` may return a value whose path differs from the input, e.g. when
/// the metadata store assigns a generated identity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StorageValue {
    path: StoragePath,
    payload: Option<Vec<u8>>,
    content_type: Option<String>,
}

impl StorageValue {
    /// A value with no payload
    pub fn new(path: StoragePath) -> Self {
        StorageValue {
            path,
            payload: None,
            content_type: None,
        }
    }

    /// Attach a payload
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Attach a content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// The path this value lives at
    pub fn path(&self) -> &StoragePath {
        &self.path
    }

    /// Rewrite the path, consuming the value
    pub fn at_path(mut self, path: StoragePath) -> Self {
        self.path = path;
        self
    }

    /// The payload bytes, if any
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    /// The content type, if any
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// An info record describing this value
    pub fn info(&self) -> StorageInfo {
        StorageInfo {
            path: self.path.clone(),
            content_type: self.content_type.clone(),
            size: self.payload.as_ref().map_or(0, Vec::len),
        }
    }
}

/// One record in a `list` result
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StorageInfo {
    /// Where the value lives
    pub path: StoragePath,
    /// Its content type, if any
    pub content_type: Option<String>,
    /// Payload size in bytes
    pub size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder() {
        let value = StorageValue::new(StoragePath::parse("/cell/A1"))
            .with_payload(b"=1+2".to_vec())
            .with_content_type("text/plain");
        assert_eq!(value.path().to_string(), "/cell/A1");
        assert_eq!(value.payload(), Some(&b"=1+2"[..]));
        assert_eq!(value.content_type(), Some("text/plain"));
    }

    #[test]
    fn test_info() {
        let value = StorageValue::new(StoragePath::parse("/cell/A1")).with_payload(b"123".to_vec());
        let info = value.info();
        assert_eq!(info.path, StoragePath::parse("/cell/A1"));
        assert_eq!(info.size, 3);
        assert_eq!(info.content_type, None);
    }

    #[test]
    fn test_at_path_rewrites() {
        let value = StorageValue::new(StoragePath::parse("/spreadsheet")).with_payload(b"{}".to_vec());
        let moved = value.clone().at_path(StoragePath::parse("/spreadsheet/1"));
        assert_eq!(moved.path().to_string(), "/spreadsheet/1");
        assert_eq!(moved.payload(), value.payload());
    }
}

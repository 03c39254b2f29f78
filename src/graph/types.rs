use serde::{Deserialize, Serialize};

/// Tag value of a vertex nobody has tagged yet.
pub const NO_TAG: f64 = f64::MAX;

/// A graph vertex: a caller-assigned key plus caller-owned tag and info.
///
/// Algorithms never write `tag` or `info`; they are payload that travels
/// with the vertex through copies and persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vertex {
    key: i64,
    tag: f64,
    info: Option<String>,
}

impl Vertex {
    pub fn new(key: i64) -> Self {
        Self {
            key,
            tag: NO_TAG,
            info: None,
        }
    }

    pub fn key(&self) -> i64 {
        self.key
    }

    pub fn tag(&self) -> f64 {
        self.tag
    }

    pub fn set_tag(&mut self, tag: f64) {
        self.tag = tag;
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    pub fn set_info<T: Into<String>>(&mut self, info: T) {
        self.info = Some(info.into());
    }

    pub fn clear_info(&mut self) {
        self.info = None;
    }

    /// Key, tag and info all match. Unlike `==`, a NaN tag equals itself.
    pub(crate) fn same_fields(&self, other: &Vertex) -> bool {
        self.key == other.key
            && (self.tag == other.tag || (self.tag.is_nan() && other.tag.is_nan()))
            && self.info == other.info
    }
}

//! Inbound/outbound message dictionary.
//!
//! The transport delivers each message as a mapping from small integer keys
//! to tagged values. Scalar wire types (u8/u16/u32) all collapse into one
//! unsigned lane; decoders narrow per key. The JSON form round-trips through
//! serde so recorded message logs can be replayed offline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single tagged field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    /// Unsigned scalar (u8/u16/u32 on the wire).
    Uint(u32),
    /// Short formatted string.
    Str(String),
    /// Opaque packed payload.
    Bytes(Vec<u8>),
}

/// One transport message: integer keys to tagged values.
///
/// # Examples
/// ```
/// use sugarwatch_core::message::Message;
///
/// let msg = Message::new().with_uint(10, 1_700_000_000).with_str(11, "7.5");
/// assert_eq!(msg.get_uint(10), Some(1_700_000_000));
/// assert_eq!(msg.get_str(11), Some("7.5"));
/// assert_eq!(msg.get_uint(99), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message {
    fields: BTreeMap<u32, Value>,
}

impl Message {
    /// Create an empty message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an unsigned scalar field.
    pub fn set_uint(&mut self, key: u32, value: u32) {
        self.fields.insert(key, Value::Uint(value));
    }

    /// Set a string field.
    pub fn set_str(&mut self, key: u32, value: impl Into<String>) {
        self.fields.insert(key, Value::Str(value.into()));
    }

    /// Set a byte-array field.
    pub fn set_bytes(&mut self, key: u32, value: impl Into<Vec<u8>>) {
        self.fields.insert(key, Value::Bytes(value.into()));
    }

    /// Builder form of [`Message::set_uint`].
    pub fn with_uint(mut self, key: u32, value: u32) -> Self {
        self.set_uint(key, value);
        self
    }

    /// Builder form of [`Message::set_str`].
    pub fn with_str(mut self, key: u32, value: impl Into<String>) -> Self {
        self.set_str(key, value);
        self
    }

    /// Builder form of [`Message::set_bytes`].
    pub fn with_bytes(mut self, key: u32, value: impl Into<Vec<u8>>) -> Self {
        self.set_bytes(key, value);
        self
    }

    /// Unsigned scalar at `key`; `None` when absent or differently typed.
    pub fn get_uint(&self, key: u32) -> Option<u32> {
        match self.fields.get(&key) {
            Some(Value::Uint(value)) => Some(*value),
            _ => None,
        }
    }

    /// String at `key`; `None` when absent or differently typed.
    pub fn get_str(&self, key: u32) -> Option<&str> {
        match self.fields.get(&key) {
            Some(Value::Str(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Byte array at `key`; `None` when absent or differently typed.
    pub fn get_bytes(&self, key: u32) -> Option<&[u8]> {
        match self.fields.get(&key) {
            Some(Value::Bytes(value)) => Some(value.as_slice()),
            _ => None,
        }
    }

    /// Whether any value is present at `key`.
    pub fn contains(&self, key: u32) -> bool {
        self.fields.contains_key(&key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the message carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

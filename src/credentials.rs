//! Credential pool with cyclic rotation.
//!
//! [`KeyPool`] owns the ordered list of language-model API keys and the
//! cursor pointing at the current one. Rotation advances the cursor modulo
//! the pool size; the cursor lives for the process lifetime and is never
//! reset, so later queries start from wherever earlier ones left it.
//!
//! The cursor is the only shared mutable state in the system. The pipeline
//! is sequential, but the mutex keeps a future parallel synthesizer safe
//! without changing this type.

use crate::error::LlmError;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// An ordered pool of API keys with a current-index cursor.
///
/// Keys are read once from the environment at startup; rotation never
/// re-reads the environment. The [`fmt::Debug`] impl redacts key material.
pub struct KeyPool {
    keys: Vec<String>,
    cursor: Mutex<usize>,
}

impl KeyPool {
    /// Create a pool from an ordered list of keys, cursor at the first.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] if the list is empty or any key is blank.
    pub fn new(keys: Vec<String>) -> Result<Self, LlmError> {
        if keys.is_empty() {
            return Err(LlmError::Config("credential pool must not be empty".into()));
        }
        if keys.iter().any(|k| k.trim().is_empty()) {
            return Err(LlmError::Config("credential pool contains a blank key".into()));
        }
        Ok(Self {
            keys,
            cursor: Mutex::new(0),
        })
    }

    /// Returns the key the cursor currently points at.
    pub fn current(&self) -> String {
        let cursor = self.lock_cursor();
        self.keys[*cursor].clone()
    }

    /// Advance the cursor to the next key (wrapping) and return that key.
    pub fn rotate(&self) -> String {
        let mut cursor = self.lock_cursor();
        *cursor = (*cursor + 1) % self.keys.len();
        tracing::info!(index = *cursor, "rotated to next API key");
        self.keys[*cursor].clone()
    }

    /// Number of keys in the pool.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if the pool has no keys. Never true for a constructed pool.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The current cursor position (0-based).
    pub fn cursor(&self) -> usize {
        *self.lock_cursor()
    }

    fn lock_cursor(&self) -> std::sync::MutexGuard<'_, usize> {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for KeyPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPool")
            .field("keys", &format_args!("[REDACTED; {}]", self.keys.len()))
            .field("cursor", &self.cursor())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(n: usize) -> KeyPool {
        let keys = (1..=n).map(|i| format!("key-{i}")).collect();
        KeyPool::new(keys).expect("valid pool")
    }

    #[test]
    fn empty_pool_rejected() {
        let err = KeyPool::new(vec![]).unwrap_err();
        assert_eq!(err.code(), "CONFIG_INVALID");
    }

    #[test]
    fn blank_key_rejected() {
        let err = KeyPool::new(vec!["good".into(), "  ".into()]).unwrap_err();
        assert_eq!(err.code(), "CONFIG_INVALID");
    }

    #[test]
    fn current_starts_at_first_key() {
        let pool = pool(3);
        assert_eq!(pool.current(), "key-1");
        assert_eq!(pool.cursor(), 0);
    }

    #[test]
    fn rotate_advances_and_returns_new_key() {
        let pool = pool(3);
        assert_eq!(pool.rotate(), "key-2");
        assert_eq!(pool.current(), "key-2");
        assert_eq!(pool.cursor(), 1);
    }

    #[test]
    fn rotation_is_cyclic_with_pool_size_period() {
        let pool = pool(3);
        for _ in 0..pool.len() {
            pool.rotate();
        }
        assert_eq!(pool.cursor(), 0);
        assert_eq!(pool.current(), "key-1");
    }

    #[test]
    fn single_key_pool_rotates_to_itself() {
        let pool = pool(1);
        assert_eq!(pool.rotate(), "key-1");
        assert_eq!(pool.cursor(), 0);
    }

    #[test]
    fn cursor_persists_across_calls() {
        let pool = pool(3);
        pool.rotate();
        pool.rotate();
        // A later caller sees the cursor where the previous one left it.
        assert_eq!(pool.current(), "key-3");
    }

    #[test]
    fn debug_redacts_key_material() {
        let pool = pool(2);
        let debug = format!("{pool:?}");
        assert!(!debug.contains("key-1"));
        assert!(debug.contains("REDACTED"));
        assert!(debug.contains("cursor"));
    }

    #[test]
    fn pool_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KeyPool>();
    }
}

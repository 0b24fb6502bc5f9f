//! Drag identifier codec.
//!
//! The drag-sensing layer tracks draggable and droppable elements by
//! opaque string tokens. This module is the bidirectional mapping between
//! those tokens and domain ids. The two namespaces use distinct prefixes,
//! so a task token can never collide with a column token, and decoding is
//! total: malformed input yields `None`, never an error.

use crate::board::ColumnKey;
use crate::task::TaskId;

/// Prefix for task drag tokens.
pub const TASK_TOKEN_PREFIX: &str = "task-";

/// Prefix for column drop-target tokens.
pub const COLUMN_TOKEN_PREFIX: &str = "column-";

/// Encodes a task id as a drag token.
///
/// # Examples
///
/// ```
/// use pinboard_core::token::{parse_task_token, task_token};
///
/// let token = task_token(42);
/// assert_eq!(token, "task-42");
/// assert_eq!(parse_task_token(&token), Some(42));
/// ```
#[must_use]
pub fn task_token(id: TaskId) -> String {
    format!("{TASK_TOKEN_PREFIX}{id}")
}

/// Decodes a task drag token back into a task id.
///
/// Returns `None` for anything that is not a well-formed task token.
#[must_use]
pub fn parse_task_token(token: &str) -> Option<TaskId> {
    token.strip_prefix(TASK_TOKEN_PREFIX)?.parse().ok()
}

/// Encodes a column key as a drop-target token.
#[must_use]
pub fn column_token(key: ColumnKey) -> String {
    format!("{COLUMN_TOKEN_PREFIX}{}", key.as_str())
}

/// Decodes a column drop-target token back into a column key.
///
/// Returns `None` for anything that is not a well-formed column token.
#[must_use]
pub fn parse_column_token(token: &str) -> Option<ColumnKey> {
    ColumnKey::parse(token.strip_prefix(COLUMN_TOKEN_PREFIX)?)
}

/// A decoded drag token: either a task or a column.
///
/// # Examples
///
/// ```
/// use pinboard_core::{ColumnKey, token::DragTarget};
///
/// let target = DragTarget::Column(ColumnKey::Done);
/// assert_eq!(target.encode(), "column-done");
/// assert_eq!(DragTarget::parse("column-done"), Some(target));
/// assert_eq!(DragTarget::parse("lane-done"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// A draggable task card.
    Task(TaskId),
    /// A droppable column background.
    Column(ColumnKey),
}

impl DragTarget {
    /// Encodes this target as its token string.
    #[must_use]
    pub fn encode(self) -> String {
        match self {
            Self::Task(id) => task_token(id),
            Self::Column(key) => column_token(key),
        }
    }

    /// Decodes a token string, trying the task namespace first.
    ///
    /// The prefixes are disjoint, so order does not affect the result.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(id) = parse_task_token(token) {
            return Some(Self::Task(id));
        }
        parse_column_token(token).map(Self::Column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_token_roundtrip() {
        for id in [0, 1, 42, u64::MAX] {
            assert_eq!(parse_task_token(&task_token(id)), Some(id));
        }
    }

    #[test]
    fn column_token_roundtrip() {
        for key in ColumnKey::all() {
            assert_eq!(parse_column_token(&column_token(key)), Some(key));
        }
    }

    #[test]
    fn namespaces_do_not_collide() {
        assert_eq!(parse_task_token("column-todo"), None);
        assert_eq!(parse_column_token("task-1"), None);
    }

    #[test]
    fn malformed_tokens_decode_to_none() {
        for token in ["", "task-", "task-abc", "task-1.5", "column-", "column-x", "42", "-task-1"] {
            assert_eq!(parse_task_token(token), None, "token: {token}");
            assert_eq!(parse_column_token(token), None, "token: {token}");
            assert_eq!(DragTarget::parse(token), None, "token: {token}");
        }
    }

    #[test]
    fn drag_target_roundtrip() {
        let targets = [
            DragTarget::Task(7),
            DragTarget::Column(ColumnKey::InProgress),
        ];
        for target in targets {
            assert_eq!(DragTarget::parse(&target.encode()), Some(target));
        }
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Round-trip law: decode(encode(id)) == id for all task ids.
        #[test]
        fn task_roundtrip(id in any::<u64>()) {
            prop_assert_eq!(parse_task_token(&task_token(id)), Some(id));
        }

        /// Decoding arbitrary strings is total: it may reject, never panic.
        #[test]
        fn decode_never_panics(token in "\\PC*") {
            let _ = parse_task_token(&token);
            let _ = parse_column_token(&token);
            let _ = DragTarget::parse(&token);
        }

        /// Anything without the right prefix decodes to None.
        #[test]
        fn unprefixed_strings_decode_to_none(token in "[a-z0-9 ]*") {
            prop_assume!(!token.starts_with("task-") && !token.starts_with("column-"));
            prop_assert_eq!(DragTarget::parse(&token), None);
        }
    }
}

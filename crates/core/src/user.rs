//! User directory types.
//!
//! Users are read-only reference data: the board stores only their ids,
//! and nothing in the core ever mutates the directory.

use serde::{Deserialize, Serialize};

/// Unique identifier for a user.
pub type UserId = u64;

/// A user that tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Reference to the user's avatar image.
    pub avatar: String,
}

impl User {
    /// Creates a new user record.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

/// A read-only lookup table of users, keyed by id.
///
/// # Examples
///
/// ```
/// use pinboard_core::{User, UserDirectory};
///
/// let directory = UserDirectory::new(vec![User::new(1, "Maya", "avatars/maya.png")]);
/// assert!(directory.contains(1));
/// assert!(!directory.contains(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Creates a directory from a list of users.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Looks up a user by id.
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Returns `true` if a user with the given id exists.
    #[must_use]
    pub fn contains(&self, id: UserId) -> bool {
        self.get(id).is_some()
    }

    /// Returns all users in directory order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the number of users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if the directory has no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let directory = UserDirectory::new(vec![
            User::new(1, "Maya", "avatars/maya.png"),
            User::new(2, "Jonas", "avatars/jonas.png"),
        ]);

        assert_eq!(directory.get(2).map(|u| u.name.as_str()), Some("Jonas"));
        assert!(directory.get(3).is_none());
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn empty_directory() {
        let directory = UserDirectory::default();
        assert!(directory.is_empty());
        assert!(!directory.contains(1));
    }
}

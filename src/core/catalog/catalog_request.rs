//! Per-request identity used to scope catalog lookups.

use crate::errors::GdsError;

/// Describes who is asking and which database/user scope the lookup should
/// be restricted to.
///
/// A non-admin requester is always restricted to their own catalog. An
/// admin may supply a `username_override` to look inside a specific other
/// user's catalog; without an override, an admin search spans every user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    database_name: String,
    requesting_username: String,
    username_override: Option<String>,
    requester_is_admin: bool,
}

impl CatalogRequest {
    pub fn new(
        database_name: impl Into<String>,
        requesting_username: impl Into<String>,
        username_override: Option<String>,
        requester_is_admin: bool,
    ) -> Result<Self, GdsError> {
        if username_override.is_some() && !requester_is_admin {
            return Err(GdsError::Unauthorized(
                "only an admin may override the catalog username".to_string(),
            ));
        }

        Ok(Self {
            database_name: database_name.into(),
            requesting_username: requesting_username.into(),
            username_override,
            requester_is_admin,
        })
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn requesting_username(&self) -> &str {
        &self.requesting_username
    }

    pub fn requester_is_admin(&self) -> bool {
        self.requester_is_admin
    }

    /// The username whose catalog this request actually targets.
    pub fn effective_user(&self) -> &str {
        self.username_override
            .as_deref()
            .unwrap_or(&self.requesting_username)
    }

    /// Whether the lookup must stay within a single user's catalog.
    ///
    /// True for every non-admin request, and for an admin request that
    /// names an explicit override. False only for an admin request with no
    /// override, which is free to search across every user's catalog.
    pub fn restrict_search_to_username_catalog(&self) -> bool {
        !self.requester_is_admin || self.username_override.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_admin_is_always_restricted_to_self() {
        let request = CatalogRequest::new("neo4j", "alice", None, false).unwrap();
        assert_eq!(request.effective_user(), "alice");
        assert!(request.restrict_search_to_username_catalog());
    }

    #[test]
    fn admin_without_override_searches_every_user() {
        let request = CatalogRequest::new("neo4j", "admin", None, true).unwrap();
        assert_eq!(request.effective_user(), "admin");
        assert!(!request.restrict_search_to_username_catalog());
    }

    #[test]
    fn admin_with_override_is_restricted_to_the_named_user() {
        let request =
            CatalogRequest::new("neo4j", "admin", Some("alice".to_string()), true).unwrap();
        assert_eq!(request.effective_user(), "alice");
        assert!(request.restrict_search_to_username_catalog());
    }

    #[test]
    fn non_admin_override_is_rejected() {
        let result = CatalogRequest::new("neo4j", "alice", Some("bob".to_string()), false);
        assert!(matches!(result, Err(GdsError::Unauthorized(_))));
    }
}

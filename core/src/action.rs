//! Remote action names.
//!
//! Every call to the resource API is a `GET` against one fixed endpoint with
//! the operation selected by the `action` query parameter. The wire spelling
//! doubles as the endpoint name in log lines and error messages.

use std::fmt;

/// One remote operation exposed by the resource API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ListResources,
    GetResource,
    GetResourcesByAuthor,
    ListResourceCategories,
    GetResourceUpdate,
    GetResourceUpdates,
    GetAuthor,
    FindAuthor,
}

impl Action {
    /// The value sent as `?action=`.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::ListResources => "listResources",
            Action::GetResource => "getResource",
            Action::GetResourcesByAuthor => "getResourcesByAuthor",
            Action::ListResourceCategories => "listResourceCategories",
            Action::GetResourceUpdate => "getResourceUpdate",
            Action::GetResourceUpdates => "getResourceUpdates",
            Action::GetAuthor => "getAuthor",
            Action::FindAuthor => "findAuthor",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Action; 8] = [
        Action::ListResources,
        Action::GetResource,
        Action::GetResourcesByAuthor,
        Action::ListResourceCategories,
        Action::GetResourceUpdate,
        Action::GetResourceUpdates,
        Action::GetAuthor,
        Action::FindAuthor,
    ];

    #[test]
    fn wire_names_are_unique() {
        let mut names: Vec<&str> = ALL.iter().map(|a| a.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(Action::GetResourceUpdates.to_string(), "getResourceUpdates");
        assert_eq!(Action::FindAuthor.to_string(), "findAuthor");
    }
}

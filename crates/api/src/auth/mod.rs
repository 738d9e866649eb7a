//! Authentication primitives: JWT tokens and role names.

pub mod jwt;

/// Role allowed to manage sliders and everything else.
pub const ROLE_ADMIN: &str = "admin";
/// Role allowed to manage sliders.
pub const ROLE_EDITOR: &str = "editor";

/// Whether a role grants slider management capability.
pub fn can_edit(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_EDITOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_and_admin_can_edit() {
        assert!(can_edit(ROLE_ADMIN));
        assert!(can_edit(ROLE_EDITOR));
        assert!(!can_edit("viewer"));
        assert!(!can_edit(""));
    }
}

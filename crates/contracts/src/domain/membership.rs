use serde::{Deserialize, Serialize};

/// The acting user's role within the team that owns an entity.
///
/// Absence of a membership (`Option::<MembershipRole>::None`) means the user
/// is the sole owner and has full rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipRole {
    Owner,
    Admin,
    Member,
}

/// Destructive actions are gated on the membership role: plain members may
/// not delete shared entities, everyone else (including non-members acting
/// on their own entities) may.
pub fn can_delete(role: Option<MembershipRole>) -> bool {
    !matches!(role, Some(MembershipRole::Member))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_cannot_delete() {
        assert!(!can_delete(Some(MembershipRole::Member)));
    }

    #[test]
    fn owner_admin_and_sole_owner_can_delete() {
        assert!(can_delete(Some(MembershipRole::Owner)));
        assert!(can_delete(Some(MembershipRole::Admin)));
        assert!(can_delete(None));
    }
}

use serde::Serialize;

/// Stored role level. Higher means more privilege; comparisons are numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Role(pub i64);

/// Coarse permission tiers derived from a [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Permission {
    Anonymous,
    Member,
    Admin,
}

impl Role {
    /// Sentinel for callers without a session. Lower than any stored role.
    pub const ANONYMOUS: Role = Role(-1);

    /// Roles strictly above this are admins.
    const ADMIN_ABOVE: i64 = 99;

    pub fn permission(self) -> Permission {
        if self.0 > Self::ADMIN_ABOVE {
            Permission::Admin
        } else if self.0 > Self::ANONYMOUS.0 {
            Permission::Member
        } else {
            Permission::Anonymous
        }
    }

    pub fn at_least(self, permission: Permission) -> bool {
        self.permission() >= permission
    }

    /// True when this role may access something requiring `required`.
    pub fn satisfies(self, required: i64) -> bool {
        self.0 >= required
    }
}

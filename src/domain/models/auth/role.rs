//! 역할(Role) 값 객체
//!
//! 관리자 패널의 권한 계층 `user < admin < super_admin`을 닫힌 열거형으로 표현합니다.
//! 저장소와 토큰에는 `"user" | "admin" | "super_admin"` 문자열로 직렬화됩니다.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::AppError;

/// 사용자 역할
///
/// 선언 순서가 곧 권한 순서이므로 `PartialOrd`/`Ord` 비교가 계층 비교와 같습니다.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::domain::auth::Role;
///
/// assert!(Role::SuperAdmin > Role::Admin);
/// assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    /// 모든 역할 (낮은 권한부터)
    pub const ALL: [Role; 3] = [Role::User, Role::Admin, Role::SuperAdmin];

    /// 권한 레벨 (user=1, admin=2, super_admin=3)
    pub fn level(self) -> u8 {
        match self {
            Role::User => 1,
            Role::Admin => 2,
            Role::SuperAdmin => 3,
        }
    }

    /// 직렬화 문자열
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// 화면 표시용 이름
    pub fn display_name(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Administrator",
            Role::SuperAdmin => "Super Administrator",
        }
    }

    /// `self`가 `required` 이상의 권한인지 확인
    pub fn has_at_least(self, required: Role) -> bool {
        self.level() >= required.level()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    /// 정확히 일치하는 세 문자열만 허용합니다. 대소문자나 공백을 보정하지 않습니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                AppError::InvalidRoleError(format!(
                    "'{}' - must be super_admin, admin, or user",
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_levels_are_totally_ordered() {
        assert_eq!(Role::User.level(), 1);
        assert_eq!(Role::Admin.level(), 2);
        assert_eq!(Role::SuperAdmin.level(), 3);
        assert!(Role::User < Role::Admin && Role::Admin < Role::SuperAdmin);
    }

    #[test]
    fn test_has_at_least_matches_levels() {
        for acting in Role::ALL {
            for required in Role::ALL {
                assert_eq!(acting.has_at_least(required), acting.level() >= required.level());
            }
        }
    }

    #[test]
    fn test_parse_accepts_exact_strings_only() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("super_admin".parse::<Role>().unwrap(), Role::SuperAdmin);

        for invalid in ["", "Admin", "superadmin", " user", "moderator"] {
            assert!(matches!(invalid.parse::<Role>(), Err(AppError::InvalidRoleError(_))));
        }
    }

    #[test]
    fn test_serde_uses_snake_case() {
        assert_eq!(serde_json::to_string(&Role::SuperAdmin).unwrap(), "\"super_admin\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Role::SuperAdmin.display_name(), "Super Administrator");
        assert_eq!(Role::Admin.display_name(), "Administrator");
        assert_eq!(Role::User.display_name(), "User");
    }
}

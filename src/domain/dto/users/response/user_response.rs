use serde::Serialize;
use mongodb::bson::DateTime;
use crate::domain::auth::Role;
use crate::domain::entities::users::user::User;
use crate::domain::token::TokenPair;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않으며 시간 필드는 RFC 3339 문자열로 내보냅니다.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub role_display_name: String,
    pub is_active: bool,
    pub is_approved: bool,
    pub approved_at: Option<String>,
    pub approved_by: Option<String>,
    pub last_login_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

fn to_rfc3339(value: DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            role,
            is_active,
            is_approved,
            approved_at,
            approved_by,
            last_login_at,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            username,
            email,
            role,
            role_display_name: role.display_name().to_string(),
            is_active,
            is_approved,
            approved_at: approved_at.map(to_rfc3339),
            approved_by,
            last_login_at: last_login_at.map(to_rfc3339),
            created_at: to_rfc3339(created_at),
            updated_at: to_rfc3339(updated_at),
        }
    }
}

/// 로그인/회원가입 응답 DTO (JWT 토큰 포함)
///
/// 승인 대기 중인 회원가입에는 토큰이 발급되지 않으므로 토큰 필드가 생략됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
}

impl AuthResponse {
    /// 토큰과 함께 응답 생성
    pub fn with_tokens(user: User, tokens: TokenPair) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token: Some(tokens.access_token),
            refresh_token: Some(tokens.refresh_token),
            token_type: Some(tokens.token_type),
            expires_in: Some(tokens.expires_in),
        }
    }

    /// 토큰 없이 사용자 정보만 담은 응답 생성
    pub fn without_tokens(user: User) -> Self {
        Self {
            user: UserResponse::from(user),
            access_token: None,
            refresh_token: None,
            token_type: None,
            expires_in: None,
        }
    }
}

/// 액세스 토큰 갱신 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// 승인 대기 목록 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct PendingUsersResponse {
    pub users: Vec<UserResponse>,
    pub count: usize,
}

impl From<Vec<User>> for PendingUsersResponse {
    fn from(users: Vec<User>) -> Self {
        let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
        Self { count: users.len(), users }
    }
}

/// 가입 거절(삭제) 응답 DTO
#[derive(Debug, Clone, Serialize)]
pub struct RejectedUserResponse {
    pub rejected_user_id: String,
    pub rejected_username: String,
}

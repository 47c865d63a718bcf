//! User Entity Implementation
//!
//! 관리자 패널 계정(Identity)을 표현하는 핵심 엔티티입니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::auth::Role;

/// 사용자 엔티티
///
/// 인증 가능한 관리 계정입니다. 역할, 활성 여부, 승인 여부를 가지며
/// 비밀번호는 bcrypt 해시로만 보관합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 계정 고유 ID (UUID v4 문자열)
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자명 (unique)
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시. 저장된 계정에서는 비어 있지 않습니다.
    pub password_hash: String,
    /// 사용자 역할
    pub role: Role,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 관리자 승인 여부
    pub is_approved: bool,
    /// 승인 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime>,
    /// 승인한 관리자 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    /// 마지막 로그인 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 비밀번호 해시는 비어 있는 상태로 시작하므로 저장 전에
    /// `PasswordService::set_password`를 반드시 거쳐야 합니다.
    pub fn new(username: String, email: String, role: Role) -> Self {
        let now = DateTime::now();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            username,
            email,
            password_hash: String::new(),
            role,
            is_active: true,
            is_approved: false,
            approved_at: None,
            approved_by: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 승인 대기 상태인지 확인 (미승인 일반 사용자)
    pub fn is_pending_approval(&self) -> bool {
        !self.is_approved && self.role == Role::User
    }

    /// 승인 처리
    pub fn approve(&mut self, approved_by: &str) {
        let now = DateTime::now();
        self.is_approved = true;
        self.is_active = true;
        self.approved_at = Some(now);
        self.approved_by = Some(approved_by.to_string());
        self.updated_at = now;
    }

    /// 역할 변경
    pub fn change_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = DateTime::now();
    }

    /// 승인된 상태로 표시 (관리자가 직접 생성한 계정, 시드 계정)
    pub fn mark_approved(&mut self, approved_by: Option<&str>) {
        let now = DateTime::now();
        self.is_approved = true;
        self.approved_at = Some(now);
        self.approved_by = approved_by.map(str::to_string);
        self.updated_at = now;
    }
}

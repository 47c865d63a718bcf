//! # 문자열 유틸리티
//!
//! 로그인 식별자 정규화와 비밀값 비교 등 문자열 처리 함수들입니다.

use validator::ValidationError;

/// 사용자명 정규화 (앞뒤 공백 제거, 대소문자 유지)
pub fn normalize_username(value: &str) -> String {
    value.trim().to_string()
}

/// 이메일 정규화 (앞뒤 공백 제거, 소문자화)
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 로그인 식별자가 이메일 형태인지 확인
pub fn looks_like_email(value: &str) -> bool {
    value.contains('@')
}

/// 사용자명 형식 검증
///
/// 로그인 식별자에 `@`가 있으면 이메일로 조회하므로 사용자명에는 `@`를 허용하지 않습니다.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if looks_like_email(username) {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명에는 '@'를 사용할 수 없습니다".into()));
    }
    Ok(())
}

/// 길이가 같은 경우 내용과 무관하게 같은 시간이 걸리는 비교
///
/// 시드 비밀키처럼 추측 공격 대상이 되는 값에 사용합니다.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

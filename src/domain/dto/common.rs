use serde::Serialize;

/// API 성공 응답 래퍼
///
/// `{"success": true, "message": ..., "data": ...}` 형식으로 직렬화됩니다.
/// 실패 응답은 `AppError`의 `ResponseError` 구현이 `{"error": ...}`로 만듭니다.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}

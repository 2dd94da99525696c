use axum::{
    response::{IntoResponse, Response},
    Json,
};

// JSON을 반환하는 라우트가 사용하는 한 개 필드짜리 응답 값.
// 요청마다 새로 만들어지고 직렬화한 뒤에는 버려진다.
#[derive(Debug, serde::Serialize)]
pub struct Greeting {
    message: String,
}

impl Greeting {
    // `GET /hello`의 고정 인사말
    pub fn hello_world() -> Self {
        Self {
            message: "Hello World".to_string(),
        }
    }

    /// 전달받은 이름을 그대로 메세지에 끼워 넣는다.
    /// 빈 문자열을 포함해서 어떤 이름도 검증 없이 받아들인다.
    pub fn how_are_you(name: &str) -> Self {
        Self {
            message: format!("Hello {}, how are you?", name),
        }
    }

    /// 경로 변수로 받은 이름을 표시한다.
    pub fn show_name(name: &str) -> Self {
        Self {
            message: format!("Name: {}", name),
        }
    }

    pub fn as_message(&self) -> &str {
        &self.message
    }
}

// `Json`이 직렬화와 `application/json` 컨텐트 타입을 담당한다.
impl IntoResponse for Greeting {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

use axum::{
    extract::Path,
    response::{IntoResponse, Response},
};

use crate::domain::Greeting;

// curl -v http://127.0.0.1:8000/hello/Rishi/show => {"message":"Name: Rishi"}
// 경로 세그먼트는 axum이 퍼센트 디코딩한 뒤에 핸들러에 전달한다.
pub async fn show_name(Path(name): Path<String>) -> Response {
    Greeting::show_name(&name).into_response()
}

use axum::response::{IntoResponse, Response};

use crate::domain::Greeting;

// curl -v http://127.0.0.1:8000/hello => {"message":"Hello World"}
pub async fn hello() -> Response {
    Greeting::hello_world().into_response()
}

// `curl --request POST --data 'Rishi' --verbose http://127.0.0.1:8000/hello`
// => {"message":"Hello Rishi, how are you?"}
// 본문은 UTF-8 텍스트면 무엇이든 그대로 받는다. 빈 본문도 허용한다.
#[tracing::instrument(name = "Greeting a posted name.", skip_all, fields(name = %name))]
pub async fn post_hello(name: String) -> Response {
    Greeting::how_are_you(&name).into_response()
}

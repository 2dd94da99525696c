use axum::response::{IntoResponse, Response};

// curl -v http://127.0.0.1:8000/hello-text => Hello World
pub async fn hello_text() -> Response {
    "Hello World".into_response()
}

// `curl --request POST --data 'Rishi' --verbose http://127.0.0.1:8000/hello-text`
// => Hello Rishi, how are you?
#[tracing::instrument(name = "Greeting a posted name in plain text.", skip_all, fields(name = %name))]
pub async fn post_hello_text(name: String) -> Response {
    format!("Hello {}, how are you?", name).into_response()
}

use std::future::{Future, IntoFuture};

use axum::{body::Body, routing, Router};
use http::Request;
use tokio::net::TcpListener;
use tower_http::trace::{MakeSpan, TraceLayer};
use tracing::{Level, Span};

use crate::routes::{hello, hello_text, post_hello, post_hello_text, show_name};

// `run`을 `public`으로 마크해야 한다.
// `run`은 더 이상 바이너리 엔트리 포인트가 아니므로, proc-macro 주문 없이 async로 마크할 수 있다.
pub fn run(tcp_listener: TcpListener) -> impl Future<Output = Result<(), std::io::Error>> {
    let app = Router::new()
        // 같은 경로의 GET과 POST는 하나의 엔트리에서 체이닝한다.
        .route("/hello", routing::get(hello).post(post_hello))
        .route(
            "/hello-text",
            routing::get(hello_text).post(post_hello_text),
        )
        // 경로 변수는 `:name`으로 선언한다.
        .route("/hello/:name/show", routing::get(show_name))
        .layer(TraceLayer::new_for_http().make_span_with(AddRequestID));
    axum::serve(tcp_listener, app).into_future()
}

// https://docs.rs/tower-http/0.5.2/src/tower_http/trace/make_span.rs.html#65-68의 코드를 참조했음
#[derive(Clone)]
struct AddRequestID;

impl MakeSpan<Body> for AddRequestID {
    fn make_span(&mut self, request: &Request<Body>) -> Span {
        tracing::span!(
            Level::ERROR,
            "request",
            request_id=%uuid::Uuid::new_v4().to_string(),
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            headers = ?request.headers()
        )
    }
}

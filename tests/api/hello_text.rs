use crate::helpers::TestApp;

#[tokio::test]
async fn hello_text_returns_plain_hello_world() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app.get_hello_text().await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::OK);
    // 문자열을 반환하는 라우트는 `text/plain`으로 응답한다.
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .map(|content_type| content_type.to_str().unwrap_or_default()),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(response.text().await?, "Hello World");

    Ok(())
}

#[tokio::test]
async fn post_hello_text_greets_the_posted_name() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app.post_hello_text("Rishi".to_string()).await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::OK);
    assert_eq!(response.text().await?, "Hello Rishi, how are you?");

    Ok(())
}

#[tokio::test]
async fn post_hello_text_accepts_an_empty_body() -> Result<(), anyhow::Error> {
    // 준비
    let test_app = TestApp::spawn_app().await?;

    // 실행
    let response = test_app.post_hello_text(String::new()).await?;

    // 확인
    assert_eq!(response.status(), http::StatusCode::OK);
    assert_eq!(response.text().await?, "Hello , how are you?");

    Ok(())
}

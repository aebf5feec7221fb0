use std::time::Duration;

use super::test_support::{StubBehavior, run_async_test, spawn_stub};
use super::*;

fn executor(timeout: Duration) -> Result<RequestExecutor, String> {
    let client = build_client(timeout, Duration::from_secs(2))
        .map_err(|err| format!("client build failed: {}", err))?;
    Ok(RequestExecutor::new(client))
}

#[test]
fn url_for_user_appends_query_parameters() -> Result<(), String> {
    let target = TargetEndpoint::new("http://localhost:8080/api/timeline", QueryShape::default())
        .map_err(|err| err.to_string())?;
    let url = target.url_for_user(42);
    if url.as_str() != "http://localhost:8080/api/timeline?user=user42&limit=20" {
        return Err(format!("Unexpected url: {}", url));
    }
    if target.host() != "localhost" || target.port() != 8080 {
        return Err("Unexpected host/port".to_owned());
    }
    Ok(())
}

#[test]
fn url_for_user_keeps_existing_query() -> Result<(), String> {
    let query = QueryShape {
        user_param: "uid".to_owned(),
        user_prefix: String::new(),
        limit_param: "n".to_owned(),
        limit: 5,
    };
    let target = TargetEndpoint::new("https://feed.example/t?lang=en", query)
        .map_err(|err| err.to_string())?;
    let url = target.url_for_user(7);
    if url.as_str() != "https://feed.example/t?lang=en&uid=7&n=5" {
        return Err(format!("Unexpected url: {}", url));
    }
    if target.port() != 443 {
        return Err("Expected default https port".to_owned());
    }
    Ok(())
}

#[test]
fn target_rejects_bad_urls() -> Result<(), String> {
    for url in ["not a url", "ftp://host/file", "mailto:someone@example.com"] {
        if TargetEndpoint::new(url, QueryShape::default()).is_ok() {
            return Err(format!("Expected {} to be rejected", url));
        }
    }
    Ok(())
}

#[test]
fn executor_classifies_200_as_success() -> Result<(), String> {
    run_async_test(async {
        let stub = spawn_stub(StubBehavior::default()).await?;
        let executor = executor(Duration::from_secs(5))?;
        let url = url::Url::parse(&stub.url).map_err(|err| err.to_string())?;
        let outcome = executor.execute(url).await;
        if !outcome.is_success() {
            return Err(format!("Expected success, got {:?}", outcome.status));
        }
        Ok(())
    })
}

#[test]
fn executor_classifies_500_as_status_failure() -> Result<(), String> {
    run_async_test(async {
        let stub = spawn_stub(StubBehavior {
            delay: Duration::ZERO,
            failing_requests: vec![0],
        })
        .await?;
        let executor = executor(Duration::from_secs(5))?;
        let url = url::Url::parse(&stub.url).map_err(|err| err.to_string())?;
        let outcome = executor.execute(url).await;
        if outcome.status != OutcomeStatus::Failure(FailureReason::Status(500)) {
            return Err(format!("Expected status failure, got {:?}", outcome.status));
        }
        Ok(())
    })
}

#[test]
fn executor_reports_timeout_as_failure() -> Result<(), String> {
    run_async_test(async {
        let stub = spawn_stub(StubBehavior {
            delay: Duration::from_millis(500),
            failing_requests: vec![],
        })
        .await?;
        let executor = executor(Duration::from_millis(50))?;
        let url = url::Url::parse(&stub.url).map_err(|err| err.to_string())?;
        let outcome = executor.execute(url).await;
        if outcome.status != OutcomeStatus::Failure(FailureReason::Timeout) {
            return Err(format!("Expected timeout, got {:?}", outcome.status));
        }
        Ok(())
    })
}

#[test]
fn executor_reports_refused_connection_as_failure() -> Result<(), String> {
    run_async_test(async {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")
            .map_err(|err| format!("bind failed: {}", err))?;
        let addr = listener
            .local_addr()
            .map_err(|err| format!("addr failed: {}", err))?;
        drop(listener);

        let executor = executor(Duration::from_secs(2))?;
        let url = url::Url::parse(&format!("http://{}/timeline", addr))
            .map_err(|err| err.to_string())?;
        let outcome = executor.execute(url).await;
        if outcome.is_success() {
            return Err("Expected refused connection to fail".to_owned());
        }
        Ok(())
    })
}

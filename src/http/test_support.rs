use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// How the stub answers. Requests are numbered from zero in arrival order.
#[derive(Debug, Clone, Default)]
pub(crate) struct StubBehavior {
    pub delay: Duration,
    pub failing_requests: Vec<usize>,
}

pub(crate) struct StubServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
    request_lines: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub(crate) fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub(crate) async fn request_lines(&self) -> Vec<String> {
        self.request_lines.lock().await.clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub(crate) async fn spawn_stub(behavior: StubBehavior) -> Result<StubServer, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .map_err(|err| format!("bind stub failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("stub addr failed: {}", err))?;
    let hits = Arc::new(AtomicUsize::new(0));
    let request_lines = Arc::new(Mutex::new(Vec::new()));
    let behavior = Arc::new(behavior);

    let handle = {
        let hits = Arc::clone(&hits);
        let request_lines = Arc::clone(&request_lines);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let hits = Arc::clone(&hits);
                let request_lines = Arc::clone(&request_lines);
                let behavior = Arc::clone(&behavior);
                tokio::spawn(async move {
                    handle_client(stream, &hits, &request_lines, &behavior).await;
                });
            }
        })
    };

    Ok(StubServer {
        url: format!("http://{}/timeline", addr),
        hits,
        request_lines,
        handle,
    })
}

async fn handle_client(
    mut stream: TcpStream,
    hits: &AtomicUsize,
    request_lines: &Mutex<Vec<String>>,
    behavior: &StubBehavior,
) {
    let mut buffer = [0u8; 4096];
    let Ok(read) = stream.read(&mut buffer).await else {
        return;
    };
    let request = String::from_utf8_lossy(buffer.get(..read).unwrap_or_default()).into_owned();
    if let Some(line) = request.lines().next() {
        request_lines.lock().await.push(line.to_owned());
    }
    let sequence = hits.fetch_add(1, Ordering::SeqCst);
    if !behavior.delay.is_zero() {
        tokio::time::sleep(behavior.delay).await;
    }
    let response: &[u8] = if behavior.failing_requests.contains(&sequence) {
        b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 4\r\nConnection: close\r\n\r\nFAIL"
    } else {
        b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK"
    };
    if stream.write_all(response).await.is_err() {
        return;
    }
    drop(stream.shutdown().await);
}

pub(crate) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

use anyhow::Context;
use poll_promise::Promise;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tokio::runtime::Handle;

use crate::config::API;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

use super::messages::{HttpMethod, HttpRequest, HttpResponse, TransportResult};

/// Stops an in-flight request. Called at most once.
pub type AbortHook = Box<dyn FnOnce()>;

/// What a transport hands back for one request: a promise polled from the UI
/// thread, plus an optional way to abort the work behind it.
pub struct Dispatched {
    pub promise: Promise<TransportResult>,
    pub abort: Option<AbortHook>,
}

/// Anything that can put an HTTP request on the wire without blocking the caller.
pub trait Transport {
    fn dispatch(&self, request: HttpRequest) -> Dispatched;
}

/// Runs requests with `reqwest` on a background Tokio runtime.
pub struct ReqwestTransport {
    client: reqwest::Client,
    runtime: Handle,
}

impl ReqwestTransport {
    pub fn new(runtime: Handle) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(API.transport.connect_timeout_ms))
            .user_agent(API.transport.user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, runtime })
    }
}

impl Transport for ReqwestTransport {
    fn dispatch(&self, request: HttpRequest) -> Dispatched {
        let (sender, promise) = Promise::new();
        let client = self.client.clone();

        let task = self.runtime.spawn(async move {
            sender.send(execute(&client, request).await);
        });

        let abort_handle = task.abort_handle();
        Dispatched {
            promise,
            abort: Some(Box::new(move || abort_handle.abort())),
        }
    }
}

async fn execute(client: &reqwest::Client, request: HttpRequest) -> TransportResult {
    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_requests {
        log::info!("-> {} {}", request.method, request.url);
    }

    let builder = match request.method {
        HttpMethod::Get => client.get(request.url.as_str()),
        HttpMethod::Post => client.post(request.url.as_str()),
    };
    let builder = match request.json_body {
        Some(body) => builder.header(CONTENT_TYPE, "application/json").body(body),
        None => builder,
    };

    let response = builder.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_response_bodies {
        log::info!("<- {} {}", status, body);
    }

    Ok(HttpResponse { status, body })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::TransportError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn wait_for(dispatched: Dispatched) -> TransportResult {
        let promise = dispatched.promise;
        tokio::task::spawn_blocking(move || promise.block_and_take())
            .await
            .unwrap()
    }

    /// Accepts one connection, returns the request head it saw and answers with `reply_body`.
    async fn serve_once(listener: TcpListener, reply_status: &'static str, reply_body: &'static str) -> String {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut seen = Vec::new();
        let mut buf = [0u8; 1024];
        while !String::from_utf8_lossy(&seen).contains("\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            seen.extend_from_slice(&buf[..n]);
        }
        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            reply_status,
            reply_body.len(),
            reply_body
        );
        socket.write_all(reply.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&seen).to_string()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn post_sends_json_content_type_and_returns_body() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, "200 OK", r#"{"message":"hi"}"#));

        let transport = ReqwestTransport::new(Handle::current()).unwrap();
        let dispatched = transport.dispatch(HttpRequest::post_json(
            format!("http://{addr}/fit"),
            r#"{"ticker":"ABC"}"#.to_string(),
        ));

        let response = wait_for(dispatched).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"message":"hi"}"#);

        let head = server.await.unwrap().to_lowercase();
        assert!(head.starts_with("post /fit http/1.1"));
        assert!(head.contains("content-type: application/json"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn error_status_is_reported_not_swallowed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(listener, "500 Internal Server Error", "{}"));

        let transport = ReqwestTransport::new(Handle::current()).unwrap();
        let response = wait_for(transport.dispatch(HttpRequest::get(format!("http://{addr}/hello"))))
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
        server.await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn refused_connection_is_a_connect_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = ReqwestTransport::new(Handle::current()).unwrap();
        let result = wait_for(transport.dispatch(HttpRequest::get(format!("http://{addr}/hello")))).await;

        assert!(matches!(result, Err(TransportError::Connect(_))), "{result:?}");
    }
}

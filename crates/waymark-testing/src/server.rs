//! One-shot HTTP endpoint for upload tests.
//!
//! Accepts a single request, answers with a fixed status code and hands the
//! request back to the test.

use anyhow::{Context, Result};
use std::io::Read;
use std::thread::{self, JoinHandle};
use tiny_http::{Response, Server};

/// What the stub server saw
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: String,
    pub url: String,
    pub body: String,
}

impl ReceivedRequest {
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

pub struct StubServer {
    port: u16,
    handle: JoinHandle<Result<ReceivedRequest>>,
}

impl StubServer {
    /// Listen on an ephemeral localhost port and answer the first request
    /// with `status`.
    pub fn respond_with(status: u16) -> Result<Self> {
        let server = Server::http("127.0.0.1:0")
            .map_err(|e| anyhow::anyhow!("Failed to start stub server: {}", e))?;
        let port = server
            .server_addr()
            .to_ip()
            .context("Stub server is not listening on an IP address")?
            .port();

        let handle = thread::spawn(move || -> Result<ReceivedRequest> {
            let mut request = server.recv()?;

            let mut body = String::new();
            request.as_reader().read_to_string(&mut body)?;
            let received = ReceivedRequest {
                method: request.method().to_string(),
                url: request.url().to_string(),
                body,
            };

            request.respond(Response::empty(status))?;
            Ok(received)
        });

        Ok(Self { port, handle })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// URL suitable for `waymark upload --endpoint`
    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}/upload", self.port)
    }

    /// Wait for the request to arrive.
    pub fn received(self) -> Result<ReceivedRequest> {
        self.handle
            .join()
            .map_err(|_| anyhow::anyhow!("stub server thread panicked"))?
    }

    /// Wait for the request and return its body parsed as JSON.
    pub fn received_json(self) -> Result<serde_json::Value> {
        self.received()?.json()
    }
}

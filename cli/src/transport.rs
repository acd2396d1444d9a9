//! ureq-backed `Transport`. Each request runs on tokio's blocking pool so
//! the event loop never waits on a socket.

use async_trait::async_trait;
use todo_core::{GatewayError, HttpMethod, HttpRequest, HttpResponse, Transport};
use tracing::debug;

#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        // 4xx/5xx come back as data; `TodoClient` interprets status codes.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, GatewayError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || send(&agent, request))
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?
    }
}

fn send(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, GatewayError> {
    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.url)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    };
    let mut response = result.map_err(|e| GatewayError::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| GatewayError::Transport(e.to_string()))?;
    Ok(HttpResponse::new(status, body))
}

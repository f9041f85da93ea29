use std::time::Instant;

use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Logs method, URL, status and elapsed time of every request.
pub struct LogMiddleware;

#[async_trait::async_trait]
impl Middleware for LogMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();
        let started = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed = started.elapsed().as_millis();
        match &result {
            Ok(response) => log::debug!("{} {} -> {} ({} ms)", method, url, response.status(), elapsed),
            Err(err) => log::warn!("{} {} failed after {} ms: {}", method, url, elapsed, err),
        }
        result
    }
}

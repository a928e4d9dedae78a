use std::sync::Arc;
use std::time::Duration;

use spop_core::DEFAULT_MAX_FRAME_SIZE;

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::handler::Handler;

const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds an [`Engine`] from a port, a handler, and optional tuning knobs.
#[derive(Default)]
pub struct Builder {
    port: Option<u16>,
    handler: Option<Arc<dyn Handler>>,
    max_frame_size: Option<u32>,
    idle_timeout: Option<Duration>,
    pipelining: Option<bool>,
}

impl Builder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    pub fn max_frame_size(mut self, max_frame_size: u32) -> Self {
        self.max_frame_size = Some(max_frame_size);
        self
    }

    pub fn idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = Some(idle_timeout);
        self
    }

    pub fn pipelining(mut self, pipelining: bool) -> Self {
        self.pipelining = Some(pipelining);
        self
    }

    pub fn build(self) -> Result<Engine> {
        let port = self
            .port
            .ok_or_else(|| Error::Configuration("port is required".into()))?;
        let handler = self
            .handler
            .ok_or_else(|| Error::Configuration("handler is required".into()))?;

        Ok(Engine::new(
            port,
            handler,
            self.max_frame_size.unwrap_or(DEFAULT_MAX_FRAME_SIZE),
            self.idle_timeout.unwrap_or(DEFAULT_IDLE_TIMEOUT),
            self.pipelining.unwrap_or(true),
        ))
    }
}

//! Blocking TCP listener. One thread per connection, one request per
//! connection.

use std::io::BufReader;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::time::Duration;

use spend_core::config::ServerConfig;
use spend_core::SpendResult;
use tracing::{debug, info, warn};

use crate::app::App;
use crate::http::read_request;

pub struct Server {
    listener: TcpListener,
    app: Arc<App>,
    io_timeout: Duration,
    max_body_bytes: usize,
}

impl Server {
    /// Bind the configured address.
    pub fn bind(config: &ServerConfig, app: App) -> SpendResult<Self> {
        let listener = TcpListener::bind(&config.bind)?;
        Ok(Self {
            listener,
            app: Arc::new(app),
            io_timeout: Duration::from_millis(config.read_timeout_ms),
            max_body_bytes: config.max_body_bytes,
        })
    }

    pub fn local_addr(&self) -> SpendResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until the listener fails.
    pub fn run(self) -> SpendResult<()> {
        info!(addr = %self.local_addr()?, "listening");
        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    let app = Arc::clone(&self.app);
                    let io_timeout = self.io_timeout;
                    let max_body_bytes = self.max_body_bytes;
                    std::thread::spawn(move || {
                        serve_connection(stream, &app, io_timeout, max_body_bytes)
                    });
                }
                Err(e) => warn!(error = %e, "accept failed"),
            }
        }
        Ok(())
    }
}

fn serve_connection(stream: TcpStream, app: &App, io_timeout: Duration, max_body_bytes: usize) {
    let peer = stream.peer_addr().ok();
    if let Err(e) = apply_timeouts(&stream, io_timeout) {
        debug!(peer = ?peer, error = %e, "failed to set socket timeouts");
    }

    let mut reader = BufReader::new(&stream);
    let response = match read_request(&mut reader, max_body_bytes) {
        Ok(request) => app.handle(&request),
        Err(e) => {
            debug!(peer = ?peer, error = %e, "unreadable request");
            e.into_response()
        }
    };

    let mut writer = &stream;
    if let Err(e) = response.write_to(&mut writer) {
        debug!(peer = ?peer, error = %e, "failed to write response");
    }
}

/// Read and write deadlines for one connection.
fn apply_timeouts(stream: &TcpStream, timeout: Duration) -> std::io::Result<()> {
    stream.set_read_timeout(Some(timeout))?;
    stream.set_write_timeout(Some(timeout))
}

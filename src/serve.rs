//! Supervision of a local `bw serve` process
//!
//! [`Serve::spawn`] starts the Bitwarden CLI's HTTP server and waits until it
//! answers on its port. The child is killed on [`Serve::shutdown`], or when the
//! [`Serve`] is dropped.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use exponential_backoff::Backoff;
use log::{debug, info, trace, warn};
use tokio::process::{Child, Command};

use crate::client::{Client, HTTPClient};
use crate::error::{Error, ServeResult};
use crate::session;

/// How to start `bw serve` and how long to wait for it.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Path to the `bw` binary
    pub binary: PathBuf,
    /// Interface the server binds to
    pub hostname: String,
    /// Port the server listens on
    pub port: u16,
    /// Extra environment for the child, e.g. `BITWARDENCLI_APPDATA_DIR`
    pub envs: Vec<(String, String)>,
    /// Number of readiness probes before giving up
    pub startup_retries: u32,
    /// Delay after the first failed probe
    pub startup_min_delay: Duration,
    /// Upper bound for the delay between probes
    pub startup_max_delay: Duration,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("bw"),
            hostname: "localhost".to_string(),
            port: 8087,
            envs: Vec::new(),
            startup_retries: 8,
            startup_min_delay: Duration::from_millis(50),
            startup_max_delay: Duration::from_secs(2),
        }
    }
}

impl ServeConfig {
    /// Base URL the server will be reachable at.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.hostname, self.port)
    }
}

/// A running `bw serve` child process
#[derive(Debug)]
pub struct Serve {
    child: Child,
    client: Client,
}

impl Serve {
    /// Spawn `bw serve` and wait until it accepts requests.
    ///
    /// The binary is executed directly, without a shell.
    pub async fn spawn(config: &ServeConfig) -> ServeResult<Self> {
        let port = config.port.to_string();

        let mut cmd = Command::new(&config.binary);
        cmd.args(["serve", "--hostname", config.hostname.as_str(), "--port", port.as_str()])
            .envs(config.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        debug!(
            "starting {} serve on {}:{}",
            config.binary.display(),
            config.hostname,
            config.port
        );
        let child = cmd.spawn()?;

        let mut serve = Serve {
            child,
            client: Client::new(config.url()),
        };
        serve.wait_ready(config).await?;

        info!("bw serve is listening on {}", config.url());
        Ok(serve)
    }

    /// Probe `GET /status` until the server answers. Any HTTP response counts as ready.
    async fn wait_ready(&mut self, config: &ServeConfig) -> ServeResult<()> {
        let probe = self.client.clone().with_timeout(config.startup_max_delay);
        let backoff = Backoff::new(
            config.startup_retries,
            config.startup_min_delay,
            config.startup_max_delay,
        );

        let mut attempts = 0;
        for delay in &backoff {
            attempts += 1;

            if let Some(status) = self.child.try_wait()? {
                warn!("bw serve exited during startup: {}", status);
                return Err(Error::ServeExited(status));
            }

            match session::status(&probe).await {
                Err(Error::Transport(err)) => {
                    trace!("bw serve not ready yet ({}), retrying in {:?}", err, delay);
                    tokio::time::sleep(delay).await;
                }
                _ => return Ok(()),
            }
        }

        warn!("bw serve not ready after {} attempts, killing it", attempts);
        self.child.kill().await?;
        Err(Error::ServeNotReady { attempts })
    }

    /// Base URL of the running server.
    pub fn url(&self) -> &str {
        self.client.url()
    }

    /// A client talking to this server.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// OS process id of the child, `None` once it has been reaped.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Terminate the server and wait for it to exit.
    pub async fn shutdown(mut self) -> ServeResult<()> {
        if let Some(status) = self.child.try_wait()? {
            debug!("bw serve already exited: {}", status);
            return Ok(());
        }

        self.child.kill().await?;
        debug!("bw serve stopped");
        Ok(())
    }
}

//! Network actor - runs HTTP requests in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::Executor;

/// Network actor that processes send commands.
///
/// Each send runs as its own task, so completions arrive in whatever order
/// the requests finish; earlier sends are never cancelled or serialized.
pub struct NetworkActor {
    executor: Executor,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(executor: Executor, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            executor,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Send { id, request }) => {
                            let response_tx = self.response_tx.clone();
                            let executor = self.executor.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %request.url, method = %request.http_method, "Dispatching request");
                                let result = executor.send(&request).await;
                                let _ = response_tx.send(NetworkResponse::Completed { id, result });
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => break,
                    }
                }

                Some(joined) = self.active_requests.join_next() => {
                    if let Err(e) = joined {
                        tracing::warn!(error = %e, "Request task failed");
                    }
                }
            }
        }

        // In-flight requests still complete and report
        while let Some(joined) = self.active_requests.join_next().await {
            if let Err(e) = joined {
                tracing::warn!(error = %e, "Request task failed");
            }
        }
    }
}

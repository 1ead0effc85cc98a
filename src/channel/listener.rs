use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::command::parse_line;
use crate::event::DomainEvent;

use super::endpoint::ControlChannelEndpoint;

/// Pause between read sessions so an idle channel does not spin on the
/// EOF/reopen cycle while no writer is connected.
const REOPEN_DELAY: Duration = Duration::from_millis(50);
const OPEN_RETRY_MAX: Duration = Duration::from_secs(5);

/// Handle to the control channel listener task.
///
/// The task owns the endpoint for the life of the process: it creates the
/// node, reads peers line by line, reopens after each disconnect, and only
/// stops (removing the node) when `shutdown` is called. Parsed invocations
/// are forwarded to the primary loop; the listener never touches browser
/// state itself.
pub struct ControlListener {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl ControlListener {
    pub fn spawn(endpoint: ControlChannelEndpoint, events: UnboundedSender<DomainEvent>) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(listen(endpoint, events, shutdown_rx));
        Self { shutdown_tx, task }
    }

    /// Unblocks any pending read, waits for the task, and leaves no channel
    /// node behind.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        let _ = self.task.await;
    }
}

async fn listen(
    mut endpoint: ControlChannelEndpoint,
    events: UnboundedSender<DomainEvent>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    match endpoint.create_node() {
        Ok(()) => info!(path = %endpoint.path().display(), "control channel created"),
        // Non-fatal: the node may be left over from a previous run. Opening
        // below decides whether the path is actually usable.
        Err(err) => warn!("{err:#}"),
    }

    let mut open_retry = REOPEN_DELAY;
    'accept: loop {
        let receiver = match endpoint.open_receiver() {
            Ok(receiver) => {
                open_retry = REOPEN_DELAY;
                receiver
            }
            Err(err) => {
                error!("{err:#}");
                if pause(&mut shutdown_rx, open_retry).await {
                    break 'accept;
                }
                open_retry = (open_retry * 2).min(OPEN_RETRY_MAX);
                continue;
            }
        };

        let mut lines = BufReader::new(receiver).lines();
        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => break 'accept,
                next = lines.next_line() => match next {
                    Ok(Some(line)) => handle_line(&line, &events),
                    // End of this writer's session; go accept the next peer.
                    Ok(None) => break,
                    Err(err) => {
                        warn!("control channel read failed: {err}");
                        break;
                    }
                },
            }
        }

        if pause(&mut shutdown_rx, REOPEN_DELAY).await {
            break 'accept;
        }
    }

    endpoint.remove_node();
    info!(
        sessions = endpoint.generation(),
        "control channel listener stopped"
    );
}

fn handle_line(line: &str, events: &UnboundedSender<DomainEvent>) {
    match parse_line(line) {
        Ok(Some(invocation)) => {
            let _ = events.send(DomainEvent::Control(invocation));
        }
        Ok(None) => {}
        Err(err) => warn!("{err}"),
    }
}

/// Returns true when shutdown was signalled during the pause.
async fn pause(shutdown_rx: &mut watch::Receiver<bool>, delay: Duration) -> bool {
    tokio::select! {
        _ = shutdown_rx.changed() => true,
        _ = sleep(delay) => false,
    }
}

//! # OS interrupt subscription.
//!
//! Provides [`subscribe`], which registers the interrupt listener once at
//! startup and forwards every delivery into a channel the supervisor's
//! select loop consumes. Only the interrupt signal is handled; no other
//! signal surface exists.
//!
//! ## Signals
//! **Unix platforms:**
//! - `SIGINT` (Ctrl-C in terminal)
//!
//! **Non-Unix platforms:**
//! - `Ctrl-C` via [`tokio::signal::ctrl_c`]
//!
//! Repeated deliveries each produce one channel message, so a second Ctrl-C
//! re-broadcasts to whatever children are still outstanding.

use tokio::sync::mpsc;

use crate::error::RuntimeError;

/// Registers the interrupt listener and returns the delivery channel.
///
/// Registration happens here, synchronously, so a failure surfaces before
/// any command is launched. The forwarding task runs for the lifetime of the
/// process; it stops once the receiver is dropped.
#[cfg(unix)]
pub(crate) fn subscribe() -> Result<mpsc::Receiver<()>, RuntimeError> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|source| RuntimeError::SignalSubscribe { source })?;

    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        while sigint.recv().await.is_some() {
            if tx.send(()).await.is_err() {
                break;
            }
        }
    });
    Ok(rx)
}

/// Registers the interrupt listener and returns the delivery channel.
#[cfg(not(unix))]
pub(crate) fn subscribe() -> Result<mpsc::Receiver<()>, RuntimeError> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if tx.send(()).await.is_err() {
                break;
            }
        }
    });
    Ok(rx)
}

//! Single-slot fault hand-off between background loops and the coordinator.

use tokio::sync::mpsc;

use crate::error::Error;

/// A terminal failure reported by one of the background loops.
#[derive(Debug)]
pub enum Fault {
    /// The poll loop could not complete a fetch and has stopped.
    Poll(Error),
    /// The metrics server could not bind or serve and has stopped.
    Serve(Error),
}

/// Sending half of the fault channel, cloned into each background loop.
#[derive(Clone)]
pub struct FaultSender(mpsc::Sender<Fault>);

/// Create the capacity-one fault channel.
pub fn fault_channel() -> (FaultSender, mpsc::Receiver<Fault>) {
    let (tx, rx) = mpsc::channel(1);
    (FaultSender(tx), rx)
}

impl FaultSender {
    /// Hand off a fault without blocking.
    ///
    /// The channel holds exactly one fault; only the first report is kept
    /// and later reports are dropped.
    pub fn report(&self, fault: Fault) {
        let _ = self.0.try_send(fault);
    }
}

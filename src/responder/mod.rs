use crate::bus::Command;
use crate::tabs::Tab;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// Simulated assistant reply.
///
/// `schedule` queues one delayed delivery per call: a tokio task
/// sleeps for the configured delay, then feeds `DeliverResponse` back
/// into the command channel. The delay never blocks other command
/// handling, so tab switching and booking verification stay responsive
/// while a reply is in flight. There is no cancellation — once queued,
/// a delivery always fires; the store drops deliveries that land on a
/// timeline that is no longer pending.
pub struct Responder {
    delay: Duration,
    commands: UnboundedSender<Command>,
}

impl Responder {
    pub fn new(delay: Duration, commands: UnboundedSender<Command>) -> Self {
        Self { delay, commands }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&self, tab: Tab) {
        debug!(tab = %tab, delay = ?self.delay, "Scheduling simulated response");
        let commands = self.commands.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = commands.send(Command::DeliverResponse { tab });
        });
    }
}

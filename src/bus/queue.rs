use crate::bus::Command;
use tokio::sync::mpsc;

/// Command queue wiring the surface and the responder to the widget
/// store.
///
/// The channel is unbounded: producers are a human typing and a
/// handful of timers, so backpressure is moot. All commands are
/// consumed on a single loop, which keeps store mutations serialized
/// the way the original single-threaded page was. Render events do
/// not travel here — `dispatch` returns them directly to the loop.
pub struct CommandBus {
    pub command_tx: mpsc::UnboundedSender<Command>,
    command_rx: mpsc::UnboundedReceiver<Command>,
}

impl CommandBus {
    pub fn new() -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        Self {
            command_tx,
            command_rx,
        }
    }

    pub fn submit(&self, cmd: Command) {
        let _ = self.command_tx.send(cmd);
    }

    pub async fn next_command(&mut self) -> Option<Command> {
        self.command_rx.recv().await
    }

    /// Non-blocking poll, for callers that only want to drain what is
    /// already queued.
    pub fn try_next_command(&mut self) -> Option<Command> {
        self.command_rx.try_recv().ok()
    }
}

impl Default for CommandBus {
    fn default() -> Self {
        Self::new()
    }
}

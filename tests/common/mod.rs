// Shared test helpers — not all items used by every test binary.
#![allow(unused)]

use async_trait::async_trait;
use frontdesk::bus::{Command, CommandBus, RenderEvent};
use frontdesk::responder::Responder;
use frontdesk::surface::Surface;
use frontdesk::widget::WidgetStore;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Surface that records every presented event for later assertions.
#[derive(Clone)]
pub struct RecordingSurface {
    pub events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn recorded(&self) -> Vec<RenderEvent> {
        self.events.lock().expect("lock recorded events").clone()
    }
}

#[async_trait]
impl Surface for RecordingSurface {
    async fn present(&self, event: &RenderEvent) -> anyhow::Result<()> {
        self.events
            .lock()
            .expect("lock recorded events")
            .push(event.clone());
        Ok(())
    }
}

/// Test fixture wiring a store, bus, responder and recording surface
/// the way the chat event loop does, with a short response delay.
pub struct Harness {
    pub store: WidgetStore,
    pub bus: CommandBus,
    pub responder: Responder,
    pub surface: RecordingSurface,
}

impl Harness {
    pub fn new(delay: Duration) -> Self {
        let bus = CommandBus::new();
        let responder = Responder::new(delay, bus.command_tx.clone());
        Self {
            store: WidgetStore::new(),
            bus,
            responder,
            surface: RecordingSurface::new(),
        }
    }

    /// Dispatch one command, presenting its events and scheduling a
    /// responder timer for each typing cycle, like the chat loop.
    pub async fn apply(&mut self, cmd: Command) {
        for event in self.store.dispatch(cmd) {
            if let RenderEvent::TypingStarted { tab } = event {
                self.responder.schedule(tab);
            }
            self.surface
                .present(&event)
                .await
                .expect("present render event");
        }
    }

    /// Wait for the next queued command (e.g. a response delivery)
    /// and apply it.
    pub async fn apply_next(&mut self) {
        let cmd = self.bus.next_command().await.expect("queued command");
        self.apply(cmd).await;
    }
}

use crate::booking::{BookingSession, VerifyOutcome};
use crate::bus::{Command, RenderEvent};
use crate::tabs::{Tab, TabSelection};
use crate::timeline::{Sender, Timeline};
use tracing::debug;

/// Greeting seeded into the general timeline at construction.
pub const WELCOME_TEXT: &str =
    "Welcome to our general inquiry service! How can I help you today?";

/// Canned acknowledgment delivered after every accepted send.
pub const ACK_TEXT: &str = "Thank you for your message! We will get back to you shortly.";

/// Single owner of all widget state.
///
/// Every mutation goes through `dispatch`, which applies one command
/// synchronously and returns the render events it produced, in order.
/// Handlers never interleave: the store is `&mut self` and callers
/// serialize commands through one consumer loop.
pub struct WidgetStore {
    selection: TabSelection,
    general: Timeline,
    booking_chat: Timeline,
    booking: BookingSession,
    error_banner: bool,
}

impl WidgetStore {
    pub fn new() -> Self {
        Self {
            selection: TabSelection::new(),
            general: Timeline::seeded(WELCOME_TEXT),
            booking_chat: Timeline::new(),
            booking: BookingSession::new(),
            error_banner: false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.selection.active()
    }

    pub fn timeline(&self, tab: Tab) -> &Timeline {
        match tab {
            Tab::General => &self.general,
            Tab::Booking => &self.booking_chat,
        }
    }

    fn timeline_mut(&mut self, tab: Tab) -> &mut Timeline {
        match tab {
            Tab::General => &mut self.general,
            Tab::Booking => &mut self.booking_chat,
        }
    }

    pub fn booking(&self) -> &BookingSession {
        &self.booking
    }

    pub fn error_banner(&self) -> bool {
        self.error_banner
    }

    /// Apply one command and return the render events it produced.
    pub fn dispatch(&mut self, cmd: Command) -> Vec<RenderEvent> {
        match cmd {
            Command::ActivateTab { tab } => self.activate_tab(tab),
            Command::SendMessage { tab, text } => self.send_message(tab, &text),
            Command::VerifyBooking { candidate } => self.verify_booking(&candidate),
            Command::DeliverResponse { tab } => self.deliver_response(tab),
        }
    }

    fn activate_tab(&mut self, tab: Tab) -> Vec<RenderEvent> {
        // Clear-then-set, never a conditional toggle. Re-activating the
        // active tab re-emits the event; the re-render is harmless.
        self.selection.activate(tab);
        vec![RenderEvent::TabActivated { tab }]
    }

    fn send_message(&mut self, tab: Tab, text: &str) -> Vec<RenderEvent> {
        if tab == Tab::Booking && !self.booking.is_verified() {
            debug!("Dropping send to booking panel before verification");
            return vec![];
        }

        let timeline = self.timeline_mut(tab);
        let Some(msg) = timeline.append(Sender::User, text) else {
            // Empty after trim: no message, no render, input left as-is.
            return vec![];
        };
        let text = msg.text.clone();

        let mut events = vec![RenderEvent::MessageAppended {
            tab,
            sender: Sender::User,
            text,
        }];

        // At most one response timer outstanding per timeline. A send
        // that lands while a reply is pending still records the user
        // message; the already-queued delivery acknowledges it.
        if timeline.is_pending() {
            debug!(tab = %tab, "Response already pending, not starting another");
        } else {
            timeline.set_pending(true);
            events.push(RenderEvent::TypingStarted { tab });
        }

        events
    }

    fn verify_booking(&mut self, candidate: &str) -> Vec<RenderEvent> {
        match self.booking.verify(candidate) {
            VerifyOutcome::Accepted { booking_id } => {
                let mut events = Vec::new();
                if self.error_banner {
                    // A later successful verify clears a stale banner.
                    self.error_banner = false;
                    events.push(RenderEvent::ErrorBannerCleared);
                }
                events.push(RenderEvent::BookingVerified { booking_id });
                events
            }
            VerifyOutcome::Rejected => {
                self.error_banner = true;
                vec![RenderEvent::BookingRejected]
            }
            VerifyOutcome::AlreadyVerified => {
                debug!("Ignoring verify on an already verified session");
                vec![]
            }
        }
    }

    fn deliver_response(&mut self, tab: Tab) -> Vec<RenderEvent> {
        let timeline = self.timeline_mut(tab);
        if !timeline.is_pending() {
            // A delivery always fires once queued; if nothing is
            // pending anymore it lands as a no-op.
            debug!(tab = %tab, "Dropping stray response delivery");
            return vec![];
        }
        timeline.set_pending(false);
        timeline.append(Sender::Assistant, ACK_TEXT);
        vec![
            RenderEvent::TypingCleared { tab },
            RenderEvent::MessageAppended {
                tab,
                sender: Sender::Assistant,
                text: ACK_TEXT.to_string(),
            },
        ]
    }
}

impl Default for WidgetStore {
    fn default() -> Self {
        Self::new()
    }
}

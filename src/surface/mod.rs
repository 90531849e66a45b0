use crate::bus::RenderEvent;
use crate::timeline::Sender;
use async_trait::async_trait;

/// Output seam for render events.
///
/// Surfaces are pure consumers: they draw what an event says and keep
/// no widget state of their own. The terminal implementation below is
/// the only one shipped; tests plug in a recording surface.
#[async_trait]
pub trait Surface: Send + Sync {
    async fn present(&self, event: &RenderEvent) -> anyhow::Result<()>;
}

/// Project one render event to a display line.
///
/// Returns `None` for events with no visible row of their own
/// (clearing the typing indicator or the error banner just stops
/// further lines; a scrollback terminal cannot retract output).
pub fn render_line(event: &RenderEvent) -> Option<String> {
    match event {
        RenderEvent::TabActivated { tab } => Some(format!("── {} ──", tab)),
        RenderEvent::MessageAppended { sender, text, .. } => Some(match sender {
            Sender::User => format!("you> {}", text),
            Sender::Assistant => format!("assistant> {}", text),
        }),
        RenderEvent::TypingStarted { .. } => Some("assistant is typing…".to_string()),
        RenderEvent::TypingCleared { .. } => None,
        RenderEvent::BookingVerified { booking_id } => Some(format!(
            "Booking {} verified. The booking chat is now open.",
            booking_id
        )),
        RenderEvent::BookingRejected => Some(
            "Invalid booking ID. Expected format: BK followed by five digits (e.g. BK00042)."
                .to_string(),
        ),
        RenderEvent::ErrorBannerCleared => None,
    }
}

/// Stdout renderer for the interactive CLI.
pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Surface for TerminalSurface {
    async fn present(&self, event: &RenderEvent) -> anyhow::Result<()> {
        if let Some(line) = render_line(event) {
            println!("{}", line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::Tab;

    #[test]
    fn test_message_rows_are_prefixed_by_sender() {
        let event = RenderEvent::MessageAppended {
            tab: Tab::General,
            sender: Sender::User,
            text: "Hi".into(),
        };
        assert_eq!(render_line(&event).unwrap(), "you> Hi");

        let event = RenderEvent::MessageAppended {
            tab: Tab::General,
            sender: Sender::Assistant,
            text: "Hello".into(),
        };
        assert_eq!(render_line(&event).unwrap(), "assistant> Hello");
    }

    #[test]
    fn test_clearing_events_draw_nothing() {
        assert!(render_line(&RenderEvent::TypingCleared { tab: Tab::General }).is_none());
        assert!(render_line(&RenderEvent::ErrorBannerCleared).is_none());
    }

    #[test]
    fn test_booking_lines() {
        let accepted = RenderEvent::BookingVerified {
            booking_id: "BK00042".into(),
        };
        assert!(render_line(&accepted).unwrap().contains("BK00042"));
        assert!(render_line(&RenderEvent::BookingRejected)
            .unwrap()
            .contains("Invalid booking ID"));
    }
}

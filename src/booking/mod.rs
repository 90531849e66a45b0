use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Regex for a well-formed booking identifier: literal `BK` followed
/// by exactly five decimal digits. Case-sensitive, anchored both ends.
pub fn booking_id_pattern() -> &'static Regex {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^BK\d{5}$").expect("Failed to compile booking ID regex"));
    &RE
}

/// Result of a single verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Accepted { booking_id: String },
    Rejected,
    AlreadyVerified,
}

/// Verification state gating access to the booking chat panel.
///
/// Starts `Unverified`; a matching identifier moves it to `Verified`
/// exactly once. There is no transition out of `Verified` for the
/// life of the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state")]
pub enum BookingSession {
    Unverified,
    Verified { booking_id: String },
}

impl BookingSession {
    pub fn new() -> Self {
        BookingSession::Unverified
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, BookingSession::Verified { .. })
    }

    pub fn booking_id(&self) -> Option<&str> {
        match self {
            BookingSession::Verified { booking_id } => Some(booking_id),
            BookingSession::Unverified => None,
        }
    }

    /// Synchronous, single-shot identifier check. The candidate is
    /// trimmed before matching; nothing external is consulted.
    pub fn verify(&mut self, candidate: &str) -> VerifyOutcome {
        if self.is_verified() {
            // The entry form disappears after success, so this path is
            // unreachable from the surface. Stay safe anyway.
            return VerifyOutcome::AlreadyVerified;
        }

        let candidate = candidate.trim();
        if booking_id_pattern().is_match(candidate) {
            let booking_id = candidate.to_string();
            *self = BookingSession::Verified {
                booking_id: booking_id.clone(),
            };
            VerifyOutcome::Accepted { booking_id }
        } else {
            VerifyOutcome::Rejected
        }
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_verify_accepts_well_formed_id() {
        let mut session = BookingSession::new();
        let outcome = session.verify("BK00042");
        assert_eq!(
            outcome,
            VerifyOutcome::Accepted {
                booking_id: "BK00042".to_string()
            }
        );
        assert!(session.is_verified());
        assert_eq!(session.booking_id(), Some("BK00042"));
    }

    #[test]
    fn test_verify_trims_candidate() {
        let mut session = BookingSession::new();
        assert!(matches!(
            session.verify("  BK12345 "),
            VerifyOutcome::Accepted { .. }
        ));
        assert_eq!(session.booking_id(), Some("BK12345"));
    }

    #[test]
    fn test_verify_rejects_malformed_ids() {
        for candidate in ["BK123", "bk00042", "BK000421", "XYZ", "", "BK 0042", "BKABCDE"] {
            let mut session = BookingSession::new();
            assert_eq!(session.verify(candidate), VerifyOutcome::Rejected, "{candidate:?}");
            assert!(!session.is_verified());
            assert_eq!(session.booking_id(), None);
        }
    }

    #[test]
    fn test_verified_is_terminal() {
        let mut session = BookingSession::new();
        session.verify("BK00001");
        assert_eq!(session.verify("BK99999"), VerifyOutcome::AlreadyVerified);
        // The original identifier is retained
        assert_eq!(session.booking_id(), Some("BK00001"));
        assert_eq!(session.verify("garbage"), VerifyOutcome::AlreadyVerified);
        assert!(session.is_verified());
    }

    proptest! {
        #[test]
        fn any_five_digit_suffix_is_accepted(digits in "[0-9]{5}") {
            let mut session = BookingSession::new();
            let candidate = format!("BK{}", digits);
            let accepted = matches!(session.verify(&candidate), VerifyOutcome::Accepted { .. });
            prop_assert!(accepted);
        }

        #[test]
        fn wrong_length_suffix_is_rejected(digits in "[0-9]{0,4}|[0-9]{6,8}") {
            let mut session = BookingSession::new();
            let candidate = format!("BK{}", digits);
            prop_assert_eq!(session.verify(&candidate), VerifyOutcome::Rejected);
        }
    }
}

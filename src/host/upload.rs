/// Simulated upload latency
///
/// A real host would notify us when the selfie has been processed. On
/// desktop a timer stands in for it. The ticket is compared against the
/// live one when the timer fires, so a stale timer never touches state.

use std::time::Duration;

/// Handle for one scheduled "photo supplied" callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPhoto {
    /// Unique per scheduling; a newer ticket supersedes older ones
    pub ticket: u64,
    pub delay: Duration,
}

/// Sleep for the simulated latency, then hand back the ticket
pub async fn wait_for_photo(pending: PendingPhoto) -> u64 {
    tokio::time::sleep(pending.delay).await;
    pending.ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wait_returns_ticket() {
        let pending = PendingPhoto {
            ticket: 9,
            delay: Duration::from_millis(1),
        };
        assert_eq!(wait_for_photo(pending).await, 9);
    }
}

use crate::model::{Status, Ticket};
use serde::Serialize;

/// Dashboard counts, recomputed from the full list on every render.
///
/// `total` counts every ticket; the three buckets count only their own
/// status. A ticket whose stored status fell outside the enum is in `total`
/// but in no bucket, so the buckets may sum to less than `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

impl TicketStats {
    pub fn count(tickets: &[Ticket]) -> Self {
        let mut stats = Self {
            total: tickets.len(),
            ..Self::default()
        };
        for ticket in tickets {
            match ticket.status {
                Status::Open => stats.open += 1,
                Status::InProgress => stats.in_progress += 1,
                Status::Closed => stats.closed += 1,
                Status::Unknown => {}
            }
        }
        stats
    }
}

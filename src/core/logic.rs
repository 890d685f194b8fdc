use crate::core::aggregator;
use crate::models::day_summary::DaySummary;
use crate::models::event::EventRecord;
use crate::models::meeting::MeetingSet;

pub struct Core;

impl Core {
    /// Normalize the meetings collection once, then run the aggregation.
    pub fn build_calendar(events: &[EventRecord], meetings: MeetingSet) -> Vec<DaySummary> {
        let records = meetings.into_records();
        aggregator::aggregate(events, &records)
    }
}

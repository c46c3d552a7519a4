//! Daily log sheets.
//!
//! Drivers keep one log sheet per calendar day. This module cuts the
//! continuous event stream at each midnight and totals every day.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use crate::domain::{DutyEvent, DutyStatus, Timestamp, duration_to_hours};

/// Carrier details printed on every sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogHeader {
    pub carrier: String,
    pub truck_number: String,
}

impl LogHeader {
    pub fn new(carrier: impl Into<String>, truck_number: impl Into<String>) -> Self {
        Self {
            carrier: carrier.into(),
            truck_number: truck_number.into(),
        }
    }
}

/// Hours per duty status.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusHours {
    pub off_duty: f64,
    pub driving: f64,
    pub on_duty: f64,
}

impl StatusHours {
    fn add(&mut self, status: DutyStatus, hours: f64) {
        match status {
            DutyStatus::OffDuty => self.off_duty += hours,
            DutyStatus::Driving => self.driving += hours,
            DutyStatus::OnDutyNotDriving => self.on_duty += hours,
        }
    }

    /// Sum over all statuses.
    pub fn total(&self) -> f64 {
        self.off_duty + self.driving + self.on_duty
    }
}

/// One calendar day of duty events.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyLog {
    pub date: NaiveDate,

    /// Events clipped to this day.
    pub events: Vec<DutyEvent>,

    pub total_miles: f64,
    pub total_hours: StatusHours,

    /// On-duty cycle hours at the start and end of the day.
    pub cycle_used_start: f64,
    pub cycle_used_end: f64,

    pub carrier: String,
    pub truck_number: String,
}

impl DailyLog {
    fn new(date: NaiveDate, cycle_used: f64, header: &LogHeader) -> Self {
        Self {
            date,
            events: Vec::new(),
            total_miles: 0.0,
            total_hours: StatusHours::default(),
            cycle_used_start: cycle_used,
            cycle_used_end: cycle_used,
            carrier: header.carrier.clone(),
            truck_number: header.truck_number.clone(),
        }
    }
}

/// Split events into per-day logs.
///
/// Days are calendar dates in each event's own UTC offset. Events crossing
/// midnight are cut into one piece per day, with driving distance pro-rated
/// by time. Zero-length events are kept on the day they occur. `cycle_used`
/// is the on-duty hours already used before the first event.
pub fn daily_logs(events: &[DutyEvent], cycle_used: f64, header: &LogHeader) -> Vec<DailyLog> {
    let mut logs: BTreeMap<NaiveDate, DailyLog> = BTreeMap::new();
    let mut cycle = cycle_used;

    for event in events {
        let event_hours = duration_to_hours(event.duration());

        for (chunk_start, chunk_end) in day_chunks(event.start_time, event.end_time) {
            let date = chunk_start.date_naive();
            let hours = duration_to_hours(chunk_end - chunk_start);
            let miles = if event_hours > 0.0 {
                event.distance_miles * hours / event_hours
            } else {
                event.distance_miles
            };

            let log = logs
                .entry(date)
                .or_insert_with(|| DailyLog::new(date, cycle, header));

            log.events.push(DutyEvent {
                start_time: chunk_start,
                end_time: chunk_end,
                duration_hours: hours,
                distance_miles: miles,
                ..event.clone()
            });
            log.total_hours.add(event.status, hours);
            log.total_miles += miles;

            if event.status.is_on_duty() {
                cycle += hours;
            }
            log.cycle_used_end = cycle;
        }
    }

    logs.into_values().collect()
}

/// Cut `[start, end)` at every midnight in `start`'s offset.
///
/// A zero-length span yields a single empty chunk.
fn day_chunks(start: Timestamp, end: Timestamp) -> Vec<(Timestamp, Timestamp)> {
    if end <= start {
        return vec![(start, start)];
    }

    let mut chunks = Vec::new();
    let mut chunk_start = start;
    while chunk_start < end {
        let chunk_end = next_midnight(chunk_start).map_or(end, |m| m.min(end));
        chunks.push((chunk_start, chunk_end));
        chunk_start = chunk_end;
    }
    chunks
}

fn next_midnight(t: Timestamp) -> Option<Timestamp> {
    t.date_naive()
        .succ_opt()?
        .and_time(NaiveTime::MIN)
        .and_local_timezone(*t.offset())
        .single()
}

//! Year-advance transition and the capped event log.
//!
//! [`advance_year`] is the whole body of one simulation tick. It mutates the
//! dataset in place and reports what happened; scheduling the ticks and
//! re-ranking afterwards belong to the engine.
//!
//! Order within a year:
//! 1. year += 1
//! 2. passive income from acquired objects (before drift)
//! 3. expired anomalies clear and their threat halves
//! 4. every economic value drifts by up to ±1%
//! 5. 2% chance of an anomaly on one random object, otherwise
//! 6. 10% chance of a boom / bust / threat / discovery event on one object

use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::celestial::{CelestialObject, ObjectStatus};
use crate::config::SimulationConfig;
use crate::random::RandomSource;
use crate::scoring::income;

/// Largest relative economic drift per year.
pub const ECONOMIC_DRIFT: f64 = 0.01;
/// Base value used by boom/bust when an object has no economy yet.
pub const DEFAULT_EVENT_ECONOMIC_VALUE: f64 = 1e9;
/// Threat assumed when clearing an anomaly on an object without one.
pub const DEFAULT_CLEARED_THREAT: f64 = 0.5;
/// Anomalies last this many years at most (at least one).
pub const MAX_ANOMALY_YEARS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    AnomalyDetected,
    AnomalyCleared,
    EconomicBoom,
    EconomicBust,
    ThreatIncrease,
    ResourceDiscovery,
    Intervention,
    InterventionFailed,
}

/// Something that happened to one object in a given year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimEvent {
    pub year: i64,
    pub kind: EventKind,
    pub message: String,
    pub object_id: Option<String>,
    pub object_name: Option<String>,
    /// Factor or increment the event applied, where it has one.
    pub magnitude: Option<f64>,
}

impl SimEvent {
    pub fn for_object(year: i64, kind: EventKind, object: &CelestialObject, message: String) -> Self {
        Self {
            year,
            kind,
            message,
            object_id: Some(object.id().to_string()),
            object_name: Some(object.name().to_string()),
            magnitude: None,
        }
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = Some(magnitude);
        self
    }
}

/// A logged event with its sequence id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub id: u64,
    #[serde(flatten)]
    pub event: SimEvent,
}

/// Newest-first event log keeping at most `capacity` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<EventLogEntry>,
    capacity: usize,
    next_id: u64,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    /// Record an event at the front, dropping the oldest past capacity.
    pub fn record(&mut self, event: SimEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_front(EventLogEntry { id, event });
        self.entries.truncate(self.capacity);
        id
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &EventLogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&EventLogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// What one tick did.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// The year just entered.
    pub year: i64,
    /// Capital earned from acquired objects this year.
    pub income: f64,
    /// Events in the order they happened.
    pub events: Vec<SimEvent>,
    /// The dataset was mutated and needs re-ranking.
    pub changed: bool,
}

/// Advance the simulation by one year. See the module docs for the order.
pub fn advance_year(
    dataset: &mut [CelestialObject],
    year: i64,
    acquired: &BTreeSet<String>,
    config: &SimulationConfig,
    rng: &mut dyn RandomSource,
) -> TickOutcome {
    let year = year + 1;
    let mut events = Vec::new();
    let mut changed = false;

    let income = passive_income(dataset, acquired);

    for object in dataset.iter_mut() {
        if let Some(event) = clear_expired_status(object, year) {
            events.push(event);
            changed = true;
        }
    }

    changed |= apply_economic_drift(dataset, rng);

    if !dataset.is_empty() {
        if rng.chance(config.anomaly_chance) {
            let index = rng.pick_index(dataset.len());
            events.push(inject_anomaly(&mut dataset[index], year, rng));
            changed = true;
        } else if rng.chance(config.event_chance) {
            let index = rng.pick_index(dataset.len());
            events.push(random_event(&mut dataset[index], year, rng));
            changed = true;
        }
    }

    TickOutcome {
        year,
        income,
        events,
        changed,
    }
}

/// Income from acquired objects at their current economic value.
pub fn passive_income(dataset: &[CelestialObject], acquired: &BTreeSet<String>) -> f64 {
    dataset
        .iter()
        .filter(|o| acquired.contains(o.id()))
        .map(|o| income(o.common().economic_value))
        .sum()
}

fn clear_expired_status(object: &mut CelestialObject, year: i64) -> Option<SimEvent> {
    let common = object.common_mut();
    let expiry = common.status_expiry_year?;
    if common.status.is_none() || year < expiry {
        return None;
    }
    common.status = None;
    common.status_expiry_year = None;
    common.threat_level = Some(common.threat_level.unwrap_or(DEFAULT_CLEARED_THREAT) / 2.0);

    let message = format!(
        "Anomaly near {} cleared. System returning to nominal threat levels.",
        object.name()
    );
    Some(SimEvent::for_object(year, EventKind::AnomalyCleared, object, message))
}

/// Perturb every non-zero economic value by a uniform ±1%, floored at 0.
/// Returns whether any value was touched.
fn apply_economic_drift(dataset: &mut [CelestialObject], rng: &mut dyn RandomSource) -> bool {
    let mut touched = false;
    for object in dataset.iter_mut() {
        let common = object.common_mut();
        if let Some(value) = common.economic_value.filter(|v| *v != 0.0) {
            let fluctuation = (rng.next_f64() - 0.5) * 2.0 * ECONOMIC_DRIFT;
            common.economic_value = Some((value * (1.0 + fluctuation)).max(0.0));
            touched = true;
        }
    }
    touched
}

fn inject_anomaly(object: &mut CelestialObject, year: i64, rng: &mut dyn RandomSource) -> SimEvent {
    let duration = rng.int_inclusive(1, MAX_ANOMALY_YEARS);
    let common = object.common_mut();
    common.status = Some(ObjectStatus::Suspect);
    common.status_expiry_year = Some(year + duration);
    common.threat_level = Some(1.0);

    let message = format!(
        "Anomalous signals detected near {}. Object status is suspect.",
        object.name()
    );
    SimEvent::for_object(year, EventKind::AnomalyDetected, object, message)
        .with_magnitude(duration as f64)
}

fn random_event(object: &mut CelestialObject, year: i64, rng: &mut dyn RandomSource) -> SimEvent {
    let roll = rng.pick_index(4);
    let name = object.name().to_string();
    let common = object.common_mut();

    let (kind, message, magnitude) = match roll {
        0 => {
            let factor = rng.uniform(1.1, 1.3);
            common.economic_value = Some(event_base_value(common.economic_value) * factor);
            let message = format!(
                "Economic boom in {name}. Value increased by {:.0}%.",
                factor * 100.0 - 100.0
            );
            (EventKind::EconomicBoom, message, factor)
        }
        1 => {
            let factor = rng.uniform(0.7, 0.9);
            common.economic_value = Some(event_base_value(common.economic_value) * factor);
            let message = format!(
                "Recession hits {name}. Value decreased by {:.0}%.",
                100.0 - factor * 100.0
            );
            (EventKind::EconomicBust, message, factor)
        }
        2 => {
            let increase = rng.uniform(0.1, 0.3);
            common.threat_level = Some((common.threat_level.unwrap_or(0.0) + increase).min(1.0));
            let message = format!(
                "Anomalous energy signatures increase threat level in {name} by {increase:.2}."
            );
            (EventKind::ThreatIncrease, message, increase)
        }
        _ => {
            let increase = rng.uniform(0.1, 0.2);
            common.resource_potential =
                Some((common.resource_potential.unwrap_or(0.0) + increase).min(1.0));
            let message = format!(
                "New valuable resources discovered in {name}. Resource potential up {increase:.2}."
            );
            (EventKind::ResourceDiscovery, message, increase)
        }
    };

    SimEvent::for_object(year, kind, object, message).with_magnitude(magnitude)
}

fn event_base_value(economic_value: Option<f64>) -> f64 {
    economic_value
        .filter(|v| *v != 0.0)
        .unwrap_or(DEFAULT_EVENT_ECONOMIC_VALUE)
}

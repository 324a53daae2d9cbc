//! Simulation engine - main entry point for ranking and running the simulation

use std::collections::{BTreeSet, HashMap};
use std::io::{Read, Write};

use chrono::{DateTime, Utc};
use rados_logic::celestial::{duplicate_id, find_index, CelestialObject, Coordinates, ObjectKind};
use rados_logic::config::SimulationConfig;
use rados_logic::interventions::{resolve_intervention, Intervention};
use rados_logic::random::RandomSource;
use rados_logic::rank_change::{track_rank_changes, RankChange, RankChangeMap};
use rados_logic::ranking::{compute_rankings, RankingError, RankingPass};
use rados_logic::scoring::ScoredResult;
use rados_logic::simulation::{advance_year, EventLog, SimEvent, TickOutcome};
use rados_logic::views::{
    filter_by_name, place_on_starmap, sort_results, ComparisonToggle, SortKey, ViewState,
};
use rados_logic::weights::{
    GalaxyWeight, GalaxyWeights, StarSystemWeight, StarSystemWeights, WeightsConfig,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::advisor::overview_prompt;
use crate::error::EngineError;
use crate::persistence::{load_state, save_state, SaveData, SAVE_VERSION};
use crate::random::ThreadRandom;
use crate::scheduler::TickScheduler;
use crate::seed::example_dataset;
use crate::snapshots::SnapshotStore;

/// Objects included in the global advisor overview.
const OVERVIEW_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationStatus {
    Paused,
    Running,
}

/// Main simulation engine
pub struct SimulationEngine {
    /// Raw objects, in insertion order
    dataset: Vec<CelestialObject>,
    weights: WeightsConfig,
    /// Latest successful ranking, best first
    rankings: Vec<ScoredResult>,
    rankings_timestamp: Option<DateTime<Utc>>,
    rank_changes: RankChangeMap,
    /// Set while the most recent ranking pass failed
    last_error: Option<RankingError>,
    /// Starmap positions, assigned once per object
    positions: HashMap<String, Coordinates>,

    // Economy
    year: i64,
    capital: f64,
    acquired: BTreeSet<String>,
    event_log: EventLog,

    // Timing
    status: SimulationStatus,
    scheduler: TickScheduler,

    /// Sorting, search and comparison state
    pub view: ViewState,
    snapshots: SnapshotStore,
    config: SimulationConfig,
    rng: Box<dyn RandomSource>,
}

impl SimulationEngine {
    /// Create an empty, paused engine with default tuning
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            dataset: Vec::new(),
            weights: WeightsConfig::default(),
            rankings: Vec::new(),
            rankings_timestamp: None,
            rank_changes: RankChangeMap::new(),
            last_error: None,
            positions: HashMap::new(),
            year: config.starting_year,
            capital: config.starting_capital,
            acquired: BTreeSet::new(),
            event_log: EventLog::new(config.event_log_capacity),
            status: SimulationStatus::Paused,
            scheduler: TickScheduler::new(config.tick_interval_secs),
            view: ViewState::default(),
            snapshots: SnapshotStore::new(),
            config,
            rng: Box::new(ThreadRandom),
        }
    }

    /// Replace the random source. Later ticks, interventions and starmap
    /// placements draw from it.
    pub fn with_rng(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_dataset(mut self, dataset: Vec<CelestialObject>) -> Result<Self, EngineError> {
        self.set_dataset(dataset)?;
        Ok(self)
    }

    /// Replace the dataset and re-rank. Rejected, leaving the current
    /// dataset in place, if two objects share an id.
    pub fn set_dataset(&mut self, dataset: Vec<CelestialObject>) -> Result<(), EngineError> {
        check_unique_ids(&dataset)?;
        log::info!("Loaded dataset with {} objects", dataset.len());
        self.dataset = dataset;
        self.rerank();
        Ok(())
    }

    /// Replace the dataset with the bundled three-object example set.
    pub fn load_seed_dataset(&mut self) -> Result<(), EngineError> {
        let dataset = example_dataset()?;
        self.set_dataset(dataset)
    }

    // ── Simulation control ────────────────────────────────────────────

    pub fn start(&mut self) {
        if self.status == SimulationStatus::Running {
            return;
        }
        self.scheduler.cancel();
        self.scheduler.arm();
        self.status = SimulationStatus::Running;
        log::info!("Simulation started at year {}", self.year);
    }

    /// Pause and drop any pending tick.
    pub fn stop(&mut self) {
        self.scheduler.cancel();
        if self.status == SimulationStatus::Running {
            self.status = SimulationStatus::Paused;
            log::info!("Simulation paused at year {}", self.year);
        }
    }

    pub fn toggle(&mut self) -> SimulationStatus {
        match self.status {
            SimulationStatus::Running => self.stop(),
            SimulationStatus::Paused => self.start(),
        }
        self.status
    }

    /// Feed real elapsed time; runs the ticks that came due, at most
    /// `max_catch_up_ticks` of them. Returns the number of simulated years
    /// that passed.
    pub fn update(&mut self, delta_seconds: f64) -> u32 {
        let due = self.scheduler.advance(delta_seconds);
        let cap = self.config.max_catch_up_ticks;
        if due > cap {
            log::warn!("{} ticks came due at once, running {}", due, cap);
        }
        let due = due.min(cap);
        for _ in 0..due {
            self.tick_now();
        }
        due
    }

    /// Run one simulated year immediately, whatever the status.
    pub fn tick_now(&mut self) -> TickOutcome {
        let outcome = advance_year(
            &mut self.dataset,
            self.year,
            &self.acquired,
            &self.config,
            self.rng.as_mut(),
        );
        self.year = outcome.year;
        self.capital += outcome.income;
        for event in &outcome.events {
            self.event_log.record(event.clone());
        }
        if outcome.changed {
            self.rerank();
        }
        log::debug!(
            "Year {}: income {:.2}, {} events, changed={}",
            outcome.year,
            outcome.income,
            outcome.events.len(),
            outcome.changed
        );
        outcome
    }

    // ── Weights ───────────────────────────────────────────────────────

    /// Set one star-system weight, renormalize and re-rank.
    pub fn set_star_system_weight(&mut self, key: StarSystemWeight, value: f64) -> StarSystemWeights {
        self.weights.star_system = self.weights.star_system.with_component(key, value);
        self.rerank();
        self.weights.star_system
    }

    /// Set one galaxy weight, renormalize and re-rank.
    pub fn set_galaxy_weight(&mut self, key: GalaxyWeight, value: f64) -> GalaxyWeights {
        self.weights.galaxy = self.weights.galaxy.with_component(key, value);
        self.rerank();
        self.weights.galaxy
    }

    pub fn set_weights(&mut self, weights: WeightsConfig) {
        self.weights = weights;
        self.rerank();
    }

    pub fn reset_weights(&mut self) {
        self.set_weights(WeightsConfig::default());
    }

    // ── Portfolio ─────────────────────────────────────────────────────

    /// Mark an object as owned. Returns false if it already was.
    pub fn acquire(&mut self, id: &str) -> Result<bool, EngineError> {
        if find_index(&self.dataset, id).is_none() {
            return Err(EngineError::UnknownObject(id.to_string()));
        }
        let added = self.acquired.insert(id.to_string());
        if added {
            log::info!("Acquired {}", id);
            for result in self.rankings.iter_mut().filter(|r| r.id == id) {
                result.is_acquired = true;
            }
        }
        Ok(added)
    }

    /// Pay for an intervention on one object and roll for its effect.
    ///
    /// The cost is charged on failure too. Rejected without charge when
    /// capital is short.
    pub fn intervene(&mut self, id: &str, action: Intervention) -> Result<SimEvent, EngineError> {
        let index = find_index(&self.dataset, id)
            .ok_or_else(|| EngineError::UnknownObject(id.to_string()))?;
        let cost = action.cost();
        if self.capital < cost {
            log::warn!(
                "Rejected {} at {}: costs {}, capital {}",
                action.label(),
                id,
                cost,
                self.capital
            );
            return Err(EngineError::InsufficientCapital {
                action,
                cost,
                capital: self.capital,
            });
        }

        self.capital -= cost;
        let event = resolve_intervention(
            &mut self.dataset[index],
            action,
            self.year,
            self.config.intervention_success_chance,
            self.rng.as_mut(),
        );
        log::info!("{}", event.message);
        self.event_log.record(event.clone());
        self.rerank();
        Ok(event)
    }

    /// Append a new object (typically procedurally generated) and re-rank.
    pub fn add_object(&mut self, object: CelestialObject) -> Result<(), EngineError> {
        if find_index(&self.dataset, object.id()).is_some() {
            return Err(EngineError::DuplicateObject(object.id().to_string()));
        }
        log::info!("Added {} ({:?})", object.name(), object.kind());
        self.dataset.push(object);
        self.rerank();
        Ok(())
    }

    // ── Ranking ───────────────────────────────────────────────────────

    /// Re-rank now. On failure the previous ranking stays in place.
    pub fn recompute(&mut self) -> Result<(), EngineError> {
        self.rerank();
        match &self.last_error {
            Some(e) => Err(EngineError::Ranking(e.clone())),
            None => Ok(()),
        }
    }

    fn rerank(&mut self) {
        match compute_rankings(&self.dataset, &self.weights) {
            Ok(pass) => self.commit_rankings(pass),
            Err(e) => {
                log::warn!("Ranking pass failed, keeping previous ranking: {}", e);
                self.last_error = Some(e);
            }
        }
    }

    /// Publish a successful pass against the current dataset.
    fn commit_rankings(&mut self, pass: RankingPass) {
        let mut results = pass.results;
        for result in results.iter_mut() {
            result.is_acquired = self.acquired.contains(&result.id);
            result.coordinates = self.positions.get(&result.id).copied();
        }
        place_on_starmap(&mut results, self.rng.as_mut());
        self.positions = results
            .iter()
            .filter_map(|r| r.coordinates.map(|c| (r.id.clone(), c)))
            .collect();

        self.rank_changes = track_rank_changes(&self.rankings, &results);
        self.rankings = results;
        self.rankings_timestamp = Some(pass.timestamp);
        self.last_error = None;
    }

    // ── Views ─────────────────────────────────────────────────────────

    /// Results of one kind, filtered by the search query and sorted by
    /// that kind's sort setting.
    pub fn ranked_view(&self, kind: ObjectKind) -> Vec<ScoredResult> {
        let mut results: Vec<ScoredResult> = filter_by_name(&self.rankings, &self.view.search_query)
            .into_iter()
            .filter(|r| r.kind == kind)
            .cloned()
            .collect();
        let sort = match kind {
            ObjectKind::StarSystem => self.view.star_system_sort,
            ObjectKind::Galaxy => self.view.galaxy_sort,
        };
        sort_results(&mut results, sort);
        results
    }

    pub fn toggle_sort(&mut self, kind: ObjectKind, key: SortKey) {
        let sort = match kind {
            ObjectKind::StarSystem => &mut self.view.star_system_sort,
            ObjectKind::Galaxy => &mut self.view.galaxy_sort,
        };
        *sort = sort.toggled(key);
    }

    pub fn toggle_compare(&mut self, id: &str) -> ComparisonToggle {
        let outcome = self.view.comparison.toggle(id);
        if outcome == ComparisonToggle::Full {
            log::warn!("Comparison list is full, {} not added", id);
        }
        outcome
    }

    /// Results in the comparison list, in the order they were added.
    pub fn compared(&self) -> Vec<&ScoredResult> {
        self.view.comparison.resolve(&self.rankings)
    }

    /// Prompt for a portfolio-wide strategic overview.
    pub fn overview_prompt(&self) -> String {
        let names: Vec<&str> = self
            .dataset
            .iter()
            .filter(|o| self.acquired.contains(o.id()))
            .map(|o| o.name())
            .collect();
        let top = &self.rankings[..self.rankings.len().min(OVERVIEW_TOP_N)];
        overview_prompt(self.capital, &names, top)
    }

    // ── Persistence ───────────────────────────────────────────────────

    pub fn to_save_data(&self) -> SaveData {
        SaveData {
            version: SAVE_VERSION,
            dataset: self.dataset.clone(),
            weights: self.weights,
            year: self.year,
            capital: self.capital,
            acquired: self.acquired.clone(),
            event_log: self.event_log.clone(),
            rankings_timestamp: self.rankings_timestamp,
            view: self.view.clone(),
        }
    }

    /// Replace all state with `data`. Pauses the simulation and starts rank
    /// tracking afresh.
    ///
    /// The saved dataset is scored before anything is replaced; if it has
    /// repeated ids or fails to rank, the engine is left untouched.
    pub fn restore(&mut self, data: SaveData) -> Result<(), EngineError> {
        check_unique_ids(&data.dataset)?;
        let pass = compute_rankings(&data.dataset, &data.weights)?;
        let timestamp = data.rankings_timestamp.unwrap_or(pass.timestamp);

        self.stop();
        self.dataset = data.dataset;
        self.weights = data.weights;
        self.year = data.year;
        self.capital = data.capital;
        self.acquired = data.acquired;
        self.event_log = data.event_log;
        self.view = data.view;
        self.rankings.clear();
        self.commit_rankings(pass);
        self.rankings_timestamp = Some(timestamp);
        Ok(())
    }

    /// Save engine state to a writer
    pub fn save<W: Write>(&self, writer: W) -> Result<(), EngineError> {
        save_state(writer, &self.to_save_data())?;
        Ok(())
    }

    /// Load engine state from a reader
    pub fn load<R: Read>(&mut self, reader: R) -> Result<(), EngineError> {
        let data = load_state(reader)?;
        self.restore(data)
    }

    pub fn save_snapshot(&mut self, name: impl Into<String>) -> Uuid {
        let name = name.into();
        let id = self.snapshots.save(name.clone(), self.to_save_data());
        log::info!("Snapshot \"{}\" saved", name);
        id
    }

    pub fn load_snapshot(&mut self, id: Uuid) -> Result<(), EngineError> {
        let snapshot = self
            .snapshots
            .get(id)
            .ok_or(EngineError::UnknownSnapshot(id))?;
        let (name, data) = (snapshot.name.clone(), snapshot.data.clone());
        self.restore(data)?;
        log::info!("Snapshot \"{}\" loaded", name);
        Ok(())
    }

    pub fn rename_snapshot(&mut self, id: Uuid, name: impl Into<String>) -> Result<(), EngineError> {
        if self.snapshots.rename(id, name) {
            Ok(())
        } else {
            Err(EngineError::UnknownSnapshot(id))
        }
    }

    pub fn delete_snapshot(&mut self, id: Uuid) -> Result<(), EngineError> {
        self.snapshots
            .delete(id)
            .map(|_| ())
            .ok_or(EngineError::UnknownSnapshot(id))
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    /// Replace the snapshot list, e.g. with one read from disk.
    pub fn set_snapshots(&mut self, snapshots: SnapshotStore) {
        self.snapshots = snapshots;
    }

    // ── Accessors ─────────────────────────────────────────────────────

    pub fn dataset(&self) -> &[CelestialObject] {
        &self.dataset
    }

    pub fn weights(&self) -> &WeightsConfig {
        &self.weights
    }

    pub fn rankings(&self) -> &[ScoredResult] {
        &self.rankings
    }

    pub fn rankings_timestamp(&self) -> Option<DateTime<Utc>> {
        self.rankings_timestamp
    }

    pub fn rank_changes(&self) -> &RankChangeMap {
        &self.rank_changes
    }

    pub fn rank_change(&self, id: &str) -> RankChange {
        self.rank_changes
            .get(id)
            .copied()
            .unwrap_or(RankChange::Unchanged)
    }

    /// Failure of the most recent ranking pass, if it failed.
    pub fn last_error(&self) -> Option<&RankingError> {
        self.last_error.as_ref()
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn capital(&self) -> f64 {
        self.capital
    }

    pub fn acquired(&self) -> &BTreeSet<String> {
        &self.acquired
    }

    pub fn is_acquired(&self, id: &str) -> bool {
        self.acquired.contains(id)
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SimulationStatus::Running
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Seconds until the next simulated year, while running.
    pub fn next_tick_in(&self) -> Option<f64> {
        self.scheduler.remaining_secs()
    }
}

fn check_unique_ids(dataset: &[CelestialObject]) -> Result<(), EngineError> {
    match duplicate_id(dataset) {
        Some(id) => {
            log::warn!("Rejected dataset: id {} appears more than once", id);
            Err(EngineError::DuplicateObject(id.to_string()))
        }
        None => Ok(()),
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rados_logic::celestial::{Galaxy, ObjectCommon};
    use rados_logic::random::ScriptedRandom;

    fn galaxy(id: &str, value: f64) -> CelestialObject {
        CelestialObject::Galaxy(Galaxy {
            common: ObjectCommon {
                id: id.into(),
                name: format!("Galaxy {id}"),
                economic_value: Some(value),
                variability: Some(0.1),
                ..Default::default()
            },
            total_l_lsun: Some(1e10),
        })
    }

    #[test]
    fn test_engine_creation() {
        let engine = SimulationEngine::new();
        assert_eq!(engine.year(), 2800);
        assert_eq!(engine.capital(), 1_000_000.0);
        assert_eq!(engine.status(), SimulationStatus::Paused);
        assert!(engine.rankings().is_empty());
        assert!(engine.rankings_timestamp().is_none());
    }

    #[test]
    fn test_seed_dataset_ranks() {
        let mut engine = SimulationEngine::new();
        engine.load_seed_dataset().unwrap();
        assert_eq!(engine.rankings().len(), 3);
        assert_eq!(engine.rankings()[0].name, "Messier 81 (M81)");
        assert!(engine.rankings().iter().all(|r| r.coordinates.is_some()));
        assert!(engine.rankings_timestamp().is_some());
    }

    #[test]
    fn test_update_runs_ticks_only_while_running() {
        let mut engine = SimulationEngine::new()
            .with_dataset(vec![galaxy("a", 1e12)])
            .unwrap()
            .with_rng(ScriptedRandom::new([]));
        assert_eq!(engine.update(10.0), 0);
        assert_eq!(engine.year(), 2800);

        engine.start();
        assert_eq!(engine.update(1.0), 0);
        assert_eq!(engine.update(1.0), 1);
        assert_eq!(engine.year(), 2801);
        assert_eq!(engine.update(4.0), 2);
        assert_eq!(engine.year(), 2803);
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let mut engine = SimulationEngine::new().with_rng(ScriptedRandom::new([]));
        engine.start();
        engine.update(1.9);
        engine.stop();
        assert_eq!(engine.next_tick_in(), None);
        assert_eq!(engine.update(0.5), 0);
        engine.start();
        assert_eq!(engine.update(0.5), 0);
        assert_eq!(engine.year(), 2800);
    }

    #[test]
    fn test_toggle() {
        let mut engine = SimulationEngine::new();
        assert_eq!(engine.toggle(), SimulationStatus::Running);
        assert!(engine.is_running());
        assert_eq!(engine.toggle(), SimulationStatus::Paused);
    }

    #[test]
    fn test_acquire_unknown_object() {
        let mut engine = SimulationEngine::new().with_dataset(vec![galaxy("a", 1e12)]).unwrap();
        assert!(matches!(
            engine.acquire("ghost"),
            Err(EngineError::UnknownObject(_))
        ));
        assert!(engine.acquire("a").unwrap());
        assert!(!engine.acquire("a").unwrap());
        assert!(engine.rankings()[0].is_acquired);
    }

    #[test]
    fn test_add_object_rejects_duplicates() {
        let mut engine = SimulationEngine::new().with_dataset(vec![galaxy("a", 1e12)]).unwrap();
        engine.add_object(galaxy("b", 1e15)).unwrap();
        assert_eq!(engine.rankings().len(), 2);
        assert_eq!(engine.rankings()[0].id, "b");
        assert_eq!(engine.rank_change("b"), RankChange::Unchanged);
        assert_eq!(engine.rank_change("a"), RankChange::Down);
        assert!(matches!(
            engine.add_object(galaxy("a", 1.0)),
            Err(EngineError::DuplicateObject(_))
        ));
    }

    #[test]
    fn test_weight_update_returns_normalized_vector() {
        let mut engine = SimulationEngine::new().with_dataset(vec![galaxy("a", 1e12)]).unwrap();
        let before = engine.rankings()[0].composite;
        let w = engine.set_galaxy_weight(GalaxyWeight::Economic, 0.9);
        assert!((w.w_eai + w.w_mfi + w.w_eci - 1.0).abs() < 1e-9);
        assert_ne!(engine.rankings()[0].composite, before);

        engine.reset_weights();
        assert_eq!(*engine.weights(), WeightsConfig::default());
        assert_eq!(engine.rankings()[0].composite, before);
    }

    #[test]
    fn test_starmap_positions_are_stable() {
        let mut engine = SimulationEngine::new().with_dataset(vec![galaxy("a", 1e12)]).unwrap();
        let position = engine.rankings()[0].coordinates;
        engine.set_galaxy_weight(GalaxyWeight::Energy, 0.1);
        assert_eq!(engine.rankings()[0].coordinates, position);
    }

    #[test]
    fn test_ranked_view_filters_and_sorts() {
        let mut engine = SimulationEngine::new()
            .with_dataset(vec![galaxy("a", 1e12), galaxy("b", 1e15), galaxy("c", 1e10)])
            .unwrap();
        let ids = |v: Vec<ScoredResult>| v.into_iter().map(|r| r.id).collect::<Vec<_>>();
        assert_eq!(ids(engine.ranked_view(ObjectKind::Galaxy)), ["b", "a", "c"]);

        engine.toggle_sort(ObjectKind::Galaxy, SortKey::Composite);
        assert_eq!(ids(engine.ranked_view(ObjectKind::Galaxy)), ["c", "a", "b"]);

        engine.view.search_query = "galaxy a".into();
        assert_eq!(ids(engine.ranked_view(ObjectKind::Galaxy)), ["a"]);
        assert!(engine.ranked_view(ObjectKind::StarSystem).is_empty());
    }

    #[test]
    fn test_repeated_ids_are_rejected() {
        let err = SimulationEngine::new()
            .with_dataset(vec![galaxy("dup", 1e15), galaxy("dup", 1e10)])
            .err();
        assert!(matches!(err, Some(EngineError::DuplicateObject(id)) if id == "dup"));

        let mut engine = SimulationEngine::new().with_dataset(vec![galaxy("a", 1e12)]).unwrap();
        assert!(matches!(
            engine.set_dataset(vec![galaxy("b", 1e12), galaxy("b", 1e13)]),
            Err(EngineError::DuplicateObject(_))
        ));
        assert_eq!(engine.dataset().len(), 1);
        assert_eq!(engine.rankings()[0].id, "a");
        assert_eq!(engine.rank_changes().len(), engine.rankings().len());
    }

    #[test]
    fn test_positions_follow_the_dataset() {
        let mut engine = SimulationEngine::new()
            .with_dataset(vec![galaxy("a", 1e12), galaxy("b", 1e13)])
            .unwrap();
        assert_eq!(engine.positions.len(), 2);

        engine.set_dataset(vec![galaxy("c", 1e12)]).unwrap();
        assert_eq!(engine.positions.len(), 1);
        assert!(engine.positions.contains_key("c"));
    }

    #[test]
    fn test_update_caps_catch_up_ticks() {
        let config = SimulationConfig {
            max_catch_up_ticks: 3,
            ..Default::default()
        };
        let mut engine = SimulationEngine::with_config(config).with_rng(ScriptedRandom::new([]));
        engine.start();
        assert_eq!(engine.update(1e12), 3);
        assert_eq!(engine.year(), 2803);
        assert_eq!(engine.update(2.0), 1);
    }

    #[test]
    fn test_compared_follows_comparison_order() {
        let mut engine = SimulationEngine::new()
            .with_dataset(vec![galaxy("a", 1e12), galaxy("b", 1e15)])
            .unwrap();
        assert_eq!(engine.toggle_compare("a"), ComparisonToggle::Added);
        assert_eq!(engine.toggle_compare("b"), ComparisonToggle::Added);
        let ids: Vec<&str> = engine.compared().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);

        assert_eq!(engine.toggle_compare("a"), ComparisonToggle::Removed);
        assert_eq!(engine.compared().len(), 1);
    }

    #[test]
    fn test_snapshots_survive_a_disk_roundtrip() {
        let mut engine = SimulationEngine::new().with_dataset(vec![galaxy("a", 1e12)]).unwrap();
        let id = engine.save_snapshot("first");
        let mut buffer = Vec::new();
        engine.snapshots().write_to(&mut buffer).unwrap();

        let mut fresh = SimulationEngine::new();
        fresh.set_snapshots(SnapshotStore::read_from(&buffer[..]).unwrap());
        fresh.load_snapshot(id).unwrap();
        assert_eq!(fresh.dataset(), engine.dataset());
    }

    #[test]
    fn test_overview_prompt_names_acquired_assets() {
        let mut engine = SimulationEngine::new().with_dataset(vec![galaxy("a", 1e12)]).unwrap();
        engine.acquire("a").unwrap();
        assert!(engine.overview_prompt().contains("Acquired Assets: Galaxy a"));
    }
}

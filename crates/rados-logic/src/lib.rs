//! Pure scoring and simulation logic for RADOS.
//!
//! This crate contains everything that can be computed from plain data:
//! the sub-index functions, composite scoring, ranking, weight
//! normalization, rank-change detection and the per-year simulation
//! transition. Nothing here touches storage or schedules work on a timer;
//! randomness is injected through [`random::RandomSource`] so every
//! transition can be replayed exactly in tests.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`celestial`] | Star systems, galaxies and planets (the raw dataset) |
//! | [`config`] | Simulation tuning: cadence, start year, event odds |
//! | [`indices`] | EAI / HPI / MFI / ECI sub-indices and the threat modifier |
//! | [`interventions`] | Paid invest / defend / explore actions on one object |
//! | [`random`] | Injected random source and a scripted fake |
//! | [`rank_change`] | Up / down / unchanged classification between passes |
//! | [`ranking`] | Whole-dataset scoring pass, sorted and timestamped |
//! | [`scoring`] | Per-object composite score (`ERVINREMUS`) |
//! | [`simulation`] | Year-advance transition and the capped event log |
//! | [`views`] | Sorting, name search, comparison list, starmap placement |
//! | [`weights`] | Weight vectors and the proportional renormalizer |

pub mod celestial;
pub mod config;
pub mod indices;
pub mod interventions;
pub mod random;
pub mod rank_change;
pub mod ranking;
pub mod scoring;
pub mod simulation;
pub mod views;
pub mod weights;

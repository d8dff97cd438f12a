//! # Playlist Transformation Engine
//!
//! This module holds the logic that decides which tracks of a playlist
//! survive or move. It never talks HTTP itself: all remote access goes
//! through the [`RemoteSource`] trait, implemented for the Spotify Web API by
//! [`crate::spotify::SpotifyClient`] and by in-memory fakes in the tests.
//!
//! ## Building Blocks
//!
//! - [`Pager`] - drains a cursor-based listing page by page
//! - [`apply_in_batches`] - issues one mutation per chunk of at most
//!   [`MAX_BATCH_SIZE`] track ids, in order
//! - [`compare_tracks`] / [`sort_tracks`] - multi-rule stable sort
//! - [`DateWindow`] / [`purge_candidates`] - release-date classification
//!
//! ## Operations
//!
//! - [`sort_playlist`] - rewrites a playlist ordered by audio-feature rules
//! - [`purge_playlist`] - removes tracks released outside a date window
//! - [`clone_playlist`] - copies a playlist into a new one
//! - [`sweep`] - removes one fixed track from every playlist and the library
//! - [`find_playlist_by_name`] - resolves a playlist of the user by name
//!
//! ## Error Handling
//!
//! Every operation returns [`EngineError`]. Validation errors are raised
//! before the first remote call. Remote errors abort the operation where
//! they happen, nothing is retried and applied mutations are not rolled back.
//!
//! ## Concurrency
//!
//! Calls are issued strictly one after another, each awaited before the
//! next one starts. The engine keeps no state between operations and does
//! not coordinate concurrent operations on the same playlist.

mod batch;
mod clone;
mod error;
mod lookup;
mod pagination;
mod purge;
mod rules;
mod sort;
mod source;
mod sweep;

pub use batch::{MAX_BATCH_SIZE, add_in_batches, apply_in_batches, remove_in_batches};
pub use clone::{clone_name, clone_playlist};
pub use error::EngineError;
pub use lookup::{find_playlist_by_name, user_playlists};
pub use pagination::Pager;
pub use purge::{DateWindow, is_outside, purge_candidates, purge_playlist};
pub use rules::{Feature, SortRule, ValidRule, validate_rules};
pub use sort::{attach_features, compare_tracks, sort_playlist, sort_tracks, sorted_track_ids};
pub use source::{Page, RemoteSource};
pub use sweep::{SWEEP_TRACK_ID, sweep, sweep_track};

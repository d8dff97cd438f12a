use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{engine::EngineError, types::TrackComplete, utils};

/// A sort rule as requested by the caller.
///
/// The feature name is kept as given, it is checked against [`Feature`] by
/// [`validate_rules`] before a playlist is touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortRule {
    pub feature_name: String,
    #[serde(default)]
    pub descending: bool,
}

impl SortRule {
    pub fn new(feature_name: impl Into<String>, descending: bool) -> Self {
        Self {
            feature_name: feature_name.into(),
            descending,
        }
    }

    /// Same rule with the direction flipped.
    pub fn reversed(&self) -> Self {
        Self {
            feature_name: self.feature_name.clone(),
            descending: !self.descending,
        }
    }
}

/// Track attributes a playlist can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Danceability,
    Energy,
    Key,
    Loudness,
    Mode,
    Speechiness,
    Acousticness,
    Instrumentalness,
    Liveness,
    Valence,
    Tempo,
    Popularity,
    DurationMs,
    ReleaseDate,
    Explicit,
}

impl Feature {
    pub const ALL: [Feature; 15] = [
        Feature::Danceability,
        Feature::Energy,
        Feature::Key,
        Feature::Loudness,
        Feature::Mode,
        Feature::Speechiness,
        Feature::Acousticness,
        Feature::Instrumentalness,
        Feature::Liveness,
        Feature::Valence,
        Feature::Tempo,
        Feature::Popularity,
        Feature::DurationMs,
        Feature::ReleaseDate,
        Feature::Explicit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Feature::Danceability => "danceability",
            Feature::Energy => "energy",
            Feature::Key => "key",
            Feature::Loudness => "loudness",
            Feature::Mode => "mode",
            Feature::Speechiness => "speechiness",
            Feature::Acousticness => "acousticness",
            Feature::Instrumentalness => "instrumentalness",
            Feature::Liveness => "liveness",
            Feature::Valence => "valence",
            Feature::Tempo => "tempo",
            Feature::Popularity => "popularity",
            Feature::DurationMs => "duration_ms",
            Feature::ReleaseDate => "release_date",
            Feature::Explicit => "explicit",
        }
    }

    /// Raw scalar value of this feature for a track.
    ///
    /// `release_date` counts days since 1970-01-01, an unreadable date counts
    /// as 0001-01-01. `explicit` is 1 or 0.
    pub fn value(&self, track: &TrackComplete) -> f64 {
        let features = &track.features;
        match self {
            Feature::Danceability => features.danceability,
            Feature::Energy => features.energy,
            Feature::Key => features.key as f64,
            Feature::Loudness => features.loudness,
            Feature::Mode => features.mode as f64,
            Feature::Speechiness => features.speechiness,
            Feature::Acousticness => features.acousticness,
            Feature::Instrumentalness => features.instrumentalness,
            Feature::Liveness => features.liveness,
            Feature::Valence => features.valence,
            Feature::Tempo => features.tempo,
            Feature::Popularity => track.track.popularity as f64,
            Feature::DurationMs => features.duration_ms as f64,
            Feature::ReleaseDate => {
                let album = &track.track.album;
                utils::parse_release_date(&album.release_date, &album.release_date_precision)
                    .map(utils::days_since_epoch)
                    .unwrap_or(utils::EARLIEST_DAY) as f64
            }
            Feature::Explicit => {
                if track.track.explicit {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

impl FromStr for Feature {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| EngineError::InvalidRule(s.to_string()))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sort rule whose feature name has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRule {
    pub feature: Feature,
    pub descending: bool,
}

impl ValidRule {
    /// Feature value, negated for descending rules.
    pub fn signed_value(&self, track: &TrackComplete) -> f64 {
        let value = self.feature.value(track);
        if self.descending { -value } else { value }
    }
}

/// Resolves every rule, failing on the first unknown feature name.
pub fn validate_rules(rules: &[SortRule]) -> Result<Vec<ValidRule>, EngineError> {
    rules
        .iter()
        .map(|rule| -> Result<ValidRule, EngineError> {
            Ok(ValidRule {
                feature: rule.feature_name.parse()?,
                descending: rule.descending,
            })
        })
        .collect()
}

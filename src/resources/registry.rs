//! Breed animation registry resource.
//!
//! Maps a `{breed}/{variant}` identifier to the sprite-sheet geometry used for
//! each activity. Geometry is declared as per-activity base defaults plus an
//! ordered list of breed rule groups; the first group containing the variant
//! wins and may override individual fields. A variant matched by no group
//! silently receives the base defaults, so an unknown breed still animates.
//!
//! The built-in table covers the stock sheets. Registries can also be loaded
//! from a JSON file with [`BreedRegistry::load_from_file`], which makes adding
//! a breed a data change rather than a code change.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// A named animation mode of the pet.
///
/// The server reports the current activity as an uppercase string; use
/// [`Activity::from_name`] to map it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Standing,
    Running,
}

impl Activity {
    /// Parse a server-side activity name ("STANDING", "RUNNING").
    ///
    /// Unknown names are an explicit error; callers decide whether to skip
    /// the update or surface it.
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name {
            "STANDING" => Ok(Activity::Standing),
            "RUNNING" => Ok(Activity::Running),
            other => Err(format!("no such activity: '{}'", other)),
        }
    }

    /// Server-side name of this activity.
    pub fn name(&self) -> &'static str {
        match self {
            Activity::Standing => "STANDING",
            Activity::Running => "RUNNING",
        }
    }
}

/// Resolved sheet geometry for one (activity, variant) pair.
///
/// `max_frame` is the highest frame index, so a cycle has `max_frame + 1`
/// frames. `sheet_row` is the vertical cell index into the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationProfile {
    pub frame_width: f32,
    pub max_frame: usize,
    pub sheet_row: usize,
}

/// One rule group: a set of variants and the fields they override.
///
/// Fields left as `None` keep the activity's base default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedRule {
    pub variants: Vec<String>,
    #[serde(default)]
    pub frame_width: Option<f32>,
    #[serde(default)]
    pub max_frame: Option<usize>,
}

/// Per-activity sheet layout: base defaults plus ordered breed rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySheet {
    pub sheet_row: usize,
    pub frame_width: f32,
    pub max_frame: usize,
    #[serde(default)]
    pub rules: Vec<BreedRule>,
}

impl ActivitySheet {
    fn resolve(&self, variant: &str) -> AnimationProfile {
        let mut profile = AnimationProfile {
            frame_width: self.frame_width,
            max_frame: self.max_frame,
            sheet_row: self.sheet_row,
        };
        // First matching group wins; later groups never re-override.
        for rule in &self.rules {
            if rule.variants.iter().any(|v| v == variant) {
                if let Some(width) = rule.frame_width {
                    profile.frame_width = width;
                }
                if let Some(max) = rule.max_frame {
                    profile.max_frame = max;
                }
                break;
            }
        }
        profile
    }
}

/// Central registry of per-activity sheet geometry, keyed by breed variant.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct BreedRegistry {
    pub standing: ActivitySheet,
    pub running: ActivitySheet,
}

impl Default for BreedRegistry {
    fn default() -> Self {
        Self {
            standing: ActivitySheet {
                sheet_row: 9,
                frame_width: 64.0,
                max_frame: 3,
                rules: vec![
                    BreedRule {
                        variants: vec![
                            "husky/one".into(),
                            "husky/two".into(),
                            "husky/three".into(),
                        ],
                        frame_width: Some(64.0),
                        max_frame: Some(4),
                    },
                    BreedRule {
                        variants: vec![
                            "afghan/one".into(),
                            "afghan/two".into(),
                            "afghan/three".into(),
                        ],
                        frame_width: Some(64.0),
                        max_frame: Some(2),
                    },
                ],
            },
            running: ActivitySheet {
                sheet_row: 6,
                frame_width: 76.0,
                max_frame: 7,
                rules: vec![BreedRule {
                    variants: vec!["husky/one".into(), "husky/two".into()],
                    frame_width: Some(74.0),
                    max_frame: None,
                }],
            },
        }
    }
}

impl BreedRegistry {
    fn sheet(&self, activity: Activity) -> &ActivitySheet {
        match activity {
            Activity::Standing => &self.standing,
            Activity::Running => &self.running,
        }
    }

    /// Resolve the sheet geometry for an (activity, variant) pair.
    ///
    /// Never fails: unmatched variants fall back to the activity's defaults.
    pub fn profile_for(&self, activity: Activity, variant: &str) -> AnimationProfile {
        self.sheet(activity).resolve(variant)
    }

    /// Load a registry from a JSON file.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read registry {}: {}", path.display(), e))?;
        serde_json::from_str(&text)
            .map_err(|e| format!("failed to parse registry {}: {}", path.display(), e))
    }
}

//! Query-string codec for the shareable `(theme, scene)` selection.
//!
//! The query string is the only external surface the prototype has.
//! Parsing never fails: unrecognized keys are skipped and values that are
//! not an exact, case-sensitive member of the relevant enumeration fall
//! back to that axis's default. Serialization always emits both keys, so a
//! URL written once is self-healing for sharing and bookmarking.

use serde::Serialize;

use crate::session::Scene;
use crate::theme::Theme;

pub const THEME_PARAM: &str = "theme";
pub const SCENE_PARAM: &str = "scene";

/// The pair of selections mirrored into the address bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct Selection {
    pub theme: Theme,
    pub scene: Scene,
}

impl Selection {
    /// Parse a query string, with or without the leading `?`. The last
    /// recognized occurrence of a key wins.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut selection = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                THEME_PARAM => {
                    if let Ok(theme) = value.parse() {
                        selection.theme = theme;
                    }
                }
                SCENE_PARAM => {
                    if let Ok(scene) = value.parse() {
                        selection.scene = scene;
                    }
                }
                _ => {}
            }
        }

        selection
    }

    /// Serialize to `theme=X&scene=Y`, exactly both keys, no `?`.
    #[must_use]
    pub fn to_query(&self) -> String {
        format!(
            "{THEME_PARAM}={}&{SCENE_PARAM}={}",
            self.theme.as_str(),
            self.scene.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_pair() {
        for theme in Theme::ALL {
            for scene in Scene::ALL {
                let selection = Selection { theme, scene };
                assert_eq!(Selection::from_query(&selection.to_query()), selection);
            }
        }
    }

    #[test]
    fn bogus_theme_falls_back_without_error() {
        let selection = Selection::from_query("?theme=BOGUS&scene=INVENTORY");
        assert_eq!(selection.theme, Theme::Cursed);
        assert_eq!(selection.scene, Scene::Inventory);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let selection = Selection::from_query("theme=cyber&scene=battle");
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn unrecognized_and_malformed_pairs_are_skipped() {
        let selection = Selection::from_query("?debug&x=1&scene=COMBINED&=CYBER&theme");
        assert_eq!(selection.theme, Theme::Cursed);
        assert_eq!(selection.scene, Scene::Combined);
    }

    #[test]
    fn empty_and_missing_queries_yield_defaults() {
        assert_eq!(Selection::from_query(""), Selection::default());
        assert_eq!(Selection::from_query("?"), Selection::default());
        assert_eq!(
            Selection::from_query("scene=INFO").scene,
            Scene::Info
        );
    }

    #[test]
    fn last_recognized_value_wins() {
        let selection = Selection::from_query("theme=CYBER&theme=ARCTIC");
        assert_eq!(selection.theme, Theme::Arctic);
    }
}

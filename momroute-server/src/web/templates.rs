//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::InaccessibleStations;
use crate::scoring::{ScoredItinerary, preferred_of};

use super::dto::broken_stations;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the route form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub default_max_walk: u32,
    pub outage_count: usize,
    /// "14:05 UTC", when the outage feed was last read
    pub outages_as_of: Option<String>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Ranked route list fragment.
#[derive(Template)]
#[template(path = "route_results.html")]
pub struct RouteResultsTemplate {
    pub routes: Vec<RouteView>,
    pub outage_count: usize,
}

impl RouteResultsTemplate {
    /// Build the fragment from a ranking. Only the single preferred route
    /// is badged, matching `RankedRoutesResponse::preferred`.
    pub fn from_ranked(ranked: &[ScoredItinerary<'_>], inaccessible: &InaccessibleStations) -> Self {
        let preferred = preferred_of(ranked).map(|s| s.index);

        Self {
            routes: ranked
                .iter()
                .map(|s| RouteView::from_scored(s, inaccessible, Some(s.index) == preferred))
                .collect(),
            outage_count: inaccessible.len(),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Route view model for templates.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub summary: String,
    pub duration_display: String,
    pub transfers: usize,
    pub walk_display: String,
    pub lines: Vec<String>,
    pub broken_stations: Vec<String>,
    /// The one route shown as "MomRoute"
    pub is_preferred: bool,
}

impl RouteView {
    /// Create from a scored itinerary.
    pub fn from_scored(
        scored: &ScoredItinerary<'_>,
        inaccessible: &InaccessibleStations,
        is_preferred: bool,
    ) -> Self {
        let itinerary = scored.itinerary;

        let duration_display = itinerary
            .first_leg()
            .and_then(|l| l.duration_text.clone())
            .or_else(|| {
                itinerary
                    .total_duration_secs()
                    .map(|secs| format!("{} min", (secs as f64 / 60.0).round()))
            })
            .unwrap_or_else(|| "Unknown duration".to_string());

        let lines = itinerary
            .steps()
            .iter()
            .filter_map(|s| s.line.clone())
            .collect();

        Self {
            summary: itinerary.summary.clone(),
            duration_display,
            transfers: scored.transfer_count,
            walk_display: format!("{} min walk", scored.walk_minutes.round()),
            lines,
            broken_stations: broken_stations(scored, inaccessible),
            is_preferred,
        }
    }

    /// "1 transfer" / "2 transfers" / "Direct".
    pub fn transfers_display(&self) -> String {
        match self.transfers {
            0 => "Direct".to_string(),
            1 => "1 transfer".to_string(),
            n => format!("{n} transfers"),
        }
    }
}

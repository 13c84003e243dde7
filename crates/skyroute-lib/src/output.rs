use std::fmt::Write;

use serde::Serialize;

use crate::airports::{AirportCatalog, AirportCode};
use crate::cost::CostCache;
use crate::error::{Error, Result};
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Column layout of code, name and country.
    PlainText,
    /// Markdown bullet list.
    RichText,
}

/// Airport visited by a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub code: AirportCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Cost of the flight arriving at this airport; absent for the origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_cost: Option<f64>,
    /// Total cost spent on arrival.
    pub cumulative_cost: f64,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }

    fn display_country(&self) -> &str {
        self.country.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub hops: usize,
    pub total_cost: f64,
    pub rate_per_km: f64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved airport details
    /// and per-flight costs.
    pub fn from_plan(
        airports: &AirportCatalog,
        plan: &RoutePlan,
        costs: &mut CostCache<'_>,
    ) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut cumulative = 0.0;
        let mut previous: Option<&AirportCode> = None;

        for (index, code) in plan.steps.iter().enumerate() {
            let leg_cost = match previous {
                Some(from) => Some(costs.get_cost(from, code)?),
                None => None,
            };
            cumulative += leg_cost.unwrap_or(0.0);

            let airport = airports.get(code.as_str());
            steps.push(RouteStep {
                index,
                code: code.clone(),
                name: airport.map(|a| a.name.clone()),
                country: airport.map(|a| a.country.clone()),
                leg_cost,
                cumulative_cost: cumulative,
            });
            previous = Some(code);
        }

        Ok(Self {
            origin: plan.origin.clone(),
            destination: plan.destination.clone(),
            hops: plan.hop_count(),
            total_cost: plan.cost,
            rate_per_km: costs.config().rate_per_km(),
            steps,
        })
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "The cheapest route from {} to {} ({} flights):",
            self.origin, self.destination, self.hops
        );
        let _ = writeln!(buffer, "{:<6}{:>10}  Airport name & country", "Code", "Leg cost");
        for step in &self.steps {
            let leg = step
                .leg_cost
                .map(|cost| format!("{cost:.2}"))
                .unwrap_or_else(|| "-".to_string());
            let _ = writeln!(
                buffer,
                "{:<6}{:>10}  {} - {}",
                step.code,
                leg,
                step.display_name(),
                step.display_country()
            );
        }
        let _ = writeln!(buffer, "Total cost: {:.2}", self.total_cost);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} → {}_ ({} flights, total `{:.2}`)",
            self.origin, self.destination, self.hops, self.total_cost
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** `{}` ({}) {:.2}",
                step.index,
                step.display_name(),
                step.code,
                step.display_country(),
                step.cumulative_cost
            );
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airports::Airport;

    fn catalog() -> AirportCatalog {
        [
            ("VLC", "Valencia Airport", "Spain", 39.49, -0.48),
            ("MAD", "Barajas", "Spain", 40.47, -3.56),
            ("PDX", "Portland Intl", "United States", 45.59, -122.60),
        ]
        .into_iter()
        .map(|(code, name, country, latitude, longitude)| Airport {
            code: AirportCode::new(code),
            name: name.to_string(),
            country: country.to_string(),
            latitude,
            longitude,
        })
        .collect()
    }

    fn plan(costs: &mut CostCache<'_>) -> RoutePlan {
        let steps: Vec<AirportCode> = ["VLC", "MAD", "PDX"].into_iter().map(AirportCode::new).collect();
        let cost = costs.get_cost(&steps[0], &steps[1]).unwrap()
            + costs.get_cost(&steps[1], &steps[2]).unwrap();
        RoutePlan {
            origin: steps[0].clone(),
            destination: steps[2].clone(),
            cost,
            steps,
        }
    }

    #[test]
    fn summary_tracks_leg_and_cumulative_costs() {
        let airports = catalog();
        let mut costs = CostCache::new(&airports);
        let plan = plan(&mut costs);
        let summary = RouteSummary::from_plan(&airports, &plan, &mut costs).expect("summary");

        assert_eq!(summary.hops, 2);
        assert_eq!(summary.steps[0].leg_cost, None);
        assert_eq!(summary.steps[0].cumulative_cost, 0.0);
        let last = summary.steps.last().expect("steps");
        assert!((last.cumulative_cost - plan.cost).abs() < 1e-9);
        assert_eq!(last.country.as_deref(), Some("United States"));
    }

    #[test]
    fn plain_text_lists_every_airport() {
        let airports = catalog();
        let mut costs = CostCache::new(&airports);
        let plan = plan(&mut costs);
        let text = RouteSummary::from_plan(&airports, &plan, &mut costs)
            .expect("summary")
            .render(RouteRenderMode::PlainText);

        assert!(text.starts_with("The cheapest route from VLC to PDX (2 flights):"));
        assert!(text.contains("Valencia Airport - Spain"));
        assert!(text.contains("Portland Intl - United States"));
        assert!(text.contains(&format!("Total cost: {:.2}", plan.cost)));
    }

    #[test]
    fn empty_plan_is_rejected() {
        let airports = catalog();
        let mut costs = CostCache::new(&airports);
        let plan = RoutePlan {
            origin: AirportCode::new("VLC"),
            destination: AirportCode::new("PDX"),
            cost: 0.0,
            steps: Vec::new(),
        };
        assert!(matches!(
            RouteSummary::from_plan(&airports, &plan, &mut costs),
            Err(Error::EmptyRoutePlan)
        ));
    }

    #[test]
    fn serializes_without_missing_fields() {
        let airports = catalog();
        let mut costs = CostCache::new(&airports);
        let plan = RoutePlan {
            origin: AirportCode::new("VLC"),
            destination: AirportCode::new("VLC"),
            cost: 0.0,
            steps: vec![AirportCode::new("VLC")],
        };
        let summary = RouteSummary::from_plan(&airports, &plan, &mut costs).expect("summary");
        let json = serde_json::to_value(&summary).expect("serialize");

        assert_eq!(json["origin"], "VLC");
        assert_eq!(json["steps"][0]["code"], "VLC");
        assert!(json["steps"][0].get("leg_cost").is_none());
    }
}

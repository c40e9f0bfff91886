//! Ethics audit trail.
//!
//! A read-only view over recorded decisions. Nothing is created or mutated
//! at runtime; the trail is presented as seeded.

use crate::seed;
use crate::types::{CovenantError, EthicsDecision, Terrain};

/// Read-only ethics audit trail.
#[derive(Debug, Clone)]
pub struct EthicsAuditTrail {
    /// Decisions, newest first
    decisions: Vec<EthicsDecision>,
}

impl EthicsAuditTrail {
    /// Build a trail from decisions in any order.
    pub fn new(mut decisions: Vec<EthicsDecision>) -> Self {
        decisions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self { decisions }
    }

    /// The trail shipped with the dashboard.
    pub fn seeded() -> Self {
        Self::new(seed::ethics_decisions())
    }

    /// All decisions, newest first.
    pub fn decisions(&self) -> &[EthicsDecision] {
        &self.decisions
    }

    /// Get a decision by ID.
    pub fn get(&self, id: &str) -> Result<&EthicsDecision, CovenantError> {
        self.decisions
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| CovenantError::DecisionNotFound(id.to_string()))
    }

    /// Decisions taken in a terrain.
    pub fn by_context(&self, terrain: Terrain) -> Vec<&EthicsDecision> {
        self.decisions.iter().filter(|d| d.context == terrain).collect()
    }

    /// Approved decisions.
    pub fn approved(&self) -> Vec<&EthicsDecision> {
        self.decisions.iter().filter(|d| d.approved).collect()
    }

    /// Decisions overridden by an outside authority.
    pub fn overridden(&self) -> Vec<&EthicsDecision> {
        self.decisions.iter().filter(|d| d.is_overridden()).collect()
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}

impl Default for EthicsAuditTrail {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImpactArea, ImpactLevel};

    #[test]
    fn test_newest_first() {
        let trail = EthicsAuditTrail::seeded();
        let ids: Vec<&str> = trail.decisions().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_queries() {
        let trail = EthicsAuditTrail::seeded();

        assert_eq!(trail.by_context(Terrain::Desert).len(), 2);
        assert_eq!(trail.by_context(Terrain::Borderland).len(), 0);
        assert_eq!(trail.approved().len(), 2);

        let overridden = trail.overridden();
        assert_eq!(overridden.len(), 1);
        assert_eq!(
            overridden[0].override_authority.as_deref(),
            Some("Elder Council of Sinai")
        );
    }

    #[test]
    fn test_impact_levels() {
        let trail = EthicsAuditTrail::seeded();
        let sensors = trail.get("3").unwrap();

        assert_eq!(sensors.impact_level(ImpactArea::Water), ImpactLevel::High);
        assert_eq!(sensors.impact_level(ImpactArea::Spirit), ImpactLevel::Moderate);
        assert_eq!(sensors.impact_level(ImpactArea::Soil), ImpactLevel::Low);
    }

    #[test]
    fn test_missing_decision() {
        let trail = EthicsAuditTrail::seeded();
        assert_eq!(
            trail.get("99").unwrap_err(),
            CovenantError::DecisionNotFound("99".to_string())
        );
    }
}

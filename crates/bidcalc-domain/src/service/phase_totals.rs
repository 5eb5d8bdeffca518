//! Phase aggregation and trip counting

use serde::{Deserialize, Serialize};

use crate::model::{EquipmentType, Phase};

/// Delivery capacity of one truck trip, in structures
pub const DELIVERY_BATCH_SIZE: f64 = 30.0;

/// Sums over every phase of a rental plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseTotals {
    pub total_personnel: f64,
    pub total_days: f64,
    pub total_trucks: f64,
    pub total_trips: f64,
    pub total_additional_rated_hours: f64,
    pub total_additional_non_rated_hours: f64,
}

/// Structures delivered by truck in one phase (type III barricades, H-stands, posts)
pub fn delivery_quantity(phase: &Phase) -> f64 {
    EquipmentType::DELIVERY_BATCHED
        .iter()
        .map(|&eq| phase.quantity(eq))
        .sum()
}

/// Delivery trips needed for `quantity` structures; partial loads count as a full trip
pub fn delivery_trips(quantity: f64) -> f64 {
    if quantity <= 0.0 {
        return 0.0;
    }
    (quantity / DELIVERY_BATCH_SIZE).ceil()
}

/// Round trips for one phase: maintenance trips plus delivery trips counted both ways
pub fn trips_per_phase(phase: &Phase) -> f64 {
    phase.maintenance_trips + delivery_trips(delivery_quantity(phase)) * 2.0
}

pub fn phase_totals(phases: &[Phase]) -> PhaseTotals {
    let mut totals = PhaseTotals::default();
    let mut delivered = 0.0;

    for phase in phases {
        totals.total_personnel += phase.personnel;
        totals.total_days += phase.days;
        totals.total_trucks += phase.number_trucks;
        totals.total_additional_rated_hours += phase.additional_rated_hours;
        totals.total_additional_non_rated_hours += phase.additional_non_rated_hours;
        totals.total_trips += phase.maintenance_trips;
        delivered += delivery_quantity(phase);
    }

    totals.total_trips += delivery_trips(delivered);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(days: f64, four_foot: f64, h_stand: f64, post: f64, maintenance: f64) -> Phase {
        let mut p = Phase {
            days,
            personnel: 2.0,
            number_trucks: 1.0,
            maintenance_trips: maintenance,
            ..Default::default()
        };
        p.set_quantity(EquipmentType::FourFootTypeIII, four_foot);
        p.set_quantity(EquipmentType::HStand, h_stand);
        p.set_quantity(EquipmentType::Post, post);
        p
    }

    #[test]
    fn test_delivery_trips_round_up() {
        assert_eq!(delivery_trips(0.0), 0.0);
        assert_eq!(delivery_trips(1.0), 1.0);
        assert_eq!(delivery_trips(30.0), 1.0);
        assert_eq!(delivery_trips(31.0), 2.0);
    }

    #[test]
    fn test_trips_per_phase_counts_round_trip() {
        let p = phase(5.0, 20.0, 5.0, 6.0, 3.0);
        // 31 structures -> 2 loads, doubled, plus 3 maintenance
        assert_eq!(trips_per_phase(&p), 7.0);
    }

    #[test]
    fn test_phase_totals_sum_fields() {
        let mut a = phase(5.0, 10.0, 0.0, 0.0, 1.0);
        a.additional_rated_hours = 4.0;
        let mut b = phase(10.0, 25.0, 0.0, 0.0, 2.0);
        b.additional_non_rated_hours = 6.0;
        let totals = phase_totals(&[a, b]);

        assert_eq!(totals.total_personnel, 4.0);
        assert_eq!(totals.total_days, 15.0);
        assert_eq!(totals.total_trucks, 2.0);
        assert_eq!(totals.total_additional_rated_hours, 4.0);
        assert_eq!(totals.total_additional_non_rated_hours, 6.0);
        // ceil(35 / 30) + 3 maintenance
        assert_eq!(totals.total_trips, 5.0);
    }

    #[test]
    fn test_empty_phases() {
        assert_eq!(phase_totals(&[]), PhaseTotals::default());
    }

    #[test]
    fn test_unlisted_equipment_counts_as_zero() {
        let p = Phase {
            maintenance_trips: 2.0,
            ..Default::default()
        };
        assert_eq!(trips_per_phase(&p), 2.0);
    }
}

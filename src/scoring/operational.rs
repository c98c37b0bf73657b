use super::numeric::{capped, clamp_score};
use crate::types::inputs::{InventoryTurnover, OnlinePresence, OperationalInputs, SeasonalImpact};
use crate::types::scoring::Score;

const ONLINE_PRESENCE_CAP: f64 = 15.0;

fn inventory_bonus(turnover: InventoryTurnover) -> f64 {
    match turnover {
        InventoryTurnover::Weekly => 20.0,
        InventoryTurnover::Monthly => 10.0,
        InventoryTurnover::Quarterly => -10.0,
        InventoryTurnover::Slower => -20.0,
    }
}

fn seasonal_bonus(impact: SeasonalImpact) -> f64 {
    match impact {
        SeasonalImpact::None => 10.0,
        SeasonalImpact::Low => 5.0,
        SeasonalImpact::Medium => -5.0,
        SeasonalImpact::High => -10.0,
    }
}

fn footfall_bonus(footfall: u32) -> f64 {
    match footfall {
        3000.. => 10.0,
        1000..=2999 => 5.0,
        _ => 0.0,
    }
}

fn online_bonus(presence: OnlinePresence) -> f64 {
    let mut bonus = 0.0;
    if presence.social_media {
        bonus += 5.0;
    }
    if presence.website {
        bonus += 5.0;
    }
    if presence.ecommerce {
        bonus += 10.0;
    }
    capped(bonus, ONLINE_PRESENCE_CAP)
}

fn timings_bonus(hours: f64) -> f64 {
    if hours >= 12.0 {
        10.0
    } else if hours >= 10.0 {
        5.0
    } else {
        0.0
    }
}

pub fn operational_score(inputs: &OperationalInputs) -> Score {
    let mut score = 50.0;
    score += capped(inputs.digital_payments_adoption, 20.0);
    score += inventory_bonus(inputs.inventory_turnover);
    score += seasonal_bonus(inputs.seasonal_impact);
    score += footfall_bonus(inputs.average_monthly_footfall);
    score += online_bonus(inputs.online_presence);
    score += timings_bonus(inputs.shop_timings);
    clamp_score(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfilled_step_scores_seventy() {
        assert_eq!(operational_score(&OperationalInputs::default()), 70);
    }

    #[test]
    fn online_presence_is_capped_at_fifteen() {
        let all = OnlinePresence {
            social_media: true,
            website: true,
            ecommerce: true,
        };
        assert_eq!(online_bonus(all), 15.0);
        let ecommerce_only = OnlinePresence {
            ecommerce: true,
            ..OnlinePresence::default()
        };
        assert_eq!(online_bonus(ecommerce_only), 10.0);
    }

    #[test]
    fn footfall_and_timing_tiers() {
        assert_eq!(footfall_bonus(999), 0.0);
        assert_eq!(footfall_bonus(1000), 5.0);
        assert_eq!(footfall_bonus(3000), 10.0);
        assert_eq!(timings_bonus(9.5), 0.0);
        assert_eq!(timings_bonus(10.0), 5.0);
        assert_eq!(timings_bonus(12.0), 10.0);
    }

    #[test]
    fn nan_digital_payments_scores_zero() {
        let inputs = OperationalInputs {
            digital_payments_adoption: f64::NAN,
            inventory_turnover: InventoryTurnover::Weekly,
            ..OperationalInputs::default()
        };
        assert_eq!(operational_score(&inputs), 0);
    }

    #[test]
    fn slow_seasonal_store_loses_points() {
        let inputs = OperationalInputs {
            inventory_turnover: InventoryTurnover::Slower,
            seasonal_impact: SeasonalImpact::High,
            ..OperationalInputs::default()
        };
        // 50 - 20 - 10
        assert_eq!(operational_score(&inputs), 20);
    }

    #[test]
    fn busy_digital_store_clamps_to_hundred() {
        let inputs = OperationalInputs {
            digital_payments_adoption: 80.0,
            inventory_turnover: InventoryTurnover::Weekly,
            seasonal_impact: SeasonalImpact::Low,
            average_monthly_footfall: 4_500,
            shop_timings: 13.0,
            online_presence: OnlinePresence {
                social_media: true,
                website: false,
                ecommerce: false,
            },
        };
        // 50 + 20 + 20 + 5 + 10 + 5 + 10 = 120
        assert_eq!(operational_score(&inputs), 100);
    }
}

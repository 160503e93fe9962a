// ABOUTME: Breeding-season alert planning over the fish species catalogue
// ABOUTME: Selects species breeding in a month and drafts one alert per species
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use oceansafe_core::constants::messages::BREEDING_ALERT_SUFFIX;
use oceansafe_core::models::{AlertDraft, AlertType, FishSpecies};

/// Message shown for a species in breeding season
#[must_use]
pub fn breeding_message(species_name: &str) -> String {
    format!("{species_name} {BREEDING_ALERT_SUFFIX}")
}

/// Draft an alert for every species breeding in `month` (1-12)
#[must_use]
pub fn plan_breeding_alerts(species: &[FishSpecies], month: u32) -> Vec<AlertDraft> {
    species
        .iter()
        .filter(|s| s.breeds_in(month))
        .map(|s| AlertDraft {
            fish_species_id: s.id,
            alert_type: AlertType::BreedingSeason,
            message: breeding_message(&s.name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn species(name: &str, months: &[u32]) -> FishSpecies {
        FishSpecies {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            scientific_name: String::new(),
            status: "Vulnerable".to_owned(),
            breeding_months: months.to_vec(),
            description: String::new(),
            image_url: None,
            threat_level: "medium".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_only_breeding_species_are_planned() {
        let catalogue = vec![species("Atlantic Cod", &[1, 2, 3]), species("Red Snapper", &[6, 7])];
        let drafts = plan_breeding_alerts(&catalogue, 2);

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].fish_species_id, catalogue[0].id);
        assert_eq!(drafts[0].alert_type, AlertType::BreedingSeason);
        assert_eq!(
            drafts[0].message,
            "Atlantic Cod is currently in breeding season. Please avoid fishing this species to help preserve population."
        );
    }

    #[test]
    fn test_no_species_in_month() {
        let catalogue = vec![species("Red Snapper", &[6, 7])];
        assert!(plan_breeding_alerts(&catalogue, 12).is_empty());
    }
}

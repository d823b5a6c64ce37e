//! Integration events
//!
//! Serializable projections of domain events, published for other services
//! to consume. Both transition events share the same flat shape and differ
//! only by topic.

use chrono::NaiveDate;
use pawmed_domain::PetSnapshot;
use serde::Serialize;
use uuid::Uuid;

/// Published when a pet is flagged for adoption
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetFlaggedForAdoptionIntegrationEvent {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub sex: String,
    pub color: String,
    pub date_of_birth: NaiveDate,
    pub species: String,
}

impl PetFlaggedForAdoptionIntegrationEvent {
    /// Topic this event is published to.
    pub const TOPIC: &'static str = "pet-flagged-for-adoption";
}

impl From<&PetSnapshot> for PetFlaggedForAdoptionIntegrationEvent {
    fn from(pet: &PetSnapshot) -> Self {
        Self {
            id: pet.id.to_uuid(),
            name: pet.name.as_str().to_string(),
            breed: pet.breed.as_str().to_string(),
            sex: pet.sex.as_str().to_string(),
            color: pet.color.as_str().to_string(),
            date_of_birth: pet.date_of_birth.date(),
            species: pet.species.as_str().to_string(),
        }
    }
}

/// Published when a pet is transferred to the hospital
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetTransferredToHospitalIntegrationEvent {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    pub sex: String,
    pub color: String,
    pub date_of_birth: NaiveDate,
    pub species: String,
}

impl PetTransferredToHospitalIntegrationEvent {
    /// Topic this event is published to.
    pub const TOPIC: &'static str = "pet-transferred-to-hospital";
}

impl From<&PetSnapshot> for PetTransferredToHospitalIntegrationEvent {
    fn from(pet: &PetSnapshot) -> Self {
        Self {
            id: pet.id.to_uuid(),
            name: pet.name.as_str().to_string(),
            breed: pet.breed.as_str().to_string(),
            sex: pet.sex.as_str().to_string(),
            color: pet.color.as_str().to_string(),
            date_of_birth: pet.date_of_birth.date(),
            species: pet.species.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawmed_domain::{
        PetBreed, PetColor, PetDateOfBirth, PetId, PetName, PetSpecies, SexOfPet,
    };

    fn snapshot() -> PetSnapshot {
        let today = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        PetSnapshot {
            id: PetId::new(),
            name: PetName::new("Fido").unwrap(),
            breed: PetBreed::new("Labrador").unwrap(),
            sex: SexOfPet::Male,
            color: PetColor::new("Brown").unwrap(),
            date_of_birth: PetDateOfBirth::new(
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                today,
            )
            .unwrap(),
            species: PetSpecies::Dog,
        }
    }

    #[test]
    fn adoption_event_projects_snapshot_fields() {
        let snapshot = snapshot();
        let event = PetFlaggedForAdoptionIntegrationEvent::from(&snapshot);

        assert_eq!(event.id, snapshot.id.to_uuid());
        assert_eq!(event.name, "Fido");
        assert_eq!(event.breed, "Labrador");
        assert_eq!(event.sex, "male");
        assert_eq!(event.color, "Brown");
        assert_eq!(
            event.date_of_birth,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert_eq!(event.species, "dog");
    }

    #[test]
    fn payload_serializes_with_camel_case_keys() {
        let event = PetTransferredToHospitalIntegrationEvent::from(&snapshot());
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["name"], "Fido");
        assert_eq!(json["dateOfBirth"], "2020-01-01");
        assert!(json.get("date_of_birth").is_none());
    }
}

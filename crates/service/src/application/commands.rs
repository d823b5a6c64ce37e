//! Command surface
//!
//! Flat records delivered by the external transport, one per operation.
//! Raw primitives only; validation happens in the domain's value objects
//! when a command is handled.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

/// Register a new pet with all of its descriptive fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetCommand {
    pub id: Uuid,
    pub name: String,
    pub breed: String,
    /// Numeric wire code: `1 = male`, `2 = female`
    pub sex: u8,
    pub color: String,
    pub date_of_birth: NaiveDate,
    pub species: String,
}

/// Replace an existing pet's name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetNameCommand {
    pub id: Uuid,
    pub name: String,
}

/// Replace an existing pet's breed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBreedCommand {
    pub id: Uuid,
    pub breed: String,
}

/// Replace an existing pet's coat color.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetColorCommand {
    pub id: Uuid,
    pub color: String,
}

/// Replace an existing pet's date of birth.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDateOfBirthCommand {
    pub id: Uuid,
    pub date_of_birth: NaiveDate,
}

/// Flag an existing pet as available for adoption.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagForAdoptionCommand {
    pub id: Uuid,
}

/// Transfer an existing pet to the hospital service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferToHospitalCommand {
    pub id: Uuid,
}

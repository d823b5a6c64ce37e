//! Pet application service
//!
//! One operation per command. Every operation is a load-mutate-save sequence
//! against the repository port; lifecycle transitions additionally publish an
//! integration event, explicitly ordered mutate -> persist -> publish so the
//! repository is never behind the bus.
//!
//! No retries and no compensation: errors propagate to the caller unchanged.
//! A publish failure after a persisted transition surfaces to the caller and
//! the persisted state stays in place.

use std::sync::Arc;

use pawmed_domain::{
    AdoptionFlagOutcome, DomainError, HospitalTransferOutcome, Pet, PetColor, PetDateOfBirth,
    PetEvent, PetId, PetName, PetSpecies, SexOfPet,
};
use thiserror::Error;

use crate::application::commands::{
    CreatePetCommand, FlagForAdoptionCommand, SetBreedCommand, SetColorCommand,
    SetDateOfBirthCommand, SetNameCommand, TransferToHospitalCommand,
};
use crate::application::dispatch::{DispatchError, PetEventDispatcher};
use crate::application::integration_events::{
    PetFlaggedForAdoptionIntegrationEvent, PetTransferredToHospitalIntegrationEvent,
};
use crate::application::ports::outbound::{BreedLookupError, BreedLookupPort, MessageBusPort};
use crate::infrastructure::ports::{ClockPort, PetRepo, RepoError};
use crate::infrastructure::settings::MessagingSettings;

/// Error type for pet command handling.
#[derive(Debug, Error)]
pub enum PetServiceError {
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("Breed lookup error: {0}")]
    BreedLookup(#[from] BreedLookupError),
    #[error("Publish error: {0}")]
    Publish(#[from] DispatchError),
}

/// Handles pet commands: orchestrates the aggregate, the repository, and
/// integration-event publication.
pub struct PetApplicationService {
    pets: Arc<dyn PetRepo>,
    breeds: Arc<dyn BreedLookupPort>,
    clock: Arc<dyn ClockPort>,
    dispatcher: PetEventDispatcher,
}

impl PetApplicationService {
    /// Build the service and wire integration publication.
    ///
    /// Registers one publishing handler per transition event type with the
    /// dispatcher - exactly once per service instance lifetime.
    pub fn new(
        pets: Arc<dyn PetRepo>,
        breeds: Arc<dyn BreedLookupPort>,
        clock: Arc<dyn ClockPort>,
        bus: Arc<dyn MessageBusPort>,
        settings: MessagingSettings,
    ) -> Self {
        let mut dispatcher = PetEventDispatcher::new();

        let adoption_bus = Arc::clone(&bus);
        let adoption_channel = settings.channel.clone();
        dispatcher.register(PetEvent::FLAGGED_FOR_ADOPTION, move |event| {
            let bus = Arc::clone(&adoption_bus);
            let channel = adoption_channel.clone();
            Box::pin(async move {
                let payload = PetFlaggedForAdoptionIntegrationEvent::from(event.pet());
                bus.publish(
                    &channel,
                    PetFlaggedForAdoptionIntegrationEvent::TOPIC,
                    serde_json::to_value(payload)?,
                )
                .await?;
                Ok(())
            })
        });

        let hospital_bus = bus;
        let hospital_channel = settings.channel;
        dispatcher.register(PetEvent::TRANSFERRED_TO_HOSPITAL, move |event| {
            let bus = Arc::clone(&hospital_bus);
            let channel = hospital_channel.clone();
            Box::pin(async move {
                let payload = PetTransferredToHospitalIntegrationEvent::from(event.pet());
                bus.publish(
                    &channel,
                    PetTransferredToHospitalIntegrationEvent::TOPIC,
                    serde_json::to_value(payload)?,
                )
                .await?;
                Ok(())
            })
        });

        Self {
            pets,
            breeds,
            clock,
            dispatcher,
        }
    }

    /// Register a new pet.
    pub async fn create_pet(&self, command: CreatePetCommand) -> Result<(), PetServiceError> {
        let breed = self.breeds.resolve(&command.breed).await?;
        let today = self.clock.now().date_naive();

        let pet = Pet::new(
            PetId::from_uuid(command.id),
            PetName::new(command.name)?,
            breed,
            SexOfPet::from_code(command.sex)?,
            PetColor::new(command.color)?,
            PetDateOfBirth::new(command.date_of_birth, today)?,
            PetSpecies::lookup(&command.species)?,
        );

        self.pets.add(&pet).await?;
        tracing::info!(pet_id = %pet.id(), "Pet registered");
        Ok(())
    }

    /// Replace an existing pet's name.
    pub async fn set_name(&self, command: SetNameCommand) -> Result<(), PetServiceError> {
        let mut pet = self.pets.get(PetId::from_uuid(command.id)).await?;
        pet.set_name(PetName::new(command.name)?);
        self.pets.update(&pet).await?;
        Ok(())
    }

    /// Replace an existing pet's breed.
    ///
    /// Resolves through the same breed lookup as registration; breed edits
    /// are never taken on trust.
    pub async fn set_breed(&self, command: SetBreedCommand) -> Result<(), PetServiceError> {
        let breed = self.breeds.resolve(&command.breed).await?;
        let mut pet = self.pets.get(PetId::from_uuid(command.id)).await?;
        pet.set_breed(breed);
        self.pets.update(&pet).await?;
        Ok(())
    }

    /// Replace an existing pet's coat color.
    pub async fn set_color(&self, command: SetColorCommand) -> Result<(), PetServiceError> {
        let mut pet = self.pets.get(PetId::from_uuid(command.id)).await?;
        pet.set_color(PetColor::new(command.color)?);
        self.pets.update(&pet).await?;
        Ok(())
    }

    /// Replace an existing pet's date of birth.
    pub async fn set_date_of_birth(
        &self,
        command: SetDateOfBirthCommand,
    ) -> Result<(), PetServiceError> {
        let today = self.clock.now().date_naive();
        let mut pet = self.pets.get(PetId::from_uuid(command.id)).await?;
        pet.set_date_of_birth(PetDateOfBirth::new(command.date_of_birth, today)?);
        self.pets.update(&pet).await?;
        Ok(())
    }

    /// Flag an existing pet as available for adoption.
    pub async fn flag_for_adoption(
        &self,
        command: FlagForAdoptionCommand,
    ) -> Result<(), PetServiceError> {
        let mut pet = self.pets.get(PetId::from_uuid(command.id)).await?;
        match pet.flag_for_adoption() {
            AdoptionFlagOutcome::Flagged(event) => {
                self.pets.update(&pet).await?;
                self.dispatcher.dispatch(&event).await?;
                tracing::info!(pet_id = %pet.id(), "Pet flagged for adoption");
            }
            AdoptionFlagOutcome::AlreadyFlagged => {
                tracing::debug!(pet_id = %pet.id(), "Pet already flagged for adoption");
            }
        }
        Ok(())
    }

    /// Transfer an existing pet to the hospital service.
    pub async fn transfer_to_hospital(
        &self,
        command: TransferToHospitalCommand,
    ) -> Result<(), PetServiceError> {
        let mut pet = self.pets.get(PetId::from_uuid(command.id)).await?;
        match pet.transfer_to_hospital() {
            HospitalTransferOutcome::Transferred(event) => {
                self.pets.update(&pet).await?;
                self.dispatcher.dispatch(&event).await?;
                tracing::info!(pet_id = %pet.id(), "Pet transferred to hospital");
            }
            HospitalTransferOutcome::AlreadyInHospital => {
                tracing::debug!(pet_id = %pet.id(), "Pet already in hospital");
            }
        }
        Ok(())
    }
}

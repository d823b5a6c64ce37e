//! End-to-end command flows over the in-memory adapters.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use pawmed_domain::{PetId, PetStatus};
use pawmed_service::application::commands::{
    CreatePetCommand, FlagForAdoptionCommand, SetColorCommand, SetNameCommand,
    TransferToHospitalCommand,
};
use pawmed_service::infrastructure::memory::{
    InMemoryMessageBus, InMemoryPetRepo, StaticBreedDirectory,
};
use pawmed_service::infrastructure::ports::{ClockPort, PetRepo, RepoError};
use pawmed_service::infrastructure::settings::MessagingSettings;
use pawmed_service::{PetApplicationService, PetServiceError};

/// Deterministic clock for date-of-birth validation.
#[derive(Clone, Copy)]
struct FixedClock(DateTime<Utc>);

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct Harness {
    repo: Arc<InMemoryPetRepo>,
    bus: Arc<InMemoryMessageBus>,
    service: PetApplicationService,
}

fn harness() -> Harness {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let repo = Arc::new(InMemoryPetRepo::new());
    let bus = Arc::new(InMemoryMessageBus::new());
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap());

    let service = PetApplicationService::new(
        repo.clone(),
        Arc::new(StaticBreedDirectory::new()),
        Arc::new(clock),
        bus.clone(),
        MessagingSettings::default(),
    );

    Harness { repo, bus, service }
}

fn fido_command(id: Uuid) -> CreatePetCommand {
    CreatePetCommand {
        id,
        name: "Fido".to_string(),
        breed: "Labrador".to_string(),
        sex: 1,
        color: "Brown".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        species: "Dog".to_string(),
    }
}

#[tokio::test]
async fn created_pet_round_trips_through_the_repository() {
    let harness = harness();
    let id = Uuid::new_v4();

    harness.service.create_pet(fido_command(id)).await.unwrap();

    let pet = harness.repo.get(PetId::from_uuid(id)).await.unwrap();
    assert_eq!(pet.name().as_str(), "Fido");
    assert_eq!(pet.breed().as_str(), "Labrador");
    assert_eq!(pet.sex().as_str(), "male");
    assert_eq!(pet.color().as_str(), "Brown");
    assert_eq!(
        pet.date_of_birth().date(),
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
    );
    assert_eq!(pet.species().as_str(), "dog");
    assert_eq!(pet.status(), PetStatus::Active);
}

#[tokio::test]
async fn creating_the_same_id_twice_fails() {
    let harness = harness();
    let id = Uuid::new_v4();

    harness.service.create_pet(fido_command(id)).await.unwrap();
    let result = harness.service.create_pet(fido_command(id)).await;

    assert!(matches!(
        result,
        Err(PetServiceError::Repo(RepoError::Duplicate(_)))
    ));
}

#[tokio::test]
async fn invalid_species_fails_validation_and_stores_nothing() {
    let harness = harness();
    let id = Uuid::new_v4();

    let mut command = fido_command(id);
    command.species = "dragon".to_string();
    let result = harness.service.create_pet(command).await;

    assert!(matches!(result, Err(PetServiceError::Domain(_))));
    assert!(matches!(
        harness.repo.get(PetId::from_uuid(id)).await,
        Err(RepoError::NotFound(_))
    ));
}

#[tokio::test]
async fn flagging_for_adoption_publishes_exactly_one_snapshot_event() {
    let harness = harness();
    let id = Uuid::new_v4();

    harness.service.create_pet(fido_command(id)).await.unwrap();
    harness
        .service
        .flag_for_adoption(FlagForAdoptionCommand { id })
        .await
        .unwrap();

    let published = harness.bus.published().await;
    assert_eq!(published.len(), 1);

    let message = &published[0];
    assert_eq!(message.channel, "pubsub");
    assert_eq!(message.topic, "pet-flagged-for-adoption");
    assert_eq!(message.payload["id"], serde_json::json!(id));
    assert_eq!(message.payload["name"], "Fido");
    assert_eq!(message.payload["breed"], "Labrador");
    assert_eq!(message.payload["sex"], "male");
    assert_eq!(message.payload["color"], "Brown");
    assert_eq!(message.payload["dateOfBirth"], "2020-01-01");
    assert_eq!(message.payload["species"], "dog");

    // The transition is persisted, not just published
    let pet = harness.repo.get(PetId::from_uuid(id)).await.unwrap();
    assert_eq!(pet.status(), PetStatus::FlaggedForAdoption);
}

#[tokio::test]
async fn set_name_on_missing_pet_fails_and_publishes_nothing() {
    let harness = harness();

    let result = harness
        .service
        .set_name(SetNameCommand {
            id: Uuid::new_v4(),
            name: "Rex".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(PetServiceError::Repo(RepoError::NotFound(_)))
    ));
    assert!(harness.bus.published().await.is_empty());
}

#[tokio::test]
async fn sequential_color_updates_are_last_write_wins_with_no_events() {
    let harness = harness();
    let id = Uuid::new_v4();

    harness.service.create_pet(fido_command(id)).await.unwrap();
    for color in ["Black", "White"] {
        harness
            .service
            .set_color(SetColorCommand {
                id,
                color: color.to_string(),
            })
            .await
            .unwrap();
    }

    let pet = harness.repo.get(PetId::from_uuid(id)).await.unwrap();
    assert_eq!(pet.color().as_str(), "White");
    assert!(harness.bus.published().await.is_empty());
}

#[tokio::test]
async fn repeating_a_transfer_publishes_only_once() {
    let harness = harness();
    let id = Uuid::new_v4();

    harness.service.create_pet(fido_command(id)).await.unwrap();
    for _ in 0..2 {
        harness
            .service
            .transfer_to_hospital(TransferToHospitalCommand { id })
            .await
            .unwrap();
    }

    let published = harness.bus.published().await;
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].topic, "pet-transferred-to-hospital");
}

#[tokio::test]
async fn hospital_and_adoption_transitions_each_publish_their_topic() {
    let harness = harness();
    let id = Uuid::new_v4();

    harness.service.create_pet(fido_command(id)).await.unwrap();
    harness
        .service
        .transfer_to_hospital(TransferToHospitalCommand { id })
        .await
        .unwrap();
    harness
        .service
        .flag_for_adoption(FlagForAdoptionCommand { id })
        .await
        .unwrap();

    let topics: Vec<_> = harness
        .bus
        .published()
        .await
        .into_iter()
        .map(|message| message.topic)
        .collect();
    assert_eq!(
        topics,
        vec![
            "pet-transferred-to-hospital".to_string(),
            "pet-flagged-for-adoption".to_string(),
        ]
    );
}

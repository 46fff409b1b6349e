use contracts::domain::a004_circuit::aggregate::Circuit;

use crate::shared::entity_client::{use_entity_api, EntityClient};

pub fn use_circuit_api() -> EntityClient<Circuit> {
    use_entity_api::<Circuit>()
}

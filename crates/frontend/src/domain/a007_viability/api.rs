use contracts::domain::a007_viability::aggregate::ViabilityRequest;

use crate::shared::entity_client::{use_entity_api, EntityClient};

pub fn use_viability_api() -> EntityClient<ViabilityRequest> {
    use_entity_api::<ViabilityRequest>()
}

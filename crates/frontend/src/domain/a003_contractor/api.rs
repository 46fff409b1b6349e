use contracts::domain::a003_contractor::aggregate::Contractor;

use crate::shared::entity_client::{use_entity_api, EntityClient};

pub fn use_contractor_api() -> EntityClient<Contractor> {
    use_entity_api::<Contractor>()
}

use contracts::domain::a009_other_service::aggregate::OtherService;

use crate::shared::entity_client::{use_entity_api, EntityClient};

pub fn use_other_service_api() -> EntityClient<OtherService> {
    use_entity_api::<OtherService>()
}

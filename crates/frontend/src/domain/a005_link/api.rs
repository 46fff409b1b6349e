use contracts::domain::a005_link::aggregate::Link;

use crate::shared::entity_client::{use_entity_api, EntityClient};

/// Enlaces change status often during provisioning; cached for 5 minutes
pub fn use_link_api() -> EntityClient<Link> {
    use_entity_api::<Link>()
}

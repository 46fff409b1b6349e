use contracts::domain::a010_connection_type::aggregate::ConnectionType;

use crate::shared::entity_client::{use_entity_api, EntityClient};

pub fn use_connection_type_api() -> EntityClient<ConnectionType> {
    use_entity_api::<ConnectionType>()
}

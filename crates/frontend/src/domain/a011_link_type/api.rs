use contracts::domain::a011_link_type::aggregate::LinkType;

use crate::shared::entity_client::{use_entity_api, EntityClient};

pub fn use_link_type_api() -> EntityClient<LinkType> {
    use_entity_api::<LinkType>()
}

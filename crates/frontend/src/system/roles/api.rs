use contracts::system::roles::Role;

use crate::shared::entity_client::{use_entity_api, EntityClient};

pub fn use_role_api() -> EntityClient<Role> {
    use_entity_api::<Role>()
}

use contracts::domain::a002_contact::aggregate::Contact;

use crate::shared::entity_client::{use_entity_api, EntityClient};

pub fn use_contact_api() -> EntityClient<Contact> {
    use_entity_api::<Contact>()
}

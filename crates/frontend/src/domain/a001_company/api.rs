use contracts::domain::a001_company::aggregate::Company;

use crate::shared::entity_client::{use_entity_api, EntityClient};

pub fn use_company_api() -> EntityClient<Company> {
    use_entity_api::<Company>()
}

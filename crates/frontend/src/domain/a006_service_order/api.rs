use contracts::domain::a006_service_order::aggregate::ServiceOrder;

use crate::shared::entity_client::{use_entity_api, EntityClient};

pub fn use_service_order_api() -> EntityClient<ServiceOrder> {
    use_entity_api::<ServiceOrder>()
}

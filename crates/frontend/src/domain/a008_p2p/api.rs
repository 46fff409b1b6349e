use contracts::domain::a008_p2p::aggregate::P2pRecord;

use crate::shared::entity_client::{use_entity_api, EntityClient};

pub fn use_p2p_api() -> EntityClient<P2pRecord> {
    use_entity_api::<P2pRecord>()
}

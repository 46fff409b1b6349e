pub mod query_cache;
pub mod query_client;

pub use query_cache::{QueryKey, QueryScope};
pub use query_client::{use_query_client, QueryClient};

pub mod attribution;
pub mod change;
pub mod domain;
pub mod no_results;
pub mod table;

pub use attribution::{
    ATTRIBUTION_API_VERSION, AttributionPayload, AttributionSettings, ClientError, Environment,
};
pub use change::StateChange;
pub use domain::*;
pub use no_results::{NoResults, NoResultsKind};
pub use table::*;

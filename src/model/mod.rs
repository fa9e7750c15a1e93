mod event;
mod store;
mod summary;
mod timeline;

pub use event::{Event, EventHierarchy};
pub use store::{RowId, RowStore};
pub use summary::JobSummary;
pub use timeline::{StageMap, TimelineRow, UNRESOLVED_STAGE};

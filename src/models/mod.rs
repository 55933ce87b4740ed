pub mod event;
pub mod header;
pub mod list_type;
pub mod profile;
pub mod row;

pub use event::{EventFile, EventInfo};
pub use header::{HeaderDesign, HeaderSource};
pub use list_type::ListType;
pub use profile::ProfileInfo;
pub use row::ListRow;

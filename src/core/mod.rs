//! Entry services and the overlap resolver they share.

pub mod add;
pub mod clone;
pub mod del;
pub mod list;
pub mod log;
pub mod resolver;
pub mod summary;

pub use add::AddLogic;
pub use clone::CloneLogic;
pub use del::DeleteLogic;
pub use list::ListLogic;
pub use summary::SummaryLogic;

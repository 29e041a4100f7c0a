//! Services module - contains the helpdesk business logic.

pub mod asset_service;
pub mod clock;
pub mod comment_service;
pub mod context;
pub mod depreciation;
pub mod error;
pub mod helpdesk;
pub mod report_service;
pub mod role_policy;
pub mod ticket_service;
pub mod user_service;

// Re-export for convenience
pub use asset_service::AssetService;
pub use clock::{Clock, IdGenerator, ManualClock, SystemClock, UuidGenerator};
pub use comment_service::CommentService;
pub use context::ServiceContext;
pub use error::ServiceError;
pub use helpdesk::Helpdesk;
pub use report_service::ReportService;
pub use ticket_service::TicketService;
pub use user_service::UserService;

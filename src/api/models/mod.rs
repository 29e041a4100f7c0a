// Models module - contains User, Ticket, Comment, ITAsset, maintenance records and enums

pub mod asset;
pub mod comment;
#[path = "enums.rs"]
pub mod enums;
pub mod ticket;
pub mod user;

pub use asset::{
    AddMaintenanceRequest, AssetMaintenanceRecord, AssetUtilization, AssetValuation,
    CreateITAssetRequest, ITAsset,
};
pub use comment::{AddCommentRequest, Comment};
pub use enums::{Priority, ReportType, Role, TicketStatus};
pub use ticket::{AssignTicketRequest, CreateTicketRequest, Ticket, UpdateTicketStatusRequest};
pub use user::{CreateUserRequest, User};

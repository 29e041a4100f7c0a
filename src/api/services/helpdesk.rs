//! The helpdesk facade bundling every domain service over one set of stores.

use super::asset_service::AssetService;
use super::comment_service::CommentService;
use super::context::ServiceContext;
use super::report_service::ReportService;
use super::ticket_service::TicketService;
use super::user_service::UserService;

/// All domain services sharing a single [`ServiceContext`].
#[derive(Clone)]
pub struct Helpdesk {
    pub users: UserService,
    pub tickets: TicketService,
    pub comments: CommentService,
    pub assets: AssetService,
    pub reports: ReportService,
}

impl Helpdesk {
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            users: UserService::new(ctx.clone()),
            tickets: TicketService::new(ctx.clone()),
            comments: CommentService::new(ctx.clone()),
            assets: AssetService::new(ctx.clone()),
            reports: ReportService::new(ctx),
        }
    }

    /// Helpdesk over fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(ServiceContext::in_memory())
    }
}

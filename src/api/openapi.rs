//! OpenAPI specification definition.
//!
//! Aggregates all route handlers and schemas for OpenAPI documentation generation.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Helpdesk API",
        description = "Support tickets and IT asset tracking"
    ),
    servers((url = "/api/v1")),
    paths(
        // Users
        crate::routes::users::create_user,
        crate::routes::users::get_all_users,
        crate::routes::users::get_user_by_id,
        // Tickets
        crate::routes::tickets::create_ticket,
        crate::routes::tickets::get_tickets,
        crate::routes::tickets::get_ticket_by_id,
        crate::routes::tickets::assign_ticket,
        crate::routes::tickets::update_ticket_status,
        // Comments
        crate::routes::tickets::add_comment_to_ticket,
        crate::routes::tickets::get_comments_for_ticket,
        // Assets
        crate::routes::assets::create_it_asset,
        crate::routes::assets::get_it_assets,
        crate::routes::assets::get_it_asset_by_id,
        crate::routes::assets::calculate_asset_value,
        // Maintenance
        crate::routes::assets::add_asset_maintenance_record,
        crate::routes::assets::get_asset_maintenance_history,
        // Reports
        crate::routes::reports::generate_report,
        // OpenAPI
        crate::routes::openapi::serve_openapi_json,
    ),
    components(schemas(
        crate::models::Role,
        crate::models::Priority,
        crate::models::ReportType,
        crate::models::User,
        crate::models::CreateUserRequest,
        crate::models::Ticket,
        crate::models::CreateTicketRequest,
        crate::models::AssignTicketRequest,
        crate::models::UpdateTicketStatusRequest,
        crate::models::Comment,
        crate::models::AddCommentRequest,
        crate::models::ITAsset,
        crate::models::CreateITAssetRequest,
        crate::models::AssetMaintenanceRecord,
        crate::models::AddMaintenanceRequest,
        crate::models::AssetUtilization,
        crate::models::AssetValuation,
    )),
    tags(
        (name = "Users", description = "User registration and lookup"),
        (name = "Tickets", description = "Support ticket lifecycle"),
        (name = "Comments", description = "Ticket discussion threads"),
        (name = "Assets", description = "IT asset register and valuation"),
        (name = "Maintenance", description = "Asset maintenance history"),
        (name = "Reports", description = "Ticket and asset reports"),
        (name = "OpenAPI", description = "API documentation")
    )
)]
pub struct ApiDoc;

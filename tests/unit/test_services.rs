//! Service-level tests for the helpdesk domain operations.

use chrono::Duration;
use helpdesk_api::models::{
    AddMaintenanceRequest, CreateITAssetRequest, Priority, ReportType, Role, TicketStatus, User,
};
use helpdesk_api::services::depreciation::MILLIS_PER_YEAR;
use helpdesk_api::services::{Helpdesk, ManualClock, ServiceContext, ServiceError, UuidGenerator};
use helpdesk_api::storage::Stores;
use serde_json::Value;
use std::sync::Arc;

const T0: i64 = 1_700_000_000_000;

fn helpdesk_at(millis: i64) -> (Helpdesk, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::at_millis(millis));
    let ctx = ServiceContext::new(Stores::in_memory(), clock.clone(), Arc::new(UuidGenerator));
    (Helpdesk::new(ctx), clock)
}

fn helpdesk() -> Helpdesk {
    helpdesk_at(T0).0
}

fn user(helpdesk: &Helpdesk, name: &str, role: Role) -> User {
    helpdesk.users.create_user(name, role).unwrap()
}

fn laptop_request(assigned_to: &str) -> CreateITAssetRequest {
    CreateITAssetRequest {
        asset_name: "Laptop".to_string(),
        asset_type: "Hardware".to_string(),
        purchase_date: T0,
        assigned_to: assigned_to.to_string(),
        approx_value: 1000,
        depreciation_rate: 20,
    }
}

fn maintenance(kind: &str, cost: u64) -> AddMaintenanceRequest {
    AddMaintenanceRequest {
        maintenance_type: kind.to_string(),
        description: format!("{} work", kind),
        cost,
        date: T0,
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[test]
fn test_create_user_rejects_duplicate_username() {
    let helpdesk = helpdesk();

    let alice = helpdesk.users.create_user("alice", Role::Admin).unwrap();
    assert_eq!(alice.username, "alice");
    assert_eq!(alice.role, Role::Admin);
    assert_eq!(alice.created_at.timestamp_millis(), T0);

    let err = helpdesk.users.create_user("alice", Role::User).unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
    assert_eq!(helpdesk.users.get_all_users().unwrap().len(), 1);
}

#[test]
fn test_create_user_rejects_empty_username() {
    let helpdesk = helpdesk();
    assert!(matches!(
        helpdesk.users.create_user("", Role::User),
        Err(ServiceError::Validation(_))
    ));
}

#[test]
fn test_usernames_stay_unique_across_many_calls() {
    let helpdesk = helpdesk();
    let names = ["a", "b", "a", "c", "b", "a", "d"];
    let created = names
        .iter()
        .filter(|name| helpdesk.users.create_user(name, Role::User).is_ok())
        .count();

    assert_eq!(created, 4);
    let mut usernames: Vec<String> = helpdesk
        .users
        .get_all_users()
        .unwrap()
        .into_iter()
        .map(|u| u.username)
        .collect();
    usernames.sort();
    assert_eq!(usernames, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_user_lookup() {
    let helpdesk = helpdesk();
    assert!(matches!(
        helpdesk.users.get_all_users(),
        Err(ServiceError::NotFound(_))
    ));

    let bob = user(&helpdesk, "bob", Role::ITSupport);
    assert_eq!(helpdesk.users.get_user_by_id(&bob.id).unwrap(), bob);
    assert!(matches!(
        helpdesk.users.get_user_by_id("missing"),
        Err(ServiceError::NotFound(_))
    ));
}

// ---------------------------------------------------------------------------
// Tickets
// ---------------------------------------------------------------------------

#[test]
fn test_support_user_files_open_unassigned_ticket() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);

    let ticket = helpdesk
        .tickets
        .create_ticket(&bob.id, "Printer broken", "No toner", Priority::Low)
        .unwrap();

    assert_eq!(ticket.status, TicketStatus::Open(Some("ticket is open".to_string())));
    assert_eq!(ticket.assigned_to, None);
    assert_eq!(ticket.created_by, bob.id);
    assert_eq!(ticket.user_id, bob.id);
    assert_eq!(ticket.priority, Priority::Low);
}

#[test]
fn test_admin_may_file_tickets() {
    let helpdesk = helpdesk();
    let admin = user(&helpdesk, "root", Role::Admin);
    assert!(
        helpdesk
            .tickets
            .create_ticket(&admin.id, "VPN", "Cannot connect", Priority::High)
            .is_ok()
    );
}

#[test]
fn test_plain_user_cannot_file_tickets() {
    let helpdesk = helpdesk();
    let carol = user(&helpdesk, "carol", Role::User);

    let err = helpdesk
        .tickets
        .create_ticket(&carol.id, "x", "y", Priority::Low)
        .unwrap_err();
    assert!(matches!(err, ServiceError::Authorization(_)));
    assert!(matches!(
        helpdesk.tickets.get_tickets(),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn test_create_ticket_validation_order() {
    let helpdesk = helpdesk();
    let carol = user(&helpdesk, "carol", Role::User);

    // Empty fields are rejected before any role or existence check.
    for (uid, title, desc) in [("", "t", "d"), (carol.id.as_str(), "", "d"), (carol.id.as_str(), "t", "")] {
        assert!(matches!(
            helpdesk.tickets.create_ticket(uid, title, desc, Priority::Medium),
            Err(ServiceError::Validation(_))
        ));
    }

    assert!(matches!(
        helpdesk.tickets.create_ticket("ghost", "t", "d", Priority::Medium),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn test_ticket_round_trip() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);
    let created = helpdesk
        .tickets
        .create_ticket(&bob.id, "Monitor", "Flickers", Priority::Medium)
        .unwrap();

    assert_eq!(helpdesk.tickets.get_ticket_by_id(&created.id).unwrap(), created);
    assert_eq!(helpdesk.tickets.get_tickets().unwrap(), vec![created]);
    assert!(matches!(
        helpdesk.tickets.get_ticket_by_id("nope"),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn test_assign_ticket_is_idempotent() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);
    let ticket = helpdesk
        .tickets
        .create_ticket(&bob.id, "Printer broken", "No toner", Priority::Low)
        .unwrap();

    let first = helpdesk.tickets.assign_ticket(&ticket.id, &bob.id).unwrap();
    assert_eq!(first.assigned_to.as_deref(), Some(bob.id.as_str()));

    let second = helpdesk.tickets.assign_ticket(&ticket.id, &bob.id).unwrap();
    assert_eq!(first, second);
    assert_eq!(helpdesk.tickets.get_ticket_by_id(&ticket.id).unwrap(), second);
}

#[test]
fn test_assign_ticket_failures() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);
    let admin = user(&helpdesk, "root", Role::Admin);
    let ticket = helpdesk
        .tickets
        .create_ticket(&bob.id, "Keyboard", "Sticky keys", Priority::Low)
        .unwrap();

    assert!(matches!(
        helpdesk.tickets.assign_ticket("missing", &bob.id),
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        helpdesk.tickets.assign_ticket(&ticket.id, "ghost"),
        Err(ServiceError::NotFound(_))
    ));
    // Admins cannot take tickets; only IT support can.
    assert!(matches!(
        helpdesk.tickets.assign_ticket(&ticket.id, &admin.id),
        Err(ServiceError::Authorization(_))
    ));
    assert_eq!(helpdesk.tickets.get_ticket_by_id(&ticket.id).unwrap().assigned_to, None);
}

#[test]
fn test_update_ticket_status_any_transition() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);
    let admin = user(&helpdesk, "root", Role::Admin);
    let ticket = helpdesk
        .tickets
        .create_ticket(&bob.id, "Disk", "Full", Priority::High)
        .unwrap();

    let closed = helpdesk
        .tickets
        .update_ticket_status(&ticket.id, &admin.id, TicketStatus::Closed(Some("wiped".into())))
        .unwrap();
    assert_eq!(closed.status, TicketStatus::Closed(Some("wiped".into())));

    let reopened = helpdesk
        .tickets
        .update_ticket_status(&ticket.id, &bob.id, TicketStatus::InProgress(None))
        .unwrap();
    assert_eq!(reopened.status, TicketStatus::InProgress(None));
    assert_eq!(helpdesk.tickets.get_ticket_by_id(&ticket.id).unwrap(), reopened);
}

#[test]
fn test_update_ticket_status_gate_runs_first() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);
    let carol = user(&helpdesk, "carol", Role::User);
    let ticket = helpdesk
        .tickets
        .create_ticket(&bob.id, "Mouse", "Lost", Priority::Low)
        .unwrap();

    assert!(matches!(
        helpdesk.tickets.update_ticket_status(&ticket.id, &carol.id, TicketStatus::Closed(None)),
        Err(ServiceError::Authorization(_))
    ));
    // An unknown caller fails the role gate before the ticket is looked up.
    assert!(matches!(
        helpdesk.tickets.update_ticket_status("missing", "ghost", TicketStatus::Closed(None)),
        Err(ServiceError::Authorization(_))
    ));
    assert!(matches!(
        helpdesk.tickets.update_ticket_status("missing", &bob.id, TicketStatus::Closed(None)),
        Err(ServiceError::NotFound(_))
    ));
    assert!(helpdesk.tickets.get_ticket_by_id(&ticket.id).unwrap().status.is_open());
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[test]
fn test_comments_are_associated_with_their_ticket_only() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);
    let first = helpdesk
        .tickets
        .create_ticket(&bob.id, "One", "First", Priority::Low)
        .unwrap();
    let second = helpdesk
        .tickets
        .create_ticket(&bob.id, "Two", "Second", Priority::Low)
        .unwrap();

    let a = helpdesk.comments.add_comment_to_ticket(&first.id, &bob.id, "looking").unwrap();
    let b = helpdesk.comments.add_comment_to_ticket(&first.id, "anyone", "thanks").unwrap();
    let c = helpdesk.comments.add_comment_to_ticket(&second.id, &bob.id, "other").unwrap();
    assert_eq!(a.created_at.timestamp_millis(), T0);

    let mut ids: Vec<String> = helpdesk
        .comments
        .get_comments_for_ticket(&first.id)
        .unwrap()
        .into_iter()
        .map(|comment| comment.id)
        .collect();
    ids.sort();
    let mut expected = vec![a.id, b.id];
    expected.sort();
    assert_eq!(ids, expected);

    assert_eq!(
        helpdesk.comments.get_comments_for_ticket(&second.id).unwrap(),
        vec![c]
    );
}

#[test]
fn test_comment_on_missing_ticket_is_not_found() {
    let helpdesk = helpdesk();
    assert!(matches!(
        helpdesk.comments.add_comment_to_ticket("missing", "u", "hello"),
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        helpdesk.comments.get_comments_for_ticket("missing"),
        Err(ServiceError::NotFound(_))
    ));
}

/// Child listings distinguish "no such parent" (NotFound) from "no children" (empty list).
#[test]
fn test_ticket_without_comments_lists_empty_not_not_found() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);
    let ticket = helpdesk
        .tickets
        .create_ticket(&bob.id, "Quiet", "No discussion", Priority::Low)
        .unwrap();

    assert!(helpdesk.comments.get_comments_for_ticket(&ticket.id).unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Assets & maintenance
// ---------------------------------------------------------------------------

#[test]
fn test_create_asset_validation() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);

    let mut request = laptop_request(&bob.id);
    request.asset_name.clear();
    assert!(matches!(
        helpdesk.assets.create_it_asset(request),
        Err(ServiceError::Validation(_))
    ));

    let mut request = laptop_request(&bob.id);
    request.asset_type.clear();
    assert!(matches!(
        helpdesk.assets.create_it_asset(request),
        Err(ServiceError::Validation(_))
    ));

    assert!(matches!(
        helpdesk.assets.create_it_asset(laptop_request("ghost")),
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        helpdesk.assets.get_it_assets(),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn test_asset_is_stored_verbatim() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);
    let asset = helpdesk.assets.create_it_asset(laptop_request(&bob.id)).unwrap();

    assert_eq!(asset.asset_name, "Laptop");
    assert_eq!(asset.asset_type, "Hardware");
    assert_eq!(asset.purchase_date, T0);
    assert_eq!(asset.assigned_to, bob.id);
    assert_eq!(asset.approx_value, 1000);
    assert_eq!(asset.depreciation_rate, 20);
    assert_eq!(helpdesk.assets.get_it_asset_by_id(&asset.id).unwrap(), asset);
    assert_eq!(helpdesk.assets.get_it_assets().unwrap(), vec![asset]);
}

#[test]
fn test_maintenance_history() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);
    let laptop = helpdesk.assets.create_it_asset(laptop_request(&bob.id)).unwrap();
    let mut desk_request = laptop_request(&bob.id);
    desk_request.asset_name = "Desk phone".to_string();
    let phone = helpdesk.assets.create_it_asset(desk_request).unwrap();

    // Existing asset without maintenance: empty history, not an error.
    assert!(
        helpdesk
            .assets
            .get_asset_maintenance_history(&laptop.id)
            .unwrap()
            .is_empty()
    );

    let battery = helpdesk
        .assets
        .add_asset_maintenance_record(&laptop.id, maintenance("Battery", 120))
        .unwrap();
    helpdesk
        .assets
        .add_asset_maintenance_record(&phone.id, maintenance("Cable", 5))
        .unwrap();

    assert_eq!(battery.asset_id, laptop.id);
    assert_eq!(battery.cost, 120);
    assert_eq!(
        helpdesk.assets.get_asset_maintenance_history(&laptop.id).unwrap(),
        vec![battery]
    );

    assert!(matches!(
        helpdesk.assets.add_asset_maintenance_record("missing", maintenance("X", 1)),
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        helpdesk.assets.get_asset_maintenance_history("missing"),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn test_asset_value_depreciates_to_zero_after_five_years() {
    let (helpdesk, clock) = helpdesk_at(T0);
    let bob = user(&helpdesk, "bob", Role::ITSupport);
    let asset = helpdesk.assets.create_it_asset(laptop_request(&bob.id)).unwrap();

    assert_eq!(helpdesk.assets.calculate_asset_value(&asset.id).unwrap(), 1000);

    clock.advance(Duration::milliseconds(2 * MILLIS_PER_YEAR));
    assert_eq!(helpdesk.assets.calculate_asset_value(&asset.id).unwrap(), 600);

    clock.advance(Duration::milliseconds(3 * MILLIS_PER_YEAR));
    assert_eq!(helpdesk.assets.calculate_asset_value(&asset.id).unwrap(), 0);

    clock.advance(Duration::milliseconds(10 * MILLIS_PER_YEAR));
    assert_eq!(helpdesk.assets.calculate_asset_value(&asset.id).unwrap(), 0);

    assert!(matches!(
        helpdesk.assets.calculate_asset_value("missing"),
        Err(ServiceError::NotFound(_))
    ));
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[test]
fn test_empty_report_is_not_an_error() {
    let helpdesk = helpdesk();
    assert_eq!(helpdesk.reports.generate_report("OpenTickets").unwrap(), "[]");
    assert_eq!(helpdesk.reports.generate_report("AssetUtilization").unwrap(), "[]");
    assert!(matches!(
        helpdesk.tickets.get_tickets(),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn test_unknown_report_type_is_validation_error() {
    let helpdesk = helpdesk();
    assert!(matches!(
        helpdesk.reports.generate_report("Everything"),
        Err(ServiceError::Validation(_))
    ));
}

#[test]
fn test_ticket_reports_filter_by_status() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);
    let open = helpdesk
        .tickets
        .create_ticket(&bob.id, "Open one", "d", Priority::Low)
        .unwrap();
    let working = helpdesk
        .tickets
        .create_ticket(&bob.id, "Working", "d", Priority::Low)
        .unwrap();
    let done = helpdesk
        .tickets
        .create_ticket(&bob.id, "Done", "d", Priority::Low)
        .unwrap();
    helpdesk
        .tickets
        .update_ticket_status(&working.id, &bob.id, TicketStatus::InProgress(None))
        .unwrap();
    helpdesk
        .tickets
        .update_ticket_status(&done.id, &bob.id, TicketStatus::Closed(None))
        .unwrap();

    let ids_in = |report: ReportType| -> Vec<String> {
        let text = helpdesk.reports.generate(report).unwrap();
        let rows: Vec<Value> = serde_json::from_str(&text).unwrap();
        rows.iter().map(|r| r["id"].as_str().unwrap().to_string()).collect()
    };

    assert_eq!(ids_in(ReportType::OpenTickets), vec![open.id]);
    assert_eq!(ids_in(ReportType::InProgressTickets), vec![working.id]);
    assert_eq!(ids_in(ReportType::ClosedTickets), vec![done.id]);
}

#[test]
fn test_asset_utilization_projection() {
    let helpdesk = helpdesk();
    let bob = user(&helpdesk, "bob", Role::ITSupport);
    let asset = helpdesk.assets.create_it_asset(laptop_request(&bob.id)).unwrap();

    let text = helpdesk.reports.generate_report("AssetUtilization").unwrap();
    let rows: Vec<Value> = serde_json::from_str(&text).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        serde_json::json!({"id": asset.id, "name": "Laptop", "assigned_to": bob.id})
    );
}

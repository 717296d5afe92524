// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gesttransport_domain::{OverviewStats, TicketStatus};

use super::{
    create_test_city, create_test_client, create_test_driver, create_test_persistence,
    create_test_route, create_test_route_draft, create_test_ticket, create_test_vehicle,
};
use crate::Persistence;

#[test]
fn test_empty_overview_has_zero_revenue() {
    let mut persistence: Persistence = create_test_persistence();
    assert_eq!(persistence.overview_stats().unwrap(), OverviewStats::default());
}

#[test]
fn test_overview_counts_and_revenue_follow_current_statuses() {
    let mut persistence: Persistence = create_test_persistence();
    let client_id: i64 = create_test_client(&mut persistence, "Diallo", "Awa");
    let route_id: i64 = create_test_route(&mut persistence);
    create_test_driver(&mut persistence, "Sow", "B-1");
    create_test_vehicle(&mut persistence, "DK-1");
    let first: i64 = create_test_ticket(&mut persistence, route_id, client_id, 1);
    create_test_ticket(&mut persistence, route_id, client_id, 2);

    let stats: OverviewStats = persistence.overview_stats().unwrap();
    assert_eq!(stats.paid_tickets, 2);
    assert!((stats.revenue - 4000.0).abs() < f64::EPSILON);
    assert_eq!(stats.routes, 1);
    assert_eq!(stats.clients, 1);
    assert_eq!(stats.drivers, 1);
    assert_eq!(stats.vehicles, 1);

    persistence.cancel_ticket(first).unwrap();
    let stats: OverviewStats = persistence.overview_stats().unwrap();
    assert_eq!(stats.paid_tickets, 1);
    assert_eq!(stats.cancelled_tickets, 1);
    assert!((stats.revenue - 2000.0).abs() < f64::EPSILON);
}

#[test]
fn test_recent_tickets_newest_first_with_limit() {
    let mut persistence: Persistence = create_test_persistence();
    let client_id: i64 = create_test_client(&mut persistence, "Diallo", "Awa");
    let route_id: i64 = create_test_route(&mut persistence);
    let ids: Vec<i64> = (1..=12)
        .map(|seat| create_test_ticket(&mut persistence, route_id, client_id, seat))
        .collect();

    let recent = persistence.recent_tickets(10).unwrap();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].id, ids[11]);
    assert_eq!(recent[0].route_label(), "Dakar → Thiès");
    assert_eq!(recent[0].status, TicketStatus::Paid);
}

#[test]
fn test_upcoming_routes_exclude_past_departures() {
    let mut persistence: Persistence = create_test_persistence();
    let dakar: i64 = create_test_city(&mut persistence, "Dakar");
    let thies: i64 = create_test_city(&mut persistence, "Thiès");

    let mut past = create_test_route_draft(dakar, thies);
    past.departure_time = String::from("2026-01-01 08:00");
    let mut later = create_test_route_draft(dakar, thies);
    later.departure_time = String::from("2026-05-01 08:00");
    let mut sooner = create_test_route_draft(thies, dakar);
    sooner.departure_time = String::from("2026-03-01 08:00");

    persistence.create_route(&past).unwrap();
    let later_id: i64 = persistence.create_route(&later).unwrap();
    let sooner_id: i64 = persistence.create_route(&sooner).unwrap();

    let upcoming = persistence.upcoming_routes("2026-03-01 08:00", 5).unwrap();
    assert_eq!(
        upcoming.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![sooner_id, later_id]
    );
    assert_eq!(upcoming[0].route_label(), "Thiès → Dakar");
}

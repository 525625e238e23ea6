//! Demo order records for the order list page.

use crate::state::orders_table::{OrderRecord, OrderStatus, OrderUser};

type Row = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str, OrderStatus);

#[rustfmt::skip]
const ROWS: &[Row] = &[
    ("#CM9801", "Natali Craig", "female-1", "Landing Page", "Meadow Lane Oakland", "Just now", OrderStatus::InProgress),
    ("#CM9802", "Kate Morrison", "female-2", "CRM Admin pages", "Larry San Francisco", "A minute ago", OrderStatus::Complete),
    ("#CM9803", "Drew Cano", "male-1", "Client Project", "Bagwell Avenue Ocala", "1 hour ago", OrderStatus::Pending),
    ("#CM9804", "Orlando Diggs", "male-2", "Admin Dashboard", "Washburn Baton Rouge", "Yesterday", OrderStatus::Approved),
    ("#CM9805", "Andi Lane", "female-3", "App Landing Page", "Nest Lane Olivette", "Feb 2, 2023", OrderStatus::Rejected),
    ("#CM9806", "Natali Craig", "female-1", "Landing Page", "Meadow Lane Oakland", "59 minutes ago", OrderStatus::InProgress),
    ("#CM9807", "Kate Morrison", "female-2", "CRM Admin pages", "Larry San Francisco", "12 hours ago", OrderStatus::Complete),
    ("#CM9808", "Drew Cano", "male-1", "Client Project", "Bagwell Avenue Ocala", "Today", OrderStatus::Pending),
    ("#CM9809", "Orlando Diggs", "male-2", "Admin Dashboard", "Washburn Baton Rouge", "Jan 28, 2023", OrderStatus::Approved),
    ("#CM9810", "Andi Lane", "female-3", "App Landing Page", "Nest Lane Olivette", "Jan 14, 2023", OrderStatus::Rejected),
    ("#CM9811", "Koray Okumus", "male-3", "E-commerce Revamp", "Elm Street Portland", "3 hours ago", OrderStatus::InProgress),
    ("#CM9812", "Melody Macy", "female-4", "Marketing Site", "Hillside Drive Austin", "2 days ago", OrderStatus::Complete),
    ("#CM9813", "Kristin Watson", "female-5", "Mobile App", "Cedar Court Denver", "Dec 30, 2022", OrderStatus::Pending),
    ("#CM9814", "Lily French", "female-6", "Analytics Portal", "Maple Avenue Seattle", "5 hours ago", OrderStatus::Approved),
    ("#CM9815", "Drew Cano", "male-1", "Design System", "Bagwell Avenue Ocala", "Dec 18, 2022", OrderStatus::Complete),
    ("#CM9816", "Natali Craig", "female-1", "Help Center", "Meadow Lane Oakland", "4 days ago", OrderStatus::Rejected),
    ("#CM9817", "Koray Okumus", "male-3", "Billing Dashboard", "Elm Street Portland", "Nov 30, 2022", OrderStatus::InProgress),
    ("#CM9818", "Melody Macy", "female-4", "Onboarding Flow", "Hillside Drive Austin", "Nov 21, 2022", OrderStatus::Pending),
    ("#CM9819", "Kate Morrison", "female-2", "CRM Admin pages", "Larry San Francisco", "Nov 9, 2022", OrderStatus::Approved),
    ("#CM9820", "Orlando Diggs", "male-2", "Reporting Suite", "Washburn Baton Rouge", "Oct 27, 2022", OrderStatus::Complete),
    ("#CM9821", "Kristin Watson", "female-5", "Mobile App", "Cedar Court Denver", "Oct 12, 2022", OrderStatus::InProgress),
    ("#CM9822", "Lily French", "female-6", "Analytics Portal", "Maple Avenue Seattle", "Sep 30, 2022", OrderStatus::Rejected),
    ("#CM9823", "Andi Lane", "female-3", "App Landing Page", "Nest Lane Olivette", "Sep 14, 2022", OrderStatus::Complete),
    ("#CM9824", "Drew Cano", "male-1", "Client Project", "Bagwell Avenue Ocala", "Aug 29, 2022", OrderStatus::Approved),
    ("#CM9825", "Natali Craig", "female-1", "Landing Page", "Meadow Lane Oakland", "Aug 3, 2022", OrderStatus::Pending),
];

/// All demo orders in their default (unsorted) order.
pub fn orders() -> Vec<OrderRecord> {
    ROWS.iter()
        .map(|&(id, name, avatar, project, address, date, status)| OrderRecord {
            id: id.to_owned(),
            user: OrderUser { name: name.to_owned(), avatar: format!("/avatars/{avatar}.png") },
            project: project.to_owned(),
            address: address.to_owned(),
            date: date.to_owned(),
            status,
        })
        .collect()
}

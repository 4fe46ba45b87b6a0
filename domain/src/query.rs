//! The admin list-query contract.
//!
//! Every admin resource (events, tickets, bookings) is listed through the
//! same request shape: page-based pagination plus sort, free-text search,
//! and resource-specific filters. A query value serializes to the
//! `?page&limit&sortBy&sortOrder&search&...` pairs the listing endpoints
//! accept.
//!
//! Mutating any non-page field goes through a setter that resets `page` to
//! 1, so a filter change never leaves the view stranded on a page that no
//! longer exists.

use crate::money::Money;
use crate::types::{BookingStatus, EventId, PublishStatus, TicketId};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Default page size for admin list views.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Wire value (`asc` / `desc`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Resource-specific filter fields of an [`AdminQuery`].
pub trait ResourceFilter {
    /// Append this filter's query pairs (camelCase keys, wire-format
    /// values). Unset fields contribute nothing.
    fn push_pairs(&self, pairs: &mut Vec<(String, String)>);
}

/// Filter-less queries (e.g. listing bookings scoped by path).
impl ResourceFilter for () {
    fn push_pairs(&self, _pairs: &mut Vec<(String, String)>) {}
}

/// A list request for one admin resource.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminQuery<F> {
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Field to sort by, server-side field name.
    pub sort_by: Option<String>,
    /// Sort direction; meaningful only with `sort_by`.
    pub sort_order: Option<SortOrder>,
    /// Free-text search.
    pub search: Option<String>,
    /// Resource-specific filters.
    pub filter: F,
}

impl<F: Default> Default for AdminQuery<F> {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            sort_by: None,
            sort_order: None,
            search: None,
            filter: F::default(),
        }
    }
}

impl<F: ResourceFilter> AdminQuery<F> {
    /// Serialize to query pairs for the listing endpoint.
    ///
    /// Empty search strings are treated as unset.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy".to_string(), sort_by.clone()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sortOrder".to_string(), sort_order.as_str().to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search".to_string(), search.to_string()));
        }
        self.filter.push_pairs(&mut pairs);
        pairs
    }
}

impl<F> AdminQuery<F> {
    /// Change the free-text search and reset to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.search = if search.is_empty() { None } else { Some(search) };
        self.page = 1;
    }

    /// Change the sort and reset to the first page.
    pub fn set_sort(&mut self, sort_by: impl Into<String>, order: SortOrder) {
        self.sort_by = Some(sort_by.into());
        self.sort_order = Some(order);
        self.page = 1;
    }

    /// Replace the resource filter and reset to the first page.
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.page = 1;
    }

    /// Move to a page; every other field is untouched.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}

fn push_timestamp(pairs: &mut Vec<(String, String)>, key: &str, value: Option<DateTime<Utc>>) {
    if let Some(value) = value {
        pairs.push((
            key.to_string(),
            value.to_rfc3339_opts(SecondsFormat::Millis, true),
        ));
    }
}

/// Filters for the admin events list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventFilter {
    /// Publish status equality filter.
    pub status: Option<PublishStatus>,
    /// Inclusive lower bound on event date.
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on event date.
    pub date_to: Option<DateTime<Utc>>,
}

impl ResourceFilter for EventFilter {
    fn push_pairs(&self, pairs: &mut Vec<(String, String)>) {
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status_value(status)));
        }
        push_timestamp(pairs, "dateFrom", self.date_from);
        push_timestamp(pairs, "dateTo", self.date_to);
    }
}

/// Filters for the admin tickets list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketFilter {
    /// Owning event equality filter.
    pub event_id: Option<EventId>,
    /// Publish status equality filter.
    pub status: Option<PublishStatus>,
    /// Inclusive lower bound on price, minor units.
    pub min_price: Option<Money>,
    /// Inclusive upper bound on price, minor units.
    pub max_price: Option<Money>,
}

impl ResourceFilter for TicketFilter {
    fn push_pairs(&self, pairs: &mut Vec<(String, String)>) {
        if let Some(event_id) = &self.event_id {
            pairs.push(("eventId".to_string(), event_id.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status_value(status)));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice".to_string(), min.minor_units().to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice".to_string(), max.minor_units().to_string()));
        }
    }
}

/// Filters for the admin bookings list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingFilter {
    /// Booked event equality filter.
    pub event_id: Option<EventId>,
    /// Booked ticket equality filter.
    pub ticket_id: Option<TicketId>,
    /// Booking status equality filter.
    pub status: Option<BookingStatus>,
    /// Purchaser email equality filter.
    pub email: Option<String>,
    /// Inclusive lower bound on creation date.
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on creation date.
    pub date_to: Option<DateTime<Utc>>,
}

impl ResourceFilter for BookingFilter {
    fn push_pairs(&self, pairs: &mut Vec<(String, String)>) {
        if let Some(event_id) = &self.event_id {
            pairs.push(("eventId".to_string(), event_id.to_string()));
        }
        if let Some(ticket_id) = &self.ticket_id {
            pairs.push(("ticketId".to_string(), ticket_id.to_string()));
        }
        if let Some(status) = self.status {
            let value = match status {
                BookingStatus::Pending => "pending",
                BookingStatus::Confirmed => "confirmed",
                BookingStatus::Cancelled => "cancelled",
            };
            pairs.push(("status".to_string(), value.to_string()));
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            pairs.push(("email".to_string(), email.to_string()));
        }
        push_timestamp(pairs, "dateFrom", self.date_from);
        push_timestamp(pairs, "dateTo", self.date_to);
    }
}

fn status_value(status: PublishStatus) -> String {
    match status {
        PublishStatus::Active => "active".to_string(),
        PublishStatus::Inactive => "inactive".to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn pairs_map(pairs: &[(String, String)]) -> Vec<(&str, &str)> {
        pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[test]
    fn default_query_serializes_page_and_limit_only() {
        let query: AdminQuery<EventFilter> = AdminQuery::default();
        assert_eq!(
            pairs_map(&query.to_query_pairs()),
            vec![("page", "1"), ("limit", "10")]
        );
    }

    #[test]
    fn full_event_query_serializes_in_wire_names() {
        let mut query: AdminQuery<EventFilter> = AdminQuery::default();
        query.set_sort("date", SortOrder::Desc);
        query.set_search("summit");
        query.set_filter(EventFilter {
            status: Some(PublishStatus::Active),
            date_from: Some(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
            date_to: None,
        });
        query.set_page(3);

        assert_eq!(
            pairs_map(&query.to_query_pairs()),
            vec![
                ("page", "3"),
                ("limit", "10"),
                ("sortBy", "date"),
                ("sortOrder", "desc"),
                ("search", "summit"),
                ("status", "active"),
                ("dateFrom", "2025-01-01T00:00:00.000Z"),
            ]
        );
    }

    #[test]
    fn non_page_mutations_reset_to_first_page() {
        let mut query: AdminQuery<TicketFilter> = AdminQuery::default();
        query.set_page(5);

        query.set_search("vip");
        assert_eq!(query.page, 1);

        query.set_page(4);
        query.set_sort("price", SortOrder::Asc);
        assert_eq!(query.page, 1);

        query.set_page(2);
        query.set_filter(TicketFilter {
            min_price: Some(Money::from_minor(100_000)),
            ..TicketFilter::default()
        });
        assert_eq!(query.page, 1);
    }

    #[test]
    fn clearing_search_keeps_it_out_of_the_pairs() {
        let mut query: AdminQuery<EventFilter> = AdminQuery::default();
        query.set_search("gold");
        query.set_search("");
        assert_eq!(
            pairs_map(&query.to_query_pairs()),
            vec![("page", "1"), ("limit", "10")]
        );
    }

    #[test]
    fn page_floor_is_one() {
        let mut query: AdminQuery<()> = AdminQuery::default();
        query.set_page(0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn booking_filter_serializes_every_field() {
        let filter = BookingFilter {
            event_id: Some(EventId::new("e1")),
            ticket_id: Some(TicketId::new("t2")),
            status: Some(BookingStatus::Cancelled),
            email: Some("ada@example.com".to_string()),
            date_from: None,
            date_to: Some(Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap()),
        };
        let mut pairs = Vec::new();
        filter.push_pairs(&mut pairs);
        assert_eq!(
            pairs_map(&pairs),
            vec![
                ("eventId", "e1"),
                ("ticketId", "t2"),
                ("status", "cancelled"),
                ("email", "ada@example.com"),
                ("dateTo", "2025-02-01T12:00:00.000Z"),
            ]
        );
    }
}

//! # Boxoffice App
//!
//! Feature stores for the ticketing front-of-house. Each view owns one
//! store built from a pure reducer plus an environment of injected
//! dependencies (clock, session storage, API gateways):
//!
//! - [`home`]: the landing view: eligible events, the featured event, and
//!   a live countdown tied to the view lifecycle
//! - [`admin_list`]: the generic admin list view over any resource, with
//!   search/filter/sort/pagination and a last-issued-wins guard against
//!   stale responses
//! - [`booking`]: the public booking flow: context loading, draft
//!   validation, submission, and reference-code confirmation lookup
//! - [`auth`]: the admin session: login, sign-out, and invalidation
//! - [`banner`]: the public notification banner
//!
//! No state is shared across stores; views communicate only through the
//! remote API they all consume.

pub mod admin_list;
pub mod auth;
pub mod banner;
pub mod booking;
pub mod home;

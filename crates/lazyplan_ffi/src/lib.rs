//! Flutter bridge surface for LazyPlan core.

pub mod api;

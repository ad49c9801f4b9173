//! Dashboard request/view models and the assembly service.
//!
//! - `dashboard_model`: request, view, and notice types
//! - `dashboard_service`: resolves the market, runs the three fetch
//!   groups, and assembles the display-ready view

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::{
    DashboardRequest, DashboardView, FetchGroup, FetchNotice, HistoryParams, Metric,
    MetricPanel, StatementSection,
};
pub use dashboard_service::{DashboardService, DashboardServiceTrait};

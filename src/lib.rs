//! Chatra Shayak: scholarship finder for students in India.
//!
//! A student fills in a two-step profile form. The profile becomes a
//! natural-language query, the query goes through a small proxy to a web
//! search provider restricted to scholarship portals, and the results come
//! back as cards.
//!
//! # Architecture
//!
//! - **Profile / query**: [`profile::Profile`] and [`query::build_search_query`]
//! - **Wizard**: [`ui::FormWizard`] validates each step
//! - **Page**: [`page::Page`] moves between landing, form, and results
//! - **Proxy**: [`proxy::SearchProxy`] calls the provider via `scholar-search`
//! - **Server**: [`server::SearchServer`] serves `/api/search` and the page
//!
//! The page is also drivable from a terminal through [`backend::HttpBackend`].

pub mod backend;
pub mod config;
pub mod error;
pub mod page;
pub mod profile;
pub mod proxy;
pub mod query;
pub mod server;
pub mod ui;

pub use backend::{HttpBackend, ProxyBackend, SearchBackend};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use page::{Page, PageEvent, PageStep};
pub use profile::{Profile, ProfileField};
pub use proxy::SearchProxy;
pub use server::SearchServer;

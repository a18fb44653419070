//! # investai-client
//!
//! Leptos + WASM front-end for the InvestAI investment-tracking application:
//! portfolio dashboard, transaction logging, CSV import, report generation,
//! notifications, and admin user management over the InvestAI REST API.
//!
//! The one real authority in this crate is the session store in
//! [`state::session`]; every API-backed page reads its derived state, and the
//! route guards in [`state::guard`] gate navigation on it. Everything network
//! lives in [`net`], pages in [`pages`].

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

//! # vestool-core
//!
//! Client-side core of the VesTool APK catalog browser.
//!
//! - **model**: app and version records as served by the catalog API
//! - **resolver**: picks the best download URL for an app or version
//! - **classify**: rule-based storefront categories
//! - **version_order**: numeric ordering of version names
//! - **catalog**: search, category browsing and the detail view
//! - **api**: HTTP client for the catalog API, plus on-disk catalog files
//! - **url_model**: link classification, query encoding, APK filenames

pub mod config;
pub mod logging;

pub mod api;
pub mod catalog;
pub mod classify;
pub mod model;
pub mod resolver;
pub mod url_model;
pub mod version_order;

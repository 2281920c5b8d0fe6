//! CardioPredict - Rust Implementation
//!
//! A web client for AI-powered cardiovascular risk prediction.
//!
//! This library provides:
//! - Navigation state synchronizer (scroll/route/click driven active link)
//! - Dioxus fullstack UI (landing page, prediction form, results)
//! - Server-side proxy to the remote prediction service

pub mod app;
pub mod nav;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

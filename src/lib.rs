// SPDX-License-Identifier: MPL-2.0
//! `toastkit` is the toast notification core of a media discovery front end.
//!
//! It keeps a bounded, newest-first queue of notifications, drives their
//! progress, auto-dismiss and removal timers, and publishes every change to
//! subscribers. Rendering is left to the presentation layer.

#![doc(html_root_url = "https://docs.rs/toastkit/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod notifications;

#[cfg(test)]
mod test_utils;

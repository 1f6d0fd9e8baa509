// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! Everything here is plain `std` so the types can be shared by the
//! configuration layer, the notification core and diagnostics without
//! pulling in serialization or runtime crates.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`notifications`]: Queue and timing bounds ([`QueueCapacity`](notifications::QueueCapacity),
//!   [`ProgressInterval`](notifications::ProgressInterval))

pub mod diagnostics;
pub mod notifications;

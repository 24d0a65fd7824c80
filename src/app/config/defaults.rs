// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Copy acknowledgment**: how long the "Copied!" badge stays visible
//! - **Window**: initial and minimum window size
//! - **Loader**: animation tick interval for the loader demos

// ==========================================================================
// Copy Acknowledgment Defaults
// ==========================================================================

/// Default time the copy acknowledgment stays visible (in milliseconds).
pub const DEFAULT_COPY_ACK_MS: u64 = 1500;

/// Minimum copy acknowledgment time (in milliseconds).
pub const MIN_COPY_ACK_MS: u64 = 250;

/// Maximum copy acknowledgment time (in milliseconds).
pub const MAX_COPY_ACK_MS: u64 = 10_000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Loader Animation Defaults
// ==========================================================================

/// Interval between loader animation frames (about 30 fps).
pub const LOADER_TICK_MS: u64 = 33;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_COPY_ACK_MS > 0);
    assert!(MAX_COPY_ACK_MS >= MIN_COPY_ACK_MS);
    assert!(DEFAULT_COPY_ACK_MS >= MIN_COPY_ACK_MS);
    assert!(DEFAULT_COPY_ACK_MS <= MAX_COPY_ACK_MS);

    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);

    assert!(LOADER_TICK_MS > 0);
};

//! # viewmatch
//!
//! ## Purpose
//!
//! `viewmatch` provides capability-bounded matchers for an automated UI test
//! suite: predicates that assert visual and state properties of on-screen
//! widgets. The crate covers two assertions — that an image-bearing view's
//! rendered pixels are uniformly a given color, and that a toggleable text
//! view is (or is not) checked. The surrounding toolkit (rendering, layout,
//! widget construction, the test runner driving the matchers) is an external
//! collaborator; this crate is the thin declarative layer between them.
//!
//! Every matcher follows the swallow-and-describe policy: no failure mode
//! ever escapes [`Matcher::matches`] as an error. Type mismatches, missing
//! drawables, rasterization failures, and plain content mismatches all come
//! back as `false`, with a human-readable reason stored for the framework's
//! failure report.
//!
//! ## Core Types
//!
//! - [`Color`]: packed 32-bit ARGB, exact equality only, alpha significant.
//! - [`View`], [`ImageView`], [`CheckableTextView`], [`Drawable`]: the
//!   capability traits a host toolkit implements for its widgets.
//! - [`Matcher`]: the predicate surface — `matches` plus `describe_to` into a
//!   [`Description`] sink.
//! - [`drawable_of_color`]: matches image views whose drawable rasterizes to
//!   one uniform color at the view's current pixel size.
//! - [`checked_text_view`] / [`non_checked_text_view`]: match checkable text
//!   views by their current checked state.
//! - [`check_all_pixels_of_color`]: the underlying pixel-sampling routine,
//!   returning a typed [`PixelError`] whose `Display` text doubles as the
//!   matcher's diagnostic.
//!
//! ## Example Usage
//!
//! ```
//! use viewmatch::testkit::{FakeCheckedTextView, FakeImageView, SolidColorDrawable};
//! use viewmatch::{checked_text_view, drawable_of_color, Color, Description, Matcher};
//!
//! // A 24x24 badge flat-filled with opaque red.
//! let badge = FakeImageView::new(SolidColorDrawable::new(Color::RED), 24, 24);
//! let mut color_matcher = drawable_of_color(Color::RED);
//! assert!(color_matcher.matches(&badge));
//!
//! // An unchecked list row fails the checked-state assertion with a reason.
//! let row = FakeCheckedTextView::new(false);
//! let mut state_matcher = checked_text_view();
//! assert!(!state_matcher.matches(&row));
//!
//! let mut description = Description::new();
//! state_matcher.describe_to(&mut description);
//! assert_eq!(description.to_string(), "checked text view: not checked");
//! ```
//!
//! ## Observability
//!
//! Matchers emit `tracing` events (`debug!` for failed comparisons with the
//! stored reason as a field, `trace!` for successes). No subscriber is
//! installed here; the test harness owns that.

pub mod color;
pub mod engine;
pub mod pixels;
pub mod view;

#[doc(hidden)]
pub mod testkit;

pub use crate::color::Color;
pub use crate::engine::{
    checked_text_view, drawable_of_color, non_checked_text_view, CheckedStateMatcher,
    Description, DrawableColorMatcher, Matcher,
};
pub use crate::pixels::{check_all_pixels_of_color, PixelError};
pub use crate::view::{CheckableTextView, Drawable, ImageView, RasterizeError, View};

//! The matchers and the surface the assertion framework drives them through.
//!
//! Every matcher follows the same shape: a capability check against the
//! candidate first, then a single synchronous read of the widget's state. No
//! failure mode escapes [`Matcher::matches`] as an error; everything is
//! converted into a `false` result plus a stored human-readable reason, so
//! the enclosing framework can render a uniform failure report. The stored
//! reason is valid to read only immediately after a `false` result and is
//! cleared by every `true` result.

use std::fmt;

use tracing::{debug, trace};

use crate::color::Color;
use crate::pixels::check_all_pixels_of_color;
use crate::view::View;

#[cfg(test)]
mod tests;

/// Append-only text sink a matcher writes its diagnostic into.
#[derive(Debug, Default)]
pub struct Description {
    text: String,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A predicate over candidate widgets, evaluated by the assertion framework.
///
/// `matches` takes `&mut self` because a matcher keeps the reason for its
/// most recent failed comparison; instances are meant for single-threaded,
/// one-assertion-at-a-time use, constructed once per assertion expression.
pub trait Matcher {
    /// Evaluate the predicate against `candidate`.
    fn matches(&mut self, candidate: &dyn View) -> bool;

    /// Write a diagnostic for the most recent evaluation into `description`.
    fn describe_to(&self, description: &mut Description);
}

/// Matches image-displaying widgets whose drawable is flat-filled with one
/// exact color, alpha included.
pub struct DrawableColorMatcher {
    expected: Color,
    failed_comparison: Option<String>,
}

/// Matcher for image views whose drawable rasterizes to a uniform `expected`
/// color at the view's current pixel size.
pub fn drawable_of_color(expected: Color) -> DrawableColorMatcher {
    DrawableColorMatcher {
        expected,
        failed_comparison: None,
    }
}

impl Matcher for DrawableColorMatcher {
    fn matches(&mut self, candidate: &dyn View) -> bool {
        // Capability check; a candidate that is not an image view is a
        // silent non-match and the framework reports the widget kind itself.
        let Some(image_view) = candidate.as_image_view() else {
            return false;
        };

        let Some(drawable) = image_view.drawable() else {
            debug!(reason = "no drawable", "drawable_color_match_failure");
            self.failed_comparison = Some("no drawable".to_string());
            return false;
        };

        let width = image_view.pixel_width();
        let height = image_view.pixel_height();
        match check_all_pixels_of_color(drawable, width, height, self.expected) {
            Ok(()) => {
                trace!(expected = %self.expected, width, height, "drawable_color_match_success");
                self.failed_comparison = None;
                true
            }
            Err(err) => {
                let reason = err.to_string();
                debug!(expected = %self.expected, reason = %reason, "drawable_color_match_failure");
                self.failed_comparison = Some(reason);
                false
            }
        }
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("with drawable of color: ");
        // After a success the reason is cleared, so only the prefix renders.
        // The framework only asks for descriptions on failure.
        if let Some(reason) = &self.failed_comparison {
            description.append_text(reason);
        }
    }
}

/// Matches checkable text widgets by their current checked state.
pub struct CheckedStateMatcher {
    expect_checked: bool,
    failed: Option<&'static str>,
}

/// Matcher for checkable text views that are currently checked.
pub fn checked_text_view() -> CheckedStateMatcher {
    CheckedStateMatcher {
        expect_checked: true,
        failed: None,
    }
}

/// Matcher for checkable text views that are currently not checked.
pub fn non_checked_text_view() -> CheckedStateMatcher {
    CheckedStateMatcher {
        expect_checked: false,
        failed: None,
    }
}

impl Matcher for CheckedStateMatcher {
    fn matches(&mut self, candidate: &dyn View) -> bool {
        let Some(checkable) = candidate.as_checkable_text() else {
            return false;
        };

        if checkable.is_checked() == self.expect_checked {
            trace!(
                expect_checked = self.expect_checked,
                "checked_state_match_success"
            );
            self.failed = None;
            true
        } else {
            let reason = if self.expect_checked {
                "not checked"
            } else {
                "checked"
            };
            debug!(reason, "checked_state_match_failure");
            self.failed = Some(reason);
            false
        }
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text(if self.expect_checked {
            "checked text view: "
        } else {
            "non checked text view: "
        });
        if let Some(reason) = self.failed {
            description.append_text(reason);
        }
    }
}

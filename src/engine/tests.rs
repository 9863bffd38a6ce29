use super::*;
use crate::testkit::{
    FailingDrawable, FakeCheckedTextView, FakeImageView, FakeView, SolidColorDrawable,
};

fn describe(matcher: &dyn Matcher) -> String {
    let mut description = Description::new();
    matcher.describe_to(&mut description);
    description.to_string()
}

#[test]
fn uniform_drawable_of_expected_color_matches() {
    let view = FakeImageView::new(SolidColorDrawable::new(Color::RED), 16, 9);
    let mut matcher = drawable_of_color(Color::RED);
    assert!(matcher.matches(&view));
    assert_eq!(describe(&matcher), "with drawable of color: ");
}

#[test]
fn differing_color_fails_with_pixel_diagnostic() {
    let view = FakeImageView::new(SolidColorDrawable::new(Color::BLUE), 4, 4);
    let mut matcher = drawable_of_color(Color::RED);
    assert!(!matcher.matches(&view));
    assert_eq!(
        describe(&matcher),
        "with drawable of color: expected all pixels of color #FFFF0000, found #FF0000FF at (0, 0)"
    );
}

#[test]
fn missing_drawable_fails_with_no_drawable_reason() {
    let view = FakeImageView::empty(8, 8);
    let mut matcher = drawable_of_color(Color::WHITE);
    assert!(!matcher.matches(&view));
    assert_eq!(describe(&matcher), "with drawable of color: no drawable");
}

#[test]
fn rasterize_failure_becomes_the_failure_reason() {
    let view = FakeImageView::new(FailingDrawable::new("surface detached"), 8, 8);
    let mut matcher = drawable_of_color(Color::WHITE);
    assert!(!matcher.matches(&view));
    assert_eq!(
        describe(&matcher),
        "with drawable of color: drawable rendering failed: surface detached"
    );
}

#[test]
fn success_clears_a_previous_failure_reason() {
    let wrong = FakeImageView::new(SolidColorDrawable::new(Color::GREEN), 4, 4);
    let right = FakeImageView::new(SolidColorDrawable::new(Color::BLACK), 4, 4);
    let mut matcher = drawable_of_color(Color::BLACK);

    assert!(!matcher.matches(&wrong));
    assert_ne!(describe(&matcher), "with drawable of color: ");

    assert!(matcher.matches(&right));
    assert_eq!(describe(&matcher), "with drawable of color: ");
}

#[test]
fn alpha_differences_fail_the_color_match() {
    let view = FakeImageView::new(
        SolidColorDrawable::new(Color::RED.with_alpha(0x7F)),
        4,
        4,
    );
    let mut matcher = drawable_of_color(Color::RED);
    assert!(!matcher.matches(&view));
}

#[test]
fn non_image_candidate_is_a_silent_non_match() {
    let mut matcher = drawable_of_color(Color::RED);
    assert!(!matcher.matches(&FakeView));
    assert!(!matcher.matches(&FakeCheckedTextView::new(true)));
    // No pixel comparison ran, so nothing was recorded.
    assert_eq!(describe(&matcher), "with drawable of color: ");
}

#[test]
fn checked_matcher_accepts_checked_view() {
    let view = FakeCheckedTextView::new(true);
    let mut matcher = checked_text_view();
    assert!(matcher.matches(&view));
    assert_eq!(describe(&matcher), "checked text view: ");
}

#[test]
fn checked_matcher_rejects_unchecked_view_with_reason() {
    let view = FakeCheckedTextView::new(false);
    let mut matcher = checked_text_view();
    assert!(!matcher.matches(&view));
    assert_eq!(describe(&matcher), "checked text view: not checked");
}

#[test]
fn non_checked_matcher_accepts_unchecked_view() {
    let view = FakeCheckedTextView::new(false);
    let mut matcher = non_checked_text_view();
    assert!(matcher.matches(&view));
    assert_eq!(describe(&matcher), "non checked text view: ");
}

#[test]
fn non_checked_matcher_rejects_checked_view_with_reason() {
    let view = FakeCheckedTextView::new(true);
    let mut matcher = non_checked_text_view();
    assert!(!matcher.matches(&view));
    assert_eq!(describe(&matcher), "non checked text view: checked");
}

#[test]
fn non_checkable_candidate_is_a_silent_non_match() {
    let image = FakeImageView::empty(1, 1);
    let mut matcher = checked_text_view();
    assert!(!matcher.matches(&FakeView));
    assert!(!matcher.matches(&image));
    assert_eq!(describe(&matcher), "checked text view: ");
}

#[test]
fn matchers_are_usable_as_trait_objects() {
    let view = FakeCheckedTextView::new(true);
    let mut matchers: Vec<Box<dyn Matcher>> = vec![
        Box::new(checked_text_view()),
        Box::new(non_checked_text_view()),
        Box::new(drawable_of_color(Color::WHITE)),
    ];
    let results: Vec<bool> = matchers.iter_mut().map(|m| m.matches(&view)).collect();
    assert_eq!(results, vec![true, false, false]);
}

//! Pure helpers behind the scroll observers (back-to-top, navbar shadow,
//! progress bar, active section). The components feed them the shared
//! window scroll signal.

/// Past this many pixels the back-to-top button shows.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
/// Past this many pixels the navbar gets its shadow.
pub const NAV_ELEVATION_THRESHOLD: f64 = 50.0;
/// Height of the fixed navbar; sections under it count as current.
pub const NAV_HEIGHT: f64 = 64.0;

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

pub fn nav_elevated(scroll_y: f64) -> bool {
    scroll_y > NAV_ELEVATION_THRESHOLD
}

/// Percentage of the page scrolled, clamped to `0..=100`. A page that does
/// not scroll reports 0.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let total = scroll_height - viewport_height;
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    (scroll_y / total * 100.0).clamp(0.0, 100.0)
}

/// Picks the last section whose top edge (document coordinates) has passed
/// under the navbar. `sections` must be in page order.
pub fn active_section<'a>(sections: &[(&'a str, f64)], scroll_y: f64) -> Option<&'a str> {
    let line = scroll_y + NAV_HEIGHT + 1.0;
    sections
        .iter()
        .take_while(|(_, top)| *top <= line)
        .last()
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_exclusive() {
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(300.5));
        assert!(!nav_elevated(50.0));
        assert!(nav_elevated(51.0));
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress_percent(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(1000.0, 2000.0, 1000.0), 100.0);
        // overscroll on mobile
        assert_eq!(progress_percent(1200.0, 2000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(-20.0, 2000.0, 1000.0), 0.0);
        // short page
        assert_eq!(progress_percent(0.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_active_section() {
        let sections = [
            ("skills", 700.0),
            ("experience", 1400.0),
            ("projects", 2100.0),
            ("contact", 2800.0),
        ];
        assert_eq!(active_section(&sections, 0.0), None);
        assert_eq!(active_section(&sections, 640.0), Some("skills"));
        assert_eq!(active_section(&sections, 1500.0), Some("experience"));
        assert_eq!(active_section(&sections, 5000.0), Some("contact"));
        assert_eq!(active_section(&[], 100.0), None);
    }
}

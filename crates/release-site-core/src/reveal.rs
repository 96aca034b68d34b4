/// Elements that fade in once scrolled into view.
pub const FADE_IN: &str = ".fade-in-element";
pub const ACTIVE_CLASS: &str = "active";

/// How far (px) an element must be inside the viewport before it is revealed.
pub const REVEAL_OFFSET: f64 = 150.0;

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_past_the_offset() {
        assert!(should_reveal(100.0, 800.0));
        assert!(should_reveal(-50.0, 800.0));
        assert!(!should_reveal(650.0, 800.0));
        assert!(!should_reveal(700.0, 800.0));
    }
}

// Easing curves for the wheel motion and the tick slowdown. Inputs are clamped to [0, 1].

/// Strong deceleration used for the wheel itself: 1 - (1-t)^4
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Gentler curve for the tick interval growth: 1 - (1-t)^3
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_and_clamping() {
        for ease in [ease_out_quart, ease_out_cubic] {
            assert_eq!(ease(0.0), 0.0);
            assert_eq!(ease(1.0), 1.0);
            assert_eq!(ease(-3.0), 0.0);
            assert_eq!(ease(7.0), 1.0);
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        assert!(ease_out_quart(0.5) > 0.9);
        assert!(ease_out_cubic(0.5) > 0.85);
        assert!(ease_out_quart(0.3) < ease_out_quart(0.6));
    }
}

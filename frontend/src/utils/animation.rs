/// Stats counters run for two seconds in sixty steps.
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEPS: u32 = 60;

/// Testimonials advance on this period.
pub const TESTIMONIAL_ROTATE_MS: u32 = 5000;

/// Value a counter shows at `step` of `steps` on its way to `target`.
pub fn counter_value(target: u32, step: u32, steps: u32) -> u32 {
    if steps == 0 || step >= steps {
        return target;
    }
    let increment = f64::from(target) / f64::from(steps);
    ((increment * f64::from(step)).floor() as u32).min(target)
}

pub fn counter_step_ms(duration_ms: u32, steps: u32) -> u32 {
    duration_ms / steps.max(1)
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_climbs_to_target() {
        assert_eq!(counter_value(100, 0, 60), 0);
        assert_eq!(counter_value(100, 30, 60), 50);
        assert_eq!(counter_value(100, 59, 60), 98);
        assert_eq!(counter_value(100, 60, 60), 100);
        assert_eq!(counter_value(5, 13, 60), 1);
    }

    #[test]
    fn counter_is_monotonic() {
        let mut last = 0;
        for step in 0..=COUNTER_STEPS {
            let v = counter_value(98, step, COUNTER_STEPS);
            assert!(v >= last);
            last = v;
        }
        assert_eq!(last, 98);
    }

    #[test]
    fn zero_steps_jumps_to_target() {
        assert_eq!(counter_value(50, 0, 0), 50);
        assert_eq!(counter_step_ms(2000, 0), 2000);
        assert_eq!(counter_step_ms(COUNTER_DURATION_MS, COUNTER_STEPS), 33);
    }

    #[test]
    fn carousel_wraps() {
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(next_index(1, 5), 2);
        assert_eq!(prev_index(0, 5), 4);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}

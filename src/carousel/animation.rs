use serde::{Deserialize, Serialize};

// Transition
//------------------------------------------------------------------------------

/// How the visible symbol leaves and its successor enters.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transition {
    /// Slide out towards the opposite side, re-enter from the travel side.
    #[default]
    Slide,
    /// Fade to transparent, fade back in.
    Fade,
    /// Shrink to zero, grow back to full size.
    Scale,
    /// Swap instantly; the state machine never leaves idle.
    None,
}

/// Horizontal travel of a full slide transition, in drawing units.
pub const SLIDE_DISTANCE: f32 = 300.0;

/// Default transition duration, in host time-units.
pub const DEFAULT_DURATION: f32 = 150.0;

// Easing
//------------------------------------------------------------------------------

/// Easing curve applied to each animation phase.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Maps linear progress t in [0, 1] onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Ease => t * t * (3.0 - 2.0 * t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

// Visual sampling
//------------------------------------------------------------------------------

/// Per-frame transform the host applies to the visible symbol.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Visual {
    /// Horizontal offset in drawing units; nonzero only for slide.
    pub offset_x: f32,
    /// 0.0 transparent .. 1.0 opaque; varies only for fade.
    pub opacity: f32,
    /// 0.0 collapsed .. 1.0 full size; varies only for scale.
    pub scale: f32,
}

impl Visual {
    /// The at-rest transform: centered, opaque, full size.
    pub const IDLE: Visual = Visual { offset_x: 0.0, opacity: 1.0, scale: 1.0 };

    /// Samples the outbound phase at eased progress `p`, moving in direction
    /// `dir` (+1 forward, -1 backward). Slide travels against the direction
    /// of navigation, like a page being pushed away.
    pub(crate) fn outbound(transition: Transition, dir: f32, p: f32) -> Visual {
        match transition {
            Transition::Slide => Visual { offset_x: -dir * SLIDE_DISTANCE * p, ..Visual::IDLE },
            Transition::Fade => Visual { opacity: 1.0 - p, ..Visual::IDLE },
            Transition::Scale => Visual { scale: 1.0 - p, ..Visual::IDLE },
            Transition::None => Visual::IDLE,
        }
    }

    /// Samples the inbound phase at eased progress `p`. Slide re-enters
    /// mirrored from the opposite side of where the old symbol left.
    pub(crate) fn inbound(transition: Transition, dir: f32, p: f32) -> Visual {
        match transition {
            Transition::Slide => {
                Visual { offset_x: dir * SLIDE_DISTANCE * (1.0 - p), ..Visual::IDLE }
            }
            Transition::Fade => Visual { opacity: p, ..Visual::IDLE },
            Transition::Scale => Visual { scale: p, ..Visual::IDLE },
            Transition::None => Visual::IDLE,
        }
    }
}

#[cfg(test)]
mod animation_tests {
    use test_case::test_case;

    use super::*;

    #[test_case(Easing::Linear; "linear")]
    #[test_case(Easing::Ease; "ease")]
    #[test_case(Easing::EaseIn; "ease in")]
    #[test_case(Easing::EaseOut; "ease out")]
    #[test_case(Easing::EaseInOut; "ease in out")]
    fn test_easing_endpoints(easing: Easing) {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_easing_clamps_out_of_range_progress() {
        assert_eq!(Easing::EaseIn.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOut.apply(1.5), 1.0);
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [Easing::Linear, Easing::Ease, Easing::EaseIn, Easing::EaseOut] {
            let mut last = 0.0;
            for step in 0..=20 {
                let value = easing.apply(step as f32 / 20.0);
                assert!(value >= last, "{easing:?} not monotonic at step {step}");
                last = value;
            }
        }
    }

    #[test]
    fn test_slide_outbound_travels_against_direction() {
        let half = Visual::outbound(Transition::Slide, 1.0, 0.5);
        assert_eq!(half.offset_x, -SLIDE_DISTANCE / 2.0);
        assert_eq!(half.opacity, 1.0);
        let done = Visual::outbound(Transition::Slide, -1.0, 1.0);
        assert_eq!(done.offset_x, SLIDE_DISTANCE);
    }

    #[test]
    fn test_slide_inbound_mirrors_from_opposite_side() {
        let start = Visual::inbound(Transition::Slide, 1.0, 0.0);
        assert_eq!(start.offset_x, SLIDE_DISTANCE);
        let done = Visual::inbound(Transition::Slide, 1.0, 1.0);
        assert_eq!(done, Visual::IDLE);
    }

    #[test]
    fn test_fade_and_scale_phases() {
        assert_eq!(Visual::outbound(Transition::Fade, 1.0, 1.0).opacity, 0.0);
        assert_eq!(Visual::inbound(Transition::Fade, 1.0, 1.0).opacity, 1.0);
        assert_eq!(Visual::outbound(Transition::Scale, 1.0, 1.0).scale, 0.0);
        assert_eq!(Visual::inbound(Transition::Scale, 1.0, 0.0).scale, 0.0);
    }
}

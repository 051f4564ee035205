use tempera_engine::paint::{ChannelRanges, ColorSpace};

/// How a mode switch updates the target space's channel ranges.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum RangeSpec {
    /// Keep the current ranges.
    #[default]
    Unchanged,
    /// One maximum for all three channels and alpha.
    Uniform(f32),
    /// Maxima for the three channels; alpha keeps its current maximum.
    Channels(f32, f32, f32),
    /// Maxima for the three channels and alpha.
    All(f32, f32, f32, f32),
}

impl RangeSpec {
    /// Maps positional range values by count: 0, 1, 3 or 4.
    ///
    /// Any other count has no meaning and yields `None`.
    pub fn from_values(values: &[f32]) -> Option<Self> {
        match *values {
            [] => Some(RangeSpec::Unchanged),
            [max] => Some(RangeSpec::Uniform(max)),
            [m1, m2, m3] => Some(RangeSpec::Channels(m1, m2, m3)),
            [m1, m2, m3, ma] => Some(RangeSpec::All(m1, m2, m3, ma)),
            _ => None,
        }
    }

    fn apply(self, current: ChannelRanges) -> ChannelRanges {
        match self {
            RangeSpec::Unchanged => current,
            RangeSpec::Uniform(max) => ChannelRanges::uniform(max),
            RangeSpec::Channels(m1, m2, m3) => current.with_channels(m1, m2, m3),
            RangeSpec::All(m1, m2, m3, ma) => ChannelRanges::new(m1, m2, m3, ma),
        }
    }
}

impl From<()> for RangeSpec {
    fn from(_: ()) -> Self {
        RangeSpec::Unchanged
    }
}

impl From<f32> for RangeSpec {
    fn from(max: f32) -> Self {
        RangeSpec::Uniform(max)
    }
}

impl From<(f32, f32, f32)> for RangeSpec {
    fn from((m1, m2, m3): (f32, f32, f32)) -> Self {
        RangeSpec::Channels(m1, m2, m3)
    }
}

impl From<(f32, f32, f32, f32)> for RangeSpec {
    fn from((m1, m2, m3, ma): (f32, f32, f32, f32)) -> Self {
        RangeSpec::All(m1, m2, m3, ma)
    }
}

/// Active color space plus one set of channel ranges per space.
///
/// Each space owns its ranges: changing HSB's maxima never touches RGB's or HSL's.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorModeRegistry {
    active: ColorSpace,
    ranges: [ChannelRanges; 3],
}

impl Default for ColorModeRegistry {
    fn default() -> Self {
        Self {
            active: ColorSpace::Rgb,
            ranges: ColorSpace::ALL.map(ChannelRanges::default_for),
        }
    }
}

impl ColorModeRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to `space` and updates that space's ranges per `spec`.
    ///
    /// Ranges containing a non-positive or non-finite maximum are ignored; the
    /// mode switch itself still happens.
    pub fn set_mode(&mut self, space: ColorSpace, spec: RangeSpec) {
        self.active = space;

        let slot = &mut self.ranges[space.index()];
        let next = spec.apply(*slot);
        if next.is_valid() {
            *slot = next;
        } else {
            log::warn!("ignoring invalid channel ranges {:?} for {}", next.as_array(), space);
        }

        log::debug!("color mode {} with ranges {:?}", space, slot.as_array());
    }

    /// Untyped variant of [`set_mode`](Self::set_mode).
    ///
    /// - an unknown `name` makes the whole call a no-op
    /// - `values` of any length other than 0, 1, 3 or 4 leaves the ranges alone
    ///   but still switches the mode
    pub fn set_mode_named(&mut self, name: &str, values: &[f32]) {
        let space = match name.parse::<ColorSpace>() {
            Ok(space) => space,
            Err(err) => {
                log::debug!("{}; color mode unchanged", err);
                return;
            }
        };

        let spec = RangeSpec::from_values(values).unwrap_or_else(|| {
            log::debug!("ignoring {} range values for {}", values.len(), space);
            RangeSpec::Unchanged
        });
        self.set_mode(space, spec);
    }

    /// Currently active color space.
    #[inline]
    pub fn active(&self) -> ColorSpace {
        self.active
    }

    /// Ranges of the active color space.
    #[inline]
    pub fn current_ranges(&self) -> ChannelRanges {
        self.ranges(self.active)
    }

    /// Ranges of `space`, active or not.
    #[inline]
    pub fn ranges(&self, space: ColorSpace) -> ChannelRanges {
        self.ranges[space.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arr(r: &ColorModeRegistry) -> [f32; 4] {
        r.current_ranges().as_array()
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn starts_in_rgb_with_documented_ranges() {
        let r = ColorModeRegistry::new();
        assert_eq!(r.active(), ColorSpace::Rgb);
        assert_eq!(arr(&r), [255.0; 4]);
        assert_eq!(r.ranges(ColorSpace::Hsb).as_array(), [360.0, 100.0, 100.0, 1.0]);
        assert_eq!(r.ranges(ColorSpace::Hsl).as_array(), [360.0, 100.0, 100.0, 1.0]);
    }

    // ── arity mapping ─────────────────────────────────────────────────────

    #[test]
    fn scalar_sets_all_four() {
        let mut r = ColorModeRegistry::new();
        r.set_mode(ColorSpace::Rgb, 100.0.into());
        assert_eq!(arr(&r), [100.0; 4]);
    }

    #[test]
    fn triple_keeps_previous_alpha() {
        let mut r = ColorModeRegistry::new();
        r.set_mode(ColorSpace::Rgb, RangeSpec::Uniform(7.0));
        r.set_mode(ColorSpace::Rgb, (10.0, 20.0, 30.0).into());
        assert_eq!(arr(&r), [10.0, 20.0, 30.0, 7.0]);
    }

    #[test]
    fn quad_sets_each() {
        let mut r = ColorModeRegistry::new();
        r.set_mode(ColorSpace::Rgb, (10.0, 20.0, 30.0, 2.0).into());
        assert_eq!(arr(&r), [10.0, 20.0, 30.0, 2.0]);
    }

    #[test]
    fn unchanged_only_switches() {
        let mut r = ColorModeRegistry::new();
        r.set_mode(ColorSpace::Hsl, ().into());
        assert_eq!(r.active(), ColorSpace::Hsl);
        assert_eq!(arr(&r), [360.0, 100.0, 100.0, 1.0]);
    }

    #[test]
    fn from_values_by_count() {
        assert_eq!(RangeSpec::from_values(&[]), Some(RangeSpec::Unchanged));
        assert_eq!(RangeSpec::from_values(&[1.0]), Some(RangeSpec::Uniform(1.0)));
        assert_eq!(RangeSpec::from_values(&[1.0, 2.0]), None);
        assert_eq!(
            RangeSpec::from_values(&[1.0, 2.0, 3.0]),
            Some(RangeSpec::Channels(1.0, 2.0, 3.0))
        );
        assert_eq!(RangeSpec::from_values(&[1.0; 5]), None);
    }

    // ── independence ──────────────────────────────────────────────────────

    #[test]
    fn spaces_keep_independent_ranges() {
        for s1 in ColorSpace::ALL {
            for s2 in ColorSpace::ALL.into_iter().filter(|s| *s != s1) {
                let mut r = ColorModeRegistry::new();
                r.set_mode(s1, RangeSpec::All(1.0, 2.0, 3.0, 4.0));
                r.set_mode(s2, RangeSpec::Uniform(99.0));
                r.set_mode(s1, RangeSpec::Unchanged);
                assert_eq!(arr(&r), [1.0, 2.0, 3.0, 4.0], "{} disturbed by {}", s1, s2);
            }
        }
    }

    // ── permissive input ──────────────────────────────────────────────────

    #[test]
    fn unknown_name_is_a_no_op() {
        let mut r = ColorModeRegistry::new();
        r.set_mode(ColorSpace::Hsb, RangeSpec::Uniform(5.0));
        let before = r.clone();
        r.set_mode_named("bogus", &[50.0]);
        assert_eq!(r, before);
    }

    #[test]
    fn bad_arity_still_switches_mode() {
        let mut r = ColorModeRegistry::new();
        r.set_mode_named("hsb", &[10.0, 20.0]);
        assert_eq!(r.active(), ColorSpace::Hsb);
        assert_eq!(arr(&r), [360.0, 100.0, 100.0, 1.0]);
    }

    #[test]
    fn named_mode_applies_ranges() {
        let mut r = ColorModeRegistry::new();
        r.set_mode_named("HSL", &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(r.active(), ColorSpace::Hsl);
        assert_eq!(arr(&r), [1.0; 4]);
    }

    #[test]
    fn non_positive_ranges_are_ignored() {
        let mut r = ColorModeRegistry::new();
        r.set_mode(ColorSpace::Hsb, RangeSpec::Uniform(0.0));
        assert_eq!(r.active(), ColorSpace::Hsb);
        assert_eq!(arr(&r), [360.0, 100.0, 100.0, 1.0]);

        r.set_mode(ColorSpace::Rgb, RangeSpec::Channels(1.0, f32::NAN, 1.0));
        assert_eq!(arr(&r), [255.0; 4]);
    }
}

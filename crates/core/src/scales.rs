use std::fmt;

//
// ─── TABLES ───────────────────────────────────────────────────────────────────
//

/// Whole-stop shutter speeds as printed on a camera dial, slowest first.
const SHUTTER_LABELS: [&str; 13] = [
    "1\"", "1/2", "1/4", "1/8", "1/15", "1/30", "1/60", "1/125", "1/250", "1/500", "1/1000",
    "1/2000", "1/4000",
];

/// Whole-stop f-numbers, widest first. Labels match the display text exactly
/// (no trailing `.0`).
const APERTURE_LABELS: [&str; 10] = ["1.4", "2", "2.8", "4", "5.6", "8", "11", "16", "22", "32"];
const APERTURE_VALUES: [f64; 10] = [1.4, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0, 32.0];

/// Whole-stop ISO sensitivities, least sensitive first.
const ISO_VALUES: [u32; 9] = [50, 100, 200, 400, 800, 1600, 3200, 6400, 12500];

/// Shifts `index` by `stops` positions, rejecting anything outside the table.
fn offset_index(index: usize, stops: i32, count: usize) -> Option<usize> {
    let shifted = i64::try_from(index).ok()? + i64::from(stops);
    let shifted = usize::try_from(shifted).ok()?;
    (shifted < count).then_some(shifted)
}

//
// ─── SHUTTER SPEED ────────────────────────────────────────────────────────────
//

/// A whole-stop shutter speed, identified by its position on the scale.
///
/// Index 0 is the slowest speed (`1"`, the most light); each step up halves
/// the light reaching the sensor.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShutterSpeed(usize);

impl ShutterSpeed {
    /// Number of entries on the shutter scale.
    pub const COUNT: usize = SHUTTER_LABELS.len();

    /// Returns the speed at `index`, or `None` when out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    /// Position on the scale (0 = slowest).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Display text exactly as printed on a dial, e.g. `1/125`.
    #[must_use]
    pub fn label(self) -> &'static str {
        SHUTTER_LABELS[self.0]
    }

    /// Moves `stops` positions along the scale. Positive is faster (less
    /// light). Returns `None` when the result leaves the table.
    #[must_use]
    pub fn offset(self, stops: i32) -> Option<Self> {
        offset_index(self.0, stops, Self::COUNT).map(Self)
    }
}

impl fmt::Display for ShutterSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Debug for ShutterSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShutterSpeed({})", self.label())
    }
}

//
// ─── APERTURE ─────────────────────────────────────────────────────────────────
//

/// A whole-stop aperture, identified by its position on the scale.
///
/// Index 0 is the widest opening (f/1.4, the most light); each step up halves
/// the light reaching the sensor.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aperture(usize);

impl Aperture {
    /// Number of entries on the aperture scale.
    pub const COUNT: usize = APERTURE_LABELS.len();

    /// Returns the aperture at `index`, or `None` when out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    /// Position on the scale (0 = widest).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// The f-number without the `f/` prefix, e.g. `5.6`.
    #[must_use]
    pub fn label(self) -> &'static str {
        APERTURE_LABELS[self.0]
    }

    /// The f-number as a float, e.g. `5.6`.
    #[must_use]
    pub fn value(self) -> f64 {
        APERTURE_VALUES[self.0]
    }

    /// Moves `stops` positions along the scale. Positive is narrower (less
    /// light). Returns `None` when the result leaves the table.
    #[must_use]
    pub fn offset(self, stops: i32) -> Option<Self> {
        offset_index(self.0, stops, Self::COUNT).map(Self)
    }
}

impl fmt::Display for Aperture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f/{}", self.label())
    }
}

impl fmt::Debug for Aperture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aperture(f/{})", self.label())
    }
}

//
// ─── ISO ──────────────────────────────────────────────────────────────────────
//

/// A whole-stop ISO sensitivity, identified by its position on the scale.
///
/// Index 0 is the least sensitive (ISO 50); each step up doubles sensitivity
/// (one stop more light for the same exposure).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iso(usize);

impl Iso {
    /// Number of entries on the ISO scale.
    pub const COUNT: usize = ISO_VALUES.len();

    /// Returns the sensitivity at `index`, or `None` when out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    /// Position on the scale (0 = least sensitive).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// The numeric sensitivity, e.g. `800`.
    #[must_use]
    pub fn value(self) -> u32 {
        ISO_VALUES[self.0]
    }

    /// Moves `stops` positions along the scale. Positive is more sensitive
    /// (one stop of light gained per step). Returns `None` when the result
    /// leaves the table.
    #[must_use]
    pub fn offset(self, stops: i32) -> Option<Self> {
        offset_index(self.0, stops, Self::COUNT).map(Self)
    }
}

impl fmt::Display for Iso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ISO {}", self.value())
    }
}

impl fmt::Debug for Iso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iso({})", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_expected_sizes() {
        assert_eq!(ShutterSpeed::COUNT, 13);
        assert_eq!(Aperture::COUNT, 10);
        assert_eq!(Iso::COUNT, 9);
    }

    #[test]
    fn from_index_checks_bounds() {
        assert!(ShutterSpeed::from_index(12).is_some());
        assert!(ShutterSpeed::from_index(13).is_none());
        assert!(Aperture::from_index(10).is_none());
        assert!(Iso::from_index(9).is_none());
    }

    #[test]
    fn offset_moves_whole_stops() {
        let shutter = ShutterSpeed::from_index(6).unwrap();
        assert_eq!(shutter.label(), "1/60");
        assert_eq!(shutter.offset(1).unwrap().label(), "1/125");
        assert_eq!(shutter.offset(-2).unwrap().label(), "1/15");
    }

    #[test]
    fn offset_rejects_out_of_range() {
        let widest = Aperture::from_index(0).unwrap();
        assert!(widest.offset(-1).is_none());
        assert!(widest.offset(Aperture::COUNT as i32).is_none());
        let top_iso = Iso::from_index(Iso::COUNT - 1).unwrap();
        assert!(top_iso.offset(1).is_none());
        assert_eq!(top_iso.offset(-1).unwrap().value(), 6400);
    }

    #[test]
    fn display_matches_photographic_notation() {
        assert_eq!(ShutterSpeed::from_index(0).unwrap().to_string(), "1\"");
        assert_eq!(Aperture::from_index(4).unwrap().to_string(), "f/5.6");
        assert_eq!(Iso::from_index(1).unwrap().to_string(), "ISO 100");
    }

    #[test]
    fn aperture_labels_match_values() {
        for index in 0..Aperture::COUNT {
            let aperture = Aperture::from_index(index).unwrap();
            let parsed: f64 = aperture.label().parse().unwrap();
            assert!((parsed - aperture.value()).abs() < 1e-9);
        }
    }
}

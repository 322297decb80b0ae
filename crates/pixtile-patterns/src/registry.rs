//! The catalogue of named pattern generators.

use pixtile_core::{Palette, Surface, shuffle};

use crate::patterns::{animated, dots, lines, shapes, tilings};

/// Draws a complete still image.
pub type StaticDraw = fn(&mut Surface, &Palette);

/// Draws the image for one frame of an animation.
pub type AnimatedDraw = fn(&mut Surface, &Palette, u64);

/// Names of the time-varying patterns in the built-in catalogue.
pub const ANIMATED_PATTERNS: [&str; 3] = ["radial", "wave", "animatedGrid"];

/// How a pattern is drawn.
#[derive(Debug, Clone, Copy)]
pub enum PatternKind {
    /// Drawn once.
    Static(StaticDraw),
    /// Redrawn every frame with an increasing frame index.
    Animated(AnimatedDraw),
}

/// A named generator.
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    name: &'static str,
    kind: PatternKind,
}

impl PatternSpec {
    pub const fn still(name: &'static str, draw: StaticDraw) -> Self {
        Self {
            name,
            kind: PatternKind::Static(draw),
        }
    }

    pub const fn animated(name: &'static str, draw: AnimatedDraw) -> Self {
        Self {
            name,
            kind: PatternKind::Animated(draw),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn is_animated(&self) -> bool {
        matches!(self.kind, PatternKind::Animated(_))
    }

    /// Paint onto `surface`. Static patterns ignore `frame`.
    pub fn draw(&self, surface: &mut Surface, palette: &Palette, frame: u64) {
        match self.kind {
            PatternKind::Static(draw) => draw(surface, palette),
            PatternKind::Animated(draw) => draw(surface, palette, frame),
        }
    }
}

impl PartialEq for PatternSpec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PatternSpec {}

const BUILTIN: &[PatternSpec] = &[
    PatternSpec::still("horizontalLines", lines::horizontal_lines),
    PatternSpec::still("diagonalLines", lines::diagonal_lines),
    PatternSpec::still("verticalLines", lines::vertical_lines),
    PatternSpec::still("diagonalStripes", lines::diagonal_stripes),
    PatternSpec::still("moire", shapes::moire),
    PatternSpec::still("smallDots", dots::small_dots),
    PatternSpec::still("mediumDots", dots::medium_dots),
    PatternSpec::still("largeDots", dots::large_dots),
    PatternSpec::still("topStripe", shapes::top_stripe),
    PatternSpec::still("bottomStripe", shapes::bottom_stripe),
    PatternSpec::still("leftStripe", shapes::left_stripe),
    PatternSpec::still("rightStripe", shapes::right_stripe),
    PatternSpec::still("diagonal", shapes::diagonal),
    PatternSpec::still("reverseDiagonal", shapes::reverse_diagonal),
    PatternSpec::still("circle", shapes::circle),
    PatternSpec::still("largeCircle", shapes::large_circle),
    PatternSpec::still("smallDot", dots::small_dot),
    PatternSpec::still("zigzag", lines::zigzag),
    PatternSpec::still("waves", lines::waves),
    PatternSpec::still("diamonds", tilings::diamonds),
    PatternSpec::still("checkerboard", tilings::checkerboard),
    PatternSpec::still("largeCheckerboard", tilings::large_checkerboard),
    PatternSpec::still("grid", tilings::grid),
    PatternSpec::still("largeGrid", tilings::large_grid),
    PatternSpec::still("crosshatch", lines::crosshatch),
    PatternSpec::still("triangles", tilings::triangles),
    PatternSpec::still("circles", dots::circles),
    PatternSpec::still("scales", tilings::scales),
    PatternSpec::still("hexagons", tilings::hexagons),
    PatternSpec::animated("radial", animated::radial),
    PatternSpec::animated("wave", animated::wave),
    PatternSpec::animated("animatedGrid", animated::animated_grid),
    PatternSpec::still("plus", shapes::plus),
    PatternSpec::still("heart", tilings::heart),
    PatternSpec::still("rotatedDiamonds", tilings::rotated_diamonds),
    PatternSpec::still("dotsWithCorner", dots::dots_with_corner),
    PatternSpec::still("dotsCircle", dots::dots_circle),
    PatternSpec::still("dotsZigzag", dots::dots_zigzag),
    PatternSpec::still("dotsDiagonal", dots::dots_diagonal),
    PatternSpec::still("fourTriangles", shapes::four_triangles),
    PatternSpec::still("verticalCheckerboard", tilings::vertical_checkerboard),
    PatternSpec::still("smallSquares", dots::small_squares),
    PatternSpec::still("largeSquares", dots::large_squares),
    PatternSpec::still("diagonalWaves", lines::diagonal_waves),
    PatternSpec::still("concentricSquares", shapes::concentric_squares),
    PatternSpec::still("spiral", shapes::spiral),
    PatternSpec::still("stars", tilings::stars),
    PatternSpec::still("arrows", tilings::arrows),
];

/// An ordered, immutable set of pattern generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    specs: Vec<PatternSpec>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// The built-in catalogue in declared order.
    pub fn builtin() -> Self {
        Self {
            specs: BUILTIN.to_vec(),
        }
    }

    /// A registry with custom generators, in the given order.
    pub fn from_specs(specs: Vec<PatternSpec>) -> Self {
        Self { specs }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn specs(&self) -> &[PatternSpec] {
        &self.specs
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatternSpec> {
        self.specs.iter()
    }

    pub fn get(&self, name: &str) -> Option<&PatternSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    pub fn animated_count(&self) -> usize {
        self.specs.iter().filter(|spec| spec.is_animated()).count()
    }

    /// The catalogue in display order: declared order, or shuffled when
    /// `randomize` is set. An unseeded shuffle is not reproducible.
    pub fn ordered(&self, randomize: bool, seed: Option<u64>) -> Vec<PatternSpec> {
        if randomize {
            shuffle(&self.specs, seed)
        } else {
            self.specs.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builtin_names_unique() {
        let registry = Registry::builtin();
        let names: HashSet<_> = registry.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), registry.len());
        assert_eq!(registry.len(), 48);
    }

    #[test]
    fn test_animated_partition_is_declared() {
        let registry = Registry::builtin();
        for spec in registry.iter() {
            let animated = matches!(spec.kind(), PatternKind::Animated(_));
            assert_eq!(animated, spec.is_animated());
            assert_eq!(
                animated,
                ANIMATED_PATTERNS.contains(&spec.name()),
                "{}",
                spec.name()
            );
        }
        assert_eq!(registry.animated_count(), ANIMATED_PATTERNS.len());
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = Registry::builtin();
        assert!(registry.get("spiral").is_some_and(|s| !s.is_animated()));
        assert!(registry.get("radial").is_some_and(|s| s.is_animated()));
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_ordered_without_randomize_keeps_declared_order() {
        let registry = Registry::builtin();
        assert_eq!(registry.ordered(false, Some(5)), registry.specs());
    }

    #[test]
    fn test_seeded_order_is_reproducible() {
        let registry = Registry::builtin();
        let a = registry.ordered(true, Some(99));
        let b = registry.ordered(true, Some(99));
        assert_eq!(a, b);
        assert_ne!(a, registry.specs());
    }

    #[test]
    fn test_draw_dispatches_on_kind() {
        let registry = Registry::builtin();
        let palette = Palette::default();
        let draw = |name: &str, frame: u64| {
            let mut surface = Surface::new(64, 64);
            surface.fill(palette.background());
            if let Some(spec) = registry.get(name) {
                spec.draw(&mut surface, &palette, frame);
            }
            surface
        };

        // Still patterns ignore the frame index; animated ones do not.
        assert_eq!(draw("checkerboard", 0), draw("checkerboard", 40));
        assert_ne!(draw("wave", 0), draw("wave", 40));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::from_specs(Vec::new());
        assert!(registry.is_empty());
        assert!(registry.ordered(true, Some(1)).is_empty());
    }
}

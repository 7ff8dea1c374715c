//! Schönflies point-group classification from symmetry-element counts.
//!
//! The decision procedure only looks at counts: axes of order >= 3, the
//! highest rotation order, total axes, mirror planes, rotoreflection orders and
//! inversion. Counts that match none of the fourteen families are reported as
//! errors, never rounded to the nearest group.
//!
//! Aliases
//! - C1h is Cs, S2 is Ci, S6 is C3i. The procedure emits the left-hand names.

use std::fmt;

use crate::symmetry::Symmetries;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Cyclic.
    C,
    /// Dihedral.
    D,
    /// Improper cyclic (rotoreflection).
    S,
    /// Tetrahedral.
    T,
    /// Octahedral.
    O,
    /// Icosahedral.
    I,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subtype {
    /// Mirror orthogonal to the principal axis (or inversion for T/O/I).
    H,
    /// Mirrors containing the principal axis.
    V,
    /// Mirrors between the 2-fold axes.
    D,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointGroup {
    pub family: Family,
    /// Principal order `n`; `None` for T, O and I.
    pub order: Option<u32>,
    pub subtype: Option<Subtype>,
}

impl PointGroup {
    pub const fn new(family: Family, order: Option<u32>, subtype: Option<Subtype>) -> Self {
        Self {
            family,
            order,
            subtype,
        }
    }

    const fn axial(family: Family, n: u32, subtype: Option<Subtype>) -> Self {
        Self::new(family, Some(n), subtype)
    }

    const fn polyhedral(family: Family, subtype: Option<Subtype>) -> Self {
        Self::new(family, None, subtype)
    }

    /// Short label, e.g. "Td", "C5v", "S4".
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Number of elements of the group (identity included).
    pub fn group_order(&self) -> usize {
        let n = self.order.unwrap_or(1) as usize;
        let doubled = if self.subtype.is_some() { 2 } else { 1 };
        match self.family {
            Family::C => n * doubled,
            Family::S => n,
            Family::D => 2 * n * doubled,
            Family::T => 12 * doubled,
            Family::O => 24 * doubled,
            Family::I => 60 * doubled,
        }
    }

    /// Conventional alternative name, if the label has one.
    pub fn alias(&self) -> Option<&'static str> {
        match (self.family, self.order, self.subtype) {
            (Family::C, Some(1), Some(Subtype::H)) => Some("Cs"),
            (Family::S, Some(2), None) => Some("Ci"),
            (Family::S, Some(6), None) => Some("C3i"),
            _ => None,
        }
    }

    /// Chiral groups contain proper rotations only.
    pub fn is_chiral(&self) -> bool {
        self.family != Family::S && self.subtype.is_none()
    }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = match self.family {
            Family::C => "C",
            Family::D => "D",
            Family::S => "S",
            Family::T => "T",
            Family::O => "O",
            Family::I => "I",
        };
        write!(f, "{family}")?;
        if let Some(n) = self.order {
            write!(f, "{n}")?;
        }
        match self.subtype {
            Some(Subtype::H) => write!(f, "h"),
            Some(Subtype::V) => write!(f, "v"),
            Some(Subtype::D) => write!(f, "d"),
            None => Ok(()),
        }
    }
}

/// Counts the classifier decides on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisCensus {
    /// Order of every rotation axis.
    pub rotation_orders: Vec<u32>,
    pub reflections: usize,
    /// Order of every rotoreflection axis.
    pub rotoreflection_orders: Vec<u32>,
    pub inversion: bool,
}

impl From<&Symmetries> for AxisCensus {
    fn from(s: &Symmetries) -> Self {
        Self {
            rotation_orders: s.rotation_axes.iter().map(|a| a.order).collect(),
            reflections: s.reflection_planes.len(),
            rotoreflection_orders: s.rotoreflection_axes.iter().map(|a| a.order).collect(),
            inversion: s.inversion,
        }
    }
}

/// Counts that fit none of the known families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassificationError {
    /// Two or more axes of order >= 3, but not 4, 7 or 16 of them.
    PolyhedralAxes { count: usize },
    /// Axis count does not fit a cyclic or dihedral layout.
    AxisLayout { axes: usize, max_order: u32 },
    /// Mirror count does not fit the family chosen from the axes.
    ReflectionCount {
        family: Family,
        order: u32,
        reflections: usize,
    },
    /// Improper elements without any rotation axis beyond what C1h/S2 allow.
    ImproperWithoutAxis { reflections: usize, inversion: bool },
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PolyhedralAxes { count } => write!(
                f,
                "{count} axes of order >= 3 match no polyhedral group (expected 4, 7 or 16)"
            ),
            Self::AxisLayout { axes, max_order } => write!(
                f,
                "{axes} rotation axes with highest order {max_order} match no axial group"
            ),
            Self::ReflectionCount {
                family,
                order,
                reflections,
            } => write!(
                f,
                "{reflections} mirror planes do not fit family {family:?} of order {order}"
            ),
            Self::ImproperWithoutAxis {
                reflections,
                inversion,
            } => write!(
                f,
                "no rotation axis but {reflections} mirror planes and inversion = {inversion}"
            ),
        }
    }
}

impl std::error::Error for ClassificationError {}

/// Map a census to its Schönflies group.
///
/// Priority: polyhedral families (>= 2 axes of order >= 3), then rotoreflection
/// axes (S2n, Dnd), then groups without rotation axes (C1, Cs, Ci), then cyclic
/// and dihedral groups by their highest axis order.
pub fn classify(census: &AxisCensus) -> Result<PointGroup, ClassificationError> {
    let refl = census.reflections;
    let high = census.rotation_orders.iter().filter(|&&o| o >= 3).count();
    if high >= 2 {
        return match high {
            4 => Ok(PointGroup::polyhedral(
                Family::T,
                match refl {
                    0 => None,
                    3 => Some(Subtype::H),
                    _ => Some(Subtype::D),
                },
            )),
            7 => Ok(PointGroup::polyhedral(
                Family::O,
                (refl > 0).then_some(Subtype::H),
            )),
            16 => Ok(PointGroup::polyhedral(
                Family::I,
                (refl > 0).then_some(Subtype::H),
            )),
            count => Err(ClassificationError::PolyhedralAxes { count }),
        };
    }

    if let Some(&s) = census.rotoreflection_orders.iter().max() {
        return Ok(if refl == 0 {
            PointGroup::axial(Family::S, s, None)
        } else {
            PointGroup::axial(Family::D, s / 2, Some(Subtype::D))
        });
    }

    let axes = census.rotation_orders.len();
    let Some(&max_order) = census.rotation_orders.iter().max() else {
        return match (census.inversion, refl) {
            (true, 0) => Ok(PointGroup::axial(Family::S, 2, None)),
            (false, 1) => Ok(PointGroup::axial(Family::C, 1, Some(Subtype::H))),
            (false, 0) => Ok(PointGroup::axial(Family::C, 1, None)),
            (inversion, reflections) => Err(ClassificationError::ImproperWithoutAxis {
                reflections,
                inversion,
            }),
        };
    };

    let n = max_order as usize;
    if axes == 1 {
        let subtype = match refl {
            0 => None,
            1 => Some(Subtype::H),
            r if r == n => Some(Subtype::V),
            _ => {
                return Err(ClassificationError::ReflectionCount {
                    family: Family::C,
                    order: max_order,
                    reflections: refl,
                })
            }
        };
        return Ok(PointGroup::axial(Family::C, max_order, subtype));
    }
    if axes == n + 1 {
        let subtype = match refl {
            0 => None,
            r if r == n + 1 => Some(Subtype::H),
            _ => {
                return Err(ClassificationError::ReflectionCount {
                    family: Family::D,
                    order: max_order,
                    reflections: refl,
                })
            }
        };
        return Ok(PointGroup::axial(Family::D, max_order, subtype));
    }
    Err(ClassificationError::AxisLayout { axes, max_order })
}

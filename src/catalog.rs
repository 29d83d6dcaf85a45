//! Static body and mission catalog.
//!
//! Orbit radii are stylised layout units used for the map, not physical
//! distances. The catalog is loaded once at startup and treated as
//! read-only for the whole session; the scene references records by
//! index and never copies them.

use bevy::prelude::*;

use crate::rng::hash32;
use crate::types::{Body, BodyKind, Mission, Moon};

/// How moon records are produced when the catalog is built.
///
/// The two strategies yield the same moon names per body; they differ in
/// how orbit/period/size values are chosen.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoonCatalogMode {
    /// Hand-tuned per-moon values.
    #[default]
    Handcrafted,
    /// Values derived from the moon's index and name hash.
    Procedural,
}

/// Catalog validation failures. These are reported at startup as
/// warnings; at runtime a dangling reference degrades to an empty
/// result, never a crash.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("mission {mission} references unknown system {system}")]
    UnknownSystem {
        mission: &'static str,
        system: &'static str,
    },

    #[error("mission {mission} targets {target}, not a moon of {system}")]
    UnknownTarget {
        mission: &'static str,
        system: &'static str,
        target: &'static str,
    },
}

/// Resource owning the immutable body and mission tables.
#[derive(Resource, Clone, Debug)]
pub struct Catalog {
    pub bodies: Vec<Body>,
    pub missions: Vec<Mission>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::build(MoonCatalogMode::Handcrafted)
    }
}

impl Catalog {
    pub fn build(mode: MoonCatalogMode) -> Self {
        Self {
            bodies: bodies(mode),
            missions: missions(),
        }
    }

    /// Index of a body by id.
    pub fn body_index(&self, id: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    pub fn body(&self, id: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Indices of all missions whose system is the given body.
    pub fn missions_for(&self, body_id: &str) -> Vec<usize> {
        self.missions
            .iter()
            .enumerate()
            .filter(|(_, m)| m.system == body_id)
            .map(|(i, _)| i)
            .collect()
    }

    /// Cross-check mission references against the body table.
    ///
    /// A mission target that is not a moon of its system is legal input
    /// (the pin simply anchors to the body), but worth surfacing once.
    pub fn validate(&self) -> Vec<CatalogError> {
        let mut problems = Vec::new();
        for m in &self.missions {
            match self.body(m.system) {
                None => problems.push(CatalogError::UnknownSystem {
                    mission: m.id,
                    system: m.system,
                }),
                Some(body) => {
                    if let Some(target) = m.target
                        && body.moon(target).is_none()
                    {
                        problems.push(CatalogError::UnknownTarget {
                            mission: m.id,
                            system: m.system,
                            target,
                        });
                    }
                }
            }
        }
        problems
    }
}

/// Startup system: log any dangling mission references.
pub fn report_catalog_issues(catalog: Res<Catalog>) {
    for problem in catalog.validate() {
        warn!("catalog: {}", problem);
    }
    info!(
        "Catalog loaded: {} bodies, {} missions",
        catalog.bodies.len(),
        catalog.missions.len()
    );
}

fn white(alpha: f32) -> Color {
    Color::srgba(1.0, 1.0, 1.0, alpha)
}

/// Hand-tuned moon record.
fn moon(name: &'static str, orbit: f32, period: f64, size: f32, alpha: f32) -> Moon {
    Moon {
        name,
        orbit,
        period,
        size,
        color: white(alpha),
    }
}

/// Procedural moon record: orbit from the slot index, period and size
/// varied by the name hash within clamped ranges.
fn derived_moon(name: &'static str, index: usize, base_orbit: f32, orbit_step: f32) -> Moon {
    let i = index as f64;
    let period = (3.5 + i * 6.5 + (hash32(name) % 17) as f64 * 0.35).clamp(2.0, 120.0);
    let size = (2.3 + (hash32(name) % 7) as f32 * 0.25).clamp(2.0, 4.0);
    Moon {
        name,
        orbit: base_orbit + index as f32 * orbit_step,
        period,
        size,
        color: white(0.86),
    }
}

fn moons(mode: MoonCatalogMode, handcrafted: Vec<Moon>, base_orbit: f32, orbit_step: f32) -> Vec<Moon> {
    match mode {
        MoonCatalogMode::Handcrafted => handcrafted,
        MoonCatalogMode::Procedural => handcrafted
            .iter()
            .enumerate()
            .map(|(i, m)| derived_moon(m.name, i, base_orbit, orbit_step))
            .collect(),
    }
}

/// The full body table, root outward.
pub fn bodies(mode: MoonCatalogMode) -> Vec<Body> {
    vec![
        Body {
            id: "Mercury",
            kind: BodyKind::Planet,
            orbit: 70.0,
            size: 4.2,
            period: 88.0,
            color: Color::srgb_u8(0xb5, 0xb9, 0xc2),
            moons: vec![],
        },
        Body {
            id: "Venus",
            kind: BodyKind::Planet,
            orbit: 95.0,
            size: 6.2,
            period: 225.0,
            color: Color::srgb_u8(0xd7, 0xc3, 0xa2),
            moons: vec![],
        },
        Body {
            id: "Earth",
            kind: BodyKind::Planet,
            orbit: 125.0,
            size: 6.4,
            period: 365.0,
            color: Color::srgb_u8(0x4a, 0xa3, 0xff),
            moons: moons(
                mode,
                vec![moon("Moon", 38.4, 27.3, 3.4, 0.86)],
                14.0,
                0.0,
            ),
        },
        Body {
            id: "Mars",
            kind: BodyKind::Planet,
            orbit: 160.0,
            size: 5.0,
            period: 687.0,
            color: Color::srgb_u8(0xff, 0x6b, 0x4a),
            moons: moons(
                mode,
                vec![
                    moon("Phobos", 0.94, 0.32, 2.6, 0.86),
                    moon("Deimos", 2.35, 1.26, 2.5, 0.86),
                ],
                10.0,
                7.0,
            ),
        },
        Body {
            id: "Dwarf Planets",
            kind: BodyKind::Planet,
            orbit: 205.0,
            size: 6.0,
            period: 1400.0,
            color: Color::srgb_u8(0xa8, 0xa1, 0xff),
            moons: moons(
                mode,
                vec![
                    moon("Ceres", 12.0, 18.0, 2.7, 0.86),
                    moon("Vesta", 24.0, 28.0, 2.7, 0.86),
                    moon("Pallas", 36.0, 40.0, 2.7, 0.86),
                    moon("Psyche", 48.0, 55.0, 2.7, 0.86),
                    moon("Other", 70.0, 80.0, 2.2, 0.78),
                ],
                12.0,
                6.0,
            ),
        },
        Body {
            id: "Jupiter",
            kind: BodyKind::Planet,
            orbit: 270.0,
            size: 12.0,
            period: 4333.0,
            color: Color::srgb_u8(0xd9, 0xb3, 0x8c),
            moons: moons(
                mode,
                vec![
                    moon("Amalthea", 18.1, 0.50, 2.5, 0.82),
                    moon("Thebe", 22.2, 0.67, 2.4, 0.82),
                    moon("Io", 42.2, 1.77, 3.0, 0.86),
                    moon("Europa", 67.1, 3.55, 2.9, 0.86),
                    moon("Ganymede", 107.0, 7.15, 3.2, 0.86),
                    moon("Callisto", 188.0, 16.7, 3.1, 0.86),
                    moon("Other", 230.0, 25.0, 2.2, 0.78),
                ],
                14.0,
                6.0,
            ),
        },
        Body {
            id: "Saturn",
            kind: BodyKind::Planet,
            orbit: 335.0,
            size: 10.5,
            period: 10759.0,
            color: Color::srgb_u8(0xe5, 0xd3, 0xa2),
            moons: moons(
                mode,
                vec![
                    moon("Mimas", 18.5, 0.94, 2.7, 0.86),
                    moon("Enceladus", 23.8, 1.37, 2.8, 0.86),
                    moon("Tethys", 29.5, 1.89, 2.9, 0.86),
                    moon("Dione", 37.7, 2.74, 2.9, 0.86),
                    moon("Rhea", 52.7, 4.52, 3.0, 0.86),
                    moon("Titan", 120.0, 15.95, 3.6, 0.90),
                    moon("Iapetus", 356.0, 79.3, 3.1, 0.86),
                    moon("Other", 460.0, 110.0, 2.2, 0.78),
                ],
                14.0,
                5.5,
            ),
        },
        Body {
            id: "Uranus",
            kind: BodyKind::Planet,
            orbit: 395.0,
            size: 8.0,
            period: 30687.0,
            color: Color::srgb_u8(0x78, 0xe0, 0xff),
            moons: moons(
                mode,
                vec![
                    moon("Ariel", 19.1, 2.52, 2.9, 0.86),
                    moon("Umbriel", 26.6, 4.14, 2.8, 0.86),
                    moon("Titania", 43.6, 8.71, 3.0, 0.86),
                    moon("Other", 70.0, 20.0, 2.2, 0.78),
                ],
                13.0,
                7.0,
            ),
        },
        Body {
            id: "Neptune",
            kind: BodyKind::Planet,
            orbit: 450.0,
            size: 8.0,
            period: 60190.0,
            color: Color::srgb_u8(0x4f, 0x7d, 0xff),
            moons: moons(
                mode,
                vec![
                    moon("Triton", 35.5, 5.88, 3.3, 0.90),
                    moon("Nereid", 550.0, 360.0, 2.7, 0.84),
                    moon("Proteus", 11.8, 1.12, 2.8, 0.84),
                    moon("Other", 720.0, 400.0, 2.2, 0.78),
                ],
                13.0,
                7.0,
            ),
        },
        Body {
            id: "Pluto",
            kind: BodyKind::Dwarf,
            orbit: 505.0,
            size: 4.2,
            period: 90560.0,
            color: Color::srgb_u8(0xc6, 0xb3, 0xa6),
            moons: moons(
                mode,
                vec![moon("Charon", 1.8, 6.39, 2.8, 0.86)],
                12.0,
                0.0,
            ),
        },
        Body {
            id: "Kuiper Belt",
            kind: BodyKind::Planet,
            orbit: 570.0,
            size: 6.2,
            period: 110000.0,
            color: Color::WHITE,
            moons: moons(
                mode,
                vec![
                    moon("Arrokoth", 26.0, 298.0, 2.7, 0.86),
                    moon("Other", 32.0, 520.0, 2.2, 0.78),
                ],
                14.0,
                6.0,
            ),
        },
        Body {
            id: "Interstellar Space",
            kind: BodyKind::Planet,
            orbit: 850.0,
            size: 8.0,
            period: 130000.0,
            color: Color::srgb_u8(0x9c, 0x9c, 0x9c),
            moons: vec![],
        },
    ]
}

/// The demo mission table.
pub fn missions() -> Vec<Mission> {
    vec![
        Mission {
            id: "CR-MLN-01",
            name: "Selene Pathfinder",
            system: "Earth",
            target: Some("Moon"),
            status: "Active • Nominal",
            kind: "Surface Relay Demonstrator",
            launched: "2036-07-18",
            operator: "Constellation Reimagined",
            description: "A demonstration of lunar surface relay nodes enabling \
                continuous comms for polar operations.",
        },
        Mission {
            id: "CR-MLN-02",
            name: "Selene Explorer",
            system: "Earth",
            target: Some("Moon"),
            status: "Active • Nominal",
            kind: "Lunar Surface Exploration",
            launched: "2036-07-18",
            operator: "Constellation Reimagined",
            description: "A demonstration of lunar surface relay nodes enabling \
                continuous comms for polar operations.",
        },
        Mission {
            id: "CR-HLO-07",
            name: "Heliopause Sentinel",
            system: "Interstellar Space",
            target: None,
            status: "Active • Extended",
            kind: "Deep Space Probe",
            launched: "2034-02-09",
            operator: "Constellation Reimagined",
            description: "Long-duration particle and field survey beyond the \
                termination shock, relaying via the outer network.",
        },
        Mission {
            id: "CR-KPR-03",
            name: "Arrokoth Cartographer",
            system: "Kuiper Belt",
            target: Some("Arrokoth"),
            status: "Cruise • Nominal",
            kind: "Flyby Mapper",
            launched: "2038-11-30",
            operator: "Constellation Reimagined",
            description: "High-resolution shape and albedo mapping of contact \
                binaries in the cold classical belt.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_ids_unique() {
        let catalog = Catalog::default();
        for (i, a) in catalog.bodies.iter().enumerate() {
            for b in &catalog.bodies[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_default_catalog_validates() {
        assert!(Catalog::default().validate().is_empty());
    }

    #[test]
    fn test_missions_for_earth() {
        let catalog = Catalog::default();
        let indices = catalog.missions_for("Earth");
        assert_eq!(indices.len(), 2);
        for i in indices {
            assert_eq!(catalog.missions[i].system, "Earth");
        }
    }

    #[test]
    fn test_missions_for_unknown_body_is_empty() {
        assert!(Catalog::default().missions_for("Planet X").is_empty());
    }

    #[test]
    fn test_procedural_moons_keep_names() {
        let hand = Catalog::build(MoonCatalogMode::Handcrafted);
        let proc_ = Catalog::build(MoonCatalogMode::Procedural);
        for (a, b) in hand.bodies.iter().zip(&proc_.bodies) {
            let names_a: Vec<_> = a.moons.iter().map(|m| m.name).collect();
            let names_b: Vec<_> = b.moons.iter().map(|m| m.name).collect();
            assert_eq!(names_a, names_b);
        }
    }

    #[test]
    fn test_procedural_moons_within_ranges() {
        let catalog = Catalog::build(MoonCatalogMode::Procedural);
        for body in &catalog.bodies {
            for m in &body.moons {
                assert!((2.0..=120.0).contains(&m.period), "{}", m.name);
                assert!((2.0..=4.0).contains(&m.size), "{}", m.name);
            }
        }
    }

    #[test]
    fn test_validation_flags_dangling_system() {
        let mut catalog = Catalog::default();
        catalog.missions.push(Mission {
            id: "X-1",
            name: "Nowhere",
            system: "Planet X",
            target: None,
            status: "Lost",
            kind: "Probe",
            launched: "2040-01-01",
            operator: "Nobody",
            description: "",
        });
        assert_eq!(
            catalog.validate(),
            vec![CatalogError::UnknownSystem {
                mission: "X-1",
                system: "Planet X",
            }]
        );
    }
}

//! MJCF (`<mujoco>`) subset reader.
//!
//! Only the elements needed to describe translating rigid bodies resting on
//! planes are understood. Everything else is skipped with a debug log.

use crate::error::PhysicsError;
use crate::model::{Body, Model};
use crate::types::{Geom, Material, Shape, SimOptions, Vec3};
use roxmltree::Node;
use tracing::debug;

const DEFAULT_RGBA: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
// MJCF treats a zero plane size as infinite; this only bounds the drawn quad.
const DEFAULT_PLANE_HALF_SIZE: f32 = 10.0;

pub(crate) fn parse_document(source: &str) -> Result<Model, PhysicsError> {
    let doc = roxmltree::Document::parse(source)?;
    let root = doc.root_element();
    if root.tag_name().name() != "mujoco" {
        return Err(PhysicsError::UnexpectedRoot(
            root.tag_name().name().to_owned(),
        ));
    }

    let mut model = Model {
        name: root.attribute("model").unwrap_or("unnamed").to_owned(),
        options: SimOptions::default(),
        bodies: Vec::new(),
        static_geoms: Vec::new(),
    };

    for child in root.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "option" => parse_option(child, &mut model.options)?,
            "worldbody" => parse_worldbody(child, &mut model)?,
            other => debug!("Ignoring <{other}> element"),
        }
    }

    Ok(model)
}

fn parse_option(node: Node, options: &mut SimOptions) -> Result<(), PhysicsError> {
    if let Some(raw) = node.attribute("timestep") {
        let timestep: f64 = raw
            .trim()
            .parse()
            .map_err(|_| invalid(node, "timestep", raw))?;
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(PhysicsError::InvalidTimestep(timestep));
        }
        options.timestep = timestep;
    }
    if let Some(gravity) = vec3_attr(node, "gravity")? {
        options.gravity = gravity;
    }
    Ok(())
}

fn parse_worldbody(node: Node, model: &mut Model) -> Result<(), PhysicsError> {
    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "geom" => {
                let geom = parse_geom(child)?;
                model.static_geoms.push(geom);
            }
            "body" => walk_body(child, Vec3::ZERO, None, model)?,
            other => debug!("Ignoring <{other}> in <worldbody>"),
        }
    }
    Ok(())
}

/// Flatten a `<body>` subtree. `owner` is the index and world position of
/// the nearest free-jointed ancestor, if any.
fn walk_body(
    node: Node,
    parent_pos: Vec3,
    owner: Option<(usize, Vec3)>,
    model: &mut Model,
) -> Result<(), PhysicsError> {
    let world_pos = parent_pos + vec3_attr(node, "pos")?.unwrap_or(Vec3::ZERO);

    let owner = if has_free_joint(node) {
        let name = node
            .attribute("name")
            .map_or_else(|| format!("body{}", model.bodies.len()), str::to_owned);
        model.bodies.push(Body {
            name,
            initial_pos: world_pos,
            geoms: Vec::new(),
        });
        Some((model.bodies.len() - 1, world_pos))
    } else {
        owner
    };

    for child in node.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "geom" => {
                let mut geom = parse_geom(child)?;
                match owner {
                    Some((index, owner_pos)) => {
                        if matches!(geom.shape, Shape::Plane { .. }) {
                            return Err(PhysicsError::InvalidAttribute {
                                element: "geom".to_owned(),
                                attribute: "type",
                                value: format!(
                                    "plane (inside dynamic body `{}`)",
                                    model.bodies[index].name
                                ),
                            });
                        }
                        geom.offset += world_pos - owner_pos;
                        model.bodies[index].geoms.push(geom);
                    }
                    None => {
                        geom.offset += world_pos;
                        model.static_geoms.push(geom);
                    }
                }
            }
            "body" => walk_body(child, world_pos, owner, model)?,
            "joint" if child.attribute("type") != Some("free") => {
                debug!(
                    "Joint type {:?} is not simulated; body is welded to its parent",
                    child.attribute("type").unwrap_or("hinge")
                );
            }
            _ => {}
        }
    }
    Ok(())
}

fn has_free_joint(node: Node) -> bool {
    node.children().filter(Node::is_element).any(|child| {
        let tag = child.tag_name().name();
        tag == "freejoint" || (tag == "joint" && child.attribute("type") == Some("free"))
    })
}

fn parse_geom(node: Node) -> Result<Geom, PhysicsError> {
    let kind = node.attribute("type").unwrap_or("sphere");
    let size = floats_attr(node, "size")?.unwrap_or_default();

    let shape = match kind {
        "sphere" => {
            let radius = positive(node, "size", &size, 0)?;
            Shape::Sphere { radius }
        }
        "box" => Shape::Box {
            half_extents: Vec3::new(
                positive(node, "size", &size, 0)?,
                positive(node, "size", &size, 1)?,
                positive(node, "size", &size, 2)?,
            ),
        },
        "plane" => {
            let normal = vec3_attr(node, "zaxis")?.unwrap_or(Vec3::Z).normalize();
            if normal == Vec3::ZERO {
                return Err(invalid(node, "zaxis", node.attribute("zaxis").unwrap_or("")));
            }
            let half = |i: usize| {
                size.get(i)
                    .copied()
                    .filter(|v| *v > 0.0)
                    .unwrap_or(DEFAULT_PLANE_HALF_SIZE)
            };
            Shape::Plane {
                normal,
                half_size: [half(0), half(1)],
            }
        }
        other => return Err(PhysicsError::UnsupportedGeom(other.to_owned())),
    };

    let rgba = match floats_attr(node, "rgba")? {
        Some(v) if v.len() == 4 => [v[0], v[1], v[2], v[3]],
        Some(_) => return Err(invalid(node, "rgba", node.attribute("rgba").unwrap_or(""))),
        None => DEFAULT_RGBA,
    };

    let mut material = Material::default();
    if let Some(friction) = floats_attr(node, "friction")? {
        match friction.first() {
            Some(f) if *f >= 0.0 => material.friction = *f,
            _ => {
                return Err(invalid(
                    node,
                    "friction",
                    node.attribute("friction").unwrap_or(""),
                ))
            }
        }
    }

    Ok(Geom {
        name: node.attribute("name").map(str::to_owned),
        shape,
        offset: vec3_attr(node, "pos")?.unwrap_or(Vec3::ZERO),
        rgba,
        material,
    })
}

fn invalid(node: Node, attribute: &'static str, value: &str) -> PhysicsError {
    PhysicsError::InvalidAttribute {
        element: node.tag_name().name().to_owned(),
        attribute,
        value: value.to_owned(),
    }
}

fn floats_attr(node: Node, attribute: &'static str) -> Result<Option<Vec<f32>>, PhysicsError> {
    let Some(raw) = node.attribute(attribute) else {
        return Ok(None);
    };
    raw.split_whitespace()
        .map(|token| {
            token
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| invalid(node, attribute, raw))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn vec3_attr(node: Node, attribute: &'static str) -> Result<Option<Vec3>, PhysicsError> {
    match floats_attr(node, attribute)? {
        None => Ok(None),
        Some(v) if v.len() == 3 => Ok(Some(Vec3::new(v[0], v[1], v[2]))),
        Some(_) => Err(invalid(node, attribute, node.attribute(attribute).unwrap_or(""))),
    }
}

fn positive(node: Node, attribute: &'static str, values: &[f32], index: usize) -> Result<f32, PhysicsError> {
    values
        .get(index)
        .copied()
        .filter(|v| *v > 0.0)
        .ok_or_else(|| invalid(node, attribute, node.attribute(attribute).unwrap_or("")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_option_element() {
        let model = parse_document("<mujoco><worldbody/></mujoco>").unwrap();
        assert_eq!(model.name, "unnamed");
        assert_eq!(model.options, SimOptions::default());
        assert!(model.bodies.is_empty());
    }

    #[test]
    fn rejects_foreign_root() {
        let err = parse_document("<scene/>").unwrap_err();
        assert!(matches!(err, PhysicsError::UnexpectedRoot(ref tag) if tag == "scene"));
    }

    #[test]
    fn rejects_non_positive_timestep() {
        let err = parse_document(r#"<mujoco><option timestep="0"/></mujoco>"#).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidTimestep(_)));
    }

    #[test]
    fn geom_type_defaults_to_sphere() {
        let model = parse_document(
            r#"<mujoco><worldbody><body pos="0 0 2"><freejoint/><geom size="0.3"/></body></worldbody></mujoco>"#,
        )
        .unwrap();
        assert_eq!(model.bodies[0].geoms[0].shape, Shape::Sphere { radius: 0.3 });
    }

    #[test]
    fn welded_child_geoms_move_with_free_ancestor() {
        let model = parse_document(
            r#"<mujoco><worldbody>
                 <body name="base" pos="1 0 1">
                   <freejoint/>
                   <geom type="box" size="0.1 0.1 0.1"/>
                   <body pos="0 0 0.5"><geom type="sphere" size="0.05" pos="0.1 0 0"/></body>
                 </body>
               </worldbody></mujoco>"#,
        )
        .unwrap();
        assert_eq!(model.bodies.len(), 1);
        let body = &model.bodies[0];
        assert_eq!(body.initial_pos, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(body.geoms[1].offset, Vec3::new(0.1, 0.0, 0.5));
    }

    #[test]
    fn bodies_without_free_joint_are_static() {
        let model = parse_document(
            r#"<mujoco><worldbody>
                 <body pos="0 0 1"><geom type="box" size="1 1 0.1" pos="0 0 0.2"/></body>
               </worldbody></mujoco>"#,
        )
        .unwrap();
        assert!(model.bodies.is_empty());
        let offset = model.static_geoms[0].offset;
        assert!((offset - Vec3::new(0.0, 0.0, 1.2)).length() < 1e-6);
    }

    #[test]
    fn reports_bad_attribute_values() {
        let err = parse_document(
            r#"<mujoco><worldbody><geom type="box" size="0.1 oops 0.1"/></worldbody></mujoco>"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PhysicsError::InvalidAttribute { attribute: "size", .. }
        ));
    }

    #[test]
    fn rejects_unsupported_geom_types() {
        let err = parse_document(
            r#"<mujoco><worldbody><geom type="mesh" mesh="teapot"/></worldbody></mujoco>"#,
        )
        .unwrap_err();
        assert!(matches!(err, PhysicsError::UnsupportedGeom(ref t) if t == "mesh"));
    }

    #[test]
    fn plane_normal_comes_from_zaxis() {
        let model = parse_document(
            r#"<mujoco><worldbody><geom type="plane" zaxis="0 0 2" size="0 0 1"/></worldbody></mujoco>"#,
        )
        .unwrap();
        assert_eq!(
            model.static_geoms[0].shape,
            Shape::Plane {
                normal: Vec3::Z,
                half_size: [DEFAULT_PLANE_HALF_SIZE; 2]
            }
        );
    }
}

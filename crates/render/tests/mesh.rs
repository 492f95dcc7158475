use physics::{Model, State, Vec3};
use render::mesh::{scene_vertices, Vertex};

const SCENE: &str = r#"
<mujoco>
  <worldbody>
    <geom type="plane" size="2 3 0.1" rgba="1 1 1 1"/>
    <body pos="0 0 1">
      <freejoint/>
      <geom type="box" size="0.1 0.2 0.3" rgba="1 0 0 1"/>
    </body>
    <body pos="1 0 1">
      <freejoint/>
      <geom type="sphere" size="0.25"/>
    </body>
  </worldbody>
</mujoco>
"#;

fn to_vec3(p: [f32; 3]) -> Vec3 {
    Vec3::new(p[0], p[1], p[2])
}

fn triangles(vertices: &[Vertex]) -> impl Iterator<Item = [Vec3; 3]> + '_ {
    vertices.chunks_exact(3).map(|t| {
        [
            to_vec3(t[0].position),
            to_vec3(t[1].position),
            to_vec3(t[2].position),
        ]
    })
}

#[test]
fn scene_produces_plane_quad_and_two_cuboids() {
    let model = Model::from_xml_str(SCENE).unwrap();
    let state = State::new(&model);
    let vertices = scene_vertices(&model, &state);
    assert_eq!(vertices.len(), 6 + 36 + 36);
}

#[test]
fn plane_quad_spans_its_size() {
    let model = Model::from_xml_str(SCENE).unwrap();
    let state = State::new(&model);
    let vertices = scene_vertices(&model, &state);
    let plane = &vertices[..6];
    let max_x = plane.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
    let max_y = plane.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
    assert!((max_x - 2.0).abs() < 1e-5);
    assert!((max_y - 3.0).abs() < 1e-5);
    assert!(plane.iter().all(|v| v.position[2].abs() < 1e-6));
}

#[test]
fn cuboid_triangles_face_outwards() {
    let model = Model::from_xml_str(SCENE).unwrap();
    let state = State::new(&model);
    let vertices = scene_vertices(&model, &state);
    let center = Vec3::new(0.0, 0.0, 1.0);
    for [a, b, c] in triangles(&vertices[6..42]) {
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid - center) > 0.0);
    }
}

#[test]
fn body_geometry_follows_state() {
    let model = Model::from_xml_str(SCENE).unwrap();
    let mut state = State::new(&model);
    state.positions[0] = Vec3::new(5.0, 0.0, 1.0);
    let vertices = scene_vertices(&model, &state);
    let min_x = vertices[6..42]
        .iter()
        .map(|v| v.position[0])
        .fold(f32::MAX, f32::min);
    assert!((min_x - 4.9).abs() < 1e-5);
}

#[test]
fn vertex_layout_matches_struct_size() {
    assert_eq!(Vertex::layout().array_stride, 24);
    assert_eq!(Vertex::layout().attributes.len(), 2);
}

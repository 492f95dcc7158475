use physics::{run, Model, State};

const FALLING_SPHERE: &str = r#"
<mujoco model="falling_sphere">
  <option timestep="0.01"/>
  <worldbody>
    <body name="ball" pos="0 0 10">
      <freejoint/>
      <geom type="sphere" size="0.5"/>
    </body>
  </worldbody>
</mujoco>
"#;

#[test]
fn sphere_free_fall_matches_discrete_solution() {
    let model = Model::from_xml_str(FALLING_SPHERE).unwrap();
    let mut state = State::new(&model);
    let dt = 0.01_f32;
    let steps = 100_usize;
    run(&model, &mut state, steps).unwrap();

    // semi-implicit Euler: z_n = z0 - g dt² n(n+1)/2
    let n = steps as f32;
    let expected = 10.0 - 9.81 * dt * dt * n * (n + 1.0) / 2.0;
    let diff = (state.positions[0].z - expected).abs();
    assert!(diff < 1e-3, "diff={diff}");
    assert!((state.time - 1.0).abs() < 1e-9);
}

#[test]
fn sphere_free_fall_stays_close_to_analytic() {
    let model = Model::from_xml_str(FALLING_SPHERE).unwrap();
    let mut state = State::new(&model);
    run(&model, &mut state, 100).unwrap();

    // analytic: h = h0 − ½ g t²; first-order error bounded by g·dt·t
    let expected = 10.0 - 0.5 * 9.81 * 1.0_f32.powi(2);
    let diff = (state.positions[0].z - expected).abs();
    assert!(diff < 9.81 * 0.01, "diff={diff}");
}

#[test]
fn horizontal_motion_is_untouched_without_contacts() {
    let model = Model::from_xml_str(FALLING_SPHERE).unwrap();
    let mut state = State::new(&model);
    state.velocities[0].x = 2.0;
    run(&model, &mut state, 50).unwrap();
    assert!((state.positions[0].x - 1.0).abs() < 1e-4);
    assert_eq!(state.active_contacts, 0);
}

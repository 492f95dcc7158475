use std::fs;
use std::path::Path;

// Helper function to validate a WGSL shader file using naga
fn validate_wgsl_shader(shader_path: &Path) {
    let shader_source = match fs::read_to_string(shader_path) {
        Ok(s) => s,
        Err(e) => panic!("Failed to read shader file {shader_path:?}: {e}"),
    };

    let module = match naga::front::wgsl::parse_str(&shader_source) {
        Ok(m) => m,
        Err(e) => {
            panic!(
                "WGSL parsing error in {shader_path:?}:\n{error_report}",
                error_report = e.emit_to_string(&shader_source)
            );
        }
    };

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );

    if let Err(e) = validator.validate(&module) {
        panic!(
            "WGSL validation error in {shader_path:?}:\n{error_report}",
            error_report = e.emit_to_string(&shader_source)
        );
    }

    for entry_point in ["vs_main", "fs_main"] {
        assert!(
            module.entry_points.iter().any(|ep| ep.name == entry_point),
            "missing entry point {entry_point}"
        );
    }
}

#[test]
fn viewer_shader_compiles() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/shader.wgsl");
    validate_wgsl_shader(&path);
}

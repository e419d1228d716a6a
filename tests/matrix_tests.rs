use flycam::math::{Mat4, Vec3};

const TOLERANCE: f32 = 1e-5;

fn assert_mat4_near(actual: Mat4, expected: [f32; 16]) {
    let actual = actual.to_rows_array();
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() < TOLERANCE,
            "element {} differs: {} vs {}",
            i,
            a,
            e
        );
    }
}

fn glam_row_major(m: glam::Mat4) -> [f32; 16] {
    m.transpose().to_cols_array()
}

#[test]
fn test_multiply_identity_law() {
    let m = Mat4::from_rotation_y(31.0)
        * Mat4::from_translation(Vec3::new(2.0, -1.0, 5.0))
        * Mat4::from_scale(2.0, 2.0, 2.0);

    assert_mat4_near(m * Mat4::IDENTITY, m.to_rows_array());
    assert_mat4_near(Mat4::IDENTITY * m, m.to_rows_array());
}

#[test]
fn test_multiply_is_associative() {
    let a = Mat4::from_rotation_x(12.0);
    let b = Mat4::from_translation(Vec3::new(0.0, 3.0, -1.0));
    let c = Mat4::from_scale(1.5, 0.5, 2.0);

    assert_mat4_near((a * b) * c, (a * (b * c)).to_rows_array());
}

#[test]
fn test_multiply_is_not_commutative() {
    let rotate = Mat4::from_rotation_z(90.0);
    let translate = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));

    let rotate_then_translate = translate * rotate;
    let translate_then_rotate = rotate * translate;

    // rotating (1,0,0) by 90 deg about z then translating lands at (1,1,0);
    // translating first lands at (0,2,0)
    let p = Vec3::new(1.0, 0.0, 0.0);
    let a = rotate_then_translate.transform_point3(p);
    let b = translate_then_rotate.transform_point3(p);
    assert!((a - b).length() > 0.5, "{:?} vs {:?}", a, b);
}

#[test]
fn test_rotation_roundtrip() {
    let forth = Mat4::from_rotation_y(47.0);
    let back = Mat4::from_rotation_y(-47.0);
    assert_mat4_near(forth * back, Mat4::IDENTITY.to_rows_array());
}

#[test]
fn test_perspective_depth_mapping() {
    // 90 degree fov, square aspect, near 1, far 100: near-plane center maps
    // to ndc z = -1, far-plane center to ndc z = +1 (GL convention).
    let projection = Mat4::perspective(90.0_f32.to_radians(), 1.0, 1.0, 100.0).unwrap();

    let near_ndc = projection.project_point3(Vec3::new(0.0, 0.0, -1.0));
    assert!((near_ndc.z - -1.0).abs() < TOLERANCE, "near z = {}", near_ndc.z);

    let far_ndc = projection.project_point3(Vec3::new(0.0, 0.0, -100.0));
    assert!((far_ndc.z - 1.0).abs() < 1e-4, "far z = {}", far_ndc.z);
}

#[test]
fn test_perspective_matches_glam() {
    let (fov, aspect, near, far) = (60.0_f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
    let ours = Mat4::perspective(fov, aspect, near, far).unwrap();
    let reference = glam::Mat4::perspective_rh_gl(fov, aspect, near, far);
    assert_mat4_near(ours, glam_row_major(reference));
}

#[test]
fn test_look_at_matches_glam() {
    let eye = Vec3::new(0.0, 1.0, 4.5);
    let center = Vec3::new(0.0, 1.0, 0.0);
    let up = Vec3::Y;

    let ours = Mat4::look_at(eye, center, up).unwrap();
    let reference = glam::Mat4::look_at_rh(
        glam::Vec3::new(eye.x, eye.y, eye.z),
        glam::Vec3::new(center.x, center.y, center.z),
        glam::Vec3::Y,
    );
    assert_mat4_near(ours, glam_row_major(reference));
}

#[test]
fn test_look_at_matches_glam_oblique() {
    let eye = Vec3::new(-3.0, 2.5, 7.0);
    let center = Vec3::new(1.0, 0.0, -2.0);

    let ours = Mat4::look_at(eye, center, Vec3::Y).unwrap();
    let reference = glam::Mat4::look_at_rh(
        glam::Vec3::new(eye.x, eye.y, eye.z),
        glam::Vec3::new(center.x, center.y, center.z),
        glam::Vec3::Y,
    );
    assert_mat4_near(ours, glam_row_major(reference));
}

#[test]
fn test_orthographic_maps_box_to_ndc_cube() {
    let projection = Mat4::orthographic(0.0, 800.0, 0.0, 600.0, -1.0, 1.0);

    let lower = projection.transform_point3(Vec3::new(0.0, 0.0, 1.0));
    assert!((lower.x - -1.0).abs() < TOLERANCE);
    assert!((lower.y - -1.0).abs() < TOLERANCE);
    assert!((lower.z - -1.0).abs() < TOLERANCE);

    let upper = projection.transform_point3(Vec3::new(800.0, 600.0, -1.0));
    assert!((upper.x - 1.0).abs() < TOLERANCE);
    assert!((upper.y - 1.0).abs() < TOLERANCE);
    assert!((upper.z - 1.0).abs() < TOLERANCE);
}

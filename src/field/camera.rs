//! Column-major 4x4 matrices for the point projection. The camera sits at
//! z = +500 looking down -z; the whole field rotates under it.

pub type Mat4 = [f32; 16];

const FOVY_DEG: f32 = 50.0;
const NEAR: f32 = 1.0;
const FAR: f32 = 2000.0;
const CAMERA_Z: f32 = 500.0;

pub fn identity() -> Mat4 {
    let mut m = [0.0; 16];
    m[0] = 1.0;
    m[5] = 1.0;
    m[10] = 1.0;
    m[15] = 1.0;
    m
}

pub fn perspective(fovy_rad: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fovy_rad / 2.0).tan();
    let mut m = [0.0; 16];
    m[0] = f / aspect;
    m[5] = f;
    m[10] = (far + near) / (near - far);
    m[11] = -1.0;
    m[14] = 2.0 * far * near / (near - far);
    m
}

pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = identity();
    m[12] = x;
    m[13] = y;
    m[14] = z;
    m
}

pub fn rotation_x(rad: f32) -> Mat4 {
    let (s, c) = rad.sin_cos();
    let mut m = identity();
    m[5] = c;
    m[6] = s;
    m[9] = -s;
    m[10] = c;
    m
}

pub fn rotation_y(rad: f32) -> Mat4 {
    let (s, c) = rad.sin_cos();
    let mut m = identity();
    m[0] = c;
    m[2] = -s;
    m[8] = s;
    m[10] = c;
    m
}

pub fn multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

pub fn transform_point(m: &Mat4, p: [f32; 3]) -> [f32; 4] {
    let mut out = [0.0; 4];
    for row in 0..4 {
        out[row] = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
    }
    out
}

/// Combined view-projection for one frame: fixed camera, field rotation
/// from the pointer follow.
pub fn view_projection(aspect: f32, rot_x: f32, rot_y: f32) -> Mat4 {
    let proj = perspective(FOVY_DEG.to_radians(), aspect, NEAR, FAR);
    let view = translation(0.0, 0.0, -CAMERA_Z);
    let model = multiply(&rotation_x(rot_x), &rotation_y(rot_y));
    multiply(&proj, &multiply(&view, &model))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let m = view_projection(16.0 / 9.0, 0.0, 0.0);
        let [x, y, _, w] = transform_point(&m, [0.0, 0.0, 0.0]);
        assert!(approx(x / w, 0.0));
        assert!(approx(y / w, 0.0));
        assert!(approx(w, CAMERA_Z));
    }

    #[test]
    fn zero_rotation_is_identity() {
        let rx = rotation_x(0.0);
        let ry = rotation_y(0.0);
        assert_eq!(rx, identity());
        assert_eq!(ry, identity());
    }

    #[test]
    fn rotation_preserves_length() {
        let m = multiply(&rotation_x(0.7), &rotation_y(-0.3));
        let [x, y, z, _] = transform_point(&m, [3.0, 4.0, 12.0]);
        let len = (x * x + y * y + z * z).sqrt();
        assert!(approx(len, 13.0));
    }

    #[test]
    fn points_in_front_of_the_camera_have_positive_w() {
        let m = view_projection(1.0, 0.1, 0.2);
        // Anywhere in the simulation box is in front of the z=500 camera.
        let [_, _, _, w] = transform_point(&m, [1000.0, -500.0, 250.0]);
        assert!(w > 0.0);
        let [_, _, _, w] = transform_point(&m, [-1000.0, 500.0, -250.0]);
        assert!(w > 0.0);
    }
}

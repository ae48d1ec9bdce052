//! Golden values for survey bearings from a field landmark set.
//!
//! Each bearing is the surveyed direction of a boundary line; the expected
//! heading and yaw quaternion are what the anchor API receives.

use landmark_bearing::{BearingError, Orientation4, line_heading, yaw_rotation};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{what} = {actual}, expected {expected}"
    );
}

#[test]
fn survey_bearings_to_headings() {
    let cases = [
        (80.603, -9.397),
        (164.356, 74.356),
        (269.885, 179.885),
        (354.193, -95.807),
    ];
    for (bearing, expected) in cases {
        let h = line_heading(bearing).unwrap();
        assert_close(h, expected, &format!("line_heading({bearing})"));
        assert!(h > -180.0 && h <= 180.0);
    }
}

#[test]
fn survey_bearing_quaternion() {
    // 164.356 -> heading 74.356 -> half angle (180 - 74.356) / 2 = 52.822 deg
    let h = line_heading(164.356).unwrap();
    let q = yaw_rotation(h);
    let half = 52.822_f64.to_radians();
    assert_close(q.qy, half.sin(), "qy");
    assert_close(q.qw, half.cos(), "qw");
    assert_eq!(q.qx, 0.0);
    assert_eq!(q.qz, 0.0);
}

#[test]
fn heading_behind_viewer_flips_sign_of_w() {
    // 354.193 -> heading -95.807 -> half angle 137.9035 deg, past 90
    let q = yaw_rotation(line_heading(354.193).unwrap());
    assert!(q.qw < 0.0);
    assert!(q.qy > 0.0);
    assert_close(q.norm(), 1.0, "norm");
}

#[test]
fn out_of_range_survey_bearing_is_rejected() {
    assert_eq!(line_heading(400.0), Err(BearingError::InvalidArgument));
}

#[test]
fn orientation_is_copy() {
    let a = yaw_rotation(10.0);
    let b = a;
    assert_eq!(a, b);
    assert_ne!(a, Orientation4::ZERO);
}

use lagrange::input::errors::InputError;
use lagrange::input::form::parse_block;
use lagrange::interpolation::config::DEFAULT_X_TOL;
use lagrange::interpolation::lagrange::interpolate_points;

#[test]
fn form_block_to_polynomial() {
    let set = parse_block("1 2\n2 3\n", DEFAULT_X_TOL).unwrap();
    let poly = interpolate_points(set.points()).unwrap();
    assert_eq!(poly.to_string(), "1.0 * x + 1.0");
}

#[test]
fn duplicate_with_same_y_is_still_rejected() {
    let errs = parse_block("1 2\n1 2\n", DEFAULT_X_TOL).unwrap_err();
    assert_eq!(errs.len(), 1);
    assert!(matches!(errs[0], InputError::DuplicateAbscissa { line: 2, first_line: 1, .. }));
}

#[test]
fn closely_spaced_lines_are_distinct() {
    let set = parse_block("1e-13 1\n5e-13 2\n", DEFAULT_X_TOL).unwrap();
    assert_eq!(set.len(), 2);
}

#[test]
fn errors_render_line_numbers() {
    let errs = parse_block("1 2\n1 x\n", DEFAULT_X_TOL).unwrap_err();
    let msg = errs[0].to_string();
    assert!(msg.starts_with("line 2:"), "{msg}");
}

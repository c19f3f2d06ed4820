use std::io::Cursor;

use lagrange::input::errors::InputError;
use lagrange::input::session::{Session, SessionOptions};
use lagrange::interpolation::point::Point;

type InputResult = Result<(), InputError>;

fn opts() -> SessionOptions {
    SessionOptions { explain: false, ..SessionOptions::default() }
}

fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), opts())
}

fn output(s: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(s.into_writer()).unwrap()
}

#[test]
fn collects_until_blank_line() -> InputResult {
    let mut s = session("1 2\n2 3\n3 4\n\nignored\n");
    let set = s.collect_points()?;
    assert_eq!(set.points(), &[Point::new(1.0, 2.0), Point::new(2.0, 3.0), Point::new(3.0, 4.0)]);

    let out = output(s);
    assert!(out.contains("Point 1: Point 2: Point 3: Point 4: "));
    assert!(out.contains("f(x)"));
    Ok(())
}

#[test]
fn bad_line_reprompts_same_number() -> InputResult {
    let mut s = session("1 2\nnot a point\n5\n2 3\n\n");
    let set = s.collect_points()?;
    assert_eq!(set.len(), 2);

    let out = output(s);
    assert_eq!(out.matches("Please enter a valid point").count(), 2);
    assert_eq!(out.matches("Point 2: ").count(), 3);
    Ok(())
}

#[test]
fn duplicate_x_reprompts() -> InputResult {
    let mut s = session("1 2\n1 3\n1 2\n4 0\n\n");
    let set = s.collect_points()?;
    assert_eq!(set.points(), &[Point::new(1.0, 2.0), Point::new(4.0, 0.0)]);

    let out = output(s);
    assert_eq!(out.matches("Duplicate x-value 1").count(), 2);
    Ok(())
}

#[test]
fn colored_errors_still_carry_message() -> InputResult {
    let mut s = Session::new(
        Cursor::new(b"oops\n1 2\n\n".to_vec()),
        Vec::new(),
        SessionOptions { color: true, ..opts() },
    );
    s.collect_points()?;
    assert!(output(s).contains("Please enter a valid point"));
    Ok(())
}

#[test]
fn blank_before_any_point_asks_again() -> InputResult {
    let mut s = session("\n7 1\n\n");
    let set = s.collect_points()?;
    assert_eq!(set.len(), 1);
    assert!(output(s).contains("no points provided"));
    Ok(())
}

#[test]
fn end_of_input_without_points() {
    let mut s = session("");
    let err = s.collect_points().unwrap_err();
    assert!(matches!(err, InputError::NoPointsProvided));
}

#[test]
fn menu_round_prints_polynomial() -> InputResult {
    let mut s = session("1\n1 2\n2 3\n3 4\n\n0\n");
    let report = s.run()?.expect("one completed round");
    assert_eq!(report.n_provided, 3);

    let out = output(s);
    assert!(out.starts_with("Welcome to your personal Lagrange Polynomial Generator!"));
    assert!(out.contains("Lagrange Polynomial: 1.0 * x + 1.0\n"));
    assert!(out.trim_end().ends_with("Goodbye!"));
    Ok(())
}

#[test]
fn menu_exits_on_anything_but_one() -> InputResult {
    let mut s = session("q\n");
    assert!(s.run()?.is_none());
    assert!(output(s).contains("Goodbye!"));
    Ok(())
}

#[test]
fn precision_option() -> InputResult {
    let input = "1\n0 0\n3 1\n\n0\n";
    let mut s = Session::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        SessionOptions { precision: Some(2), ..opts() },
    );
    s.run()?;
    assert!(output(s).contains("Lagrange Polynomial: 0.33 * x\n"));
    Ok(())
}

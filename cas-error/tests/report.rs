use cas_attrs::ErrorKind;
use cas_error::{Error, ErrorKind};

/// A function was given an argument it cannot work with.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot use argument #{} here", self.index + 1),
    labels = ["this argument"],
    help = "try a different argument"
)]
struct BadArgument {
    index: usize,
}

/// An error without fields.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "something went wrong", labels = ["here", ""])]
struct Unit;

fn strip(report: &str) -> String {
    String::from_utf8(strip_ansi_escapes::strip(report)).unwrap()
}

#[test]
fn downcast_to_kind() {
    let err = Error::new(vec![2..3], BadArgument { index: 0 });
    assert!(err.is::<BadArgument>());
    assert!(!err.is::<Unit>());
    assert_eq!(err.downcast_ref::<BadArgument>(), Some(&BadArgument { index: 0 }));
}

#[test]
fn report_contains_message_and_labels() {
    let src = "f(x, y)";
    let err = Error::new(vec![2..3], BadArgument { index: 0 });
    let report = strip(&err.report_to_string("input", src));

    assert!(report.contains("cannot use argument #1 here"));
    assert!(report.contains("this argument"));
    assert!(report.contains("try a different argument"));
    assert!(report.contains(src));
}

#[test]
fn empty_labels_are_allowed() {
    let src = "g(1)";
    let err = Error::new(vec![0..4, 2..3], Unit);
    let report = strip(&err.report_to_string("input", src));
    assert!(report.contains("something went wrong"));
    assert!(report.contains("here"));
}

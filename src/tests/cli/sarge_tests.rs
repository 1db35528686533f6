use crate::cli::{BoundsArg, BoundsParseError, InputArg};
use sarge::ArgumentType;

#[test]
fn bounds_arg_from_value() {
    let parsed = <BoundsArg as ArgumentType>::from_value(Some("1..6"))
        .expect("some")
        .expect("ok");
    assert_eq!(parsed, BoundsArg { lower: 1, upper: 6 });

    let err = <BoundsArg as ArgumentType>::from_value(Some("6..1"))
        .expect("some")
        .unwrap_err();
    assert_eq!(err, BoundsParseError::Empty { lower: 6, upper: 1 });

    assert!(<BoundsArg as ArgumentType>::from_value(None).is_none());
}

#[test]
fn input_arg_from_value() {
    let stdin = <InputArg as ArgumentType>::from_value(Some("STDIN"))
        .expect("some")
        .expect("ok");
    assert!(stdin.is_stdin());

    let file = <InputArg as ArgumentType>::from_value(Some("answers.txt"))
        .expect("some")
        .expect("ok");
    assert_eq!(file.as_str(), "answers.txt");
}

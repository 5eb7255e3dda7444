#![allow(dead_code)]
use calc::lang::{ErrorCode, Evaluator, Integer};

/// Feeds each line to `session` and renders the outputs the way the
/// terminal driver prints them.
pub fn exec(session: &mut Evaluator, lines: &[&str]) -> String {
    let mut s = String::new();
    for line in lines {
        match session.parse(line) {
            Ok(Some(value)) => s.push_str(&format!("{}\n", value)),
            Ok(None) => {}
            Err(error) => s.push_str(&format!("{}\n", error)),
        }
    }
    s
}

pub fn value(s: &str) -> Integer {
    match Evaluator::new().parse(s) {
        Ok(Some(value)) => value,
        other => panic!("{:?} gave {:?}", s, other),
    }
}

pub fn failure(session: &mut Evaluator, s: &str) -> (ErrorCode, usize) {
    let error = session.parse(s).unwrap_err();
    (error.code(), error.column().unwrap())
}

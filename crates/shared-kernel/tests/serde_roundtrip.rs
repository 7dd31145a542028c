// crates/shared-kernel/tests/serde_roundtrip.rs
use serde::{Deserialize, Serialize};
use target_sum_shared_kernel::{Problem, WayCount};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    problem: Problem,
    ways: WayCount,
}

#[test]
fn json_roundtrip() {
    let original = Wrapper {
        problem: Problem::new(vec![1, 2, 3], 0),
        ways: WayCount::from(2),
    };
    let json = serde_json::to_string(&original).expect("serializes");
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn problem_reads_plain_json_object() {
    let p: Problem = serde_json::from_str(r#"{"numbers":[1,1,1,1,1],"target":3}"#).unwrap();
    assert_eq!(p, Problem::new(vec![1, 1, 1, 1, 1], 3));
}

#[test]
fn waycount_is_transparent() {
    assert_eq!(serde_json::to_string(&WayCount::from(9)).unwrap(), "9");
}

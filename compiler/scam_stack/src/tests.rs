use super::*;

/// Mimics the evaluator's shape: one guarded frame per nesting level.
fn nested_depth(remaining: u32) -> u32 {
    ensure_sufficient_stack(|| {
        if remaining == 0 {
            0
        } else {
            nested_depth(remaining - 1) + 1
        }
    })
}

#[test]
fn test_shallow_nesting() {
    assert_eq!(nested_depth(16), 16);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    assert_eq!(nested_depth(200_000), 200_000);
}

#[test]
fn test_result_passes_through() {
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}

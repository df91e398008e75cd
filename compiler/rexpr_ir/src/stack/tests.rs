use super::*;

#[test]
fn passes_through_result() {
    let value: Result<u8, &str> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(value, Ok(7));
}

#[test]
fn deep_recursion_does_not_overflow() {
    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(50_000), 50_000);
}

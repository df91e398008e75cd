//! Stack growth for deeply nested expressions.
//!
//! Parsing, rendering, saving and loading all recurse once per tree level,
//! so an input like `((((…))))` with thousands of groups would exhaust the
//! thread's stack. Each recursive entry point wraps its body in
//! [`ensure_sufficient_stack`], which moves execution onto a freshly
//! allocated segment when less than [`RED_ZONE`] bytes remain.
//!
//! On `wasm32` the guard is a passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;

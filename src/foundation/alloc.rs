use crate::foundation::error::{ShapewatchError, ShapewatchResult};

/// `vec![value; len]` that reports allocation failure instead of panicking or aborting.
///
/// Buffer sizes come straight from shape-list geometry, so any of them can be too large.
pub(crate) fn try_vec<T: Clone>(len: usize, value: T, what: &str) -> ShapewatchResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|e| ShapewatchError::surface(format!("allocate {what} ({len} elements): {e}")))?;
    v.resize(len, value);
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/alloc.rs"]
mod tests;

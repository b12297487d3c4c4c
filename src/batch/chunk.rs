use crate::{Error, Result};

/// Split `items` into contiguous chunks of at most `size` elements.
///
/// Order and multiplicity are preserved; only the last chunk may be short.
/// Fails with `InvalidArgument` when `size` is zero.
pub fn chunks<T>(items: Vec<T>, size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::invalid_argument("chunk size must be positive"));
    }

    let mut out = Vec::with_capacity(items.len().div_ceil(size));
    let mut current = Vec::with_capacity(size.min(items.len()));
    for item in items {
        current.push(item);
        if current.len() == size {
            out.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    Ok(out)
}

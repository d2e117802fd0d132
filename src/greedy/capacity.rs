//! Uniform per-tool capacity.

use crate::error::InstanceError;

/// Returns `floor(sample_count / tool_count)`, the capacity shared by
/// every tool.
///
/// Zero tools with at least one sample is a precondition violation
/// ([`InstanceError::NoTools`]). Zero tools and zero samples yields `0`.
/// A result of `0` is a valid degenerate case: nothing can be placed.
///
/// ```
/// use u_assign::greedy::uniform_capacity;
///
/// assert_eq!(uniform_capacity(3, 12).unwrap(), 4);
/// assert_eq!(uniform_capacity(3, 2).unwrap(), 0);
/// assert!(uniform_capacity(0, 1).is_err());
/// ```
pub fn uniform_capacity(tool_count: usize, sample_count: usize) -> Result<usize, InstanceError> {
    if tool_count == 0 {
        if sample_count == 0 {
            return Ok(0);
        }
        return Err(InstanceError::NoTools {
            samples: sample_count,
        });
    }
    Ok(sample_count / tool_count)
}

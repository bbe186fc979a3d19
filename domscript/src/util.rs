//! Utility functions.

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

/// Turn heading text into an anchor identifier by trimming it and replacing
/// each run of whitespace with a single dash.
pub fn slugify<'bump>(bump: &'bump Bump, s: &str) -> BumpString<'bump> {
    let mut result = BumpString::new_in(bump);
    for (index, word) in s.split_whitespace().enumerate() {
        if index > 0 {
            result.push('-');
        }
        result.push_str(word);
    }
    result
}

// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use crate::error::{UrlError, UrlErrorKind};

/// Validates a caller-supplied login for use as a single path segment.
///
/// The login is treated as already-escaped path text: control characters and
/// `%` signs that do not introduce a two-digit hex escape are rejected, and
/// valid escapes are decoded so that the URL builder can re-escape the
/// result canonically. Logins that decode to `.` or `..` are rejected, as
/// URL normalization would remove them from the path.
pub fn path_segment(input: &str) -> Result<Cow<'_, str>, UrlError> {
    let fail = |kind| UrlError {
        input: input.into(),
        kind,
    };
    if input.is_empty() {
        return Err(fail(UrlErrorKind::Empty));
    }
    if input.chars().any(char::is_control) {
        return Err(fail(UrlErrorKind::ControlCharacter));
    }
    let bytes = input.as_bytes();
    for (i, _) in input.match_indices('%') {
        let escape = bytes.get(i + 1..i + 3);
        if !matches!(escape, Some([a, b]) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit()) {
            return Err(fail(UrlErrorKind::InvalidEscape));
        }
    }
    let decoded = urlencoding::decode(input).map_err(|_| fail(UrlErrorKind::InvalidEscape))?;
    // Escapes may decode to control characters that were not visible above.
    if decoded.chars().any(char::is_control) {
        return Err(fail(UrlErrorKind::ControlCharacter));
    }
    if decoded == "." || decoded == ".." {
        return Err(fail(UrlErrorKind::DotSegment));
    }
    Ok(decoded)
}

// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes `encodeURIComponent` escapes: everything but ASCII letters, digits
/// and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes `s` the way `encodeURIComponent` does. Borrows `s` when
/// nothing needs escaping.
pub fn encode_uri_component(s: &str) -> Cow<'_, str> {
    utf8_percent_encode(s, URI_COMPONENT).into()
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::string_util::encode_uri_component;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("Hello"), Cow::Borrowed("Hello"));
        assert_eq!(encode_uri_component("Hi there!"), "Hi%20there!");
        assert_eq!(encode_uri_component("a&b=c?d/e#f"), "a%26b%3Dc%3Fd%2Fe%23f");
        assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_uri_component("₹100"), "%E2%82%B9100");
        assert_eq!(encode_uri_component("(it's) *ok* ~_-."), "(it's)%20*ok*%20~_-.");
    }
}

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

use crate::{
    resolver::{
        enums::DeepLinkKind,
        errors::DeepLinkError,
        helper_constants::{MAX_MESSAGE_LENGTH, MIN_DEEP_LINK_PHONE_DIGITS},
    },
    string_util::encode_uri_component,
};

/// Builds a WhatsApp URL opening a chat with `phone` prefilled with
/// `message`. Everything but ASCII digits is dropped from `phone`, so an
/// E.164 string or a formatted number both work.
pub fn build_deep_link(
    phone: &str,
    message: &str,
    kind: DeepLinkKind,
) -> Result<String, DeepLinkError> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < MIN_DEEP_LINK_PHONE_DIGITS {
        return Err(DeepLinkError::InvalidPhone {
            min: MIN_DEEP_LINK_PHONE_DIGITS,
            actual: digits.len(),
        });
    }
    let message_length = message.chars().count();
    if message_length > MAX_MESSAGE_LENGTH {
        return Err(DeepLinkError::MessageTooLong {
            max: MAX_MESSAGE_LENGTH,
            actual: message_length,
        });
    }

    let text = encode_uri_component(message);
    let link = match kind {
        DeepLinkKind::Api => {
            fast_cat::concat_str!("https://api.whatsapp.com/send?phone=", &digits, "&text=", &text)
        }
        DeepLinkKind::Web => {
            fast_cat::concat_str!("https://web.whatsapp.com/send?phone=", &digits, "&text=", &text)
        }
        DeepLinkKind::WaMe => fast_cat::concat_str!("https://wa.me/", &digits, "?text=", &text),
        DeepLinkKind::App => {
            fast_cat::concat_str!("whatsapp://send?phone=", &digits, "&text=", &text)
        }
    };
    Ok(link)
}

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

use std::fmt;

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::i18n::RegionCode;

/// A selectable region: a territory from the table, or a calling code the
/// user typed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Region {
    /// Region id from the territory table.
    Known(&'static str),
    /// Caller-supplied calling code, digits only. `None` until the user
    /// enters one.
    Custom(Option<String>),
}

impl Region {
    /// Two-letter id, or `CUSTOM` for the custom region.
    pub fn id(&self) -> &str {
        match self {
            Region::Known(id) => *id,
            Region::Custom(_) => RegionCode::custom(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Region::Custom(_))
    }

    pub fn custom_calling_code(&self) -> Option<&str> {
        match self {
            Region::Custom(Some(code)) => Some(code),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Known(id) => f.write_str(id),
            Region::Custom(Some(code)) => write!(f, "{}(+{})", RegionCode::custom(), code),
            Region::Custom(None) => f.write_str(RegionCode::custom()),
        }
    }
}

/// The WhatsApp URL flavours a message can be sent through.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum DeepLinkKind {
    /// `https://api.whatsapp.com/send`
    #[default]
    #[strum(to_string = "api")]
    Api,
    /// `https://web.whatsapp.com/send`
    #[strum(to_string = "web")]
    Web,
    /// `https://wa.me/<phone>`
    #[strum(to_string = "wame", serialize = "business")]
    WaMe,
    /// `whatsapp://send`, handled by the installed app.
    #[strum(to_string = "app", serialize = "mobile")]
    App,
}

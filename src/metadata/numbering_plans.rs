// Copyright (C) 2009 The Libphonenumber Authors
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

//! Generated from libphonenumber metadata 9.0.33 (`PhoneNumberMetadata.xml`).

use super::{NumberFormat, NumberingPlan, PhoneNumberDesc};

const fn format(
    pattern: &'static str,
    groups: &'static [(usize, usize)],
    format: &'static str,
    leading_digits_pattern: &'static [&'static str],
    national_prefix_formatting_rule: Option<&'static str>,
) -> NumberFormat {
    NumberFormat { pattern, groups, format, leading_digits_pattern, national_prefix_formatting_rule }
}

const AD_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})", &[(3, 3), (3, 3)], "$1 $2", &[r"[135-9]"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"1"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"6"], None),
];

const AE_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2,9})", &[(3, 3), (2, 9)], "$1 $2", &[r"60|8"], None),
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2 $3", &[r"[236]|[479][2-8]"], Some("0$1")),
    format(r"(\d{3})(\d)(\d{5})", &[(3, 3), (1, 1), (5, 5)], "$1 $2 $3", &[r"[479]"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"5"], Some("0$1")),
];

const AF_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[1-9]"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[2-7]"], Some("0$1")),
];

const AF_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[2-7]"], None),
];

const AL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3,4})", &[(3, 3), (3, 4)], "$1 $2", &[r"80|9"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2 $3", &[r"4[2-6]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"[2358][2-5]|4"], Some("0$1")),
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"[23578]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"6"], Some("0$1")),
];

const AM_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{3})", &[(3, 3), (2, 2), (3, 3)], "$1 $2 $3", &[r"[89]0"], Some("0 $1")),
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"2|3[12]"], Some("(0$1)")),
    format(r"(\d{2})(\d{6})", &[(2, 2), (6, 6)], "$1 $2", &[r"1|47"], Some("(0$1)")),
    format(r"(\d{2})(\d{6})", &[(2, 2), (6, 6)], "$1 $2", &[r"[3-9]"], Some("0$1")),
];

const AO_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[29]"], None),
];

const AR_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})", &[(3, 3)], "$1", &[r"0|1(?:0[0-35-7]|1[02-5]|2[015]|3[47]|4[478])|911"], None),
    format(r"(\d{2})(\d{4})", &[(2, 2), (4, 4)], "$1-$2", &[r"[1-9]"], None),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1-$2", &[r"[2-9]"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1-$2", &[r"[1-8]"], None),
    format(r"(\d{4})(\d{2})(\d{4})", &[(4, 4), (2, 2), (4, 4)], "$1 $2-$3", &[r"2(?:2[024-9]|3[0-59]|47|6[245]|9[02-8])|3(?:3[28]|4[03-9]|5[2-46-8]|7[1-578]|8[2-9])", r"2(?:[23]02|6(?:[25]|4[6-8])|9(?:[02356]|4[02568]|72|8[23]))|3(?:3[28]|4(?:[04679]|3[5-8]|5[4-68]|8[2379])|5(?:[2467]|3[237]|8[2-5])|7[1-578]|8(?:[2469]|3[2578]|5[4-8]|7[36-8]|8[5-8]))|2(?:2[24-9]|3[1-59]|47)", r"2(?:[23]02|6(?:[25]|4(?:64|[78]))|9(?:[02356]|4(?:[0268]|5[2-6])|72|8[23]))|3(?:3[28]|4(?:[04679]|3[78]|5(?:4[46]|8)|8[2379])|5(?:[2467]|3[237]|8[23])|7[1-578]|8(?:[2469]|3[278]|5[56][46]|86[3-6]))|2(?:2[24-9]|3[1-59]|47)|38(?:[58][78]|7[378])|3(?:4[35][56]|58[45]|8(?:[38]5|54|76))[4-6]", r"2(?:[23]02|6(?:[25]|4(?:64|[78]))|9(?:[02356]|4(?:[0268]|5[2-6])|72|8[23]))|3(?:3[28]|4(?:[04679]|3(?:5(?:4[0-25689]|[56])|[78])|58|8[2379])|5(?:[2467]|3[237]|8(?:[23]|4(?:[45]|60)|5(?:4[0-39]|5|64)))|7[1-578]|8(?:[2469]|3[278]|54(?:4|5[13-7]|6[89])|86[3-6]))|2(?:2[24-9]|3[1-59]|47)|38(?:[58][78]|7[378])|3(?:454|85[56])[46]|3(?:4(?:36|5[56])|8(?:[38]5|76))[4-6]"], Some("0$1")),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2-$3", &[r"1"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1-$2-$3", &[r"[68]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2-$3", &[r"[23]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{5})", &[(3, 3), (3, 3), (5, 5)], "$1-$2-$3", &[r"8"], Some("0$1")),
];

const AR_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{2})(\d{4})", &[(4, 4), (2, 2), (4, 4)], "$1 $2-$3", &[r"2(?:2[024-9]|3[0-59]|47|6[245]|9[02-8])|3(?:3[28]|4[03-9]|5[2-46-8]|7[1-578]|8[2-9])", r"2(?:[23]02|6(?:[25]|4[6-8])|9(?:[02356]|4[02568]|72|8[23]))|3(?:3[28]|4(?:[04679]|3[5-8]|5[4-68]|8[2379])|5(?:[2467]|3[237]|8[2-5])|7[1-578]|8(?:[2469]|3[2578]|5[4-8]|7[36-8]|8[5-8]))|2(?:2[24-9]|3[1-59]|47)", r"2(?:[23]02|6(?:[25]|4(?:64|[78]))|9(?:[02356]|4(?:[0268]|5[2-6])|72|8[23]))|3(?:3[28]|4(?:[04679]|3[78]|5(?:4[46]|8)|8[2379])|5(?:[2467]|3[237]|8[23])|7[1-578]|8(?:[2469]|3[278]|5[56][46]|86[3-6]))|2(?:2[24-9]|3[1-59]|47)|38(?:[58][78]|7[378])|3(?:4[35][56]|58[45]|8(?:[38]5|54|76))[4-6]", r"2(?:[23]02|6(?:[25]|4(?:64|[78]))|9(?:[02356]|4(?:[0268]|5[2-6])|72|8[23]))|3(?:3[28]|4(?:[04679]|3(?:5(?:4[0-25689]|[56])|[78])|58|8[2379])|5(?:[2467]|3[237]|8(?:[23]|4(?:[45]|60)|5(?:4[0-39]|5|64)))|7[1-578]|8(?:[2469]|3[278]|54(?:4|5[13-7]|6[89])|86[3-6]))|2(?:2[24-9]|3[1-59]|47)|38(?:[58][78]|7[378])|3(?:454|85[56])[46]|3(?:4(?:36|5[56])|8(?:[38]5|76))[4-6]"], None),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2-$3", &[r"1"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1-$2-$3", &[r"[68]"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2-$3", &[r"[23]"], None),
    format(r"(\d)(\d{4})(\d{2})(\d{4})", &[(1, 1), (4, 4), (2, 2), (4, 4)], "$1 $2 $3-$4", &[r"9(?:2[2-469]|3[3-578])", r"9(?:2(?:2[024-9]|3[0-59]|47|6[245]|9[02-8])|3(?:3[28]|4[03-9]|5[2-46-8]|7[1-578]|8[2-9]))", r"9(?:2(?:[23]02|6(?:[25]|4[6-8])|9(?:[02356]|4[02568]|72|8[23]))|3(?:3[28]|4(?:[04679]|3[5-8]|5[4-68]|8[2379])|5(?:[2467]|3[237]|8[2-5])|7[1-578]|8(?:[2469]|3[2578]|5[4-8]|7[36-8]|8[5-8])))|92(?:2[24-9]|3[1-59]|47)", r"9(?:2(?:[23]02|6(?:[25]|4(?:64|[78]))|9(?:[02356]|4(?:[0268]|5[2-6])|72|8[23]))|3(?:3[28]|4(?:[04679]|3[78]|5(?:4[46]|8)|8[2379])|5(?:[2467]|3[237]|8[23])|7[1-578]|8(?:[2469]|3[278]|5(?:[56][46]|[78])|7[378]|8(?:6[3-6]|[78]))))|92(?:2[24-9]|3[1-59]|47)|93(?:4[35][56]|58[45]|8(?:[38]5|54|76))[4-6]", r"9(?:2(?:[23]02|6(?:[25]|4(?:64|[78]))|9(?:[02356]|4(?:[0268]|5[2-6])|72|8[23]))|3(?:3[28]|4(?:[04679]|3(?:5(?:4[0-25689]|[56])|[78])|5(?:4[46]|8)|8[2379])|5(?:[2467]|3[237]|8(?:[23]|4(?:[45]|60)|5(?:4[0-39]|5|64)))|7[1-578]|8(?:[2469]|3[278]|5(?:4(?:4|5[13-7]|6[89])|[56][46]|[78])|7[378]|8(?:6[3-6]|[78]))))|92(?:2[24-9]|3[1-59]|47)|93(?:4(?:36|5[56])|8(?:[38]5|76))[4-6]"], None),
    format(r"(\d)(\d{2})(\d{4})(\d{4})", &[(1, 1), (2, 2), (4, 4), (4, 4)], "$1 $2 $3-$4", &[r"91"], None),
    format(r"(\d{3})(\d{3})(\d{5})", &[(3, 3), (3, 3), (5, 5)], "$1-$2-$3", &[r"8"], None),
    format(r"(\d)(\d{3})(\d{3})(\d{4})", &[(1, 1), (3, 3), (3, 3), (4, 4)], "$1 $2 $3-$4", &[r"9"], None),
];

const AT_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})", &[(4, 4)], "$1", &[r"14"], None),
    format(r"(\d)(\d{3,12})", &[(1, 1), (3, 12)], "$1 $2", &[r"1(?:11|[2-9])"], Some("0$1")),
    format(r"(\d{3})(\d{2})", &[(3, 3), (2, 2)], "$1 $2", &[r"517"], Some("0$1")),
    format(r"(\d{2})(\d{3,5})", &[(2, 2), (3, 5)], "$1 $2", &[r"5[079]"], Some("0$1")),
    format(r"(\d{6})", &[(6, 6)], "$1", &[r"[18]"], None),
    format(r"(\d{3})(\d{3,10})", &[(3, 3), (3, 10)], "$1 $2", &[r"(?:31|4)6|51|6(?:48|5[0-3579]|[6-9])|7(?:20|32|8)|[89]", r"(?:31|4)6|51|6(?:485|5[0-3579]|[6-9])|7(?:20|32|8)|[89]"], Some("0$1")),
    format(r"(\d{4})(\d{3,9})", &[(4, 4), (3, 9)], "$1 $2", &[r"[2-467]|5[2-6]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"5"], Some("0$1")),
    format(r"(\d{2})(\d{4})(\d{4,7})", &[(2, 2), (4, 4), (4, 7)], "$1 $2 $3", &[r"5"], Some("0$1")),
];

const AT_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3,12})", &[(1, 1), (3, 12)], "$1 $2", &[r"1(?:11|[2-9])"], None),
    format(r"(\d{3})(\d{2})", &[(3, 3), (2, 2)], "$1 $2", &[r"517"], None),
    format(r"(\d{2})(\d{3,5})", &[(2, 2), (3, 5)], "$1 $2", &[r"5[079]"], None),
    format(r"(\d{3})(\d{3,10})", &[(3, 3), (3, 10)], "$1 $2", &[r"(?:31|4)6|51|6(?:48|5[0-3579]|[6-9])|7(?:20|32|8)|[89]", r"(?:31|4)6|51|6(?:485|5[0-3579]|[6-9])|7(?:20|32|8)|[89]"], None),
    format(r"(\d{4})(\d{3,9})", &[(4, 4), (3, 9)], "$1 $2", &[r"[2-467]|5[2-6]"], None),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"5"], None),
    format(r"(\d{2})(\d{4})(\d{4,7})", &[(2, 2), (4, 4), (4, 7)], "$1 $2 $3", &[r"5"], None),
];

const AU_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3,4})", &[(2, 2), (3, 4)], "$1 $2", &[r"16"], Some("0$1")),
    format(r"(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2)], "$1 $2 $3", &[r"13"], None),
    format(r"(\d{3})(\d{3})", &[(3, 3), (3, 3)], "$1 $2", &[r"19"], None),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"180", r"1802"], None),
    format(r"(\d{4})(\d{3,4})", &[(4, 4), (3, 4)], "$1 $2", &[r"19"], None),
    format(r"(\d{2})(\d{3})(\d{2,4})", &[(2, 2), (3, 3), (2, 4)], "$1 $2 $3", &[r"16"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"14|4"], Some("0$1")),
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1 $2 $3", &[r"[2378]"], Some("(0$1)")),
    format(r"(\d{4})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3)], "$1 $2 $3", &[r"1(?:30|[89])"], None),
    format(r"(\d{4})(\d{4})(\d{4})", &[(4, 4), (4, 4), (4, 4)], "$1 $2 $3", &[r"130"], None),
];

const AU_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3,4})", &[(2, 2), (3, 4)], "$1 $2", &[r"16"], None),
    format(r"(\d{2})(\d{3})(\d{2,4})", &[(2, 2), (3, 3), (2, 4)], "$1 $2 $3", &[r"16"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"14|4"], None),
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1 $2 $3", &[r"[2378]"], None),
    format(r"(\d{4})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3)], "$1 $2 $3", &[r"1(?:30|[89])"], None),
];

const AW_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[25-9]"], None),
];

const AZ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2)], "$1 $2 $3", &[r"[1-9]"], None),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"90"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"1[28]|2|365|46", r"1[28]|2|365[45]|46", r"1[28]|2|365(?:4|5[02])|46"], Some("(0$1)")),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[13-9]"], Some("0$1")),
];

const AZ_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"90"], None),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"1[28]|2|365|46", r"1[28]|2|365[45]|46", r"1[28]|2|365(?:4|5[02])|46"], None),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[13-9]"], None),
];

const BA_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})", &[(3, 3), (3, 3)], "$1-$2", &[r"[2-9]"], None),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"6[1-3]|[7-9]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2-$3", &[r"[3-5]|6[56]"], Some("0$1")),
    format(r"(\d{2})(\d{2})(\d{2})(\d{3})", &[(2, 2), (2, 2), (2, 2), (3, 3)], "$1 $2 $3 $4", &[r"6"], Some("0$1")),
];

const BA_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"6[1-3]|[7-9]"], None),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2-$3", &[r"[3-5]|6[56]"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{3})", &[(2, 2), (2, 2), (2, 2), (3, 3)], "$1 $2 $3 $4", &[r"6"], None),
];

const BD_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{4,6})", &[(2, 2), (4, 6)], "$1-$2", &[r"31[5-8]|[459]1"], Some("0$1")),
    format(r"(\d{3})(\d{3,7})", &[(3, 3), (3, 7)], "$1-$2", &[r"3(?:[67]|8[013-9])|4(?:6[168]|7|[89][18])|5(?:6[128]|9)|6(?:[15]|28|4[14])|7[2-589]|8(?:0[014-9]|[12])|9[358]|(?:3[2-5]|4[235]|5[2-578]|6[0389]|76|8[3-7]|9[24])1|(?:44|66)[01346-9]"], Some("0$1")),
    format(r"(\d{4})(\d{3,6})", &[(4, 4), (3, 6)], "$1-$2", &[r"[13-9]|2[23]"], Some("0$1")),
    format(r"(\d)(\d{7,8})", &[(1, 1), (7, 8)], "$1-$2", &[r"2"], Some("0$1")),
];

const BE_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{3})", &[(3, 3), (2, 2), (3, 3)], "$1 $2 $3", &[r"(?:80|9)0"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{2})(\d{2})", &[(1, 1), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[239]|4[23]"], Some("0$1")),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[15-8]"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"4"], Some("0$1")),
];

const BF_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[024-7]"], None),
];

const BG_FORMATS: &[NumberFormat] = &[
    format(r"(\d{6})", &[(6, 6)], "$1", &[r"1"], None),
    format(r"(\d)(\d)(\d{2})(\d{2})", &[(1, 1), (1, 1), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"2"], Some("0$1")),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"43[1-6]|70[1-9]"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{3,4})", &[(1, 1), (3, 3), (3, 4)], "$1 $2 $3", &[r"2"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{2,3})", &[(2, 2), (3, 3), (2, 3)], "$1 $2 $3", &[r"[356]|4[124-7]|7[1-9]|8[1-6]|9[1-7]"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{3})", &[(3, 3), (2, 2), (3, 3)], "$1 $2 $3", &[r"(?:70|8)0"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{2})", &[(3, 3), (3, 3), (2, 2)], "$1 $2 $3", &[r"43[1-7]|7"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"[48]|9[08]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"9"], Some("0$1")),
];

const BG_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d)(\d{2})(\d{2})", &[(1, 1), (1, 1), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"2"], None),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"43[1-6]|70[1-9]"], None),
    format(r"(\d)(\d{3})(\d{3,4})", &[(1, 1), (3, 3), (3, 4)], "$1 $2 $3", &[r"2"], None),
    format(r"(\d{2})(\d{3})(\d{2,3})", &[(2, 2), (3, 3), (2, 3)], "$1 $2 $3", &[r"[356]|4[124-7]|7[1-9]|8[1-6]|9[1-7]"], None),
    format(r"(\d{3})(\d{2})(\d{3})", &[(3, 3), (2, 2), (3, 3)], "$1 $2 $3", &[r"(?:70|8)0"], None),
    format(r"(\d{3})(\d{3})(\d{2})", &[(3, 3), (3, 3), (2, 2)], "$1 $2 $3", &[r"43[1-7]|7"], None),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"[48]|9[08]"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"9"], None),
];

const BH_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[13679]|8[02-4679]"], None),
];

const BI_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[2367]"], None),
];

const BJ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"8"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4 $5", &[r"0"], None),
];

const BN_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[2-578]"], None),
];

const BO_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{7})", &[(1, 1), (7, 7)], "$1 $2", &[r"[23]|4[46]|50"], None),
    format(r"(\d{8})", &[(8, 8)], "$1", &[r"[5-7]"], None),
    format(r"(\d{3})(\d{2})(\d{4})", &[(3, 3), (2, 2), (4, 4)], "$1 $2 $3", &[r"8"], None),
];

const BR_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3,6})", &[(3, 6)], "$1", &[r"1(?:1[25-8]|2[357-9]|3[02-68]|4[12568]|5|6[0-8]|8[015]|9[0-47-9])|321|610"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1-$2", &[r"300|4(?:0[02]|37|86)", r"300|4(?:0(?:0|20)|370|864)"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1-$2", &[r"[2-57]", r"[2357]|4(?:[0-24-9]|3(?:[0-689]|7[1-9]))"], None),
    format(r"(\d{3})(\d{2,3})(\d{4})", &[(3, 3), (2, 3), (4, 4)], "$1 $2 $3", &[r"(?:[358]|90)0"], Some("0$1")),
    format(r"(\d{5})(\d{4})", &[(5, 5), (4, 4)], "$1-$2", &[r"9"], None),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2-$3", &[r"(?:[14689][1-9]|2[12478]|3[1-578]|5[13-5]|7[13-579])[2-57]"], None),
    format(r"(\d{2})(\d{5})(\d{4})", &[(2, 2), (5, 5), (4, 4)], "$1 $2-$3", &[r"[16][1-9]|[2-57-9]"], None),
];

const BR_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1-$2", &[r"300|4(?:0[02]|37|86)", r"300|4(?:0(?:0|20)|370|864)"], None),
    format(r"(\d{3})(\d{2,3})(\d{4})", &[(3, 3), (2, 3), (4, 4)], "$1 $2 $3", &[r"(?:[358]|90)0"], None),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2-$3", &[r"(?:[14689][1-9]|2[12478]|3[1-578]|5[13-5]|7[13-579])[2-57]"], None),
    format(r"(\d{2})(\d{5})(\d{4})", &[(2, 2), (5, 5), (4, 4)], "$1 $2-$3", &[r"[16][1-9]|[2-57-9]"], None),
];

const BT_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})", &[(3, 3), (3, 3)], "$1 $2", &[r"[2-7]"], None),
    format(r"(\d)(\d{3})(\d{3})", &[(1, 1), (3, 3), (3, 3)], "$1 $2 $3", &[r"[2-6]|7[246]|8[2-4]"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"1[67]|[78]"], None),
];

const BT_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{3})", &[(1, 1), (3, 3), (3, 3)], "$1 $2 $3", &[r"[2-6]|7[246]|8[2-4]"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"1[67]|[78]"], None),
];

const BW_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{5})", &[(2, 2), (5, 5)], "$1 $2", &[r"90"], None),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[24-6]|3[15-9]"], None),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"[37]"], None),
    format(r"(\d{4})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3)], "$1 $2 $3", &[r"0"], None),
    format(r"(\d{3})(\d{4})(\d{3})", &[(3, 3), (4, 4), (3, 3)], "$1 $2 $3", &[r"8"], None),
];

const BY_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})", &[(3, 3), (3, 3)], "$1 $2", &[r"800"], Some("8 $1")),
    format(r"(\d{3})(\d{2})(\d{2,4})", &[(3, 3), (2, 2), (2, 4)], "$1 $2 $3", &[r"800"], Some("8 $1")),
    format(r"(\d{4})(\d{2})(\d{3})", &[(4, 4), (2, 2), (3, 3)], "$1 $2-$3", &[r"1(?:5[169]|6[3-5]|7[179])|2(?:1[35]|2[34]|3[3-5])", r"1(?:5[169]|6(?:3[1-3]|4|5[125])|7(?:1[3-9]|7[0-24-6]|9[2-7]))|2(?:1[35]|2[34]|3[3-5])"], Some("8 0$1")),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2-$3-$4", &[r"1(?:[56]|7[467])|2[1-3]"], Some("8 0$1")),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2-$3-$4", &[r"[1-4]"], Some("8 0$1")),
    format(r"(\d{3})(\d{3,4})(\d{4})", &[(3, 3), (3, 4), (4, 4)], "$1 $2 $3", &[r"[89]"], Some("8 $1")),
];

const BZ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1-$2", &[r"[2-8]"], None),
    format(r"(\d)(\d{3})(\d{4})(\d{3})", &[(1, 1), (3, 3), (4, 4), (3, 3)], "$1-$2-$3-$4", &[r"0"], None),
];

const CD_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{3})", &[(2, 2), (2, 2), (3, 3)], "$1 $2 $3", &[r"88"], Some("0$1")),
    format(r"(\d{2})(\d{5})", &[(2, 2), (5, 5)], "$1 $2", &[r"[1-6]"], Some("0$1")),
    format(r"(\d{2})(\d{2})(\d{4})", &[(2, 2), (2, 2), (4, 4)], "$1 $2 $3", &[r"2"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"1"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[89]"], Some("0$1")),
    format(r"(\d{2})(\d{2})(\d{3})(\d{3})", &[(2, 2), (2, 2), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"5"], Some("0$1")),
];

const CF_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[26-8]"], None),
];

const CG_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1 $2 $3", &[r"8"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[02]"], None),
];

const CH_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"8[047]|90"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[2-79]|81"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{3})(\d{2})(\d{2})", &[(3, 3), (2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4 $5", &[r"8"], Some("0$1")),
];

const CI_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d)(\d{5})", &[(2, 2), (2, 2), (1, 1), (5, 5)], "$1 $2 $3 $4", &[r"2"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{4})", &[(2, 2), (2, 2), (2, 2), (4, 4)], "$1 $2 $3 $4", &[r"0"], None),
];

const CK_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})", &[(2, 2), (3, 3)], "$1 $2", &[r"[2-578]"], None),
];

const CL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})", &[(4, 4)], "$1", &[r"1(?:[03-589]|21)|[29]0|78"], None),
    format(r"(\d{5})(\d{4})", &[(5, 5), (4, 4)], "$1 $2", &[r"219", r"2196"], Some("($1)")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"60|809"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"44"], None),
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1 $2 $3", &[r"2[1-36]"], Some("($1)")),
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1 $2 $3", &[r"9(?:10|[2-9])"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"3[2-5]|[47]|5[1-3578]|6[13-57]|8(?:0[1-8]|[1-9])"], Some("($1)")),
    format(r"(\d{3})(\d{3})(\d{3,4})", &[(3, 3), (3, 3), (3, 4)], "$1 $2 $3", &[r"60|8"], None),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"1"], None),
    format(r"(\d{3})(\d{3})(\d{2})(\d{3})", &[(3, 3), (3, 3), (2, 2), (3, 3)], "$1 $2 $3 $4", &[r"60"], None),
];

const CL_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{5})(\d{4})", &[(5, 5), (4, 4)], "$1 $2", &[r"219", r"2196"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"60|809"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"44"], None),
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1 $2 $3", &[r"2[1-36]"], None),
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1 $2 $3", &[r"9(?:10|[2-9])"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"3[2-5]|[47]|5[1-3578]|6[13-57]|8(?:0[1-8]|[1-9])"], None),
    format(r"(\d{3})(\d{3})(\d{3,4})", &[(3, 3), (3, 3), (3, 4)], "$1 $2 $3", &[r"60|8"], None),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"1"], None),
    format(r"(\d{3})(\d{3})(\d{2})(\d{3})", &[(3, 3), (3, 3), (2, 2), (3, 3)], "$1 $2 $3 $4", &[r"60"], None),
];

const CM_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"88"], None),
    format(r"(\d)(\d{2})(\d{2})(\d{2})(\d{2})", &[(1, 1), (2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4 $5", &[r"[26]|88"], None),
];

const CN_FORMATS: &[NumberFormat] = &[
    format(r"(\d{5,6})", &[(5, 6)], "$1", &[r"1(?:00|2[13])|9[56]", r"1(?:00|2(?:1|39))|9[56]", r"1(?:00|2(?:1|395))|9[56]"], None),
    format(r"(\d{5,6})", &[(5, 6)], "$1", &[r"1(?:0|23)|781|[1-9]12", r"1(?:0|23)|7812|[1-9]123", r"1(?:0|23(?:[0-8]|9[0-46-9]))|78123|[1-9]123"], None),
    format(r"(\d{2})(\d{5,6})", &[(2, 2), (5, 6)], "$1 $2", &[r"(?:10|2[0-57-9])[19]|3(?:[157]|35|49|9[1-68])|4(?:1[124-9]|2[179]|6[47-9]|7|8[23])|5(?:[1357]|2[37]|4[36]|6[1-46]|80)|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:07|1[236-8]|2[5-7]|[37]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|3|4[13]|5[1-5]|7[0-79]|9[0-35-9])|(?:4[35]|59|85)[1-9]", r"(?:10|2[0-57-9])(?:1[02]|9[56])|8078|(?:3(?:[157]\d|35|49|9[1-68])|4(?:1[124-9]|2[179]|[35][1-9]|6[47-9]|7\d|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[1-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|3\d|4[13]|5[1-5]|7[0-79]|9[0-35-9]))1", r"10(?:1(?:0|23)|9[56])|2[0-57-9](?:1(?:00|23)|9[56])|80781|(?:3(?:[157]\d|35|49|9[1-68])|4(?:1[124-9]|2[179]|[35][1-9]|6[47-9]|7\d|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[1-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|3\d|4[13]|5[1-5]|7[0-79]|9[0-35-9]))12", r"10(?:1(?:0|23)|9[56])|2[0-57-9](?:1(?:00|23)|9[56])|807812|(?:3(?:[157]\d|35|49|9[1-68])|4(?:1[124-9]|2[179]|[35][1-9]|6[47-9]|7\d|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[1-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|3\d|4[13]|5[1-5]|7[0-79]|9[0-35-9]))123", r"10(?:1(?:0|23)|9[56])|2[0-57-9](?:1(?:00|23)|9[56])|(?:3(?:[157]\d|35|49|9[1-68])|4(?:1[124-9]|2[179]|[35][1-9]|6[47-9]|7\d|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:078|1[236-8]|2[5-7]|[37]\d|5[1-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|3\d|4[13]|5[1-5]|7[0-79]|9[0-35-9]))123"], Some("0$1")),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[1-9]", r"1[1-9]|26|[3-9]|(?:10|2[0-57-9])(?:[0-8]|9[0-47-9])", r"1(?:0(?:[02-8]|1(?:[013-9]|2[0-24-9])|9[0-47-9])|[1-9])|2(?:[0-57-9](?:[02-8]|1(?:0[1-9]|[13-9]|2[0-24-9])|9[0-47-9])|6)|[3-9]", r"1(?:0(?:[02-8]|1(?:[013-9]|2[0-24-9])|9[0-47-9])|[1-9])|2(?:[0-57-9](?:[02-8]|1(?:0[1-9]|[13-9]|2[0-24-9])|9[0-47-9])|6)|3(?:[0268]|3[0-46-9]|4[0-8]|9[079])|4(?:[049]|1[03]|2[02-68]|[35]0|6[0-356]|8[014-9])|5(?:0|2[0-24-689]|4[0-2457-9]|6[057-9]|8[1-9]|90)|6(?:[0-24578]|3[06-9]|6[14-79]|9[03-9])|7(?:0[02-9]|2[0135-79]|3[23]|4[0-27-9]|6[1457]|8)|8(?:[046]|1[01459]|2[0-489]|50|8[0-2459]|9[09])|9(?:0[0457]|1[08]|[268]|4[024-9]|5[06-9]|78|94)|(?:3(?:[157]\d|35|49|9[1-68])|4(?:1[124-9]|2[179]|[35][1-9]|6[47-9]|7\d|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[1-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|3\d|4[13]|5[1-5]|7[0-79]|9[0-35-9]))(?:[02-9]|1(?:[013-9]|2[0-24-9]))", r"1(?:0(?:[02-8]|1(?:[013-9]|2[0-24-9])|9[0-47-9])|[1-9])|2(?:[0-57-9](?:[02-8]|1(?:0[1-9]|[13-9]|2[0-24-9])|9[0-47-9])|6)|3(?:[0268]|3[0-46-9]|4[0-8]|9[079])|4(?:[049]|1[03]|2[02-68]|[35]0|6[0-356]|8[014-9])|5(?:0|2[0-24-689]|4[0-2457-9]|6[057-9]|8[1-9]|90)|6(?:[0-24578]|3[06-9]|6[14-79]|9[03-9])|7(?:0[02-9]|2[0135-79]|3[23]|4[0-27-9]|6[1457]|8)|8(?:0(?:[0-689]|7[0-79])|1[01459]|2[0-489]|[46]|50|8[0-2459]|9[09])|9(?:0[0457]|1[08]|[268]|4[024-9]|5[06-9]|78|94)|(?:3(?:[157]\d|35|49|9[1-68])|4(?:1[124-9]|2[179]|[35][1-9]|6[47-9]|7\d|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:078|1[236-8]|2[5-7]|[37]\d|5[1-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|3\d|4[13]|5[1-5]|7[0-79]|9[0-35-9]))(?:[02-9]|1(?:[013-9]|2[0-24-9]))"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"16[08]"], None),
    format(r"(\d{3})(\d{5,6})", &[(3, 3), (5, 6)], "$1 $2", &[r"3(?:[157]|35|49|9[1-68])|4(?:[17]|2[179]|6[47-9]|8[23])|5(?:[1357]|2[37]|4[36]|6[1-46]|80)|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|[379]|4[13]|5[1-5])|(?:4[35]|59|85)[1-9]", r"(?:3(?:[157]\d|35|49|9[1-68])|4(?:[17]\d|2[179]|[35][1-9]|6[47-9]|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[1-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|[379]\d|4[13]|5[1-5]))[19]", r"85[23](?:10|95)|(?:3(?:[157]\d|35|49|9[1-68])|4(?:[17]\d|2[179]|[35][1-9]|6[47-9]|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[14-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|[379]\d|4[13]|5[1-5]))(?:10|9[56])", r"85[23](?:100|95)|(?:3(?:[157]\d|35|49|9[1-68])|4(?:[17]\d|2[179]|[35][1-9]|6[47-9]|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[14-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|[379]\d|4[13]|5[1-5]))(?:100|9[56])"], Some("0$1")),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[1-9]", r"1(?:0(?:[02-8]|1[1-9]|9[0-47-9])|[1-9])|2(?:[0-57-9](?:[0-8]|9[0-47-9])|6)|[3-9]", r"1(?:0(?:[02-8]|1[1-9]|9[0-47-9])|[1-9])|26|3(?:[0268]|4[0-8]|9[079])|4(?:[049]|2[02-68]|[35]0|6[0-356]|8[014-9])|5(?:0|2[0-24-689]|4[0-2457-9]|6[057-9]|8[1-9]|90)|6(?:[0-24578]|3[06-9]|6[14-79]|9[03-9])|7(?:0[02-9]|2[0135-79]|3[23]|4[0-27-9]|6[1457]|8)|8(?:[046]|1[01459]|2[0-489]|5(?:0|[23][0-8])|8[0-2459]|9[09])|9(?:0[0457]|1[08]|[268]|4[024-9]|5[06-9])|(?:33|85[23]9)[0-46-9]|(?:2[0-57-9]|3(?:[157]\d|35|49|9[1-68])|4(?:[17]\d|2[179]|[35][1-9]|6[47-9]|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[14-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|[379]\d|4[13]|5[1-5]))(?:[0-8]|9[0-47-9])", r"1(?:0[02-8]|[1-9])|2(?:[0-57-9][0-8]|6)|3(?:[0268]|3[0-46-9]|4[0-8]|9[079])|4(?:[049]|2[02-68]|[35]0|6[0-356]|8[014-9])|5(?:0|2[0-24-689]|4[0-2457-9]|6[057-9]|90)|6(?:[0-24578]|3[06-9]|6[14-79]|9[03-9])|7(?:0[02-9]|2[0135-79]|3[23]|4[0-27-9]|6[1457]|8)|8(?:[046]|1[01459]|2[0-489]|5(?:0|[23](?:[02-8]|1[1-9]|9[0-46-9]))|8[0-2459]|9[09])|9(?:0[0457]|1[08]|[268]|4[024-9]|5[06-9])|(?:10|2[0-57-9])9[0-47-9]|(?:101|58|85[23]10)[1-9]|(?:3(?:[157]\d|35|49|9[1-68])|4(?:[17]\d|2[179]|[35][1-9]|6[47-9]|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[14-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|[379]\d|4[13]|5[1-5]))(?:[02-8]|1(?:0[1-9]|[1-9])|9[0-47-9])"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"(?:4|80)0"], None),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2 $3", &[r"10|2(?:[02-57-9]|1[1-9])", r"10|2(?:[02-57-9]|1[1-9])", r"10[0-79]|2(?:[02-57-9]|1[1-79])|(?:10|21)8(?:0[1-9]|[1-9])"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"3(?:[3-59]|7[02-68])|4(?:[26-8]|3[3-9]|5[2-9])|5(?:3[03-9]|[468]|7[028]|9[2-46-9])|6|7(?:[0-247]|3[04-9]|5[0-4689]|6[2368])|8(?:[1-358]|9[1-7])|9(?:[013479]|5[1-5])|(?:[34]1|55|79|87)[02-9]"], Some("0$1")),
    format(r"(\d{3})(\d{7,8})", &[(3, 3), (7, 8)], "$1 $2", &[r"9"], None),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"80"], Some("0$1")),
    format(r"(\d{3})(\d{4})(\d{4})", &[(3, 3), (4, 4), (4, 4)], "$1 $2 $3", &[r"[3-578]"], Some("0$1")),
    format(r"(\d{3})(\d{4})(\d{4})", &[(3, 3), (4, 4), (4, 4)], "$1 $2 $3", &[r"1[3-9]"], None),
    format(r"(\d{2})(\d{3})(\d{3})(\d{4})", &[(2, 2), (3, 3), (3, 3), (4, 4)], "$1 $2 $3 $4", &[r"[12]"], Some("0$1")),
];

const CN_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{5,6})", &[(2, 2), (5, 6)], "$1 $2", &[r"(?:10|2[0-57-9])[19]|3(?:[157]|35|49|9[1-68])|4(?:1[124-9]|2[179]|6[47-9]|7|8[23])|5(?:[1357]|2[37]|4[36]|6[1-46]|80)|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:07|1[236-8]|2[5-7]|[37]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|3|4[13]|5[1-5]|7[0-79]|9[0-35-9])|(?:4[35]|59|85)[1-9]", r"(?:10|2[0-57-9])(?:1[02]|9[56])|8078|(?:3(?:[157]\d|35|49|9[1-68])|4(?:1[124-9]|2[179]|[35][1-9]|6[47-9]|7\d|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[1-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|3\d|4[13]|5[1-5]|7[0-79]|9[0-35-9]))1", r"10(?:1(?:0|23)|9[56])|2[0-57-9](?:1(?:00|23)|9[56])|80781|(?:3(?:[157]\d|35|49|9[1-68])|4(?:1[124-9]|2[179]|[35][1-9]|6[47-9]|7\d|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[1-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|3\d|4[13]|5[1-5]|7[0-79]|9[0-35-9]))12", r"10(?:1(?:0|23)|9[56])|2[0-57-9](?:1(?:00|23)|9[56])|807812|(?:3(?:[157]\d|35|49|9[1-68])|4(?:1[124-9]|2[179]|[35][1-9]|6[47-9]|7\d|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[1-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|3\d|4[13]|5[1-5]|7[0-79]|9[0-35-9]))123", r"10(?:1(?:0|23)|9[56])|2[0-57-9](?:1(?:00|23)|9[56])|(?:3(?:[157]\d|35|49|9[1-68])|4(?:1[124-9]|2[179]|[35][1-9]|6[47-9]|7\d|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:078|1[236-8]|2[5-7]|[37]\d|5[1-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|3\d|4[13]|5[1-5]|7[0-79]|9[0-35-9]))123"], None),
    format(r"(\d{3})(\d{5,6})", &[(3, 3), (5, 6)], "$1 $2", &[r"3(?:[157]|35|49|9[1-68])|4(?:[17]|2[179]|6[47-9]|8[23])|5(?:[1357]|2[37]|4[36]|6[1-46]|80)|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|[379]|4[13]|5[1-5])|(?:4[35]|59|85)[1-9]", r"(?:3(?:[157]\d|35|49|9[1-68])|4(?:[17]\d|2[179]|[35][1-9]|6[47-9]|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[1-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|[379]\d|4[13]|5[1-5]))[19]", r"85[23](?:10|95)|(?:3(?:[157]\d|35|49|9[1-68])|4(?:[17]\d|2[179]|[35][1-9]|6[47-9]|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[14-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|[379]\d|4[13]|5[1-5]))(?:10|9[56])", r"85[23](?:100|95)|(?:3(?:[157]\d|35|49|9[1-68])|4(?:[17]\d|2[179]|[35][1-9]|6[47-9]|8[23])|5(?:[1357]\d|2[37]|4[36]|6[1-46]|80|9[1-9])|6(?:3[1-5]|6[0238]|9[12])|7(?:01|[1579]\d|2[248]|3[014-9]|4[3-6]|6[023689])|8(?:1[236-8]|2[5-7]|[37]\d|5[14-9]|8[36-8]|9[1-8])|9(?:0[1-3689]|1[1-79]|[379]\d|4[13]|5[1-5]))(?:100|9[56])"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"(?:4|80)0"], None),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2 $3", &[r"10|2(?:[02-57-9]|1[1-9])", r"10|2(?:[02-57-9]|1[1-9])", r"10[0-79]|2(?:[02-57-9]|1[1-79])|(?:10|21)8(?:0[1-9]|[1-9])"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"3(?:[3-59]|7[02-68])|4(?:[26-8]|3[3-9]|5[2-9])|5(?:3[03-9]|[468]|7[028]|9[2-46-9])|6|7(?:[0-247]|3[04-9]|5[0-4689]|6[2368])|8(?:[1-358]|9[1-7])|9(?:[013479]|5[1-5])|(?:[34]1|55|79|87)[02-9]"], None),
    format(r"(\d{3})(\d{7,8})", &[(3, 3), (7, 8)], "$1 $2", &[r"9"], None),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"80"], None),
    format(r"(\d{3})(\d{4})(\d{4})", &[(3, 3), (4, 4), (4, 4)], "$1 $2 $3", &[r"[3-578]"], None),
    format(r"(\d{3})(\d{4})(\d{4})", &[(3, 3), (4, 4), (4, 4)], "$1 $2 $3", &[r"1[3-9]"], None),
    format(r"(\d{2})(\d{3})(\d{3})(\d{4})", &[(2, 2), (3, 3), (3, 3), (4, 4)], "$1 $2 $3 $4", &[r"[12]"], None),
];

const CO_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"46"], None),
    format(r"(\d{3})(\d{7})", &[(3, 3), (7, 7)], "$1 $2", &[r"6|90"], None),
    format(r"(\d{3})(\d{7})", &[(3, 3), (7, 7)], "$1 $2", &[r"3[0-357]|9[14]"], None),
    format(r"(\d)(\d{3})(\d{7})", &[(1, 1), (3, 3), (7, 7)], "$1-$2-$3", &[r"1"], Some("0$1")),
];

const CO_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"46"], None),
    format(r"(\d{3})(\d{7})", &[(3, 3), (7, 7)], "$1 $2", &[r"6|90"], None),
    format(r"(\d{3})(\d{7})", &[(3, 3), (7, 7)], "$1 $2", &[r"3[0-357]|9[14]"], None),
    format(r"(\d)(\d{3})(\d{7})", &[(1, 1), (3, 3), (7, 7)], "$1 $2 $3", &[r"1"], None),
];

const CR_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[2-7]|8[3-9]"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1-$2-$3", &[r"[89]"], None),
];

const CU_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{4,6})", &[(2, 2), (4, 6)], "$1 $2", &[r"2[1-4]|[34]"], Some("(0$1)")),
    format(r"(\d)(\d{6,7})", &[(1, 1), (6, 7)], "$1 $2", &[r"7"], Some("(0$1)")),
    format(r"(\d)(\d{7})", &[(1, 1), (7, 7)], "$1 $2", &[r"[56]"], Some("0$1")),
    format(r"(\d{3})(\d{7})", &[(3, 3), (7, 7)], "$1 $2", &[r"8"], Some("0$1")),
];

const CV_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2)], "$1 $2 $3", &[r"[2-589]"], None),
];

const CW_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[3467]"], None),
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2 $3", &[r"9[4-8]"], None),
];

const CY_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{6})", &[(2, 2), (6, 6)], "$1 $2", &[r"[257-9]"], None),
];

const CZ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[2-8]|9[015-7]"], None),
    format(r"(\d{2})(\d{3})(\d{3})(\d{2})", &[(2, 2), (3, 3), (3, 3), (2, 2)], "$1 $2 $3 $4", &[r"96"], None),
    format(r"(\d{2})(\d{3})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"9"], None),
    format(r"(\d{3})(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"9"], None),
];

const DE_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3,13})", &[(2, 2), (3, 13)], "$1 $2", &[r"3[02]|40|[68]9"], Some("0$1")),
    format(r"(\d{6})", &[(6, 6)], "$1", &[r"227", r"2277"], None),
    format(r"(\d{3})(\d{3,12})", &[(3, 3), (3, 12)], "$1 $2", &[r"2(?:0[1-389]|1[124]|2[18]|3[14])|3(?:[35-9][15]|4[015])|906|(?:2[4-9]|4[2-9]|[579][1-9]|[68][1-8])1", r"2(?:0[1-389]|12[0-8])|3(?:[35-9][15]|4[015])|906|2(?:[13][14]|2[18])|(?:2[4-9]|4[2-9]|[579][1-9]|[68][1-8])1"], Some("0$1")),
    format(r"(\d{4})(\d{2,11})", &[(4, 4), (2, 11)], "$1 $2", &[r"[24-6]|3(?:[3569][02-46-9]|4[2-4679]|7[2-467]|8[2-46-8])|70[2-8]|8(?:0[2-9]|[1-8])|90[7-9]|[79][1-9]", r"[24-6]|3(?:3(?:0[1-467]|2[127-9]|3[124578]|7[1257-9]|8[1256]|9[145])|4(?:2[135]|4[13578]|9[1346])|5(?:0[14]|2[1-3589]|6[1-4]|7[13468]|8[13568])|6(?:2[1-489]|3[124-6]|6[13]|7[12579]|8[1-356]|9[135])|7(?:2[1-7]|4[145]|6[1-5]|7[1-4])|8(?:21|3[1468]|6|7[1467]|8[136])|9(?:0[12479]|2[1358]|4[134679]|6[1-9]|7[136]|8[147]|9[1468]))|70[2-8]|8(?:0[2-9]|[1-8])|90[7-9]|[79][1-9]|3[68]4[1347]|3(?:47|60)[1356]|3(?:3[46]|46|5[49])[1246]|3[4579]3[1357]"], Some("0$1")),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"138"], Some("0$1")),
    format(r"(\d{5})(\d{2,10})", &[(5, 5), (2, 10)], "$1 $2", &[r"3"], Some("0$1")),
    format(r"(\d{3})(\d{5,11})", &[(3, 3), (5, 11)], "$1 $2", &[r"181"], Some("0$1")),
    format(r"(\d{3})(\d)(\d{4,10})", &[(3, 3), (1, 1), (4, 10)], "$1 $2 $3", &[r"1(?:3|80)|9"], Some("0$1")),
    format(r"(\d{3})(\d{7,8})", &[(3, 3), (7, 8)], "$1 $2", &[r"1[67]"], Some("0$1")),
    format(r"(\d{3})(\d{7,12})", &[(3, 3), (7, 12)], "$1 $2", &[r"8"], Some("0$1")),
    format(r"(\d{5})(\d{6})", &[(5, 5), (6, 6)], "$1 $2", &[r"185", r"1850", r"18500"], Some("0$1")),
    format(r"(\d{3})(\d{4})(\d{4})", &[(3, 3), (4, 4), (4, 4)], "$1 $2 $3", &[r"7"], Some("0$1")),
    format(r"(\d{4})(\d{7})", &[(4, 4), (7, 7)], "$1 $2", &[r"18[68]"], Some("0$1")),
    format(r"(\d{4})(\d{7})", &[(4, 4), (7, 7)], "$1 $2", &[r"15[1279]"], Some("0$1")),
    format(r"(\d{5})(\d{6})", &[(5, 5), (6, 6)], "$1 $2", &[r"15[03568]", r"15(?:[0568]|3[13])"], Some("0$1")),
    format(r"(\d{3})(\d{8})", &[(3, 3), (8, 8)], "$1 $2", &[r"18"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{7,8})", &[(3, 3), (2, 2), (7, 8)], "$1 $2 $3", &[r"1(?:6[023]|7)"], Some("0$1")),
    format(r"(\d{4})(\d{2})(\d{7})", &[(4, 4), (2, 2), (7, 7)], "$1 $2 $3", &[r"15[279]"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{8})", &[(3, 3), (2, 2), (8, 8)], "$1 $2 $3", &[r"15"], Some("0$1")),
];

const DE_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3,13})", &[(2, 2), (3, 13)], "$1 $2", &[r"3[02]|40|[68]9"], None),
    format(r"(\d{3})(\d{3,12})", &[(3, 3), (3, 12)], "$1 $2", &[r"2(?:0[1-389]|1[124]|2[18]|3[14])|3(?:[35-9][15]|4[015])|906|(?:2[4-9]|4[2-9]|[579][1-9]|[68][1-8])1", r"2(?:0[1-389]|12[0-8])|3(?:[35-9][15]|4[015])|906|2(?:[13][14]|2[18])|(?:2[4-9]|4[2-9]|[579][1-9]|[68][1-8])1"], None),
    format(r"(\d{4})(\d{2,11})", &[(4, 4), (2, 11)], "$1 $2", &[r"[24-6]|3(?:[3569][02-46-9]|4[2-4679]|7[2-467]|8[2-46-8])|70[2-8]|8(?:0[2-9]|[1-8])|90[7-9]|[79][1-9]", r"[24-6]|3(?:3(?:0[1-467]|2[127-9]|3[124578]|7[1257-9]|8[1256]|9[145])|4(?:2[135]|4[13578]|9[1346])|5(?:0[14]|2[1-3589]|6[1-4]|7[13468]|8[13568])|6(?:2[1-489]|3[124-6]|6[13]|7[12579]|8[1-356]|9[135])|7(?:2[1-7]|4[145]|6[1-5]|7[1-4])|8(?:21|3[1468]|6|7[1467]|8[136])|9(?:0[12479]|2[1358]|4[134679]|6[1-9]|7[136]|8[147]|9[1468]))|70[2-8]|8(?:0[2-9]|[1-8])|90[7-9]|[79][1-9]|3[68]4[1347]|3(?:47|60)[1356]|3(?:3[46]|46|5[49])[1246]|3[4579]3[1357]"], None),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"138"], None),
    format(r"(\d{5})(\d{2,10})", &[(5, 5), (2, 10)], "$1 $2", &[r"3"], None),
    format(r"(\d{3})(\d{5,11})", &[(3, 3), (5, 11)], "$1 $2", &[r"181"], None),
    format(r"(\d{3})(\d)(\d{4,10})", &[(3, 3), (1, 1), (4, 10)], "$1 $2 $3", &[r"1(?:3|80)|9"], None),
    format(r"(\d{3})(\d{7,8})", &[(3, 3), (7, 8)], "$1 $2", &[r"1[67]"], None),
    format(r"(\d{3})(\d{7,12})", &[(3, 3), (7, 12)], "$1 $2", &[r"8"], None),
    format(r"(\d{5})(\d{6})", &[(5, 5), (6, 6)], "$1 $2", &[r"185", r"1850", r"18500"], None),
    format(r"(\d{3})(\d{4})(\d{4})", &[(3, 3), (4, 4), (4, 4)], "$1 $2 $3", &[r"7"], None),
    format(r"(\d{4})(\d{7})", &[(4, 4), (7, 7)], "$1 $2", &[r"18[68]"], None),
    format(r"(\d{4})(\d{7})", &[(4, 4), (7, 7)], "$1 $2", &[r"15[1279]"], None),
    format(r"(\d{5})(\d{6})", &[(5, 5), (6, 6)], "$1 $2", &[r"15[03568]", r"15(?:[0568]|3[13])"], None),
    format(r"(\d{3})(\d{8})", &[(3, 3), (8, 8)], "$1 $2", &[r"18"], None),
    format(r"(\d{3})(\d{2})(\d{7,8})", &[(3, 3), (2, 2), (7, 8)], "$1 $2 $3", &[r"1(?:6[023]|7)"], None),
    format(r"(\d{4})(\d{2})(\d{7})", &[(4, 4), (2, 2), (7, 7)], "$1 $2 $3", &[r"15[279]"], None),
    format(r"(\d{3})(\d{2})(\d{8})", &[(3, 3), (2, 2), (8, 8)], "$1 $2 $3", &[r"15"], None),
];

const DJ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[27]"], None),
];

const DK_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[2-9]"], None),
];

const DZ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[1-4]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"9"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[5-8]"], Some("0$1")),
];

const EC_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1-$2", &[r"[2-7]"], None),
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2-$3", &[r"[2-7]"], Some("(0$1)")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"9"], Some("0$1")),
    format(r"(\d{4})(\d{3})(\d{3,4})", &[(4, 4), (3, 3), (3, 4)], "$1 $2 $3", &[r"1"], None),
];

const EC_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1-$2-$3", &[r"[2-7]"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"9"], None),
    format(r"(\d{4})(\d{3})(\d{3,4})", &[(4, 4), (3, 3), (3, 4)], "$1 $2 $3", &[r"1"], None),
];

const EE_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[369]|4[3-8]|5(?:[0-2]|5[0-478]|6[45])|7[1-9]|88", r"[369]|4[3-8]|5(?:[02]|1(?:[0-8]|95)|5[0-478]|6(?:4[0-4]|5[1-589]))|7[1-9]|88"], None),
    format(r"(\d{4})(\d{3,4})", &[(4, 4), (3, 4)], "$1 $2", &[r"[45]|8(?:00|[1-49])", r"[45]|8(?:00[1-9]|[1-49])"], None),
    format(r"(\d{2})(\d{2})(\d{4})", &[(2, 2), (2, 2), (4, 4)], "$1 $2 $3", &[r"7"], None),
    format(r"(\d{4})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3)], "$1 $2 $3", &[r"8"], None),
];

const EG_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{7,8})", &[(1, 1), (7, 8)], "$1 $2", &[r"[23]"], Some("0$1")),
    format(r"(\d{2})(\d{6,7})", &[(2, 2), (6, 7)], "$1 $2", &[r"1[35]|[4-6]|8[2468]|9[235-7]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"[89]"], Some("0$1")),
    format(r"(\d{2})(\d{8})", &[(2, 2), (8, 8)], "$1 $2", &[r"1"], Some("0$1")),
];

const ER_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{3})", &[(1, 1), (3, 3), (3, 3)], "$1 $2 $3", &[r"[178]"], Some("0$1")),
];

const ES_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})", &[(4, 4)], "$1", &[r"905"], None),
    format(r"(\d{6})", &[(6, 6)], "$1", &[r"[79]9"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[89]00"], None),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[5-9]"], None),
];

const ES_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[89]00"], None),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[5-9]"], None),
];

const ET_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[1-57-9]"], Some("0$1")),
];

const FI_FORMATS: &[NumberFormat] = &[
    format(r"(\d{5})", &[(5, 5)], "$1", &[r"75[12]"], Some("0$1")),
    format(r"(\d{5})", &[(5, 5)], "$1", &[r"20[2-59]"], Some("0$1")),
    format(r"(\d{6})", &[(6, 6)], "$1", &[r"11"], None),
    format(r"(\d{3})(\d{3,7})", &[(3, 3), (3, 7)], "$1 $2", &[r"(?:[1-3]0|[68])0|70[07-9]"], Some("0$1")),
    format(r"(\d{2})(\d{4,8})", &[(2, 2), (4, 8)], "$1 $2", &[r"[14]|2[09]|50|7[135]"], Some("0$1")),
    format(r"(\d{2})(\d{6,10})", &[(2, 2), (6, 10)], "$1 $2", &[r"7"], Some("0$1")),
    format(r"(\d)(\d{4,9})", &[(1, 1), (4, 9)], "$1 $2", &[r"(?:19|[2568])[1-8]|3(?:0[1-9]|[1-9])|9"], Some("0$1")),
];

const FI_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{5})", &[(5, 5)], "$1", &[r"20[2-59]"], None),
    format(r"(\d{3})(\d{3,7})", &[(3, 3), (3, 7)], "$1 $2", &[r"(?:[1-3]0|[68])0|70[07-9]"], None),
    format(r"(\d{2})(\d{4,8})", &[(2, 2), (4, 8)], "$1 $2", &[r"[14]|2[09]|50|7[135]"], None),
    format(r"(\d{2})(\d{6,10})", &[(2, 2), (6, 10)], "$1 $2", &[r"7"], None),
    format(r"(\d)(\d{4,9})", &[(1, 1), (4, 9)], "$1 $2", &[r"(?:19|[2568])[1-8]|3(?:0[1-9]|[1-9])|9"], None),
];

const FJ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[235-9]|45"], None),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"0"], None),
];

const FM_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[389]"], None),
];

const FO_FORMATS: &[NumberFormat] = &[
    format(r"(\d{6})", &[(6, 6)], "$1", &[r"[2-9]"], None),
];

const FR_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})", &[(4, 4)], "$1", &[r"10"], None),
    format(r"(\d{3})(\d{3})", &[(3, 3), (3, 3)], "$1 $2", &[r"1"], None),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"8"], Some("0 $1")),
    format(r"(\d)(\d{2})(\d{2})(\d{2})(\d{2})", &[(1, 1), (2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4 $5", &[r"[1-79]"], Some("0$1")),
];

const FR_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"8"], None),
    format(r"(\d)(\d{2})(\d{2})(\d{2})(\d{2})", &[(1, 1), (2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4 $5", &[r"[1-79]"], None),
];

const GA_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{2})(\d{2})(\d{2})", &[(1, 1), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[2-7]"], Some("0$1")),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"0"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"11|[67]"], Some("0$1")),
];

const GB_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"800", r"8001", r"80011", r"800111", r"8001111"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2)], "$1 $2 $3", &[r"845", r"8454", r"84546", r"845464"], Some("0$1")),
    format(r"(\d{3})(\d{6})", &[(3, 3), (6, 6)], "$1 $2", &[r"800"], Some("0$1")),
    format(r"(\d{5})(\d{4,5})", &[(5, 5), (4, 5)], "$1 $2", &[r"1(?:38|5[23]|69|76|94)", r"1(?:(?:38|69)7|5(?:24|39)|768|946)", r"1(?:3873|5(?:242|39[4-6])|(?:697|768)[347]|9467)"], Some("0$1")),
    format(r"(\d{4})(\d{5,6})", &[(4, 4), (5, 6)], "$1 $2", &[r"1(?:[2-69][02-9]|[78])"], Some("0$1")),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2 $3", &[r"[25]|7(?:0|6[02-9])", r"[25]|7(?:0|6(?:[03-9]|2[356]))"], Some("0$1")),
    format(r"(\d{4})(\d{6})", &[(4, 4), (6, 6)], "$1 $2", &[r"7"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"[1389]"], Some("0$1")),
];

const GE_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"70"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"32"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[57]"], None),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[348]"], Some("0$1")),
];

const GF_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[5-7]|80[6-9]|9[47]"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[89]"], Some("0$1")),
];

const GH_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[237]|8[0-2]"], None),
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"8"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[2358]"], Some("0$1")),
];

const GH_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"8"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[2358]"], None),
];

const GI_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"2"], None),
];

const GL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2)], "$1 $2 $3", &[r"19|[2-9]"], None),
];

const GM_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[2-9]"], None),
];

const GN_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"3"], None),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[67]"], None),
];

const GP_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[5-79]|80[6-9]"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"8"], Some("0$1")),
];

const GQ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[235]"], None),
    format(r"(\d{3})(\d{6})", &[(3, 3), (6, 6)], "$1 $2", &[r"[89]"], None),
];

const GR_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2 $3", &[r"21|7"], None),
    format(r"(\d{4})(\d{6})", &[(4, 4), (6, 6)], "$1 $2", &[r"2(?:2|3[2-57-9]|4[2-469]|5[2-59]|6[2-9]|7[2-69]|8[2-49])|5"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"[2689]"], None),
    format(r"(\d{3})(\d{3,4})(\d{5})", &[(3, 3), (3, 4), (5, 5)], "$1 $2 $3", &[r"8"], None),
];

const GT_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[2-8]"], None),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"1"], None),
];

const GW_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"40"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[49]"], None),
];

const GY_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[2-9]"], None),
];

const HK_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2,5})", &[(3, 3), (2, 5)], "$1 $2", &[r"900", r"9003"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[2-7]|8[1-4]|9(?:0[1-9]|[1-8])"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"8"], None),
    format(r"(\d{3})(\d{2})(\d{3})(\d{3})", &[(3, 3), (2, 2), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"9"], None),
];

const HN_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1-$2", &[r"[237-9]"], None),
    format(r"(\d{3})(\d{4})(\d{4})", &[(3, 3), (4, 4), (4, 4)], "$1 $2 $3", &[r"8"], None),
];

const HN_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1-$2", &[r"[237-9]"], None),
];

const HR_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{3})", &[(2, 2), (2, 2), (3, 3)], "$1 $2 $3", &[r"6[01]"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{2,3})", &[(3, 3), (2, 2), (2, 3)], "$1 $2 $3", &[r"8"], Some("0$1")),
    format(r"(\d)(\d{4})(\d{3})", &[(1, 1), (4, 4), (3, 3)], "$1 $2 $3", &[r"1"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"6|7[245]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"9"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"[2-57]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"8"], Some("0$1")),
];

const HT_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{4})", &[(2, 2), (2, 2), (4, 4)], "$1 $2 $3", &[r"[2-589]"], None),
];

const HU_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2 $3", &[r"1"], Some("(06 $1)")),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"[27][2-9]|3[2-7]|4[24-9]|5[2-79]|6|8[2-57-9]|9[2-69]"], Some("(06 $1)")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"[2-9]"], Some("06 $1")),
];

const ID_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{3})", &[(1, 1), (3, 3), (3, 3)], "$1 $2 $3", &[r"15"], None),
    format(r"(\d{2})(\d{5,9})", &[(2, 2), (5, 9)], "$1 $2", &[r"2[124]|[36]1"], Some("(0$1)")),
    format(r"(\d{3})(\d{5,7})", &[(3, 3), (5, 7)], "$1 $2", &[r"800"], Some("0$1")),
    format(r"(\d{3})(\d{5,8})", &[(3, 3), (5, 8)], "$1 $2", &[r"[2-79]"], Some("(0$1)")),
    format(r"(\d{3})(\d{3,4})(\d{3})", &[(3, 3), (3, 4), (3, 3)], "$1-$2-$3", &[r"8[1-35-9]"], Some("0$1")),
    format(r"(\d{3})(\d{6,8})", &[(3, 3), (6, 8)], "$1 $2", &[r"1"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"804"], Some("0$1")),
    format(r"(\d{3})(\d)(\d{3})(\d{3})", &[(3, 3), (1, 1), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"80"], Some("0$1")),
    format(r"(\d{3})(\d{4})(\d{4,5})", &[(3, 3), (4, 4), (4, 5)], "$1-$2-$3", &[r"8"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})(\d{2,8})", &[(3, 3), (3, 3), (3, 3), (2, 8)], "$1 $2 $3 $4", &[r"001"], None),
    format(r"(\d{2})(\d{4})(\d{3})(\d{4})", &[(2, 2), (4, 4), (3, 3), (4, 4)], "$1 $2 $3 $4", &[r"0"], None),
];

const ID_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{3})", &[(1, 1), (3, 3), (3, 3)], "$1 $2 $3", &[r"15"], None),
    format(r"(\d{2})(\d{5,9})", &[(2, 2), (5, 9)], "$1 $2", &[r"2[124]|[36]1"], None),
    format(r"(\d{3})(\d{5,7})", &[(3, 3), (5, 7)], "$1 $2", &[r"800"], None),
    format(r"(\d{3})(\d{5,8})", &[(3, 3), (5, 8)], "$1 $2", &[r"[2-79]"], None),
    format(r"(\d{3})(\d{3,4})(\d{3})", &[(3, 3), (3, 4), (3, 3)], "$1-$2-$3", &[r"8[1-35-9]"], None),
    format(r"(\d{3})(\d{6,8})", &[(3, 3), (6, 8)], "$1 $2", &[r"1"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"804"], None),
    format(r"(\d{3})(\d)(\d{3})(\d{3})", &[(3, 3), (1, 1), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"80"], None),
    format(r"(\d{3})(\d{4})(\d{4,5})", &[(3, 3), (4, 4), (4, 5)], "$1-$2-$3", &[r"8"], None),
];

const IE_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{5})", &[(2, 2), (5, 5)], "$1 $2", &[r"2[24-9]|47|58|6[237-9]|9[35-9]"], Some("(0$1)")),
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"[45]0"], Some("(0$1)")),
    format(r"(\d)(\d{3,4})(\d{4})", &[(1, 1), (3, 4), (4, 4)], "$1 $2 $3", &[r"1"], Some("(0$1)")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"[2569]|4[1-69]|7[14]"], Some("(0$1)")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"70"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"81"], Some("(0$1)")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[78]"], Some("0$1")),
    format(r"(\d{4})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3)], "$1 $2 $3", &[r"1"], None),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2 $3", &[r"4"], Some("(0$1)")),
    format(r"(\d{2})(\d)(\d{3})(\d{4})", &[(2, 2), (1, 1), (3, 3), (4, 4)], "$1 $2 $3 $4", &[r"8"], Some("0$1")),
];

const IL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{3})", &[(4, 4), (3, 3)], "$1-$2", &[r"125"], None),
    format(r"(\d{4})(\d{2})(\d{2})", &[(4, 4), (2, 2), (2, 2)], "$1-$2-$3", &[r"121"], None),
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1-$2-$3", &[r"[2-489]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1-$2-$3", &[r"[57]"], Some("0$1")),
    format(r"(\d{4})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3)], "$1-$2-$3", &[r"12"], None),
    format(r"(\d{4})(\d{6})", &[(4, 4), (6, 6)], "$1-$2", &[r"159"], None),
    format(r"(\d)(\d{3})(\d{3})(\d{3})", &[(1, 1), (3, 3), (3, 3), (3, 3)], "$1-$2-$3-$4", &[r"1[7-9]"], None),
    format(r"(\d{3})(\d{1,2})(\d{3})(\d{4})", &[(3, 3), (1, 2), (3, 3), (4, 4)], "$1-$2 $3-$4", &[r"15"], None),
];

const IN_FORMATS: &[NumberFormat] = &[
    format(r"(\d{7})", &[(7, 7)], "$1", &[r"575"], None),
    format(r"(\d{8})", &[(8, 8)], "$1", &[r"5(?:0|2[23]|3[03]|[67]1|88)", r"5(?:0|2(?:21|3)|3(?:0|3[23])|616|717|888)", r"5(?:0|2(?:21|3)|3(?:0|3[23])|616|717|8888)"], None),
    format(r"(\d{4})(\d{4,5})", &[(4, 4), (4, 5)], "$1 $2", &[r"180", r"1800"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"140"], None),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2 $3", &[r"11|2[02]|33|4[04]|79[1-7]|80[2-46]", r"11|2[02]|33|4[04]|79(?:[1-6]|7[19])|80(?:[2-4]|6[0-589])", r"11|2[02]|33|4[04]|79(?:[124-6]|3(?:[02-9]|1[0-24-9])|7(?:1|9[1-6]))|80(?:[2-4]|6[0-589])"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"1(?:2[0-249]|3[0-25]|4[145]|[68]|7[1257])|2(?:1[257]|3[013]|4[01]|5[0137]|6[0158]|78|8[1568])|3(?:26|4[1-3]|5[34]|6[01489]|7[02-46]|8[159])|4(?:1[36]|2[1-47]|5[12]|6[0-26-9]|7[0-24-9]|8[013-57]|9[014-7])|5(?:1[025]|22|[36][25]|4[28]|5[12]|[78]1)|6(?:12|[2-4]1|5[17]|6[13]|80)|7(?:12|3[134]|61|88)|8(?:16|2[014]|3[126]|6[136]|7[078]|8[34]|91)|(?:43|59|75)[15]|(?:1[59]|29|67)[14]", r"1(?:2[0-24]|3[0-25]|4[145]|[59][14]|6[1-9]|7[1257]|8[1-57-9])|2(?:1[257]|3[013]|4[01]|5[0137]|6[058]|78|8[1568]|9[14])|3(?:26|4[1-3]|5[34]|6[01489]|7[02-46]|8[159])|4(?:1[36]|2[1-47]|3[15]|5[12]|6[0-26-9]|7[0-24-9]|8[013-57]|9[014-7])|5(?:1[025]|22|[36][25]|4[28]|[578]1|9[15])|674|7(?:(?:3[34]|5[15])[2-6]|61[346]|88[0-8])|8(?:70[2-6]|84[235-7]|91[3-7])|(?:1(?:29|60|8[06])|261|552|6(?:12|[2-47]1|5[17]|6[13]|80)|7(?:12|31)|8(?:16|2[014]|3[126]|6[136]|7[78]|83))[2-7]", r"1(?:2[0-24]|3[0-25]|4[145]|[59][14]|6[1-9]|7[1257]|8[1-57-9])|2(?:1[257]|3[013]|4[01]|5[0137]|6[058]|78|8[1568]|9[14])|3(?:26|4[1-3]|5[34]|6[01489]|7[02-46]|8[159])|4(?:1[36]|2[1-47]|3[15]|5[12]|6[0-26-9]|7[0-24-9]|8[013-57]|9[014-7])|5(?:1[025]|22|[36][25]|4[28]|[578]1|9[15])|6(?:12(?:[2-6]|7[0-8])|74[2-7])|7(?:3171|5[15][2-6]|61[346]|88(?:[2-7]|82))|8(?:70[2-6]|84(?:[2356]|7[19])|91(?:[3-6]|7[19]))|73[134][2-6]|8(?:16|2[014]|3[126]|6[136]|7[78]|83)(?:[2-6]|7[19])|(?:1(?:29|60|8[06])|261|552|6(?:[2-4]1|5[17]|6[13]|7(?:1|4[0189])|80)|7(?:12|88[01]))[2-7]"], Some("0$1")),
    format(r"(\d{4})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3)], "$1 $2 $3", &[r"1(?:[2-479]|5[0235-9])|[2-5]|6(?:1[1358]|2[2457-9]|3[2-5]|4[235-7]|5[2-689]|6[24578]|7[235689]|8[1-6])|7(?:1[013-9]|3[129]|5[29]|6[02-5]|70)|807", r"1(?:[2-479]|5[0235-9])|[2-5]|6(?:1[1358]|2(?:[2457]|84|95)|3(?:[2-4]|55)|4[235-7]|5[2-689]|6[24578]|7(?:[23569]|8[0-57-9])|8[1-6])|7(?:1(?:[013-8]|9[6-9])|3(?:17|2[0-49]|9[2-57])|5(?:2[1-3]|9[0-6])|6(?:0[5689]|2[5-9]|3[02-8]|4|5[0-367])|70[13-7])|807[19]", r"1(?:[2-479]|5(?:[0236-9]|5[013-9]))|[2-5]|6(?:2(?:84|95)|355|8(?:28[235-7]|3))|73179|807(?:1|9[1-3])|(?:1552|6(?:(?:1[1358]|2[2457]|3[2-4]|4[235-7]|5[2-689]|6[24578])\d|7(?:[23569]\d|8[0-57-9])|8(?:[14-6]\d|2[0-79]))|7(?:1(?:[013-8]\d|9[6-9])|3(?:2[0-49]|9[2-57])|5(?:2[1-3]|9[0-6])|6(?:0[5689]|2[5-9]|3[02-8]|4\d|5[0-367])|70[13-7]))[2-7]"], Some("0$1")),
    format(r"(\d{5})(\d{5})", &[(5, 5), (5, 5)], "$1 $2", &[r"16|[6-9]"], Some("0$1")),
    format(r"(\d{4})(\d{2,4})(\d{4})", &[(4, 4), (2, 4), (4, 4)], "$1 $2 $3", &[r"18[06]", r"18[06]0"], None),
    format(r"(\d{3})(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (3, 3), (4, 4)], "$1 $2 $3 $4", &[r"0"], None),
    format(r"(\d{4})(\d{3})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"18"], None),
];

const IN_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{8})", &[(8, 8)], "$1", &[r"5(?:0|2[23]|3[03]|[67]1|88)", r"5(?:0|2(?:21|3)|3(?:0|3[23])|616|717|888)", r"5(?:0|2(?:21|3)|3(?:0|3[23])|616|717|8888)"], None),
    format(r"(\d{4})(\d{4,5})", &[(4, 4), (4, 5)], "$1 $2", &[r"180", r"1800"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"140"], None),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2 $3", &[r"11|2[02]|33|4[04]|79[1-7]|80[2-46]", r"11|2[02]|33|4[04]|79(?:[1-6]|7[19])|80(?:[2-4]|6[0-589])", r"11|2[02]|33|4[04]|79(?:[124-6]|3(?:[02-9]|1[0-24-9])|7(?:1|9[1-6]))|80(?:[2-4]|6[0-589])"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"1(?:2[0-249]|3[0-25]|4[145]|[68]|7[1257])|2(?:1[257]|3[013]|4[01]|5[0137]|6[0158]|78|8[1568])|3(?:26|4[1-3]|5[34]|6[01489]|7[02-46]|8[159])|4(?:1[36]|2[1-47]|5[12]|6[0-26-9]|7[0-24-9]|8[013-57]|9[014-7])|5(?:1[025]|22|[36][25]|4[28]|5[12]|[78]1)|6(?:12|[2-4]1|5[17]|6[13]|80)|7(?:12|3[134]|61|88)|8(?:16|2[014]|3[126]|6[136]|7[078]|8[34]|91)|(?:43|59|75)[15]|(?:1[59]|29|67)[14]", r"1(?:2[0-24]|3[0-25]|4[145]|[59][14]|6[1-9]|7[1257]|8[1-57-9])|2(?:1[257]|3[013]|4[01]|5[0137]|6[058]|78|8[1568]|9[14])|3(?:26|4[1-3]|5[34]|6[01489]|7[02-46]|8[159])|4(?:1[36]|2[1-47]|3[15]|5[12]|6[0-26-9]|7[0-24-9]|8[013-57]|9[014-7])|5(?:1[025]|22|[36][25]|4[28]|[578]1|9[15])|674|7(?:(?:3[34]|5[15])[2-6]|61[346]|88[0-8])|8(?:70[2-6]|84[235-7]|91[3-7])|(?:1(?:29|60|8[06])|261|552|6(?:12|[2-47]1|5[17]|6[13]|80)|7(?:12|31)|8(?:16|2[014]|3[126]|6[136]|7[78]|83))[2-7]", r"1(?:2[0-24]|3[0-25]|4[145]|[59][14]|6[1-9]|7[1257]|8[1-57-9])|2(?:1[257]|3[013]|4[01]|5[0137]|6[058]|78|8[1568]|9[14])|3(?:26|4[1-3]|5[34]|6[01489]|7[02-46]|8[159])|4(?:1[36]|2[1-47]|3[15]|5[12]|6[0-26-9]|7[0-24-9]|8[013-57]|9[014-7])|5(?:1[025]|22|[36][25]|4[28]|[578]1|9[15])|6(?:12(?:[2-6]|7[0-8])|74[2-7])|7(?:3171|5[15][2-6]|61[346]|88(?:[2-7]|82))|8(?:70[2-6]|84(?:[2356]|7[19])|91(?:[3-6]|7[19]))|73[134][2-6]|8(?:16|2[014]|3[126]|6[136]|7[78]|83)(?:[2-6]|7[19])|(?:1(?:29|60|8[06])|261|552|6(?:[2-4]1|5[17]|6[13]|7(?:1|4[0189])|80)|7(?:12|88[01]))[2-7]"], None),
    format(r"(\d{4})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3)], "$1 $2 $3", &[r"1(?:[2-479]|5[0235-9])|[2-5]|6(?:1[1358]|2[2457-9]|3[2-5]|4[235-7]|5[2-689]|6[24578]|7[235689]|8[1-6])|7(?:1[013-9]|3[129]|5[29]|6[02-5]|70)|807", r"1(?:[2-479]|5[0235-9])|[2-5]|6(?:1[1358]|2(?:[2457]|84|95)|3(?:[2-4]|55)|4[235-7]|5[2-689]|6[24578]|7(?:[23569]|8[0-57-9])|8[1-6])|7(?:1(?:[013-8]|9[6-9])|3(?:17|2[0-49]|9[2-57])|5(?:2[1-3]|9[0-6])|6(?:0[5689]|2[5-9]|3[02-8]|4|5[0-367])|70[13-7])|807[19]", r"1(?:[2-479]|5(?:[0236-9]|5[013-9]))|[2-5]|6(?:2(?:84|95)|355|8(?:28[235-7]|3))|73179|807(?:1|9[1-3])|(?:1552|6(?:(?:1[1358]|2[2457]|3[2-4]|4[235-7]|5[2-689]|6[24578])\d|7(?:[23569]\d|8[0-57-9])|8(?:[14-6]\d|2[0-79]))|7(?:1(?:[013-8]\d|9[6-9])|3(?:2[0-49]|9[2-57])|5(?:2[1-3]|9[0-6])|6(?:0[5689]|2[5-9]|3[02-8]|4\d|5[0-367])|70[13-7]))[2-7]"], None),
    format(r"(\d{5})(\d{5})", &[(5, 5), (5, 5)], "$1 $2", &[r"16|[6-9]"], None),
    format(r"(\d{4})(\d{2,4})(\d{4})", &[(4, 4), (2, 4), (4, 4)], "$1 $2 $3", &[r"18[06]", r"18[06]0"], None),
    format(r"(\d{4})(\d{3})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"18"], None),
];

const IO_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"3"], None),
];

const IQ_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2 $3", &[r"1"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"[2-6]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"7"], Some("0$1")),
];

const IR_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4,5})", &[(4, 5)], "$1", &[r"96"], Some("0$1")),
    format(r"(\d{2})(\d{4,5})", &[(2, 2), (4, 5)], "$1 $2", &[r"(?:1[137]|2[13-68]|3[1458]|4[145]|5[1468]|6[16]|7[1467]|8[13467])[12689]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3,4})", &[(3, 3), (3, 3), (3, 4)], "$1 $2 $3", &[r"9"], Some("0$1")),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2 $3", &[r"[1-8]"], Some("0$1")),
];

const IS_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[4-9]"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"3"], None),
];

const IT_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4,5})", &[(4, 5)], "$1", &[r"1(?:0|9[246])", r"1(?:0|9(?:2[2-9]|[46]))"], None),
    format(r"(\d{6})", &[(6, 6)], "$1", &[r"1(?:1|92)"], None),
    format(r"(\d{2})(\d{4,6})", &[(2, 2), (4, 6)], "$1 $2", &[r"0[26]"], None),
    format(r"(\d{3})(\d{3,6})", &[(3, 3), (3, 6)], "$1 $2", &[r"0[13-57-9][0159]|8(?:03|4[17]|9[2-5])", r"0[13-57-9][0159]|8(?:03|4[17]|9(?:2|3[04]|[45][0-4]))"], None),
    format(r"(\d{4})(\d{2,6})", &[(4, 4), (2, 6)], "$1 $2", &[r"0(?:[13-579][2-46-8]|8[236-8])"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"894"], None),
    format(r"(\d{2})(\d{3,4})(\d{4})", &[(2, 2), (3, 4), (4, 4)], "$1 $2 $3", &[r"0[26]|5"], None),
    format(r"(\d{3})(\d{3})(\d{3,4})", &[(3, 3), (3, 3), (3, 4)], "$1 $2 $3", &[r"1(?:44|[679])|[378]|43"], None),
    format(r"(\d{3})(\d{3,4})(\d{4})", &[(3, 3), (3, 4), (4, 4)], "$1 $2 $3", &[r"0[13-57-9][0159]|14"], None),
    format(r"(\d{2})(\d{4})(\d{5})", &[(2, 2), (4, 4), (5, 5)], "$1 $2 $3", &[r"0[26]"], None),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"0"], None),
    format(r"(\d{3})(\d{4})(\d{4,5})", &[(3, 3), (4, 4), (4, 5)], "$1 $2 $3", &[r"[03]"], None),
];

const IT_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{4,6})", &[(2, 2), (4, 6)], "$1 $2", &[r"0[26]"], None),
    format(r"(\d{3})(\d{3,6})", &[(3, 3), (3, 6)], "$1 $2", &[r"0[13-57-9][0159]|8(?:03|4[17]|9[2-5])", r"0[13-57-9][0159]|8(?:03|4[17]|9(?:2|3[04]|[45][0-4]))"], None),
    format(r"(\d{4})(\d{2,6})", &[(4, 4), (2, 6)], "$1 $2", &[r"0(?:[13-579][2-46-8]|8[236-8])"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"894"], None),
    format(r"(\d{2})(\d{3,4})(\d{4})", &[(2, 2), (3, 4), (4, 4)], "$1 $2 $3", &[r"0[26]|5"], None),
    format(r"(\d{3})(\d{3})(\d{3,4})", &[(3, 3), (3, 3), (3, 4)], "$1 $2 $3", &[r"1(?:44|[679])|[378]|43"], None),
    format(r"(\d{3})(\d{3,4})(\d{4})", &[(3, 3), (3, 4), (4, 4)], "$1 $2 $3", &[r"0[13-57-9][0159]|14"], None),
    format(r"(\d{2})(\d{4})(\d{5})", &[(2, 2), (4, 4), (5, 5)], "$1 $2 $3", &[r"0[26]"], None),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"0"], None),
    format(r"(\d{3})(\d{4})(\d{4,5})", &[(3, 3), (4, 4), (4, 5)], "$1 $2 $3", &[r"[03]"], None),
];

const JO_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2 $3", &[r"[2356]|87"], Some("(0$1)")),
    format(r"(\d{3})(\d{5,6})", &[(3, 3), (5, 6)], "$1 $2", &[r"[89]"], Some("0$1")),
    format(r"(\d{2})(\d{7})", &[(2, 2), (7, 7)], "$1 $2", &[r"70"], Some("0$1")),
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1 $2 $3", &[r"[47]"], Some("0$1")),
];

const JP_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1-$2", &[r"007", r"0077", r"00777", r"00777[01]"], None),
    format(r"(\d{8,10})", &[(8, 10)], "$1", &[r"000"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1-$2-$3", &[r"(?:12|57|99)0"], Some("0$1")),
    format(r"(\d{4})(\d)(\d{4})", &[(4, 4), (1, 1), (4, 4)], "$1-$2-$3", &[r"1(?:26|3[79]|4[56]|5[4-68]|6[3-5])|499|5(?:76|97)|746|8(?:3[89]|47|51)|9(?:80|9[16])", r"1(?:267|3(?:7[247]|9[278])|466|5(?:47|58|64)|6(?:3[245]|48|5[4-68]))|499[2468]|5(?:76|97)9|7468|8(?:3(?:8[7-9]|96)|477|51[2-9])|9(?:802|9(?:1[23]|69))|1(?:45|58)[67]", r"1(?:267|3(?:7[247]|9[278])|466|5(?:47|58|64)|6(?:3[245]|48|5[4-68]))|499[2468]|5(?:769|979[2-69])|7468|8(?:3(?:8[7-9]|96[2457-9])|477|51[2-9])|9(?:802|9(?:1[23]|69))|1(?:45|58)[67]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1-$2-$3", &[r"60"], Some("0$1")),
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1-$2-$3", &[r"3|4(?:2[09]|7[01])|6[1-9]", r"3|4(?:2(?:0|9[02-69])|7(?:0[019]|1))|6[1-9]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1-$2-$3", &[r"1(?:1|5[45]|77|88|9[69])|2(?:2[1-37]|3[0-269]|4[59]|5|6[24]|7[1-358]|8[1369]|9[0-38])|4(?:[28][1-9]|3[0-57]|[45]|6[248]|7[2-579]|9[29])|5(?:2|3[0459]|4[0-369]|5[29]|8[02389]|9[0-389])|7(?:2[02-46-9]|34|[58]|6[0249]|7[57]|9[2-6])|8(?:2[124589]|3[26-9]|49|51|6|7[0-468]|8[68]|9[019])|9(?:[23][1-9]|4[15]|5[138]|6[1-3]|7[156]|8[189]|9[1-489])", r"1(?:1|5(?:4[018]|5[017])|77|88|9[69])|2(?:2(?:[127]|3[014-9])|3[0-269]|4[59]|5(?:[1-3]|5[0-69]|9[19])|62|7(?:[1-35]|8[0189])|8(?:[16]|3[0134]|9[0-5])|9(?:[028]|17))|4(?:2(?:[13-79]|8[014-6])|3[0-57]|[45]|6[248]|7[2-47]|8[1-9]|9[29])|5(?:2|3(?:[045]|9[0-8])|4[0-369]|5[29]|8[02389]|9[0-3])|7(?:2[02-46-9]|34|[58]|6[0249]|7[57]|9(?:[23]|4[0-59]|5[01569]|6[0167]))|8(?:2(?:[1258]|4[0-39]|9[0-2469])|3(?:[29]|60)|49|51|6(?:[0-24]|36|5[0-3589]|7[23]|9[01459])|7[0-468]|8[68])|9(?:[23][1-9]|4[15]|5[138]|6[1-3]|7[156]|8[189]|9(?:[1289]|3[34]|4[0178]))|(?:264|837)[016-9]|2(?:57|93)[015-9]|(?:25[0468]|422|838)[01]|(?:47[59]|59[89]|8(?:6[68]|9))[019]", r"1(?:1|5(?:4[018]|5[017])|77|88|9[69])|2(?:2[127]|3[0-269]|4[59]|5(?:[1-3]|5[0-69]|9(?:17|99))|6(?:2|4[016-9])|7(?:[1-35]|8[0189])|8(?:[16]|3[0134]|9[0-5])|9(?:[028]|17))|4(?:2(?:[13-79]|8[014-6])|3[0-57]|[45]|6[248]|7[2-47]|9[29])|5(?:2|3(?:[045]|9(?:[0-58]|6[4-9]|7[0-35689]))|4[0-369]|5[29]|8[02389]|9[0-3])|7(?:2[02-46-9]|34|[58]|6[0249]|7[57]|9(?:[23]|4[0-59]|5[01569]|6[0167]))|8(?:2(?:[1258]|4[0-39]|9[0169])|3(?:[29]|60|7(?:[017-9]|6[6-8]))|49|51|6(?:[0-24]|36[2-57-9]|5(?:[0-389]|5[23])|6(?:[01]|9[178])|7(?:2[2-468]|3[78])|9[0145])|7[0-468]|8[68])|9(?:4[15]|5[138]|7[156]|8[189]|9(?:[1289]|3(?:31|4[357])|4[0178]))|(?:8294|96)[1-3]|2(?:57|93)[015-9]|(?:223|8699)[014-9]|(?:25[0468]|422|838)[01]|(?:48|8292|9[23])[1-9]|(?:47[59]|59[89]|8(?:68|9))[019]"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{4})", &[(3, 3), (2, 2), (4, 4)], "$1-$2-$3", &[r"[14]|[289][2-9]|5[3-9]|7[2-4679]"], Some("0$1")),
    format(r"(\d{4})(\d{2})(\d{3,4})", &[(4, 4), (2, 2), (3, 4)], "$1-$2-$3", &[r"007", r"0077"], None),
    format(r"(\d{4})(\d{2})(\d{4})", &[(4, 4), (2, 2), (4, 4)], "$1-$2-$3", &[r"008"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1-$2-$3", &[r"800"], Some("0$1")),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1-$2-$3", &[r"[25-9]"], Some("0$1")),
    format(r"(\d{4})(\d{3})(\d{3,4})", &[(4, 4), (3, 3), (3, 4)], "$1-$2-$3", &[r"0"], None),
    format(r"(\d{4})(\d{4})(\d{4,5})", &[(4, 4), (4, 4), (4, 5)], "$1-$2-$3", &[r"0"], None),
    format(r"(\d{4})(\d{5})(\d{5,6})", &[(4, 4), (5, 5), (5, 6)], "$1-$2-$3", &[r"0"], None),
    format(r"(\d{4})(\d{6})(\d{6,7})", &[(4, 4), (6, 6), (6, 7)], "$1-$2-$3", &[r"0"], None),
];

const JP_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1-$2-$3", &[r"(?:12|57|99)0"], None),
    format(r"(\d{4})(\d)(\d{4})", &[(4, 4), (1, 1), (4, 4)], "$1-$2-$3", &[r"1(?:26|3[79]|4[56]|5[4-68]|6[3-5])|499|5(?:76|97)|746|8(?:3[89]|47|51)|9(?:80|9[16])", r"1(?:267|3(?:7[247]|9[278])|466|5(?:47|58|64)|6(?:3[245]|48|5[4-68]))|499[2468]|5(?:76|97)9|7468|8(?:3(?:8[7-9]|96)|477|51[2-9])|9(?:802|9(?:1[23]|69))|1(?:45|58)[67]", r"1(?:267|3(?:7[247]|9[278])|466|5(?:47|58|64)|6(?:3[245]|48|5[4-68]))|499[2468]|5(?:769|979[2-69])|7468|8(?:3(?:8[7-9]|96[2457-9])|477|51[2-9])|9(?:802|9(?:1[23]|69))|1(?:45|58)[67]"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1-$2-$3", &[r"60"], None),
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1-$2-$3", &[r"3|4(?:2[09]|7[01])|6[1-9]", r"3|4(?:2(?:0|9[02-69])|7(?:0[019]|1))|6[1-9]"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1-$2-$3", &[r"1(?:1|5[45]|77|88|9[69])|2(?:2[1-37]|3[0-269]|4[59]|5|6[24]|7[1-358]|8[1369]|9[0-38])|4(?:[28][1-9]|3[0-57]|[45]|6[248]|7[2-579]|9[29])|5(?:2|3[0459]|4[0-369]|5[29]|8[02389]|9[0-389])|7(?:2[02-46-9]|34|[58]|6[0249]|7[57]|9[2-6])|8(?:2[124589]|3[26-9]|49|51|6|7[0-468]|8[68]|9[019])|9(?:[23][1-9]|4[15]|5[138]|6[1-3]|7[156]|8[189]|9[1-489])", r"1(?:1|5(?:4[018]|5[017])|77|88|9[69])|2(?:2(?:[127]|3[014-9])|3[0-269]|4[59]|5(?:[1-3]|5[0-69]|9[19])|62|7(?:[1-35]|8[0189])|8(?:[16]|3[0134]|9[0-5])|9(?:[028]|17))|4(?:2(?:[13-79]|8[014-6])|3[0-57]|[45]|6[248]|7[2-47]|8[1-9]|9[29])|5(?:2|3(?:[045]|9[0-8])|4[0-369]|5[29]|8[02389]|9[0-3])|7(?:2[02-46-9]|34|[58]|6[0249]|7[57]|9(?:[23]|4[0-59]|5[01569]|6[0167]))|8(?:2(?:[1258]|4[0-39]|9[0-2469])|3(?:[29]|60)|49|51|6(?:[0-24]|36|5[0-3589]|7[23]|9[01459])|7[0-468]|8[68])|9(?:[23][1-9]|4[15]|5[138]|6[1-3]|7[156]|8[189]|9(?:[1289]|3[34]|4[0178]))|(?:264|837)[016-9]|2(?:57|93)[015-9]|(?:25[0468]|422|838)[01]|(?:47[59]|59[89]|8(?:6[68]|9))[019]", r"1(?:1|5(?:4[018]|5[017])|77|88|9[69])|2(?:2[127]|3[0-269]|4[59]|5(?:[1-3]|5[0-69]|9(?:17|99))|6(?:2|4[016-9])|7(?:[1-35]|8[0189])|8(?:[16]|3[0134]|9[0-5])|9(?:[028]|17))|4(?:2(?:[13-79]|8[014-6])|3[0-57]|[45]|6[248]|7[2-47]|9[29])|5(?:2|3(?:[045]|9(?:[0-58]|6[4-9]|7[0-35689]))|4[0-369]|5[29]|8[02389]|9[0-3])|7(?:2[02-46-9]|34|[58]|6[0249]|7[57]|9(?:[23]|4[0-59]|5[01569]|6[0167]))|8(?:2(?:[1258]|4[0-39]|9[0169])|3(?:[29]|60|7(?:[017-9]|6[6-8]))|49|51|6(?:[0-24]|36[2-57-9]|5(?:[0-389]|5[23])|6(?:[01]|9[178])|7(?:2[2-468]|3[78])|9[0145])|7[0-468]|8[68])|9(?:4[15]|5[138]|7[156]|8[189]|9(?:[1289]|3(?:31|4[357])|4[0178]))|(?:8294|96)[1-3]|2(?:57|93)[015-9]|(?:223|8699)[014-9]|(?:25[0468]|422|838)[01]|(?:48|8292|9[23])[1-9]|(?:47[59]|59[89]|8(?:68|9))[019]"], None),
    format(r"(\d{3})(\d{2})(\d{4})", &[(3, 3), (2, 2), (4, 4)], "$1-$2-$3", &[r"[14]|[289][2-9]|5[3-9]|7[2-4679]"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1-$2-$3", &[r"800"], None),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1-$2-$3", &[r"[25-9]"], None),
];

const KE_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{5,7})", &[(2, 2), (5, 7)], "$1 $2", &[r"[24-6]"], Some("0$1")),
    format(r"(\d{3})(\d{6})", &[(3, 3), (6, 6)], "$1 $2", &[r"[17]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3,4})", &[(3, 3), (3, 3), (3, 4)], "$1 $2 $3", &[r"[89]"], Some("0$1")),
];

const KG_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{5})", &[(4, 4), (5, 5)], "$1 $2", &[r"3(?:1[346]|[24-79])"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[235-79]|88"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d)(\d{2,3})", &[(3, 3), (3, 3), (1, 1), (2, 3)], "$1 $2 $3 $4", &[r"8"], Some("0$1")),
];

const KH_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"[1-9]"], Some("0$1")),
    format(r"(\d{4})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3)], "$1 $2 $3", &[r"1"], None),
];

const KM_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2)], "$1 $2 $3", &[r"[3478]"], None),
];

const KP_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"8"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2 $3", &[r"[2-7]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"1"], Some("0$1")),
];

const KR_FORMATS: &[NumberFormat] = &[
    format(r"(\d{5})", &[(5, 5)], "$1", &[r"1[016-9]1", r"1[016-9]11", r"1[016-9]114"], Some("0$1")),
    format(r"(\d{2})(\d{3,4})", &[(2, 2), (3, 4)], "$1-$2", &[r"(?:3[1-3]|[46][1-4]|5[1-5])1"], Some("0$1")),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1-$2", &[r"1"], None),
    format(r"(\d)(\d{3,4})(\d{4})", &[(1, 1), (3, 4), (4, 4)], "$1-$2-$3", &[r"2"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1-$2-$3", &[r"[36]0|8"], Some("0$1")),
    format(r"(\d{2})(\d{3,4})(\d{4})", &[(2, 2), (3, 4), (4, 4)], "$1-$2-$3", &[r"[1346]|5[1-5]"], Some("0$1")),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1-$2-$3", &[r"[57]"], Some("0$1")),
    format(r"(\d{5})(\d{3})(\d{3})", &[(5, 5), (3, 3), (3, 3)], "$1 $2 $3", &[r"003", r"0030"], None),
    format(r"(\d{2})(\d{5})(\d{4})", &[(2, 2), (5, 5), (4, 4)], "$1-$2-$3", &[r"5"], Some("0$1")),
    format(r"(\d{5})(\d{3,4})(\d{4})", &[(5, 5), (3, 4), (4, 4)], "$1 $2 $3", &[r"0"], None),
    format(r"(\d{5})(\d{2})(\d{3})(\d{4})", &[(5, 5), (2, 2), (3, 3), (4, 4)], "$1 $2 $3 $4", &[r"0"], None),
];

const KR_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3,4})", &[(2, 2), (3, 4)], "$1-$2", &[r"(?:3[1-3]|[46][1-4]|5[1-5])1"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1-$2", &[r"1"], None),
    format(r"(\d)(\d{3,4})(\d{4})", &[(1, 1), (3, 4), (4, 4)], "$1-$2-$3", &[r"2"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1-$2-$3", &[r"[36]0|8"], None),
    format(r"(\d{2})(\d{3,4})(\d{4})", &[(2, 2), (3, 4), (4, 4)], "$1-$2-$3", &[r"[1346]|5[1-5]"], None),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1-$2-$3", &[r"[57]"], None),
    format(r"(\d{2})(\d{5})(\d{4})", &[(2, 2), (5, 5), (4, 4)], "$1-$2-$3", &[r"5"], None),
];

const KW_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{3,4})", &[(4, 4), (3, 4)], "$1 $2", &[r"[169]|2(?:[235]|4[1-35-9])|52"], None),
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"[245]"], None),
];

const LA_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"2[13]|3[14]|[4-8]"], Some("0$1")),
    format(r"(\d{2})(\d{2})(\d{2})(\d{3})", &[(2, 2), (2, 2), (2, 2), (3, 3)], "$1 $2 $3 $4", &[r"3"], Some("0$1")),
    format(r"(\d{2})(\d{2})(\d{3})(\d{3})", &[(2, 2), (2, 2), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"[23]"], Some("0$1")),
];

const LB_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{3})", &[(1, 1), (3, 3), (3, 3)], "$1 $2 $3", &[r"[13-69]|7(?:[2-57]|62|8[0-6]|9[04-9])|8[02-9]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"[27-9]"], None),
];

const LI_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2)], "$1 $2 $3", &[r"[2379]|8(?:0[09]|7)", r"[2379]|8(?:0(?:02|9)|7)"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"8"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"69"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"6"], None),
];

const LK_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"7"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[1-689]"], Some("0$1")),
];

const LR_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{3})", &[(1, 1), (3, 3), (3, 3)], "$1 $2 $3", &[r"4[67]|[56]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"2"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[2-578]"], Some("0$1")),
];

const LS_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[2568]"], None),
];

const LT_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2 $3", &[r"52[0-7]"], Some("(0-$1)")),
    format(r"(\d{3})(\d{2})(\d{3})", &[(3, 3), (2, 2), (3, 3)], "$1 $2 $3", &[r"[7-9]"], Some("0 $1")),
    format(r"(\d{2})(\d{6})", &[(2, 2), (6, 6)], "$1 $2", &[r"37|4(?:[15]|6[1-8])"], Some("(0-$1)")),
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"[3-6]"], Some("(0-$1)")),
];

const LU_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})", &[(2, 2), (3, 3)], "$1 $2", &[r"2(?:0[2-689]|[2-9])|[3-57]|8(?:0[2-9]|[13-9])|9(?:0[89]|[2-579])"], None),
    format(r"(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2)], "$1 $2 $3", &[r"2(?:0[2-689]|[2-9])|[3-57]|8(?:0[2-9]|[13-9])|9(?:0[89]|[2-579])"], None),
    format(r"(\d{2})(\d{2})(\d{3})", &[(2, 2), (2, 2), (3, 3)], "$1 $2 $3", &[r"20[2-689]"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{1,2})", &[(2, 2), (2, 2), (2, 2), (1, 2)], "$1 $2 $3 $4", &[r"20"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{1,5})", &[(2, 2), (2, 2), (2, 2), (1, 5)], "$1 $2 $3 $4", &[r"[3-57]|8[13-9]|9(?:0[89]|[2-579])|(?:2|80)[2-9]"], None),
    format(r"(\d{3})(\d{2})(\d{3})", &[(3, 3), (2, 2), (3, 3)], "$1 $2 $3", &[r"80[01]|90[015]"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{3})", &[(2, 2), (2, 2), (2, 2), (3, 3)], "$1 $2 $3 $4", &[r"20"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"6"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})(\d{1,2})", &[(2, 2), (2, 2), (2, 2), (2, 2), (1, 2)], "$1 $2 $3 $4 $5", &[r"20"], None),
];

const LV_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"[2679]|8[01]"], None),
];

const LY_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{7})", &[(2, 2), (7, 7)], "$1-$2", &[r"[2-9]"], Some("0$1")),
];

const MA_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{5})", &[(4, 4), (5, 5)], "$1-$2", &[r"892"], Some("0$1")),
    format(r"(\d{2})(\d{7})", &[(2, 2), (7, 7)], "$1-$2", &[r"8(?:0[0-7]|9)"], Some("0$1")),
    format(r"(\d)(\d{2})(\d{2})(\d{2})(\d{2})", &[(1, 1), (2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4 $5", &[r"[5-8]"], Some("0$1")),
];

const MC_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{2})", &[(3, 3), (3, 3), (2, 2)], "$1 $2 $3", &[r"87"], None),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"4"], Some("0$1")),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[389]"], None),
    format(r"(\d)(\d{2})(\d{2})(\d{2})(\d{2})", &[(1, 1), (2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4 $5", &[r"[67]"], Some("0$1")),
];

const MC_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"4"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[389]"], None),
    format(r"(\d)(\d{2})(\d{2})(\d{2})(\d{2})", &[(1, 1), (2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4 $5", &[r"[67]"], None),
];

const MD_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"[89]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"22|3"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{3})", &[(3, 3), (2, 2), (3, 3)], "$1 $2 $3", &[r"[25-7]"], Some("0$1")),
];

const ME_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"[2-9]"], Some("0$1")),
];

const MG_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{3})(\d{2})", &[(2, 2), (2, 2), (3, 3), (2, 2)], "$1 $2 $3 $4", &[r"[23]"], Some("0$1")),
];

const MH_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1-$2", &[r"[2-6]"], None),
];

const MK_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2 $3", &[r"2|34[47]|4(?:[37]7|5[47]|64)"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"[347]"], Some("0$1")),
    format(r"(\d{3})(\d)(\d{2})(\d{2})", &[(3, 3), (1, 1), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[58]"], Some("0$1")),
];

const ML_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})", &[(4, 4)], "$1", &[r"67[057-9]|74[045]", r"67(?:0[09]|[59]9|77|8[89])|74(?:0[02]|44|55)"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[24-9]"], None),
];

const ML_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[24-9]"], None),
];

const MM_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{2})(\d{3})", &[(1, 1), (2, 2), (3, 3)], "$1 $2 $3", &[r"16|2"], Some("0$1")),
    format(r"(\d{2})(\d{2})(\d{3})", &[(2, 2), (2, 2), (3, 3)], "$1 $2 $3", &[r"4(?:[2-46]|5[3-5])|5|6(?:[1-689]|7[235-7])|7(?:[0-4]|5[2-7])|8[1-5]|(?:60|86)[23]"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{3,4})", &[(1, 1), (3, 3), (3, 4)], "$1 $2 $3", &[r"[12]|452|678|86", r"[12]|452|6788|86"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"[4-7]|8[1-35]"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{4,6})", &[(1, 1), (3, 3), (4, 6)], "$1 $2 $3", &[r"9(?:2[0-4]|[35-9]|4[137-9])"], Some("0$1")),
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1 $2 $3", &[r"2"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"8"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{3})(\d{3})", &[(1, 1), (3, 3), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"92"], Some("0$1")),
    format(r"(\d)(\d{5})(\d{4})", &[(1, 1), (5, 5), (4, 4)], "$1 $2 $3", &[r"9"], Some("0$1")),
];

const MN_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{4})", &[(2, 2), (2, 2), (4, 4)], "$1 $2 $3", &[r"11|2[16]"], Some("0$1")),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[5-9]"], None),
    format(r"(\d{3})(\d{5,6})", &[(3, 3), (5, 6)], "$1 $2", &[r"[12]2[1-3]"], Some("0$1")),
    format(r"(\d{4})(\d{5,6})", &[(4, 4), (5, 6)], "$1 $2", &[r"[12](?:27|3[2-8]|4[2-68]|5[1-4689])", r"[12](?:27|3[2-8]|4[2-68]|5[1-4689])[0-3]"], Some("0$1")),
    format(r"(\d{5})(\d{4,5})", &[(5, 5), (4, 5)], "$1 $2", &[r"[12]"], Some("0$1")),
];

const MO_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{3})", &[(4, 4), (3, 3)], "$1 $2", &[r"0"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[268]"], None),
];

const MQ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[5-79]|8(?:0[6-9]|[36])"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"8"], Some("0$1")),
];

const MR_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[2-48]"], None),
];

const MT_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[2357-9]"], None),
];

const MU_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[2-46]|8[013]"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[57]"], None),
    format(r"(\d{5})(\d{5})", &[(5, 5), (5, 5)], "$1 $2", &[r"8"], None),
];

const MV_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1-$2", &[r"[34679]"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"[89]"], None),
];

const MW_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{3})", &[(1, 1), (3, 3), (3, 3)], "$1 $2 $3", &[r"1[2-9]"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[1-37-9]"], Some("0$1")),
];

const MX_FORMATS: &[NumberFormat] = &[
    format(r"(\d{5})", &[(5, 5)], "$1", &[r"53"], None),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2 $3", &[r"33|5[56]|81"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"[2-9]"], None),
];

const MX_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2 $3", &[r"33|5[56]|81"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"[2-9]"], None),
];

const MY_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1-$2 $3", &[r"[4-79]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1-$2 $3", &[r"1(?:[02469]|[378][1-9]|53)|8", r"1(?:[02469]|[37][1-9]|53|8(?:[1-46-9]|5[7-9]))|8"], Some("0$1")),
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1-$2 $3", &[r"3"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{2})(\d{4})", &[(1, 1), (3, 3), (2, 2), (4, 4)], "$1-$2-$3-$4", &[r"1(?:[367]|80)"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1-$2 $3", &[r"15"], Some("0$1")),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1-$2 $3", &[r"1"], Some("0$1")),
];

const MZ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"2|8[2-79]"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"8"], None),
];

const NA_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"88"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"6"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"87"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"8"], Some("0$1")),
];

const NC_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})", &[(3, 3)], "$1", &[r"5[6-8]"], None),
    format(r"(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2)], "$1.$2.$3", &[r"[02-57-9]"], None),
];

const NC_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2)], "$1.$2.$3", &[r"[02-57-9]"], None),
];

const NE_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"08"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[089]|2[013]|7[0467]"], None),
];

const NF_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{4})", &[(2, 2), (4, 4)], "$1 $2", &[r"1[0-3]"], None),
    format(r"(\d)(\d{5})", &[(1, 1), (5, 5)], "$1 $2", &[r"[13]"], None),
];

const NG_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{3,4})", &[(3, 3), (3, 3), (3, 4)], "$1 $2 $3", &[r"[7-9]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"20[129]"], Some("0$1")),
    format(r"(\d{4})(\d{2})(\d{4})", &[(4, 4), (2, 2), (4, 4)], "$1 $2 $3", &[r"2"], Some("0$1")),
    format(r"(\d{3})(\d{4})(\d{4,5})", &[(3, 3), (4, 4), (4, 5)], "$1 $2 $3", &[r"[78]"], Some("0$1")),
    format(r"(\d{3})(\d{5})(\d{5,6})", &[(3, 3), (5, 5), (5, 6)], "$1 $2 $3", &[r"[78]"], Some("0$1")),
];

const NI_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[125-8]"], None),
];

const NL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})", &[(4, 4)], "$1", &[r"1[238]|[34]"], None),
    format(r"(\d{2})(\d{3,4})", &[(2, 2), (3, 4)], "$1 $2", &[r"14"], None),
    format(r"(\d{6})", &[(6, 6)], "$1", &[r"1"], None),
    format(r"(\d{3})(\d{4,7})", &[(3, 3), (4, 7)], "$1 $2", &[r"[89]0"], Some("0$1")),
    format(r"(\d{2})(\d{7})", &[(2, 2), (7, 7)], "$1 $2", &[r"66"], Some("0$1")),
    format(r"(\d)(\d{8})", &[(1, 1), (8, 8)], "$1 $2", &[r"6"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"1[16-8]|2[259]|3[124]|4[17-9]|5[124679]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[1-578]|91"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{5})", &[(3, 3), (3, 3), (5, 5)], "$1 $2 $3", &[r"9"], Some("0$1")),
];

const NL_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4,7})", &[(3, 3), (4, 7)], "$1 $2", &[r"[89]0"], None),
    format(r"(\d{2})(\d{7})", &[(2, 2), (7, 7)], "$1 $2", &[r"66"], None),
    format(r"(\d)(\d{8})", &[(1, 1), (8, 8)], "$1 $2", &[r"6"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"1[16-8]|2[259]|3[124]|4[17-9]|5[124679]"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[1-578]|91"], None),
    format(r"(\d{3})(\d{3})(\d{5})", &[(3, 3), (3, 3), (5, 5)], "$1 $2 $3", &[r"9"], None),
];

const NO_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{3})", &[(3, 3), (2, 2), (3, 3)], "$1 $2 $3", &[r"8"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[2-79]"], None),
];

const NP_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{7})", &[(1, 1), (7, 7)], "$1-$2", &[r"1[2-6]"], Some("0$1")),
    format(r"(\d{2})(\d{6})", &[(2, 2), (6, 6)], "$1-$2", &[r"1[01]|[2-8]|9(?:[1-59]|[67][2-6])"], Some("0$1")),
    format(r"(\d{3})(\d{7})", &[(3, 3), (7, 7)], "$1-$2", &[r"9"], None),
    format(r"(\d{4})(\d{2})(\d{5})", &[(4, 4), (2, 2), (5, 5)], "$1-$2-$3", &[r"1"], None),
];

const NP_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{7})", &[(1, 1), (7, 7)], "$1-$2", &[r"1[2-6]"], None),
    format(r"(\d{2})(\d{6})", &[(2, 2), (6, 6)], "$1-$2", &[r"1[01]|[2-8]|9(?:[1-59]|[67][2-6])"], None),
    format(r"(\d{3})(\d{7})", &[(3, 3), (7, 7)], "$1-$2", &[r"9"], None),
];

const NR_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[24-9]"], None),
];

const NU_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"8"], None),
];

const NZ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3,8})", &[(2, 2), (3, 8)], "$1 $2", &[r"8[1-79]"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{2,3})", &[(3, 3), (2, 2), (2, 3)], "$1 $2 $3", &[r"50[036-8]|8|90", r"50(?:[0367]|88)|8|90"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2 $3", &[r"24|[346]|7[2-57-9]|9[2-9]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3,4})", &[(3, 3), (3, 3), (3, 4)], "$1 $2 $3", &[r"2(?:10|74)|[589]"], Some("0$1")),
    format(r"(\d{2})(\d{3,4})(\d{4})", &[(2, 2), (3, 4), (4, 4)], "$1 $2 $3", &[r"1|2[028]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,5})", &[(2, 2), (3, 3), (3, 5)], "$1 $2 $3", &[r"2(?:[169]|7[0-35-9])|7"], Some("0$1")),
];

const OM_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4,6})", &[(3, 3), (4, 6)], "$1 $2", &[r"[58]"], None),
    format(r"(\d{2})(\d{6})", &[(2, 2), (6, 6)], "$1 $2", &[r"2"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[179]"], None),
];

const PA_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1-$2", &[r"[1-57-9]"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1-$2", &[r"[68]"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"8"], None),
];

const PE_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"80"], Some("(0$1)")),
    format(r"(\d)(\d{7})", &[(1, 1), (7, 7)], "$1 $2", &[r"1"], Some("(0$1)")),
    format(r"(\d{2})(\d{6})", &[(2, 2), (6, 6)], "$1 $2", &[r"[4-8]"], Some("(0$1)")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"9"], None),
];

const PF_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2)], "$1 $2 $3", &[r"44"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"4|8[7-9]"], None),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"8"], None),
];

const PG_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"18|[2-69]|85"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[78]"], None),
];

const PH_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{5})", &[(1, 1), (5, 5)], "$1 $2", &[r"2"], Some("(0$1)")),
    format(r"(\d{4})(\d{4,6})", &[(4, 4), (4, 6)], "$1 $2", &[r"3(?:23|39|46)|4(?:2[3-6]|[35]9|4[26]|76)|544|88[245]|(?:52|64|86)2", r"3(?:230|397|461)|4(?:2(?:35|[46]4|51)|396|4(?:22|63)|59[347]|76[15])|5(?:221|446)|642[23]|8(?:622|8(?:[24]2|5[13]))"], Some("(0$1)")),
    format(r"(\d{5})(\d{4})", &[(5, 5), (4, 4)], "$1 $2", &[r"346|4(?:27|9[35])|883", r"3469|4(?:279|9(?:30|56))|8834"], Some("(0$1)")),
    format(r"(\d)(\d{4})(\d{4})", &[(1, 1), (4, 4), (4, 4)], "$1 $2 $3", &[r"2"], Some("(0$1)")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[3-7]|8[2-8]"], Some("(0$1)")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"[89]"], Some("0$1")),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"1"], None),
    format(r"(\d{4})(\d{1,2})(\d{3})(\d{4})", &[(4, 4), (1, 2), (3, 3), (4, 4)], "$1 $2 $3 $4", &[r"1"], None),
];

const PK_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{2,7})", &[(3, 3), (3, 3), (2, 7)], "$1 $2 $3", &[r"[89]0"], Some("0$1")),
    format(r"(\d{4})(\d{5})", &[(4, 4), (5, 5)], "$1 $2", &[r"1"], None),
    format(r"(\d{3})(\d{6,7})", &[(3, 3), (6, 7)], "$1 $2", &[r"2(?:3[2358]|4[2-4]|9[2-8])|45[3479]|54[2-467]|60[468]|72[236]|8(?:2[2-689]|3[23578]|4[3478]|5[2356])|9(?:2[2-8]|3[27-9]|4[2-6]|6[3569]|9[25-8])", r"9(?:2[3-8]|98)|(?:2(?:3[2358]|4[2-4]|9[2-8])|45[3479]|54[2-467]|60[468]|72[236]|8(?:2[2-689]|3[23578]|4[3478]|5[2356])|9(?:22|3[27-9]|4[2-6]|6[3569]|9[25-7]))[2-9]"], Some("(0$1)")),
    format(r"(\d{2})(\d{7,8})", &[(2, 2), (7, 8)], "$1 $2", &[r"(?:2[125]|4[0-246-9]|5[1-35-7]|6[1-8]|7[14]|8[16]|91)[2-9]"], Some("(0$1)")),
    format(r"(\d{5})(\d{5})", &[(5, 5), (5, 5)], "$1 $2", &[r"58"], Some("(0$1)")),
    format(r"(\d{3})(\d{7})", &[(3, 3), (7, 7)], "$1 $2", &[r"3"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"2[125]|4[0-246-9]|5[1-35-7]|6[1-8]|7[14]|8[16]|91"], Some("(0$1)")),
    format(r"(\d{3})(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"[24-9]"], Some("(0$1)")),
];

const PL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{5})", &[(5, 5)], "$1", &[r"19"], None),
    format(r"(\d{3})(\d{3})", &[(3, 3), (3, 3)], "$1 $2", &[r"11|20|64"], None),
    format(r"(\d{2})(\d{2})(\d{3})", &[(2, 2), (2, 2), (3, 3)], "$1 $2 $3", &[r"30|(?:1[2-8]|2[2-69]|3[2-4]|4[1-468]|5[24-689]|6[1-3578]|7[14-7]|8[1-79]|9[145])1", r"30|(?:1[2-8]|2[2-69]|3[2-4]|4[1-468]|5[24-689]|6[1-3578]|7[14-7]|8[1-79]|9[145])19"], None),
    format(r"(\d{3})(\d{2})(\d{2,3})", &[(3, 3), (2, 2), (2, 3)], "$1 $2 $3", &[r"64"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"21|39|45|5[0137]|6[0469]|7[02389]|8(?:0[14]|8)"], None),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"1[2-8]|[2-7]|8[1-79]|9[145]"], None),
    format(r"(\d{3})(\d{3})(\d{3,4})", &[(3, 3), (3, 3), (3, 4)], "$1 $2 $3", &[r"8"], None),
];

const PM_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2)], "$1 $2 $3", &[r"[2-9]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"7"], None),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"8"], Some("0$1")),
];

const PS_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2 $3", &[r"[2489]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"5"], Some("0$1")),
    format(r"(\d{4})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3)], "$1 $2 $3", &[r"1"], None),
];

const PT_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"2[12]"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"16|[236-9]"], None),
];

const PW_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[2-9]"], None),
];

const PY_FORMATS: &[NumberFormat] = &[
    format(r"(\d{6,7})", &[(6, 7)], "$1", &[r"[125]|4[01]"], None),
    format(r"(\d{3})(\d{3,6})", &[(3, 3), (3, 6)], "$1 $2", &[r"[2-9]0"], Some("0$1")),
    format(r"(\d{2})(\d{5})", &[(2, 2), (5, 5)], "$1 $2", &[r"3[289]|4[246-8]|61|7[1-3]|8[1-36]"], Some("(0$1)")),
    format(r"(\d{3})(\d{4,5})", &[(3, 3), (4, 5)], "$1 $2", &[r"2[279]|3[13-5]|4[359]|5|6(?:[34]|7[1-46-8])|7[46-8]|85"], Some("(0$1)")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"2[14-68]|3[26-9]|4[1246-8]|6(?:1|75)|7[1-35]|8[1-36]"], Some("(0$1)")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"87"], None),
    format(r"(\d{3})(\d{6})", &[(3, 3), (6, 6)], "$1 $2", &[r"9(?:[5-79]|8[1-7])"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[2-8]"], Some("0$1")),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"9"], None),
];

const PY_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3,6})", &[(3, 3), (3, 6)], "$1 $2", &[r"[2-9]0"], None),
    format(r"(\d{2})(\d{5})", &[(2, 2), (5, 5)], "$1 $2", &[r"3[289]|4[246-8]|61|7[1-3]|8[1-36]"], None),
    format(r"(\d{3})(\d{4,5})", &[(3, 3), (4, 5)], "$1 $2", &[r"2[279]|3[13-5]|4[359]|5|6(?:[34]|7[1-46-8])|7[46-8]|85"], None),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"2[14-68]|3[26-9]|4[1246-8]|6(?:1|75)|7[1-35]|8[1-36]"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"87"], None),
    format(r"(\d{3})(\d{6})", &[(3, 3), (6, 6)], "$1 $2", &[r"9(?:[5-79]|8[1-7])"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[2-8]"], None),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"9"], None),
];

const QA_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"2[136]|8"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[3-7]"], None),
];

const RE_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[26-9]"], Some("0$1")),
];

const RO_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})", &[(3, 3), (3, 3)], "$1 $2", &[r"2[3-6]", r"2[3-6]\d9"], Some("0$1")),
    format(r"(\d{2})(\d{4})", &[(2, 2), (4, 4)], "$1 $2", &[r"219|31"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[23]1"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[236-9]"], Some("0$1")),
];

const RS_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3,9})", &[(3, 3), (3, 9)], "$1 $2", &[r"(?:2[389]|39)0|[7-9]"], Some("0$1")),
    format(r"(\d{2})(\d{5,10})", &[(2, 2), (5, 10)], "$1 $2", &[r"[1-36]"], Some("0$1")),
];

const RU_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2)], "$1-$2-$3", &[r"[0-79]"], None),
    format(r"(\d{4})(\d{2})(\d{2})(\d{2})", &[(4, 4), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"7(?:1[0-8]|2[1-9])", r"7(?:1(?:[0-356]2|4[29]|7|8[27])|2(?:1[23]|[2-9]2))", r"7(?:1(?:[0-356]2|4[29]|7|8[27])|2(?:13[03-69]|62[013-9]))|72[1-57-9]2"], Some("8 ($1)")),
    format(r"(\d{5})(\d)(\d{2})(\d{2})", &[(5, 5), (1, 1), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"7(?:1[0-68]|2[1-9])", r"7(?:1(?:[06][3-6]|[18]|2[35]|[3-5][3-5])|2(?:[13][3-5]|[24-689]|7[457]))", r"7(?:1(?:0(?:[356]|4[023])|[18]|2(?:3[013-9]|5)|3[45]|43[013-79]|5(?:3[1-8]|4[1-7]|5)|6(?:3[0-35-9]|[4-6]))|2(?:1(?:3[178]|[45])|[24-689]|3[35]|7[457]))|7(?:14|23)4[0-8]|71(?:33|45)[1-79]"], Some("8 ($1)")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"7"], Some("8 ($1)")),
    format(r"(\d{3})(\d{3})(\d{2})(\d{2})", &[(3, 3), (3, 3), (2, 2), (2, 2)], "$1 $2-$3-$4", &[r"[349]|8(?:[02-7]|1[1-8])"], Some("8 ($1)")),
    format(r"(\d{4})(\d{4})(\d{3})(\d{3})", &[(4, 4), (4, 4), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"8"], Some("8 ($1)")),
];

const RU_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{2})(\d{2})(\d{2})", &[(4, 4), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"7(?:1[0-8]|2[1-9])", r"7(?:1(?:[0-356]2|4[29]|7|8[27])|2(?:1[23]|[2-9]2))", r"7(?:1(?:[0-356]2|4[29]|7|8[27])|2(?:13[03-69]|62[013-9]))|72[1-57-9]2"], None),
    format(r"(\d{5})(\d)(\d{2})(\d{2})", &[(5, 5), (1, 1), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"7(?:1[0-68]|2[1-9])", r"7(?:1(?:[06][3-6]|[18]|2[35]|[3-5][3-5])|2(?:[13][3-5]|[24-689]|7[457]))", r"7(?:1(?:0(?:[356]|4[023])|[18]|2(?:3[013-9]|5)|3[45]|43[013-79]|5(?:3[1-8]|4[1-7]|5)|6(?:3[0-35-9]|[4-6]))|2(?:1(?:3[178]|[45])|[24-689]|3[35]|7[457]))|7(?:14|23)4[0-8]|71(?:33|45)[1-79]"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"7"], None),
    format(r"(\d{3})(\d{3})(\d{2})(\d{2})", &[(3, 3), (3, 3), (2, 2), (2, 2)], "$1 $2-$3-$4", &[r"[349]|8(?:[02-7]|1[1-8])"], None),
    format(r"(\d{4})(\d{4})(\d{3})(\d{3})", &[(4, 4), (4, 4), (3, 3), (3, 3)], "$1 $2 $3 $4", &[r"8"], None),
];

const RW_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"0"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"2"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[7-9]"], Some("0$1")),
];

const SA_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{5})", &[(4, 4), (5, 5)], "$1 $2", &[r"9"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"1"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"5"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"8"], None),
];

const SB_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{5})", &[(2, 2), (5, 5)], "$1 $2", &[r"6[89]|7|8[4-9]|9(?:[1-8]|9[0-8])"], None),
];

const SC_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{3})", &[(1, 1), (3, 3), (3, 3)], "$1 $2 $3", &[r"[246]|9[57]"], None),
];

const SD_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[19]"], Some("0$1")),
];

const SE_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2,3})(\d{2})", &[(2, 2), (2, 3), (2, 2)], "$1-$2 $3", &[r"20"], Some("0$1")),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1-$2", &[r"9(?:00|39|44|9)"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{2})", &[(2, 2), (3, 3), (2, 2)], "$1-$2 $3", &[r"[12][136]|3[356]|4[0246]|6[03]|90[1-9]"], Some("0$1")),
    format(r"(\d)(\d{2,3})(\d{2})(\d{2})", &[(1, 1), (2, 3), (2, 2), (2, 2)], "$1-$2 $3 $4", &[r"8"], Some("0$1")),
    format(r"(\d{3})(\d{2,3})(\d{2})", &[(3, 3), (2, 3), (2, 2)], "$1-$2 $3", &[r"1[2457]|2(?:[247-9]|5[0138])|3[0247-9]|4[1357-9]|5[0-35-9]|6(?:[125689]|4[02-57]|7[0-2])|9(?:[125-8]|3[02-5]|4[0-3])"], Some("0$1")),
    format(r"(\d{3})(\d{2,3})(\d{3})", &[(3, 3), (2, 3), (3, 3)], "$1-$2 $3", &[r"9(?:00|39|44)"], Some("0$1")),
    format(r"(\d{2})(\d{2,3})(\d{2})(\d{2})", &[(2, 2), (2, 3), (2, 2), (2, 2)], "$1-$2 $3 $4", &[r"1[13689]|2[0136]|3[1356]|4[0246]|54|6[03]|90[1-9]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1-$2 $3 $4", &[r"10|7"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{3})(\d{2})", &[(1, 1), (3, 3), (3, 3), (2, 2)], "$1-$2 $3 $4", &[r"8"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1-$2 $3 $4", &[r"[13-5]|2(?:[247-9]|5[0138])|6(?:[124-689]|7[0-2])|9(?:[125-8]|3[02-5]|4[0-3])"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{2})(\d{3})", &[(3, 3), (2, 2), (2, 2), (3, 3)], "$1-$2 $3 $4", &[r"9"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{3})(\d{2})(\d{2})", &[(3, 3), (2, 2), (3, 3), (2, 2), (2, 2)], "$1-$2 $3 $4 $5", &[r"[26]"], Some("0$1")),
];

const SE_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2,3})(\d{2})", &[(2, 2), (2, 3), (2, 2)], "$1 $2 $3", &[r"20"], None),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"9(?:00|39|44|9)"], None),
    format(r"(\d{2})(\d{3})(\d{2})", &[(2, 2), (3, 3), (2, 2)], "$1 $2 $3", &[r"[12][136]|3[356]|4[0246]|6[03]|90[1-9]"], None),
    format(r"(\d)(\d{2,3})(\d{2})(\d{2})", &[(1, 1), (2, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"8"], None),
    format(r"(\d{3})(\d{2,3})(\d{2})", &[(3, 3), (2, 3), (2, 2)], "$1 $2 $3", &[r"1[2457]|2(?:[247-9]|5[0138])|3[0247-9]|4[1357-9]|5[0-35-9]|6(?:[125689]|4[02-57]|7[0-2])|9(?:[125-8]|3[02-5]|4[0-3])"], None),
    format(r"(\d{3})(\d{2,3})(\d{3})", &[(3, 3), (2, 3), (3, 3)], "$1 $2 $3", &[r"9(?:00|39|44)"], None),
    format(r"(\d{2})(\d{2,3})(\d{2})(\d{2})", &[(2, 2), (2, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"1[13689]|2[0136]|3[1356]|4[0246]|54|6[03]|90[1-9]"], None),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"10|7"], None),
    format(r"(\d)(\d{3})(\d{3})(\d{2})", &[(1, 1), (3, 3), (3, 3), (2, 2)], "$1 $2 $3 $4", &[r"8"], None),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[13-5]|2(?:[247-9]|5[0138])|6(?:[124-689]|7[0-2])|9(?:[125-8]|3[02-5]|4[0-3])"], None),
    format(r"(\d{3})(\d{2})(\d{2})(\d{3})", &[(3, 3), (2, 2), (2, 2), (3, 3)], "$1 $2 $3 $4", &[r"9"], None),
    format(r"(\d{3})(\d{2})(\d{3})(\d{2})(\d{2})", &[(3, 3), (2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4 $5", &[r"[26]"], None),
];

const SG_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4,5})", &[(4, 5)], "$1", &[r"1[013-9]|77", r"1(?:[013-8]|9(?:0[1-9]|[1-9]))|77"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[369]|8(?:0[1-9]|[1-9])"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"8"], None),
    format(r"(\d{4})(\d{4})(\d{3})", &[(4, 4), (4, 4), (3, 3)], "$1 $2 $3", &[r"7"], None),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"1"], None),
];

const SG_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[369]|8(?:0[1-9]|[1-9])"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"8"], None),
    format(r"(\d{4})(\d{4})(\d{3})", &[(4, 4), (4, 4), (3, 3)], "$1 $2 $3", &[r"7"], None),
    format(r"(\d{4})(\d{3})(\d{4})", &[(4, 4), (3, 3), (4, 4)], "$1 $2 $3", &[r"1"], None),
];

const SI_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3,6})", &[(2, 2), (3, 6)], "$1 $2", &[r"8[09]|9"], Some("0$1")),
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"59|8"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"[37][01]|4[013]|51|6"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{2})(\d{2})", &[(1, 1), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[1-57]"], Some("(0$1)")),
];

const SK_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{2})(\d{3,4})", &[(1, 1), (2, 2), (3, 4)], "$1 $2 $3", &[r"21"], Some("0$1")),
    format(r"(\d{2})(\d{2})(\d{2,3})", &[(2, 2), (2, 2), (2, 3)], "$1 $2 $3", &[r"[3-5][1-8]1", r"[3-5][1-8]1[67]"], Some("0$1")),
    format(r"(\d{4})(\d{3})", &[(4, 4), (3, 3)], "$1 $2", &[r"909", r"9090"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{3})(\d{2})", &[(1, 1), (3, 3), (3, 3), (2, 2)], "$1 $2 $3 $4", &[r"2"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[689]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[3-5]"], Some("0$1")),
];

const SK_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{2})(\d{3,4})", &[(1, 1), (2, 2), (3, 4)], "$1 $2 $3", &[r"21"], None),
    format(r"(\d{2})(\d{2})(\d{2,3})", &[(2, 2), (2, 2), (2, 3)], "$1 $2 $3", &[r"[3-5][1-8]1", r"[3-5][1-8]1[67]"], None),
    format(r"(\d)(\d{3})(\d{3})(\d{2})", &[(1, 1), (3, 3), (3, 3), (2, 2)], "$1 $2 $3 $4", &[r"2"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[689]"], None),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[3-5]"], None),
];

const SL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{6})", &[(2, 2), (6, 6)], "$1 $2", &[r"[236-9]"], Some("(0$1)")),
];

const SM_FORMATS: &[NumberFormat] = &[
    format(r"(\d{6})", &[(6, 6)], "$1", &[r"[89]"], None),
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[5-7]"], None),
    format(r"(\d{4})(\d{6})", &[(4, 4), (6, 6)], "$1 $2", &[r"0"], None),
];

const SM_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[5-7]"], None),
    format(r"(\d{4})(\d{6})", &[(4, 4), (6, 6)], "$1 $2", &[r"0"], None),
];

const SN_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"8"], None),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[379]"], None),
];

const SO_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{4})", &[(2, 2), (4, 4)], "$1 $2", &[r"8[125]"], None),
    format(r"(\d{6})", &[(6, 6)], "$1", &[r"[134]"], None),
    format(r"(\d)(\d{6})", &[(1, 1), (6, 6)], "$1 $2", &[r"[15]|2[0-79]|3[0-46-8]|4[0-7]"], None),
    format(r"(\d{2})(\d{5,7})", &[(2, 2), (5, 7)], "$1 $2", &[r"1|28|9[2-9]"], None),
    format(r"(\d)(\d{7})", &[(1, 1), (7, 7)], "$1 $2", &[r"[267]|904"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[346-9]"], None),
];

const SR_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2)], "$1-$2-$3", &[r"56"], None),
    format(r"(\d{3})(\d{3})", &[(3, 3), (3, 3)], "$1-$2", &[r"[2-5]"], None),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1-$2", &[r"[6-9]"], None),
];

const SS_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[19]"], Some("0$1")),
];

const ST_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[29]"], None),
];

const SV_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[89]"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[25-7]"], None),
    format(r"(\d{3})(\d{4})(\d{4})", &[(3, 3), (4, 4), (4, 4)], "$1 $2 $3", &[r"[89]"], None),
];

const SY_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"[1-4]|5[1-3]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[59]"], Some("0$1")),
];

const SZ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[0237]"], None),
    format(r"(\d{5})(\d{4})", &[(5, 5), (4, 4)], "$1 $2", &[r"9"], None),
];

const TD_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[236-9]"], None),
];

const TG_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[279]"], None),
];

const TH_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{4})", &[(1, 1), (3, 3), (4, 4)], "$1 $2 $3", &[r"2"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"[13-9]"], Some("0$1")),
    format(r"(\d{4})(\d{3})(\d{3})", &[(4, 4), (3, 3), (3, 3)], "$1 $2 $3", &[r"1"], None),
];

const TJ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{6})(\d)(\d{2})", &[(6, 6), (1, 1), (2, 2)], "$1 $2 $3", &[r"331", r"3317"], None),
    format(r"(\d{3})(\d{2})(\d{4})", &[(3, 3), (2, 2), (4, 4)], "$1 $2 $3", &[r"44[02-479]|[34]7"], None),
    format(r"(\d{4})(\d)(\d{4})", &[(4, 4), (1, 1), (4, 4)], "$1 $2 $3", &[r"3(?:[1245]|3[12])"], None),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"\d"], None),
];

const TL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[2-489]|70"], None),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"7"], None),
];

const TM_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2), (2, 2)], "$1 $2-$3-$4", &[r"12"], Some("(8 $1)")),
    format(r"(\d{3})(\d)(\d{2})(\d{2})", &[(3, 3), (1, 1), (2, 2), (2, 2)], "$1 $2-$3-$4", &[r"[1-5]"], Some("(8 $1)")),
    format(r"(\d{2})(\d{6})", &[(2, 2), (6, 6)], "$1 $2", &[r"[67]"], Some("8 $1")),
];

const TN_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"[2-57-9]"], None),
];

const TO_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})", &[(2, 2), (3, 3)], "$1-$2", &[r"[2-4]|50|6[09]|7[0-24-69]|8[05]"], None),
    format(r"(\d{4})(\d{3})", &[(4, 4), (3, 3)], "$1 $2", &[r"0"], None),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[5-9]"], None),
];

const TR_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d)(\d{3})", &[(3, 3), (1, 1), (3, 3)], "$1 $2 $3", &[r"444"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"512|8[01589]|90"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{2})(\d{2})", &[(3, 3), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"5[0-79]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{2})(\d{2})", &[(3, 3), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[24][1-8]|3[1-9]"], Some("(0$1)")),
    format(r"(\d{3})(\d{3})(\d{6,7})", &[(3, 3), (3, 3), (6, 7)], "$1 $2 $3", &[r"80"], Some("0$1")),
];

const TR_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"512|8[01589]|90"], None),
    format(r"(\d{3})(\d{3})(\d{2})(\d{2})", &[(3, 3), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"5[0-79]"], None),
    format(r"(\d{3})(\d{3})(\d{2})(\d{2})", &[(3, 3), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[24][1-8]|3[1-9]"], None),
    format(r"(\d{3})(\d{3})(\d{6,7})", &[(3, 3), (3, 3), (6, 7)], "$1 $2 $3", &[r"80"], None),
];

const TV_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})", &[(2, 2), (3, 3)], "$1 $2", &[r"2"], None),
    format(r"(\d{2})(\d{4})", &[(2, 2), (4, 4)], "$1 $2", &[r"90"], None),
    format(r"(\d{2})(\d{5})", &[(2, 2), (5, 5)], "$1 $2", &[r"7"], None),
];

const TW_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d)(\d{4})", &[(2, 2), (1, 1), (4, 4)], "$1 $2 $3", &[r"202"], Some("0$1")),
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"826"], Some("0$1")),
    format(r"(\d{3})(\d{2})(\d{3})", &[(3, 3), (2, 2), (3, 3)], "$1 $2 $3", &[r"83"], Some("0$1")),
    format(r"(\d{2})(\d{2})(\d{4})", &[(2, 2), (2, 2), (4, 4)], "$1 $2 $3", &[r"82"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"[25]0|37|49|8[09]"], Some("0$1")),
    format(r"(\d)(\d{3,4})(\d{4})", &[(1, 1), (3, 4), (4, 4)], "$1 $2 $3", &[r"[23568]|4(?:0[02-48]|[1-478])|7[1-9]", r"[23568]|4(?:0[2-48]|[1-478])|(?:400|7)[1-9]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[49]"], Some("0$1")),
    format(r"(\d{2})(\d{4})(\d{4,5})", &[(2, 2), (4, 4), (4, 5)], "$1 $2 $3", &[r"7"], Some("0$1")),
];

const TZ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{2})(\d{4})", &[(3, 3), (2, 2), (4, 4)], "$1 $2 $3", &[r"[89]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[24]"], Some("0$1")),
    format(r"(\d{2})(\d{7})", &[(2, 2), (7, 7)], "$1 $2", &[r"5"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[67]"], Some("0$1")),
];

const UA_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"6[12][29]|(?:3[1-8]|4[136-8]|5[12457]|6[49])2|(?:56|65)[24]", r"6[12][29]|(?:35|4[1378]|5[12457]|6[49])2|(?:56|65)[24]|(?:3[1-46-8]|46)2[013-9]"], Some("0$1")),
    format(r"(\d{4})(\d{5})", &[(4, 4), (5, 5)], "$1 $2", &[r"3[1-8]|4(?:[1367]|[45][6-9]|8[4-6])|5(?:[1-5]|6[0135689]|7[4-6])|6(?:[12][3-7]|[459])", r"3[1-8]|4(?:[1367]|[45][6-9]|8[4-6])|5(?:[1-5]|6(?:[015689]|3[02389])|7[4-6])|6(?:[12][3-7]|[459])"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[3-7]|89|9[1-9]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3,4})", &[(3, 3), (3, 3), (3, 4)], "$1 $2 $3", &[r"[89]"], Some("0$1")),
];

const UG_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{5})", &[(4, 4), (5, 5)], "$1 $2", &[r"202", r"2024"], Some("0$1")),
    format(r"(\d{3})(\d{6})", &[(3, 3), (6, 6)], "$1 $2", &[r"[27-9]|4(?:6[45]|[7-9])"], Some("0$1")),
    format(r"(\d{2})(\d{7})", &[(2, 2), (7, 7)], "$1 $2", &[r"[34]"], Some("0$1")),
];

const US_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1-$2", &[r"310"], None),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1-$2", &[r"[24-9]|3(?:[02-9]|1[1-9])"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "($1) $2-$3", &[r"[2-9]"], None),
];

const US_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1-$2", &[r"310"], None),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1-$2-$3", &[r"[2-9]"], None),
];

const UY_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4,5})", &[(4, 5)], "$1", &[r"21"], None),
    format(r"(\d{3})(\d{3,4})", &[(3, 3), (3, 4)], "$1 $2", &[r"0"], None),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[49]0|8"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"9"], Some("0$1")),
    format(r"(\d{4})(\d{4})", &[(4, 4), (4, 4)], "$1 $2", &[r"[124]"], None),
    format(r"(\d{3})(\d{3})(\d{2,4})", &[(3, 3), (3, 3), (2, 4)], "$1 $2 $3", &[r"0"], None),
    format(r"(\d{3})(\d{3})(\d{3})(\d{2,4})", &[(3, 3), (3, 3), (3, 3), (2, 4)], "$1 $2 $3 $4", &[r"0"], None),
];

const UZ_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"[235-9]"], None),
];

const VE_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{7})", &[(3, 3), (7, 7)], "$1-$2", &[r"[24-689]"], Some("0$1")),
];

const VN_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[17]99"], Some("0$1")),
    format(r"(\d{3})(\d{4,5})", &[(3, 3), (4, 5)], "$1 $2", &[r"69"], Some("0$1")),
    format(r"(\d{4})(\d{4,6})", &[(4, 4), (4, 6)], "$1 $2", &[r"1(?:2[02]|[89])"], None),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"1[26]|6"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[357-9]"], Some("0$1")),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2 $3", &[r"2[48]"], Some("0$1")),
    format(r"(\d{3})(\d{4})(\d{3})", &[(3, 3), (4, 4), (3, 3)], "$1 $2 $3", &[r"2"], Some("0$1")),
];

const VN_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{4})(\d{4,6})", &[(4, 4), (4, 6)], "$1 $2", &[r"1(?:2[02]|[89])"], None),
    format(r"(\d{2})(\d{3})(\d{2})(\d{2})", &[(2, 2), (3, 3), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"1[26]|6"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[357-9]"], None),
    format(r"(\d{2})(\d{4})(\d{4})", &[(2, 2), (4, 4), (4, 4)], "$1 $2 $3", &[r"2[48]"], None),
    format(r"(\d{3})(\d{4})(\d{3})", &[(3, 3), (4, 4), (3, 3)], "$1 $2 $3", &[r"2"], None),
];

const VU_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"[57-9]"], None),
];

const WF_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{2})(\d{2})", &[(2, 2), (2, 2), (2, 2)], "$1 $2 $3", &[r"[47-9]"], None),
    format(r"(\d{3})(\d{2})(\d{2})(\d{2})", &[(3, 3), (2, 2), (2, 2), (2, 2)], "$1 $2 $3 $4", &[r"8"], None),
];

const WS_FORMATS: &[NumberFormat] = &[
    format(r"(\d{5})", &[(5, 5)], "$1", &[r"[2-5]|6[1-9]"], None),
    format(r"(\d{3})(\d{3,7})", &[(3, 3), (3, 7)], "$1 $2", &[r"[68]"], None),
    format(r"(\d{2})(\d{5})", &[(2, 2), (5, 5)], "$1 $2", &[r"7"], None),
];

const XK_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{5})", &[(3, 3), (5, 5)], "$1 $2", &[r"[89]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3})", &[(2, 2), (3, 3), (3, 3)], "$1 $2 $3", &[r"[2-4]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"2|39"], Some("0$1")),
    format(r"(\d{2})(\d{7,10})", &[(2, 2), (7, 10)], "$1 $2", &[r"3"], Some("0$1")),
];

const YE_FORMATS: &[NumberFormat] = &[
    format(r"(\d)(\d{3})(\d{3,4})", &[(1, 1), (3, 3), (3, 4)], "$1 $2 $3", &[r"[1-6]|7(?:[24-6]|8[0-7])"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"7"], Some("0$1")),
];

const ZA_FORMATS: &[NumberFormat] = &[
    format(r"(\d{2})(\d{3,4})", &[(2, 2), (3, 4)], "$1 $2", &[r"8[1-4]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{2,3})", &[(2, 2), (3, 3), (2, 3)], "$1 $2 $3", &[r"8[1-4]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"860"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"[1-9]"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{4})", &[(3, 3), (3, 3), (4, 4)], "$1 $2 $3", &[r"8"], Some("0$1")),
];

const ZM_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})", &[(3, 3), (3, 3)], "$1 $2", &[r"[1-9]"], None),
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[28]"], Some("0$1")),
    format(r"(\d{2})(\d{7})", &[(2, 2), (7, 7)], "$1 $2", &[r"[579]"], Some("0$1")),
];

const ZM_INTL_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3})(\d{3})", &[(3, 3), (3, 3), (3, 3)], "$1 $2 $3", &[r"[28]"], None),
    format(r"(\d{2})(\d{7})", &[(2, 2), (7, 7)], "$1 $2", &[r"[579]"], None),
];

const ZW_FORMATS: &[NumberFormat] = &[
    format(r"(\d{3})(\d{3,5})", &[(3, 3), (3, 5)], "$1 $2", &[r"2(?:0[45]|2[278]|[49]8)|3(?:[09]8|17)|6(?:[29]8|37|75)|[23][78]|(?:33|5[15]|6[68])[78]"], Some("0$1")),
    format(r"(\d)(\d{3})(\d{2,4})", &[(1, 1), (3, 3), (2, 4)], "$1 $2 $3", &[r"[49]"], Some("0$1")),
    format(r"(\d{3})(\d{4})", &[(3, 3), (4, 4)], "$1 $2", &[r"80"], Some("0$1")),
    format(r"(\d{2})(\d{7})", &[(2, 2), (7, 7)], "$1 $2", &[r"24|8[13-59]|(?:2[05-79]|39|5[45]|6[15-8])2", r"2(?:02[014]|4|[56]20|[79]2)|392|5(?:42|525)|6(?:[16-8]21|52[013])|8[13-59]"], Some("(0$1)")),
    format(r"(\d{2})(\d{3})(\d{4})", &[(2, 2), (3, 3), (4, 4)], "$1 $2 $3", &[r"7"], Some("0$1")),
    format(r"(\d{3})(\d{3})(\d{3,4})", &[(3, 3), (3, 3), (3, 4)], "$1 $2 $3", &[r"2(?:1[39]|2[0157]|[378]|[56][14])|3(?:12|29)", r"2(?:1[39]|2[0157]|[378]|[56][14])|3(?:123|29)"], Some("0$1")),
    format(r"(\d{4})(\d{6})", &[(4, 4), (6, 6)], "$1 $2", &[r"8"], Some("0$1")),
    format(r"(\d{2})(\d{3,5})", &[(2, 2), (3, 5)], "$1 $2", &[r"1|2(?:0[0-36-9]|12|29|[56])|3(?:1[0-689]|[24-6])|5(?:[0236-9]|1[2-4])|6(?:[013-59]|7[0-46-9])|(?:33|55|6[68])[0-69]|(?:29|3[09]|62)[0-79]"], Some("0$1")),
    format(r"(\d{2})(\d{3})(\d{3,4})", &[(2, 2), (3, 3), (3, 4)], "$1 $2 $3", &[r"29[013-9]|39|54"], Some("0$1")),
    format(r"(\d{4})(\d{3,5})", &[(4, 4), (3, 5)], "$1 $2", &[r"(?:25|54)8", r"258|5483"], Some("0$1")),
];

static AC: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[01589]\d|[46])\d{4}",
        possible_lengths: &[5, 6],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: &[],
    intl_number_format: &[],
    example_number: "40123",
};

static AD: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:1|6\d)\d{7}|[135-9]\d{5}",
        possible_lengths: &[6, 8, 9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: AD_FORMATS,
    intl_number_format: &[],
    example_number: "312345",
};

static AE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[4-7]\d|9[0-689])\d{7}|800\d{2,9}|[2-4679]\d{7}",
        possible_lengths: &[5, 6, 7, 8, 9, 10, 11, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: AE_FORMATS,
    intl_number_format: &[],
    example_number: "501234567",
};

static AF: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-7]\d{8}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: AF_FORMATS,
    intl_number_format: AF_INTL_FORMATS,
    example_number: "701234567",
};

static AG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:268|[58]\d\d|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "2684641234",
};

static AI: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:264|[58]\d\d|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "2642351234",
};

static AL: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:700\d\d|900)\d{3}|8\d{5,7}|(?:[2-5]|6\d)\d{7}",
        possible_lengths: &[6, 7, 8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: AL_FORMATS,
    intl_number_format: &[],
    example_number: "672123456",
};

static AM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[1-489]\d|55|60|77)\d{6}",
        possible_lengths: &[8],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: AM_FORMATS,
    intl_number_format: &[],
    example_number: "77123456",
};

static AO: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[29]\d{8}",
        possible_lengths: &[9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: AO_FORMATS,
    intl_number_format: &[],
    example_number: "923123456",
};

static AR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:11|[89]\d\d)\d{8}|[2368]\d{9}",
        possible_lengths: &[10, 11],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: AR_FORMATS,
    intl_number_format: AR_INTL_FORMATS,
    example_number: "91123456789",
};

static AS: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[58]\d\d|684|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "6847331234",
};

static AT: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"1\d{3,12}|2\d{6,12}|43(?:(?:0\d|5[02-9])\d{3,9}|2\d{4,5}|[3467]\d{4}|8\d{4,6}|9\d{4,7})|5\d{4,12}|8\d{7,12}|9\d{8,12}|(?:[367]\d|4[0-24-9])\d{4,11}",
        possible_lengths: &[4, 5, 6, 7, 8, 9, 10, 11, 12, 13],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: AT_FORMATS,
    intl_number_format: AT_INTL_FORMATS,
    example_number: "664123456",
};

static AU: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"1(?:[0-79]\d{7}(?:\d(?:\d{2})?)?|8[0-24-9]\d{7})|[2-478]\d{8}|1\d{4,7}",
        possible_lengths: &[5, 6, 7, 8, 9, 10, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: AU_FORMATS,
    intl_number_format: AU_INTL_FORMATS,
    example_number: "412345678",
};

static AW: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[25-79]\d\d|800)\d{4}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: AW_FORMATS,
    intl_number_format: &[],
    example_number: "5601234",
};

static AX: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"2\d{4,9}|35\d{4,5}|(?:60\d\d|800)\d{4,6}|7\d{5,11}|(?:[14]\d|3[0-46-9]|50)\d{4,8}",
        possible_lengths: &[5, 6, 7, 8, 9, 10, 11, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: FI_FORMATS,
    intl_number_format: FI_INTL_FORMATS,
    example_number: "412345678",
};

static AZ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"365\d{6}|(?:[124579]\d|60|88)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: AZ_FORMATS,
    intl_number_format: AZ_INTL_FORMATS,
    example_number: "401234567",
};

static BA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"6\d{8}|(?:[35689]\d|49|70)\d{6}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: BA_FORMATS,
    intl_number_format: BA_INTL_FORMATS,
    example_number: "61123456",
};

static BB: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:246|[58]\d\d|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "2462501234",
};

static BD: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-469]\d{9}|8[0-79]\d{7,8}|[2-79]\d{8}|[2-9]\d{7}|[3-9]\d{6}|[57-9]\d{5}",
        possible_lengths: &[6, 7, 8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: BD_FORMATS,
    intl_number_format: &[],
    example_number: "1812345678",
};

static BE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"4\d{8}|[1-9]\d{7}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: BE_FORMATS,
    intl_number_format: &[],
    example_number: "450001234",
};

static BF: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[024-7]\d{7}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: BF_FORMATS,
    intl_number_format: &[],
    example_number: "70123456",
};

static BG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"00800\d{7}|[2-7]\d{6,7}|[89]\d{6,8}|2\d{5}",
        possible_lengths: &[6, 7, 8, 9, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: BG_FORMATS,
    intl_number_format: BG_INTL_FORMATS,
    example_number: "43012345",
};

static BH: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[136-9]\d{7}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: BH_FORMATS,
    intl_number_format: &[],
    example_number: "36001234",
};

static BI: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[267]\d|31)\d{6}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: BI_FORMATS,
    intl_number_format: &[],
    example_number: "79561234",
};

static BJ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:01\d|8)\d{7}",
        possible_lengths: &[8, 10],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: BJ_FORMATS,
    intl_number_format: &[],
    example_number: "0195123456",
};

static BL: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"7090\d{5}|(?:[56]9|[89]\d)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: GP_FORMATS,
    intl_number_format: &[],
    example_number: "690001234",
};

static BM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:441|[58]\d\d|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "4413701234",
};

static BN: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-578]\d{6}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: BN_FORMATS,
    intl_number_format: &[],
    example_number: "7123456",
};

static BO: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[2-7]\d\d|8001)\d{5}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: BO_FORMATS,
    intl_number_format: &[],
    example_number: "71234567",
};

static BQ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[34]1|7\d)\d{5}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: CW_FORMATS,
    intl_number_format: &[],
    example_number: "3181234",
};

static BR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-467]\d{9,10}|55[0-46-9]\d{8}|[34]\d{7}|55\d{7,8}|(?:5[0-46-9]|[89]\d)\d{7,9}",
        possible_lengths: &[8, 9, 10, 11],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: BR_FORMATS,
    intl_number_format: BR_INTL_FORMATS,
    example_number: "11961234567",
};

static BS: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:242|[58]\d\d|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "2423591234",
};

static BT: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[178]\d{7}|[2-8]\d{6}",
        possible_lengths: &[7, 8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: BT_FORMATS,
    intl_number_format: BT_INTL_FORMATS,
    example_number: "17123456",
};

static BW: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:0800|(?:[37]|800)\d)\d{6}|(?:[2-6]\d|90)\d{5}",
        possible_lengths: &[7, 8, 10],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: BW_FORMATS,
    intl_number_format: &[],
    example_number: "71123456",
};

static BY: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[12]\d|33|44|902)\d{7}|8(?:0[0-79]\d{5,7}|[1-7]\d{9})|8(?:1[0-489]|[5-79]\d)\d{7}|8[1-79]\d{6,7}|8[0-79]\d{5}|8\d{5}",
        possible_lengths: &[6, 7, 8, 9, 10, 11],
    },
    national_prefix: Some("8"),
    national_prefix_formatting_rule: None,
    number_format: BY_FORMATS,
    intl_number_format: &[],
    example_number: "294911911",
};

static BZ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:0800\d|[2-8])\d{6}",
        possible_lengths: &[7, 11],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: BZ_FORMATS,
    intl_number_format: &[],
    example_number: "6221234",
};

static CA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{9}|3\d{6}",
        possible_lengths: &[7, 10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "5062345678",
};

static CC: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"1(?:[0-79]\d{8}(?:\d{2})?|8[0-24-9]\d{7})|[148]\d{8}|1\d{5,7}",
        possible_lengths: &[6, 7, 8, 9, 10, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: AU_FORMATS,
    intl_number_format: AU_INTL_FORMATS,
    example_number: "412345678",
};

static CD: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:(?:[189]|5\d)\d|2)\d{7}|[1-68]\d{6}",
        possible_lengths: &[7, 8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: CD_FORMATS,
    intl_number_format: &[],
    example_number: "991234567",
};

static CF: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"8776\d{4}|(?:[27]\d|61)\d{6}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: CF_FORMATS,
    intl_number_format: &[],
    example_number: "70012345",
};

static CG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"222\d{6}|(?:0\d|80)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: CG_FORMATS,
    intl_number_format: &[],
    example_number: "061234567",
};

static CH: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"8\d{11}|[2-9]\d{8}",
        possible_lengths: &[9, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: CH_FORMATS,
    intl_number_format: &[],
    example_number: "781234567",
};

static CI: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[02]\d{9}",
        possible_lengths: &[10],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: CI_FORMATS,
    intl_number_format: &[],
    example_number: "0123456789",
};

static CK: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-578]\d{4}",
        possible_lengths: &[5],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: CK_FORMATS,
    intl_number_format: &[],
    example_number: "71234",
};

static CL: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"12300\d{6}|6\d{9,10}|[2-9]\d{8}",
        possible_lengths: &[9, 10, 11],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: CL_FORMATS,
    intl_number_format: CL_INTL_FORMATS,
    example_number: "221234567",
};

static CM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[26]\d{8}|88\d{6,7}",
        possible_lengths: &[8, 9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: CM_FORMATS,
    intl_number_format: &[],
    example_number: "671234567",
};

static CN: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:(?:1[03-689]|2\d)\d\d|6)\d{8}|1\d{10}|[126]\d{6}(?:\d(?:\d{2})?)?|86\d{5,6}|(?:[3-579]\d|8[0-57-9])\d{5,9}",
        possible_lengths: &[7, 8, 9, 10, 11, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: CN_FORMATS,
    intl_number_format: CN_INTL_FORMATS,
    example_number: "13123456789",
};

static CO: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:46|60\d\d)\d{6}|(?:1\d|[39])\d{9}",
        possible_lengths: &[8, 10, 11],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: CO_FORMATS,
    intl_number_format: CO_INTL_FORMATS,
    example_number: "3211234567",
};

static CR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:8\d|90)\d{8}|(?:[24-8]\d{3}|3005)\d{4}",
        possible_lengths: &[8, 10],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: CR_FORMATS,
    intl_number_format: &[],
    example_number: "83123456",
};

static CU: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[2-7]|8\d\d)\d{7}|[2-47]\d{6}|[34]\d{5}",
        possible_lengths: &[6, 7, 8, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: CU_FORMATS,
    intl_number_format: &[],
    example_number: "51234567",
};

static CV: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[2-59]\d\d|800)\d{4}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: CV_FORMATS,
    intl_number_format: &[],
    example_number: "9911234",
};

static CW: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[34]1|60|(?:7|9\d)\d)\d{5}",
        possible_lengths: &[7, 8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: CW_FORMATS,
    intl_number_format: &[],
    example_number: "95181234",
};

static CX: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"1(?:[0-79]\d{8}(?:\d{2})?|8[0-24-9]\d{7})|[148]\d{8}|1\d{5,7}",
        possible_lengths: &[6, 7, 8, 9, 10, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: AU_FORMATS,
    intl_number_format: AU_INTL_FORMATS,
    example_number: "412345678",
};

static CY: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[279]\d|[58]0)\d{6}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: CY_FORMATS,
    intl_number_format: &[],
    example_number: "96123456",
};

static CZ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[2-578]\d|60)\d{7}|9\d{8,11}",
        possible_lengths: &[9, 10, 11, 12],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: CZ_FORMATS,
    intl_number_format: &[],
    example_number: "601123456",
};

static DE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2579]\d{5,14}|49(?:[34]0|69|8\d)\d\d?|49(?:37|49|60|7[089]|9\d)\d{1,3}|49(?:2[024-9]|3[2-689]|7[1-7])\d{1,8}|(?:1|[368]\d|4[0-8])\d{3,13}|49(?:[015]\d|2[13]|31|[46][1-8])\d{1,9}",
        possible_lengths: &[4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: DE_FORMATS,
    intl_number_format: DE_INTL_FORMATS,
    example_number: "15123456789",
};

static DJ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:2\d|77)\d{6}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: DJ_FORMATS,
    intl_number_format: &[],
    example_number: "77831001",
};

static DK: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{7}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: DK_FORMATS,
    intl_number_format: &[],
    example_number: "34412345",
};

static DM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[58]\d\d|767|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "7672251234",
};

static DO: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[58]\d\d|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "8092345678",
};

static DZ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[1-4]|[5-79]\d|80)\d{7}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: DZ_FORMATS,
    intl_number_format: &[],
    example_number: "551234567",
};

static EC: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"1\d{9,10}|(?:[2-7]|9\d)\d{7}",
        possible_lengths: &[8, 9, 10, 11],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: EC_FORMATS,
    intl_number_format: EC_INTL_FORMATS,
    example_number: "991234567",
};

static EE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"8\d{9}|[4578]\d{7}|(?:[3-8]\d|90)\d{5}",
        possible_lengths: &[7, 8, 10],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: EE_FORMATS,
    intl_number_format: &[],
    example_number: "51234567",
};

static EG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[189]\d{8,9}|[24-6]\d{8}|[135]\d{7}",
        possible_lengths: &[8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: EG_FORMATS,
    intl_number_format: &[],
    example_number: "1001234567",
};

static EH: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[5-8]\d{8}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: MA_FORMATS,
    intl_number_format: &[],
    example_number: "650123456",
};

static ER: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[178]\d{6}",
        possible_lengths: &[7],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: ER_FORMATS,
    intl_number_format: &[],
    example_number: "7123456",
};

static ES: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[5-9]\d{8}",
        possible_lengths: &[9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: ES_FORMATS,
    intl_number_format: ES_INTL_FORMATS,
    example_number: "612345678",
};

static ET: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:11|[2-57-9]\d)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: ET_FORMATS,
    intl_number_format: &[],
    example_number: "911234567",
};

static FI: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-35689]\d{4}|7\d{10,11}|(?:[124-7]\d|3[0-46-9])\d{8}|[1-9]\d{5,8}",
        possible_lengths: &[5, 6, 7, 8, 9, 10, 11, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: FI_FORMATS,
    intl_number_format: FI_INTL_FORMATS,
    example_number: "412345678",
};

static FJ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"45\d{5}|(?:0800\d|[235-9])\d{6}",
        possible_lengths: &[7, 11],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: FJ_FORMATS,
    intl_number_format: &[],
    example_number: "7012345",
};

static FK: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-7]\d{4}",
        possible_lengths: &[5],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: &[],
    intl_number_format: &[],
    example_number: "51234",
};

static FM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[39]\d\d|820)\d{4}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: FM_FORMATS,
    intl_number_format: &[],
    example_number: "3501234",
};

static FO: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{5}",
        possible_lengths: &[6],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: FO_FORMATS,
    intl_number_format: &[],
    example_number: "211234",
};

static FR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-9]\d{8}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: FR_FORMATS,
    intl_number_format: FR_INTL_FORMATS,
    example_number: "612345678",
};

static GA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[067]\d|11)\d{6}|[2-7]\d{6}",
        possible_lengths: &[7, 8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: GA_FORMATS,
    intl_number_format: &[],
    example_number: "06031234",
};

static GB: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-357-9]\d{9}|[18]\d{8}|8\d{6}",
        possible_lengths: &[7, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: GB_FORMATS,
    intl_number_format: &[],
    example_number: "7400123456",
};

static GD: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:473|[58]\d\d|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "4734031234",
};

static GE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[3-57]\d\d|800)\d{6}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: GE_FORMATS,
    intl_number_format: &[],
    example_number: "555123456",
};

static GF: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:694\d|7093)\d{5}|(?:59|[89]\d)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: GF_FORMATS,
    intl_number_format: &[],
    example_number: "694201234",
};

static GG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:1481|[357-9]\d{3})\d{6}|8\d{6}(?:\d{2})?",
        possible_lengths: &[7, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: GB_FORMATS,
    intl_number_format: &[],
    example_number: "7781123456",
};

static GH: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[235]\d{8}|800\d{5,6}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: GH_FORMATS,
    intl_number_format: GH_INTL_FORMATS,
    example_number: "231234567",
};

static GI: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[25]\d|60)\d{6}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: GI_FORMATS,
    intl_number_format: &[],
    example_number: "57123456",
};

static GL: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:19|[2-689]\d|70)\d{4}",
        possible_lengths: &[6],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: GL_FORMATS,
    intl_number_format: &[],
    example_number: "221234",
};

static GM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{6}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: GM_FORMATS,
    intl_number_format: &[],
    example_number: "3012345",
};

static GN: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"722\d{6}|(?:3|6\d)\d{7}",
        possible_lengths: &[8, 9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: GN_FORMATS,
    intl_number_format: &[],
    example_number: "601123456",
};

static GP: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"7090\d{5}|(?:[56]9|[89]\d)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: GP_FORMATS,
    intl_number_format: &[],
    example_number: "690001234",
};

static GQ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"222\d{6}|(?:3\d|55|[89]0)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: GQ_FORMATS,
    intl_number_format: &[],
    example_number: "222123456",
};

static GR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"5005000\d{3}|8\d{9,11}|(?:[269]\d|70)\d{8}",
        possible_lengths: &[10, 11, 12],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: GR_FORMATS,
    intl_number_format: &[],
    example_number: "6912345678",
};

static GT: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"80\d{6}|(?:1\d{3}|[2-7])\d{7}",
        possible_lengths: &[8, 11],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: GT_FORMATS,
    intl_number_format: &[],
    example_number: "51234567",
};

static GU: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[58]\d\d|671|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "6713001234",
};

static GW: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[49]\d{8}|4\d{6}",
        possible_lengths: &[7, 9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: GW_FORMATS,
    intl_number_format: &[],
    example_number: "955012345",
};

static GY: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[2-8]\d{3}|9008)\d{3}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: GY_FORMATS,
    intl_number_format: &[],
    example_number: "6091234",
};

static HK: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"8[0-46-9]\d{6,7}|9\d{4,7}|(?:[2-7]|9\d{3})\d{7}",
        possible_lengths: &[5, 6, 7, 8, 9, 11],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: HK_FORMATS,
    intl_number_format: &[],
    example_number: "51234567",
};

static HN: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"8\d{10}|[237-9]\d{7}",
        possible_lengths: &[8, 11],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: HN_FORMATS,
    intl_number_format: HN_INTL_FORMATS,
    example_number: "91234567",
};

static HR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-69]\d{8}|80\d{5,7}|[1-79]\d{7}|6\d{6}",
        possible_lengths: &[7, 8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: HR_FORMATS,
    intl_number_format: &[],
    example_number: "921234567",
};

static HT: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-589]\d{7}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: HT_FORMATS,
    intl_number_format: &[],
    example_number: "34101234",
};

static HU: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[235-7]\d{8}|[1-9]\d{7}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("06"),
    national_prefix_formatting_rule: None,
    number_format: HU_FORMATS,
    intl_number_format: &[],
    example_number: "201234567",
};

static ID: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"00[1-9]\d{9,14}|(?:[1-36]|8\d{5})\d{6}|00\d{9}|[1-9]\d{8,10}|[2-9]\d{7}",
        possible_lengths: &[7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: ID_FORMATS,
    intl_number_format: ID_INTL_FORMATS,
    example_number: "812345678",
};

static IE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:1\d|[2569])\d{6,8}|4\d{6,9}|7\d{8}|8\d{8,9}",
        possible_lengths: &[7, 8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: IE_FORMATS,
    intl_number_format: &[],
    example_number: "850123456",
};

static IL: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"1\d{6}(?:\d{3,5})?|[57]\d{8}|[1-489]\d{7}",
        possible_lengths: &[7, 8, 9, 10, 11, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: IL_FORMATS,
    intl_number_format: &[],
    example_number: "502345678",
};

static IM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"1624\d{6}|(?:[3578]\d|90)\d{8}",
        possible_lengths: &[10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: GB_FORMATS,
    intl_number_format: &[],
    example_number: "7924123456",
};

static IN: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:000800|[2-9]\d\d)\d{7}|1\d{7,12}",
        possible_lengths: &[8, 9, 10, 11, 12, 13],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: IN_FORMATS,
    intl_number_format: IN_INTL_FORMATS,
    example_number: "8123456789",
};

static IO: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"3\d{6}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: IO_FORMATS,
    intl_number_format: &[],
    example_number: "3801234",
};

static IQ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:1|7\d\d)\d{7}|[2-6]\d{7,8}",
        possible_lengths: &[8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: IQ_FORMATS,
    intl_number_format: &[],
    example_number: "7912345678",
};

static IR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-9]\d{9}|(?:[1-8]\d\d|9)\d{3,4}",
        possible_lengths: &[4, 5, 6, 7, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: IR_FORMATS,
    intl_number_format: &[],
    example_number: "9123456789",
};

static IS: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:38\d|[4-9])\d{6}",
        possible_lengths: &[7, 9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: IS_FORMATS,
    intl_number_format: &[],
    example_number: "6111234",
};

static IT: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"0\d{5,11}|1\d{8,10}|3(?:[0-8]\d{7,10}|9\d{7,8})|(?:43|55|70)\d{8}|8\d{5}(?:\d{2,4})?",
        possible_lengths: &[6, 7, 8, 9, 10, 11, 12],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: IT_FORMATS,
    intl_number_format: IT_INTL_FORMATS,
    example_number: "3123456789",
};

static JE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"1534\d{6}|(?:[3578]\d|90)\d{8}",
        possible_lengths: &[10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: GB_FORMATS,
    intl_number_format: &[],
    example_number: "7797712345",
};

static JM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[58]\d\d|658|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "8762101234",
};

static JO: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:(?:[2689]|7\d)\d|32|427|53)\d{6}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: JO_FORMATS,
    intl_number_format: &[],
    example_number: "790123456",
};

static JP: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"00[1-9]\d{6,14}|[25-9]\d{9}|(?:00|[1-9]\d\d)\d{6}",
        possible_lengths: &[8, 9, 10, 11, 12, 13, 14, 15, 16, 17],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: JP_FORMATS,
    intl_number_format: JP_INTL_FORMATS,
    example_number: "9012345678",
};

static KE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[17]\d\d|900)\d{6}|(?:2|80)0\d{6,7}|[4-6]\d{6,8}",
        possible_lengths: &[7, 8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: KE_FORMATS,
    intl_number_format: &[],
    example_number: "712123456",
};

static KG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"8\d{9}|[235-9]\d{8}",
        possible_lengths: &[9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: KG_FORMATS,
    intl_number_format: &[],
    example_number: "700123456",
};

static KH: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"1\d{9}|[1-9]\d{7,8}",
        possible_lengths: &[8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: KH_FORMATS,
    intl_number_format: &[],
    example_number: "91234567",
};

static KI: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[37]\d|6[0-79])\d{6}|(?:[2-48]\d|50)\d{3}",
        possible_lengths: &[5, 8],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: &[],
    intl_number_format: &[],
    example_number: "72001234",
};

static KM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[3478]\d{6}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: KM_FORMATS,
    intl_number_format: &[],
    example_number: "3212345",
};

static KN: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[58]\d\d|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "8697652917",
};

static KP: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"85\d{6}|(?:19\d|[2-7])\d{7}",
        possible_lengths: &[8, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: KP_FORMATS,
    intl_number_format: &[],
    example_number: "1921234567",
};

static KR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"00[1-9]\d{8,11}|(?:[12]|5\d{3})\d{7}|[13-6]\d{9}|(?:[1-6]\d|80)\d{7}|[3-6]\d{4,5}|(?:00|7)0\d{8}",
        possible_lengths: &[5, 6, 8, 9, 10, 11, 12, 13, 14],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: KR_FORMATS,
    intl_number_format: KR_INTL_FORMATS,
    example_number: "1020000000",
};

static KW: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"18\d{5}|(?:[2569]\d|41)\d{6}",
        possible_lengths: &[7, 8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: KW_FORMATS,
    intl_number_format: &[],
    example_number: "50012345",
};

static KY: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:345|[58]\d\d|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "3453231234",
};

static KZ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"8\d{13}|[78]\d{9}",
        possible_lengths: &[10, 14],
    },
    national_prefix: Some("8"),
    national_prefix_formatting_rule: None,
    number_format: RU_FORMATS,
    intl_number_format: RU_INTL_FORMATS,
    example_number: "7710009998",
};

static LA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[23]\d{9}|3\d{8}|(?:[235-8]\d|41)\d{6}",
        possible_lengths: &[8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: LA_FORMATS,
    intl_number_format: &[],
    example_number: "2023123456",
};

static LB: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[27-9]\d{7}|[13-9]\d{6}",
        possible_lengths: &[7, 8],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: LB_FORMATS,
    intl_number_format: &[],
    example_number: "71123456",
};

static LC: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[58]\d\d|758|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "7582845678",
};

static LI: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[68]\d{8}|(?:[2378]\d|90)\d{5}",
        possible_lengths: &[7, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: LI_FORMATS,
    intl_number_format: &[],
    example_number: "660234567",
};

static LK: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-9]\d{8}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: LK_FORMATS,
    intl_number_format: &[],
    example_number: "712345678",
};

static LR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[2457]\d|33|88)\d{7}|(?:2\d|[4-6])\d{6}",
        possible_lengths: &[7, 8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: LR_FORMATS,
    intl_number_format: &[],
    example_number: "770123456",
};

static LS: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[256]\d\d|800)\d{5}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: LS_FORMATS,
    intl_number_format: &[],
    example_number: "50123456",
};

static LT: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[3469]\d|52|[78]0)\d{6}",
        possible_lengths: &[8],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: LT_FORMATS,
    intl_number_format: &[],
    example_number: "61234567",
};

static LU: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"35[013-9]\d{4,8}|6\d{8}|35\d{2,4}|(?:[2457-9]\d|3[0-46-9])\d{2,9}",
        possible_lengths: &[4, 5, 6, 7, 8, 9, 10, 11],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: LU_FORMATS,
    intl_number_format: &[],
    example_number: "628123456",
};

static LV: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[268]\d|78|90)\d{6}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: LV_FORMATS,
    intl_number_format: &[],
    example_number: "21234567",
};

static LY: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{8}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: LY_FORMATS,
    intl_number_format: &[],
    example_number: "912345678",
};

static MA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[5-8]\d{8}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: MA_FORMATS,
    intl_number_format: &[],
    example_number: "650123456",
};

static MC: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[3489]|[67]\d)\d{7}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: MC_FORMATS,
    intl_number_format: MC_INTL_FORMATS,
    example_number: "612345678",
};

static MD: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[235-7]\d|[89]0)\d{6}",
        possible_lengths: &[8],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: MD_FORMATS,
    intl_number_format: &[],
    example_number: "62112345",
};

static ME: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:20|[3-79]\d)\d{6}|80\d{6,7}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: ME_FORMATS,
    intl_number_format: &[],
    example_number: "60123456",
};

static MF: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"7090\d{5}|(?:[56]9|[89]\d)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: GP_FORMATS,
    intl_number_format: &[],
    example_number: "690001234",
};

static MG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[23]\d{8}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: MG_FORMATS,
    intl_number_format: &[],
    example_number: "321234567",
};

static MH: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"329\d{4}|(?:[256]\d|45)\d{5}",
        possible_lengths: &[7],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: MH_FORMATS,
    intl_number_format: &[],
    example_number: "2351234",
};

static MK: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-578]\d{7}",
        possible_lengths: &[8],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: MK_FORMATS,
    intl_number_format: &[],
    example_number: "72345678",
};

static ML: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[24-9]\d{7}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: ML_FORMATS,
    intl_number_format: ML_INTL_FORMATS,
    example_number: "65012345",
};

static MM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"1\d{5,7}|95\d{6}|(?:[4-7]|9[0-46-9])\d{6,8}|(?:2|8\d)\d{5,8}",
        possible_lengths: &[6, 7, 8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: MM_FORMATS,
    intl_number_format: &[],
    example_number: "92123456",
};

static MN: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[12]\d{7,9}|[5-9]\d{7}",
        possible_lengths: &[8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: MN_FORMATS,
    intl_number_format: &[],
    example_number: "88123456",
};

static MO: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"0800\d{3}|(?:28|[68]\d)\d{6}",
        possible_lengths: &[7, 8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: MO_FORMATS,
    intl_number_format: &[],
    example_number: "66123456",
};

static MP: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[58]\d{9}|(?:67|90)0\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "6702345678",
};

static MQ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"7091\d{5}|(?:[56]9|[89]\d)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: MQ_FORMATS,
    intl_number_format: &[],
    example_number: "696201234",
};

static MR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[2-4]\d\d|800)\d{5}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: MR_FORMATS,
    intl_number_format: &[],
    example_number: "22123456",
};

static MS: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[58]\d\d|664|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "6644923456",
};

static MT: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"3550\d{4}|(?:[2579]\d\d|800)\d{5}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: MT_FORMATS,
    intl_number_format: &[],
    example_number: "96961234",
};

static MU: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[57]|8\d\d)\d{7}|[2-468]\d{6}",
        possible_lengths: &[7, 8, 10],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: MU_FORMATS,
    intl_number_format: &[],
    example_number: "52512345",
};

static MV: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:800|9[0-57-9]\d)\d{7}|[34679]\d{6}",
        possible_lengths: &[7, 10],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: MV_FORMATS,
    intl_number_format: &[],
    example_number: "7712345",
};

static MW: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[1289]\d|31|77)\d{7}|1\d{6}",
        possible_lengths: &[7, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: MW_FORMATS,
    intl_number_format: &[],
    example_number: "991234567",
};

static MX: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{9}",
        possible_lengths: &[10],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: MX_FORMATS,
    intl_number_format: MX_INTL_FORMATS,
    example_number: "2221234567",
};

static MY: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"1\d{8,9}|(?:3\d|[4-9])\d{7}",
        possible_lengths: &[8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: MY_FORMATS,
    intl_number_format: &[],
    example_number: "123456789",
};

static MZ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:2|8\d)\d{7}",
        possible_lengths: &[8, 9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: MZ_FORMATS,
    intl_number_format: &[],
    example_number: "821234567",
};

static NA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[68]\d{7,8}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: NA_FORMATS,
    intl_number_format: &[],
    example_number: "811234567",
};

static NC: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:050|[2-57-9]\d\d)\d{3}",
        possible_lengths: &[6],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: NC_FORMATS,
    intl_number_format: NC_INTL_FORMATS,
    example_number: "751234",
};

static NE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[027-9]\d{7}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: NE_FORMATS,
    intl_number_format: &[],
    example_number: "93123456",
};

static NF: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[13]\d{5}",
        possible_lengths: &[6],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: NF_FORMATS,
    intl_number_format: &[],
    example_number: "381234",
};

static NG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:20|9\d)\d{8}|[78]\d{9,13}",
        possible_lengths: &[10, 11, 12, 13, 14],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: NG_FORMATS,
    intl_number_format: &[],
    example_number: "8021234567",
};

static NI: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:1800|[25-8]\d{3})\d{4}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: NI_FORMATS,
    intl_number_format: &[],
    example_number: "81234567",
};

static NL: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[124-7]\d\d|3(?:[02-9]\d|1[0-8]))\d{6}|8\d{6,9}|9\d{6,10}|1\d{4,5}",
        possible_lengths: &[5, 6, 7, 8, 9, 10, 11],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: NL_FORMATS,
    intl_number_format: NL_INTL_FORMATS,
    example_number: "612345678",
};

static NO: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:0|[2-9]\d{3})\d{4}",
        possible_lengths: &[5, 8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: NO_FORMATS,
    intl_number_format: &[],
    example_number: "40612345",
};

static NP: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:1\d|9)\d{9}|[1-9]\d{7}",
        possible_lengths: &[8, 10, 11],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: NP_FORMATS,
    intl_number_format: NP_INTL_FORMATS,
    example_number: "9841234567",
};

static NR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:222|444|(?:55|8\d)\d|666|777|999)\d{4}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: NR_FORMATS,
    intl_number_format: &[],
    example_number: "5551234",
};

static NU: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[4-7]|888\d)\d{3}",
        possible_lengths: &[4, 7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: NU_FORMATS,
    intl_number_format: &[],
    example_number: "8884012",
};

static NZ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1289]\d{9}|50\d{5}(?:\d{2,3})?|[27-9]\d{7,8}|(?:[34]\d|6[0-35-9])\d{6}|8\d{4,6}",
        possible_lengths: &[5, 6, 7, 8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: NZ_FORMATS,
    intl_number_format: &[],
    example_number: "211234567",
};

static OM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:1505|[279]\d{3}|500)\d{4}|800\d{5,6}",
        possible_lengths: &[7, 8, 9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: OM_FORMATS,
    intl_number_format: &[],
    example_number: "92123456",
};

static PA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:00800|8\d{3})\d{6}|[68]\d{7}|[1-57-9]\d{6}",
        possible_lengths: &[7, 8, 10, 11],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: PA_FORMATS,
    intl_number_format: &[],
    example_number: "61234567",
};

static PE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[14-8]|9\d)\d{7}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: PE_FORMATS,
    intl_number_format: &[],
    example_number: "912345678",
};

static PF: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"4\d{5}(?:\d{2})?|8\d{7,8}",
        possible_lengths: &[6, 8, 9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: PF_FORMATS,
    intl_number_format: &[],
    example_number: "87123456",
};

static PG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:180|[78]\d{3})\d{4}|(?:[2-589]\d|64)\d{5}",
        possible_lengths: &[7, 8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: PG_FORMATS,
    intl_number_format: &[],
    example_number: "70123456",
};

static PH: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[2-7]|9\d)\d{8}|2\d{5}|(?:1800|8)\d{7,9}",
        possible_lengths: &[6, 8, 9, 10, 11, 12, 13],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: PH_FORMATS,
    intl_number_format: &[],
    example_number: "9051234567",
};

static PK: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"122\d{6}|[24-8]\d{10,11}|9(?:[013-9]\d{8,10}|2(?:[01]\d\d|2(?:[06-8]\d|1[01]))\d{7})|(?:[2-8]\d{3}|92(?:[0-7]\d|8[1-9]))\d{6}|[24-9]\d{8}|[89]\d{7}",
        possible_lengths: &[8, 9, 10, 11, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: PK_FORMATS,
    intl_number_format: &[],
    example_number: "3012345678",
};

static PL: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:6|8\d\d)\d{7}|[1-9]\d{6}(?:\d{2})?|[26]\d{5}",
        possible_lengths: &[6, 7, 8, 9, 10],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: PL_FORMATS,
    intl_number_format: &[],
    example_number: "512345678",
};

static PM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[78]\d{8}|[2-9]\d{5}",
        possible_lengths: &[6, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: PM_FORMATS,
    intl_number_format: &[],
    example_number: "551234",
};

static PR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[589]\d\d|787)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "7872345678",
};

static PS: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2489]2\d{6}|(?:1\d|5)\d{8}",
        possible_lengths: &[8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: PS_FORMATS,
    intl_number_format: &[],
    example_number: "599123456",
};

static PT: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"1693\d{5}|(?:[26-9]\d|30)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: PT_FORMATS,
    intl_number_format: &[],
    example_number: "912345678",
};

static PW: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[24-8]\d\d|345|900)\d{4}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: PW_FORMATS,
    intl_number_format: &[],
    example_number: "6201234",
};

static PY: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[36-8]\d{5,8}|4\d{6,8}|59\d{6}|9\d{5,10}|(?:2\d|5[0-8])\d{6,7}",
        possible_lengths: &[6, 7, 8, 9, 10, 11],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: PY_FORMATS,
    intl_number_format: PY_INTL_FORMATS,
    example_number: "961456789",
};

static QA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"800\d{4}|(?:2|800)\d{6}|(?:0080|[3-7])\d{7}",
        possible_lengths: &[7, 8, 9, 11],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: QA_FORMATS,
    intl_number_format: &[],
    example_number: "33123456",
};

static RE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"709\d{6}|(?:26|[689]\d)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: RE_FORMATS,
    intl_number_format: &[],
    example_number: "692123456",
};

static RO: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[236-8]\d|90)\d{7}|[23]\d{5}",
        possible_lengths: &[6, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: RO_FORMATS,
    intl_number_format: &[],
    example_number: "712034567",
};

static RS: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"38[02-9]\d{6,9}|6\d{7,9}|90\d{4,8}|38\d{5,6}|(?:7\d\d|800)\d{3,9}|(?:[12]\d|3[0-79])\d{5,10}",
        possible_lengths: &[6, 7, 8, 9, 10, 11, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: RS_FORMATS,
    intl_number_format: &[],
    example_number: "601234567",
};

static RU: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"8\d{13}|[347-9]\d{9}",
        possible_lengths: &[10, 14],
    },
    national_prefix: Some("8"),
    national_prefix_formatting_rule: None,
    number_format: RU_FORMATS,
    intl_number_format: RU_INTL_FORMATS,
    example_number: "9123456789",
};

static RW: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:06|[27]\d\d|[89]00)\d{6}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: RW_FORMATS,
    intl_number_format: &[],
    example_number: "720123456",
};

static SA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[15]\d|800|92)\d{7}",
        possible_lengths: &[9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: SA_FORMATS,
    intl_number_format: &[],
    example_number: "512345678",
};

static SB: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[6-9]\d{6}|[1-6]\d{4}",
        possible_lengths: &[5, 7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: SB_FORMATS,
    intl_number_format: &[],
    example_number: "7421234",
};

static SC: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[2489]\d|64)\d{5}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: SC_FORMATS,
    intl_number_format: &[],
    example_number: "2510123",
};

static SD: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[19]\d{8}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: SD_FORMATS,
    intl_number_format: &[],
    example_number: "911231234",
};

static SE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[26]\d\d|9)\d{9}|[1-9]\d{8}|[1-689]\d{7}|[1-4689]\d{6}|2\d{5}",
        possible_lengths: &[6, 7, 8, 9, 10, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: SE_FORMATS,
    intl_number_format: SE_INTL_FORMATS,
    example_number: "701234567",
};

static SG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:(?:1\d|8)\d\d|7000)\d{7}|[3689]\d{7}",
        possible_lengths: &[8, 10, 11],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: SG_FORMATS,
    intl_number_format: SG_INTL_FORMATS,
    example_number: "81234567",
};

static SH: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[256]\d|8)\d{3}",
        possible_lengths: &[4, 5],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: &[],
    intl_number_format: &[],
    example_number: "51234",
};

static SI: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-7]\d{7}|8\d{4,7}|90\d{4,6}",
        possible_lengths: &[5, 6, 7, 8],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: SI_FORMATS,
    intl_number_format: &[],
    example_number: "31234567",
};

static SJ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"0\d{4}|(?:[489]\d|79)\d{6}",
        possible_lengths: &[5, 8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: NO_FORMATS,
    intl_number_format: &[],
    example_number: "41234567",
};

static SK: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-689]\d{8}|[2-59]\d{6}|[2-5]\d{5}",
        possible_lengths: &[6, 7, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: SK_FORMATS,
    intl_number_format: SK_INTL_FORMATS,
    example_number: "912123456",
};

static SL: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[237-9]\d|66)\d{6}",
        possible_lengths: &[8],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: SL_FORMATS,
    intl_number_format: &[],
    example_number: "25123456",
};

static SM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:0549|[5-7]\d)\d{6}",
        possible_lengths: &[8, 10],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: SM_FORMATS,
    intl_number_format: SM_INTL_FORMATS,
    example_number: "66661212",
};

static SN: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[378]\d|93)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: SN_FORMATS,
    intl_number_format: &[],
    example_number: "701234567",
};

static SO: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[346-9]\d{8}|[12679]\d{7}|[1-5]\d{6}|[1348]\d{5}",
        possible_lengths: &[6, 7, 8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: SO_FORMATS,
    intl_number_format: &[],
    example_number: "71123456",
};

static SR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[2-5]|[6-9]\d)\d{5}",
        possible_lengths: &[6, 7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: SR_FORMATS,
    intl_number_format: &[],
    example_number: "7412345",
};

static SS: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[19]\d{8}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: SS_FORMATS,
    intl_number_format: &[],
    example_number: "977123456",
};

static ST: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:22|9\d)\d{5}",
        possible_lengths: &[7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: ST_FORMATS,
    intl_number_format: &[],
    example_number: "9812345",
};

static SV: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[25-7]\d{7}|(?:80\d|900)\d{4}(?:\d{4})?",
        possible_lengths: &[7, 8, 11],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: SV_FORMATS,
    intl_number_format: &[],
    example_number: "70123456",
};

static SX: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"7215\d{6}|(?:[58]\d\d|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "7215205678",
};

static SY: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-359]\d{8}|[1-5]\d{7}",
        possible_lengths: &[8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: SY_FORMATS,
    intl_number_format: &[],
    example_number: "944567890",
};

static SZ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"0800\d{4}|(?:[237]\d|900)\d{6}",
        possible_lengths: &[8, 9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: SZ_FORMATS,
    intl_number_format: &[],
    example_number: "76123456",
};

static TA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"8\d{3}",
        possible_lengths: &[4],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: &[],
    intl_number_format: &[],
    example_number: "8999",
};

static TC: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[58]\d\d|649|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "6492311234",
};

static TD: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:22|[3689]\d|77)\d{6}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: TD_FORMATS,
    intl_number_format: &[],
    example_number: "63012345",
};

static TG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[279]\d{7}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: TG_FORMATS,
    intl_number_format: &[],
    example_number: "90112345",
};

static TH: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:001800|[2-57]|[689]\d)\d{7}|1\d{7,9}",
        possible_lengths: &[8, 9, 10, 13],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: TH_FORMATS,
    intl_number_format: &[],
    example_number: "812345678",
};

static TJ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[0-57-9]\d|66)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: TJ_FORMATS,
    intl_number_format: &[],
    example_number: "917123456",
};

static TK: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-47]\d{3,6}",
        possible_lengths: &[4, 5, 6, 7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: &[],
    intl_number_format: &[],
    example_number: "7290",
};

static TL: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"7\d{7}|(?:[2-47]\d|[89]0)\d{5}",
        possible_lengths: &[7, 8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: TL_FORMATS,
    intl_number_format: &[],
    example_number: "77212345",
};

static TM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[1-6]\d|71)\d{6}",
        possible_lengths: &[8],
    },
    national_prefix: Some("8"),
    national_prefix_formatting_rule: None,
    number_format: TM_FORMATS,
    intl_number_format: &[],
    example_number: "66123456",
};

static TN: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-57-9]\d{7}",
        possible_lengths: &[8],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: TN_FORMATS,
    intl_number_format: &[],
    example_number: "20123456",
};

static TO: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:0800|(?:[5-8]\d\d|999)\d)\d{3}|[2-8]\d{4}",
        possible_lengths: &[5, 7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: TO_FORMATS,
    intl_number_format: &[],
    example_number: "7715123",
};

static TR: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"4\d{6}|8\d{11,12}|(?:[2-58]\d\d|900)\d{7}",
        possible_lengths: &[7, 10, 12, 13],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: TR_FORMATS,
    intl_number_format: TR_INTL_FORMATS,
    example_number: "5012345678",
};

static TT: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[58]\d\d|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "8682911234",
};

static TV: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:2|7\d\d|90)\d{4}",
        possible_lengths: &[5, 6, 7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: TV_FORMATS,
    intl_number_format: &[],
    example_number: "901234",
};

static TW: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-689]\d{8}|7\d{9,10}|[2-8]\d{7}|2\d{6}",
        possible_lengths: &[7, 8, 9, 10, 11],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: TW_FORMATS,
    intl_number_format: &[],
    example_number: "912345678",
};

static TZ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[25-8]\d|41|90)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: TZ_FORMATS,
    intl_number_format: &[],
    example_number: "621234567",
};

static UA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[89]\d{9}|[3-9]\d{8}",
        possible_lengths: &[9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: UA_FORMATS,
    intl_number_format: &[],
    example_number: "501234567",
};

static UG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"800\d{6}|(?:[29]0|[347]\d)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: UG_FORMATS,
    intl_number_format: &[],
    example_number: "712345678",
};

static US: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[2-9]\d{9}|3\d{6}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "2015550123",
};

static UY: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"0004\d{2,9}|[1249]\d{7}|2\d{3,4}|(?:[49]\d|80)\d{5}",
        possible_lengths: &[4, 5, 6, 7, 8, 9, 10, 11, 12, 13],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: UY_FORMATS,
    intl_number_format: &[],
    example_number: "94231234",
};

static UZ: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:20|33|[5-9]\d)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: UZ_FORMATS,
    intl_number_format: &[],
    example_number: "912345678",
};

static VA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"0\d{5,10}|3[0-8]\d{7,10}|55\d{8}|8\d{5}(?:\d{2,4})?|(?:1\d|39)\d{7,8}",
        possible_lengths: &[6, 7, 8, 9, 10, 11, 12],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: IT_FORMATS,
    intl_number_format: IT_INTL_FORMATS,
    example_number: "3123456789",
};

static VC: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[58]\d\d|784|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "7844301234",
};

static VE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[68]00\d{7}|(?:[24]\d|[59]0)\d{8}",
        possible_lengths: &[10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: VE_FORMATS,
    intl_number_format: &[],
    example_number: "4121234567",
};

static VG: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:284|[58]\d\d|900)\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "2843001234",
};

static VI: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[58]\d{9}|(?:34|90)0\d{7}",
        possible_lengths: &[10],
    },
    national_prefix: Some("1"),
    national_prefix_formatting_rule: None,
    number_format: US_FORMATS,
    intl_number_format: US_INTL_FORMATS,
    example_number: "3406421234",
};

static VN: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[12]\d{9}|[135-9]\d{8}|[16]\d{6,7}|7\d{6}",
        possible_lengths: &[7, 8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: VN_FORMATS,
    intl_number_format: VN_INTL_FORMATS,
    example_number: "912345678",
};

static VU: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[57-9]\d{6}|(?:[238]\d|48)\d{3}",
        possible_lengths: &[5, 7],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: VU_FORMATS,
    intl_number_format: &[],
    example_number: "5912345",
};

static WF: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:40|72|8\d{4})\d{4}|[89]\d{5}",
        possible_lengths: &[6, 9],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: WF_FORMATS,
    intl_number_format: &[],
    example_number: "821234",
};

static WS: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:[2-6]|8\d{5})\d{4}|[78]\d{6}|[68]\d{5}",
        possible_lengths: &[5, 6, 7, 10],
    },
    national_prefix: None,
    national_prefix_formatting_rule: None,
    number_format: WS_FORMATS,
    intl_number_format: &[],
    example_number: "7212345",
};

static XK: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"2\d{7,8}|3\d{7,11}|(?:4\d\d|[89]00)\d{5}",
        possible_lengths: &[8, 9, 10, 11, 12],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: XK_FORMATS,
    intl_number_format: &[],
    example_number: "43201234",
};

static YE: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:1|7\d)\d{7}|[1-7]\d{6}",
        possible_lengths: &[7, 8, 9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: YE_FORMATS,
    intl_number_format: &[],
    example_number: "712345678",
};

static YT: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"(?:639\d|7093)\d{5}|(?:26|80|9\d)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: RE_FORMATS,
    intl_number_format: &[],
    example_number: "639012345",
};

static ZA: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"[1-79]\d{8}|8\d{4,9}",
        possible_lengths: &[5, 6, 7, 8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: ZA_FORMATS,
    intl_number_format: &[],
    example_number: "711234567",
};

static ZM: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"800\d{6}|(?:21|[579]\d|63)\d{7}",
        possible_lengths: &[9],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: ZM_FORMATS,
    intl_number_format: ZM_INTL_FORMATS,
    example_number: "955123456",
};

static ZW: NumberingPlan = NumberingPlan {
    general_desc: PhoneNumberDesc {
        national_number_pattern: r"2(?:[0-57-9]\d{6,8}|6[0-24-9]\d{6,7})|[38]\d{9}|[35-8]\d{8}|[3-6]\d{7}|[1-689]\d{6}|[1-3569]\d{5}|[1356]\d{4}",
        possible_lengths: &[5, 6, 7, 8, 9, 10],
    },
    national_prefix: Some("0"),
    national_prefix_formatting_rule: None,
    number_format: ZW_FORMATS,
    intl_number_format: &[],
    example_number: "712345678",
};

/// Returns the numbering plan of a region. Territories without grouping
/// rules of their own carry those of the main region of their calling code.
pub fn numbering_plan(region_code: &str) -> Option<&'static NumberingPlan> {
    let plan = match region_code {
        "AC" => &AC,
        "AD" => &AD,
        "AE" => &AE,
        "AF" => &AF,
        "AG" => &AG,
        "AI" => &AI,
        "AL" => &AL,
        "AM" => &AM,
        "AO" => &AO,
        "AR" => &AR,
        "AS" => &AS,
        "AT" => &AT,
        "AU" => &AU,
        "AW" => &AW,
        "AX" => &AX,
        "AZ" => &AZ,
        "BA" => &BA,
        "BB" => &BB,
        "BD" => &BD,
        "BE" => &BE,
        "BF" => &BF,
        "BG" => &BG,
        "BH" => &BH,
        "BI" => &BI,
        "BJ" => &BJ,
        "BL" => &BL,
        "BM" => &BM,
        "BN" => &BN,
        "BO" => &BO,
        "BQ" => &BQ,
        "BR" => &BR,
        "BS" => &BS,
        "BT" => &BT,
        "BW" => &BW,
        "BY" => &BY,
        "BZ" => &BZ,
        "CA" => &CA,
        "CC" => &CC,
        "CD" => &CD,
        "CF" => &CF,
        "CG" => &CG,
        "CH" => &CH,
        "CI" => &CI,
        "CK" => &CK,
        "CL" => &CL,
        "CM" => &CM,
        "CN" => &CN,
        "CO" => &CO,
        "CR" => &CR,
        "CU" => &CU,
        "CV" => &CV,
        "CW" => &CW,
        "CX" => &CX,
        "CY" => &CY,
        "CZ" => &CZ,
        "DE" => &DE,
        "DJ" => &DJ,
        "DK" => &DK,
        "DM" => &DM,
        "DO" => &DO,
        "DZ" => &DZ,
        "EC" => &EC,
        "EE" => &EE,
        "EG" => &EG,
        "EH" => &EH,
        "ER" => &ER,
        "ES" => &ES,
        "ET" => &ET,
        "FI" => &FI,
        "FJ" => &FJ,
        "FK" => &FK,
        "FM" => &FM,
        "FO" => &FO,
        "FR" => &FR,
        "GA" => &GA,
        "GB" => &GB,
        "GD" => &GD,
        "GE" => &GE,
        "GF" => &GF,
        "GG" => &GG,
        "GH" => &GH,
        "GI" => &GI,
        "GL" => &GL,
        "GM" => &GM,
        "GN" => &GN,
        "GP" => &GP,
        "GQ" => &GQ,
        "GR" => &GR,
        "GT" => &GT,
        "GU" => &GU,
        "GW" => &GW,
        "GY" => &GY,
        "HK" => &HK,
        "HN" => &HN,
        "HR" => &HR,
        "HT" => &HT,
        "HU" => &HU,
        "ID" => &ID,
        "IE" => &IE,
        "IL" => &IL,
        "IM" => &IM,
        "IN" => &IN,
        "IO" => &IO,
        "IQ" => &IQ,
        "IR" => &IR,
        "IS" => &IS,
        "IT" => &IT,
        "JE" => &JE,
        "JM" => &JM,
        "JO" => &JO,
        "JP" => &JP,
        "KE" => &KE,
        "KG" => &KG,
        "KH" => &KH,
        "KI" => &KI,
        "KM" => &KM,
        "KN" => &KN,
        "KP" => &KP,
        "KR" => &KR,
        "KW" => &KW,
        "KY" => &KY,
        "KZ" => &KZ,
        "LA" => &LA,
        "LB" => &LB,
        "LC" => &LC,
        "LI" => &LI,
        "LK" => &LK,
        "LR" => &LR,
        "LS" => &LS,
        "LT" => &LT,
        "LU" => &LU,
        "LV" => &LV,
        "LY" => &LY,
        "MA" => &MA,
        "MC" => &MC,
        "MD" => &MD,
        "ME" => &ME,
        "MF" => &MF,
        "MG" => &MG,
        "MH" => &MH,
        "MK" => &MK,
        "ML" => &ML,
        "MM" => &MM,
        "MN" => &MN,
        "MO" => &MO,
        "MP" => &MP,
        "MQ" => &MQ,
        "MR" => &MR,
        "MS" => &MS,
        "MT" => &MT,
        "MU" => &MU,
        "MV" => &MV,
        "MW" => &MW,
        "MX" => &MX,
        "MY" => &MY,
        "MZ" => &MZ,
        "NA" => &NA,
        "NC" => &NC,
        "NE" => &NE,
        "NF" => &NF,
        "NG" => &NG,
        "NI" => &NI,
        "NL" => &NL,
        "NO" => &NO,
        "NP" => &NP,
        "NR" => &NR,
        "NU" => &NU,
        "NZ" => &NZ,
        "OM" => &OM,
        "PA" => &PA,
        "PE" => &PE,
        "PF" => &PF,
        "PG" => &PG,
        "PH" => &PH,
        "PK" => &PK,
        "PL" => &PL,
        "PM" => &PM,
        "PR" => &PR,
        "PS" => &PS,
        "PT" => &PT,
        "PW" => &PW,
        "PY" => &PY,
        "QA" => &QA,
        "RE" => &RE,
        "RO" => &RO,
        "RS" => &RS,
        "RU" => &RU,
        "RW" => &RW,
        "SA" => &SA,
        "SB" => &SB,
        "SC" => &SC,
        "SD" => &SD,
        "SE" => &SE,
        "SG" => &SG,
        "SH" => &SH,
        "SI" => &SI,
        "SJ" => &SJ,
        "SK" => &SK,
        "SL" => &SL,
        "SM" => &SM,
        "SN" => &SN,
        "SO" => &SO,
        "SR" => &SR,
        "SS" => &SS,
        "ST" => &ST,
        "SV" => &SV,
        "SX" => &SX,
        "SY" => &SY,
        "SZ" => &SZ,
        "TA" => &TA,
        "TC" => &TC,
        "TD" => &TD,
        "TG" => &TG,
        "TH" => &TH,
        "TJ" => &TJ,
        "TK" => &TK,
        "TL" => &TL,
        "TM" => &TM,
        "TN" => &TN,
        "TO" => &TO,
        "TR" => &TR,
        "TT" => &TT,
        "TV" => &TV,
        "TW" => &TW,
        "TZ" => &TZ,
        "UA" => &UA,
        "UG" => &UG,
        "US" => &US,
        "UY" => &UY,
        "UZ" => &UZ,
        "VA" => &VA,
        "VC" => &VC,
        "VE" => &VE,
        "VG" => &VG,
        "VI" => &VI,
        "VN" => &VN,
        "VU" => &VU,
        "WF" => &WF,
        "WS" => &WS,
        "XK" => &XK,
        "YE" => &YE,
        "YT" => &YT,
        "ZA" => &ZA,
        "ZM" => &ZM,
        "ZW" => &ZW,
        _ => return None,
    };
    Some(plan)
}

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

use super::Territory;

/// Regions that own a calling code shared with other regions. Formatting
/// rules of a shared code live with its main region.
pub static MAIN_REGIONS_FOR_SHARED_CODES: &[&str] = &[
    "US", "RU", "IT", "GB", "NO", "AU", "MA", "RE", "SH", "FI", "GP", "CW",
];

/// Every supported region, sorted by id.
pub static TERRITORIES: &[Territory] = &[
    Territory::new("AC", "Ascension Island", 247),
    Territory::new("AD", "Andorra", 376),
    Territory::new("AE", "United Arab Emirates", 971),
    Territory::new("AF", "Afghanistan", 93),
    Territory::new("AG", "Antigua & Barbuda", 1),
    Territory::new("AI", "Anguilla", 1),
    Territory::new("AL", "Albania", 355),
    Territory::new("AM", "Armenia", 374),
    Territory::new("AO", "Angola", 244),
    Territory::new("AR", "Argentina", 54),
    Territory::new("AS", "American Samoa", 1),
    Territory::new("AT", "Austria", 43),
    Territory::new("AU", "Australia", 61),
    Territory::new("AW", "Aruba", 297),
    Territory::new("AX", "Åland Islands", 358),
    Territory::new("AZ", "Azerbaijan", 994),
    Territory::new("BA", "Bosnia & Herzegovina", 387),
    Territory::new("BB", "Barbados", 1),
    Territory::new("BD", "Bangladesh", 880),
    Territory::new("BE", "Belgium", 32),
    Territory::new("BF", "Burkina Faso", 226),
    Territory::new("BG", "Bulgaria", 359),
    Territory::new("BH", "Bahrain", 973),
    Territory::new("BI", "Burundi", 257),
    Territory::new("BJ", "Benin", 229),
    Territory::new("BL", "St. Barthélemy", 590),
    Territory::new("BM", "Bermuda", 1),
    Territory::new("BN", "Brunei", 673),
    Territory::new("BO", "Bolivia", 591),
    Territory::new("BQ", "Caribbean Netherlands", 599),
    Territory::new("BR", "Brazil", 55),
    Territory::new("BS", "Bahamas", 1),
    Territory::new("BT", "Bhutan", 975),
    Territory::new("BW", "Botswana", 267),
    Territory::new("BY", "Belarus", 375),
    Territory::new("BZ", "Belize", 501),
    Territory::new("CA", "Canada", 1),
    Territory::new("CC", "Cocos (Keeling) Islands", 61),
    Territory::new("CD", "Congo - Kinshasa", 243),
    Territory::new("CF", "Central African Republic", 236),
    Territory::new("CG", "Congo - Brazzaville", 242),
    Territory::new("CH", "Switzerland", 41),
    Territory::new("CI", "Côte d’Ivoire", 225),
    Territory::new("CK", "Cook Islands", 682),
    Territory::new("CL", "Chile", 56),
    Territory::new("CM", "Cameroon", 237),
    Territory::new("CN", "China", 86),
    Territory::new("CO", "Colombia", 57),
    Territory::new("CR", "Costa Rica", 506),
    Territory::new("CU", "Cuba", 53),
    Territory::new("CV", "Cape Verde", 238),
    Territory::new("CW", "Curaçao", 599),
    Territory::new("CX", "Christmas Island", 61),
    Territory::new("CY", "Cyprus", 357),
    Territory::new("CZ", "Czechia", 420),
    Territory::new("DE", "Germany", 49),
    Territory::new("DJ", "Djibouti", 253),
    Territory::new("DK", "Denmark", 45),
    Territory::new("DM", "Dominica", 1),
    Territory::new("DO", "Dominican Republic", 1),
    Territory::new("DZ", "Algeria", 213),
    Territory::new("EC", "Ecuador", 593),
    Territory::new("EE", "Estonia", 372),
    Territory::new("EG", "Egypt", 20),
    Territory::new("EH", "Western Sahara", 212),
    Territory::new("ER", "Eritrea", 291),
    Territory::new("ES", "Spain", 34),
    Territory::new("ET", "Ethiopia", 251),
    Territory::new("FI", "Finland", 358),
    Territory::new("FJ", "Fiji", 679),
    Territory::new("FK", "Falkland Islands", 500),
    Territory::new("FM", "Micronesia", 691),
    Territory::new("FO", "Faroe Islands", 298),
    Territory::new("FR", "France", 33),
    Territory::new("GA", "Gabon", 241),
    Territory::new("GB", "United Kingdom", 44),
    Territory::new("GD", "Grenada", 1),
    Territory::new("GE", "Georgia", 995),
    Territory::new("GF", "French Guiana", 594),
    Territory::new("GG", "Guernsey", 44),
    Territory::new("GH", "Ghana", 233),
    Territory::new("GI", "Gibraltar", 350),
    Territory::new("GL", "Greenland", 299),
    Territory::new("GM", "Gambia", 220),
    Territory::new("GN", "Guinea", 224),
    Territory::new("GP", "Guadeloupe", 590),
    Territory::new("GQ", "Equatorial Guinea", 240),
    Territory::new("GR", "Greece", 30),
    Territory::new("GT", "Guatemala", 502),
    Territory::new("GU", "Guam", 1),
    Territory::new("GW", "Guinea-Bissau", 245),
    Territory::new("GY", "Guyana", 592),
    Territory::new("HK", "Hong Kong SAR China", 852),
    Territory::new("HN", "Honduras", 504),
    Territory::new("HR", "Croatia", 385),
    Territory::new("HT", "Haiti", 509),
    Territory::new("HU", "Hungary", 36),
    Territory::new("ID", "Indonesia", 62),
    Territory::new("IE", "Ireland", 353),
    Territory::new("IL", "Israel", 972),
    Territory::new("IM", "Isle of Man", 44),
    Territory::new("IN", "India", 91),
    Territory::new("IO", "British Indian Ocean Territory", 246),
    Territory::new("IQ", "Iraq", 964),
    Territory::new("IR", "Iran", 98),
    Territory::new("IS", "Iceland", 354),
    Territory::new("IT", "Italy", 39),
    Territory::new("JE", "Jersey", 44),
    Territory::new("JM", "Jamaica", 1),
    Territory::new("JO", "Jordan", 962),
    Territory::new("JP", "Japan", 81),
    Territory::new("KE", "Kenya", 254),
    Territory::new("KG", "Kyrgyzstan", 996),
    Territory::new("KH", "Cambodia", 855),
    Territory::new("KI", "Kiribati", 686),
    Territory::new("KM", "Comoros", 269),
    Territory::new("KN", "St. Kitts & Nevis", 1),
    Territory::new("KP", "North Korea", 850),
    Territory::new("KR", "South Korea", 82),
    Territory::new("KW", "Kuwait", 965),
    Territory::new("KY", "Cayman Islands", 1),
    Territory::new("KZ", "Kazakhstan", 7),
    Territory::new("LA", "Laos", 856),
    Territory::new("LB", "Lebanon", 961),
    Territory::new("LC", "St. Lucia", 1),
    Territory::new("LI", "Liechtenstein", 423),
    Territory::new("LK", "Sri Lanka", 94),
    Territory::new("LR", "Liberia", 231),
    Territory::new("LS", "Lesotho", 266),
    Territory::new("LT", "Lithuania", 370),
    Territory::new("LU", "Luxembourg", 352),
    Territory::new("LV", "Latvia", 371),
    Territory::new("LY", "Libya", 218),
    Territory::new("MA", "Morocco", 212),
    Territory::new("MC", "Monaco", 377),
    Territory::new("MD", "Moldova", 373),
    Territory::new("ME", "Montenegro", 382),
    Territory::new("MF", "St. Martin", 590),
    Territory::new("MG", "Madagascar", 261),
    Territory::new("MH", "Marshall Islands", 692),
    Territory::new("MK", "North Macedonia", 389),
    Territory::new("ML", "Mali", 223),
    Territory::new("MM", "Myanmar (Burma)", 95),
    Territory::new("MN", "Mongolia", 976),
    Territory::new("MO", "Macao SAR China", 853),
    Territory::new("MP", "Northern Mariana Islands", 1),
    Territory::new("MQ", "Martinique", 596),
    Territory::new("MR", "Mauritania", 222),
    Territory::new("MS", "Montserrat", 1),
    Territory::new("MT", "Malta", 356),
    Territory::new("MU", "Mauritius", 230),
    Territory::new("MV", "Maldives", 960),
    Territory::new("MW", "Malawi", 265),
    Territory::new("MX", "Mexico", 52),
    Territory::new("MY", "Malaysia", 60),
    Territory::new("MZ", "Mozambique", 258),
    Territory::new("NA", "Namibia", 264),
    Territory::new("NC", "New Caledonia", 687),
    Territory::new("NE", "Niger", 227),
    Territory::new("NF", "Norfolk Island", 672),
    Territory::new("NG", "Nigeria", 234),
    Territory::new("NI", "Nicaragua", 505),
    Territory::new("NL", "Netherlands", 31),
    Territory::new("NO", "Norway", 47),
    Territory::new("NP", "Nepal", 977),
    Territory::new("NR", "Nauru", 674),
    Territory::new("NU", "Niue", 683),
    Territory::new("NZ", "New Zealand", 64),
    Territory::new("OM", "Oman", 968),
    Territory::new("PA", "Panama", 507),
    Territory::new("PE", "Peru", 51),
    Territory::new("PF", "French Polynesia", 689),
    Territory::new("PG", "Papua New Guinea", 675),
    Territory::new("PH", "Philippines", 63),
    Territory::new("PK", "Pakistan", 92),
    Territory::new("PL", "Poland", 48),
    Territory::new("PM", "St. Pierre & Miquelon", 508),
    Territory::new("PR", "Puerto Rico", 1),
    Territory::new("PS", "Palestinian Territories", 970),
    Territory::new("PT", "Portugal", 351),
    Territory::new("PW", "Palau", 680),
    Territory::new("PY", "Paraguay", 595),
    Territory::new("QA", "Qatar", 974),
    Territory::new("RE", "Réunion", 262),
    Territory::new("RO", "Romania", 40),
    Territory::new("RS", "Serbia", 381),
    Territory::new("RU", "Russia", 7),
    Territory::new("RW", "Rwanda", 250),
    Territory::new("SA", "Saudi Arabia", 966),
    Territory::new("SB", "Solomon Islands", 677),
    Territory::new("SC", "Seychelles", 248),
    Territory::new("SD", "Sudan", 249),
    Territory::new("SE", "Sweden", 46),
    Territory::new("SG", "Singapore", 65),
    Territory::new("SH", "St. Helena", 290),
    Territory::new("SI", "Slovenia", 386),
    Territory::new("SJ", "Svalbard & Jan Mayen", 47),
    Territory::new("SK", "Slovakia", 421),
    Territory::new("SL", "Sierra Leone", 232),
    Territory::new("SM", "San Marino", 378),
    Territory::new("SN", "Senegal", 221),
    Territory::new("SO", "Somalia", 252),
    Territory::new("SR", "Suriname", 597),
    Territory::new("SS", "South Sudan", 211),
    Territory::new("ST", "São Tomé & Príncipe", 239),
    Territory::new("SV", "El Salvador", 503),
    Territory::new("SX", "Sint Maarten", 1),
    Territory::new("SY", "Syria", 963),
    Territory::new("SZ", "Eswatini", 268),
    Territory::new("TA", "Tristan da Cunha", 290),
    Territory::new("TC", "Turks & Caicos Islands", 1),
    Territory::new("TD", "Chad", 235),
    Territory::new("TG", "Togo", 228),
    Territory::new("TH", "Thailand", 66),
    Territory::new("TJ", "Tajikistan", 992),
    Territory::new("TK", "Tokelau", 690),
    Territory::new("TL", "Timor-Leste", 670),
    Territory::new("TM", "Turkmenistan", 993),
    Territory::new("TN", "Tunisia", 216),
    Territory::new("TO", "Tonga", 676),
    Territory::new("TR", "Turkey", 90),
    Territory::new("TT", "Trinidad & Tobago", 1),
    Territory::new("TV", "Tuvalu", 688),
    Territory::new("TW", "Taiwan", 886),
    Territory::new("TZ", "Tanzania", 255),
    Territory::new("UA", "Ukraine", 380),
    Territory::new("UG", "Uganda", 256),
    Territory::new("US", "United States", 1),
    Territory::new("UY", "Uruguay", 598),
    Territory::new("UZ", "Uzbekistan", 998),
    Territory::new("VA", "Vatican City", 39),
    Territory::new("VC", "St. Vincent & Grenadines", 1),
    Territory::new("VE", "Venezuela", 58),
    Territory::new("VG", "British Virgin Islands", 1),
    Territory::new("VI", "U.S. Virgin Islands", 1),
    Territory::new("VN", "Vietnam", 84),
    Territory::new("VU", "Vanuatu", 678),
    Territory::new("WF", "Wallis & Futuna", 681),
    Territory::new("WS", "Samoa", 685),
    Territory::new("XK", "Kosovo", 383),
    Territory::new("YE", "Yemen", 967),
    Territory::new("YT", "Mayotte", 262),
    Territory::new("ZA", "South Africa", 27),
    Territory::new("ZM", "Zambia", 260),
    Territory::new("ZW", "Zimbabwe", 263),
];

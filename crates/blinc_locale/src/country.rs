//! Country and region catalog.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::split::locale_split;
use crate::LocaleError;

macro_rules! countries {
    ($($variant:ident => ($id:literal, $name:literal)),* $(,)?) => {
        /// A country or region, identified by its ISO 3166-1 alpha-2 code
        /// (or UN M.49 code for supranational regions).
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "String", into = "String")
        )]
        pub enum Country {
            $($variant,)*
        }

        impl Country {
            /// Identifier as it appears in locale strings (`US`, `419`).
            pub fn identifier(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)*
                }
            }

            /// English name.
            pub fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Full catalog, in enumeration order.
            pub fn all() -> &'static [Country] {
                &[$(Country::$variant,)*]
            }
        }
    };
}

countries! {
    Albania => ("AL", "Albania"),
    Argentina => ("AR", "Argentina"),
    Armenia => ("AM", "Armenia"),
    Australia => ("AU", "Australia"),
    Austria => ("AT", "Austria"),
    Azerbaijan => ("AZ", "Azerbaijan"),
    Bangladesh => ("BD", "Bangladesh"),
    Belarus => ("BY", "Belarus"),
    Belgium => ("BE", "Belgium"),
    BosniaAndHerzegovina => ("BA", "Bosnia and Herzegovina"),
    Brazil => ("BR", "Brazil"),
    Bulgaria => ("BG", "Bulgaria"),
    Cambodia => ("KH", "Cambodia"),
    Canada => ("CA", "Canada"),
    Chile => ("CL", "Chile"),
    China => ("CN", "China"),
    Colombia => ("CO", "Colombia"),
    Croatia => ("HR", "Croatia"),
    Czechia => ("CZ", "Czechia"),
    Denmark => ("DK", "Denmark"),
    Egypt => ("EG", "Egypt"),
    Estonia => ("EE", "Estonia"),
    Ethiopia => ("ET", "Ethiopia"),
    Finland => ("FI", "Finland"),
    France => ("FR", "France"),
    Georgia => ("GE", "Georgia"),
    Germany => ("DE", "Germany"),
    Greece => ("GR", "Greece"),
    HongKong => ("HK", "Hong Kong"),
    Hungary => ("HU", "Hungary"),
    Iceland => ("IS", "Iceland"),
    India => ("IN", "India"),
    Indonesia => ("ID", "Indonesia"),
    Iran => ("IR", "Iran"),
    Ireland => ("IE", "Ireland"),
    Israel => ("IL", "Israel"),
    Italy => ("IT", "Italy"),
    Japan => ("JP", "Japan"),
    Kazakhstan => ("KZ", "Kazakhstan"),
    Kenya => ("KE", "Kenya"),
    Kyrgyzstan => ("KG", "Kyrgyzstan"),
    Laos => ("LA", "Laos"),
    LatinAmerica => ("419", "Latin America"),
    Latvia => ("LV", "Latvia"),
    Lithuania => ("LT", "Lithuania"),
    Luxembourg => ("LU", "Luxembourg"),
    Malaysia => ("MY", "Malaysia"),
    Malta => ("MT", "Malta"),
    Mexico => ("MX", "Mexico"),
    Mongolia => ("MN", "Mongolia"),
    Myanmar => ("MM", "Myanmar"),
    Nepal => ("NP", "Nepal"),
    Netherlands => ("NL", "Netherlands"),
    NewZealand => ("NZ", "New Zealand"),
    Nigeria => ("NG", "Nigeria"),
    NorthMacedonia => ("MK", "North Macedonia"),
    Norway => ("NO", "Norway"),
    Pakistan => ("PK", "Pakistan"),
    Peru => ("PE", "Peru"),
    Philippines => ("PH", "Philippines"),
    Poland => ("PL", "Poland"),
    Portugal => ("PT", "Portugal"),
    Romania => ("RO", "Romania"),
    Russia => ("RU", "Russia"),
    SaudiArabia => ("SA", "Saudi Arabia"),
    Serbia => ("RS", "Serbia"),
    Singapore => ("SG", "Singapore"),
    Slovakia => ("SK", "Slovakia"),
    Slovenia => ("SI", "Slovenia"),
    SouthAfrica => ("ZA", "South Africa"),
    SouthKorea => ("KR", "South Korea"),
    Spain => ("ES", "Spain"),
    SriLanka => ("LK", "Sri Lanka"),
    Sweden => ("SE", "Sweden"),
    Switzerland => ("CH", "Switzerland"),
    Taiwan => ("TW", "Taiwan"),
    Tanzania => ("TZ", "Tanzania"),
    Thailand => ("TH", "Thailand"),
    Turkey => ("TR", "Turkey"),
    Ukraine => ("UA", "Ukraine"),
    UnitedKingdom => ("GB", "United Kingdom"),
    UnitedStates => ("US", "United States"),
    Uzbekistan => ("UZ", "Uzbekistan"),
    Vietnam => ("VN", "Vietnam"),
}

impl Country {
    /// Exact (case-sensitive) identifier lookup.
    pub fn from_identifier(identifier: &str) -> Option<Country> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.identifier() == identifier)
    }

    /// First component of a locale string that names a country.
    ///
    /// `en-US` -> `UnitedStates`, `US` -> `UnitedStates`, `en` -> `None`.
    pub fn from_locale(locale: Option<&str>) -> Option<Country> {
        locale_split(locale)
            .into_iter()
            .find_map(Self::from_identifier)
    }
}

impl Display for Country {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Country {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s).ok_or_else(|| LocaleError::UnknownCountry(s.to_string()))
    }
}

impl TryFrom<String> for Country {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Country> for String {
    fn from(c: Country) -> Self {
        c.identifier().to_string()
    }
}

//! Card brand definitions and their prefix/length tables.

use std::fmt;

/// Payment card brands recognized by the classifier.
///
/// Each brand carries a fixed table of accepted prefixes and lengths.
/// The tables are mutually exclusive; [`crate::detect::classify_brand`]
/// relies on that when it tests brands in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardBrand {
    /// Visa - prefix 4, lengths 13, 16, 19.
    Visa,
    /// Mastercard - prefixes 51-55 and 2221-2720, length 16.
    Mastercard,
    /// American Express - prefixes 34, 37, length 15.
    Amex,
    /// Diners Club - prefixes 300-305, 309, 36, 38, 39, lengths 14, 16, 19.
    DinersClub,
    /// Discover - prefixes 6011, 622126-622925 ranges, 644-649, 65,
    /// lengths 16, 19.
    Discover,
    /// JCB - prefixes 3528-3589, lengths 15, 16.
    Jcb,
}

impl CardBrand {
    /// Brands in classification priority order. The first structural match
    /// wins; keep the prefix tables mutually exclusive when extending.
    pub const PRIORITY: [CardBrand; 6] = [
        CardBrand::Visa,
        CardBrand::Mastercard,
        CardBrand::Amex,
        CardBrand::DinersClub,
        CardBrand::Discover,
        CardBrand::Jcb,
    ];

    /// Returns the accepted number prefixes for this brand.
    pub const fn prefixes(&self) -> &'static [&'static str] {
        match self {
            Self::Visa => &["4"],
            Self::Mastercard => &[
                "51", "52", "53", "54", "55", "2221", "2222", "2223", "2224", "2225", "2226",
                "2227", "2228", "2229", "223", "224", "225", "226", "227", "228", "229", "23",
                "24", "25", "26", "27",
            ],
            Self::Amex => &["34", "37"],
            Self::DinersClub => &[
                "300", "301", "302", "303", "304", "305", "309", "36", "38", "39",
            ],
            Self::Discover => &[
                "6011", "622126", "622127", "622128", "622129", "62218", "62219", "6222", "6223",
                "6224", "6225", "6226", "6227", "6228", "62290", "62291", "622920", "622921",
                "622922", "622923", "622924", "622925", "644", "645", "646", "647", "648", "649",
                "65",
            ],
            Self::Jcb => &["3528", "3529", "353", "354", "355", "356", "357", "358"],
        }
    }

    /// Returns the accepted digit counts for this brand.
    pub const fn valid_lengths(&self) -> &'static [usize] {
        match self {
            Self::Visa => &[13, 16, 19],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::DinersClub => &[14, 16, 19],
            Self::Discover => &[16, 19],
            Self::Jcb => &[15, 16],
        }
    }

    /// Returns true if the given digit count is accepted for this brand.
    #[inline]
    pub fn is_valid_length(&self, length: usize) -> bool {
        self.valid_lengths().contains(&length)
    }

    /// Returns a human-readable name for the brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::DinersClub => "Diners Club",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

//! Color categories and icons.
//!
//! Both are closed enumerations resolved through fixed lookup tables, so the
//! data tables never carry style strings or renderable references.

use serde::Serialize;

/// A packed `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Split into `(r, g, b)` channels.
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// A color category used by cards, callouts and chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Alarm red, the dashboard's primary color.
    #[default]
    Red,
    /// Orange.
    Orange,
    /// Amber.
    Amber,
    /// Yellow.
    Yellow,
    /// Green, used for positive figures.
    Green,
    /// Blue.
    Blue,
    /// Purple.
    Purple,
    /// Neutral gray.
    Gray,
}

/// The complete style descriptor for one [`Accent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentStyle {
    /// Saturated swatch for chart series and card borders.
    pub swatch: Rgb,
    /// Foreground for emphasized values.
    pub emphasis: Rgb,
    /// Soft background for callouts.
    pub wash: Rgb,
}

const ACCENT_STYLES: [(Accent, AccentStyle); 8] = [
    (
        Accent::Red,
        AccentStyle {
            swatch: Rgb(0x00dc_2626),
            emphasis: Rgb(0x00ef_4444),
            wash: Rgb(0x007f_1d1d),
        },
    ),
    (
        Accent::Orange,
        AccentStyle {
            swatch: Rgb(0x00ea_580c),
            emphasis: Rgb(0x00f9_7316),
            wash: Rgb(0x007c_2d12),
        },
    ),
    (
        Accent::Amber,
        AccentStyle {
            swatch: Rgb(0x00d9_7706),
            emphasis: Rgb(0x00f5_9e0b),
            wash: Rgb(0x0078_350f),
        },
    ),
    (
        Accent::Yellow,
        AccentStyle {
            swatch: Rgb(0x00ca_8a04),
            emphasis: Rgb(0x00ea_b308),
            wash: Rgb(0x0071_3f12),
        },
    ),
    (
        Accent::Green,
        AccentStyle {
            swatch: Rgb(0x0016_a34a),
            emphasis: Rgb(0x0022_c55e),
            wash: Rgb(0x0014_532d),
        },
    ),
    (
        Accent::Blue,
        AccentStyle {
            swatch: Rgb(0x0025_63eb),
            emphasis: Rgb(0x003b_82f6),
            wash: Rgb(0x001e_3a8a),
        },
    ),
    (
        Accent::Purple,
        AccentStyle {
            swatch: Rgb(0x007c_3aed),
            emphasis: Rgb(0x008b_5cf6),
            wash: Rgb(0x004c_1d95),
        },
    ),
    (
        Accent::Gray,
        AccentStyle {
            swatch: Rgb(0x009c_a3af),
            emphasis: Rgb(0x00d1_d5db),
            wash: Rgb(0x0037_4151),
        },
    ),
];

impl Accent {
    /// Every accent, in table order.
    pub const ALL: [Accent; 8] = [
        Self::Red,
        Self::Orange,
        Self::Amber,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
        Self::Gray,
    ];

    /// Look up the precomputed style for this accent.
    #[must_use]
    pub const fn style(self) -> AccentStyle {
        ACCENT_STYLES[self as usize].1
    }

    /// Lowercase name of the accent.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Gray => "gray",
        }
    }
}

/// A decorative glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    /// Warning triangle.
    AlertTriangle,
    /// A group of people.
    Users,
    /// Dollar sign.
    DollarSign,
    /// Credit card.
    CreditCard,
    /// House.
    Home,
    /// Shopping cart.
    ShoppingCart,
    /// Car.
    Car,
    /// Open book.
    BookOpen,
    /// Rising trend line.
    TrendingUp,
}

const ICON_GLYPHS: [(Icon, &str); 9] = [
    (Icon::AlertTriangle, "⚠"),
    (Icon::Users, "👥"),
    (Icon::DollarSign, "$"),
    (Icon::CreditCard, "💳"),
    (Icon::Home, "⌂"),
    (Icon::ShoppingCart, "🛒"),
    (Icon::Car, "🚗"),
    (Icon::BookOpen, "📖"),
    (Icon::TrendingUp, "↗"),
];

impl Icon {
    /// Resolve the icon to the glyph drawn in the terminal.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        ICON_GLYPHS[self as usize].1
    }

    /// Snake-case name, as serialized.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AlertTriangle => "alert_triangle",
            Self::Users => "users",
            Self::DollarSign => "dollar_sign",
            Self::CreditCard => "credit_card",
            Self::Home => "home",
            Self::ShoppingCart => "shopping_cart",
            Self::Car => "car",
            Self::BookOpen => "book_open",
            Self::TrendingUp => "trending_up",
        }
    }
}

#![no_std]
#![deny(warnings)]

//! HID keycode tables for the Apple Magic Keyboard.
//!
//! Five independent maps (special, modifier, state, shifted, standard) keyed
//! by a report byte. A report decoder picks the map from the byte's position
//! in the report and looks the byte up there. Maps are never merged: the same
//! byte can mean different keys in different maps.

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod dump;
pub mod hid_keycodes;
pub mod keymap;

use core::fmt;
use core::str::FromStr;

use crate::hid_keycodes as KC;
pub use crate::keymap::{
    KeyEntry, MODIFIER_KEY_MAP, MODIFIER_KEY_MAP_SIZE, NO_ASCII, SHIFTED_KEY_MAP,
    SHIFTED_KEY_MAP_SIZE, SPECIAL_KEY_MAP, SPECIAL_KEY_MAP_SIZE, STANDARD_KEY_MAP,
    STANDARD_KEY_MAP_SIZE, STATE_KEY_MAP, STATE_KEY_MAP_SIZE,
};
use KC::Kc;

/// Which map a report byte is looked up in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    /// Vendor byte at the end of the report.
    Special,
    Modifier,
    /// Lock keys.
    State,
    Shifted,
    Standard,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Special,
        Category::Modifier,
        Category::State,
        Category::Shifted,
        Category::Standard,
    ];

    pub fn name(&self) -> &'static str {
        match *self {
            Category::Special => "special",
            Category::Modifier => "modifier",
            Category::State => "state",
            Category::Shifted => "shifted",
            Category::Standard => "standard",
        }
    }

    pub fn entries(&self) -> &'static [KeyEntry] {
        match *self {
            Category::Special => &SPECIAL_KEY_MAP,
            Category::Modifier => &MODIFIER_KEY_MAP,
            Category::State => &STATE_KEY_MAP,
            Category::Shifted => &SHIFTED_KEY_MAP,
            Category::Standard => &STANDARD_KEY_MAP,
        }
    }

    pub fn lookup(&self, code: Kc) -> Option<&'static KeyEntry> {
        lookup(*self, code)
    }
}

/// Returned when a category name is not one of `Category::name()`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UnknownCategory;

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown key category")
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Category, UnknownCategory> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownCategory)
    }
}

pub fn entries(category: Category) -> &'static [KeyEntry] {
    category.entries()
}

pub fn len(category: Category) -> usize {
    category.entries().len()
}

/// First entry of `category` whose code is `code`.
///
/// `None` is an ordinary answer: the maps do not cover every usage.
pub fn lookup(category: Category, code: Kc) -> Option<&'static KeyEntry> {
    category.entries().iter().find(|e| e.hex_code == code)
}

pub fn lookup_special(code: Kc) -> Option<&'static KeyEntry> {
    lookup(Category::Special, code)
}

pub fn lookup_modifier(code: Kc) -> Option<&'static KeyEntry> {
    lookup(Category::Modifier, code)
}

pub fn lookup_state(code: Kc) -> Option<&'static KeyEntry> {
    lookup(Category::State, code)
}

pub fn lookup_shifted(code: Kc) -> Option<&'static KeyEntry> {
    lookup(Category::Shifted, code)
}

pub fn lookup_standard(code: Kc) -> Option<&'static KeyEntry> {
    lookup(Category::Standard, code)
}

/// Every category that maps `code`, in `Category::ALL` order.
pub fn categories_of(code: Kc) -> impl Iterator<Item = Category> {
    IntoIterator::into_iter(Category::ALL).filter(move |c| c.lookup(code).is_some())
}

/// Reverse lookup by exact description, scoped to one category.
pub fn find_by_description(category: Category, description: &str) -> Option<&'static KeyEntry> {
    category
        .entries()
        .iter()
        .find(|e| e.description == description)
}

/// Modifier map entries for each bit set in a report's modifier byte.
pub fn modifier_entries(modifier_byte: u8) -> impl Iterator<Item = &'static KeyEntry> {
    (0..8u8).filter_map(move |bit| {
        let mask = 1u8 << bit;
        if modifier_byte & mask == 0 {
            return None;
        }
        KC::modifier_usage(mask).and_then(lookup_modifier)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn test_lookup_shifted_and_standard() {
        assert_eq!(lookup_shifted(KC::KBD_A).map(|e| e.description), Some("A"));
        assert_eq!(lookup_standard(KC::KBD_A).map(|e| e.description), Some("a"));
        assert_eq!(lookup_shifted(KC::KBD_A).and_then(|e| e.ascii), Some(b'A'));
        assert_eq!(lookup_standard(KC::KBD_A).and_then(|e| e.ascii), Some(b'a'));
    }

    #[test]
    fn test_lookup_alternate_erase() {
        let e = lookup_standard(0x99).unwrap();
        assert_eq!(e.description, "AlternateErase");
        assert_eq!(e.ascii, None);
    }

    #[test]
    fn test_lookup_miss() {
        for c in Category::ALL.iter() {
            assert_eq!(c.lookup(0xFF), None);
        }
        assert_eq!(categories_of(0xFF).count(), 0);
        // 0x00 is "no key" in a report and is never mapped.
        assert_eq!(categories_of(KC::KBD_NONE).count(), 0);
    }

    #[test]
    fn test_overlapping_codes_stay_scoped() {
        assert_eq!(lookup_special(0x01).unwrap().description, "Power Button");
        assert_eq!(lookup_standard(0x01).unwrap().description, "ErrorRollOver");
        assert_eq!(lookup_special(0x02).unwrap().description, "Siri Button");
        assert_eq!(lookup_standard(0x02).unwrap().description, "POSTFail");
        assert_eq!(
            categories_of(0x01).collect::<Vec<_>>(),
            vec![Category::Special, Category::Standard]
        );
        assert_eq!(
            categories_of(0x04).collect::<Vec<_>>(),
            vec![Category::Special, Category::Shifted, Category::Standard]
        );
        assert_eq!(
            categories_of(KC::KBD_LEFT_UI).collect::<Vec<_>>(),
            vec![Category::Modifier]
        );
    }

    #[test]
    fn test_len() {
        assert_eq!(len(Category::Special), 3);
        assert_eq!(len(Category::Modifier), 8);
        assert_eq!(len(Category::State), 6);
        assert_eq!(len(Category::Shifted), 47);
        assert_eq!(len(Category::Standard), 154);
        assert_eq!(entries(Category::State)[0].description, "Caps Lock");
    }

    #[test]
    fn test_codes_unique_within_category() {
        for c in Category::ALL.iter() {
            let codes: Vec<Kc> = c.entries().iter().map(|e| e.hex_code).collect();
            for (i, code) in codes.iter().enumerate() {
                assert!(
                    !codes[i + 1..].contains(code),
                    "{} map repeats 0x{:02X}",
                    c.name(),
                    code
                );
            }
        }
    }

    #[test]
    fn test_single_char_descriptions_match_ascii() {
        for c in Category::ALL.iter() {
            for e in c.entries() {
                let mut chars = e.description.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    assert_eq!(e.as_char(), Some(ch), "{:?}", e);
                }
            }
        }
    }

    #[test]
    fn test_digit_descriptions_match_ascii() {
        for e in STANDARD_KEY_MAP.iter() {
            if e.description.starts_with(|c: char| c.is_ascii_digit()) {
                let digit = e.description.as_bytes()[0];
                assert_eq!(e.ascii, Some(digit), "{:?}", e);
            }
        }
    }

    #[test]
    fn test_non_printable_keys_have_no_ascii() {
        for c in &[Category::Special, Category::Modifier, Category::State] {
            assert!(c.entries().iter().all(|e| e.ascii.is_none()));
        }
        for n in 1..=24 {
            let name = format!("F{}", n);
            let e = find_by_description(Category::Standard, &name).unwrap();
            assert_eq!(e.ascii, None);
            assert_eq!(e.raw_ascii(), NO_ASCII);
        }
        for name in &["Arrow Up", "Home", "Delete", "Mute", "LANG1", "PrintScreen"] {
            assert_eq!(find_by_description(Category::Standard, name).unwrap().ascii, None);
        }
        // Control keys with an ASCII control code keep it.
        for (name, code) in &[("Enter", 10), ("Escape", 27), ("Backspace", 8), ("Tab", 9)] {
            let e = find_by_description(Category::Standard, name).unwrap();
            assert_eq!(e.raw_ascii(), *code);
            assert!(!e.is_printable());
        }
        // Everything else with a value is printable.
        for e in STANDARD_KEY_MAP.iter().chain(SHIFTED_KEY_MAP.iter()) {
            if e.ascii.is_some() && !e.is_printable() {
                assert!(["Enter", "Escape", "Backspace", "Tab"].contains(&e.description));
            }
        }
    }

    #[test]
    fn test_find_by_description() {
        let e = find_by_description(Category::Modifier, "Left Option").unwrap();
        assert_eq!(e.hex_code, KC::KBD_LEFT_ALT);
        assert_eq!(find_by_description(Category::Standard, "Left Option"), None);
        assert_eq!(find_by_description(Category::Shifted, "a"), None);
    }

    #[test]
    fn test_modifier_entries() {
        let names: Vec<&str> = modifier_entries(
            KC::KBD_MODIFIER_LEFT_SHIFT | KC::KBD_MODIFIER_RIGHT_UI,
        )
        .map(|e| e.description)
        .collect();
        assert_eq!(names, vec!["Left Shift", "Right Command"]);
        assert_eq!(modifier_entries(KC::KBD_MODIFIER_NONE).count(), 0);
        assert_eq!(modifier_entries(0xFF).count(), 8);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("shifted".parse::<Category>(), Ok(Category::Shifted));
        assert_eq!("Standard".parse::<Category>(), Ok(Category::Standard));
        assert_eq!("keypad".parse::<Category>(), Err(UnknownCategory));
        for c in Category::ALL.iter() {
            assert_eq!(c.name().parse::<Category>(), Ok(*c));
        }
    }
}

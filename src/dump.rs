//! Text rendering of the key maps, for checking a table against a keyboard
//! on the bench.

use core::fmt;

use crate::{Category, KeyEntry};

impl fmt::Display for KeyEntry {
    /// `0x04 'a' a`, `0x2B 0x09 Tab`, `0x3A - F1`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X} ", self.hex_code)?;
        match self.ascii {
            Some(c) if self.is_printable() => write!(f, "'{}'", char::from(c))?,
            Some(c) => write!(f, "0x{:02X}", c)?,
            None => f.write_str("-")?,
        }
        write!(f, " {}", self.description)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Header line, then one line per entry in table order.
pub fn write_category<W: fmt::Write>(w: &mut W, category: Category) -> fmt::Result {
    let entries = category.entries();
    writeln!(w, "{} ({} entries)", category, entries.len())?;
    for e in entries {
        writeln!(w, "  {}", e)?;
    }
    Ok(())
}

pub fn write_all<W: fmt::Write>(w: &mut W) -> fmt::Result {
    for c in Category::ALL.iter() {
        write_category(w, *c)?;
    }
    Ok(())
}

/// Same output over the RTT up channel. The application has to call
/// `rtt_init_print!` first; until then nothing is sent.
#[cfg(feature = "rtt")]
pub mod rtt {
    use rtt_target::rprintln;

    use crate::Category;

    pub fn print_category(category: Category) {
        rprintln!("{} ({} entries)", category, category.entries().len());
        for e in category.entries() {
            rprintln!("  {}", e);
        }
    }

    pub fn print_all() {
        for c in Category::ALL.iter() {
            print_category(*c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hid_keycodes as KC;
    use crate::{lookup_special, lookup_standard};
    use std::string::String;

    #[test]
    fn test_entry_display() {
        let a = lookup_standard(KC::KBD_A).unwrap();
        assert_eq!(format!("{}", a), "0x04 'a' a");
        let tab = lookup_standard(KC::KBD_TAB).unwrap();
        assert_eq!(format!("{}", tab), "0x2B 0x09 Tab");
        let f1 = lookup_standard(KC::KBD_F1).unwrap();
        assert_eq!(format!("{}", f1), "0x3A - F1");
        let space = lookup_standard(KC::KBD_SPACEBAR).unwrap();
        assert_eq!(format!("{}", space), "0x2C ' ' Spacebar");
        let power = lookup_special(0x01).unwrap();
        assert_eq!(format!("{}", power), "0x01 - Power Button");
    }

    #[test]
    fn test_write_category() {
        let mut out = String::new();
        write_category(&mut out, Category::Special).unwrap();
        assert_eq!(
            out,
            "special (3 entries)\n  0x04 - Fingerprint Reader\n  0x01 - Power Button\n  0x02 - Siri Button\n"
        );
    }

    #[test]
    fn test_write_all() {
        let mut out = String::new();
        write_all(&mut out).unwrap();
        let headers: std::vec::Vec<&str> = out.lines().filter(|l| !l.starts_with(' ')).collect();
        assert_eq!(
            headers,
            vec![
                "special (3 entries)",
                "modifier (8 entries)",
                "state (6 entries)",
                "shifted (47 entries)",
                "standard (154 entries)",
            ]
        );
        assert_eq!(out.lines().count(), 5 + 3 + 8 + 6 + 47 + 154);
    }
}

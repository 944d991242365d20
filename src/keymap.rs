use crate::hid_keycodes as KC;
use KC::Kc;

/// `raw_ascii()` value of a key without an ASCII character.
pub const NO_ASCII: i16 = -1;

/// One row of a key map.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEntry {
    /// Report byte this row describes.
    pub hex_code: Kc,
    /// Character produced by the key, `None` for function and state keys.
    pub ascii: Option<u8>,
    /// Human readable label.
    pub description: &'static str,
}

impl KeyEntry {
    pub const fn new(hex_code: Kc, ascii: Option<u8>, description: &'static str) -> KeyEntry {
        KeyEntry {
            hex_code,
            ascii,
            description,
        }
    }

    /// ASCII value with `NO_ASCII` standing in for `None`.
    pub const fn raw_ascii(&self) -> i16 {
        match self.ascii {
            Some(c) => c as i16,
            None => NO_ASCII,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        self.ascii.map(char::from)
    }

    /// Graphic character or space. Control codes (enter, tab, ...) are not printable.
    pub fn is_printable(&self) -> bool {
        match self.ascii {
            Some(c) => c == b' ' || c.is_ascii_graphic(),
            None => false,
        }
    }
}

const fn e(kc: Kc, ascii: u8, description: &'static str) -> KeyEntry {
    KeyEntry::new(kc, Some(ascii), description)
}

const fn n(kc: Kc, description: &'static str) -> KeyEntry {
    KeyEntry::new(kc, None, description)
}

pub const SPECIAL_KEY_MAP_SIZE: usize = 3;
pub const MODIFIER_KEY_MAP_SIZE: usize = 8;
pub const STATE_KEY_MAP_SIZE: usize = 6;
pub const SHIFTED_KEY_MAP_SIZE: usize = 47;
pub const STANDARD_KEY_MAP_SIZE: usize = 154;

const ESC: u8 = 0x1B;
const BS: u8 = 0x08;

/// Vendor byte at the end of the Magic Keyboard report.
pub static SPECIAL_KEY_MAP: [KeyEntry; SPECIAL_KEY_MAP_SIZE] = [
    n(KC::MAGIC_FINGERPRINT_READER, "Fingerprint Reader"),
    n(KC::MAGIC_POWER_BUTTON, "Power Button"),
    n(KC::MAGIC_SIRI_BUTTON, "Siri Button"),
];

/// Modifier usages, named after the Apple legends.
pub static MODIFIER_KEY_MAP: [KeyEntry; MODIFIER_KEY_MAP_SIZE] = [
    n(KC::KBD_LEFT_CTRL, "Left Control"),
    n(KC::KBD_LEFT_SHIFT, "Left Shift"),
    n(KC::KBD_LEFT_ALT, "Left Option"),
    n(KC::KBD_LEFT_UI, "Left Command"),
    n(KC::KBD_RIGHT_CTRL, "Right Control"),
    n(KC::KBD_RIGHT_SHIFT, "Right Shift"),
    n(KC::KBD_RIGHT_ALT, "Right Option"),
    n(KC::KBD_RIGHT_UI, "Right Command"),
];

/// Lock keys.
pub static STATE_KEY_MAP: [KeyEntry; STATE_KEY_MAP_SIZE] = [
    n(KC::KBD_CAPS_LOCK, "Caps Lock"),
    n(KC::KBD_SCROLL_LOCK, "Scroll Lock"),
    n(KC::KBD_KEYPAD_NUM_LOCK, "Num Lock"),
    n(KC::KBD_LOCKING_CAPS_LOCK, "Locking Caps Lock"),
    n(KC::KBD_LOCKING_NUM_LOCK, "Locking Num Lock"),
    n(KC::KBD_LOCKING_SCROLL_LOCK, "Locking Scroll Lock"),
];

/// Characters produced while shift is held.
pub static SHIFTED_KEY_MAP: [KeyEntry; SHIFTED_KEY_MAP_SIZE] = [
    // Top row
    e(KC::KBD_1, b'!', "!"),
    e(KC::KBD_2, b'@', "@"),
    e(KC::KBD_3, b'#', "#"),
    e(KC::KBD_4, b'$', "$"),
    e(KC::KBD_5, b'%', "%"),
    e(KC::KBD_6, b'^', "^"),
    e(KC::KBD_7, b'&', "&"),
    e(KC::KBD_8, b'*', "*"),
    e(KC::KBD_9, b'(', "("),
    e(KC::KBD_0, b')', ")"),
    // Symbols
    e(KC::KBD_HYPHEN, b'_', "_"),
    e(KC::KBD_EQUAL, b'+', "+"),
    e(KC::KBD_OPEN_BRACKET, b'{', "{"),
    e(KC::KBD_CLOSE_BRACKET, b'}', "}"),
    e(KC::KBD_BACKSLASH, b'|', "|"),
    e(KC::KBD_SEMICOLON, b':', ":"),
    e(KC::KBD_QUOTE, b'"', "\""),
    e(KC::KBD_GRAVE, b'~', "~"),
    e(KC::KBD_COMMA, b'<', "<"),
    e(KC::KBD_DOT, b'>', ">"),
    e(KC::KBD_SLASH, b'?', "?"),
    // Letters
    e(KC::KBD_A, b'A', "A"),
    e(KC::KBD_B, b'B', "B"),
    e(KC::KBD_C, b'C', "C"),
    e(KC::KBD_D, b'D', "D"),
    e(KC::KBD_E, b'E', "E"),
    e(KC::KBD_F, b'F', "F"),
    e(KC::KBD_G, b'G', "G"),
    e(KC::KBD_H, b'H', "H"),
    e(KC::KBD_I, b'I', "I"),
    e(KC::KBD_J, b'J', "J"),
    e(KC::KBD_K, b'K', "K"),
    e(KC::KBD_L, b'L', "L"),
    e(KC::KBD_M, b'M', "M"),
    e(KC::KBD_N, b'N', "N"),
    e(KC::KBD_O, b'O', "O"),
    e(KC::KBD_P, b'P', "P"),
    e(KC::KBD_Q, b'Q', "Q"),
    e(KC::KBD_R, b'R', "R"),
    e(KC::KBD_S, b'S', "S"),
    e(KC::KBD_T, b'T', "T"),
    e(KC::KBD_U, b'U', "U"),
    e(KC::KBD_V, b'V', "V"),
    e(KC::KBD_W, b'W', "W"),
    e(KC::KBD_X, b'X', "X"),
    e(KC::KBD_Y, b'Y', "Y"),
    e(KC::KBD_Z, b'Z', "Z"),
];

/// Unmodified keys.
pub static STANDARD_KEY_MAP: [KeyEntry; STANDARD_KEY_MAP_SIZE] = [
    // Letters
    e(KC::KBD_A, b'a', "a"),
    e(KC::KBD_B, b'b', "b"),
    e(KC::KBD_C, b'c', "c"),
    e(KC::KBD_D, b'd', "d"),
    e(KC::KBD_E, b'e', "e"),
    e(KC::KBD_F, b'f', "f"),
    e(KC::KBD_G, b'g', "g"),
    e(KC::KBD_H, b'h', "h"),
    e(KC::KBD_I, b'i', "i"),
    e(KC::KBD_J, b'j', "j"),
    e(KC::KBD_K, b'k', "k"),
    e(KC::KBD_L, b'l', "l"),
    e(KC::KBD_M, b'm', "m"),
    e(KC::KBD_N, b'n', "n"),
    e(KC::KBD_O, b'o', "o"),
    e(KC::KBD_P, b'p', "p"),
    e(KC::KBD_Q, b'q', "q"),
    e(KC::KBD_R, b'r', "r"),
    e(KC::KBD_S, b's', "s"),
    e(KC::KBD_T, b't', "t"),
    e(KC::KBD_U, b'u', "u"),
    e(KC::KBD_V, b'v', "v"),
    e(KC::KBD_W, b'w', "w"),
    e(KC::KBD_X, b'x', "x"),
    e(KC::KBD_Y, b'y', "y"),
    e(KC::KBD_Z, b'z', "z"),
    // Top row
    e(KC::KBD_1, b'1', "1 (Top Row)"),
    e(KC::KBD_2, b'2', "2 (Top Row)"),
    e(KC::KBD_3, b'3', "3 (Top Row)"),
    e(KC::KBD_4, b'4', "4 (Top Row)"),
    e(KC::KBD_5, b'5', "5 (Top Row)"),
    e(KC::KBD_6, b'6', "6 (Top Row)"),
    e(KC::KBD_7, b'7', "7 (Top Row)"),
    e(KC::KBD_8, b'8', "8 (Top Row)"),
    e(KC::KBD_9, b'9', "9 (Top Row)"),
    e(KC::KBD_0, b'0', "0 (Top Row)"),
    // Keypad
    e(KC::KBD_KEYPAD_0, b'0', "0 (Numpad)"),
    e(KC::KBD_KEYPAD_1, b'1', "1 (Numpad)"),
    e(KC::KBD_KEYPAD_2, b'2', "2 (Numpad)"),
    e(KC::KBD_KEYPAD_3, b'3', "3 (Numpad)"),
    e(KC::KBD_KEYPAD_4, b'4', "4 (Numpad)"),
    e(KC::KBD_KEYPAD_5, b'5', "5 (Numpad)"),
    e(KC::KBD_KEYPAD_6, b'6', "6 (Numpad)"),
    e(KC::KBD_KEYPAD_7, b'7', "7 (Numpad)"),
    e(KC::KBD_KEYPAD_8, b'8', "8 (Numpad)"),
    e(KC::KBD_KEYPAD_9, b'9', "9 (Numpad)"),
    n(KC::KBD_KEYPAD_ENTER, "Enter (Numpad)"),
    e(KC::KBD_KEYPAD_DIVIDE, b'/', "Divide (Numpad)"),
    e(KC::KBD_KEYPAD_MULTIPLY, b'*', "Multiply (Numpad)"),
    e(KC::KBD_KEYPAD_MINUS, b'-', "Subtract (Numpad)"),
    e(KC::KBD_KEYPAD_PLUS, b'+', "Add (Numpad)"),
    e(KC::KBD_KEYPAD_DOT, b'.', "Decimal (Numpad)"),
    e(KC::KBD_KEYPAD_EQUAL, b'=', "Equal (Numpad)"),
    // Symbols
    e(KC::KBD_HYPHEN, b'-', "Hyphen"),
    e(KC::KBD_EQUAL, b'=', "EqualSign"),
    e(KC::KBD_OPEN_BRACKET, b'[', "OpenBracket"),
    e(KC::KBD_CLOSE_BRACKET, b']', "CloseBracket"),
    e(KC::KBD_BACKSLASH, b'\\', "Backslash"),
    e(KC::KBD_SEMICOLON, b';', "Semicolon"),
    e(KC::KBD_QUOTE, b'\'', "Quote"),
    e(KC::KBD_GRAVE, b'`', "GraveAccentAndTilde"),
    e(KC::KBD_COMMA, b',', "Comma"),
    e(KC::KBD_DOT, b'.', "Period"),
    e(KC::KBD_SLASH, b'/', "Slash"),
    n(KC::KBD_NON_US_POUND, "NonUSPound"),
    n(KC::KBD_NON_US_BACKSLASH, "NonUSBackslash"),
    // Editing and navigation
    e(KC::KBD_SPACEBAR, b' ', "Spacebar"),
    e(KC::KBD_ENTER, b'\n', "Enter"),
    e(KC::KBD_ESCAPE, ESC, "Escape"),
    e(KC::KBD_BACKSPACE, BS, "Backspace"),
    e(KC::KBD_TAB, b'\t', "Tab"),
    n(KC::KBD_DELETE, "Delete"),
    n(KC::KBD_UP, "Arrow Up"),
    n(KC::KBD_DOWN, "Arrow Down"),
    n(KC::KBD_LEFT, "Arrow Left"),
    n(KC::KBD_RIGHT, "Arrow Right"),
    n(KC::KBD_HOME, "Home"),
    n(KC::KBD_PAGEUP, "PageUp"),
    n(KC::KBD_END, "End"),
    n(KC::KBD_PAGEDOWN, "PageDown"),
    n(KC::KBD_INSERT, "Insert"),
    // Function keys
    n(KC::KBD_F1, "F1"),
    n(KC::KBD_F2, "F2"),
    n(KC::KBD_F3, "F3"),
    n(KC::KBD_F4, "F4"),
    n(KC::KBD_F5, "F5"),
    n(KC::KBD_F6, "F6"),
    n(KC::KBD_F7, "F7"),
    n(KC::KBD_F8, "F8"),
    n(KC::KBD_F9, "F9"),
    n(KC::KBD_F10, "F10"),
    n(KC::KBD_F11, "F11"),
    n(KC::KBD_F12, "F12"),
    n(KC::KBD_F13, "F13"),
    n(KC::KBD_F14, "F14"),
    n(KC::KBD_F15, "F15"),
    n(KC::KBD_F16, "F16"),
    n(KC::KBD_F17, "F17"),
    n(KC::KBD_F18, "F18"),
    n(KC::KBD_F19, "F19"),
    n(KC::KBD_F20, "F20"),
    n(KC::KBD_F21, "F21"),
    n(KC::KBD_F22, "F22"),
    n(KC::KBD_F23, "F23"),
    n(KC::KBD_F24, "F24"),
    // Media
    n(KC::KBD_PAUSE, "Pause"),
    n(KC::KBD_STOP, "Stop"),
    n(KC::KBD_MUTE, "Mute"),
    n(KC::KBD_VOLUME_UP, "VolumeUp"),
    n(KC::KBD_VOLUME_DOWN, "VolumeDown"),
    // Input method
    n(KC::KBD_LANG_1, "LANG1"),
    n(KC::KBD_LANG_2, "LANG2"),
    n(KC::KBD_LANG_3, "LANG3"),
    n(KC::KBD_LANG_4, "LANG4"),
    n(KC::KBD_LANG_5, "LANG5"),
    n(KC::KBD_LANG_6, "LANG6"),
    n(KC::KBD_LANG_7, "LANG7"),
    n(KC::KBD_LANG_8, "LANG8"),
    n(KC::KBD_LANG_9, "LANG9"),
    // International
    n(KC::KBD_INTERNATIONAL_1, "International1"),
    n(KC::KBD_INTERNATIONAL_2, "International2"),
    n(KC::KBD_INTERNATIONAL_3, "International3"),
    n(KC::KBD_INTERNATIONAL_4, "International4"),
    n(KC::KBD_INTERNATIONAL_5, "International5"),
    n(KC::KBD_INTERNATIONAL_6, "International6"),
    n(KC::KBD_INTERNATIONAL_7, "International7"),
    n(KC::KBD_INTERNATIONAL_8, "International8"),
    n(KC::KBD_INTERNATIONAL_9, "International9"),
    // System
    n(KC::KBD_ERROR_ROLL_OVER, "ErrorRollOver"),
    n(KC::KBD_ERROR_UNDEFINED, "ErrorUndefined"),
    n(KC::KBD_AGAIN, "Again"),
    n(KC::KBD_ALTERNATE_ERASE, "AlternateErase"),
    n(KC::KBD_APPLICATION, "Application"),
    n(KC::KBD_CANCEL, "Cancel"),
    n(KC::KBD_CLEAR, "Clear"),
    n(KC::KBD_CLEAR_AGAIN, "ClearOrAgain"),
    n(KC::KBD_COPY, "Copy"),
    n(KC::KBD_CRSEL, "CrSelOrProps"),
    n(KC::KBD_CUT, "Cut"),
    n(KC::KBD_EXSEL, "ExSel"),
    n(KC::KBD_EXECUTE, "Execute"),
    n(KC::KBD_FIND, "Find"),
    n(KC::KBD_HELP, "Help"),
    n(KC::KBD_MENU, "Menu"),
    n(KC::KBD_OPER, "Oper"),
    n(KC::KBD_OUT, "Out"),
    n(KC::KBD_POST_FAIL, "POSTFail"),
    n(KC::KBD_PASTE, "Paste"),
    n(KC::KBD_POWER, "Power"),
    n(KC::KBD_PRINTSCREEN, "PrintScreen"),
    n(KC::KBD_PRIOR, "Prior"),
    n(KC::KBD_SELECT, "Select"),
    n(KC::KBD_SYSREQ, "SysReqOrAttention"),
    n(KC::KBD_UNDO, "Undo"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_ascii() {
        assert_eq!(e(KC::KBD_A, b'a', "a").raw_ascii(), 0x61);
        assert_eq!(n(KC::KBD_F1, "F1").raw_ascii(), NO_ASCII);
        assert_eq!(e(KC::KBD_ESCAPE, ESC, "Escape").raw_ascii(), 27);
    }

    #[test]
    fn test_is_printable() {
        assert!(e(KC::KBD_SPACEBAR, b' ', "Spacebar").is_printable());
        assert!(e(KC::KBD_GRAVE, b'~', "~").is_printable());
        assert!(!e(KC::KBD_TAB, b'\t', "Tab").is_printable());
        assert!(!e(KC::KBD_BACKSPACE, BS, "Backspace").is_printable());
        assert!(!n(KC::KBD_HOME, "Home").is_printable());
    }

    #[test]
    fn test_as_char() {
        assert_eq!(SHIFTED_KEY_MAP[0].as_char(), Some('!'));
        assert_eq!(MODIFIER_KEY_MAP[0].as_char(), None);
    }
}

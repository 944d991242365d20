//! Usage IDs of the HID keyboard/keypad page (0x07).
//!
//! Only the usages referenced by the keymap are named here.

/// See `hid_keycodes` for mapping.
pub type Kc = u8;

pub const KBD_NONE: Kc = 0x00;
pub const KBD_ERROR_ROLL_OVER: Kc = 0x01;
pub const KBD_POST_FAIL: Kc = 0x02;
pub const KBD_ERROR_UNDEFINED: Kc = 0x03;

pub const KBD_A: Kc = 0x04;
pub const KBD_B: Kc = 0x05;
pub const KBD_C: Kc = 0x06;
pub const KBD_D: Kc = 0x07;
pub const KBD_E: Kc = 0x08;
pub const KBD_F: Kc = 0x09;
pub const KBD_G: Kc = 0x0A;
pub const KBD_H: Kc = 0x0B;
pub const KBD_I: Kc = 0x0C;
pub const KBD_J: Kc = 0x0D;
pub const KBD_K: Kc = 0x0E;
pub const KBD_L: Kc = 0x0F;
pub const KBD_M: Kc = 0x10;
pub const KBD_N: Kc = 0x11;
pub const KBD_O: Kc = 0x12;
pub const KBD_P: Kc = 0x13;
pub const KBD_Q: Kc = 0x14;
pub const KBD_R: Kc = 0x15;
pub const KBD_S: Kc = 0x16;
pub const KBD_T: Kc = 0x17;
pub const KBD_U: Kc = 0x18;
pub const KBD_V: Kc = 0x19;
pub const KBD_W: Kc = 0x1A;
pub const KBD_X: Kc = 0x1B;
pub const KBD_Y: Kc = 0x1C;
pub const KBD_Z: Kc = 0x1D;

pub const KBD_1: Kc = 0x1E;
pub const KBD_2: Kc = 0x1F;
pub const KBD_3: Kc = 0x20;
pub const KBD_4: Kc = 0x21;
pub const KBD_5: Kc = 0x22;
pub const KBD_6: Kc = 0x23;
pub const KBD_7: Kc = 0x24;
pub const KBD_8: Kc = 0x25;
pub const KBD_9: Kc = 0x26;
pub const KBD_0: Kc = 0x27;

pub const KBD_ENTER: Kc = 0x28;
pub const KBD_ESCAPE: Kc = 0x29;
pub const KBD_BACKSPACE: Kc = 0x2A;
pub const KBD_TAB: Kc = 0x2B;
pub const KBD_SPACEBAR: Kc = 0x2C;
pub const KBD_HYPHEN: Kc = 0x2D; // - / _
pub const KBD_EQUAL: Kc = 0x2E; // = / +
pub const KBD_OPEN_BRACKET: Kc = 0x2F; // [ / {
pub const KBD_CLOSE_BRACKET: Kc = 0x30; // ] / }
pub const KBD_BACKSLASH: Kc = 0x31; // \ / |
pub const KBD_NON_US_POUND: Kc = 0x32;
pub const KBD_SEMICOLON: Kc = 0x33; // ; / :
pub const KBD_QUOTE: Kc = 0x34; // ' / "
pub const KBD_GRAVE: Kc = 0x35; // ` / ~
pub const KBD_COMMA: Kc = 0x36; // , / <
pub const KBD_DOT: Kc = 0x37; // . / >
pub const KBD_SLASH: Kc = 0x38; // / / ?
pub const KBD_CAPS_LOCK: Kc = 0x39;

pub const KBD_F1: Kc = 0x3A;
pub const KBD_F2: Kc = 0x3B;
pub const KBD_F3: Kc = 0x3C;
pub const KBD_F4: Kc = 0x3D;
pub const KBD_F5: Kc = 0x3E;
pub const KBD_F6: Kc = 0x3F;
pub const KBD_F7: Kc = 0x40;
pub const KBD_F8: Kc = 0x41;
pub const KBD_F9: Kc = 0x42;
pub const KBD_F10: Kc = 0x43;
pub const KBD_F11: Kc = 0x44;
pub const KBD_F12: Kc = 0x45;

pub const KBD_PRINTSCREEN: Kc = 0x46;
pub const KBD_SCROLL_LOCK: Kc = 0x47;
pub const KBD_PAUSE: Kc = 0x48;
pub const KBD_INSERT: Kc = 0x49;
pub const KBD_HOME: Kc = 0x4A;
pub const KBD_PAGEUP: Kc = 0x4B;
pub const KBD_DELETE: Kc = 0x4C;
pub const KBD_END: Kc = 0x4D;
pub const KBD_PAGEDOWN: Kc = 0x4E;
pub const KBD_RIGHT: Kc = 0x4F;
pub const KBD_LEFT: Kc = 0x50;
pub const KBD_DOWN: Kc = 0x51;
pub const KBD_UP: Kc = 0x52;

pub const KBD_KEYPAD_NUM_LOCK: Kc = 0x53;
pub const KBD_KEYPAD_DIVIDE: Kc = 0x54;
pub const KBD_KEYPAD_MULTIPLY: Kc = 0x55;
pub const KBD_KEYPAD_MINUS: Kc = 0x56;
pub const KBD_KEYPAD_PLUS: Kc = 0x57;
pub const KBD_KEYPAD_ENTER: Kc = 0x58;
pub const KBD_KEYPAD_1: Kc = 0x59;
pub const KBD_KEYPAD_2: Kc = 0x5A;
pub const KBD_KEYPAD_3: Kc = 0x5B;
pub const KBD_KEYPAD_4: Kc = 0x5C;
pub const KBD_KEYPAD_5: Kc = 0x5D;
pub const KBD_KEYPAD_6: Kc = 0x5E;
pub const KBD_KEYPAD_7: Kc = 0x5F;
pub const KBD_KEYPAD_8: Kc = 0x60;
pub const KBD_KEYPAD_9: Kc = 0x61;
pub const KBD_KEYPAD_0: Kc = 0x62;
pub const KBD_KEYPAD_DOT: Kc = 0x63;
pub const KBD_NON_US_BACKSLASH: Kc = 0x64;
pub const KBD_APPLICATION: Kc = 0x65;
pub const KBD_POWER: Kc = 0x66;
pub const KBD_KEYPAD_EQUAL: Kc = 0x67;

pub const KBD_F13: Kc = 0x68;
pub const KBD_F14: Kc = 0x69;
pub const KBD_F15: Kc = 0x6A;
pub const KBD_F16: Kc = 0x6B;
pub const KBD_F17: Kc = 0x6C;
pub const KBD_F18: Kc = 0x6D;
pub const KBD_F19: Kc = 0x6E;
pub const KBD_F20: Kc = 0x6F;
pub const KBD_F21: Kc = 0x70;
pub const KBD_F22: Kc = 0x71;
pub const KBD_F23: Kc = 0x72;
pub const KBD_F24: Kc = 0x73;

pub const KBD_EXECUTE: Kc = 0x74;
pub const KBD_HELP: Kc = 0x75;
pub const KBD_MENU: Kc = 0x76;
pub const KBD_SELECT: Kc = 0x77;
pub const KBD_STOP: Kc = 0x78;
pub const KBD_AGAIN: Kc = 0x79;
pub const KBD_UNDO: Kc = 0x7A;
pub const KBD_CUT: Kc = 0x7B;
pub const KBD_COPY: Kc = 0x7C;
pub const KBD_PASTE: Kc = 0x7D;
pub const KBD_FIND: Kc = 0x7E;
pub const KBD_MUTE: Kc = 0x7F;
pub const KBD_VOLUME_UP: Kc = 0x80;
pub const KBD_VOLUME_DOWN: Kc = 0x81;
pub const KBD_LOCKING_CAPS_LOCK: Kc = 0x82;
pub const KBD_LOCKING_NUM_LOCK: Kc = 0x83;
pub const KBD_LOCKING_SCROLL_LOCK: Kc = 0x84;

pub const KBD_INTERNATIONAL_1: Kc = 0x87; // JP \ / _
pub const KBD_INTERNATIONAL_2: Kc = 0x88; // JP katakana/hiragana
pub const KBD_INTERNATIONAL_3: Kc = 0x89; // JP yen
pub const KBD_INTERNATIONAL_4: Kc = 0x8A; // JP henkan
pub const KBD_INTERNATIONAL_5: Kc = 0x8B; // JP muhenkan
pub const KBD_INTERNATIONAL_6: Kc = 0x8C;
pub const KBD_INTERNATIONAL_7: Kc = 0x8D;
pub const KBD_INTERNATIONAL_8: Kc = 0x8E;
pub const KBD_INTERNATIONAL_9: Kc = 0x8F;

pub const KBD_LANG_1: Kc = 0x90; // kana on Apple keyboards
pub const KBD_LANG_2: Kc = 0x91; // eisu on Apple keyboards
pub const KBD_LANG_3: Kc = 0x92;
pub const KBD_LANG_4: Kc = 0x93;
pub const KBD_LANG_5: Kc = 0x94;
pub const KBD_LANG_6: Kc = 0x95;
pub const KBD_LANG_7: Kc = 0x96;
pub const KBD_LANG_8: Kc = 0x97;
pub const KBD_LANG_9: Kc = 0x98;

pub const KBD_ALTERNATE_ERASE: Kc = 0x99;
pub const KBD_SYSREQ: Kc = 0x9A;
pub const KBD_CANCEL: Kc = 0x9B;
pub const KBD_CLEAR: Kc = 0x9C;
pub const KBD_PRIOR: Kc = 0x9D;
pub const KBD_OUT: Kc = 0xA0;
pub const KBD_OPER: Kc = 0xA1;
pub const KBD_CLEAR_AGAIN: Kc = 0xA2;
pub const KBD_CRSEL: Kc = 0xA3;
pub const KBD_EXSEL: Kc = 0xA4;

pub const KBD_LEFT_CTRL: Kc = 0xE0;
pub const KBD_LEFT_SHIFT: Kc = 0xE1;
pub const KBD_LEFT_ALT: Kc = 0xE2; // option
pub const KBD_LEFT_UI: Kc = 0xE3; // command
pub const KBD_RIGHT_CTRL: Kc = 0xE4;
pub const KBD_RIGHT_SHIFT: Kc = 0xE5;
pub const KBD_RIGHT_ALT: Kc = 0xE6;
pub const KBD_RIGHT_UI: Kc = 0xE7;

// Bits of the modifier byte (report byte 0).
pub const KBD_MODIFIER_NONE: u8 = 0x00;
pub const KBD_MODIFIER_LEFT_CTRL: u8 = 0x01;
pub const KBD_MODIFIER_LEFT_SHIFT: u8 = 0x02;
pub const KBD_MODIFIER_LEFT_ALT: u8 = 0x04;
pub const KBD_MODIFIER_LEFT_UI: u8 = 0x08;
pub const KBD_MODIFIER_RIGHT_CTRL: u8 = 0x10;
pub const KBD_MODIFIER_RIGHT_SHIFT: u8 = 0x20;
pub const KBD_MODIFIER_RIGHT_ALT: u8 = 0x40;
pub const KBD_MODIFIER_RIGHT_UI: u8 = 0x80;

// Vendor bytes of the special-key report (not keyboard-page usages).
pub const MAGIC_POWER_BUTTON: u8 = 0x01;
pub const MAGIC_SIRI_BUTTON: u8 = 0x02;
pub const MAGIC_FINGERPRINT_READER: u8 = 0x04;

/// Modifier usage (0xE0..=0xE7) for a bit of the modifier byte.
///
/// Returns `None` unless exactly one bit is set.
pub const fn modifier_usage(bit: u8) -> Option<Kc> {
    if bit.count_ones() != 1 {
        return None;
    }
    Some(KBD_LEFT_CTRL + bit.trailing_zeros() as u8)
}

/// Inverse of `modifier_usage`.
pub const fn modifier_bit(kc: Kc) -> Option<u8> {
    if kc < KBD_LEFT_CTRL || kc > KBD_RIGHT_UI {
        return None;
    }
    Some(1 << (kc - KBD_LEFT_CTRL))
}

const MASK_READ: u8 = 1;
const MASK_WRITE: u8 = 2;

/// Decoded form of an fopen-style mode string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Invalid,
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

// 'r' and 'w' each set a bit in the mask; every other character is
// ignored so that future flag characters can extend the mask without
// breaking existing callers.
pub fn decode_open_mode(mode: &str) -> OpenMode {
    let mut mask = 0u8;
    for c in mode.chars() {
        match c {
            'r' => mask |= MASK_READ,
            'w' => mask |= MASK_WRITE,
            _ => {}
        }
    }

    match mask {
        MASK_READ => OpenMode::ReadOnly,
        MASK_WRITE => OpenMode::WriteOnly,
        m if m == MASK_READ | MASK_WRITE => OpenMode::ReadWrite,
        _ => OpenMode::Invalid,
    }
}

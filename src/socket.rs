//! Bit-packed directional edge signature.
//!
//! A [`Socket`] holds up to [`Socket::MAX_FIELDS`] small (0–7) integer codes
//! in a single 32-bit word, three bits per field. Two tiles fit across an
//! edge when one side's socket sequence equals the reverse of the other's —
//! [`Socket::reverse`] is the transform that aligns them for an equality
//! test.

/// Maximum number of 3-bit fields a [`Socket`] can hold.
pub const MAX_FIELDS: usize = 8;

/// A bit-packed sequence of up to [`MAX_FIELDS`] socket codes (0–7 each),
/// three bits per field, field `i` at bits `[3i, 3i+3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Socket(u32);

impl Socket {
    /// The all-zero socket word.
    pub const EMPTY: Socket = Socket(0);

    /// Wrap a raw packed word.
    pub const fn from_raw(word: u32) -> Self {
        Self(word)
    }

    /// The raw packed word.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Build a socket from up to [`MAX_FIELDS`] values, packed at positions
    /// `0..values.len()`. Values are masked to 3 bits (`v & 7`).
    pub fn pack_many(values: &[u8]) -> Self {
        debug_assert!(values.len() <= MAX_FIELDS);
        let mut word = Socket::EMPTY;
        for (i, &v) in values.iter().enumerate() {
            word = word.pack(i, v);
        }
        word
    }

    /// Replace the 3-bit field at position `idx` (0..8) with `value & 7`,
    /// returning the updated word.
    pub fn pack(self, idx: usize, value: u8) -> Self {
        let shift = idx * 3;
        let mask = 0x7u32 << shift;
        let bits = ((value & 0x7) as u32) << shift;
        Self((self.0 & !mask) | bits)
    }

    /// Read the 3-bit field at position `idx` (0..8).
    pub fn unpack(self, idx: usize) -> u8 {
        ((self.0 >> (idx * 3)) & 0x7) as u8
    }

    /// Reverse the first `count` fields (`count` in `1..=MAX_FIELDS`); fields
    /// `count..MAX_FIELDS` are zero in the result. `count` outside `1..=8`
    /// returns `self` unchanged.
    pub fn reverse(self, count: usize) -> Self {
        if count < 1 || count > MAX_FIELDS {
            return self;
        }
        let mut out = Socket::EMPTY;
        for i in 0..count {
            out = out.pack(count - 1 - i, self.unpack(i));
        }
        out
    }
}

impl From<u32> for Socket {
    fn from(word: u32) -> Self {
        Self(word)
    }
}

impl From<Socket> for u32 {
    fn from(socket: Socket) -> Self {
        socket.0
    }
}

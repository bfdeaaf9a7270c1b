//! # Packing
//!
//! Bit-level layout of a stored allowance word. The word is 256 bits wide and
//! serialised big-endian into a `BytesN<32>`:
//!
//! | Bits        | Field            |
//! |-------------|------------------|
//! | `[0,104)`   | minimum price    |
//! | `[104,136)` | minimum supply   |
//! | `[136,168)` | maximum supply   |
//! | `[168,256)` | zero             |
//!
//! Legacy records only ever populate the first two fields. Everything above
//! this module deals in typed values; only the storage layer sees words.
//!
//! Arithmetic is done on two `u128` limbs (`low` = bits `[0,128)`, `high` =
//! bits `[128,256)`) so no big-integer host calls are needed.

/// Largest minimum price that fits in the 104-bit price field.
pub const MAX_PACKED_PRICE: u128 = (1u128 << PRICE_BITS) - 1;

const PRICE_BITS: u32 = 104;
const SUPPLY_BITS: u32 = 32;

/// Bits of the minimum supply that land in the low limb (positions 104..128).
const MIN_SUPPLY_LOW_BITS: u32 = 128 - PRICE_BITS;
/// Offset of the maximum supply inside the high limb (bit 136 overall).
const MAX_SUPPLY_HIGH_SHIFT: u32 = PRICE_BITS + 2 * SUPPLY_BITS - 128 - SUPPLY_BITS;

/// Pack a full allowance word. `price` must not exceed [`MAX_PACKED_PRICE`];
/// higher bits are masked off.
pub fn pack(price: u128, minimum_supply: u32, maximum_supply: u32) -> [u8; 32] {
    let low = (price & MAX_PACKED_PRICE) | ((minimum_supply as u128) << PRICE_BITS);
    let high = ((minimum_supply as u128) >> MIN_SUPPLY_LOW_BITS)
        | ((maximum_supply as u128) << MAX_SUPPLY_HIGH_SHIFT);
    to_word(high, low)
}

/// Pack a legacy word: price and minimum supply only.
pub fn pack_legacy(price: u128, minimum_supply: u32) -> [u8; 32] {
    pack(price, minimum_supply, 0)
}

/// Unpack `(minimum_price, minimum_supply, maximum_supply)`.
pub fn unpack(word: &[u8; 32]) -> (u128, u32, u32) {
    let (high, low) = from_word(word);
    let price = low & MAX_PACKED_PRICE;
    let min_low = (low >> PRICE_BITS) as u32;
    let min_high = ((high & ((1u128 << (SUPPLY_BITS - MIN_SUPPLY_LOW_BITS)) - 1)) as u32)
        << MIN_SUPPLY_LOW_BITS;
    let maximum_supply = (high >> MAX_SUPPLY_HIGH_SHIFT) as u32;
    (price, min_low | min_high, maximum_supply)
}

/// Unpack a legacy word, ignoring anything above bit 136.
pub fn unpack_legacy(word: &[u8; 32]) -> (u128, u32) {
    let (price, minimum_supply, _) = unpack(word);
    (price, minimum_supply)
}

fn to_word(high: u128, low: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[..16].copy_from_slice(&high.to_be_bytes());
    word[16..].copy_from_slice(&low.to_be_bytes());
    word
}

fn from_word(word: &[u8; 32]) -> (u128, u128) {
    let mut high = [0u8; 16];
    let mut low = [0u8; 16];
    high.copy_from_slice(&word[..16]);
    low.copy_from_slice(&word[16..]);
    (u128::from_be_bytes(high), u128::from_be_bytes(low))
}

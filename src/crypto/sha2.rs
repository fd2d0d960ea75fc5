// SHA-256 as defined in FIPS 180-4 (https://doi.org/10.6028/NIST.FIPS.180-4).
// Messages are whole bytes; trailing partial bytes cannot be hashed.

use std::io;
use std::num::Wrapping;

use byteorder::{BigEndian, ByteOrder};

pub const BLOCK_LEN: usize = 64;
pub const DIGEST_LEN: usize = 32;

static K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

static INIT_VECTOR: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Number of bytes appended to a `len`-byte message: the 0x80 marker,
/// the zero fill and the 64-bit length field.
///
/// The result is always in `9..=72` and `len + padding_len(len)` is a
/// multiple of 64.
pub fn padding_len(len: u64) -> usize {
    let zeros = ((BLOCK_LEN as u64 - 8 - 1).wrapping_sub(len)) & 63;
    1 + zeros as usize + 8
}

// expand one block into the 64-word message schedule.
fn schedule(block: &[u8]) -> [u32; 64] {
    let mut w = [0u32; 64];
    BigEndian::read_u32_into(block, &mut w[..16]);

    for j in 16..64 {
        let wj15 = w[j - 15];
        let sig0 = wj15.rotate_right(7) ^ wj15.rotate_right(18) ^ (wj15 >> 3);

        let wj2 = w[j - 2];
        let sig1 = wj2.rotate_right(17) ^ wj2.rotate_right(19) ^ (wj2 >> 10);
        w[j] = (Wrapping(sig0) + Wrapping(sig1) + Wrapping(w[j - 7]) + Wrapping(w[j - 16])).0;
    }

    w
}

fn compress(val: &mut [u32; 8], block: &[u8]) {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let w = schedule(block);

    let mut a = val[0];
    let mut b = val[1];
    let mut c = val[2];
    let mut d = val[3];
    let mut e = val[4];
    let mut f = val[5];
    let mut g = val[6];
    let mut h = val[7];

    for j in 0..64 {
        let ch = (e & f) ^ ((!e) & g);
        let maj = (a & b) ^ (a & c) ^ (b & c);

        let sig0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
        let sig1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);

        let t1 = (Wrapping(h) + Wrapping(sig1) + Wrapping(ch) + Wrapping(K[j]) + Wrapping(w[j])).0;

        let t2 = (Wrapping(sig0) + Wrapping(maj)).0;

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    val[0] = val[0].wrapping_add(a);
    val[1] = val[1].wrapping_add(b);
    val[2] = val[2].wrapping_add(c);
    val[3] = val[3].wrapping_add(d);
    val[4] = val[4].wrapping_add(e);
    val[5] = val[5].wrapping_add(f);
    val[6] = val[6].wrapping_add(g);
    val[7] = val[7].wrapping_add(h);
}

/// Incremental SHA-256 state.
///
/// Feed data with `update` (or through `io::Write`), then call `finalize`
/// to get the digest. `finalize` consumes the state; clone it first if an
/// intermediate digest is needed.
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; 8],
    buf: [u8; BLOCK_LEN],
    // buf[..buf_len] is not absorbed yet. always < BLOCK_LEN between calls.
    buf_len: usize,
    // user bytes only, padding is not counted.
    len: u64,
}

impl Sha256 {
    pub fn new() -> Sha256 {
        Sha256 {
            state: INIT_VECTOR,
            buf: [0u8; BLOCK_LEN],
            buf_len: 0,
            len: 0,
        }
    }

    /// Number of message bytes absorbed so far.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn update(&mut self, data: &[u8]) {
        // inputs past 2^61 bytes are out of range; wrap rather than panic.
        self.len = self.len.wrapping_add(data.len() as u64);
        self.absorb(data);
    }

    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        let pad_len = padding_len(self.len);
        let bitlen = self.len << 3;

        let mut pad = [0u8; BLOCK_LEN + 8];
        pad[0] = 0x80;
        BigEndian::write_u64(&mut pad[pad_len - 8..pad_len], bitlen);
        self.absorb(&pad[..pad_len]);

        debug_assert_eq!(self.buf_len, 0);

        let mut ret = [0u8; DIGEST_LEN];
        BigEndian::write_u32_into(&self.state, &mut ret);
        ret
    }

    // runs full blocks through `compress`, keeps the tail in `buf`.
    fn absorb(&mut self, mut data: &[u8]) {
        if self.buf_len > 0 {
            let take = (BLOCK_LEN - self.buf_len).min(data.len());
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
            self.buf_len += take;
            data = &data[take..];

            if self.buf_len < BLOCK_LEN {
                return;
            }
            compress(&mut self.state, &self.buf);
            self.buf_len = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            compress(&mut self.state, block);
        }

        let rest = blocks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.buf_len = rest.len();
    }
}

impl Default for Sha256 {
    fn default() -> Sha256 {
        Sha256::new()
    }
}

impl io::Write for Sha256 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn sha256(msg: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(msg);
    hasher.finalize()
}

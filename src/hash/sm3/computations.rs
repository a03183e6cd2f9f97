use super::{BLOCK_LEN, ROUND_CONSTANTS};

/// Expanded message words for one block.
///
/// `w` holds the 68 words `W[0..68]`, `w_prime` the 64 words
/// `W'[j] = W[j] ^ W[j + 4]`. Both are rebuilt from scratch for every block.
pub(crate) struct Schedule {
    pub w: [u32; 68],
    pub w_prime: [u32; 64],
}

#[inline(always)]
pub fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
pub fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Boolean function FF_j.
#[inline(always)]
pub fn ff(j: usize, a: u32, b: u32, c: u32) -> u32 {
    if j < 16 {
        a ^ b ^ c
    } else {
        (a & b) | (a & c) | (b & c)
    }
}

/// Boolean function GG_j.
#[inline(always)]
pub fn gg(j: usize, e: u32, f: u32, g: u32) -> u32 {
    if j < 16 {
        e ^ f ^ g
    } else {
        (e & f) | ((!e) & g)
    }
}

/// Expands one block into its message schedule.
///
/// `block` must be exactly `BLOCK_LEN` bytes; callers obtain it from
/// `chunks_exact(BLOCK_LEN)`.
pub(crate) fn expand(block: &[u8]) -> Schedule {
    debug_assert_eq!(block.len(), BLOCK_LEN);

    let mut w = [0u32; 68];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)).take(16) {
        *slot = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for j in 16..68 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }

    let mut w_prime = [0u32; 64];

    for (j, slot) in w_prime.iter_mut().enumerate() {
        *slot = w[j] ^ w[j + 4];
    }

    Schedule { w, w_prime }
}

#[cfg(not(feature = "speed"))]
pub(crate) fn all_rounds(state: &mut [u32; 8], schedule: &Schedule) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for j in 0..64 {
        let a12 = a.rotate_left(12);

        let ss1 = a12
            .wrapping_add(e)
            .wrapping_add(ROUND_CONSTANTS[j])
            .rotate_left(7);
        let ss2 = ss1 ^ a12;

        // FF and GG are complete values before any addition.
        let ff = ff(j, a, b, c);
        let gg = gg(j, e, f, g);

        let tt1 = ff
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(schedule.w_prime[j]);

        let tt2 = gg
            .wrapping_add(h)
            .wrapping_add(ss1)
            .wrapping_add(schedule.w[j]);

        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }

    state[0] ^= a;
    state[1] ^= b;
    state[2] ^= c;
    state[3] ^= d;
    state[4] ^= e;
    state[5] ^= f;
    state[6] ^= g;
    state[7] ^= h;
}

#[cfg(feature = "speed")]
pub(crate) fn all_rounds(state: &mut [u32; 8], schedule: &Schedule) {
    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    macro_rules! R {
        ($j:expr) => {{
            let a12 = a.rotate_left(12);

            let ss1 = a12
                .wrapping_add(e)
                .wrapping_add(ROUND_CONSTANTS[$j])
                .rotate_left(7);
            let ss2 = ss1 ^ a12;

            let ff = ff($j, a, b, c);
            let gg = gg($j, e, f, g);

            let tt1 = ff
                .wrapping_add(d)
                .wrapping_add(ss2)
                .wrapping_add(schedule.w_prime[$j]);

            let tt2 = gg
                .wrapping_add(h)
                .wrapping_add(ss1)
                .wrapping_add(schedule.w[$j]);

            d = c;
            c = b.rotate_left(9);
            b = a;
            a = tt1;
            h = g;
            g = f.rotate_left(19);
            f = e;
            e = p0(tt2);
        }};
    }

    R!(0);
    R!(1);
    R!(2);
    R!(3);
    R!(4);
    R!(5);
    R!(6);
    R!(7);
    R!(8);
    R!(9);
    R!(10);
    R!(11);
    R!(12);
    R!(13);
    R!(14);
    R!(15);

    R!(16);
    R!(17);
    R!(18);
    R!(19);
    R!(20);
    R!(21);
    R!(22);
    R!(23);
    R!(24);
    R!(25);
    R!(26);
    R!(27);
    R!(28);
    R!(29);
    R!(30);
    R!(31);

    R!(32);
    R!(33);
    R!(34);
    R!(35);
    R!(36);
    R!(37);
    R!(38);
    R!(39);
    R!(40);
    R!(41);
    R!(42);
    R!(43);
    R!(44);
    R!(45);
    R!(46);
    R!(47);

    R!(48);
    R!(49);
    R!(50);
    R!(51);
    R!(52);
    R!(53);
    R!(54);
    R!(55);
    R!(56);
    R!(57);
    R!(58);
    R!(59);
    R!(60);
    R!(61);
    R!(62);
    R!(63);

    state[0] ^= a;
    state[1] ^= b;
    state[2] ^= c;
    state[3] ^= d;
    state[4] ^= e;
    state[5] ^= f;
    state[6] ^= g;
    state[7] ^= h;
}

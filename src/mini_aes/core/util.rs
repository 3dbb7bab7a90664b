//! Round transforms shared by encryption and decryption. Each is a pure
//! `State -> State` function; states are four bytes, so passing by value is
//! free and keeps every transform testable in isolation.

use super::gf::{gadd, gmul};
use super::state::State;

/// XOR a round key into the state, element-wise. Self-inverse.
#[inline(always)]
pub(crate) fn key_addition(mut state: State, round_key: State) -> State {
    for row in 0..2 {
        for col in 0..2 {
            state[row][col] = gadd(state[row][col], round_key[row][col]);
        }
    }
    state
}

/// Rotate row 1 by one position, which for two columns is a swap. Row 0 is
/// untouched. Applying this twice is the identity.
#[inline(always)]
pub(crate) fn shift_row(mut state: State) -> State {
    state[1].swap(0, 1);
    state
}

/// Diffusion layer: multiply each column by the constant matrix [[3,2],[2,3]]
/// in GF(2^4). That matrix is its own inverse over this field (its square is
/// the identity), so decryption applies the same transform.
#[inline(always)]
pub(crate) fn mix_column(state: State) -> State {
    let mut out = [[0u8; 2]; 2];
    for col in 0..2 {
        out[0][col] = gadd(gmul(3, state[0][col]), gmul(2, state[1][col]));
        out[1][col] = gadd(gmul(2, state[0][col]), gmul(3, state[1][col]));
    }
    out
}

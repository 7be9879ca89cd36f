//! FFI bindings for the C sampling loop.

use crate::random::Xoshiro256StarStar;

#[cfg(c_implementation_active)]
mod ffi {
    extern "C" {
        pub fn mc_count_inside(state: *mut u64, samples: u64) -> u64;
    }
}

/// C sampling loop over the generator's own state.
#[cfg(c_implementation_active)]
pub fn count_inside_c_wrapper(rng: &mut Xoshiro256StarStar, samples: u64) -> u64 {
    // SAFETY: the C side reads and writes exactly the four state lanes.
    unsafe { ffi::mc_count_inside(rng.state_mut().as_mut_ptr(), samples) }
}

#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

#[cfg(not(c_implementation_active))]
pub fn count_inside_c_wrapper(_rng: &mut Xoshiro256StarStar, _samples: u64) -> u64 {
    panic!("C implementation not compiled (requires a C compiler)")
}

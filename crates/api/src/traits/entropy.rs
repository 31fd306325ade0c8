//! Entropy source trait
//!
//! Key generation and nonce generation consume randomness through
//! [`EntropySource`]. Libraries that expect a C calling convention receive a
//! [`RawGenerator`]: a function pointer plus an opaque context pointer.

use crate::error::{Error, Result};
use core::ffi::{c_int, c_void};
use core::marker::PhantomData;

/// C-ABI generator callback: fill `len` bytes at `output`, return 0 on success
pub type RngFn = unsafe extern "C" fn(context: *mut c_void, output: *mut u8, len: usize) -> c_int;

/// A C-ABI generator borrowed from an entropy source
///
/// The context pointer is only valid while the source it was taken from is
/// borrowed, which the lifetime enforces.
#[derive(Clone, Copy)]
pub struct RawGenerator<'a> {
    func: RngFn,
    context: *mut c_void,
    _source: PhantomData<&'a ()>,
}

impl<'a> RawGenerator<'a> {
    /// Wrap a callback and its context
    ///
    /// # Safety
    ///
    /// `context` must stay valid for `'a` and `func` must accept it.
    pub unsafe fn from_raw(func: RngFn, context: *mut c_void) -> Self {
        Self {
            func,
            context,
            _source: PhantomData,
        }
    }

    /// The callback to hand to a library
    pub fn func(&self) -> RngFn {
        self.func
    }

    /// The opaque context to hand to a library alongside [`Self::func`]
    pub fn context(&self) -> *mut c_void {
        self.context
    }

    /// Invoke the callback over `output`, returning its status code
    pub fn generate(&self, output: &mut [u8]) -> c_int {
        // SAFETY: `from_raw` guarantees the context outlives `'a`, and the
        // output pointer/length pair comes from a live slice.
        unsafe { (self.func)(self.context, output.as_mut_ptr(), output.len()) }
    }
}

impl core::fmt::Debug for RawGenerator<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawGenerator")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Generic callback that routes C-ABI requests to `E::fill`
///
/// Failures are reported as -1; a Rust error never unwinds into the caller.
///
/// # Safety
///
/// `context` must point to a live `E` and `output` to `len` writable bytes.
pub unsafe extern "C" fn fill_trampoline<E: EntropySource>(
    context: *mut c_void,
    output: *mut u8,
    len: usize,
) -> c_int {
    if len == 0 {
        return 0;
    }
    if context.is_null() || output.is_null() {
        return -1;
    }

    // SAFETY: guaranteed by the caller contract above.
    let (source, dest) = unsafe {
        (
            &*(context as *const E),
            core::slice::from_raw_parts_mut(output, len),
        )
    };
    match source.fill(dest) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

/// Source of cryptographically strong random bytes
///
/// Implementations never fall back to a weaker generator: when they cannot
/// deliver, they return an error.
pub trait EntropySource {
    /// Fill `dest` completely or fail
    fn fill(&self, dest: &mut [u8]) -> Result<()>;

    /// Produce exactly `len` random bytes
    fn random(&self, len: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; len];
        self.fill(&mut out)?;
        Ok(out)
    }

    /// Produce `len` bytes, retrying an underfill at most `attempts` times
    ///
    /// Errors other than `EntropyExhausted` are returned immediately.
    fn random_with_retry(&self, len: usize, attempts: usize) -> Result<Vec<u8>> {
        let mut last = Error::EntropyExhausted {
            requested: len,
            produced: 0,
        };
        for _ in 0..attempts.max(1) {
            match self.random(len) {
                Ok(bytes) => return Ok(bytes),
                Err(err) if err.is_retryable() => last = err,
                Err(err) => return Err(err),
            }
        }
        Err(last)
    }

    /// A C-ABI view of this source
    fn generator(&self) -> RawGenerator<'_>
    where
        Self: Sized,
    {
        // SAFETY: the context is `self`, borrowed for the generator's lifetime,
        // and the trampoline is instantiated for `Self`.
        unsafe { RawGenerator::from_raw(fill_trampoline::<Self>, self as *const Self as *mut c_void) }
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

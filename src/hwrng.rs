/// Bit 30 of ECX from CPUID leaf 1 advertises the RDRAND instruction.
#[cfg(target_arch = "x86_64")]
const RDRAND_FEATURE_BIT: u32 = 1 << 30;

/// A source of hardware random words.
///
/// One call is one request to the underlying generator. Implementations must not retry
/// internally; callers decide how many failures they tolerate.
pub trait WordSource {
    /// Requests a single word. Returns `None` if this particular request failed, for example
    /// because the generator's entropy pool was momentarily empty.
    fn fetch_word(&mut self) -> Option<u64>;
}

impl<S> WordSource for &mut S
where
    S: WordSource + ?Sized,
{
    fn fetch_word(&mut self) -> Option<u64> {
        (**self).fetch_word()
    }
}

#[derive(Debug)]
/// The RDRAND instruction of x86-64 processors.
///
/// Values of this type can only be obtained through [`Rdrand::detect`], so holding one means the
/// processor supports the instruction.
pub struct Rdrand {
    /// A private field to prevent direct instantiation.
    _probe: (),
}

impl Rdrand {
    /// Returns a handle to the instruction if the processor supports it.
    ///
    /// # Example
    /// ```
    /// # use rdrand_stream::{Rdrand, WordSource};
    /// if let Some(mut rng) = Rdrand::detect() {
    ///     let word = rng.fetch_word();
    ///     println!("{word:?}");
    /// }
    /// ```
    pub fn detect() -> Option<Self> {
        is_supported().then_some(Self { _probe: () })
    }
}

impl WordSource for Rdrand {
    #[inline]
    fn fetch_word(&mut self) -> Option<u64> {
        #[cfg(target_arch = "x86_64")]
        {
            // SAFETY: `Rdrand` is only constructed after CPUID reported support.
            unsafe { rdrand64() }
        }
        #[cfg(not(target_arch = "x86_64"))]
        None
    }
}

/// Reads the processor feature flags once and reports whether RDRAND is available.
///
/// Always `false` on architectures other than x86-64.
pub fn is_supported() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        #[allow(unused_unsafe)]
        // SAFETY: CPUID leaf 1 exists on every x86-64 processor.
        let leaf = unsafe { core::arch::x86_64::__cpuid(1) };
        leaf.ecx & RDRAND_FEATURE_BIT != 0
    }
    #[cfg(not(target_arch = "x86_64"))]
    false
}

#[cfg(target_arch = "x86_64")]
#[inline]
#[target_feature(enable = "rdrand")]
unsafe fn rdrand64() -> Option<u64> {
    let mut value = 0;
    match core::arch::x86_64::_rdrand64_step(&mut value) {
        1 => Some(value),
        _ => None,
    }
}

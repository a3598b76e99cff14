//! Configuration errors raised while building surfaces and transforms.

/// Errors reported eagerly at construction or call time.
///
/// Per-frame updates never produce these; a surface that built successfully
/// always updates successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthError {
    /// Chunk size of zero
    ZeroChunkSize,
    /// Surface resolution of zero
    ZeroResolution,
    /// Resolution must tile exactly into chunks
    ResolutionNotDivisible { resolution: u32, chunk_size: u32 },
    /// Chunk vertex indices would not fit in a `u32` index buffer
    ChunkTooLarge { chunk_size: u32 },
    /// Sample count for the radix-2 transform is not a power of two
    NonPowerOfTwo { len: usize },
    /// Spectrum buffer does not match the field it is synthesized into
    SpectrumSizeMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for SynthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthError::ZeroChunkSize => write!(f, "chunk size must be > 0"),
            SynthError::ZeroResolution => write!(f, "resolution must be > 0"),
            SynthError::ResolutionNotDivisible {
                resolution,
                chunk_size,
            } => write!(
                f,
                "resolution {} is not divisible by chunk size {}",
                resolution, chunk_size
            ),
            SynthError::ChunkTooLarge { chunk_size } => write!(
                f,
                "chunk size {} overflows a 32-bit index buffer",
                chunk_size
            ),
            SynthError::NonPowerOfTwo { len } => {
                write!(f, "sample count must be a power of two, got {}", len)
            }
            SynthError::SpectrumSizeMismatch { expected, actual } => write!(
                f,
                "spectrum has {} bins, field expects {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for SynthError {}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SynthError>;

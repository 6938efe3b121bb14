//! Indentation configuration for code generation.

/// Width of one indent level, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    width: usize,
}

impl Indent {
    /// 2-space indentation (TypeScript declaration files).
    pub const TYPESCRIPT: Self = Self::spaces(2);

    pub const fn spaces(width: usize) -> Self {
        Self { width }
    }

    /// Append `level` indent steps to `buffer`.
    pub(crate) fn write(&self, buffer: &mut String, level: usize) {
        buffer.extend(std::iter::repeat_n(' ', self.width * level));
    }
}

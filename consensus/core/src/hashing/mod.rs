use npscoin_hashes::HasherBase;

pub mod header;
pub mod tx;

pub trait HasherExtensions {
    /// Writes the len as a compact size (Bitcoin `CompactSize`) integer
    fn write_var_int(&mut self, len: u64) -> &mut Self;

    /// Writes the u32 as a little endian u8 array
    fn write_u32(&mut self, element: u32) -> &mut Self;

    /// Writes the i32 as a little endian u8 array
    fn write_i32(&mut self, element: i32) -> &mut Self;

    /// Writes the u64 as a little endian u8 array
    fn write_u64(&mut self, element: u64) -> &mut Self;

    /// Writes the number of bytes followed by the bytes themselves
    fn write_var_bytes(&mut self, bytes: &[u8]) -> &mut Self;
}

/// Fails at compile time if `usize::MAX > u64::MAX`.
/// If `usize` will ever grow larger than `u64`, we need to verify
/// that the lossy conversion in `write_var_bytes` remains precise.
const _: usize = u64::MAX as usize - usize::MAX;

impl<T: HasherBase> HasherExtensions for T {
    #[inline]
    fn write_var_int(&mut self, len: u64) -> &mut Self {
        match len {
            0..=0xfc => self.update([len as u8]),
            0xfd..=0xffff => self.update([0xfd]).update((len as u16).to_le_bytes()),
            0x10000..=0xffff_ffff => self.update([0xfe]).update((len as u32).to_le_bytes()),
            _ => self.update([0xff]).update(len.to_le_bytes()),
        }
    }

    #[inline(always)]
    fn write_u32(&mut self, element: u32) -> &mut Self {
        self.update(element.to_le_bytes())
    }

    #[inline(always)]
    fn write_i32(&mut self, element: i32) -> &mut Self {
        self.update(element.to_le_bytes())
    }

    #[inline(always)]
    fn write_u64(&mut self, element: u64) -> &mut Self {
        self.update(element.to_le_bytes())
    }

    #[inline(always)]
    fn write_var_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_var_int(bytes.len() as u64).update(bytes)
    }
}

/// Collects everything written into it. Used to expose the exact bytes fed to a hasher.
#[derive(Clone, Default, Debug)]
pub struct Serializer(Vec<u8>);

impl Serializer {
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl HasherBase for Serializer {
    fn update<A: AsRef<[u8]>>(&mut self, data: A) -> &mut Self {
        self.0.extend_from_slice(data.as_ref());
        self
    }
}

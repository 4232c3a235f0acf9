//! Minimal script construction used for coinbase and genesis outputs.

pub mod opcodes {
    pub const OP_0: u8 = 0x00;
    pub const OP_PUSHDATA1: u8 = 0x4c;
    pub const OP_PUSHDATA2: u8 = 0x4d;
    pub const OP_PUSHDATA4: u8 = 0x4e;
    pub const OP_1NEGATE: u8 = 0x4f;
    pub const OP_1: u8 = 0x51;
    pub const OP_16: u8 = 0x60;
    pub const OP_DUP: u8 = 0x76;
    pub const OP_EQUAL: u8 = 0x87;
    pub const OP_EQUALVERIFY: u8 = 0x88;
    pub const OP_HASH160: u8 = 0xa9;
    pub const OP_CHECKSIG: u8 = 0xac;
}

use opcodes::*;

/// A script number, serialized as minimal little-endian sign-magnitude bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptNum(pub i64);

impl ScriptNum {
    pub fn serialize(self) -> Vec<u8> {
        if self.0 == 0 {
            return vec![];
        }

        let negative = self.0 < 0;
        let mut abs = self.0.unsigned_abs();
        let mut result = Vec::with_capacity(9);
        while abs > 0 {
            result.push((abs & 0xff) as u8);
            abs >>= 8;
        }

        // The most significant byte carries the sign, so add an extra byte when it is already in use
        let last = result.len() - 1;
        if result[last] & 0x80 != 0 {
            result.push(if negative { 0x80 } else { 0x00 });
        } else if negative {
            result[last] |= 0x80;
        }
        result
    }
}

/// Builds raw script bytes following the legacy push rules.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn drain(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.script)
    }

    pub fn add_op(&mut self, opcode: u8) -> &mut Self {
        self.script.push(opcode);
        self
    }

    /// Pushes `data` with the shortest length prefix able to describe it. Unlike
    /// canonical pushes, small values are never folded into numeric opcodes.
    pub fn add_data(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.script.push(len as u8);
        } else if len <= u8::MAX as usize {
            self.script.push(OP_PUSHDATA1);
            self.script.push(len as u8);
        } else if len <= u16::MAX as usize {
            self.script.push(OP_PUSHDATA2);
            self.script.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.script.push(OP_PUSHDATA4);
            self.script.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.script.extend_from_slice(data);
        self
    }

    /// Pushes an integer, using the small-integer opcodes for -1 and 0..=16.
    pub fn add_i64(&mut self, value: i64) -> &mut Self {
        match value {
            0 => self.add_op(OP_0),
            -1 => self.add_op(OP_1NEGATE),
            1..=16 => self.add_op(OP_1 + (value - 1) as u8),
            _ => self.add_data(&ScriptNum(value).serialize()),
        }
    }

    /// Pushes a script number as data, regardless of its value.
    pub fn add_script_num(&mut self, num: ScriptNum) -> &mut Self {
        self.add_data(&num.serialize())
    }
}

/// Builds a pay-to-pubkey script: `<pubkey> OP_CHECKSIG`
pub fn pay_to_pub_key(pub_key: &[u8]) -> Vec<u8> {
    ScriptBuilder::new().add_data(pub_key).add_op(OP_CHECKSIG).drain()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_num_serialize() {
        let tests: Vec<(i64, Vec<u8>)> = vec![
            (0, vec![]),
            (1, vec![0x01]),
            (-1, vec![0x81]),
            (127, vec![0x7f]),
            (-127, vec![0xff]),
            (128, vec![0x80, 0x00]),
            (-128, vec![0x80, 0x80]),
            (255, vec![0xff, 0x00]),
            (256, vec![0x00, 0x01]),
            (-32768, vec![0x00, 0x80, 0x80]),
            (486604799, vec![0xff, 0xff, 0x00, 0x1d]),
        ];
        for (num, expected) in tests {
            assert_eq!(ScriptNum(num).serialize(), expected, "serializing {num}");
        }
    }

    #[test]
    fn test_push_prefixes() {
        assert_eq!(ScriptBuilder::new().add_data(&[]).script(), &[0x00]);
        assert_eq!(ScriptBuilder::new().add_data(&[7]).script(), &[0x01, 0x07]);

        let data = vec![0xaa; 75];
        assert_eq!(ScriptBuilder::new().add_data(&data).script()[0], 75);

        let data = vec![0xaa; 76];
        assert_eq!(&ScriptBuilder::new().add_data(&data).script()[..2], &[OP_PUSHDATA1, 76]);

        let data = vec![0xaa; 256];
        assert_eq!(&ScriptBuilder::new().add_data(&data).script()[..3], &[OP_PUSHDATA2, 0x00, 0x01]);

        let data = vec![0xaa; 65536];
        let script = ScriptBuilder::new().add_data(&data).drain();
        assert_eq!(&script[..5], &[OP_PUSHDATA4, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(script.len(), 5 + 65536);
    }

    #[test]
    fn test_small_integers() {
        let mut builder = ScriptBuilder::new();
        builder.add_i64(0).add_i64(-1).add_i64(1).add_i64(16).add_i64(17);
        assert_eq!(builder.script(), &[OP_0, OP_1NEGATE, OP_1, OP_16, 0x01, 0x11]);

        // Script numbers are always pushed as data
        assert_eq!(ScriptBuilder::new().add_script_num(ScriptNum(4)).script(), &[0x01, 0x04]);
    }

    #[test]
    fn test_pay_to_pub_key() {
        let pub_key = [0x02; 33];
        let script = pay_to_pub_key(&pub_key);
        assert_eq!(script.len(), 35);
        assert_eq!(script[0], 33);
        assert_eq!(script[34], OP_CHECKSIG);
    }
}

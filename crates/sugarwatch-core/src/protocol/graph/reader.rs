use super::error::GraphError;

pub struct GraphReader<'a> {
    payload: &'a [u8],
}

impl<'a> GraphReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), GraphError> {
        if self.payload.len() < needed {
            return Err(GraphError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, GraphError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(GraphError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u16_le(&self, range: std::ops::Range<usize>) -> Result<u16, GraphError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(GraphError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32_le(&self, range: std::ops::Range<usize>) -> Result<u32, GraphError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 4 {
            return Err(GraphError::TooShort {
                needed: 4,
                actual: bytes.len(),
            });
        }
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], GraphError> {
        self.payload
            .get(range.clone())
            .ok_or(GraphError::TooShort {
                needed: range.end,
                actual: self.payload.len(),
            })
    }
}

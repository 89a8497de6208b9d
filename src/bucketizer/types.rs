/// Point indices sharing one label value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub label: i32,
    pub indices: Vec<u32>,
}

impl Bucket {
    pub fn new(label: i32) -> Self {
        Self {
            label,
            indices: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

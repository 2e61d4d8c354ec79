use crate::types::{Node, Value};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BstNode {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: Value,
}

impl BstNode {
    pub fn new(v: Value) -> Self {
        Self { l: None, r: None, v }
    }
}

impl Node for BstNode {
    fn value(&self) -> Value {
        self.v
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}
